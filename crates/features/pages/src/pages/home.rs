use super::seas::STATS;
use super::team::MEMBERS;
use dioxus::prelude::*;
use ocean_domain::content::{Feature, Image, ResourceKind, ResourceLink};
use ocean_domain::routes::{Anchor, Route};
use ocean_ui::components::{
    Button, DownloadSection, FeatureCard, Hero, HeroAction, Resources, Section, SectionContainer,
    StatsGrid, TeamGrid, VideoShowcase,
};
use ocean_ui::{ButtonAction, ButtonVariant};

const LOGO: Image = Image { src: "/deep-ocean.png", alt: "Deep Ocean Logo" };
const BACKDROP: &str = "/hero-ocean-depths.jpg";
const DEMO_VIDEO: &str = "/game_screenshots/demo-showcase.mp4";

pub const EXPLORE: &[Feature] = &[
    Feature {
        icon: "🗺️",
        title: "Built on NASA Data",
        description: "Digital elevation models and bathymetry turned into an ocean floor you can swim through.",
        image: Some(Image { src: "/osa-panama.jpeg", alt: "Osa Peninsula coastline" }),
    },
    Feature {
        icon: "🐠",
        title: "Living Reefs",
        description: "Species modelled after real Pacific reef fish, compared side by side in the gallery.",
        image: Some(Image {
            src: "/game_screenshots/marine-biodiversity.jpg",
            alt: "Marine biodiversity in the VR world",
        }),
    },
    Feature {
        icon: "🥽",
        title: "Made for VR",
        description: "Godot Engine and OpenXR deliver a free-roaming experience on standalone and PC headsets.",
        image: None,
    },
];

const WORLD_TEXT: &[&str] = &[
    "Dive along the Pacific coast of Costa Rica, rebuilt from NASA bathymetric data with every trench and ridge in place.",
];
const SEAS_TEXT: &[&str] = &[
    "Oceans regulate the climate, produce half of our oxygen and feed billions of people. Learn why they matter.",
];
const CLIMATE_TEXT: &[&str] = &[
    "Warming, acidification and rising seas are changing the ocean. See what is at stake and what we can do.",
];

pub const RESOURCES: &[ResourceLink] = &[
    ResourceLink {
        title: "NASA Space Apps Challenge",
        description: "The hackathon this project was built for",
        url: "https://www.spaceappschallenge.org/",
        icon: Some("🚀"),
        kind: ResourceKind::External,
    },
    ResourceLink {
        title: "NASA Earthdata",
        description: "Elevation and bathymetry datasets behind the terrain",
        url: "https://www.earthdata.nasa.gov/",
        icon: Some("🛰️"),
        kind: ResourceKind::External,
    },
    ResourceLink {
        title: "Godot Engine",
        description: "The open source engine running the VR world",
        url: "https://godotengine.org/",
        icon: None,
        kind: ResourceKind::External,
    },
    ResourceLink {
        title: "OpenXR",
        description: "The cross-platform standard for headset support",
        url: "https://www.khronos.org/openxr/",
        icon: None,
        kind: ResourceKind::Document,
    },
    ResourceLink {
        title: "VR Gallery",
        description: "Our models next to the real species they recreate",
        url: "/gallery",
        icon: Some("🖼️"),
        kind: ResourceKind::Other,
    },
];

/// Landing page: hero, entry points to every other page, the demo video,
/// the team teaser and the download section.
#[component]
pub fn HomePage(#[props(into)] brand: String, #[props(into)] team: String) -> Element {
    let subtitle = format!("by {team}");
    let actions = vec![
        HeroAction::link("Explore Now", Anchor::Explore.href()),
        HeroAction::link("Download VR Demo", Anchor::Download.href()).variant(ButtonVariant::Outline),
    ];

    rsx! {
        Hero {
            title: brand,
            subtitle: subtitle,
            description: Route::Home.description(),
            actions: actions,
            image: LOGO,
            background_image: BACKDROP,
        }
        div { class: "container",
            SectionContainer {
                id: Anchor::Explore.id(),
                title: "Explore the Deep",
                subtitle: "Science, technology and the ocean in one experience",
                div { class: "grid grid-cols-3",
                    for (index, feature) in EXPLORE.iter().enumerate() {
                        FeatureCard { key: "{index}", feature: *feature }
                    }
                }
            }
            SectionContainer {
                id: Anchor::VirtualSpaces.id(),
                title: "Virtual Spaces",
                subtitle: "Explore our immersive environments",
                div { class: "stack",
                    Section {
                        title: Route::World.title(),
                        paragraphs: WORLD_TEXT,
                        icon: "🌍",
                        action: HeroAction::link("Enter the World", Route::World.path()),
                    }
                    Section {
                        title: Route::Seas.title(),
                        paragraphs: SEAS_TEXT,
                        icon: "🌊",
                        action: HeroAction::link("Discover Our Seas", Route::Seas.path()),
                        reverse: true,
                    }
                    Section {
                        title: Route::Climate.title(),
                        paragraphs: CLIMATE_TEXT,
                        icon: "🔥",
                        action: HeroAction::link("Climate Impact", Route::Climate.path()),
                    }
                }
            }
            SectionContainer {
                VideoShowcase {
                    src: DEMO_VIDEO,
                    title: "Deep Ocean VR Demo",
                    description: "A first look at the underwater world running on a headset",
                }
            }
            SectionContainer { title: "Why the Ocean Matters",
                StatsGrid { stats: STATS }
            }
            SectionContainer {
                id: Anchor::Team.id(),
                title: "Meet the Team",
                subtitle: Route::Team.description(),
                TeamGrid { members: MEMBERS }
                div { class: "text-center band-footer",
                    Button { action: ButtonAction::link(Route::Team.path()), variant: ButtonVariant::Outline,
                        "About the Team"
                    }
                }
            }
        }
        DownloadSection {
            title: "Download Deep Ocean VR",
            description: "Experience the ocean depths in virtual reality",
            coming_soon: true,
        }
        div { class: "container",
            Resources {
                resources: RESOURCES,
                description: "Data, tools and events behind the project",
            }
        }
    }
}
