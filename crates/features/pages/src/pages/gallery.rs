use super::common::CallToAction;
use dioxus::prelude::*;
use ocean_domain::content::{Comparison, Highlight, Media, MediaKind};
use ocean_domain::routes::{Anchor, Route};
use ocean_ui::ButtonVariant;
use ocean_ui::components::{HeroAction, PageHeader, SectionContainer};

pub const COMPARISONS: &[Comparison] = &[
    Comparison {
        model_image: "/game_screenshots/Haemulon%20steindachneri.jpeg",
        real_image: "/real_fish/haemulon.jpeg",
        title: "Haemulon steindachneri",
        common_name: "Latin Grunt",
        description: "VR model compared to real species - accurate coloring and morphology",
    },
    Comparison {
        model_image: "/Thalassoma%20lucasanum%20model.jpeg",
        real_image: "/Thalassoma%20lucasanum.jpeg",
        title: "Thalassoma lucasanum",
        common_name: "Cortez Rainbow Wrasse",
        description: "Low-poly 3D model showcasing vibrant coloration - turquoise head, yellow band, and pink body characteristic of this Pacific reef species",
    },
    Comparison {
        model_image: "/osa%20oceanic%20floor%20model.jpeg",
        real_image: "/osa-panama.jpeg",
        title: "Osa Peninsula Coast Recreation",
        common_name: "Pacific Coast of Costa Rica",
        description: "VR recreation of the Osa Peninsula coastal section using NASA bathymetric data - comparing our 3D terrain model to the actual geographic location",
    },
];

pub const MEDIA: &[Media] = &[
    Media {
        src: "/game_screenshots/marine-biodiversity.jpg",
        title: "Marine Biodiversity",
        description: "Diverse ecosystem with multiple species interactions",
        kind: MediaKind::Image,
    },
    Media {
        src: "/game_screenshots/demo-showcase.mp4",
        title: "Full VR Demo",
        description: "Complete walkthrough of the underwater experience",
        kind: MediaKind::Video,
    },
];

pub const TECHNICAL: &[Highlight] = &[
    Highlight {
        icon: "🎮",
        title: "Real-Time Rendering",
        description: "Optimized for VR with 90+ FPS on Quest 2/3",
    },
    Highlight {
        icon: "🔬",
        title: "Scientific Accuracy",
        description: "Models based on marine biology research and NASA data",
    },
    Highlight {
        icon: "🌊",
        title: "Dynamic Physics",
        description: "Realistic water currents and fish behavior AI",
    },
];

const TAGS: &[&str] = &["Accuracy: 95%+", "Based on: Scientific Data", "Region: Pacific Costa Rica"];

const VIDEO_POSTER: &str = "/hero-ocean-depths.jpg";

#[component]
fn ComparisonRow(comparison: Comparison) -> Element {
    let model_alt = format!("{} VR model", comparison.title);
    let real_alt = format!("{} real photo", comparison.title);

    rsx! {
        article { class: "comparison card-solid",
            div { class: "comparison-pair",
                figure { class: "comparison-frame",
                    img { class: "cover", src: comparison.model_image, alt: "{model_alt}", "loading": "lazy" }
                    figcaption { class: "comparison-label", "VR MODEL" }
                }
                figure { class: "comparison-frame",
                    img { class: "cover", src: comparison.real_image, alt: "{real_alt}", "loading": "lazy" }
                    figcaption { class: "comparison-label comparison-label-real", "REAL PHOTO" }
                }
            }
            div { class: "comparison-body",
                h3 { class: "comparison-title text-accent", {comparison.title} }
                p { class: "comparison-common text-primary",
                    span { class: "text-muted", "Common Name: " }
                    {comparison.common_name}
                }
                p { class: "text-secondary", {comparison.description} }
                div { class: "pills",
                    for (index, tag) in TAGS.iter().enumerate() {
                        span { key: "{index}", class: "tag", {*tag} }
                    }
                }
            }
        }
    }
}

#[component]
fn MediaTile(media: Media) -> Element {
    rsx! {
        figure { class: "media-tile card-solid card-hover",
            div { class: "media-frame",
                if media.kind == MediaKind::Video {
                    video { class: "cover", "controls": "true", "poster": VIDEO_POSTER,
                        source { src: media.src, "type": "video/mp4" }
                    }
                } else {
                    img { class: "cover zoom", src: media.src, alt: media.title, "loading": "lazy" }
                }
            }
            figcaption { class: "media-caption",
                h3 { class: "text-primary", {media.title} }
                p { class: "text-secondary", {media.description} }
            }
        }
    }
}

#[component]
pub fn GalleryPage() -> Element {
    let actions = vec![
        HeroAction::link("Download Demo", Anchor::Download.href()),
        HeroAction::link("Learn More", Route::World.path()).variant(ButtonVariant::Outline),
    ];

    rsx! {
        div { class: "gallery-banner",
            img { class: "cover", src: "/game_screenshots/oceanic_image.jpeg", alt: "VR Gallery" }
            div { class: "banner-shade" }
            div { class: "banner-text",
                h2 { class: "banner-title text-primary", "VR Gallery" }
                p { class: "text-secondary", "Game vs. Reality" }
            }
        }
        div { class: "page-container",
            PageHeader {
                title: Route::Gallery.title(),
                description: "Explore our scientifically accurate 3D models compared to real ocean life. Built using NASA data and marine biology research.",
            }
            SectionContainer {
                title: "Model vs. Reality Comparison",
                subtitle: "Our VR models are based on real species data and scientific references",
                class: "page-block",
                div { class: "stack",
                    for (index, comparison) in COMPARISONS.iter().enumerate() {
                        ComparisonRow { key: "{index}", comparison: *comparison }
                    }
                }
            }
            SectionContainer { title: "More From Our VR World", class: "page-block",
                div { class: "grid grid-cols-2",
                    for (index, media) in MEDIA.iter().enumerate() {
                        MediaTile { key: "{index}", media: *media }
                    }
                }
            }
            SectionContainer { title: "Technical Excellence", class: "page-block",
                div { class: "grid grid-cols-3",
                    for (index, item) in TECHNICAL.iter().enumerate() {
                        div { key: "{index}", class: "solution card-solid text-center",
                            div { class: "solution-icon", {item.icon} }
                            h3 { class: "solution-title text-accent", {item.title} }
                            p { class: "text-secondary", {item.description} }
                        }
                    }
                }
            }
            CallToAction {
                title: "Experience It Yourself",
                text: "Download the demo and explore our scientifically accurate underwater world in VR",
                actions: actions,
            }
        }
    }
}
