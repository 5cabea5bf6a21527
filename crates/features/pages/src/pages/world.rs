use super::common::{CallToAction, Checklist};
use dioxus::prelude::*;
use ocean_domain::content::{Feature, Highlight};
use ocean_domain::routes::{Anchor, Route};
use ocean_ui::components::{FeatureCard, HeroAction, PageHeader};

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "🗺️",
        title: "NASA Data Integration",
        description: "Our virtual world is built on authentic NASA digital elevation models and bathymetric data. Every underwater mountain, trench, and valley is accurately represented, giving you a scientifically precise view of the ocean floor that few have ever witnessed.",
        image: None,
    },
    Feature {
        icon: "🎮",
        title: "Immersive VR Experience",
        description: "Using Godot Engine and OpenXR technology, we've created a fully immersive virtual reality experience. Navigate freely through the depths, interact with the environment, and experience the ocean in ways that were previously impossible.",
        image: None,
    },
    Feature {
        icon: "🔬",
        title: "Scientific Accuracy",
        description: "Every detail in our virtual world is scientifically accurate. From geological formations to lighting effects that simulate different ocean depths, we've worked to ensure an educational experience that doesn't compromise on realism.",
        image: None,
    },
    Feature {
        icon: "🌊",
        title: "Dynamic Environments",
        description: "Experience dynamic underwater environments with realistic physics, water effects, and atmospheric conditions. Our world responds to your presence, creating an engaging and lifelike simulation of ocean exploration.",
        image: None,
    },
];

pub const KEY_FEATURES: &[Highlight] = &[
    Highlight {
        icon: "✓",
        title: "Real-time 3D Rendering",
        description: "High-performance graphics optimized for VR headsets",
    },
    Highlight {
        icon: "✓",
        title: "Interactive Exploration",
        description: "Free movement and interaction with the environment",
    },
    Highlight {
        icon: "✓",
        title: "Educational Content",
        description: "Learn about ocean geography and marine ecosystems",
    },
    Highlight {
        icon: "✓",
        title: "AI-Powered Guides",
        description: "Voice-activated AI assistants to enhance your journey",
    },
];

#[component]
pub fn WorldPage() -> Element {
    let actions = vec![
        HeroAction::link("Discover Our Seas", Route::Seas.path()),
        HeroAction::link("Meet the Team", Anchor::Team.href()),
    ];

    rsx! {
        div { class: "page-container",
            PageHeader {
                title: Route::World.title(),
                description: Route::World.description(),
                icon: "🌍",
            }
            div { class: "grid grid-cols-2 page-block",
                for (index, feature) in FEATURES.iter().enumerate() {
                    FeatureCard { key: "{index}", feature: *feature }
                }
            }
            div { class: "page-block",
                Checklist { title: "Key Features", items: KEY_FEATURES }
            }
            CallToAction {
                title: "Ready to Dive In?",
                text: "Experience the underwater world like never before with cutting-edge VR technology and real scientific data.",
                actions: actions,
            }
        }
    }
}
