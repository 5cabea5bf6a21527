use dioxus::prelude::*;
use ocean_domain::content::TeamMember;
use ocean_domain::routes::Route;
use ocean_ui::components::{PageHeader, TeamGrid};

pub const TEAM_NAME: &str = "Chifrijo Cósmico";

/// Shared with the team teaser on the home page.
pub const MEMBERS: &[TeamMember] = &[
    TeamMember {
        name: "Oscar Quesada Webb",
        role: "Team Lead",
        icon: "👨‍💻",
        responsibilities: &["Direction of the project", "VR Godot development"],
    },
    TeamMember {
        name: "Luis Carlos Quesada",
        role: "AI Engineer & Web Developer",
        icon: "🤖",
        responsibilities: &["AI Engineering", "Web page development"],
    },
    TeamMember {
        name: "Archibald Emmanuel Carrion Claeys",
        role: "3D Mesh Engineer",
        icon: "🗺️",
        responsibilities: &[
            "Generating Godot compatible meshes",
            "Digital elevation model data processing",
            "NASA data integration",
        ],
    },
    TeamMember {
        name: "Camila Fariñas",
        role: "Data Visualization Specialist",
        icon: "🌊",
        responsibilities: &[
            "Using NASA data to produce ocean renders",
            "Coast of Costa Rica visualizations",
        ],
    },
    TeamMember {
        name: "Javier Solano Saltachín",
        role: "Jr Developer",
        icon: "🎙️",
        responsibilities: &[
            "Speech recognition integration",
            "LLM integration for VR immersion",
            "UX enhancement",
        ],
    },
];

const ABOUT: &[&str] = &[
    "We are a multidisciplinary team united by our passion for ocean exploration and cutting-edge technology. Our project combines expertise in VR development, AI engineering, 3D visualization, and data science to create an immersive educational experience about our planet's oceans.",
    "Participating in the NASA Space Apps Challenge 2025, we're committed to using real scientific data to raise awareness about ocean conservation and the impacts of climate change.",
];

#[component]
pub fn TeamPage() -> Element {
    rsx! {
        div { class: "page-container",
            div { class: "team-logo",
                img { class: "contain", src: "/team-logo.jpeg", alt: "Chifrijo Cósmico Logo" }
            }
            PageHeader { title: Route::Team.title(), description: Route::Team.description() }
            div { class: "page-block",
                TeamGrid { members: MEMBERS }
            }
            div { class: "prose card-gradient",
                h2 { class: "prose-title text-gradient", {TEAM_NAME} }
                for (index, paragraph) in ABOUT.iter().enumerate() {
                    p { key: "{index}", class: "lead text-secondary", {*paragraph} }
                }
            }
        }
    }
}
