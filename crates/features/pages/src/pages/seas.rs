use super::common::{CallToAction, TopicBlock};
use dioxus::prelude::*;
use ocean_domain::content::{Stat, Topic};
use ocean_domain::routes::Route;
use ocean_ui::components::{HeroAction, HeroImageBox, PageHeader, StatsGrid};
use ocean_ui::{ButtonVariant, HeroSize};

pub const STATS: &[Stat] = &[
    Stat::new("71%", "Of Earth's Surface"),
    Stat::new("97%", "Of Earth's Water"),
    Stat::new("50%", "Of Oxygen Produced"),
    Stat::new("3B+", "People Depend On It"),
];

pub const TOPICS: &[Topic] = &[
    Topic {
        icon: "🐠",
        title: "Biodiversity Hotspot",
        paragraphs: &[
            "Oceans are home to an estimated 700,000 to 1 million species, with scientists believing that up to two-thirds of marine species are still waiting to be discovered. From microscopic plankton to massive blue whales, the ocean supports the most diverse ecosystems on Earth.",
            "Coral reefs alone, covering less than 0.1% of the ocean floor, support approximately 25% of all marine species. These underwater cities are crucial for maintaining the delicate balance of marine life.",
        ],
        impact: None,
    },
    Topic {
        icon: "🌡️",
        title: "Climate Regulation",
        paragraphs: &[
            "Oceans act as the planet's thermostat, absorbing about 30% of carbon dioxide produced by humans and storing heat that would otherwise remain in the atmosphere. This absorption helps buffer the rate of climate change, though it comes at a cost.",
            "Ocean currents distribute heat around the globe, influencing weather patterns and climate zones. The Gulf Stream, for example, carries warm water from the tropics to the North Atlantic, moderating the climate of Western Europe.",
        ],
        impact: None,
    },
    Topic {
        icon: "💨",
        title: "Oxygen Production",
        paragraphs: &[
            "Marine plants, particularly phytoplankton, produce approximately 50-80% of the oxygen in Earth's atmosphere. These microscopic organisms are the ocean's invisible forests, conducting photosynthesis on a massive scale.",
            "Every second breath you take comes from the ocean. This vital process has been occurring for billions of years, making life on land possible and sustaining it to this day.",
        ],
        impact: None,
    },
    Topic {
        icon: "🍽️",
        title: "Food Security",
        paragraphs: &[
            "Over 3 billion people rely on marine and coastal biodiversity for their livelihoods. Fish provides about 16% of all animal protein consumed by humans, and in some coastal and island nations, this can be as high as 50-70%.",
            "Sustainable fishing practices are essential to maintaining these vital food sources for future generations, supporting both nutrition and economic stability in coastal communities worldwide.",
        ],
        impact: None,
    },
];

#[component]
pub fn SeasPage() -> Element {
    let actions = vec![
        HeroAction::link("Climate Impact", Route::Climate.path()),
        HeroAction::link("Explore Virtual World", Route::World.path())
            .variant(ButtonVariant::Outline),
    ];

    rsx! {
        div { class: "page-container",
            div { class: "page-intro",
                HeroImageBox { icon: "🌊", size: HeroSize::Lg, class: "intro-box" }
                PageHeader { title: Route::Seas.title(), description: Route::Seas.description() }
            }
            StatsGrid { stats: STATS, class: "page-block" }
            div { class: "stack page-block",
                for (index, topic) in TOPICS.iter().enumerate() {
                    TopicBlock { key: "{index}", topic: *topic }
                }
            }
            CallToAction {
                title: "Understanding Leads to Action",
                text: "Learn more about how climate change is affecting these vital ocean systems and what we can do to protect them.",
                actions: actions,
            }
        }
    }
}
