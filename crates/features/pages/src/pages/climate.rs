use super::common::{CallToAction, TopicBlock};
use dioxus::prelude::*;
use ocean_domain::content::{Highlight, Stat, Topic};
use ocean_domain::routes::Route;
use ocean_ui::components::{HeroAction, PageHeader, SectionContainer, StatsGrid};
use ocean_ui::{ButtonVariant, GridColumns};

pub const CRITICAL_CHANGES: &[Stat] = &[
    Stat::new("+1.1°C", "Ocean Temperature Rise").with_sublabel("Since pre-industrial times"),
    Stat::new("3.3mm", "Sea Level Rise/Year").with_sublabel("Rate is accelerating"),
    Stat::new("30%", "More Acidic").with_sublabel("Than in 1750"),
];

pub const IMPACTS: &[Topic] = &[
    Topic {
        icon: "🌡️",
        title: "Rising Ocean Temperatures",
        paragraphs: &[
            "The ocean has absorbed more than 90% of the excess heat trapped by greenhouse gases. This warming is not uniform but affects different regions and depths variably, disrupting marine ecosystems that have evolved over millions of years.",
            "Warmer waters hold less oxygen, creating \"dead zones\" where marine life struggles to survive. This also increases the frequency and intensity of marine heat waves, causing mass die-offs of fish, corals, and other species.",
        ],
        impact: Some("Coral bleaching, species migration, disrupted food chains"),
    },
    Topic {
        icon: "📈",
        title: "Sea Level Rise",
        paragraphs: &[
            "Global sea levels have risen about 8-9 inches (21-24 cm) since 1880, with about a third of that occurring in just the last 25 years. This rise comes from two main sources: thermal expansion as water warms and melting ice from glaciers and polar ice sheets.",
            "Coastal communities face increasing risks from flooding, storm surges, and erosion. Low-lying islands and coastal cities are particularly vulnerable, with millions of people at risk of displacement.",
        ],
        impact: Some("Coastal flooding, habitat loss, infrastructure damage, forced migration"),
    },
    Topic {
        icon: "🧪",
        title: "Ocean Acidification",
        paragraphs: &[
            "As the ocean absorbs excess CO2 from the atmosphere, it undergoes chemical changes that make it more acidic. The ocean's pH has dropped by 0.1 units since pre-industrial times, representing a 30% increase in acidity.",
            "This \"other CO2 problem\" makes it harder for marine organisms like corals, shellfish, and some plankton to build their calcium carbonate shells and skeletons. This affects the entire marine food web, from tiny pteropods to large fish species.",
        ],
        impact: Some("Shell dissolution, coral reef degradation, disrupted marine food webs"),
    },
    Topic {
        icon: "❄️",
        title: "Melting Polar Ice",
        paragraphs: &[
            "Arctic sea ice is declining at an alarming rate of about 13% per decade. The ice acts as a giant mirror, reflecting sunlight back into space. As it melts, darker ocean water absorbs more heat, accelerating warming in a dangerous feedback loop.",
            "The loss of sea ice affects polar ecosystems, from algae to polar bears, and contributes to global sea level rise. Changes in polar regions also affect ocean circulation patterns that regulate climate worldwide.",
        ],
        impact: Some("Ecosystem disruption, accelerated warming, sea level contribution"),
    },
    Topic {
        icon: "🌀",
        title: "Extreme Weather Events",
        paragraphs: &[
            "Warmer ocean temperatures fuel more intense hurricanes, typhoons, and cyclones. These storms draw energy from warm ocean water, and as that water heats up, storms can intensify more rapidly and cause greater damage.",
            "Changes in ocean temperatures also affect atmospheric circulation patterns, leading to altered precipitation patterns, more severe droughts in some areas, and increased flooding in others.",
        ],
        impact: Some("Intensified storms, altered weather patterns, increased natural disasters"),
    },
];

pub const SOLUTIONS: &[Highlight] = &[
    Highlight {
        icon: "🌱",
        title: "Reduce Carbon Emissions",
        description: "Transition to renewable energy sources and reduce fossil fuel dependence",
    },
    Highlight {
        icon: "🛡️",
        title: "Protect Marine Ecosystems",
        description: "Establish marine protected areas and reduce overfishing",
    },
    Highlight {
        icon: "♻️",
        title: "Reduce Plastic Pollution",
        description: "Minimize single-use plastics and improve waste management",
    },
    Highlight {
        icon: "📚",
        title: "Education & Awareness",
        description: "Spread knowledge about ocean health and climate action",
    },
];

#[component]
pub fn ClimatePage() -> Element {
    let actions = vec![
        HeroAction::link("Explore Virtual World", Route::World.path()),
        HeroAction::link("Learn About Our Seas", Route::Seas.path()).variant(ButtonVariant::Outline),
    ];

    rsx! {
        div { class: "page-container",
            PageHeader {
                title: Route::Climate.title(),
                description: Route::Climate.description(),
                icon: "🔥",
            }
            SectionContainer { title: "Critical Changes", class: "page-block",
                StatsGrid { stats: CRITICAL_CHANGES, columns: GridColumns::Three }
            }
            div { class: "stack page-block",
                for (index, topic) in IMPACTS.iter().enumerate() {
                    TopicBlock { key: "{index}", topic: *topic }
                }
            }
            div { class: "solutions card-gradient page-block",
                h2 { class: "solutions-title text-primary", "What Can We Do?" }
                div { class: "grid grid-cols-2",
                    for (index, solution) in SOLUTIONS.iter().enumerate() {
                        div { key: "{index}", class: "solution card-solid",
                            div { class: "solution-icon", {solution.icon} }
                            h3 { class: "solution-title text-accent", {solution.title} }
                            p { class: "text-secondary", {solution.description} }
                        }
                    }
                }
            }
            CallToAction {
                title: "Time to Act",
                text: "Understanding the challenges is the first step. Experience our virtual world to see the beauty worth protecting.",
                actions: actions,
            }
        }
    }
}
