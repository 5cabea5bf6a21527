use dioxus::prelude::*;
use ocean_domain::content::{Highlight, Topic};
use ocean_ui::components::{Button, HeroAction};

/// Closing block of a page: heading, one line of copy and its buttons.
#[component]
pub(crate) fn CallToAction(
    #[props(into)] title: String,
    #[props(into)] text: String,
    actions: Vec<HeroAction>,
) -> Element {
    rsx! {
        div { class: "cta card-gradient",
            h2 { class: "cta-title text-primary", "{title}" }
            p { class: "cta-text text-secondary", "{text}" }
            div { class: "hero-actions",
                for (index, action) in actions.into_iter().enumerate() {
                    Button { key: "{index}", action: action.action, variant: action.variant, {action.label} }
                }
            }
        }
    }
}

/// A long-form block with an icon heading and an optional impact line.
#[component]
pub(crate) fn TopicBlock(topic: Topic) -> Element {
    rsx! {
        article { class: "topic card-solid",
            div { class: "topic-heading",
                div { class: "topic-icon", {topic.icon} }
                h2 { class: "topic-title text-accent", {topic.title} }
            }
            for paragraph in topic.paragraphs {
                p { class: "lead text-secondary", {*paragraph} }
            }
            if let Some(impact) = topic.impact {
                p { class: "topic-impact text-accent", "Impact: {impact}" }
            }
        }
    }
}

/// A titled two-column list of icon, title and description rows.
#[component]
pub(crate) fn Checklist(#[props(into)] title: String, items: &'static [Highlight]) -> Element {
    rsx! {
        div { class: "checklist card-solid",
            h2 { class: "checklist-title text-primary", "{title}" }
            div { class: "checklist-grid",
                for (index, item) in items.iter().enumerate() {
                    div { key: "{index}", class: "checklist-item",
                        span { class: "checklist-icon text-accent", {item.icon} }
                        div {
                            h3 { class: "checklist-item-title text-primary", {item.title} }
                            p { class: "text-secondary", {item.description} }
                        }
                    }
                }
            }
        }
    }
}
