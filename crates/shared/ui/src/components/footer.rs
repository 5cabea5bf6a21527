use crate::components::QuickLinks;
use dioxus::prelude::*;
use ocean_domain::content::QuickLink;

#[component]
pub fn Footer(
    #[props(into)] brand: String,
    #[props(into)] team: String,
    #[props(default)] links: &'static [QuickLink],
) -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "container footer-inner",
                if !links.is_empty() {
                    QuickLinks { links: links, class: "footer-links" }
                }
                p { class: "footer-credit text-secondary", "{brand} by {team}" }
                p { class: "footer-legal text-muted", "© 2025 NASA Space Apps Challenge. All rights reserved." }
            }
        }
    }
}
