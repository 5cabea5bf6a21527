use dioxus::prelude::*;
use ocean_domain::routes::Route;
use ocean_ui::ButtonAction;
use ocean_ui::components::{Button, PageHeader};

#[component]
pub fn NotFoundPage() -> Element {
    rsx! {
        div { class: "page-container text-center",
            PageHeader {
                title: "Page Not Found",
                description: "This part of the ocean has not been mapped yet.",
                icon: "🐙",
            }
            Button { action: ButtonAction::link(Route::Home.path()), "Back to Home" }
        }
    }
}
