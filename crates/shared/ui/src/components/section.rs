use crate::class_list;
use crate::components::{Button, HeroAction, HeroImageBox};
use crate::variants::HeroSize;
use dioxus::prelude::*;
use ocean_domain::content::Image;

/// Text beside a visual. The visual is the image when given, an icon box otherwise.
///
/// The description (if any) is the lead paragraph; `paragraphs` follow it.
/// `reverse` swaps the columns on wide screens.
#[component]
pub fn Section(
    #[props(into)] title: String,
    #[props(into)] description: Option<String>,
    #[props(default)] paragraphs: &'static [&'static str],
    image: Option<Image>,
    #[props(default = "🌊".to_owned(), into)] icon: String,
    action: Option<HeroAction>,
    #[props(default)] reverse: bool,
    #[props(default, into)] class: String,
) -> Element {
    let classes = class_list(["content-section", if reverse { "content-section-reverse" } else { "" }, class.as_str()]);
    let body: Vec<String> =
        description.into_iter().chain(paragraphs.iter().map(|p| (*p).to_owned())).collect();

    rsx! {
        div { class: "{classes}",
            div { class: "content-section-grid",
                div { class: "content-section-visual",
                    if let Some(image) = image {
                        div { class: "content-section-media",
                            img { class: "cover", src: image.src, alt: image.alt, "loading": "lazy" }
                        }
                    } else {
                        HeroImageBox { icon: icon, size: HeroSize::Lg }
                    }
                }
                div { class: "content-section-text",
                    h3 { class: "content-section-title text-accent", "{title}" }
                    for (index, paragraph) in body.into_iter().enumerate() {
                        p {
                            key: "{index}",
                            class: if index == 0 { "lead text-primary" } else { "lead text-secondary" },
                            "{paragraph}"
                        }
                    }
                    if let Some(action) = action {
                        Button { action: action.action, variant: action.variant, {action.label} }
                    }
                }
            }
        }
    }
}

/// A page band with an optional centered heading. `id` makes it an anchor target.
#[component]
pub fn SectionContainer(
    #[props(into)] id: Option<String>,
    #[props(into)] title: Option<String>,
    #[props(into)] subtitle: Option<String>,
    #[props(default, into)] class: String,
    children: Element,
) -> Element {
    let classes = class_list(["band", class.as_str()]);
    let has_heading = title.is_some() || subtitle.is_some();

    rsx! {
        section { id: id, class: "{classes}",
            if has_heading {
                div { class: "band-heading",
                    if let Some(title) = title {
                        h2 { class: "band-title text-gradient", "{title}" }
                    }
                    if let Some(subtitle) = subtitle {
                        p { class: "band-subtitle text-secondary", "{subtitle}" }
                    }
                }
            }
            {children}
        }
    }
}
