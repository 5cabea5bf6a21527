use crate::class_list;
use crate::components::Card;
use dioxus::prelude::*;

const DEFAULT_POSTER: &str = "/hero-ocean-depths.jpg";

/// A video player card with an optional caption.
#[component]
pub fn VideoShowcase(
    #[props(into)] src: String,
    #[props(default = DEFAULT_POSTER.to_owned(), into)] poster: String,
    #[props(into)] title: Option<String>,
    #[props(into)] description: Option<String>,
    #[props(default, into)] class: String,
) -> Element {
    let classes = class_list(["p-0", "overflow-hidden", class.as_str()]);
    let has_caption = title.is_some() || description.is_some();

    rsx! {
        Card { class: classes,
            div { class: "video-frame",
                video {
                    class: "video-player",
                    "poster": "{poster}",
                    "controls": "true",
                    "preload": "metadata",
                    source { src: "{src}", "type": "video/mp4" }
                    "Your browser does not support the video tag."
                }
            }
            if has_caption {
                div { class: "video-caption card-solid",
                    if let Some(title) = title {
                        h3 { class: "video-title text-accent", "{title}" }
                    }
                    if let Some(description) = description {
                        p { class: "text-secondary", "{description}" }
                    }
                }
            }
        }
    }
}

/// A muted looping video banner with text on top.
#[component]
pub fn VideoHero(
    #[props(into)] src: String,
    #[props(into)] title: String,
    #[props(into)] subtitle: Option<String>,
    #[props(default = DEFAULT_POSTER.to_owned(), into)] poster: String,
    #[props(default, into)] class: String,
) -> Element {
    let classes = class_list(["banner", class.as_str()]);

    rsx! {
        div { class: "{classes}",
            video {
                class: "video-player",
                "poster": "{poster}",
                "autoplay": "true",
                "loop": "true",
                "muted": "true",
                "playsinline": "true",
                source { src: "{src}", "type": "video/mp4" }
            }
            div { class: "banner-shade" }
            div { class: "banner-text",
                h1 { class: "banner-title text-primary", "{title}" }
                if let Some(subtitle) = subtitle {
                    p { class: "banner-subtitle text-accent", "{subtitle}" }
                }
            }
        }
    }
}
