use crate::class_list;
use crate::components::Button;
use crate::variants::{ButtonAction, ButtonSize, ButtonVariant, HeroSize, HeroVariant};
use dioxus::prelude::*;
use ocean_domain::content::Image;

/// A call to action rendered as a [`Button`] inside a hero or section.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroAction {
    pub label: String,
    pub action: ButtonAction,
    pub variant: ButtonVariant,
}

impl HeroAction {
    /// A primary-styled link, external when the URL does not start with `/`.
    #[must_use]
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::for_url(href),
            variant: ButtonVariant::Primary,
        }
    }

    #[must_use]
    pub const fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }
}

#[component]
fn HeroActions(actions: Vec<HeroAction>, size: ButtonSize) -> Element {
    if actions.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "hero-actions",
            for (index, action) in actions.into_iter().enumerate() {
                Button { key: "{index}", action: action.action, variant: action.variant, size: size, {action.label} }
            }
        }
    }
}

/// Page-top banner.
///
/// `Split` with an image puts the image beside the text. The other layouts
/// stack everything over an ocean backdrop: a blurred background image when
/// one is given, animated waves otherwise. With a background the image shows
/// as a small badge, without one as a large framed logo; the icon is only
/// used when there is no image at all.
#[component]
pub fn Hero(
    #[props(into)] title: String,
    #[props(into)] subtitle: Option<String>,
    #[props(into)] description: Option<String>,
    #[props(default)] actions: Vec<HeroAction>,
    image: Option<Image>,
    #[props(into)] background_image: Option<String>,
    #[props(into)] icon: Option<String>,
    #[props(default)] variant: HeroVariant,
    #[props(default)] size: HeroSize,
    #[props(default, into)] class: String,
) -> Element {
    let size_class = format!("hero-{}", size.suffix());
    let title_class = format!("hero-title hero-title-{}", size.suffix());

    if let (HeroVariant::Split, Some(image)) = (variant, image) {
        let classes = class_list(["hero", variant.class(), size_class.as_str(), class.as_str()]);
        return rsx! {
            section { class: "{classes}",
                div { class: "container",
                    div { class: "hero-split-grid",
                        div { class: "hero-split-media",
                            img { class: "cover", src: image.src, alt: image.alt }
                        }
                        div { class: "hero-split-content",
                            if let Some(subtitle) = subtitle {
                                p { class: "hero-subtitle text-accent", "{subtitle}" }
                            }
                            h1 { class: "{title_class} text-gradient", "{title}" }
                            if let Some(description) = description {
                                p { class: "hero-description text-secondary", "{description}" }
                            }
                            HeroActions { actions: actions, size: ButtonSize::Md }
                        }
                    }
                }
            }
        };
    }

    let classes = class_list(["hero", "hero-ocean", variant.class(), size_class.as_str(), class.as_str()]);
    let has_background = background_image.is_some();
    let centered = variant == HeroVariant::Centered;
    let content_class = class_list(["hero-content", if centered { "text-center" } else { "" }]);

    rsx! {
        section { class: "{classes}",
            if let Some(background) = background_image {
                div { class: "hero-backdrop",
                    img { class: "cover hero-backdrop-image", src: "{background}", alt: "" }
                }
                div { class: "hero-shade" }
            } else {
                div { class: "hero-shade hero-shade-deep" }
                div { class: "ocean-wave ocean-wave-1" }
                div { class: "ocean-wave ocean-wave-2" }
                div { class: "ocean-wave ocean-wave-3" }
            }
            div { class: "container hero-body",
                div { class: "{content_class}",
                    if let Some(image) = image {
                        if has_background {
                            div { class: "hero-badge",
                                img { class: "contain", src: image.src, alt: image.alt }
                            }
                        } else {
                            div { class: "hero-logo",
                                img { class: "contain", src: image.src, alt: image.alt }
                            }
                        }
                    } else if let Some(icon) = icon {
                        div { class: "hero-icon pulse", "{icon}" }
                    }
                    if let Some(subtitle) = subtitle {
                        p { class: "hero-subtitle hero-subtitle-caps text-accent", "{subtitle}" }
                    }
                    h1 { class: "{title_class}",
                        span { class: "text-gradient animate-gradient", "{title}" }
                    }
                    if let Some(description) = description {
                        p { class: "hero-description text-secondary", "{description}" }
                    }
                    HeroActions { actions: actions, size: ButtonSize::Lg }
                }
            }
            div { class: "hero-wave-edge" }
        }
    }
}

/// Centered heading block for inner pages.
#[component]
pub fn PageHeader(
    #[props(into)] title: String,
    #[props(into)] description: Option<String>,
    #[props(into)] icon: Option<String>,
    #[props(default = true)] gradient: bool,
    #[props(default, into)] class: String,
) -> Element {
    let classes = class_list(["page-header", class.as_str()]);
    let title_class = if gradient { "page-title text-gradient" } else { "page-title text-primary" };

    rsx! {
        div { class: "{classes}",
            if let Some(icon) = icon {
                div { class: "page-header-icon pulse", "{icon}" }
            }
            h1 { class: title_class, "{title}" }
            if let Some(description) = description {
                p { class: "page-description text-secondary", "{description}" }
            }
        }
    }
}

/// Decorative panel showing a single large icon.
#[component]
pub fn HeroImageBox(
    #[props(into)] icon: String,
    #[props(default = HeroSize::Md)] size: HeroSize,
    #[props(default = true)] gradient: bool,
    #[props(default, into)] class: String,
) -> Element {
    let size_class = format!("image-box-{}", size.suffix());
    let classes = class_list([
        "image-box",
        size_class.as_str(),
        if gradient { "card-gradient" } else { "card-solid" },
        class.as_str(),
    ]);

    rsx! {
        div { class: "{classes}",
            div { class: "image-box-shade" }
            div { class: "image-box-icon", "{icon}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;

    const LOGO: Image = Image { src: "/deep-ocean.png", alt: "Deep Ocean Logo" };

    #[test]
    fn actions_render_in_order_as_large_buttons() {
        let actions = vec![
            HeroAction::link("Explore Now", "/#explore"),
            HeroAction::link("Download VR Demo", "/#download").variant(ButtonVariant::Outline),
        ];
        let html = render(rsx! { Hero { title: "Deep Ocean", actions: actions } });

        let explore = html.find("Explore Now").unwrap_or(usize::MAX);
        let download = html.find("Download VR Demo").unwrap_or(0);
        assert!(explore < download, "{html}");
        assert_eq!(html.matches("btn-lg").count(), 2);
        assert!(html.contains("btn btn-outline btn-lg"));
    }

    #[test]
    fn background_turns_the_image_into_a_badge() {
        let html = render(rsx! {
            Hero { title: "Deep Ocean", image: LOGO, background_image: "/hero-ocean-depths.jpg" }
        });

        assert!(html.contains("hero-badge"));
        assert!(!html.contains("hero-logo"));
        assert!(html.contains("hero-backdrop-image"));
        assert!(!html.contains("ocean-wave-1"));
    }

    #[test]
    fn without_background_the_waves_show() {
        let html = render(rsx! { Hero { title: "Deep Ocean", image: LOGO } });

        assert!(html.contains("hero-logo"));
        assert!(html.contains("ocean-wave ocean-wave-3"));
    }

    #[test]
    fn split_layout_requires_an_image() {
        let split = render(rsx! {
            Hero { title: "World", variant: HeroVariant::Split, image: LOGO, size: HeroSize::Md }
        });
        assert!(split.contains("hero-split-grid"));
        assert!(split.contains("hero-md"));

        let fallback = render(rsx! { Hero { title: "World", variant: HeroVariant::Split, icon: "🌍" } });
        assert!(!fallback.contains("hero-split-grid"));
        assert!(fallback.contains("hero-icon"));
    }

    #[test]
    fn page_header_renders_optional_parts() {
        let html = render(rsx! {
            PageHeader { title: "Meet Our Team", description: "A passionate group", icon: "🌊" }
        });
        assert!(html.contains("page-title text-gradient"));
        assert!(html.contains("A passionate group"));
        assert!(html.contains("page-header-icon"));

        let bare = render(rsx! { PageHeader { title: "Plain", gradient: false } });
        assert!(bare.contains("page-title text-primary"));
        assert!(!bare.contains("page-description"));
    }

    #[test]
    fn image_box_sizes() {
        let html = render(rsx! { HeroImageBox { icon: "🌊", size: HeroSize::Lg } });
        assert!(html.contains("image-box image-box-lg card-gradient"));
    }
}
