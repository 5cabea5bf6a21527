use crate::class_list;
use dioxus::prelude::*;
use ocean_domain::content::Feature;

#[component]
pub fn Card(
    #[props(default)] hover: bool,
    #[props(default)] gradient: bool,
    #[props(default, into)] class: String,
    children: Element,
) -> Element {
    let classes = class_list([
        "card",
        if gradient { "card-gradient" } else { "card-solid" },
        if hover { "card-hover" } else { "" },
        class.as_str(),
    ]);

    rsx! {
        div { class: "{classes}", {children} }
    }
}

/// Image (or icon), title and description. The image wins when both are set.
#[component]
pub fn FeatureCard(feature: Feature, #[props(default, into)] class: String) -> Element {
    let classes = class_list(["group", class.as_str()]);

    rsx! {
        Card { hover: true, class: classes,
            if let Some(image) = feature.image {
                div { class: "feature-media",
                    img { class: "cover zoom", src: image.src, alt: image.alt, "loading": "lazy" }
                    div { class: "feature-media-shade" }
                }
            } else if !feature.icon.is_empty() {
                div { class: "feature-icon", {feature.icon} }
            }
            h3 { class: "feature-title text-accent", {feature.title} }
            p { class: "feature-description text-secondary", {feature.description} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;
    use ocean_domain::content::Image;

    const ICON_ONLY: Feature = Feature {
        icon: "🗺️",
        title: "NASA Data Integration",
        description: "Built on real elevation models.",
        image: None,
    };

    #[test]
    fn card_classes_reflect_flags() {
        let html = render(rsx! {
            Card { gradient: true, hover: true, class: "p-0", "body" }
        });
        assert!(html.contains(r#"class="card card-gradient card-hover p-0""#), "{html}");
    }

    #[test]
    fn feature_card_prefers_image_over_icon() {
        let feature = Feature {
            image: Some(Image { src: "/game_screenshots/ocean_floor.jpeg", alt: "Ocean floor" }),
            ..ICON_ONLY
        };
        let html = render(rsx! { FeatureCard { feature } });

        assert!(html.contains(r#"src="/game_screenshots/ocean_floor.jpeg""#));
        assert!(!html.contains("feature-icon"));
        assert!(html.contains("NASA Data Integration"));
    }

    #[test]
    fn feature_card_falls_back_to_icon() {
        let html = render(rsx! { FeatureCard { feature: ICON_ONLY } });

        assert!(html.contains("feature-icon"));
        assert!(!html.contains("<img"));
    }
}
