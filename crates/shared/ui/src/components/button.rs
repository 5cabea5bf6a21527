use crate::class_list;
use crate::variants::{ButtonAction, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

/// A themed button. `action` decides whether it renders as a link or a `<button>`.
///
/// Internal links carry `data-link="internal"` so a client script can route them;
/// external links open in a new tab without an opener.
#[component]
pub fn Button(
    action: ButtonAction,
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default)] full_width: bool,
    #[props(default, into)] class: String,
    children: Element,
) -> Element {
    let classes = class_list([
        "btn",
        variant.class(),
        size.class(),
        if full_width { "btn-full" } else { "" },
        if action.is_disabled() { "btn-disabled" } else { "" },
        class.as_str(),
    ]);

    match action {
        ButtonAction::Link { href, external: true } => rsx! {
            a {
                class: "{classes}",
                href: "{href}",
                target: "_blank",
                rel: "noopener noreferrer",
                {children}
            }
        },
        ButtonAction::Link { href, external: false } => rsx! {
            a { class: "{classes}", href: "{href}", "data-link": "internal", {children} }
        },
        ButtonAction::Press { on_click, kind, disabled } => rsx! {
            button {
                class: "{classes}",
                "type": kind.as_str(),
                disabled: disabled.then_some("true"),
                onclick: move |event| {
                    if let Some(handler) = on_click {
                        handler.call(event);
                    }
                },
                {children}
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;
    use crate::variants::ButtonType;

    #[test]
    fn internal_link_renders_routed_anchor() {
        let html = render(rsx! {
            Button { action: ButtonAction::link("/world"), variant: ButtonVariant::Outline, "Explore" }
        });

        assert!(html.starts_with("<a "), "{html}");
        assert!(html.contains(r#"href="/world""#));
        assert!(html.contains(r#"data-link="internal""#));
        assert!(html.contains("btn btn-outline btn-md"));
        assert!(!html.contains("target="));
        assert!(!html.contains("<button"));
    }

    #[test]
    fn external_link_opens_new_tab() {
        let html = render(rsx! {
            Button { action: ButtonAction::external("https://github.com/chifrijo-cosmico"), "GitHub" }
        });

        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(!html.contains("data-link"));
    }

    #[test]
    fn press_action_renders_a_single_button() {
        let html = render(rsx! {
            Button {
                action: ButtonAction::press(ButtonType::Submit).disabled(),
                size: ButtonSize::Lg,
                full_width: true,
                "Send"
            }
        });

        assert!(html.starts_with("<button"), "{html}");
        assert!(html.contains(r#"type="submit""#));
        assert!(html.contains("btn-lg btn-full btn-disabled"));
        assert!(!html.contains("<a "));
        assert_eq!(html.matches("<button").count(), 1);
    }

    #[test]
    fn enabled_button_has_no_disabled_marker() {
        let html = render(rsx! {
            Button { action: ButtonAction::press(ButtonType::Button), "Toggle" }
        });

        assert!(!html.contains("disabled"));
    }
}
