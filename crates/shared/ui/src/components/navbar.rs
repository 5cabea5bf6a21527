use crate::variants::MenuState;
use dioxus::prelude::*;
use ocean_domain::routes::{Anchor, Route};
use strum::IntoEnumIterator;

/// Fixed top navigation: brand, a link per route, the download call to action
/// and the mobile menu.
///
/// The menu starts in `menu` (closed by default). The toggle flips it and any
/// panel link closes it. The state is mirrored in `data-menu`, `aria-expanded`
/// and the panel's `hidden` attribute so the static page script can drive the
/// same toggle without a client runtime.
#[component]
pub fn Navbar(
    #[props(into)] brand: String,
    #[props(default = "/deep-ocean.png".to_owned(), into)] logo: String,
    active: Option<Route>,
    #[props(default)] menu: MenuState,
) -> Element {
    let mut state = use_signal(move || menu);
    let current = state();
    let open = current.is_open();

    rsx! {
        nav { class: "navbar", "data-menu": current.as_str(),
            div { class: "container navbar-inner",
                a { class: "navbar-brand", href: Route::Home.path(), "data-link": "internal",
                    img { class: "navbar-logo", src: "{logo}", alt: "{brand} Logo", width: "40", height: "40" }
                    span { class: "navbar-title text-gradient", "{brand}" }
                }
                div { class: "navbar-links",
                    for (index, route) in Route::iter().enumerate() {
                        a {
                            key: "{index}",
                            class: "nav-link",
                            href: route.path(),
                            "data-link": "internal",
                            "aria-current": (active == Some(route)).then_some("page"),
                            {route.nav_label()}
                        }
                    }
                    a {
                        class: "btn btn-primary btn-sm",
                        href: Anchor::Download.href(),
                        "data-link": "internal",
                        "Download"
                    }
                }
                button {
                    class: "navbar-toggle",
                    "type": "button",
                    "aria-label": "Toggle menu",
                    "aria-controls": "navbar-panel",
                    "aria-expanded": if open { "true" } else { "false" },
                    "data-menu-toggle": "true",
                    onclick: move |_| state.write().toggle(),
                    if open { "✕" } else { "☰" }
                }
            }
            div {
                id: "navbar-panel",
                class: "navbar-panel",
                "hidden": (!open).then_some("hidden"),
                for (index, route) in Route::iter().enumerate() {
                    a {
                        key: "{index}",
                        class: "nav-link nav-link-block",
                        href: route.path(),
                        "data-link": "internal",
                        onclick: move |_| state.write().close(),
                        {route.nav_label()}
                    }
                }
                a {
                    class: "btn btn-primary btn-full",
                    href: Anchor::Download.href(),
                    "data-link": "internal",
                    onclick: move |_| state.write().close(),
                    "Download"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;

    #[test]
    fn closed_menu_hides_the_panel() {
        let html = render(rsx! { Navbar { brand: "Deep Ocean" } });

        assert!(html.contains(r#"data-menu="closed""#), "{html}");
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains(r#"hidden="hidden""#));
        assert!(html.contains("☰"));
    }

    #[test]
    fn open_menu_shows_the_panel() {
        let html = render(rsx! { Navbar { brand: "Deep Ocean", menu: MenuState::Open } });

        assert!(html.contains(r#"data-menu="open""#));
        assert!(html.contains(r#"aria-expanded="true""#));
        assert!(!html.contains("hidden="));
        assert!(html.contains("✕"));
    }

    #[test]
    fn every_route_is_linked_in_bar_and_panel() {
        let html = render(rsx! { Navbar { brand: "Deep Ocean", active: Route::Seas } });

        for route in Route::iter() {
            let href = format!(r#"href="{}""#, route.path());
            assert!(html.matches(&href).count() >= 2, "{} missing", route.path());
        }
        assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);
        assert_eq!(html.matches(r#"href="/#download""#).count(), 2);
    }
}
