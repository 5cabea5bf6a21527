use crate::components::{Footer, Navbar};
use dioxus::prelude::*;
use ocean_domain::content::QuickLink;
use ocean_domain::routes::Route;

/// Drives the navbar menu on pages served as plain HTML.
pub const MENU_SCRIPT: &str = include_str!("../assets/menu.js");

/// Per-page `<head>` data plus the names shown in the navbar and footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMeta {
    pub title: String,
    pub description: String,
    pub brand: String,
    pub team: String,
    /// Absolute URL of the page, emitted as `<link rel="canonical">`.
    pub canonical: Option<String>,
}

/// The page shell inside `<html>`: head metadata with the inlined theme
/// stylesheet, then a body with navbar, page content, footer and menu script.
/// Render it with [`render_document`](crate::render_document), which adds the
/// doctype and the root element.
#[component]
pub fn Document(
    page: DocumentMeta,
    stylesheet: String,
    active: Option<Route>,
    #[props(default)] footer_links: &'static [QuickLink],
    children: Element,
) -> Element {
    let DocumentMeta { title, description, brand, team, canonical } = page;

    rsx! {
        head {
            meta { "charset": "utf-8" }
            meta { "name": "viewport", "content": "width=device-width, initial-scale=1" }
            title { "{title}" }
            meta { "name": "description", "content": "{description}" }
            if let Some(canonical) = canonical {
                link { rel: "canonical", href: "{canonical}" }
            }
            link { rel: "icon", href: "/deep-ocean.png" }
            style { dangerous_inner_html: "{stylesheet}" }
        }
        body { class: "page",
            Navbar { brand: brand.clone(), active: active }
            main { class: "page-main", {children} }
            Footer { brand: brand, team: team, links: footer_links }
            script { dangerous_inner_html: MENU_SCRIPT }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{render_document, style};
    use ocean_domain::theme::Theme;

    fn meta() -> DocumentMeta {
        DocumentMeta {
            title: "Seas | Deep Ocean".to_owned(),
            description: "Why the oceans matter".to_owned(),
            brand: "Deep Ocean".to_owned(),
            team: "Chifrijo Cósmico".to_owned(),
            canonical: Some("https://deep-ocean.example/seas".to_owned()),
        }
    }

    #[test]
    fn document_is_complete() {
        let css = style::stylesheet(&Theme::default());
        let html = render_document("en", rsx! {
            Document { page: meta(), stylesheet: css, active: Route::Seas,
                p { "content" }
            }
        });

        assert!(html.starts_with(r#"<!DOCTYPE html><html lang="en"><head>"#), "{}", &html[..60.min(html.len())]);
        assert_eq!(html.matches("<html").count(), 1);
        assert!(html.contains("</head><body"));
        assert!(html.contains("<title>Seas | Deep Ocean</title>"));
        assert!(html.contains(r#"content="Why the oceans matter""#));
        assert!(html.contains(r#"href="https://deep-ocean.example/seas""#));
        assert!(html.contains(":root {"));
        assert!(html.contains("<main"));
        assert!(html.contains("<p>content</p>"));
        assert!(html.contains("Deep Ocean by Chifrijo Cósmico"));
        assert!(html.contains("data-menu-toggle"));
        assert!(html.ends_with("</body></html>"));
    }

    #[test]
    fn menu_script_targets_the_navbar_markup() {
        assert!(MENU_SCRIPT.contains("data-menu-toggle"));
        assert!(MENU_SCRIPT.contains("navbar-panel"));
        assert!(!MENU_SCRIPT.contains("</script"));
    }
}
