use crate::class_list;
use crate::variants::GridColumns;
use dioxus::prelude::*;
use ocean_domain::content::{QuickLink, ResourceLink, is_external_url};

#[component]
pub fn Resources(
    resources: &'static [ResourceLink],
    #[props(default = "Resources".to_owned(), into)] title: String,
    #[props(into)] description: Option<String>,
    #[props(default)] columns: GridColumns,
    #[props(default, into)] class: String,
) -> Element {
    let classes = class_list(["band", "resources", class.as_str()]);
    let grid = class_list(["grid", columns.class()]);

    rsx! {
        section { id: "resources", class: "{classes}",
            div { class: "band-heading",
                h2 { class: "band-title text-primary", "{title}" }
                if let Some(description) = description {
                    p { class: "band-subtitle text-secondary", "{description}" }
                }
            }
            div { class: "{grid}",
                for (index, resource) in resources.iter().enumerate() {
                    ResourceCard { key: "{index}", resource: *resource }
                }
            }
        }
    }
}

/// A linked card. External URLs open in a new tab and carry a `↗` marker.
#[component]
pub fn ResourceCard(resource: ResourceLink) -> Element {
    let external = resource.is_external();

    rsx! {
        a {
            class: "resource-card card-solid card-hover group",
            href: resource.url,
            target: external.then_some("_blank"),
            rel: external.then_some("noopener noreferrer"),
            "data-link": (!external).then_some("internal"),
            div { class: "resource-row",
                div { class: "resource-icon", {resource.display_icon()} }
                div { class: "resource-body",
                    h3 { class: "resource-title text-accent",
                        {resource.title}
                        if external {
                            span { class: "external-marker", "↗" }
                        }
                    }
                    p { class: "resource-description text-secondary", {resource.description} }
                }
            }
        }
    }
}

/// A wrap row of small pill links.
#[component]
pub fn QuickLinks(
    links: &'static [QuickLink],
    #[props(into)] title: Option<String>,
    #[props(default, into)] class: String,
) -> Element {
    rsx! {
        div { class: "{class}",
            if let Some(title) = title {
                h3 { class: "quick-links-title text-primary", "{title}" }
            }
            div { class: "quick-links",
                for (index, link) in links.iter().enumerate() {
                    QuickLinkPill { key: "{index}", link: *link }
                }
            }
        }
    }
}

#[component]
fn QuickLinkPill(link: QuickLink) -> Element {
    let external = is_external_url(link.url);

    rsx! {
        a {
            class: "quick-link text-secondary",
            href: link.url,
            target: external.then_some("_blank"),
            rel: external.then_some("noopener noreferrer"),
            "data-link": (!external).then_some("internal"),
            if let Some(icon) = link.icon {
                span { {icon} }
            }
            {link.label}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocean_domain::content::ResourceKind;
    use crate::render;

    const LINKS: &[ResourceLink] = &[
        ResourceLink {
            title: "GitHub Repository",
            description: "Source code",
            url: "https://github.com/chifrijo-cosmico/deep-ocean",
            icon: None,
            kind: ResourceKind::Github,
        },
        ResourceLink {
            title: "Gallery",
            description: "Screenshots",
            url: "/gallery",
            icon: None,
            kind: ResourceKind::Document,
        },
    ];

    #[test]
    fn external_resources_open_in_new_tab() {
        let html = render(rsx! { ResourceCard { resource: LINKS[0] } });

        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(html.contains("↗"));
        assert!(html.contains("🔗"));
    }

    #[test]
    fn internal_resources_stay_in_tab() {
        let html = render(rsx! { ResourceCard { resource: LINKS[1] } });

        assert!(!html.contains("target="));
        assert!(!html.contains("↗"));
        assert!(html.contains(r#"data-link="internal""#));
        assert!(html.contains("📄"));
    }

    #[test]
    fn resources_section_keeps_order_and_default_title() {
        let html = render(rsx! { Resources { resources: LINKS } });

        assert!(html.contains(r#"id="resources""#));
        assert!(html.contains(">Resources</h2>"));
        assert!(html.find("GitHub Repository").unwrap_or(usize::MAX) < html.find("Screenshots").unwrap_or(0));
    }

    #[test]
    fn quick_links_render_icons() {
        const QUICK: &[QuickLink] = &[
            QuickLink { label: "Demo", url: "/#download", icon: Some("🎮") },
            QuickLink { label: "NASA", url: "https://www.spaceappschallenge.org", icon: None },
        ];
        let html = render(rsx! { QuickLinks { links: QUICK, title: "Quick Links" } });

        assert_eq!(html.matches("quick-link text-secondary").count(), 2);
        assert!(html.contains("<span>🎮</span>"));
        assert_eq!(html.matches(r#"target="_blank""#).count(), 1);
    }
}
