use crate::pages::{
    ClimatePage, GalleryPage, HomePage, NotFoundPage, SeasPage, TeamPage, WorldPage,
};
use dioxus::prelude::*;
use ocean_domain::config::SiteConfig;
use ocean_domain::content::QuickLink;
use ocean_domain::routes::Route;
use ocean_kernel::render::PageRenderer;
use ocean_ui::{Document, DocumentMeta, render_document, style};
use std::fmt::Write as _;
use strum::IntoEnumIterator;
use tracing::debug;

pub const FOOTER_LINKS: &[QuickLink] = &[
    QuickLink { label: "Gallery", url: "/gallery", icon: Some("🖼️") },
    QuickLink { label: "Team", url: "/team", icon: Some("👥") },
    QuickLink {
        label: "NASA Space Apps",
        url: "https://www.spaceappschallenge.org/",
        icon: Some("🚀"),
    },
];

/// Renders every page of the Deep Ocean site from one configuration.
///
/// The theme stylesheet is built once here and inlined into each document.
#[derive(Debug, Clone)]
pub struct Site {
    config: SiteConfig,
    stylesheet: String,
}

impl Site {
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        let stylesheet = style::stylesheet(&config.theme);
        Self { config, stylesheet }
    }

    #[must_use]
    pub const fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub fn stylesheet(&self) -> &str {
        &self.stylesheet
    }

    /// `<title>` of a route: the site title on the home page, `Page | Site` elsewhere.
    #[must_use]
    pub fn document_title(&self, route: Route) -> String {
        let site = &self.config.site;
        match route {
            Route::Home => site.title.clone(),
            other => format!("{} | {}", other.title(), site.name),
        }
    }

    fn meta(&self, title: String, description: String, canonical: Option<String>) -> DocumentMeta {
        let site = &self.config.site;
        DocumentMeta {
            title,
            description,
            brand: site.name.clone(),
            team: site.team.clone(),
            canonical,
        }
    }

    fn page(&self, route: Route) -> Element {
        let site = &self.config.site;
        match route {
            Route::Home => rsx! { HomePage { brand: site.name.clone(), team: site.team.clone() } },
            Route::World => rsx! { WorldPage {} },
            Route::Seas => rsx! { SeasPage {} },
            Route::Climate => rsx! { ClimatePage {} },
            Route::Team => rsx! { TeamPage {} },
            Route::Gallery => rsx! { GalleryPage {} },
        }
    }

    fn document(&self, page: DocumentMeta, active: Option<Route>, body: Element) -> String {
        render_document(&self.config.site.lang, rsx! {
            Document {
                page: page,
                stylesheet: self.stylesheet.clone(),
                active: active,
                footer_links: FOOTER_LINKS,
                {body}
            }
        })
    }
}

impl PageRenderer for Site {
    fn render(&self, route: Route) -> String {
        let description = match route {
            Route::Home => self.config.site.description.clone(),
            other => other.description().to_owned(),
        };
        let canonical = self.config.site.absolute_url(route.path());
        let meta = self.meta(self.document_title(route), description, Some(canonical));
        let html = self.document(meta, Some(route), self.page(route));
        debug!(path = route.path(), bytes = html.len(), "Page rendered");
        html
    }

    fn render_not_found(&self) -> String {
        let title = format!("Page Not Found | {}", self.config.site.name);
        let meta = self.meta(title, self.config.site.description.clone(), None);
        self.document(meta, None, rsx! { NotFoundPage {} })
    }

    fn sitemap(&self) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
        );
        for route in Route::iter() {
            let loc = escape_xml(&self.config.site.absolute_url(route.path()));
            let _ = writeln!(xml, "  <url><loc>{loc}</loc></url>");
        }
        xml.push_str("</urlset>\n");
        xml
    }

    fn robots(&self) -> String {
        format!(
            "User-agent: *\nAllow: /\nSitemap: {}\n",
            self.config.site.absolute_url("/sitemap.xml")
        )
    }
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_xml;

    #[test]
    fn xml_escaping_covers_markup_characters() {
        assert_eq!(escape_xml("https://a.b/?x=1&y=<2>"), "https://a.b/?x=1&amp;y=&lt;2&gt;");
        assert_eq!(escape_xml("it's \"ok\""), "it&apos;s &quot;ok&quot;");
    }
}
