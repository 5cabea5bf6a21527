use ocean_domain::routes::Route;

/// Produces the HTML and text documents served for the site.
///
/// The server and the exporter only know this trait; the page compositions
/// live in their own crate and plug in here.
pub trait PageRenderer: Send + Sync + 'static {
    /// A complete HTML document for `route`, doctype included.
    fn render(&self, route: Route) -> String;

    /// The document served for unknown paths.
    fn render_not_found(&self) -> String;

    /// `sitemap.xml` listing every route.
    fn sitemap(&self) -> String;

    /// `robots.txt`.
    fn robots(&self) -> String;
}
