use ocean_domain::config::{SiteConfig, SiteConfigInner, SiteMeta};
use ocean_domain::routes::Route;
use ocean_kernel::render::PageRenderer;
use ocean_pages::Site;
use strum::IntoEnumIterator;

fn site() -> Site {
    let inner = SiteConfigInner {
        site: SiteMeta { base_url: "https://deep-ocean.example/".to_owned(), ..SiteMeta::default() },
        ..SiteConfigInner::default()
    };
    Site::new(SiteConfig::from(inner))
}

/// The markup after the inlined stylesheet.
fn after_style(html: &str) -> &str {
    html.find("</style>").map_or(html, |at| &html[at..])
}

#[test]
fn every_route_renders_a_full_document() {
    let site = site();
    for route in Route::iter() {
        let html = site.render(route);
        assert!(html.starts_with(r#"<!DOCTYPE html><html lang="en"><head>"#), "{route:?}");
        assert!(html.ends_with("</html>"), "{route:?}");
        assert!(html.contains(r#"class="navbar""#), "{route:?} has no navbar");
        assert!(html.contains("footer-credit"), "{route:?} has no footer");
        assert!(html.contains(r#"aria-current="page""#), "{route:?} marks no active link");
    }
}

#[test]
fn titles_follow_the_route() {
    let site = site();

    let home = site.render(Route::Home);
    assert!(home.contains("<title>Deep Ocean - Chifrijo Cósmico</title>"));

    let climate = site.render(Route::Climate);
    assert!(climate.contains("<title>Climate Change &#38; Ocean Impact | Deep Ocean</title>"));
    assert!(climate.contains(r#"href="https://deep-ocean.example/climate""#));
}

#[test]
fn pages_carry_their_content() {
    let site = site();

    let seas = site.render(Route::Seas);
    assert!(seas.contains("Biodiversity Hotspot"));
    assert!(seas.contains("People Depend On It"));

    let climate = site.render(Route::Climate);
    assert_eq!(after_style(&climate).matches("topic-impact").count(), 5);
    assert!(climate.contains("What Can We Do?"));

    let team = site.render(Route::Team);
    assert_eq!(after_style(&team).matches("team-card ").count(), 5);
    assert!(team.contains("Camila Fariñas"));

    let gallery = site.render(Route::Gallery);
    assert_eq!(after_style(&gallery).matches("comparison-pair").count(), 3);
    assert!(gallery.contains("/game_screenshots/demo-showcase.mp4"));

    let world = site.render(Route::World);
    assert!(world.contains("AI-Powered Guides"));
}

#[test]
fn home_links_every_anchor_target() {
    let html = site().render(Route::Home);
    for id in ["explore", "virtual-spaces", "team", "download"] {
        assert!(html.contains(&format!(r#"id="{id}""#)), "missing #{id}");
    }
    assert!(html.contains("by Chifrijo Cósmico"));
    assert!(html.contains("Coming Soon"));
}

#[test]
fn not_found_page_links_home() {
    let html = site().render_not_found();
    assert!(html.contains("Page Not Found"));
    assert!(html.contains("Back to Home"));
    assert!(!after_style(&html).contains("aria-current"));
    assert!(!html.contains(r#"rel="canonical""#));
}

#[test]
fn sitemap_lists_every_route_once() {
    let xml = site().sitemap();
    assert!(xml.starts_with("<?xml"));
    assert_eq!(xml.matches("<loc>").count(), 6);
    assert!(xml.contains("<loc>https://deep-ocean.example/</loc>"));
    assert!(xml.contains("<loc>https://deep-ocean.example/gallery</loc>"));
}

#[test]
fn robots_points_at_the_sitemap() {
    assert_eq!(
        site().robots(),
        "User-agent: *\nAllow: /\nSitemap: https://deep-ocean.example/sitemap.xml\n"
    );
}

#[test]
fn theme_overrides_reach_the_stylesheet() {
    let mut config = SiteConfig::default();
    config.theme.palette.non_photo_blue = "#00ffcc".to_owned();
    let site = Site::new(config);

    assert!(site.stylesheet().contains("--non-photo-blue: #00ffcc;"));
    assert!(site.render(Route::Seas).contains("--non-photo-blue: #00ffcc;"));
}

#[test]
fn markup_carries_no_inline_colors() {
    let site = site();
    for route in Route::iter() {
        let html = site.render(route);
        let body = after_style(&html);
        assert!(!body.contains("style=\""), "{route:?} has inline styles");
        assert!(!body.contains("rgb("), "{route:?} has a color literal");
    }
}
