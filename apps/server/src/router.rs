//! HTTP surface: one route per page, the crawler files, `/health`, then the
//! public asset directory with the 404 page behind it.

use axum::Router;
use axum::extract::State;
use axum::handler::Handler;
use axum::http::{StatusCode, Uri, header};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use ocean::domain::routes::Route;
use ocean::server::SiteState;
use ocean::server::system_router;
use strum::IntoEnumIterator;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::debug;

pub fn init(state: SiteState) -> Router {
    let assets = ServeDir::new(&state.config.storage.public_dir)
        .append_index_html_on_directories(false)
        .fallback(fallback.with_state(state.clone()));

    let pages = Route::iter().fold(Router::new(), |router, route| {
        router.route(
            route.path(),
            get(move |State(state): State<SiteState>| async move {
                Html(state.pages.render(route))
            }),
        )
    });

    pages
        .route("/sitemap.xml", get(sitemap))
        .route("/robots.txt", get(robots))
        .merge(system_router())
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn sitemap(State(state): State<SiteState>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], state.pages.sitemap())
}

async fn robots(State(state): State<SiteState>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], state.pages.robots())
}

/// Paths that match no page and no asset. A trailing slash on a page path
/// still resolves to the page.
async fn fallback(State(state): State<SiteState>, uri: Uri) -> impl IntoResponse {
    if let Some(route) = Route::from_path(uri.path()) {
        return (StatusCode::OK, Html(state.pages.render(route)));
    }

    debug!(path = uri.path(), "No page or asset");
    (StatusCode::NOT_FOUND, Html(state.pages.render_not_found()))
}
