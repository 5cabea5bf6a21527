#![cfg(feature = "server")]

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use ocean_kernel::server::router::system_router;
use tower::ServiceExt;

#[tokio::test]
async fn health_reports_up_with_no_cache_headers() -> Result<(), Box<dyn std::error::Error>> {
    ocean_kernel::server::health::mark_started();

    let response = system_router::<()>()
        .oneshot(Request::builder().uri("/health").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).and_then(|v| v.to_str().ok()),
        Some("no-store, no-cache, must-revalidate")
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let body: serde_json::Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body["status"], "up");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["uptime"].is_u64());
    Ok(())
}
