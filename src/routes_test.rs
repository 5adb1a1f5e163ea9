use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

fn request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn static_routes_serve_healthz() {
    let router = static_routes(Path::new("target/site"), Path::new("assets"));
    let resp = router.oneshot(request("/healthz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    let router = static_routes(Path::new("target/site"), Path::new("assets"));
    let resp = router.oneshot(request("/assets/__missing__.png")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn contact_endpoint_is_not_routed() {
    let router = static_routes(Path::new("target/site"), Path::new("assets"));
    let resp = router.oneshot(request("/api/contact")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
