use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use onething_core::Theme;
use onething_web::pages;
use onething_web::state::AppState;

fn test_app() -> axum::Router {
    let index_html = pages::render_index(&Theme::default()).unwrap();
    onething_web::app(AppState::new(index_html))
}

#[tokio::test]
async fn index_serves_the_rendered_document() {
    let app = test_app();

    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("text/html"));

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains(r#"<html lang="ja">"#));
    assert!(html.contains("One Day One Thing"));
    assert!(html.contains("毎日、たったひとつだけ。"));
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    let app = test_app();

    let req = Request::builder()
        .uri("/missing")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
