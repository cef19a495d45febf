use axum::{body::to_bytes, body::Body, http::Request};
use quoteboard_server::{api::app_router, build_state, config::Config};
use tempfile::tempdir;
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};

#[tokio::test]
async fn serves_index_html_for_unknown_route() {
    let static_dir = tempdir().unwrap();
    let index_path = static_dir.path().join("index.html");
    std::fs::write(&index_path, "<html>Quoteboard</html>").unwrap();

    let config = Config {
        static_dir: static_dir.path().to_string_lossy().into_owned(),
        ..Config::default()
    };
    let state = build_state(&config).await.unwrap();
    let static_service =
        ServeDir::new(&config.static_dir).fallback(ServeFile::new(index_path.clone()));
    let app = app_router(state, &config).fallback_service(static_service);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/charts/spx")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), axum::http::StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(body, "<html>Quoteboard</html>".as_bytes());
}

#[tokio::test]
async fn api_routes_win_over_static_fallback() {
    let static_dir = tempdir().unwrap();
    let index_path = static_dir.path().join("index.html");
    std::fs::write(&index_path, "<html>Quoteboard</html>").unwrap();

    let config = Config::default();
    let state = build_state(&config).await.unwrap();
    let static_service = ServeDir::new(static_dir.path()).fallback(ServeFile::new(index_path));
    let app = app_router(state, &config).fallback_service(static_service);

    let response = app
        .oneshot(Request::builder().uri("/api/v1/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(body, "ok".as_bytes());
}
