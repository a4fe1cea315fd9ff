//! Asset server tests.
//!
//! Drive the site router in-process against a temporary web root.
//!
//! Run with: cargo test --test static_server
use std::path::Path;

use axum::body::Body;
use axum::Router;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use lifefit::config::AssetsConfig;
use lifefit::routes::create_site_router;

const INDEX_HTML: &str = "<!DOCTYPE html><html><body><div id=\"app\"></div></body></html>";

/// Web root with an entry document and a few assets
fn web_root() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
    std::fs::write(dir.path().join("main.dart.js"), "console.log('lifefit');").unwrap();
    std::fs::create_dir_all(dir.path().join("assets/fonts")).unwrap();
    std::fs::write(
        dir.path().join("assets/fonts/icons.bin"),
        [0u8, 159, 146, 150, 255, 10, 13],
    )
    .unwrap();
    dir
}

fn site(root: &Path) -> Router {
    site_with_index(root, "index.html")
}

fn site_with_index(root: &Path, index: &str) -> Router {
    create_site_router(&AssetsConfig {
        root: root.to_path_buf(),
        index: index.to_string(),
    })
}

async fn get(app: Router, path: &str) -> (StatusCode, http::HeaderMap, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, body.to_vec())
}

mod static_files {
    use super::*;

    #[tokio::test]
    async fn test_root_serves_entry_document() {
        let root = web_root();
        let (status, _, body) = get(site(root.path()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX_HTML.as_bytes());
    }

    #[tokio::test]
    async fn test_existing_file_is_served_unchanged() {
        let root = web_root();
        let (status, headers, body) = get(site(root.path()), "/main.dart.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"console.log('lifefit');");
        let content_type = headers.get(http::header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().contains("javascript"));
    }

    #[tokio::test]
    async fn test_nested_binary_file_is_served_unchanged() {
        let root = web_root();
        let (status, _, body) = get(site(root.path()), "/assets/fonts/icons.bin").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, vec![0u8, 159, 146, 150, 255, 10, 13]);
    }

    #[tokio::test]
    async fn test_unmatched_path_serves_entry_document() {
        let root = web_root();
        for path in ["/plan", "/settings/profile", "/assets/missing.png"] {
            let (status, _, body) = get(site(root.path()), path).await;
            assert_eq!(status, StatusCode::OK, "path {path}");
            assert_eq!(body, INDEX_HTML.as_bytes(), "path {path}");
        }
    }

    #[tokio::test]
    async fn test_unmatched_path_matches_root_response() {
        let root = web_root();
        let (_, _, from_root) = get(site(root.path()), "/").await;
        let (_, _, from_route) = get(site(root.path()), "/workout/today").await;
        assert_eq!(from_root, from_route);
    }

    #[tokio::test]
    async fn test_configured_entry_document_serves_root() {
        let root = web_root();
        std::fs::write(root.path().join("app.html"), "ENTRY").unwrap();

        let (status, _, from_root) = get(site_with_index(root.path(), "app.html"), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(from_root, b"ENTRY");

        let (_, _, from_route) = get(site_with_index(root.path(), "app.html"), "/plan").await;
        assert_eq!(from_root, from_route);
    }

    #[tokio::test]
    async fn test_directory_serves_entry_document() {
        let root = web_root();
        for path in ["/assets", "/assets/", "/assets/fonts/"] {
            let (status, _, body) = get(site(root.path()), path).await;
            assert_eq!(status, StatusCode::OK, "path {path}");
            assert_eq!(body, INDEX_HTML.as_bytes(), "path {path}");
        }
    }

    #[tokio::test]
    async fn test_parent_traversal_is_unmatched() {
        let root = web_root();
        for path in ["/../etc/passwd", "/assets/../main.dart.js", "/%2e%2e/etc/passwd"] {
            let (status, _, body) = get(site(root.path()), path).await;
            assert_eq!(status, StatusCode::OK, "path {path}");
            assert_eq!(body, INDEX_HTML.as_bytes(), "path {path}");
        }
    }

    #[tokio::test]
    async fn test_missing_entry_document_is_not_found() {
        let root = web_root();
        std::fs::remove_file(root.path().join("index.html")).unwrap();

        let (status, _, _) = get(site(root.path()), "/workout/today").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _, _) = get(site(root.path()), "/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        // Real files are still served
        let (status, _, body) = get(site(root.path()), "/main.dart.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"console.log('lifefit');");
    }

    #[tokio::test]
    async fn test_missing_root_is_not_found() {
        let root = web_root();
        let missing = root.path().join("does-not-exist");
        let (status, _, _) = get(site(&missing), "/anything").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

mod endpoints {
    use super::*;

    #[tokio::test]
    async fn test_api_config_is_fixed() {
        let root = web_root();
        let (status, headers, body) = get(site(root.path()), "/api/config").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"version": "1.0.0", "name": "LifeFit AI"})
        );
    }

    #[tokio::test]
    async fn test_api_config_without_web_root() {
        let root = web_root();
        let (status, _, body) = get(site(&root.path().join("gone")), "/api/config").await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["name"], "LifeFit AI");
    }

    #[tokio::test]
    async fn test_health_probe() {
        let root = web_root();
        let (status, _, body) = get(site(root.path()), "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
    }

    #[tokio::test]
    async fn test_responses_carry_request_id() {
        let root = web_root();
        let (_, first, _) = get(site(root.path()), "/").await;
        let (_, second, _) = get(site(root.path()), "/missing/route").await;
        let first = first.get("x-request-id").expect("request id header");
        let second = second.get("x-request-id").expect("request id header");
        assert_eq!(first.len(), 36);
        assert_ne!(first, second);
    }
}
