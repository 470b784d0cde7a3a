#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use folio_api::config::ServerConfig;
use folio_api::images::ImageStorage;
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_db::store::{JsonFileStore, MemoryStore, RecordStore, SqlStore};

const BOUNDARY: &str = "folio-test-boundary";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    let mut config =
        ServerConfig::from_lookup(|_| None).expect("default configuration must parse");
    config.host = "127.0.0.1".to_string();
    config.port = 0;
    config
}

/// State over a fresh in-memory store with inline images.
pub fn memory_state() -> AppState {
    AppState::new(
        Arc::new(MemoryStore::new()),
        ImageStorage::Inline,
        test_config(),
    )
}

/// State over a JSON-file store rooted at `dir`, with images written to
/// `dir/uploads`.
pub async fn json_state(dir: &Path) -> AppState {
    let mut config = test_config();
    config.data_dir = dir.to_path_buf();
    let store = JsonFileStore::open(dir).await.unwrap();
    let images = ImageStorage::Directory {
        root: config.upload_dir(),
    };
    AppState::new(Arc::new(store), images, config)
}

/// State over a migrated in-memory SQLite database.
pub async fn sqlite_state() -> AppState {
    let store = SqlStore::connect("sqlite::memory:").await.unwrap();
    AppState::new(Arc::new(store), ImageStorage::Inline, test_config())
}

/// Build the full application router with all middleware layers.
///
/// Uses the same builder as `main.rs` so tests exercise the production
/// middleware stack.
pub fn build_test_app(state: AppState) -> Router {
    let config = state.config.as_ref().clone();
    build_app_router(state, &config)
}

pub fn store(state: &AppState) -> Arc<dyn RecordStore> {
    Arc::clone(&state.store)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// POST an `application/x-www-form-urlencoded` body.
pub async fn post_form(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// POST with no body and no content type.
pub async fn post_empty(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// A file part for [`post_multipart`].
pub struct FilePart<'a> {
    pub field: &'a str,
    pub file_name: &'a str,
    pub content_type: &'a str,
    pub bytes: &'a [u8],
}

/// POST a `multipart/form-data` body built from text fields and files.
pub async fn post_multipart(
    app: Router,
    uri: &str,
    fields: &[(&str, &str)],
    files: &[FilePart<'_>],
) -> Response {
    let mut body: Vec<u8> = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    for file in files {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                file.field, file.file_name, file.content_type
            )
            .as_bytes(),
        );
        body.extend_from_slice(file.bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).expect("response body should be UTF-8")
}

/// The `Location` header of a redirect.
pub fn location(response: &Response) -> String {
    response
        .headers()
        .get(LOCATION)
        .expect("redirect should carry a Location header")
        .to_str()
        .unwrap()
        .to_string()
}
