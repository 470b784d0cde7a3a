//! The portfolio's HTTP surface.
//!
//! [`build_app_router`] is used by the binary and by `tests/common` alike, so
//! the test suite runs against the same routes and layers as production.

use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::images::UPLOADS_PREFIX;
use crate::routes;
use crate::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the portfolio router.
///
/// ```text
/// /health              store health as JSON
/// /, /projects, /contact  public site
/// /cms/...             dashboard, inbox and project management
/// /static/*            STATIC_DIR
/// /uploads/*           uploaded project images under DATA_DIR
/// ```
///
/// Every request gets an `x-request-id` (echoed on the response) and a
/// tracing span. Project forms may carry images up to `MAX_UPLOAD_BYTES`;
/// a request running past `REQUEST_TIMEOUT_SECS` answers 408 and a panicking
/// handler answers 500.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .merge(routes::health::router())
        .merge(routes::site::router())
        .nest("/cms", routes::cms::router())
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .nest_service(UPLOADS_PREFIX, ServeDir::new(config.upload_dir()))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(build_cors_layer(config))
        .with_state(state)
}

/// CORS for the site's forms: `GET` pages and `POST` submissions from the
/// configured origins.
///
/// Panics on an origin that is not a valid header value; configuration is
/// read once at startup.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}
