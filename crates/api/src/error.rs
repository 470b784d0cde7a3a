use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_core::error::CoreError;
use folio_db::store::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for persistence
/// failures. Implements [`IntoResponse`] to produce plain-text responses:
/// a missing record is a 404 naming the entity, anything unexpected is a
/// bare 500 with the detail logged.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `folio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A persistence failure from the record store or image storage.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn project_not_found(slug: &str) -> Self {
        Self::Core(CoreError::NotFound {
            entity: "Project",
            key: slug.to_string(),
        })
    }

    pub fn message_not_found(id: impl ToString) -> Self {
        Self::Core(CoreError::NotFound {
            entity: "Message",
            key: id.to_string(),
        })
    }
}

const INTERNAL_MESSAGE: &str = "Internal Server Error";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(CoreError::NotFound { entity, .. }) => {
                (StatusCode::NOT_FOUND, format!("{entity} not found"))
            }
            AppError::Store(err) => {
                tracing::error!(error = %err, "Store error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        (status, message).into_response()
    }
}
