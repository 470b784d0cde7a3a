//! Request handlers.
//!
//! Each submodule provides async handler functions for one area of the
//! site. Handlers perform a single record-store operation, then return a
//! [`View`](crate::views::View) or a redirect, mapping failures via
//! [`AppError`](crate::error::AppError).

pub mod contact;
pub mod dashboard;
pub mod inbox;
pub mod project;
pub mod site;

use folio_db::models::project::Project;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Fetch a project by slug or return 404.
async fn ensure_project(state: &AppState, slug: &str) -> AppResult<Project> {
    state
        .store
        .get_project(slug)
        .await?
        .ok_or_else(|| AppError::project_not_found(slug))
}
