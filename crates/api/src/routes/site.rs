//! Route definitions for the public site.

use axum::routing::get;
use axum::Router;

use crate::handlers::{contact, site};
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// GET    /                   -> home
/// GET    /projects           -> list_projects
/// GET    /projects/{slug}    -> show_project
/// GET    /contact            -> form
/// POST   /contact            -> submit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(site::home))
        .route("/projects", get(site::list_projects))
        .route("/projects/{slug}", get(site::show_project))
        .route("/contact", get(contact::form).post(contact::submit))
}
