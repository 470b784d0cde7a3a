//! Route definitions for the administrative panel.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{dashboard, inbox, project};
use crate::state::AppState;

/// Routes mounted at `/cms`.
///
/// ```text
/// GET    /                           -> dashboard
///
/// GET    /inbox                      -> list
/// GET    /inbox/view/{id}            -> view
/// POST   /inbox/delete/{id}          -> delete
///
/// GET    /projects                   -> list
/// GET    /projects/add               -> add_form
/// POST   /projects/add               -> create
/// GET    /projects/{slug}            -> view
/// GET    /projects/edit/{slug}       -> edit_form
/// POST   /projects/edit/{slug}       -> update
/// POST   /projects/delete/{slug}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    let inbox_routes = Router::new()
        .route("/", get(inbox::list))
        .route("/view/{id}", get(inbox::view))
        .route("/delete/{id}", post(inbox::delete));

    let project_routes = Router::new()
        .route("/", get(project::list))
        .route("/add", get(project::add_form).post(project::create))
        .route("/{slug}", get(project::view))
        .route(
            "/edit/{slug}",
            get(project::edit_form).post(project::update),
        )
        .route("/delete/{slug}", post(project::delete));

    Router::new()
        .route("/", get(dashboard::index))
        .nest("/inbox", inbox_routes)
        .nest("/projects", project_routes)
}
