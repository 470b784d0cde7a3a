//! Handlers for the public portfolio pages.

use axum::extract::{Path, State};

use super::ensure_project;
use crate::error::AppResult;
use crate::state::AppState;
use crate::views::{templates, Empty, ProjectDetail, ProjectList, View};

/// GET /
pub async fn home() -> View<Empty> {
    View::new(templates::HOME, Empty::default())
}

/// GET /projects
pub async fn list_projects(State(state): State<AppState>) -> AppResult<View<ProjectList>> {
    let projects = state.store.list_projects().await?;
    Ok(View::new(templates::PROJECTS, ProjectList { projects }))
}

/// GET /projects/{slug}
pub async fn show_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<View<ProjectDetail>> {
    let project = ensure_project(&state, &slug).await?;
    Ok(View::new(templates::VIEW_PROJECT, ProjectDetail { project }))
}
