//! Handlers for project management in the CMS (`/cms/projects`).

use axum::extract::{Path, State};
use axum::response::Redirect;
use folio_core::types::DEFAULT_PROJECT_IMAGE;
use folio_db::models::project::Project;

use super::ensure_project;
use crate::error::{AppError, AppResult};
use crate::forms::ProjectForm;
use crate::state::AppState;
use crate::views::{templates, Empty, ProjectDetail, ProjectList, View};

const LISTING: &str = "/cms/projects";

/// GET /cms/projects
pub async fn list(State(state): State<AppState>) -> AppResult<View<ProjectList>> {
    let projects = state.store.list_projects().await?;
    Ok(View::new(templates::CMS_PROJECTS, ProjectList { projects }))
}

/// GET /cms/projects/add
pub async fn add_form() -> View<Empty> {
    View::new(templates::CMS_ADD_PROJECT, Empty::default())
}

/// POST /cms/projects/add
///
/// Allocates a slug from the title, stores the uploaded image (or falls
/// back to the default thumbnail) and saves the project.
pub async fn create(State(state): State<AppState>, form: ProjectForm) -> AppResult<Redirect> {
    let title = form.title.clone().unwrap_or_default();
    let slug = state.store.allocate_slug(&title).await?;

    let uploaded = form.new_image();
    let image = match uploaded {
        Some(upload) => state.images.store(&slug, upload).await?,
        None => DEFAULT_PROJECT_IMAGE.to_string(),
    };

    let saved = state
        .store
        .upsert_project(Project {
            slug: slug.clone(),
            title,
            description: form.description.clone().unwrap_or_default(),
            image,
        })
        .await;

    if let Err(err) = saved {
        if uploaded.is_some() {
            if let Err(cleanup) = state.images.remove(&slug).await {
                tracing::warn!(%slug, error = %cleanup, "Could not remove image of unsaved project");
            }
        }
        return Err(err.into());
    }

    tracing::info!(%slug, "Project created");
    Ok(Redirect::to(LISTING))
}

/// GET /cms/projects/{slug}
pub async fn view(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<View<ProjectDetail>> {
    let project = ensure_project(&state, &slug).await?;
    Ok(View::new(templates::CMS_VIEW_PROJECT, ProjectDetail { project }))
}

/// GET /cms/projects/edit/{slug}
pub async fn edit_form(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<View<ProjectDetail>> {
    let project = ensure_project(&state, &slug).await?;
    Ok(View::new(templates::CMS_EDIT_PROJECT, ProjectDetail { project }))
}

/// POST /cms/projects/edit/{slug}
///
/// Submitted fields overwrite the stored ones; fields left out of the
/// submission keep their value. The image changes only when a new file was
/// selected. The slug never changes.
pub async fn update(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    form: ProjectForm,
) -> AppResult<Redirect> {
    let existing = ensure_project(&state, &slug).await?;

    let image = match form.new_image() {
        Some(upload) => state.images.store(&slug, upload).await?,
        None => existing.image,
    };

    state
        .store
        .upsert_project(Project {
            slug: existing.slug,
            title: form.title.unwrap_or(existing.title),
            description: form.description.unwrap_or(existing.description),
            image,
        })
        .await?;

    tracing::info!(%slug, "Project updated");
    Ok(Redirect::to(LISTING))
}

/// POST /cms/projects/delete/{slug}
///
/// Removes the project and any image files stored for it.
pub async fn delete(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Redirect> {
    if !state.store.delete_project(&slug).await? {
        return Err(AppError::project_not_found(&slug));
    }

    if let Err(err) = state.images.remove(&slug).await {
        tracing::warn!(%slug, error = %err, "Project deleted but its image files could not be removed");
    }

    tracing::info!(%slug, "Project deleted");
    Ok(Redirect::to(LISTING))
}
