//! Handlers for the CMS inbox (`/cms/inbox`).

use axum::extract::{Path, State};
use axum::response::Redirect;
use folio_core::types::MessageId;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::{templates, Inbox, MessageDetail, View};

/// Parse a message id from a path segment. Anything that is not a UUID
/// cannot name a stored message, so it reads as "not found".
fn parse_message_id(raw: &str) -> AppResult<MessageId> {
    MessageId::parse_str(raw).map_err(|_| AppError::message_not_found(raw))
}

/// GET /cms/inbox
///
/// Messages newest first, each with a short display date.
pub async fn list(State(state): State<AppState>) -> AppResult<View<Inbox>> {
    let messages = state.store.list_messages().await?;
    Ok(View::new(
        templates::CMS_INBOX,
        Inbox {
            messages: messages.into_iter().map(Into::into).collect(),
        },
    ))
}

/// GET /cms/inbox/view/{id}
pub async fn view(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<View<MessageDetail>> {
    let id = parse_message_id(&id)?;
    let message = state
        .store
        .get_message(id)
        .await?
        .ok_or_else(|| AppError::message_not_found(id))?;
    Ok(View::new(
        templates::CMS_VIEW_MESSAGE,
        MessageDetail {
            message: message.into(),
        },
    ))
}

/// POST /cms/inbox/delete/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Redirect> {
    let id = parse_message_id(&id)?;
    if !state.store.delete_message(id).await? {
        return Err(AppError::message_not_found(id));
    }
    tracing::info!(message_id = %id, "Contact message deleted");
    Ok(Redirect::to("/cms/inbox"))
}
