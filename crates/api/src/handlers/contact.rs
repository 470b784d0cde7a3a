//! Handlers for the public contact form.

use axum::extract::State;
use axum::response::Redirect;

use crate::error::AppResult;
use crate::forms::ContactForm;
use crate::state::AppState;
use crate::views::{templates, Empty, View};

/// GET /contact
pub async fn form() -> View<Empty> {
    View::new(templates::CONTACT, Empty::default())
}

/// POST /contact
///
/// Stores the submission and sends the visitor back to the form.
pub async fn submit(
    State(state): State<AppState>,
    input: ContactForm,
) -> AppResult<Redirect> {
    let message = state.store.insert_message(input.into()).await?;
    tracing::info!(message_id = %message.id, subject = %message.subject, "Contact message received");
    Ok(Redirect::to("/contact"))
}
