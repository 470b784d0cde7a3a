//! Contact message entity model and DTO.

use folio_core::types::{MessageId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A message submitted through the public contact form.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ContactMessage {
    pub id: MessageId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub timestamp: Timestamp,
}

/// Fields supplied by the visitor. The store assigns id and timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewContactMessage {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl NewContactMessage {
    /// Stamp the submission with a fresh id and the current time.
    pub fn into_message(self) -> ContactMessage {
        ContactMessage {
            id: uuid::Uuid::new_v4(),
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            timestamp: chrono::Utc::now(),
        }
    }
}
