//! Repository for the `contact_messages` table.

use folio_core::types::MessageId;
use sqlx::SqlitePool;

use crate::models::contact_message::ContactMessage;

const COLUMNS: &str = "id, first_name, last_name, email, subject, message, timestamp";

/// Provides create/read/delete operations for contact messages.
pub struct ContactMessageRepo;

impl ContactMessageRepo {
    /// Insert a fully stamped message.
    pub async fn create(pool: &SqlitePool, message: &ContactMessage) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO contact_messages
                (id, first_name, last_name, email, subject, message, timestamp)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(message.id)
        .bind(&message.first_name)
        .bind(&message.last_name)
        .bind(&message.email)
        .bind(&message.subject)
        .bind(&message.message)
        .bind(message.timestamp)
        .execute(pool)
        .await?;
        Ok(())
    }

    pub async fn find_by_id(
        pool: &SqlitePool,
        id: MessageId,
    ) -> Result<Option<ContactMessage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_messages WHERE id = ?1");
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all messages, newest first. Messages sharing a timestamp come
    /// back in reverse insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<ContactMessage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contact_messages ORDER BY timestamp DESC, rowid DESC"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .fetch_all(pool)
            .await
    }

    /// Permanently delete a message. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: MessageId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
