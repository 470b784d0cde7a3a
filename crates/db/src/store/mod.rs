//! The record store: one contract over projects and contact messages, with
//! interchangeable persistence backends.
//!
//! Handlers only ever see `Arc<dyn RecordStore>`, so swapping the backend is
//! a configuration change. Every backend serializes its own writes.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use async_trait::async_trait;
use folio_core::types::MessageId;

use crate::models::contact_message::{ContactMessage, NewContactMessage};
use crate::models::project::Project;

pub mod json_file;
pub mod memory;
pub mod sql;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use sql::SqlStore;

/// Failures a store can hit. "Record not found" is not one of them: lookups
/// return `Option` and deletes return `bool`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Which persistence strategy backs the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    JsonFile,
    Sqlite,
}

impl StoreBackend {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::JsonFile => "json",
            Self::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown store backend '{0}' (expected memory, json or sqlite)")]
pub struct UnknownBackend(pub String);

impl FromStr for StoreBackend {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "json" | "json_file" | "file" => Ok(Self::JsonFile),
            "sqlite" | "sql" | "database" => Ok(Self::Sqlite),
            other => Err(UnknownBackend(other.to_string())),
        }
    }
}

/// Persistence contract shared by every backend.
#[async_trait]
pub trait RecordStore: Send + Sync {
    fn backend(&self) -> StoreBackend;

    /// Check that the underlying storage is reachable.
    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    /// Derive an unused slug for `title` from the current project keys.
    async fn allocate_slug(&self, title: &str) -> StoreResult<String>;

    /// Insert a project or overwrite the one holding the same slug.
    async fn upsert_project(&self, project: Project) -> StoreResult<()>;

    async fn get_project(&self, slug: &str) -> StoreResult<Option<Project>>;

    /// Returns `false` when no project has this slug.
    async fn delete_project(&self, slug: &str) -> StoreResult<bool>;

    /// All projects in insertion order.
    async fn list_projects(&self) -> StoreResult<Vec<Project>>;

    /// Stamp and store a new message, returning it with its id.
    async fn insert_message(&self, input: NewContactMessage) -> StoreResult<ContactMessage>;

    async fn get_message(&self, id: MessageId) -> StoreResult<Option<ContactMessage>>;

    /// Returns `false` when no message has this id.
    async fn delete_message(&self, id: MessageId) -> StoreResult<bool>;

    /// All messages, newest first.
    async fn list_messages(&self) -> StoreResult<Vec<ContactMessage>>;
}

/// Order messages held in insertion order newest first. Equal timestamps
/// keep reverse insertion order.
pub(crate) fn newest_first(mut messages: Vec<ContactMessage>) -> Vec<ContactMessage> {
    messages.reverse();
    messages.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_names_parse() {
        assert_eq!("memory".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
        assert_eq!("JSON".parse::<StoreBackend>().unwrap(), StoreBackend::JsonFile);
        assert_eq!(" sqlite ".parse::<StoreBackend>().unwrap(), StoreBackend::Sqlite);
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let err = "redis".parse::<StoreBackend>().unwrap_err();
        assert_eq!(err.0, "redis");
    }

    #[test]
    fn backend_display_round_trips() {
        for backend in [StoreBackend::Memory, StoreBackend::JsonFile, StoreBackend::Sqlite] {
            assert_eq!(backend.to_string().parse::<StoreBackend>().unwrap(), backend);
        }
    }
}
