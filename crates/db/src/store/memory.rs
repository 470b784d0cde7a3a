//! Process-local store. Nothing survives a restart.

use async_trait::async_trait;
use folio_core::slug::allocate_slug;
use folio_core::types::MessageId;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use super::{newest_first, RecordStore, StoreBackend, StoreResult};
use crate::models::contact_message::{ContactMessage, NewContactMessage};
use crate::models::project::Project;

#[derive(Default)]
struct Collections {
    projects: IndexMap<String, Project>,
    messages: IndexMap<MessageId, ContactMessage>,
}

/// In-memory [`RecordStore`].
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    fn backend(&self) -> StoreBackend {
        StoreBackend::Memory
    }

    async fn allocate_slug(&self, title: &str) -> StoreResult<String> {
        let inner = self.inner.read().await;
        Ok(allocate_slug(title, |candidate| {
            inner.projects.contains_key(candidate)
        }))
    }

    async fn upsert_project(&self, project: Project) -> StoreResult<()> {
        self.inner
            .write()
            .await
            .projects
            .insert(project.slug.clone(), project);
        Ok(())
    }

    async fn get_project(&self, slug: &str) -> StoreResult<Option<Project>> {
        Ok(self.inner.read().await.projects.get(slug).cloned())
    }

    async fn delete_project(&self, slug: &str) -> StoreResult<bool> {
        Ok(self
            .inner
            .write()
            .await
            .projects
            .shift_remove(slug)
            .is_some())
    }

    async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        Ok(self.inner.read().await.projects.values().cloned().collect())
    }

    async fn insert_message(&self, input: NewContactMessage) -> StoreResult<ContactMessage> {
        let message = input.into_message();
        self.inner
            .write()
            .await
            .messages
            .insert(message.id, message.clone());
        Ok(message)
    }

    async fn get_message(&self, id: MessageId) -> StoreResult<Option<ContactMessage>> {
        Ok(self.inner.read().await.messages.get(&id).cloned())
    }

    async fn delete_message(&self, id: MessageId) -> StoreResult<bool> {
        Ok(self
            .inner
            .write()
            .await
            .messages
            .shift_remove(&id)
            .is_some())
    }

    async fn list_messages(&self) -> StoreResult<Vec<ContactMessage>> {
        let messages = self.inner.read().await.messages.values().cloned().collect();
        Ok(newest_first(messages))
    }
}
