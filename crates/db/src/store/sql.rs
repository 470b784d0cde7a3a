//! Store backed by a SQLite database through the repositories.

use std::collections::HashSet;

use async_trait::async_trait;
use folio_core::slug::allocate_slug;
use folio_core::types::MessageId;

use super::{RecordStore, StoreBackend, StoreResult};
use crate::models::contact_message::{ContactMessage, NewContactMessage};
use crate::models::project::Project;
use crate::repositories::{ContactMessageRepo, ProjectRepo};
use crate::DbPool;

/// SQLite [`RecordStore`]. Each operation is a single statement, so the
/// database's own locking keeps concurrent writers consistent.
#[derive(Clone)]
pub struct SqlStore {
    pool: DbPool,
}

impl SqlStore {
    /// Wrap an existing pool. The schema must already be migrated.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url` and apply pending migrations.
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let pool = crate::create_pool(database_url).await?;
        tracing::info!("Database connection pool created");

        crate::run_migrations(&pool).await?;
        tracing::info!("Database migrations applied");

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl RecordStore for SqlStore {
    fn backend(&self) -> StoreBackend {
        StoreBackend::Sqlite
    }

    async fn health_check(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn allocate_slug(&self, title: &str) -> StoreResult<String> {
        let taken: HashSet<String> = ProjectRepo::list_slugs(&self.pool)
            .await?
            .into_iter()
            .collect();
        Ok(allocate_slug(title, |candidate| taken.contains(candidate)))
    }

    async fn upsert_project(&self, project: Project) -> StoreResult<()> {
        ProjectRepo::upsert(&self.pool, &project).await?;
        Ok(())
    }

    async fn get_project(&self, slug: &str) -> StoreResult<Option<Project>> {
        Ok(ProjectRepo::find_by_slug(&self.pool, slug).await?)
    }

    async fn delete_project(&self, slug: &str) -> StoreResult<bool> {
        Ok(ProjectRepo::delete(&self.pool, slug).await?)
    }

    async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        Ok(ProjectRepo::list(&self.pool).await?)
    }

    async fn insert_message(&self, input: NewContactMessage) -> StoreResult<ContactMessage> {
        let message = input.into_message();
        ContactMessageRepo::create(&self.pool, &message).await?;
        Ok(message)
    }

    async fn get_message(&self, id: MessageId) -> StoreResult<Option<ContactMessage>> {
        Ok(ContactMessageRepo::find_by_id(&self.pool, id).await?)
    }

    async fn delete_message(&self, id: MessageId) -> StoreResult<bool> {
        Ok(ContactMessageRepo::delete(&self.pool, id).await?)
    }

    async fn list_messages(&self) -> StoreResult<Vec<ContactMessage>> {
        Ok(ContactMessageRepo::list(&self.pool).await?)
    }
}
