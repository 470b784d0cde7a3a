//! Store backed by two JSON documents in a data directory:
//!
//! ```text
//! {data_dir}/projects.json   { "<slug>": { "title", "description", "image" } }
//! {data_dir}/messages.json   { "<uuid>": { "first_name", ..., "timestamp" } }
//! ```
//!
//! A missing file reads as an empty collection. A file that cannot be read
//! or decoded is reported with a warning and also reads as empty.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use folio_core::slug::allocate_slug;
use folio_core::types::{MessageId, Timestamp};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use super::{newest_first, RecordStore, StoreBackend, StoreError, StoreResult};
use crate::models::contact_message::{ContactMessage, NewContactMessage};
use crate::models::project::Project;

pub const PROJECTS_FILE: &str = "projects.json";
pub const MESSAGES_FILE: &str = "messages.json";

type ProjectMap = IndexMap<String, ProjectRecord>;
type MessageMap = IndexMap<MessageId, MessageRecord>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct ProjectRecord {
    title: String,
    description: String,
    image: String,
}

impl ProjectRecord {
    fn into_project(self, slug: String) -> Project {
        Project {
            slug,
            title: self.title,
            description: self.description,
            image: self.image,
        }
    }
}

impl From<Project> for ProjectRecord {
    fn from(p: Project) -> Self {
        Self {
            title: p.title,
            description: p.description,
            image: p.image,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MessageRecord {
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    subject: String,
    #[serde(default)]
    message: String,
    timestamp: Timestamp,
}

impl MessageRecord {
    fn into_message(self, id: MessageId) -> ContactMessage {
        ContactMessage {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            timestamp: self.timestamp,
        }
    }
}

impl From<ContactMessage> for MessageRecord {
    fn from(m: ContactMessage) -> Self {
        Self {
            first_name: m.first_name,
            last_name: m.last_name,
            email: m.email,
            subject: m.subject,
            message: m.message,
            timestamp: m.timestamp,
        }
    }
}

/// JSON-file [`RecordStore`].
///
/// Each write holds `write_lock` across its whole read-modify-write cycle
/// and replaces the target file by renaming a fully written sibling, so
/// readers never observe a partial document.
pub struct JsonFileStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open (creating if needed) the data directory.
    pub async fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|source| StoreError::Io {
                path: dir.clone(),
                source,
            })?;
        tracing::info!(dir = %dir.display(), "Opened JSON file store");
        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.dir
    }

    async fn load<T: DeserializeOwned + Default>(&self, file: &str) -> T {
        let path = self.dir.join(file);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return T::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Could not read data file, using empty collection");
                return T::default();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Could not decode data file, using empty collection");
                T::default()
            }
        }
    }

    async fn save<T: Serialize>(&self, file: &str, value: &T) -> StoreResult<()> {
        let path = self.dir.join(file);
        let tmp = self.dir.join(format!("{file}.tmp"));
        let bytes = serde_json::to_vec_pretty(value)?;

        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|source| StoreError::Io {
                path: tmp.clone(),
                source,
            })?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|source| StoreError::Io { path, source })
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    fn backend(&self) -> StoreBackend {
        StoreBackend::JsonFile
    }

    async fn health_check(&self) -> StoreResult<()> {
        tokio::fs::metadata(&self.dir)
            .await
            .map(|_| ())
            .map_err(|source| StoreError::Io {
                path: self.dir.clone(),
                source,
            })
    }

    async fn allocate_slug(&self, title: &str) -> StoreResult<String> {
        let projects: ProjectMap = self.load(PROJECTS_FILE).await;
        Ok(allocate_slug(title, |candidate| {
            projects.contains_key(candidate)
        }))
    }

    async fn upsert_project(&self, project: Project) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut projects: ProjectMap = self.load(PROJECTS_FILE).await;
        projects.insert(project.slug.clone(), project.into());
        self.save(PROJECTS_FILE, &projects).await
    }

    async fn get_project(&self, slug: &str) -> StoreResult<Option<Project>> {
        let mut projects: ProjectMap = self.load(PROJECTS_FILE).await;
        Ok(projects
            .shift_remove(slug)
            .map(|record| record.into_project(slug.to_string())))
    }

    async fn delete_project(&self, slug: &str) -> StoreResult<bool> {
        let _guard = self.write_lock.lock().await;
        let mut projects: ProjectMap = self.load(PROJECTS_FILE).await;
        if projects.shift_remove(slug).is_none() {
            return Ok(false);
        }
        self.save(PROJECTS_FILE, &projects).await?;
        Ok(true)
    }

    async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        let projects: ProjectMap = self.load(PROJECTS_FILE).await;
        Ok(projects
            .into_iter()
            .map(|(slug, record)| record.into_project(slug))
            .collect())
    }

    async fn insert_message(&self, input: NewContactMessage) -> StoreResult<ContactMessage> {
        let message = input.into_message();
        let _guard = self.write_lock.lock().await;
        let mut messages: MessageMap = self.load(MESSAGES_FILE).await;
        messages.insert(message.id, message.clone().into());
        self.save(MESSAGES_FILE, &messages).await?;
        Ok(message)
    }

    async fn get_message(&self, id: MessageId) -> StoreResult<Option<ContactMessage>> {
        let mut messages: MessageMap = self.load(MESSAGES_FILE).await;
        Ok(messages
            .shift_remove(&id)
            .map(|record| record.into_message(id)))
    }

    async fn delete_message(&self, id: MessageId) -> StoreResult<bool> {
        let _guard = self.write_lock.lock().await;
        let mut messages: MessageMap = self.load(MESSAGES_FILE).await;
        if messages.shift_remove(&id).is_none() {
            return Ok(false);
        }
        self.save(MESSAGES_FILE, &messages).await?;
        Ok(true)
    }

    async fn list_messages(&self) -> StoreResult<Vec<ContactMessage>> {
        let messages: MessageMap = self.load(MESSAGES_FILE).await;
        Ok(newest_first(
            messages
                .into_iter()
                .map(|(id, record)| record.into_message(id))
                .collect(),
        ))
    }
}
