//! Project image storage.
//!
//! An uploaded image becomes a string reference stored on the project:
//! either the bytes themselves as a `data:` URL, or the public path of a file
//! written under a per-project directory.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use folio_db::store::{StoreError, StoreResult};

/// URL prefix under which the upload directory is served.
pub const UPLOADS_PREFIX: &str = "/uploads";

/// Content type assumed when the client sends none (or a non-image one).
const FALLBACK_CONTENT_TYPE: &str = "image/jpeg";

/// An image part received with a project form.
#[derive(Debug, Clone, Default)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Browsers send an empty file part when nothing was selected.
    pub fn is_present(&self) -> bool {
        !self.file_name.is_empty() && !self.bytes.is_empty()
    }
}

/// Where project images are kept.
#[derive(Debug, Clone)]
pub enum ImageStorage {
    /// Encode the bytes into the project record itself.
    Inline,
    /// Write files to `root/{slug}/` and reference them by public path.
    Directory { root: PathBuf },
}

impl ImageStorage {
    /// Persist `upload` for the project `slug` and return its reference.
    ///
    /// In directory mode the new file is written first and any other file in
    /// the project's directory is removed afterwards, so a project never owns
    /// more than one file and a failed write leaves the previous image intact.
    pub async fn store(&self, slug: &str, upload: &ImageUpload) -> StoreResult<String> {
        match self {
            Self::Inline => Ok(data_url(upload)),
            Self::Directory { root } => {
                let dir = root.join(slug);
                tokio::fs::create_dir_all(&dir)
                    .await
                    .map_err(|source| StoreError::Io {
                        path: dir.clone(),
                        source,
                    })?;

                let file_name = sanitize_file_name(&upload.file_name);
                let path = dir.join(&file_name);
                tokio::fs::write(&path, &upload.bytes)
                    .await
                    .map_err(|source| StoreError::Io { path, source })?;

                remove_others(&dir, &file_name).await?;

                tracing::debug!(slug, file = %file_name, "Stored project image");
                Ok(format!("{UPLOADS_PREFIX}/{slug}/{file_name}"))
            }
        }
    }

    /// Delete every stored file of project `slug`. Inline images live in the
    /// record and vanish with it.
    pub async fn remove(&self, slug: &str) -> StoreResult<()> {
        match self {
            Self::Inline => Ok(()),
            Self::Directory { root } => remove_dir(&root.join(slug)).await,
        }
    }
}

fn data_url(upload: &ImageUpload) -> String {
    let content_type = upload
        .content_type
        .as_deref()
        .filter(|ct| ct.starts_with("image/"))
        .unwrap_or(FALLBACK_CONTENT_TYPE);
    format!(
        "data:{content_type};base64,{}",
        STANDARD.encode(&upload.bytes)
    )
}

async fn remove_dir(dir: &Path) -> StoreResult<()> {
    match tokio::fs::remove_dir_all(dir).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(StoreError::Io {
            path: dir.to_path_buf(),
            source,
        }),
    }
}

/// Delete every entry of `dir` except `keep`.
async fn remove_others(dir: &Path, keep: &str) -> StoreResult<()> {
    let io_err = |source: std::io::Error| StoreError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut entries = tokio::fs::read_dir(dir).await.map_err(io_err)?;
    while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
        if entry.file_name() == keep {
            continue;
        }
        let path = entry.path();
        let result = if entry.file_type().await.map_err(io_err)?.is_dir() {
            tokio::fs::remove_dir_all(&path).await
        } else {
            tokio::fs::remove_file(&path).await
        };
        result.map_err(|source| StoreError::Io { path, source })?;
    }
    Ok(())
}

/// Reduce a client-supplied file name to a safe single path component.
fn sanitize_file_name(raw: &str) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');

    if cleaned.is_empty() {
        "image".to_string()
    } else {
        cleaned.to_string()
    }
}
