//! Project entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A portfolio project, keyed by its slug.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Project {
    /// URL key derived from the title at creation; never changes.
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Inline `data:` URL, public path of a stored upload, or the default
    /// thumbnail path.
    pub image: String,
}
