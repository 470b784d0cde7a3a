/// Contact messages are keyed by a random v4 UUID.
pub type MessageId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Image reference used for projects created without an upload.
pub const DEFAULT_PROJECT_IMAGE: &str = "/static/img/project_thumbnail.jpg";
