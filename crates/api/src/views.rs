//! View hand-off to the template renderer.
//!
//! Handlers do not produce HTML. They return a [`View`]: the name of the
//! template to render plus its context, serialized as
//! `{ "template": ..., "data": ... }`.

use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use folio_core::dates::inbox_label;
use folio_db::models::contact_message::ContactMessage;
use folio_db::models::project::Project;
use serde::Serialize;

/// Template names, laid out as on the site.
pub mod templates {
    pub const HOME: &str = "website/home.html";
    pub const PROJECTS: &str = "website/projects.html";
    pub const VIEW_PROJECT: &str = "website/view_project.html";
    pub const CONTACT: &str = "website/contact.html";

    pub const CMS_DASHBOARD: &str = "cms/cms_dashboard.html";
    pub const CMS_INBOX: &str = "cms/cms_inbox.html";
    pub const CMS_VIEW_MESSAGE: &str = "cms/cms_view_message.html";
    pub const CMS_PROJECTS: &str = "cms/cms_projects.html";
    pub const CMS_ADD_PROJECT: &str = "cms/cms_add_project.html";
    pub const CMS_VIEW_PROJECT: &str = "cms/cms_view_project.html";
    pub const CMS_EDIT_PROJECT: &str = "cms/cms_edit_project.html";
}

/// A template name with the context it renders.
#[derive(Debug, Serialize)]
pub struct View<T: Serialize> {
    pub template: &'static str,
    pub data: T,
}

impl<T: Serialize> View<T> {
    pub fn new(template: &'static str, data: T) -> Self {
        Self { template, data }
    }
}

impl<T: Serialize> IntoResponse for View<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Context for templates that need none. Serializes as `{}`.
#[derive(Debug, Default, Serialize)]
pub struct Empty {}

#[derive(Debug, Serialize)]
pub struct ProjectList {
    pub projects: Vec<Project>,
}

#[derive(Debug, Serialize)]
pub struct ProjectDetail {
    pub project: Project,
}

/// A message as shown in the inbox: all stored fields plus a short date.
#[derive(Debug, Serialize)]
pub struct InboxEntry {
    #[serde(flatten)]
    pub message: ContactMessage,
    pub formatted_date: String,
}

impl From<ContactMessage> for InboxEntry {
    fn from(message: ContactMessage) -> Self {
        let formatted_date = inbox_label(message.timestamp, Utc::now());
        Self {
            message,
            formatted_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Inbox {
    pub messages: Vec<InboxEntry>,
}

#[derive(Debug, Serialize)]
pub struct MessageDetail {
    pub message: InboxEntry,
}
