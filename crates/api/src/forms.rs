//! Form payloads accepted by the site and the CMS.
//!
//! Fields are read loosely: a field missing from the submission is treated
//! as empty (or, on edit, as "keep the stored value"). No server-side
//! validation happens here. Both `application/x-www-form-urlencoded` and
//! `multipart/form-data` bodies are understood; a request with no body or
//! any other content type reads as a form with every field absent.

use std::collections::HashMap;

use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Form;
use folio_db::models::contact_message::NewContactMessage;

use crate::error::AppError;
use crate::images::ImageUpload;

/// Name of the file part carrying a project image.
const IMAGE_FIELD: &str = "image";

/// Raw fields of a submitted form, whatever its encoding.
#[derive(Debug, Default)]
pub struct FormFields {
    text: HashMap<String, String>,
    image: Option<ImageUpload>,
}

impl FormFields {
    /// Take the first present value among `names`.
    fn take(&mut self, names: &[&str]) -> Option<String> {
        names.iter().find_map(|name| self.text.remove(*name))
    }
}

fn content_type(req: &Request) -> Option<&str> {
    req.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
}

impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Some(ct) = content_type(&req).map(str::to_ascii_lowercase) else {
            return Ok(Self::default());
        };

        if ct.starts_with("application/x-www-form-urlencoded") {
            let Form(text) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            return Ok(Self { text, image: None });
        }

        if !ct.starts_with("multipart/form-data") {
            tracing::debug!(content_type = %ct, "Ignoring form body with unsupported content type");
            return Ok(Self::default());
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let mut form = Self::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            let name = field.name().unwrap_or("").to_string();
            if name == IMAGE_FIELD && field.file_name().is_some() {
                let file_name = field.file_name().unwrap_or("").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                form.image = Some(ImageUpload {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            } else if field.file_name().is_none() {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                form.text.insert(name, text);
            }
            // Other file parts are skipped.
        }

        Ok(form)
    }
}

/// Public contact form. Accepts both snake_case and the camelCase names
/// used by the site's original markup.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl From<FormFields> for ContactForm {
    fn from(mut fields: FormFields) -> Self {
        Self {
            first_name: fields.take(&["first_name", "firstName"]).unwrap_or_default(),
            last_name: fields.take(&["last_name", "lastName"]).unwrap_or_default(),
            email: fields.take(&["email"]).unwrap_or_default(),
            subject: fields.take(&["subject"]).unwrap_or_default(),
            message: fields.take(&["message"]).unwrap_or_default(),
        }
    }
}

impl From<ContactForm> for NewContactMessage {
    fn from(form: ContactForm) -> Self {
        Self {
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            subject: form.subject,
            message: form.message,
        }
    }
}

impl<S> FromRequest<S> for ContactForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        FormFields::from_request(req, state).await.map(Into::into)
    }
}

/// CMS project form. May carry an `image` file part when multipart.
///
/// `None` means the field was not submitted at all.
#[derive(Debug, Default)]
pub struct ProjectForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<ImageUpload>,
}

impl ProjectForm {
    /// The uploaded image, if one was actually selected.
    pub fn new_image(&self) -> Option<&ImageUpload> {
        self.image.as_ref().filter(|upload| upload.is_present())
    }
}

impl From<FormFields> for ProjectForm {
    fn from(mut fields: FormFields) -> Self {
        Self {
            title: fields.take(&["title"]),
            description: fields.take(&["description"]),
            image: fields.image,
        }
    }
}

impl<S> FromRequest<S> for ProjectForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        FormFields::from_request(req, state).await.map(Into::into)
    }
}
