//! Handler for the CMS landing page.

use crate::views::{templates, Empty, View};

/// GET /cms
pub async fn index() -> View<Empty> {
    View::new(templates::CMS_DASHBOARD, Empty::default())
}
