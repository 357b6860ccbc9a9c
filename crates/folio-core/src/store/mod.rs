//! Gallery image metadata in a hosted row store.
//!
//! The store speaks the PostgREST dialect (`/rest/v1/<table>`). Two operations
//! exist, each in a fallible `try_*` form and a degraded form that logs the
//! failure and returns an empty/`None` result for the UI.

mod client;
mod error;

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use client::GalleryClient;
pub use error::{StoreError, StoreErrorKind, StoreResult};

/// A stored gallery image row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image_url: String,
    pub alt_text: String,
    pub created_at: DateTime<Utc>,
    pub display_order: i32,
}

/// A gallery image row before the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGalleryImage {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image_url: String,
    pub alt_text: String,
    pub display_order: i32,
}

/// Connection settings, resolved from config and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Base URL without trailing slash.
    pub base_url: String,
    pub api_key: String,
    pub table: String,
    /// Per-request timeout (`None` disables).
    pub timeout: Option<Duration>,
}
