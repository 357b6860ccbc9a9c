//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer never performs I/O or spawns tasks itself.

use tokio_util::sync::CancellationToken;

use crate::common::TaskId;

#[derive(Debug)]
pub enum UiEffect {
    Quit,

    /// Open a URL (or `mailto:` link) outside the app.
    OpenExternal { url: String },

    /// Fetch gallery rows from the store.
    LoadGallery { task: TaskId },

    /// Cancel the gallery load in flight.
    CancelGalleryLoad { token: Option<CancellationToken> },
}
