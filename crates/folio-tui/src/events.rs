//! UI event types.
//!
//! Everything the reducer reacts to arrives as a `UiEvent`: timer ticks,
//! frame sizes, terminal input and the results of spawned tasks.

use crossterm::event::Event;
use folio_core::store::GalleryImage;

use crate::common::{TaskCompleted, TaskStarted};

#[derive(Debug)]
pub enum UiEvent {
    /// Render cadence. Only ticks mark the frame dirty.
    Tick,
    /// Current terminal size, sent before the other events of a loop turn.
    Frame { width: u16, height: u16 },
    Terminal(Event),
    GalleryLoadStarted(TaskStarted),
    /// Rows from a gallery load. Empty when the store failed or the load was
    /// cancelled.
    GalleryLoadCompleted(TaskCompleted<Vec<GalleryImage>>),
    ExternalOpenFailed { url: String, error: String },
}
