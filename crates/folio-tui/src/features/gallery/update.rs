use crossterm::event::{KeyCode, KeyEvent};
use folio_core::store::GalleryImage;

use super::state::GalleryState;

/// What a key press in the gallery asks the reducer to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryKeyOutcome {
    Moved,
    /// Open the selected image.
    Open(String),
    /// The selected entry has no absolute URL to open.
    NoLink,
    Reload,
    /// Not a gallery key; fall through to global handling.
    Ignored,
}

pub fn handle_key(state: &mut GalleryState, columns: usize, key: KeyEvent) -> GalleryKeyOutcome {
    let (dx, dy) = match key.code {
        KeyCode::Left | KeyCode::Char('h') => (-1, 0),
        KeyCode::Right | KeyCode::Char('l') => (1, 0),
        KeyCode::Up | KeyCode::Char('k') => (0, -1),
        KeyCode::Down | KeyCode::Char('j') => (0, 1),
        KeyCode::Enter => {
            return match state.selected_entry() {
                Some(entry) if is_openable(&entry.url) => {
                    GalleryKeyOutcome::Open(entry.url.clone())
                }
                _ => GalleryKeyOutcome::NoLink,
            };
        }
        KeyCode::Char('r') => return GalleryKeyOutcome::Reload,
        _ => return GalleryKeyOutcome::Ignored,
    };
    // Edge moves are swallowed so arrows never leak into nav focus here.
    state.move_selection(dx, dy, columns);
    GalleryKeyOutcome::Moved
}

pub fn on_loaded(state: &mut GalleryState, images: &[GalleryImage]) {
    tracing::info!(count = images.len(), "Gallery loaded");
    state.apply_loaded(images);
}

fn is_openable(link: &str) -> bool {
    url::Url::parse(link).is_ok_and(|u| matches!(u.scheme(), "http" | "https"))
}
