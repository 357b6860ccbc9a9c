use chrono::{DateTime, Utc};
use folio_core::content::{PHOTOS, Photo};
use folio_core::store::GalleryImage;

/// Terminal width from which the grid shows two columns.
pub const WIDE_MIN_WIDTH: u16 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GallerySource {
    /// Photos bundled with the app.
    Builtin,
    /// Rows fetched from the gallery store.
    Store,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryEntry {
    pub title: String,
    pub alt_text: String,
    pub url: String,
    pub description: Option<String>,
    pub added: Option<DateTime<Utc>>,
}

impl From<&GalleryImage> for GalleryEntry {
    fn from(image: &GalleryImage) -> Self {
        Self {
            title: image.title.clone(),
            alt_text: image.alt_text.clone(),
            url: image.image_url.clone(),
            description: image.description.clone(),
            added: Some(image.created_at),
        }
    }
}

impl From<&Photo> for GalleryEntry {
    fn from(photo: &Photo) -> Self {
        Self {
            title: photo.alt.to_string(),
            alt_text: photo.alt.to_string(),
            url: photo.src.to_string(),
            description: None,
            added: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GalleryState {
    pub entries: Vec<GalleryEntry>,
    pub source: GallerySource,
    pub selected: usize,
    pub store_configured: bool,
    /// Set once a store load has delivered rows (or nothing).
    pub loaded: bool,
}

impl GalleryState {
    pub fn new(store_configured: bool) -> Self {
        let entries = if store_configured {
            Vec::new()
        } else {
            builtin_entries()
        };
        Self {
            entries,
            source: GallerySource::Builtin,
            selected: 0,
            store_configured,
            loaded: !store_configured,
        }
    }

    pub fn needs_load(&self) -> bool {
        self.store_configured && !self.loaded
    }

    /// Marks the gallery for a fresh store load on the next mount.
    pub fn invalidate(&mut self) {
        if self.store_configured {
            self.loaded = false;
        }
    }

    /// Replaces entries with loaded rows; an empty result falls back to the
    /// bundled photos.
    pub fn apply_loaded(&mut self, images: &[GalleryImage]) {
        self.loaded = true;
        if images.is_empty() {
            self.entries = builtin_entries();
            self.source = GallerySource::Builtin;
        } else {
            self.entries = images.iter().map(GalleryEntry::from).collect();
            self.source = GallerySource::Store;
        }
        self.selected = self.selected.min(self.entries.len().saturating_sub(1));
    }

    pub fn selected_entry(&self) -> Option<&GalleryEntry> {
        self.entries.get(self.selected)
    }

    /// Moves the selection within a grid of `columns`. Returns whether it moved.
    pub fn move_selection(&mut self, dx: isize, dy: isize, columns: usize) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        let columns = columns.max(1);
        let row = self.selected / columns;
        let col = self.selected % columns;

        let Some(col) = col.checked_add_signed(dx).filter(|c| *c < columns) else {
            return false;
        };
        let Some(row) = row.checked_add_signed(dy) else {
            return false;
        };
        let target = row * columns + col;
        if target >= self.entries.len() || target == self.selected {
            return false;
        }
        self.selected = target;
        true
    }
}

pub fn builtin_entries() -> Vec<GalleryEntry> {
    PHOTOS.iter().map(GalleryEntry::from).collect()
}

pub fn columns_for_width(width: u16) -> usize {
    if width >= WIDE_MIN_WIDTH { 2 } else { 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: i64, title: &str, order: i32) -> GalleryImage {
        GalleryImage {
            id,
            title: title.to_string(),
            description: None,
            image_url: format!("https://cdn.example.com/{id}.jpg"),
            alt_text: format!("{title} alt"),
            created_at: Utc::now(),
            display_order: order,
        }
    }

    #[test]
    fn test_unconfigured_store_uses_builtin_photos() {
        let state = GalleryState::new(false);
        assert_eq!(state.entries.len(), PHOTOS.len());
        assert!(!state.needs_load());
    }

    #[test]
    fn test_empty_store_result_falls_back() {
        let mut state = GalleryState::new(true);
        assert!(state.needs_load());
        assert!(state.entries.is_empty());

        state.apply_loaded(&[]);
        assert_eq!(state.source, GallerySource::Builtin);
        assert_eq!(state.entries.len(), PHOTOS.len());
        assert!(!state.needs_load());
    }

    #[test]
    fn test_loaded_rows_replace_entries_and_clamp_selection() {
        let mut state = GalleryState::new(true);
        state.apply_loaded(&[image(1, "a", 0), image(2, "b", 1), image(3, "c", 2)]);
        state.selected = 2;

        state.apply_loaded(&[image(4, "d", 0)]);
        assert_eq!(state.source, GallerySource::Store);
        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_entry().unwrap().title, "d");
    }

    #[test]
    fn test_grid_movement() {
        // 7 builtin photos in two columns: rows 0..=3, last row has one cell.
        let mut state = GalleryState::new(false);
        assert!(state.move_selection(1, 0, 2));
        assert_eq!(state.selected, 1);
        assert!(!state.move_selection(1, 0, 2));
        assert!(state.move_selection(0, 2, 2));
        assert_eq!(state.selected, 5);
        // Row 3 column 1 does not exist.
        assert!(!state.move_selection(0, 1, 2));
        assert!(state.move_selection(-1, 1, 2));
        assert_eq!(state.selected, 6);
        assert!(!state.move_selection(-1, 0, 2));
        assert!(state.move_selection(0, -3, 2));
        assert_eq!(state.selected, 0);
        assert!(!state.move_selection(0, -1, 2));
    }

    #[test]
    fn test_columns_for_width() {
        assert_eq!(columns_for_width(59), 1);
        assert_eq!(columns_for_width(60), 2);
    }
}
