//! Gallery view: a grid of image surfaces backed by the gallery store, with
//! the bundled photo list as fallback.

mod render;
mod state;
mod update;

pub use render::render_gallery;
pub use state::{
    GalleryEntry, GallerySource, GalleryState, WIDE_MIN_WIDTH, builtin_entries, columns_for_width,
};
pub use update::{GalleryKeyOutcome, handle_key, on_loaded};
