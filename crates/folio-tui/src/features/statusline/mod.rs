//! Debug status line (F12): frame rate, live reveals, running tasks and the
//! terminal size.

mod render;
mod state;

pub use render::render_debug_status_line;
pub use state::{StatusLine, StatusLineAccumulator};
