//! Application state.
//!
//! ```text
//! AppState
//! ├── view: ViewId            (active view)
//! ├── nav: NavState           (tabs, focused tab)
//! ├── home / projects         (mounted reveals)
//! ├── gallery: GalleryState   (entries, selection, source)
//! ├── task_seq / gallery_load (async task lifecycle)
//! └── status_line             (debug line counters)
//! ```
//!
//! Only the reducer mutates state. Views own their reveals: mounting a view
//! starts them, leaving it drops them, which cancels every pending tick.

use folio_core::config::{Config, RevealSettings};
use folio_core::tabs::ViewId;

use crate::common::{TaskSeq, TaskState};
use crate::features::gallery::GalleryState;
use crate::features::home::HomeState;
use crate::features::nav::NavState;
use crate::features::projects::ProjectsState;
use crate::statusline::StatusLineAccumulator;

pub struct AppState {
    pub should_quit: bool,
    pub view: ViewId,
    pub nav: NavState,
    pub home: HomeState,
    pub projects: ProjectsState,
    pub gallery: GalleryState,
    /// Reveal timing from config.
    pub reveal: RevealSettings,
    pub task_seq: TaskSeq,
    pub gallery_load: TaskState,
    pub status_line: StatusLineAccumulator,
    pub show_debug_status: bool,
    pub spinner_frame: usize,
    /// Last known terminal size.
    pub width: u16,
    pub height: u16,
    /// One-line message shown in place of the key help.
    pub notice: Option<String>,
}

impl AppState {
    /// Creates unmounted state; call `update::start` to mount the first view.
    pub fn new(config: &Config, start_view: ViewId, store_configured: bool) -> Self {
        let mut nav = NavState::new();
        nav.focus_view(start_view);
        Self {
            should_quit: false,
            view: start_view,
            nav,
            home: HomeState::default(),
            projects: ProjectsState::default(),
            gallery: GalleryState::new(store_configured),
            reveal: config.reveal,
            task_seq: TaskSeq::default(),
            gallery_load: TaskState::default(),
            status_line: StatusLineAccumulator::new(),
            show_debug_status: false,
            spinner_frame: 0,
            width: 0,
            height: 0,
            notice: None,
        }
    }

    /// True while any mounted reveal still has characters scheduled.
    pub fn is_animating(&self) -> bool {
        self.home.is_animating() || self.projects.is_animating()
    }

    /// Number of reveals with pending ticks.
    pub fn live_reveals(&self) -> usize {
        self.home.live_reveals() + self.projects.live_reveals()
    }
}
