//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio_core::tabs::{TabOutcome, ViewId};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::gallery::{self, GalleryKeyOutcome};
use crate::state::AppState;

/// Mounts the start view. Called once before the first event.
pub fn start(app: &mut AppState) -> Vec<UiEffect> {
    let view = app.view;
    mount_view(app, view)
}

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Frame { width, height } => {
            app.width = width;
            app.height = height;
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::GalleryLoadStarted(started) => {
            app.gallery_load.on_started(&started);
            vec![]
        }
        UiEvent::GalleryLoadCompleted(completed) => {
            if !app.gallery_load.finish_if_active(completed.id) {
                tracing::debug!(id = completed.id.0, "Dropping stale gallery load");
                return vec![];
            }
            gallery::on_loaded(&mut app.gallery, &completed.result);
            vec![]
        }
        UiEvent::ExternalOpenFailed { url, error } => {
            tracing::warn!(%url, %error, "Failed to open link");
            app.notice = Some(format!("Could not open {url}"));
            vec![]
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    app.notice = None;

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return vec![UiEffect::Quit];
        }
        KeyCode::Char('q') | KeyCode::Esc => return vec![UiEffect::Quit],
        KeyCode::F(12) => {
            app.show_debug_status = !app.show_debug_status;
            return vec![];
        }
        KeyCode::Char(digit @ '1'..='9') => {
            let index = digit as usize - '1' as usize;
            return activate_tab(app, index);
        }
        KeyCode::Tab => {
            app.nav.focus_next();
            return vec![];
        }
        KeyCode::BackTab => {
            app.nav.focus_prev();
            return vec![];
        }
        _ => {}
    }

    if app.view == ViewId::Gallery {
        let columns = gallery::columns_for_width(app.width);
        match gallery::handle_key(&mut app.gallery, columns, key) {
            GalleryKeyOutcome::Moved => return vec![],
            GalleryKeyOutcome::Open(url) => return vec![UiEffect::OpenExternal { url }],
            GalleryKeyOutcome::NoLink => {
                app.notice = Some("This photo has no public link".to_string());
                return vec![];
            }
            GalleryKeyOutcome::Reload => {
                app.gallery.invalidate();
                return request_gallery_load(app);
            }
            GalleryKeyOutcome::Ignored => {}
        }
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') => {
            app.nav.focus_prev();
            vec![]
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.nav.focus_next();
            vec![]
        }
        KeyCode::Enter => {
            let focused = app.nav.focused;
            activate_tab(app, focused)
        }
        _ => vec![],
    }
}

fn activate_tab(app: &mut AppState, index: usize) -> Vec<UiEffect> {
    let previous = app.view;
    let Some(outcome) = app.nav.activate(index, &mut app.view) else {
        return vec![];
    };
    match outcome {
        TabOutcome::Switched(view) => {
            tracing::debug!(from = %previous, to = %view, "Switching view");
            let mut effects = unmount_view(app, previous);
            effects.extend(mount_view(app, view));
            effects
        }
        TabOutcome::Unchanged => vec![],
        TabOutcome::Open(url) => vec![UiEffect::OpenExternal { url }],
    }
}

fn mount_view(app: &mut AppState, view: ViewId) -> Vec<UiEffect> {
    match view {
        ViewId::Home => {
            app.home.mount(&app.reveal);
            vec![]
        }
        ViewId::Projects => {
            app.projects.mount(&app.reveal.stagger());
            vec![]
        }
        ViewId::Gallery => {
            if app.gallery.needs_load() && !app.gallery_load.is_running() {
                request_gallery_load(app)
            } else {
                vec![]
            }
        }
    }
}

fn unmount_view(app: &mut AppState, view: ViewId) -> Vec<UiEffect> {
    match view {
        ViewId::Home => {
            app.home.unmount();
            vec![]
        }
        ViewId::Projects => {
            app.projects.unmount();
            vec![]
        }
        ViewId::Gallery => {
            let load = &mut app.gallery_load;
            if !load.is_running() {
                return vec![];
            }
            let token = load.cancel.take();
            load.clear();
            vec![UiEffect::CancelGalleryLoad { token }]
        }
    }
}

/// Starts a gallery load, cancelling any load still in flight.
fn request_gallery_load(app: &mut AppState) -> Vec<UiEffect> {
    if !app.gallery.store_configured {
        return vec![];
    }
    let mut effects = Vec::new();
    let load = &mut app.gallery_load;
    if load.is_running() {
        effects.push(UiEffect::CancelGalleryLoad {
            token: load.cancel.take(),
        });
        load.clear();
    }
    effects.push(UiEffect::LoadGallery {
        task: app.task_seq.next_id(),
    });
    effects
}
