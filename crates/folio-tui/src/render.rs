//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame`, and never
//! mutate state or return effects.

use folio_core::tabs::ViewId;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::features::gallery::render_gallery;
use crate::features::home::render_home;
use crate::features::nav::render_nav;
use crate::features::projects::render_projects;
use crate::state::AppState;
use crate::statusline::render_debug_status_line;

/// Navigation bar: top border plus one line of tabs.
const NAV_HEIGHT: u16 = 2;
const STATUS_HEIGHT: u16 = 1;
const DEBUG_STATUS_HEIGHT: u16 = 1;

/// Horizontal padding around the content area.
const CONTENT_MARGIN: u16 = 2;

pub fn render(app: &AppState, frame: &mut Frame) {
    let debug_height = if app.show_debug_status {
        DEBUG_STATUS_HEIGHT
    } else {
        0
    };

    let [content, nav, status, debug] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(NAV_HEIGHT),
        Constraint::Length(STATUS_HEIGHT),
        Constraint::Length(debug_height),
    ])
    .areas(frame.area());

    let content = content_area(content);
    match app.view {
        ViewId::Home => render_home(&app.home, frame, content),
        ViewId::Projects => render_projects(&app.projects, frame, content),
        ViewId::Gallery => render_gallery(
            &app.gallery,
            app.gallery_load.is_running(),
            app.spinner_frame,
            frame,
            content,
        ),
    }

    render_nav(&app.nav, app.view, frame, nav);
    render_status_line(app, frame, status);

    if app.show_debug_status {
        render_debug_status_line(app, frame, debug);
    }
}

fn content_area(area: Rect) -> Rect {
    Rect {
        x: area.x + CONTENT_MARGIN.min(area.width / 2),
        width: area.width.saturating_sub(CONTENT_MARGIN * 2),
        ..area
    }
}

fn key_help(view: ViewId) -> &'static str {
    match view {
        ViewId::Gallery => "↑↓←→ select · Enter open image · r reload · 1-6 tabs · q quit",
        ViewId::Home | ViewId::Projects => {
            "1-6 tabs · ←/→ focus · Enter open · F12 debug · q quit"
        }
    }
}

fn render_status_line(app: &AppState, frame: &mut Frame, area: Rect) {
    let line = match &app.notice {
        Some(notice) => Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(Color::Yellow),
        )),
        None => Line::from(Span::styled(
            key_help(app.view),
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(line).centered(), area);
}
