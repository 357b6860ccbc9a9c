//! Home view: avatar surface, greeting and the typed-out bio.

use folio_core::config::RevealSettings;
use folio_core::content::PROFILE;
use folio_core::reveal::{RevealParams, RevealText};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::common::{ImageSurface, PlaceholderKind};

/// Shown after the revealed prefix while characters are still pending.
pub const REVEAL_CURSOR: &str = "▌";

const AVATAR_WIDTH: u16 = 16;
const AVATAR_HEIGHT: u16 = 7;
const CONTENT_MAX_WIDTH: u16 = 72;

#[derive(Debug, Default)]
pub struct HomeState {
    pub bio: Option<RevealText>,
}

impl HomeState {
    /// Starts the bio reveal. Mounting an already mounted view is a no-op.
    pub fn mount(&mut self, settings: &RevealSettings) {
        let (delay, step) = settings.home();
        let params = RevealParams::new(PROFILE.about, delay, step);
        match self.bio.as_mut() {
            Some(bio) => {
                bio.set(params);
            }
            None => self.bio = Some(RevealText::start(params)),
        }
    }

    pub fn unmount(&mut self) {
        self.bio = None;
    }

    pub fn is_animating(&self) -> bool {
        self.bio.as_ref().is_some_and(RevealText::is_running)
    }

    pub fn live_reveals(&self) -> usize {
        usize::from(self.is_animating())
    }
}

/// Revealed text followed by the cursor while the reveal is running.
pub fn reveal_spans(reveal: &RevealText, style: Style) -> Vec<Span<'static>> {
    let mut spans = vec![Span::styled(reveal.revealed(), style)];
    if reveal.is_running() {
        spans.push(Span::styled(REVEAL_CURSOR, Style::default().fg(Color::Cyan)));
    }
    spans
}

pub fn render_home(state: &HomeState, frame: &mut Frame, area: Rect) {
    let width = area.width.min(CONTENT_MAX_WIDTH);
    let column = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let [_, avatar_row, greeting, _, heading, bio, location] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(AVATAR_HEIGHT),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(column);

    let avatar_width = AVATAR_WIDTH.min(avatar_row.width);
    let avatar = Rect {
        x: avatar_row.x + (avatar_row.width - avatar_width) / 2,
        width: avatar_width,
        ..avatar_row
    };
    frame.render_widget(ImageSurface::new(PlaceholderKind::Photo), avatar);

    let greeting_line = Line::from(vec![
        Span::styled(
            format!("{}, ", PROFILE.greeting),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            PROFILE.name,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(greeting_line).alignment(Alignment::Center),
        greeting,
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            PROFILE.about_heading,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        heading,
    );

    if let Some(reveal) = &state.bio {
        let text = Line::from(reveal_spans(reveal, Style::default().fg(Color::Gray)));
        frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), bio);
    }

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("◎ {}", PROFILE.location),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        )),
        location,
    );
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    async fn settle() {
        for _ in 0..16 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_mount_reveals_bio_then_unmount_stops() {
        let settings = RevealSettings {
            home_delay_ms: 10.0,
            home_step_ms: 1.0,
            ..RevealSettings::default()
        };
        let mut home = HomeState::default();
        home.mount(&settings);
        assert!(home.is_animating());
        assert_eq!(home.live_reveals(), 1);

        tokio::time::sleep(Duration::from_millis(12)).await;
        settle().await;
        let partial = home.bio.as_ref().unwrap().revealed();
        assert!(!partial.is_empty());
        assert!(PROFILE.about.starts_with(&partial));

        home.unmount();
        assert!(home.bio.is_none());
        assert!(!home.is_animating());
    }

    #[tokio::test(start_paused = true)]
    async fn test_remount_is_noop_while_running() {
        let settings = RevealSettings::default();
        let mut home = HomeState::default();
        home.mount(&settings);
        tokio::time::sleep(Duration::from_millis(400)).await;
        settle().await;
        let before = home.bio.as_ref().unwrap().cursor();
        assert!(before > 0);

        home.mount(&settings);
        assert_eq!(home.bio.as_ref().unwrap().cursor(), before);
    }
}
