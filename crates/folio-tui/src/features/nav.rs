//! Bottom navigation bar.

use folio_core::tabs::{self, Tab, TabOutcome, ViewId, default_tabs};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

#[derive(Debug, Clone)]
pub struct NavState {
    pub tabs: Vec<Tab>,
    /// Index of the keyboard-focused tab.
    pub focused: usize,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavState {
    pub fn new() -> Self {
        Self {
            tabs: default_tabs(),
            focused: 0,
        }
    }

    pub fn focus_next(&mut self) {
        if !self.tabs.is_empty() {
            self.focused = (self.focused + 1) % self.tabs.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.tabs.is_empty() {
            self.focused = (self.focused + self.tabs.len() - 1) % self.tabs.len();
        }
    }

    /// Moves focus to the tab that navigates to `view`, if any.
    pub fn focus_view(&mut self, view: ViewId) {
        if let Some(index) = self.tabs.iter().position(|tab| tab.is_active(view)) {
            self.focused = index;
        }
    }

    /// Runs the action of tab `index` against the active view.
    ///
    /// Returns `None` for an index past the last tab.
    pub fn activate(&mut self, index: usize, active: &mut ViewId) -> Option<TabOutcome> {
        let tab = self.tabs.get(index)?;
        let outcome = tabs::dispatch(&tab.action, active);
        self.focused = index;
        Some(outcome)
    }
}

pub fn render_nav(nav: &NavState, active: ViewId, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::with_capacity(nav.tabs.len() * 2);
    for (index, tab) in nav.tabs.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }

        let mut style = if tab.is_active(active) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else if tab.is_external() {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        if index == nav.focused {
            style = style.add_modifier(Modifier::UNDERLINED);
        }

        spans.push(Span::styled(
            format!(" {} {} {} ", index + 1, tab.icon, tab.label),
            style,
        ));
    }

    let bar = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(bar, area);
}
