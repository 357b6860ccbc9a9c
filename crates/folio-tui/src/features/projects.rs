//! Projects view: one row per project, each field typed out in turn.

use folio_core::content::{PROJECTS, Project};
use folio_core::reveal::RevealText;
use folio_core::reveal::stagger::StaggerPolicy;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::home::reveal_spans;
use crate::common::text::{gap_between, truncate_with_ellipsis};
use crate::common::{ImageSurface, PlaceholderKind};

const BANNER_HEIGHT: u16 = 4;

#[derive(Debug)]
pub struct ProjectRow {
    pub title: RevealText,
    pub description: RevealText,
    pub year: RevealText,
}

impl ProjectRow {
    fn start(policy: &StaggerPolicy, index: usize, project: &Project) -> Self {
        let reveal = policy.project(index, project.title, project.description, project.year);
        Self {
            title: RevealText::start(reveal.title),
            description: RevealText::start(reveal.description),
            year: RevealText::start(reveal.year),
        }
    }

    fn fields(&self) -> [&RevealText; 3] {
        [&self.title, &self.description, &self.year]
    }
}

#[derive(Debug, Default)]
pub struct ProjectsState {
    pub rows: Vec<ProjectRow>,
}

impl ProjectsState {
    /// Starts fresh reveals for every project. No-op when already mounted.
    pub fn mount(&mut self, policy: &StaggerPolicy) {
        if !self.rows.is_empty() {
            return;
        }
        self.rows = PROJECTS
            .iter()
            .enumerate()
            .map(|(index, project)| ProjectRow::start(policy, index, project))
            .collect();
        tracing::debug!(rows = self.rows.len(), "Mounted project reveals");
    }

    /// Drops every reveal, cancelling pending ticks.
    pub fn unmount(&mut self) {
        self.rows.clear();
    }

    pub fn is_mounted(&self) -> bool {
        !self.rows.is_empty()
    }

    pub fn is_animating(&self) -> bool {
        self.live_reveals() > 0
    }

    pub fn live_reveals(&self) -> usize {
        self.rows
            .iter()
            .flat_map(ProjectRow::fields)
            .filter(|reveal| reveal.is_running())
            .count()
    }
}

fn row_lines(row: &ProjectRow, width: usize) -> Vec<Line<'static>> {
    let title = truncate_with_ellipsis(&row.title.revealed(), width.saturating_sub(6));
    let year = row.year.revealed();
    let gap = gap_between(&title, &year, width);

    let mut heading = vec![Span::styled(
        title,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )];
    heading.push(Span::raw(" ".repeat(gap)));
    heading.push(Span::styled(year, Style::default().fg(Color::DarkGray)));

    vec![
        Line::from(heading),
        Line::from(reveal_spans(
            &row.description,
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "─".repeat(width),
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

pub fn render_projects(state: &ProjectsState, frame: &mut Frame, area: Rect) {
    let [banner, _, list] = Layout::vertical([
        Constraint::Length(BANNER_HEIGHT),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(
        ImageSurface::new(PlaceholderKind::Project).caption("Projects"),
        banner,
    );

    let width = list.width as usize;
    let lines: Vec<Line<'static>> = state
        .rows
        .iter()
        .flat_map(|row| row_lines(row, width))
        .collect();

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), list);
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use folio_core::config::RevealSettings;

    use super::*;

    async fn settle() {
        for _ in 0..16 {
            tokio::task::yield_now().await;
        }
    }

    fn fast_policy() -> StaggerPolicy {
        RevealSettings {
            item_delay_ms: 1.0,
            field_gap_ms: 1.0,
            title_step_ms: 1.0,
            year_step_ms: 1.0,
            ..RevealSettings::default()
        }
        .stagger()
    }

    #[tokio::test(start_paused = true)]
    async fn test_mount_types_every_field_in_order() {
        let mut projects = ProjectsState::default();
        projects.mount(&fast_policy());
        assert_eq!(projects.rows.len(), PROJECTS.len());
        assert!(projects.is_animating());

        // Titles start before their descriptions.
        tokio::time::sleep(Duration::from_millis(3)).await;
        settle().await;
        let first = &projects.rows[0];
        assert!(!first.title.revealed().is_empty());
        assert!(first.description.revealed().is_empty());

        tokio::time::sleep(Duration::from_secs(1)).await;
        settle().await;
        assert!(!projects.is_animating());
        for (row, project) in projects.rows.iter().zip(PROJECTS) {
            let text = format!(
                "{} {} {}",
                row.title.revealed(),
                row.description.revealed(),
                row.year.revealed()
            );
            assert_eq!(
                text,
                format!("{} {} {}", project.title, project.description, project.year)
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_then_remount_starts_over() {
        let mut projects = ProjectsState::default();
        projects.mount(&fast_policy());
        tokio::time::sleep(Duration::from_secs(1)).await;
        settle().await;
        assert_eq!(projects.rows[0].title.revealed(), PROJECTS[0].title);

        projects.unmount();
        assert!(!projects.is_mounted());

        projects.mount(&fast_policy());
        assert!(projects.rows[0].title.revealed().is_empty());
        assert_eq!(projects.live_reveals(), PROJECTS.len() * 3);
    }
}
