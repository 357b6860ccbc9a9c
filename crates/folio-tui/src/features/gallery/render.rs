use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::state::{GalleryEntry, GallerySource, GalleryState, columns_for_width};
use crate::common::text::truncate_with_ellipsis;
use crate::common::{ImageSurface, PlaceholderKind};

/// Card height including borders.
const CARD_HEIGHT: u16 = 8;

const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

pub fn render_gallery(
    state: &GalleryState,
    loading: bool,
    spinner_frame: usize,
    frame: &mut Frame,
    area: Rect,
) {
    let [header, grid, details] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(Paragraph::new(header_line(state, loading)), header);

    if state.entries.is_empty() {
        let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
        let message = if loading {
            format!("{spinner} Loading gallery…")
        } else {
            "No images".to_string()
        };
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(grid);
        frame.render_widget(
            Paragraph::new(message)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
            middle,
        );
        return;
    }

    render_grid(state, frame, grid);

    if let Some(entry) = state.selected_entry() {
        frame.render_widget(Paragraph::new(details_line(entry, details.width)), details);
    }
}

fn header_line(state: &GalleryState, loading: bool) -> Line<'static> {
    let source = match state.source {
        GallerySource::Store => "store",
        GallerySource::Builtin => "built-in",
    };
    let mut spans = vec![
        Span::styled(
            "Gallery",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} images · {source}", state.entries.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if loading && !state.entries.is_empty() {
        spans.push(Span::styled(
            "  refreshing…",
            Style::default().fg(Color::Yellow),
        ));
    }
    Line::from(spans)
}

fn details_line(entry: &GalleryEntry, width: u16) -> Line<'static> {
    let mut text = entry.description.clone().unwrap_or_else(|| entry.alt_text.clone());
    if let Some(added) = entry.added {
        text.push_str(&format!(" · added {}", added.format("%Y-%m-%d")));
    }
    Line::from(Span::styled(
        truncate_with_ellipsis(&text, width as usize),
        Style::default().fg(Color::Gray),
    ))
}

fn render_grid(state: &GalleryState, frame: &mut Frame, area: Rect) {
    let columns = columns_for_width(area.width);
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
    let selected_row = state.selected / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); visible_rows]).split(area);
    let column_constraints = vec![Constraint::Ratio(1, columns as u32); columns];

    for (row_offset, row_area) in row_areas.iter().enumerate() {
        let cells = Layout::horizontal(column_constraints.clone()).split(*row_area);
        for (col, cell) in cells.iter().enumerate() {
            let index = (first_row + row_offset) * columns + col;
            let Some(entry) = state.entries.get(index) else {
                return;
            };
            render_card(entry, index == state.selected, frame, *cell);
        }
    }
}

fn render_card(entry: &GalleryEntry, selected: bool, frame: &mut Frame, area: Rect) {
    let border_style = if selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title = truncate_with_ellipsis(&entry.title, area.width.saturating_sub(4) as usize);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(format!(" {title} "), border_style));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    frame.render_widget(
        ImageSurface::new(PlaceholderKind::for_url(&entry.url)).caption(&entry.alt_text),
        inner,
    );
}
