use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::state::AppState;

pub fn render_debug_status_line(app: &AppState, frame: &mut Frame, area: Rect) {
    let status = app.status_line.snapshot();
    let dim = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::Yellow);

    let fields = [
        ("fps", format!("{:.1}", status.fps)),
        ("frames", status.frames.to_string()),
        ("reveals", app.live_reveals().to_string()),
        ("tasks", usize::from(app.gallery_load.is_running()).to_string()),
        ("size", format!("{}x{}", app.width, app.height)),
    ];

    let mut spans = Vec::with_capacity(fields.len() * 3);
    for (index, (label, text)) in fields.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" │ ", dim));
        }
        spans.push(Span::styled(format!("{label} "), dim));
        spans.push(Span::styled(text, value));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
