//! Image Surface: a gradient placeholder drawn where a picture would go.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use crate::common::text::truncate_with_ellipsis;

type Rgb = (u8, u8, u8);

const EMERALD_400: Rgb = (0x34, 0xd3, 0x99);
const CYAN_400: Rgb = (0x22, 0xd3, 0xee);
const BLUE_500: Rgb = (0x3b, 0x82, 0xf6);
const PURPLE_400: Rgb = (0xc0, 0x84, 0xfc);
const PINK_400: Rgb = (0xf4, 0x72, 0xb6);
const RED_400: Rgb = (0xf8, 0x71, 0x71);
const ORANGE_400: Rgb = (0xfb, 0x92, 0x3c);

const PATTERN_FG: Color = Color::Rgb(0xff, 0xff, 0xff);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaceholderKind {
    #[default]
    Photo,
    Project,
    Video,
}

impl PlaceholderKind {
    /// Three color stops, top-left to bottom-right.
    pub fn gradient(self) -> [Rgb; 3] {
        match self {
            PlaceholderKind::Photo => [EMERALD_400, CYAN_400, BLUE_500],
            PlaceholderKind::Project => [PURPLE_400, PINK_400, RED_400],
            PlaceholderKind::Video => [ORANGE_400, RED_400, PINK_400],
        }
    }

    /// Guesses the kind from a media URL.
    pub fn for_url(url: &str) -> Self {
        let path = url.split(['?', '#']).next().unwrap_or(url).to_ascii_lowercase();
        if [".mp4", ".mov", ".webm"].iter().any(|ext| path.ends_with(ext)) {
            PlaceholderKind::Video
        } else {
            PlaceholderKind::Photo
        }
    }

    fn pattern_at(self, x: u16, y: u16, area: Rect) -> Option<char> {
        match self {
            PlaceholderKind::Photo => (x % 4 == 2 && y % 4 == 2).then_some('·'),
            PlaceholderKind::Project => ((x / 2 + y) % 2 == 0).then_some('░'),
            PlaceholderKind::Video => play_triangle(x, y, area).then_some('█'),
        }
    }
}

/// True for cells inside a right-pointing triangle centered in `area`.
fn play_triangle(x: u16, y: u16, area: Rect) -> bool {
    let radius = (area.height / 4).min(area.width / 8);
    let cx = area.width / 2;
    let cy = area.height / 2;
    if radius == 0 {
        return x == cx && y == cy;
    }
    let dy = y.abs_diff(cy);
    if dy > radius {
        return false;
    }
    // Terminal cells are about twice as tall as wide.
    let left = cx.saturating_sub(radius);
    let reach = (radius - dy) * 2;
    x >= left && x <= left + reach
}

/// Color at `t` in `0.0..=1.0` along a three-stop gradient.
pub fn gradient_color(stops: [Rgb; 3], t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let (from, to, local) = if t <= 0.5 {
        (stops[0], stops[1], t * 2.0)
    } else {
        (stops[1], stops[2], (t - 0.5) * 2.0)
    };
    let lerp = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * local).round() as u8;
    Color::Rgb(lerp(from.0, to.0), lerp(from.1, to.1), lerp(from.2, to.2))
}

/// Gradient placeholder with an optional caption on its last row.
#[derive(Debug, Clone, Default)]
pub struct ImageSurface<'a> {
    kind: PlaceholderKind,
    caption: Option<&'a str>,
}

impl<'a> ImageSurface<'a> {
    pub fn new(kind: PlaceholderKind) -> Self {
        Self {
            kind,
            caption: None,
        }
    }

    #[must_use]
    pub fn caption(mut self, caption: &'a str) -> Self {
        self.caption = Some(caption);
        self
    }
}

impl Widget for ImageSurface<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let stops = self.kind.gradient();
        let span = f32::from((area.width + area.height).saturating_sub(2).max(1));

        for y in 0..area.height {
            for x in 0..area.width {
                let bg = gradient_color(stops, f32::from(x + y) / span);
                let cell = &mut buf[(area.x + x, area.y + y)];
                cell.set_bg(bg);
                match self.kind.pattern_at(x, y, area) {
                    Some(mark) => {
                        cell.set_char(mark).set_fg(PATTERN_FG);
                    }
                    None => {
                        cell.set_char(' ');
                    }
                }
            }
        }

        if let Some(caption) = self.caption {
            let text = truncate_with_ellipsis(caption, area.width.saturating_sub(2) as usize);
            let width = text.width() as u16;
            let x = area.x + area.width.saturating_sub(width) / 2;
            let y = area.y + area.height - 1;
            buf.set_string(
                x,
                y,
                &text,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(kind: PlaceholderKind, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        ImageSurface::new(kind).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_gradient_runs_corner_to_corner() {
        let buf = rendered(PlaceholderKind::Photo, 8, 4);
        assert_eq!(buf[(0, 0)].bg, Color::Rgb(0x34, 0xd3, 0x99));
        assert_eq!(buf[(7, 3)].bg, Color::Rgb(0x3b, 0x82, 0xf6));
    }

    #[test]
    fn test_gradient_midpoint_is_middle_stop() {
        assert_eq!(
            gradient_color(PlaceholderKind::Project.gradient(), 0.5),
            Color::Rgb(0xf4, 0x72, 0xb6)
        );
    }

    #[test]
    fn test_photo_dots_every_four_cells() {
        let buf = rendered(PlaceholderKind::Photo, 12, 8);
        assert_eq!(buf[(2, 2)].symbol(), "·");
        assert_eq!(buf[(6, 6)].symbol(), "·");
        assert_eq!(buf[(3, 2)].symbol(), " ");
    }

    #[test]
    fn test_video_has_centered_play_mark() {
        let buf = rendered(PlaceholderKind::Video, 32, 12);
        assert_eq!(buf[(16, 6)].symbol(), "█");
        assert_eq!(buf[(0, 0)].symbol(), " ");

        let tiny = rendered(PlaceholderKind::Video, 4, 2);
        assert_eq!(tiny[(2, 1)].symbol(), "█");
    }

    #[test]
    fn test_caption_centered_on_last_row() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        ImageSurface::new(PlaceholderKind::Project)
            .caption("Osero")
            .render(area, &mut buf);
        let row: String = (0..10).map(|x| buf[(x, 2)].symbol().to_string()).collect();
        assert!(row.contains("Osero"));
    }

    #[test]
    fn test_kind_for_url() {
        assert_eq!(
            PlaceholderKind::for_url("https://cdn.example.com/clip.MP4?x=1"),
            PlaceholderKind::Video
        );
        assert_eq!(
            PlaceholderKind::for_url("/images/gallery/photo-1.jpg"),
            PlaceholderKind::Photo
        );
    }
}
