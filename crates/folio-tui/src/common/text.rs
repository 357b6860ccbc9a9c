//! Text utilities for TUI rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string with ellipsis if it exceeds max_width (unicode-aware).
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    if max_width == 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        width += ch_width;
        truncated.push(ch);
    }
    truncated.push('…');
    truncated
}

/// Spaces needed to right-align `right` after `left` within `total` columns.
/// At least one space is kept between the two.
pub fn gap_between(left: &str, right: &str, total: usize) -> usize {
    total
        .saturating_sub(left.width() + right.width())
        .max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_fits() {
        assert_eq!(truncate_with_ellipsis("Osero", 5), "Osero");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each kana is two columns wide.
        assert_eq!(truncate_with_ellipsis("ことばプラス", 7), "ことば…");
        assert_eq!(truncate_with_ellipsis("Kotoba+", 1), "…");
        assert_eq!(truncate_with_ellipsis("Kotoba+", 0), "");
    }

    #[test]
    fn test_gap_between() {
        assert_eq!(gap_between("Osero", "2023", 20), 11);
        assert_eq!(gap_between("a long title", "2023", 4), 1);
    }
}
