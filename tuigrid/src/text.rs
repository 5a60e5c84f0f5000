use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::column::TextAlign;

pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Cut `s` down to at most `max_width` terminal cells, appending an ellipsis
/// when anything was removed.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // Reserve one cell for the ellipsis.
    let target = max_width - 1;
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > target {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Fit `s` into exactly `width` cells: truncate if too long, pad with spaces
/// according to `align` if too short.
pub fn pad_to_width(s: &str, width: usize, align: TextAlign) -> String {
    let text = truncate_to_width(s, width);
    let slack = width.saturating_sub(display_width(&text));
    if slack == 0 {
        return text;
    }
    let (left, right) = match align {
        TextAlign::Left => (0, slack),
        TextAlign::Center => (slack / 2, slack - slack / 2),
        TextAlign::Right => (slack, 0),
    };
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
