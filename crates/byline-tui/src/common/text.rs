//! Text helpers shared across render code.

use unicode_width::UnicodeWidthStr;

/// Truncates a string to `max_width` display columns, appending an ellipsis
/// when content was cut. Width-aware so wide characters don't overflow.
pub fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// First line of a text, truncated for single-line display.
pub fn preview_line(s: &str, max_width: usize) -> String {
    let first = s.lines().next().unwrap_or("");
    truncate_with_ellipsis(first, max_width)
}
