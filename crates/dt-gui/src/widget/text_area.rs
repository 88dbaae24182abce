//! Scrollable multi-line text area with word wrap.

use super::Rect2;
use crate::theme::font::{UI_TEXT, draw_ui_text, measure_text_width};
use crate::theme::palette;

/// Line height in the text area.
const LINE_HEIGHT: f32 = UI_TEXT + 4.0;

/// Draw a scrollable text area with word-wrapped content.
///
/// Returns the total number of wrapped lines (for scroll calculations).
pub fn draw_text_area(text: &str, scroll_offset: usize, area: &Rect2) -> usize {
    let wrapped = wrap_text(text, chars_per_line(area));
    let visible = wrapped
        .iter()
        .skip(scroll_offset)
        .take(visible_lines(area));
    for (vi, line) in visible.enumerate() {
        let y = area.y + vi as f32 * LINE_HEIGHT;
        draw_ui_text(line, area.x + 2.0, y, UI_TEXT, palette::LIGHT_GRAY);
    }

    wrapped.len()
}

/// Number of wrapped lines `text` occupies in `area`.
pub fn wrapped_line_count(text: &str, area: &Rect2) -> usize {
    wrap_text(text, chars_per_line(area)).len()
}

fn chars_per_line(area: &Rect2) -> usize {
    let char_w = measure_text_width("0", UI_TEXT).max(1.0);
    ((area.w - 4.0) / char_w).max(0.0) as usize
}

/// Number of lines that fit in `area`.
pub fn visible_lines(area: &Rect2) -> usize {
    (area.h / LINE_HEIGHT) as usize
}

/// Word-wrap text into lines of at most `max_chars` characters.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if max_chars == 0 {
        return lines;
    }

    for raw_line in text.lines() {
        if raw_line.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut current_len = 0;

        for word in raw_line.split_whitespace() {
            let word_len = word.chars().count();
            if current.is_empty() {
                if word_len > max_chars {
                    // Force-break long words
                    let chars: Vec<char> = word.chars().collect();
                    for chunk in chars.chunks(max_chars) {
                        lines.push(chunk.iter().collect());
                    }
                } else {
                    current = word.to_string();
                    current_len = word_len;
                }
            } else if current_len + 1 + word_len <= max_chars {
                current.push(' ');
                current.push_str(word);
                current_len += 1 + word_len;
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
                current_len = word_len;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Scroll offset that keeps the last line visible.
pub fn scroll_to_end(total_lines: usize, visible: usize) -> usize {
    total_lines.saturating_sub(visible)
}
