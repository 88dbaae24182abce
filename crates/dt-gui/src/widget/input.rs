//! Single-line text input field with blinking cursor.

use macroquad::prelude::*;

use super::Rect2;
use crate::theme::font::{UI_TEXT, draw_ui_text, measure_text_width};
use crate::theme::palette;

/// Apply this frame's typed characters and backspaces to `text`.
pub fn edit_text(text: &mut String, max_len: usize) {
    for ch in crate::input::typed_chars() {
        if text.chars().count() < max_len {
            text.push(ch);
        }
    }
    if crate::input::backspace_pressed() {
        text.pop();
    }
}

/// Draw a text input field. `active` shows the focus border and cursor.
pub fn draw_input(value: &str, placeholder: &str, active: bool, area: &Rect2) {
    let (fill, border) = if active {
        (palette::BLACK, palette::YELLOW)
    } else {
        (palette::DARK_BLUE, palette::DARK_GRAY)
    };
    super::bordered_rect(area, fill, border);

    let text_x = area.x + 6.0;
    let text_y = area.y + (area.h - UI_TEXT) / 2.0;
    let visible = tail_that_fits(value, area.w - 12.0);

    if value.is_empty() && !active {
        draw_ui_text(placeholder, text_x, text_y, UI_TEXT, palette::DARK_GRAY);
    } else {
        let color = if active {
            palette::WHITE
        } else {
            palette::LIGHT_GRAY
        };
        draw_ui_text(visible, text_x, text_y, UI_TEXT, color);
    }

    if active && (get_time() * 3.0) as u32 % 2 == 0 {
        let cursor_x = text_x + measure_text_width(visible, UI_TEXT) + 1.0;
        draw_rectangle(cursor_x, text_y, 2.0, UI_TEXT, palette::YELLOW);
    }
}

/// The longest suffix of `text` that fits in `width` pixels.
fn tail_that_fits(text: &str, width: f32) -> &str {
    let mut start = 0;
    for (idx, _) in text.char_indices() {
        start = idx;
        if measure_text_width(&text[idx..], UI_TEXT) <= width {
            return &text[idx..];
        }
    }
    &text[start..start]
}
