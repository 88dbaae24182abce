//! Single-line text label widget.

use macroquad::prelude::*;

use crate::theme::font::{draw_ui_text, measure_text_width};

/// Draw a label at the given position.
pub fn draw_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_ui_text(text, x, y, size, color);
}

/// Draw a label centered horizontally within a width.
pub fn draw_label_centered(text: &str, x: f32, y: f32, w: f32, size: f32, color: Color) {
    let text_w = measure_text_width(text, size);
    let cx = x + (w - text_w) / 2.0;
    draw_ui_text(text, cx.max(x), y, size, color);
}
