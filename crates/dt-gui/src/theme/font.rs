//! Text drawing on top of macroquad's built-in font.

use macroquad::prelude::*;

/// Default UI text height.
pub const UI_TEXT: f32 = 18.0;

/// Draw text with its top-left corner at (`x`, `y`).
pub fn draw_ui_text(text: &str, x: f32, y: f32, size: f32, color: Color) {
    let dims = measure_text(text, None, font_px(size), 1.0);
    draw_text(text, x, y + dims.offset_y, size, color);
}

/// Draw text centered on (`cx`, `cy`).
pub fn draw_text_centered(text: &str, cx: f32, cy: f32, size: f32, color: Color) {
    let dims = measure_text(text, None, font_px(size), 1.0);
    draw_text(
        text,
        cx - dims.width / 2.0,
        cy - dims.height / 2.0 + dims.offset_y,
        size,
        color,
    );
}

/// Rendered width of `text` at the given height.
pub fn measure_text_width(text: &str, size: f32) -> f32 {
    measure_text(text, None, font_px(size), 1.0).width
}

fn font_px(size: f32) -> u16 {
    size.clamp(1.0, f32::from(u16::MAX)) as u16
}
