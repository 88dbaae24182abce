//! Bordered panels that frame each pane.

use macroquad::prelude::*;

use super::Rect2;
use crate::theme::font::{UI_TEXT, draw_ui_text, measure_text_width};
use crate::theme::palette;

/// Height of the title bar drawn by [`draw_panel_titled`].
pub const TITLE_BAR_H: f32 = 26.0;

/// Draw a plain panel.
pub fn draw_panel(area: &Rect2) {
    super::bordered_rect(area, palette::DARK_BLUE, palette::LIGHT_GRAY);
}

/// Draw a panel with a title inside the top area.
///
/// Content should start at `area.y + TITLE_BAR_H`.
pub fn draw_panel_titled(area: &Rect2, title: &str) {
    draw_panel(area);
    draw_rectangle(
        area.x + 2.0,
        area.y + 2.0,
        area.w - 4.0,
        TITLE_BAR_H - 4.0,
        palette::BLACK,
    );
    let title_w = measure_text_width(title, UI_TEXT);
    let title_x = area.x + (area.w - title_w) / 2.0;
    draw_ui_text(title, title_x, area.y + 4.0, UI_TEXT, palette::WHITE);
}
