//! Clickable button widget with hover and selected states.

use macroquad::prelude::*;

use super::Rect2;
use crate::theme::font::{UI_TEXT, draw_text_centered};
use crate::theme::palette;

/// Draw a button. `selected` marks the active choice of a toggle group.
pub fn draw_button(label: &str, area: &Rect2, selected: bool, mouse_x: f32, mouse_y: f32) {
    let hovered = area.contains(mouse_x, mouse_y);

    let (fill, border, text_color) = if selected {
        (palette::YELLOW, palette::WHITE, palette::BLACK)
    } else if hovered {
        (palette::DARK_BLUE, palette::YELLOW, palette::YELLOW)
    } else {
        (palette::DARK_BLUE, palette::LIGHT_GRAY, palette::WHITE)
    };

    super::bordered_rect(area, fill, border);
    draw_text_centered(
        label,
        area.x + area.w / 2.0,
        area.y + area.h / 2.0,
        UI_TEXT,
        text_color,
    );
}

/// True if the left mouse button was pressed inside `area` this frame.
pub fn clicked(area: &Rect2, mouse_x: f32, mouse_y: f32) -> bool {
    area.contains(mouse_x, mouse_y) && is_mouse_button_pressed(MouseButton::Left)
}
