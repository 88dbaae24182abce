//! Visual theme: color palette, pane geometry and clock helpers.

pub mod font;

use std::time::Duration;

use macroquad::prelude::*;

use dt_engine::DieColor;

use crate::widget::Rect2;

/// Width of the game master's control pane.
pub const CONTROL_W: f32 = 360.0;
/// Height of the die-type label strip above the tiles.
pub const LABEL_STRIP_H: f32 = 40.0;
/// Height of the total line strip below the tiles.
pub const TOTAL_STRIP_H: f32 = 56.0;
/// Inner margin of both panes.
pub const PANE_MARGIN: f32 = 10.0;

/// PICO-8-inspired palette.
pub mod palette {
    use macroquad::prelude::Color;

    /// Black background.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Dark blue for deep backgrounds.
    pub const DARK_BLUE: Color = Color::new(0.114, 0.169, 0.326, 1.0);
    /// Dark gray for inactive elements.
    pub const DARK_GRAY: Color = Color::new(0.373, 0.341, 0.310, 1.0);
    /// Light gray for borders and secondary text.
    pub const LIGHT_GRAY: Color = Color::new(0.761, 0.765, 0.780, 1.0);
    /// White for primary text.
    pub const WHITE: Color = Color::new(1.0, 0.945, 0.910, 1.0);
    /// Red for errors and the modifier.
    pub const RED: Color = Color::new(1.0, 0.0, 0.302, 1.0);
    /// Orange for warnings.
    pub const ORANGE: Color = Color::new(1.0, 0.639, 0.0, 1.0);
    /// Yellow for highlights.
    pub const YELLOW: Color = Color::new(1.0, 0.925, 0.153, 1.0);
}

/// Convert a die face color to a macroquad color.
pub fn die_color(color: DieColor) -> Color {
    Color::from_rgba(color.r, color.g, color.b, 255)
}

/// Split the window into the control pane (left) and the display pane (right).
pub fn pane_rects() -> (Rect2, Rect2) {
    let window = Rect2::new(0.0, 0.0, screen_width(), screen_height());
    window.split_at_x(CONTROL_W.min(window.w))
}

/// Region of the display pane where result tiles are placed.
pub fn tile_area(display: &Rect2) -> Rect2 {
    let inner = display.inset(PANE_MARGIN);
    let (_, rest) = inner.take_top(LABEL_STRIP_H);
    let (tiles, _) = rest.take_bottom(TOTAL_STRIP_H);
    tiles
}

/// Monotonic clock used to drive animations.
pub fn clock_now() -> Duration {
    Duration::from_secs_f64(get_time().max(0.0))
}
