//! Die tile: filled polygon, outline and the face value.

use macroquad::prelude::*;

use dt_engine::TileFrame;

use crate::theme::font::draw_text_centered;
use crate::theme::{die_color, palette};

/// Width of the black polygon outline.
const OUTLINE: f32 = 2.0;

/// Draw one tile frame, offsetting its laid-out position by the tile area origin.
pub fn draw_tile(frame: &TileFrame, area_x: f32, area_y: f32) {
    let ox = area_x + frame.origin.0;
    let oy = area_y + frame.origin.1;
    let center = vec2(ox + frame.size / 2.0, oy + frame.size / 2.0);
    let points: Vec<Vec2> = frame
        .vertices
        .iter()
        .map(|v| vec2(ox + v.x, oy + v.y))
        .collect();

    let fill = die_color(frame.color);
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        draw_triangle(center, *a, b, fill);
    }
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        draw_line(a.x, a.y, b.x, b.y, OUTLINE, palette::BLACK);
    }

    let (text, color) = face_text(frame);
    draw_text_centered(&text, center.x, center.y, frame.font_size, color);
}

/// The face value and its color; the same while spinning and once settled.
fn face_text(frame: &TileFrame) -> (String, Color) {
    (frame.value.to_string(), palette::BLACK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dt_engine::{DieKind, TileState};

    fn frame(state: TileState) -> TileFrame {
        TileFrame {
            origin: (0.0, 0.0),
            size: 100.0,
            vertices: Vec::new(),
            color: DieKind::D12.color(),
            value: 11,
            font_size: 12.0,
            state,
        }
    }

    #[test]
    fn face_text_is_black_in_every_state() {
        let spinning = face_text(&frame(TileState::Spinning));
        let settled = face_text(&frame(TileState::Settled));
        assert_eq!(spinning.0, "11");
        assert_eq!(spinning.1, palette::BLACK);
        assert_eq!(spinning, settled);
    }
}
