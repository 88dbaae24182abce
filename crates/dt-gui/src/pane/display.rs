//! Spectator pane: die-type label, animated tiles and the total line.

use dt_engine::{SegmentStyle, TileFrame};

use crate::app::AppState;
use crate::theme::font::{draw_ui_text, measure_text_width};
use crate::theme::{LABEL_STRIP_H, PANE_MARGIN, TOTAL_STRIP_H, palette, tile_area};
use crate::widget::Rect2;
use crate::widget::label::draw_label_centered;
use crate::widget::panel::draw_panel;
use crate::widget::tile::draw_tile;

use super::Pane;

const LABEL_TEXT: f32 = 28.0;
const TOTAL_TEXT: f32 = 36.0;

/// Spectator pane state.
#[derive(Debug, Default)]
pub struct DisplayPane {
    frames: Vec<TileFrame>,
}

impl DisplayPane {
    /// Create an empty display pane.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Pane for DisplayPane {
    fn update(&mut self, app: &mut AppState, _area: &Rect2) {
        self.frames = match app.composer.tile_frames() {
            Ok(frames) => frames,
            Err(err) => {
                log::error!("cannot draw tiles: {err}");
                Vec::new()
            }
        };
    }

    fn draw(&self, app: &AppState, area: &Rect2) {
        draw_panel(area);
        let inner = area.inset(PANE_MARGIN);

        let (label_strip, rest) = inner.take_top(LABEL_STRIP_H);
        draw_label_centered(
            &app.composer.die_label(),
            label_strip.x,
            label_strip.y + (LABEL_STRIP_H - LABEL_TEXT) / 2.0,
            label_strip.w,
            LABEL_TEXT,
            palette::WHITE,
        );

        let tiles = tile_area(area);
        for frame in &self.frames {
            draw_tile(frame, tiles.x, tiles.y);
        }

        let (_, total_strip) = rest.take_bottom(TOTAL_STRIP_H);
        if let Some(line) = app.composer.total_line() {
            let segments = line.segments();
            let width: f32 = segments
                .iter()
                .map(|s| measure_text_width(&s.text, TOTAL_TEXT))
                .sum();
            let mut x = total_strip.x + ((total_strip.w - width) / 2.0).max(0.0);
            let y = total_strip.y + (TOTAL_STRIP_H - TOTAL_TEXT) / 2.0;
            for segment in segments {
                let color = match segment.style {
                    SegmentStyle::Plain => palette::WHITE,
                    SegmentStyle::Modifier => palette::RED,
                };
                draw_ui_text(&segment.text, x, y, TOTAL_TEXT, color);
                x += measure_text_width(&segment.text, TOTAL_TEXT);
            }
        }
    }
}
