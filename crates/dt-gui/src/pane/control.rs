//! Game master pane: die choice, roll fields, roll button and history.

use macroquad::prelude::*;

use dt_engine::{AreaSize, DieKind, RollRequest};

use crate::app::AppState;
use crate::input;
use crate::theme::font::UI_TEXT;
use crate::theme::{PANE_MARGIN, clock_now, palette, pane_rects, tile_area};
use crate::widget::button::{clicked, draw_button};
use crate::widget::input::{draw_input, edit_text};
use crate::widget::label::draw_label;
use crate::widget::panel::{TITLE_BAR_H, draw_panel_titled};
use crate::widget::text_area::{
    draw_text_area, scroll_to_end, visible_lines, wrapped_line_count,
};
use crate::widget::{Rect2, bordered_rect};

use super::Pane;

const GAP: f32 = 8.0;
const LABEL_H: f32 = 22.0;
const FIELD_H: f32 = 30.0;
const BUTTON_H: f32 = 30.0;
const ROLL_H: f32 = 40.0;
const DIE_COLUMNS: usize = 4;

const QUANTITY_MAX_LEN: usize = 6;
const MODIFIER_MAX_LEN: usize = 8;
const FORCED_MAX_LEN: usize = 256;

/// A text field of the control pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Number of dice.
    Quantity,
    /// Signed modifier.
    Modifier,
    /// Comma-separated forced values.
    Forced,
}

/// The field Tab moves to. The forced field is skipped in random mode.
pub fn next_field(current: Option<Field>, forced_mode: bool) -> Field {
    match current {
        None | Some(Field::Forced) => Field::Quantity,
        Some(Field::Quantity) => Field::Modifier,
        Some(Field::Modifier) if forced_mode => Field::Forced,
        Some(Field::Modifier) => Field::Quantity,
    }
}

/// Widget rectangles of the control pane.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlLayout {
    /// One button per standard die kind.
    pub die_buttons: Vec<(DieKind, Rect2)>,
    /// Quantity field.
    pub quantity: Rect2,
    /// Modifier field.
    pub modifier: Rect2,
    /// Random mode toggle.
    pub random: Rect2,
    /// Forced mode toggle.
    pub forced_toggle: Rect2,
    /// Forced values field.
    pub forced: Rect2,
    /// Roll button.
    pub roll: Rect2,
    /// History text area.
    pub history: Rect2,
}

/// Lay out the control pane inside `area`.
pub fn control_layout(area: &Rect2) -> ControlLayout {
    let (_, body) = area.inset(PANE_MARGIN).take_top(TITLE_BAR_H);
    let mut y = body.y;

    let cols = DIE_COLUMNS as f32;
    let btn_w = ((body.w - (cols - 1.0) * GAP) / cols).max(0.0);
    let die_buttons = DieKind::STANDARD
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            let col = (i % DIE_COLUMNS) as f32;
            let row = (i / DIE_COLUMNS) as f32;
            let rect = Rect2::new(
                body.x + col * (btn_w + GAP),
                y + row * (BUTTON_H + GAP),
                btn_w,
                BUTTON_H,
            );
            (*kind, rect)
        })
        .collect::<Vec<_>>();
    let die_rows = DieKind::STANDARD.len().div_ceil(DIE_COLUMNS) as f32;
    y += die_rows * (BUTTON_H + GAP);

    let half_w = ((body.w - GAP) / 2.0).max(0.0);
    let quantity = Rect2::new(body.x, y + LABEL_H, half_w, FIELD_H);
    let modifier = Rect2::new(body.x + half_w + GAP, y + LABEL_H, half_w, FIELD_H);
    y += LABEL_H + FIELD_H + GAP;

    let random = Rect2::new(body.x, y, half_w, BUTTON_H);
    let forced_toggle = Rect2::new(body.x + half_w + GAP, y, half_w, BUTTON_H);
    y += BUTTON_H + GAP;

    let forced = Rect2::new(body.x, y + LABEL_H, body.w, FIELD_H);
    y += LABEL_H + FIELD_H + GAP;

    let roll = Rect2::new(body.x, y, body.w, ROLL_H);
    y += ROLL_H + GAP + LABEL_H;

    let history = Rect2::new(body.x, y, body.w, (body.y + body.h - y).max(0.0));

    ControlLayout {
        die_buttons,
        quantity,
        modifier,
        random,
        forced_toggle,
        forced,
        roll,
        history,
    }
}

/// Game master pane state.
#[derive(Debug, Clone)]
pub struct ControlPane {
    die: DieKind,
    quantity: String,
    modifier: String,
    forced_mode: bool,
    forced: String,
    focus: Option<Field>,
    history_scroll: usize,
    follow_history: bool,
}

impl Default for ControlPane {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlPane {
    /// Create the pane with a single d20 selected.
    pub fn new() -> Self {
        Self {
            die: DieKind::D20,
            quantity: "1".to_string(),
            modifier: String::new(),
            forced_mode: false,
            forced: String::new(),
            focus: Some(Field::Quantity),
            history_scroll: 0,
            follow_history: true,
        }
    }

    fn field_mut(&mut self, field: Field) -> (&mut String, usize) {
        match field {
            Field::Quantity => (&mut self.quantity, QUANTITY_MAX_LEN),
            Field::Modifier => (&mut self.modifier, MODIFIER_MAX_LEN),
            Field::Forced => (&mut self.forced, FORCED_MAX_LEN),
        }
    }

    fn set_forced_mode(&mut self, forced_mode: bool) {
        self.forced_mode = forced_mode;
        if forced_mode {
            self.focus = Some(Field::Forced);
        } else if self.focus == Some(Field::Forced) {
            self.focus = Some(Field::Quantity);
        }
    }

    /// Validate the fields and roll into the current tile area.
    fn submit(&mut self, app: &mut AppState) {
        let request = RollRequest::from_input(
            self.die,
            &self.quantity,
            &self.modifier,
            self.forced_mode,
            &self.forced,
        );
        match request {
            Ok(request) => {
                let (_, display) = pane_rects();
                let tiles = tile_area(&display);
                let area = AreaSize::new(tiles.w as u32, tiles.h as u32);
                if app.roll(&request, area, clock_now()) {
                    self.follow_history = true;
                }
            }
            Err(err) => app.reject(&err),
        }
    }

    fn scroll_history(&mut self, app: &AppState, layout: &ControlLayout, mx: f32, my: f32) {
        let total = wrapped_line_count(&app.history.text(), &layout.history);
        let max_scroll = scroll_to_end(total, visible_lines(&layout.history));

        if layout.history.contains(mx, my) {
            let dy = input::scroll_y();
            if dy > 0.0 {
                self.history_scroll = self.history_scroll.saturating_sub(1);
                self.follow_history = false;
            } else if dy < 0.0 {
                self.history_scroll = (self.history_scroll + 1).min(max_scroll);
                self.follow_history = self.history_scroll == max_scroll;
            }
        }

        if self.follow_history {
            self.history_scroll = max_scroll;
        }
    }
}

impl Pane for ControlPane {
    fn update(&mut self, app: &mut AppState, area: &Rect2) {
        let layout = control_layout(area);
        let (mx, my) = mouse_position();

        for (kind, rect) in &layout.die_buttons {
            if clicked(rect, mx, my) {
                self.die = *kind;
            }
        }
        if clicked(&layout.quantity, mx, my) {
            self.focus = Some(Field::Quantity);
        }
        if clicked(&layout.modifier, mx, my) {
            self.focus = Some(Field::Modifier);
        }
        if clicked(&layout.random, mx, my) {
            self.set_forced_mode(false);
        }
        if clicked(&layout.forced_toggle, mx, my) {
            self.set_forced_mode(true);
        }
        if self.forced_mode && clicked(&layout.forced, mx, my) {
            self.focus = Some(Field::Forced);
        }

        if input::tab_pressed() {
            self.focus = Some(next_field(self.focus, self.forced_mode));
        }
        if input::escape_pressed() {
            self.focus = None;
        }
        match self.focus {
            Some(field) => {
                let (text, max_len) = self.field_mut(field);
                edit_text(text, max_len);
            }
            None => {
                input::typed_chars();
            }
        }

        if clicked(&layout.roll, mx, my) || input::enter_pressed() {
            self.submit(app);
        }

        self.scroll_history(app, &layout, mx, my);
    }

    fn draw(&self, app: &AppState, area: &Rect2) {
        let layout = control_layout(area);
        let (mx, my) = mouse_position();

        draw_panel_titled(area, "Game Master");

        for (kind, rect) in &layout.die_buttons {
            draw_button(&kind.to_string(), rect, *kind == self.die, mx, my);
        }

        let label = |text: &str, field: &Rect2| {
            draw_label(text, field.x, field.y - LABEL_H, UI_TEXT, palette::LIGHT_GRAY);
        };

        label("Quantity", &layout.quantity);
        draw_input(
            &self.quantity,
            "1",
            self.focus == Some(Field::Quantity),
            &layout.quantity,
        );
        label("Modifier", &layout.modifier);
        draw_input(
            &self.modifier,
            "0",
            self.focus == Some(Field::Modifier),
            &layout.modifier,
        );

        draw_button("Random", &layout.random, !self.forced_mode, mx, my);
        draw_button("Forced", &layout.forced_toggle, self.forced_mode, mx, my);

        label("Forced values", &layout.forced);
        if self.forced_mode {
            draw_input(
                &self.forced,
                "e.g. 4,11,9",
                self.focus == Some(Field::Forced),
                &layout.forced,
            );
        } else {
            draw_input("", "random roll", false, &layout.forced);
        }

        draw_button("ROLL (Enter)", &layout.roll, false, mx, my);

        label("History", &layout.history);
        bordered_rect(&layout.history, palette::BLACK, palette::DARK_GRAY);
        draw_text_area(
            &app.history.text(),
            self.history_scroll,
            &layout.history.inset(4.0),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ControlLayout {
        control_layout(&Rect2::new(0.0, 0.0, 360.0, 720.0))
    }

    #[test]
    fn one_button_per_standard_die() {
        let layout = layout();
        let kinds: Vec<DieKind> = layout.die_buttons.iter().map(|(k, _)| *k).collect();
        assert_eq!(kinds, DieKind::STANDARD.to_vec());
    }

    #[test]
    fn die_buttons_do_not_overlap() {
        let layout = layout();
        for (i, (_, a)) in layout.die_buttons.iter().enumerate() {
            for (_, b) in &layout.die_buttons[i + 1..] {
                let separate = a.x + a.w <= b.x
                    || b.x + b.w <= a.x
                    || a.y + a.h <= b.y
                    || b.y + b.h <= a.y;
                assert!(separate, "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn widgets_stack_top_to_bottom() {
        let layout = layout();
        let last_die = layout.die_buttons.last().map(|(_, r)| r.y).unwrap_or(0.0);
        assert!(last_die < layout.quantity.y);
        assert_eq!(layout.quantity.y, layout.modifier.y);
        assert!(layout.quantity.y < layout.random.y);
        assert!(layout.random.y < layout.forced.y);
        assert!(layout.forced.y < layout.roll.y);
        assert!(layout.roll.y < layout.history.y);
        assert!(layout.history.h > 0.0);
        assert!(layout.history.y + layout.history.h <= 720.0);
    }

    #[test]
    fn tiny_pane_does_not_produce_negative_sizes() {
        let layout = control_layout(&Rect2::new(0.0, 0.0, 20.0, 50.0));
        assert!(layout.history.h >= 0.0);
        assert!(layout.die_buttons.iter().all(|(_, r)| r.w >= 0.0));
    }

    #[test]
    fn tab_cycles_fields() {
        assert_eq!(next_field(None, false), Field::Quantity);
        assert_eq!(next_field(Some(Field::Quantity), false), Field::Modifier);
        assert_eq!(next_field(Some(Field::Modifier), false), Field::Quantity);
        assert_eq!(next_field(Some(Field::Modifier), true), Field::Forced);
        assert_eq!(next_field(Some(Field::Forced), true), Field::Quantity);
    }

    #[test]
    fn leaving_forced_mode_moves_focus() {
        let mut pane = ControlPane::new();
        pane.set_forced_mode(true);
        assert_eq!(pane.focus, Some(Field::Forced));
        pane.set_forced_mode(false);
        assert_eq!(pane.focus, Some(Field::Quantity));
    }
}
