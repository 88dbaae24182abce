//! Modal alert box drawn over both panes.

use macroquad::prelude::*;

use dt_engine::{Alert, AlertLevel};

use super::Rect2;
use super::button::draw_button;
use super::panel::{TITLE_BAR_H, draw_panel_titled};
use super::text_area::draw_text_area;
use crate::theme::palette;

const MODAL_W: f32 = 420.0;
const MODAL_H: f32 = 200.0;
const OK_W: f32 = 80.0;
const OK_H: f32 = 30.0;

/// Where the alert box sits on a screen of the given size.
pub fn modal_rect(screen: &Rect2) -> Rect2 {
    screen.centered(MODAL_W.min(screen.w), MODAL_H.min(screen.h))
}

/// Area of the OK button inside the alert box.
pub fn ok_button_rect(modal: &Rect2) -> Rect2 {
    Rect2::new(
        modal.x + (modal.w - OK_W) / 2.0,
        modal.y + modal.h - OK_H - 12.0,
        OK_W,
        OK_H,
    )
}

/// True when the user dismissed the alert this frame (Enter, Escape or OK).
pub fn dismissed(screen: &Rect2, mouse_x: f32, mouse_y: f32) -> bool {
    let ok = ok_button_rect(&modal_rect(screen));
    crate::input::enter_pressed()
        || crate::input::escape_pressed()
        || super::button::clicked(&ok, mouse_x, mouse_y)
}

/// Draw a dimmed backdrop and the alert box with its OK button.
pub fn draw_alert(alert: &Alert, screen: &Rect2, mouse_x: f32, mouse_y: f32) {
    draw_rectangle(
        screen.x,
        screen.y,
        screen.w,
        screen.h,
        Color::new(0.0, 0.0, 0.0, 0.6),
    );

    let modal = modal_rect(screen);
    draw_panel_titled(&modal, &alert.title);

    let accent = match alert.level {
        AlertLevel::Error => palette::RED,
        AlertLevel::Warning => palette::ORANGE,
    };
    draw_rectangle(modal.x + 2.0, modal.y + TITLE_BAR_H, modal.w - 4.0, 3.0, accent);

    let ok = ok_button_rect(&modal);
    let body = Rect2::new(
        modal.x + 12.0,
        modal.y + TITLE_BAR_H + 12.0,
        modal.w - 24.0,
        ok.y - modal.y - TITLE_BAR_H - 20.0,
    );
    draw_text_area(&alert.message, 0, &body);
    draw_button("OK", &ok, false, mouse_x, mouse_y);
}
