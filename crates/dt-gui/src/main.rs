//! Dicetray GUI: macroquad entry point.
//!
//! Runs the render loop, advances the tile animations from the frame clock
//! and shows alerts on top of both panes.

use std::path::PathBuf;

use macroquad::prelude::*;

use dt_engine::{Alert, EngineConfig};
use dt_gui::app::AppState;
use dt_gui::audio::MacroquadSound;
use dt_gui::pane::Pane;
use dt_gui::pane::control::ControlPane;
use dt_gui::pane::display::DisplayPane;
use dt_gui::theme::{clock_now, palette, pane_rects};
use dt_gui::widget::Rect2;
use dt_gui::widget::modal::{dismissed, draw_alert};

fn window_conf() -> Conf {
    Conf {
        window_title: "Dicetray".to_owned(),
        window_width: 1280,
        window_height: 720,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Parse CLI args: --config <file>
    let args: Vec<String> = std::env::args().collect();
    let config_path = args
        .windows(2)
        .find(|w| w[0] == "--config")
        .map(|w| PathBuf::from(&w[1]));

    let mut startup_alert = None;
    let config = match config_path {
        Some(path) => EngineConfig::load(&path).unwrap_or_else(|e| {
            eprintln!("Failed to load config: {e}");
            startup_alert = Some(Alert::warning(format!("{e}\nUsing default settings.")));
            EngineConfig::default()
        }),
        None => EngineConfig::default(),
    };

    let sound = MacroquadSound::load(&config.sound_path).await;
    let mut app = AppState::new(config, Box::new(sound));
    app.alert = startup_alert;

    let mut control = ControlPane::new();
    let mut display = DisplayPane::new();

    loop {
        clear_background(palette::BLACK);

        app.composer.tick(clock_now());

        let (control_area, display_area) = pane_rects();
        let screen = Rect2::new(0.0, 0.0, screen_width(), screen_height());
        let (mx, my) = mouse_position();

        // The alert is modal: while it is up the controls get no input
        if app.alert.is_some() {
            dt_gui::input::typed_chars();
            if dismissed(&screen, mx, my) {
                app.alert = None;
            }
        } else {
            control.update(&mut app, &control_area);
        }
        display.update(&mut app, &display_area);

        control.draw(&app, &control_area);
        display.draw(&app, &display_area);
        if let Some(alert) = &app.alert {
            draw_alert(alert, &screen, mx, my);
        }

        next_frame().await;
    }
}
