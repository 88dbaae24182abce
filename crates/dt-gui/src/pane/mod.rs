//! The two panes of the window: game master controls and spectator display.

pub mod control;
pub mod display;

use crate::app::AppState;
use crate::widget::Rect2;

/// Trait that both panes implement.
pub trait Pane {
    /// Update state based on input within `area`.
    fn update(&mut self, app: &mut AppState, area: &Rect2);
    /// Draw the pane into `area`.
    fn draw(&self, app: &AppState, area: &Rect2);
}
