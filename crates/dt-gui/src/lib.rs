//! Game master control panel and spectator display for Dicetray.
//!
//! A macroquad application with two panes: the left pane holds the roll
//! controls and the history, the right pane shows the animated result tiles
//! that players watch.

pub mod app;
pub mod audio;
pub mod input;
pub mod pane;
pub mod theme;
pub mod widget;
