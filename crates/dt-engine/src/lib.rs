//! Dice engine for Dicetray.
//!
//! Resolves random or forced rolls, fits the result tiles into the display
//! area, spins each tile for a short time-bounded animation and formats the
//! total line. Sound and history are reached through small capability
//! traits so front-ends can plug in their own backends.

pub mod alert;
pub mod animation;
pub mod compose;
pub mod config;
pub mod dice;
pub mod error;
pub mod geometry;
pub mod history;
pub mod layout;
pub mod sound;

pub use alert::{Alert, AlertLevel, WarningRegistry};
pub use animation::{AnimationDriver, Frame, TileAnimation, TileState, Ticker};
pub use compose::{DisplayComposer, Segment, SegmentStyle, TileFrame, TotalLine};
pub use config::{AnimationConfig, EngineConfig, LayoutConfig};
pub use dice::{DieColor, DieKind, RollMode, RollOutcome, RollRequest, RollResolver};
pub use error::{ConfigError, GeometryError, SoundError, ValidationError, ValidationResult};
pub use geometry::{Vertex, regular_polygon_vertices};
pub use history::{HistoryLog, RollHistory, history_line};
pub use layout::{AreaSize, GridCell, LayoutPlan, compute_layout};
pub use sound::{NullSoundPlayer, SoundPlayer, play_roll_sound};
