//! Tunable constants for layout, animation and the roll surface.
//!
//! Every field has a default, so a JSON file only needs the keys it
//! overrides.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tile sizing for the results grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Starting tile edge in pixels.
    pub base_tile: u32,
    /// Starting tile edge for dice with 100 or more sides.
    pub large_tile: u32,
    /// Gap between neighbouring tiles.
    pub padding: u32,
    /// Factor applied to the tile edge on every shrink step.
    pub shrink_factor: f64,
    /// Smallest tile edge; a plan at this size is accepted even if it overflows.
    pub min_tile: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_tile: 200,
            large_tile: 220,
            padding: 16,
            shrink_factor: 0.9,
            min_tile: 20,
        }
    }
}

impl LayoutConfig {
    /// Set the starting tile edge for regular dice.
    pub fn with_base_tile(mut self, size: u32) -> Self {
        self.base_tile = size.max(1);
        self
    }

    /// Set the inter-tile padding.
    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// Set the minimum tile edge (clamped to at least 1).
    pub fn with_min_tile(mut self, size: u32) -> Self {
        self.min_tile = size.max(1);
        self
    }

    /// Starting tile edge for a die with the given number of sides.
    pub fn start_tile(&self, sides: u32) -> u32 {
        let start = if sides < 100 {
            self.base_tile
        } else {
            self.large_tile
        };
        start.max(self.floor())
    }

    /// The effective floor, never below 1.
    pub fn floor(&self) -> u32 {
        self.min_tile.max(1)
    }
}

/// Timing of the per-tile spin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Delay between two frames, in milliseconds.
    pub frame_interval_ms: u64,
    /// Spin time after which a tile settles, in milliseconds.
    pub budget_ms: u64,
    /// Rotation frames in one full lap.
    pub frames_per_lap: usize,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 20,
            budget_ms: 100,
            frames_per_lap: 20,
        }
    }
}

impl AnimationConfig {
    /// Set the frame interval.
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval_ms = interval.as_millis() as u64;
        self
    }

    /// Set the spin budget.
    pub fn with_budget(mut self, budget: Duration) -> Self {
        self.budget_ms = budget.as_millis() as u64;
        self
    }

    /// Frame interval as a duration.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// Spin budget as a duration.
    pub fn budget(&self) -> Duration {
        Duration::from_millis(self.budget_ms)
    }
}

/// Largest quantity resolved in one roll unless configured otherwise.
pub const DEFAULT_QUANTITY_LIMIT: u32 = 10_000;

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Grid layout settings.
    pub layout: LayoutConfig,
    /// Spin animation settings.
    pub animation: AnimationConfig,
    /// Advisory upper bound for the quantity field.
    pub quantity_cap: u32,
    /// Hard upper bound; larger quantities are rejected.
    pub quantity_limit: u32,
    /// Sound played on every successful roll.
    pub sound_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            animation: AnimationConfig::default(),
            quantity_cap: 50,
            quantity_limit: DEFAULT_QUANTITY_LIMIT,
            sound_path: PathBuf::from("sounds/dice_sound.wav"),
        }
    }
}

impl EngineConfig {
    /// Replace the layout settings.
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Replace the animation settings.
    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    /// Set the roll sound file.
    pub fn with_sound_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.sound_path = path.into();
        self
    }

    /// Parse a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.layout.base_tile, 200);
        assert_eq!(cfg.layout.large_tile, 220);
        assert_eq!(cfg.layout.padding, 16);
        assert_eq!(cfg.layout.min_tile, 20);
        assert_eq!(cfg.animation.frame_interval(), Duration::from_millis(20));
        assert_eq!(cfg.animation.budget(), Duration::from_millis(100));
        assert_eq!(cfg.animation.frames_per_lap, 20);
        assert_eq!(cfg.quantity_cap, 50);
    }

    #[test]
    fn start_tile_for_large_dice() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.start_tile(20), 200);
        assert_eq!(layout.start_tile(100), 220);
    }

    #[test]
    fn builders_replace_sections() {
        let layout = LayoutConfig::default()
            .with_base_tile(120)
            .with_padding(4)
            .with_min_tile(30);
        let animation = AnimationConfig::default()
            .with_frame_interval(Duration::from_millis(10))
            .with_budget(Duration::from_millis(50));
        let cfg = EngineConfig::default()
            .with_layout(layout.clone())
            .with_animation(animation.clone())
            .with_sound_path("roll.wav");

        assert_eq!(cfg.layout, layout);
        assert_eq!(cfg.layout.start_tile(20), 120);
        assert_eq!(cfg.layout.start_tile(100), 220);
        assert_eq!(cfg.layout.padding, 4);
        assert_eq!(cfg.layout.floor(), 30);
        assert_eq!(cfg.animation, animation);
        assert_eq!(cfg.animation.frame_interval(), Duration::from_millis(10));
        assert_eq!(cfg.animation.budget(), Duration::from_millis(50));
        assert_eq!(cfg.sound_path, PathBuf::from("roll.wav"));
    }

    #[test]
    fn quantity_limit_defaults_and_overrides() {
        assert_eq!(EngineConfig::default().quantity_limit, DEFAULT_QUANTITY_LIMIT);
        let cfg = EngineConfig::from_json(r#"{ "quantity_limit": 500 }"#).unwrap();
        assert_eq!(cfg.quantity_limit, 500);
        assert_eq!(cfg.quantity_cap, 50);
    }

    #[test]
    fn min_tile_clamped() {
        let layout = LayoutConfig::default().with_min_tile(0);
        assert_eq!(layout.min_tile, 1);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = EngineConfig::from_json(r#"{ "layout": { "padding": 8 } }"#).unwrap();
        assert_eq!(cfg.layout.padding, 8);
        assert_eq!(cfg.layout.base_tile, 200);
        assert_eq!(cfg.animation.budget_ms, 100);
    }

    #[test]
    fn invalid_json_rejected() {
        assert!(matches!(
            EngineConfig::from_json("{ nope"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = EngineConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
