//! Turning a roll outcome into what the spectator display shows.
//!
//! The composer owns the animation state of the current render. Showing a
//! new outcome replaces the layout, restarts the spin and bumps the
//! animation generation so pending ticks from the previous roll are
//! discarded.

use std::fmt;
use std::time::Duration;

use crate::animation::{AnimationDriver, TileState, Ticker};
use crate::config::EngineConfig;
use crate::dice::{DieColor, RollOutcome};
use crate::error::GeometryError;
use crate::geometry::{Vertex, regular_polygon_vertices};
use crate::layout::{AreaSize, LayoutPlan, compute_layout};

/// Face text height relative to the tile edge.
pub const FONT_SCALE: f32 = 0.12;

/// Label shown before the first roll.
const EMPTY_LABEL: &str = "Type: —";

/// How a piece of the total line is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentStyle {
    /// Regular text.
    Plain,
    /// The modifier value, drawn in a distinct color.
    Modifier,
}

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The text of this run.
    pub text: String,
    /// Its style.
    pub style: SegmentStyle,
}

/// The sum line under the tiles, e.g. `4 + 6 - 2 = 8`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TotalLine {
    segments: Vec<Segment>,
}

impl TotalLine {
    /// Format the total line of an outcome.
    ///
    /// The `= total` suffix appears only when more than one term contributes.
    pub fn for_outcome(outcome: &RollOutcome) -> Self {
        let mut line = Self::default();
        let faces: Vec<String> = outcome.results().iter().map(u32::to_string).collect();
        line.push(faces.join(" + "), SegmentStyle::Plain);

        let modifier = outcome.modifier();
        if modifier != 0 {
            let sign = if modifier > 0 { " + " } else { " - " };
            line.push(sign.to_string(), SegmentStyle::Plain);
            line.push(modifier.unsigned_abs().to_string(), SegmentStyle::Modifier);
        }

        if outcome.term_count() > 1 {
            line.push(format!(" = {}", outcome.total()), SegmentStyle::Plain);
        }
        line
    }

    fn push(&mut self, text: String, style: SegmentStyle) {
        if !text.is_empty() {
            self.segments.push(Segment { text, style });
        }
    }

    /// Styled runs in display order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl fmt::Display for TotalLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(&segment.text)?;
        }
        Ok(())
    }
}

/// Everything needed to draw one tile for the current frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TileFrame {
    /// Top-left corner inside the display area.
    pub origin: (f32, f32),
    /// Edge length of the tile's square surface.
    pub size: f32,
    /// Polygon outline in tile-local coordinates.
    pub vertices: Vec<Vertex>,
    /// Face fill color.
    pub color: DieColor,
    /// Face value, centered.
    pub value: u32,
    /// Height of the face text.
    pub font_size: f32,
    /// Spinning or settled.
    pub state: TileState,
}

#[derive(Debug, Clone)]
struct Render {
    outcome: RollOutcome,
    plan: LayoutPlan,
    area: AreaSize,
}

/// Orchestrates layout, geometry and animation for one roll at a time.
#[derive(Debug)]
pub struct DisplayComposer {
    config: EngineConfig,
    driver: AnimationDriver,
    ticker: Ticker,
    current: Option<Render>,
}

impl DisplayComposer {
    /// Create a composer with nothing on display.
    pub fn new(config: EngineConfig) -> Self {
        let driver = AnimationDriver::new(&config.animation);
        Self {
            config,
            driver,
            ticker: Ticker::new(),
            current: None,
        }
    }

    /// Replace the display with a new outcome laid out in `area`.
    ///
    /// The area is read once here; later resizes apply to the next roll.
    pub fn show(&mut self, outcome: RollOutcome, area: AreaSize, now: Duration) -> &LayoutPlan {
        let plan = compute_layout(
            area,
            outcome.quantity(),
            outcome.die().sides(),
            &self.config.layout,
        );
        log::debug!(
            "showing {} tiles of {} at {}px ({}x{})",
            outcome.quantity(),
            outcome.die(),
            plan.tile_size,
            plan.columns,
            plan.rows
        );
        let ticks = self.driver.begin(outcome.results(), now);
        self.ticker.schedule(ticks);
        &self
            .current
            .insert(Render {
                outcome,
                plan,
                area,
            })
            .plan
    }

    /// Advance the animation to `now`. Returns the number of ticks fired.
    pub fn tick(&mut self, now: Duration) -> usize {
        self.ticker.run_due(&mut self.driver, now)
    }

    /// True while any tile is still spinning.
    pub fn is_animating(&self) -> bool {
        !self.driver.all_settled()
    }

    /// The outcome on display.
    pub fn outcome(&self) -> Option<&RollOutcome> {
        self.current.as_ref().map(|r| &r.outcome)
    }

    /// The layout in use.
    pub fn plan(&self) -> Option<&LayoutPlan> {
        self.current.as_ref().map(|r| &r.plan)
    }

    /// Animation generation of the current render.
    pub fn generation(&self) -> u64 {
        self.driver.generation()
    }

    /// The die-type label above the tiles.
    pub fn die_label(&self) -> String {
        match &self.current {
            Some(render) => format!("Type: {}", render.outcome.die()),
            None => EMPTY_LABEL.to_string(),
        }
    }

    /// The total line of the current outcome.
    pub fn total_line(&self) -> Option<TotalLine> {
        self.outcome().map(TotalLine::for_outcome)
    }

    /// Drawable frames for every tile.
    pub fn tile_frames(&self) -> Result<Vec<TileFrame>, GeometryError> {
        let Some(render) = &self.current else {
            return Ok(Vec::new());
        };
        let die = render.outcome.die();
        let size = render.plan.tile_size as f32;

        render
            .plan
            .cells()
            .zip(self.driver.frames())
            .map(|(cell, frame)| {
                Ok(TileFrame {
                    origin: render.plan.tile_origin(cell, render.area.width),
                    size,
                    vertices: regular_polygon_vertices(die.sprite_sides(), size, frame.rotation)?,
                    color: die.color(),
                    value: frame.value,
                    font_size: size * FONT_SCALE,
                    state: frame.state,
                })
            })
            .collect()
    }
}
