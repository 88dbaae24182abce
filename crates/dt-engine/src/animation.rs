//! Time-bounded spin animation for result tiles.
//!
//! Each tile spins through a fixed lap of rotation angles, one per tick,
//! until its spin budget has elapsed and it settles on the final face.
//! Ticks are scheduled on a [`Ticker`] driven by the caller's clock. Every
//! call to [`AnimationDriver::begin`] starts a new generation; ticks left
//! over from an earlier generation are dropped when they fire.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::f32::consts::TAU;
use std::time::Duration;

use crate::config::AnimationConfig;

/// Smallest frame interval accepted, so the ticker always makes progress.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Lifecycle of one tile's animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileState {
    /// Still rotating.
    Spinning,
    /// Showing the final face upright. Terminal.
    Settled,
}

/// What a tile shows right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Index of the tile in result order.
    pub tile: usize,
    /// Rotation of the polygon in radians.
    pub rotation: f32,
    /// Face value printed on the tile.
    pub value: u32,
    /// Spinning or settled.
    pub state: TileState,
}

/// Per-tile animation state.
#[derive(Debug, Clone)]
pub struct TileAnimation {
    started_at: Duration,
    frame_index: usize,
    final_value: u32,
    rotation: f32,
    state: TileState,
}

impl TileAnimation {
    /// Start spinning at `now`.
    pub fn new(final_value: u32, now: Duration) -> Self {
        Self {
            started_at: now,
            frame_index: 0,
            final_value,
            rotation: 0.0,
            state: TileState::Spinning,
        }
    }

    /// Move to the next frame, or settle if the budget is spent.
    pub fn advance(&mut self, now: Duration, angles: &[f32], budget: Duration) -> TileState {
        if self.state == TileState::Settled {
            return TileState::Settled;
        }
        if now.saturating_sub(self.started_at) > budget || angles.is_empty() {
            self.state = TileState::Settled;
            self.rotation = 0.0;
            return TileState::Settled;
        }
        self.rotation = angles[self.frame_index % angles.len()];
        self.frame_index += 1;
        TileState::Spinning
    }

    /// Current state.
    pub fn state(&self) -> TileState {
        self.state
    }

    /// The face this tile settles on.
    pub fn final_value(&self) -> u32 {
        self.final_value
    }

    /// Number of spin frames rendered so far.
    pub fn frames_rendered(&self) -> usize {
        self.frame_index
    }
}

/// A pending tick for one tile.
///
/// Ordered by due time so the ticker can keep them in a heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScheduledTick {
    /// When the tick should fire.
    pub due: Duration,
    /// Render cycle the tick belongs to.
    pub generation: u64,
    /// Tile index.
    pub tile: usize,
}

/// Result of firing one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tick belongs to a superseded render and was ignored.
    Stale,
    /// A new spin frame was produced; the next tick is attached.
    Spinning(ScheduledTick),
    /// The tile settled; nothing further is scheduled.
    Settled,
}

/// Drives the spin of every tile in the current render.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    angles: Vec<f32>,
    interval: Duration,
    budget: Duration,
    generation: u64,
    tiles: Vec<TileAnimation>,
}

/// One full lap of rotation angles split into `frames` equal steps.
pub fn spin_angles(frames: usize) -> Vec<f32> {
    (0..frames)
        .map(|i| i as f32 * TAU / frames as f32)
        .collect()
}

impl AnimationDriver {
    /// Create an idle driver.
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            angles: spin_angles(config.frames_per_lap),
            interval: config.frame_interval().max(MIN_INTERVAL),
            budget: config.budget(),
            generation: 0,
            tiles: Vec::new(),
        }
    }

    /// Discard the current tiles and start one animation per value.
    ///
    /// Each tile renders its first frame immediately. Returns the first
    /// scheduled tick of every tile.
    pub fn begin(&mut self, values: &[u32], now: Duration) -> Vec<ScheduledTick> {
        self.generation += 1;
        self.tiles = values
            .iter()
            .map(|&value| TileAnimation::new(value, now))
            .collect();

        let mut ticks = Vec::with_capacity(self.tiles.len());
        for (tile, anim) in self.tiles.iter_mut().enumerate() {
            if anim.advance(now, &self.angles, self.budget) == TileState::Spinning {
                ticks.push(ScheduledTick {
                    due: now + self.interval,
                    generation: self.generation,
                    tile,
                });
            }
        }
        ticks
    }

    /// Fire a scheduled tick at `now`.
    pub fn fire(&mut self, tick: ScheduledTick, now: Duration) -> TickOutcome {
        if tick.generation != self.generation {
            log::debug!(
                "dropping stale tick for tile {} (generation {} != {})",
                tick.tile,
                tick.generation,
                self.generation
            );
            return TickOutcome::Stale;
        }
        let Some(anim) = self.tiles.get_mut(tick.tile) else {
            return TickOutcome::Stale;
        };
        match anim.advance(now, &self.angles, self.budget) {
            TileState::Spinning => TickOutcome::Spinning(ScheduledTick {
                due: now + self.interval,
                ..tick
            }),
            TileState::Settled => TickOutcome::Settled,
        }
    }

    /// The current frame of a tile.
    pub fn frame(&self, tile: usize) -> Option<Frame> {
        self.tiles.get(tile).map(|anim| Frame {
            tile,
            rotation: anim.rotation,
            value: anim.final_value,
            state: anim.state,
        })
    }

    /// Current frames of all tiles in result order.
    pub fn frames(&self) -> impl Iterator<Item = Frame> + '_ {
        (0..self.tiles.len()).filter_map(|tile| self.frame(tile))
    }

    /// The active render generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of tiles being animated.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// True once every tile has settled.
    pub fn all_settled(&self) -> bool {
        self.tiles.iter().all(|t| t.state() == TileState::Settled)
    }
}

/// A single-threaded timer queue feeding ticks into an [`AnimationDriver`].
#[derive(Debug, Default)]
pub struct Ticker {
    queue: BinaryHeap<Reverse<ScheduledTick>>,
}

impl Ticker {
    /// Create an empty ticker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue ticks.
    pub fn schedule(&mut self, ticks: impl IntoIterator<Item = ScheduledTick>) {
        self.queue.extend(ticks.into_iter().map(Reverse));
    }

    /// Number of queued ticks, stale ones included.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Due time of the earliest queued tick.
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.peek().map(|Reverse(t)| t.due)
    }

    /// Fire every tick due at or before `now`. Returns how many fired.
    pub fn run_due(&mut self, driver: &mut AnimationDriver, now: Duration) -> usize {
        let mut fired = 0;
        while self.next_due().is_some_and(|due| due <= now) {
            let Some(Reverse(tick)) = self.queue.pop() else {
                break;
            };
            fired += 1;
            if let TickOutcome::Spinning(next) = driver.fire(tick, now) {
                self.queue.push(Reverse(next));
            }
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn driver() -> AnimationDriver {
        AnimationDriver::new(&AnimationConfig::default())
    }

    #[test]
    fn lap_has_twenty_angles() {
        let angles = spin_angles(20);
        assert_eq!(angles.len(), 20);
        assert!((angles[1] - std::f32::consts::PI / 10.0).abs() < 1e-6);
        assert!((angles[19] - 19.0 * std::f32::consts::PI / 10.0).abs() < 1e-5);
    }

    #[test]
    fn first_frame_renders_immediately() {
        let mut d = driver();
        let ticks = d.begin(&[7, 3], ms(0));
        assert_eq!(ticks.len(), 2);
        assert_eq!(ticks[0].due, ms(20));
        let f = d.frame(0).unwrap();
        assert_eq!(f.state, TileState::Spinning);
        assert_eq!(f.value, 7);
        assert_eq!(f.rotation, 0.0);
    }

    #[test]
    fn settles_after_budget() {
        let mut d = driver();
        let mut ticker = Ticker::new();
        ticker.schedule(d.begin(&[12], ms(0)));

        for t in (20..=100).step_by(20) {
            ticker.run_due(&mut d, ms(t));
            assert_eq!(d.frame(0).unwrap().state, TileState::Spinning, "t={t}");
        }
        ticker.run_due(&mut d, ms(120));
        let f = d.frame(0).unwrap();
        assert_eq!(f.state, TileState::Settled);
        assert_eq!(f.rotation, 0.0);
        assert_eq!(f.value, 12);
        assert_eq!(ticker.pending(), 0);
        assert!(d.all_settled());
    }

    #[test]
    fn angles_advance_each_tick() {
        let mut d = driver();
        let mut ticker = Ticker::new();
        ticker.schedule(d.begin(&[1], ms(0)));
        ticker.run_due(&mut d, ms(20));
        let step = std::f32::consts::PI / 10.0;
        assert!((d.frame(0).unwrap().rotation - step).abs() < 1e-6);
        ticker.run_due(&mut d, ms(40));
        assert!((d.frame(0).unwrap().rotation - 2.0 * step).abs() < 1e-6);
    }

    #[test]
    fn angles_wrap_around() {
        let mut anim = TileAnimation::new(4, ms(0));
        let angles = spin_angles(3);
        let long = Duration::from_secs(60);
        for _ in 0..4 {
            anim.advance(ms(1), &angles, long);
        }
        assert_eq!(anim.frames_rendered(), 4);
        assert!((anim.rotation - angles[0]).abs() < 1e-6);
    }

    #[test]
    fn late_tick_settles_directly() {
        let mut d = driver();
        let ticks = d.begin(&[5], ms(0));
        assert_eq!(d.fire(ticks[0], ms(500)), TickOutcome::Settled);
    }

    #[test]
    fn stale_ticks_are_dropped() {
        let mut d = driver();
        let mut ticker = Ticker::new();
        ticker.schedule(d.begin(&[1, 2, 3], ms(0)));
        let old_generation = d.generation();

        // A new roll supersedes the old tiles before their ticks fire.
        ticker.schedule(d.begin(&[6], ms(10)));
        assert_ne!(d.generation(), old_generation);
        assert_eq!(d.tile_count(), 1);

        let stale = ScheduledTick {
            due: ms(20),
            generation: old_generation,
            tile: 2,
        };
        assert_eq!(d.fire(stale, ms(20)), TickOutcome::Stale);

        // Old ticks drain without touching the new tile or being rescheduled.
        ticker.run_due(&mut d, ms(20));
        assert_eq!(ticker.pending(), 1);
        assert_eq!(d.frame(0).unwrap().rotation, 0.0);
        ticker.run_due(&mut d, ms(30));
        assert!(d.frame(0).unwrap().rotation > 0.0);
    }

    #[test]
    fn tiles_settle_independently() {
        let mut d = driver();
        let mut ticker = Ticker::new();
        let ticks = d.begin(&[1, 2], ms(0));
        ticker.schedule(ticks.iter().copied());
        // Tile 1's tick fires late; tile 0 keeps spinning on time.
        d.fire(ticks[1], ms(150));
        assert_eq!(d.frame(1).unwrap().state, TileState::Settled);
        assert_eq!(d.frame(0).unwrap().state, TileState::Spinning);
        assert!(!d.all_settled());
    }

    #[test]
    fn zero_interval_still_progresses() {
        let cfg = AnimationConfig::default().with_frame_interval(Duration::ZERO);
        let mut d = AnimationDriver::new(&cfg);
        let mut ticker = Ticker::new();
        ticker.schedule(d.begin(&[3], ms(0)));
        assert_eq!(ticker.run_due(&mut d, ms(0)), 0);
        assert_eq!(ticker.run_due(&mut d, ms(1)), 1);
    }
}
