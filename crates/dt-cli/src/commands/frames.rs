use std::time::Duration;

use colored::Colorize;

use dt_engine::{
    AnimationDriver, EngineConfig, RollMode, RollRequest, RollResolver, TileState, Ticker,
    compose::FONT_SCALE, regular_polygon_vertices,
};

pub fn run(config: &EngineConfig, die: &str, value: u32, size: u32) -> Result<(), String> {
    let die = super::parse_die(die)?;

    // Validate the face through the same path as a forced roll.
    let request = RollRequest::new(die, 1, 0, RollMode::Forced(vec![i64::from(value)]));
    let outcome = RollResolver::seeded(0)
        .resolve(&request)
        .map_err(|e| e.to_string())?;

    let mut driver = AnimationDriver::new(&config.animation);
    let mut ticker = Ticker::new();
    ticker.schedule(driver.begin(outcome.results(), Duration::ZERO));

    println!(
        "  {} {die} showing {value} ({size}px tile, {} vertices, text {:.0}px)",
        "Spin".bold(),
        die.sprite_sides(),
        size as f32 * FONT_SCALE
    );

    let mut now = Duration::ZERO;
    loop {
        let Some(frame) = driver.frame(0) else {
            break;
        };
        let vertices = regular_polygon_vertices(die.sprite_sides(), size as f32, frame.rotation)
            .map_err(|e| e.to_string())?;
        let first = vertices.first().map_or((0.0, 0.0), |v| (v.x, v.y));
        let state = match frame.state {
            TileState::Spinning => "spinning".yellow(),
            TileState::Settled => "settled".green(),
        };
        println!(
            "  t={:>4}ms  angle {:>5.1}°  first vertex ({:>6.1}, {:>6.1})  {state}",
            now.as_millis(),
            frame.rotation.to_degrees(),
            first.0,
            first.1
        );

        if frame.state == TileState::Settled {
            break;
        }
        let Some(due) = ticker.next_due() else {
            break;
        };
        now = due;
        ticker.run_due(&mut driver, now);
    }

    Ok(())
}
