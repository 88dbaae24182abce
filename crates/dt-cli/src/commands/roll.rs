use colored::Colorize;

use dt_engine::{
    EngineConfig, RollRequest, RollResolver, SegmentStyle, TotalLine, history_line,
};

/// Arguments of `dicetray roll`.
pub struct RollArgs<'a> {
    pub die: &'a str,
    pub quantity: &'a str,
    pub modifier: &'a str,
    pub force: Option<&'a str>,
    pub seed: Option<u64>,
    pub verbose: bool,
}

pub fn run(config: &EngineConfig, args: &RollArgs<'_>) -> Result<(), String> {
    let die = super::parse_die(args.die)?;
    let request = RollRequest::from_input(
        die,
        args.quantity,
        args.modifier,
        args.force.is_some(),
        args.force.unwrap_or_default(),
    )
    .map_err(|e| e.to_string())?;

    if request.quantity() > config.quantity_cap {
        log::warn!(
            "rolling {} dice, above the suggested cap of {}",
            request.quantity(),
            config.quantity_cap
        );
    }

    let resolver = match args.seed {
        Some(seed) => RollResolver::seeded(seed),
        None => RollResolver::new(),
    };
    let mut resolver = resolver.with_quantity_limit(config.quantity_limit);
    let outcome = resolver.resolve(&request).map_err(|e| e.to_string())?;

    println!("  {} {}", "Type:".bold(), outcome.die());
    println!("  {}", render_total(&TotalLine::for_outcome(&outcome)));
    if args.verbose {
        println!("  {}", history_line(&outcome).trim_end().dimmed());
    }
    Ok(())
}

/// Render the total line with the modifier highlighted.
fn render_total(line: &TotalLine) -> String {
    line.segments()
        .iter()
        .map(|segment| match segment.style {
            SegmentStyle::Plain => segment.text.normal().to_string(),
            SegmentStyle::Modifier => segment.text.red().bold().to_string(),
        })
        .collect()
}
