//! CLI frontend for the Dicetray dice roller.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use dt_engine::EngineConfig;

#[derive(Parser)]
#[command(
    name = "dicetray",
    about = "Dicetray: a dice roller for the game master's table",
    version,
    propagate_version = true
)]
struct Cli {
    /// JSON file overriding layout, animation and sound settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll dice and print the total line
    Roll {
        /// Die type: d4, d6, d8, d10, d12, d20, d100 (or any dN)
        die: String,

        /// Number of dice
        #[arg(short = 'n', long, default_value = "1", allow_hyphen_values = true)]
        quantity: String,

        /// Flat modifier added to the sum (e.g. 3 or -2)
        #[arg(short, long, default_value = "", allow_hyphen_values = true)]
        modifier: String,

        /// Forced values instead of random ones, comma-separated
        #[arg(short, long, allow_hyphen_values = true)]
        force: Option<String>,

        /// RNG seed for reproducible random rolls
        #[arg(long)]
        seed: Option<u64>,

        /// Also print the history line
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how result tiles fit into a display area
    Layout {
        /// Area width in pixels
        #[arg(short = 'W', long)]
        width: u32,

        /// Area height in pixels
        #[arg(short = 'H', long)]
        height: u32,

        /// Number of tiles
        #[arg(short, long)]
        count: usize,

        /// Die type (d100 starts with larger tiles)
        #[arg(short, long, default_value = "d20")]
        die: String,
    },

    /// List the supported die types
    Dice,

    /// Replay the spin animation of one tile
    Frames {
        /// Die type
        die: String,

        /// Face value the tile settles on
        value: u32,

        /// Tile edge in pixels
        #[arg(short, long, default_value = "200")]
        size: u32,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<EngineConfig, String> {
    match path {
        Some(path) => EngineConfig::load(path).map_err(|e| e.to_string()),
        None => Ok(EngineConfig::default()),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let result = load_config(cli.config.as_ref()).and_then(|config| match cli.command {
        Commands::Roll {
            die,
            quantity,
            modifier,
            force,
            seed,
            verbose,
        } => commands::roll::run(
            &config,
            &commands::roll::RollArgs {
                die: &die,
                quantity: &quantity,
                modifier: &modifier,
                force: force.as_deref(),
                seed,
                verbose,
            },
        ),
        Commands::Layout {
            width,
            height,
            count,
            die,
        } => commands::layout::run(&config, width, height, count, &die),
        Commands::Dice => commands::dice::run(),
        Commands::Frames { die, value, size } => commands::frames::run(&config, &die, value, size),
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
