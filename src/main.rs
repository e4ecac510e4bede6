use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use santorini::cli::Driver;
use santorini::config::AppConfig;
use santorini::core::PlayerKind;
use santorini::logging;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Switch {
    On,
    Off,
}

impl Switch {
    fn enabled(self) -> bool {
        self == Switch::On
    }
}

/// Play Santorini in the terminal.
#[derive(Parser)]
#[command(name = "santorini", about = "Play Santorini in the terminal")]
struct Cli {
    /// White player: human, heuristic, or random
    white: Option<PlayerKind>,

    /// Blue player: human, heuristic, or random
    blue: Option<PlayerKind>,

    /// Offer undo/redo before each turn
    #[arg(value_enum)]
    undo: Option<Switch>,

    /// Show score components in the turn banner
    #[arg(value_enum)]
    score: Option<Switch>,

    /// Seed for the scripted players
    #[arg(long)]
    seed: Option<u64>,

    /// Path to TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write logs
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_or_default(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    };

    // Apply CLI overrides
    if let Some(white) = cli.white {
        config.white = white;
    }
    if let Some(blue) = cli.blue {
        config.blue = blue;
    }
    if let Some(undo) = cli.undo {
        config.undo = undo.enabled();
    }
    if let Some(score) = cli.score {
        config.score = score.enabled();
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if let Some(log_file) = cli.log_file {
        config.log_file = log_file;
    }
    config.validate()?;

    logging::init(&config.log_file)
        .with_context(|| format!("opening log file {}", config.log_file.display()))?;

    let stdin = io::stdin();
    let mut driver = Driver::new(stdin.lock(), io::stdout(), config);
    driver.run().context("game session failed")?;
    Ok(())
}
