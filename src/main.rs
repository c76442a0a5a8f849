use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use ham_snake::config::Config;
use ham_snake::control::GameController;
use ham_snake::modes::{GraphicalMode, TerminalMode};
use ham_snake::strategy::StrategyKind;

#[derive(Parser)]
#[command(name = "ham_snake")]
#[command(version, about = "Snake with Hamiltonian-cycle autopilots")]
struct Cli {
    /// Path to a YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid width (must be even), overrides the config file
    #[arg(long)]
    width: Option<i32>,

    /// Grid height (must be even), overrides the config file
    #[arg(long)]
    height: Option<i32>,

    /// Movement strategy, overrides the config file
    #[arg(long)]
    strategy: Option<StrategyKind>,

    /// UI to run, overrides the config file
    #[arg(long)]
    ui: Option<UiMode>,

    /// Seed for food placement and maze generation
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum UiMode {
    Terminal,
    Graphical,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(width) = cli.width {
        config.game.grid_width = width;
    }
    if let Some(height) = cli.height {
        config.game.grid_height = height;
    }
    if let Some(strategy) = cli.strategy {
        config.game.strategy = strategy;
    }
    if let Some(ui) = cli.ui {
        config.graphics.enable = matches!(ui, UiMode::Graphical);
    }
    config.validate()?;

    info!(
        width = config.game.grid_width,
        height = config.game.grid_height,
        strategy = ?config.game.strategy,
        graphical = config.graphics.enable,
        "starting"
    );

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let controller = GameController::new(&config, &mut rng);

    if config.graphics.enable {
        GraphicalMode::run(controller, rng)
    } else {
        // The window runs on the main thread; only the terminal UI needs an
        // async runtime
        tokio::runtime::Runtime::new()
            .context("Failed to start async runtime")?
            .block_on(TerminalMode::new(controller, rng).run())
    }
}

/// Both UIs own the screen, so logs go to a file, truncated per run
fn init_logging() -> Result<()> {
    fs::create_dir_all("log").context("Failed to create log directory")?;
    let file = fs::File::create("log/ham_snake.log").context("Failed to open log file")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
