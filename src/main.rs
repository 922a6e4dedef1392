use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

use unscramble::cli::Cli;
use unscramble::core::engine::Engine;
use unscramble::games::unscramble::{GameController, UnscrambleGame};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    // Config errors are reported before the terminal switches to raw mode
    let config = cli.game_config()?;
    let controller = match cli.seed {
        Some(seed) => GameController::with_seed(config, seed)?,
        None => GameController::new(config)?,
    };
    info!(rounds = controller.max_rounds(), seed = ?cli.seed, "starting unscramble");

    let terminal = ratatui::init();
    let result = Engine::new(UnscrambleGame::new(controller)).run(terminal).await;

    ratatui::restore();
    result
}

/// Logs go to a file so they never draw over the game screen
fn init_tracing(cli: &Cli) -> Result<()> {
    let path = cli.log_path();
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("unscramble={}", cli.log_level())))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
