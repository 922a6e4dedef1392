use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::games::unscramble::GameConfig;

const DEFAULT_LOG_FILE: &str = "unscramble.log";

#[derive(Parser, Debug)]
#[command(name = "unscramble")]
#[command(about = "🔤 Unscramble the word before the rounds run out")]
#[command(version)]
pub struct Cli {
    /// JSON file with `words`, `max_rounds` and `score_increase`
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Words per game (overrides the config file)
    #[arg(short, long)]
    pub rounds: Option<u32>,

    /// Points per correct guess (overrides the config file)
    #[arg(long)]
    pub score_increase: Option<u32>,

    /// Seed for a reproducible word order
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where to write logs (defaults to the system temp directory)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Defaults, then the config file, then command line overrides
    pub fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(rounds) = self.rounds {
            config.max_rounds = rounds;
        }
        if let Some(score_increase) = self.score_increase {
            config.score_increase = score_increase;
        }
        Ok(config)
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE))
    }

    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
