/// Unscramble: guess the original word from its shuffled letters
pub mod config;
pub mod controller;
pub mod game;
pub mod renderer;
pub mod state;
pub mod words;

pub use config::GameConfig;
pub use controller::{GameController, GuessOutcome};
pub use game::UnscrambleGame;
pub use state::UnscrambleState;
