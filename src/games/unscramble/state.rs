use serde::{Deserialize, Serialize};

/// Snapshot of everything the screen needs to draw one frame.
///
/// A snapshot is never edited after it is published. Every transition below
/// borrows the current snapshot and returns the next one, so an observer holding
/// an older value still sees a consistent view. The answer is never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnscrambleState {
    pub scrambled_word: String,
    /// 1-based round number
    pub round: u32,
    pub score: u32,
    pub wrong_guess: bool,
    pub game_over: bool,
}

impl Default for UnscrambleState {
    fn default() -> Self {
        Self {
            scrambled_word: String::new(),
            round: 1,
            score: 0,
            wrong_guess: false,
            game_over: false,
        }
    }
}

impl UnscrambleState {
    /// First round of a fresh game
    pub fn new_game(scrambled_word: String) -> Self {
        Self {
            scrambled_word,
            ..Self::default()
        }
    }

    /// Same round, flagged as a wrong guess
    pub fn with_wrong_guess(&self) -> Self {
        Self {
            wrong_guess: true,
            ..self.clone()
        }
    }

    /// Move on to the next word
    pub fn next_round(&self, scrambled_word: String, score: u32) -> Self {
        Self {
            scrambled_word,
            round: self.round + 1,
            score,
            wrong_guess: false,
            game_over: self.game_over,
        }
    }

    /// Terminal state: the last word stays on screen
    pub fn finished(&self, score: u32) -> Self {
        Self {
            score,
            wrong_guess: false,
            game_over: true,
            ..self.clone()
        }
    }

    pub fn is_playable(&self) -> bool {
        !self.game_over
    }
}
