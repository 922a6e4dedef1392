use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use tokio::sync::watch;
use tracing::{debug, info, trace, warn};

use super::config::GameConfig;
use super::state::UnscrambleState;

/// Random draws before falling back to scanning the pool for unused words
const MAX_PICK_ATTEMPTS: usize = 64;

/// Shuffles tried before falling back to a rotation
const MAX_SHUFFLE_ATTEMPTS: usize = 16;

/// Result of submitting the pending guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Wrong,
    /// The game is already over
    Ignored,
}

/// Owns one game session: the word pool, the words already shown, the answer
/// and the pending guess.
///
/// Observers never touch the controller's state directly. They call
/// [`GameController::subscribe`] and receive a fresh [`UnscrambleState`] after
/// every transition.
pub struct GameController {
    config: GameConfig,
    rounds: u32,
    rng: StdRng,
    used_words: HashSet<String>,
    current_word: String,
    user_guess: String,
    state_tx: watch::Sender<UnscrambleState>,
}

impl GameController {
    /// Start a game with an OS-seeded RNG
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Start a reproducible game
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Result<Self> {
        let config = config.validate()?;
        let (state_tx, _) = watch::channel(UnscrambleState::default());
        let mut controller = Self {
            rounds: config.playable_rounds(),
            config,
            rng,
            used_words: HashSet::new(),
            current_word: String::new(),
            user_guess: String::new(),
            state_tx,
        };
        controller.reset();
        Ok(controller)
    }

    /// Current snapshot
    pub fn state(&self) -> UnscrambleState {
        self.state_tx.borrow().clone()
    }

    /// Receiver that is notified on every transition
    pub fn subscribe(&self) -> watch::Receiver<UnscrambleState> {
        self.state_tx.subscribe()
    }

    pub fn user_guess(&self) -> &str {
        &self.user_guess
    }

    /// Rounds in this game, after capping to the pool size
    pub fn max_rounds(&self) -> u32 {
        self.rounds
    }

    pub fn reset(&mut self) {
        self.used_words.clear();
        self.user_guess.clear();
        let next = match self.pick_and_shuffle() {
            Some(scrambled) => UnscrambleState::new_game(scrambled),
            None => UnscrambleState::default().finished(0),
        };
        info!(rounds = self.rounds, "new game");
        self.publish(next);
    }

    /// Store the unsubmitted guess exactly as typed
    pub fn update_guess(&mut self, guess: impl Into<String>) {
        self.user_guess = guess.into();
    }

    pub fn submit_guess(&mut self) -> GuessOutcome {
        let current = self.state();
        let outcome = if current.game_over {
            GuessOutcome::Ignored
        } else if guess_matches(&self.user_guess, &self.current_word) {
            self.advance_round(current.score.saturating_add(self.config.score_increase));
            GuessOutcome::Correct
        } else {
            self.publish(current.with_wrong_guess());
            GuessOutcome::Wrong
        };
        debug!(?outcome, round = current.round, "guess submitted");
        self.user_guess.clear();
        outcome
    }

    pub fn skip_word(&mut self) {
        let current = self.state();
        if current.game_over {
            debug!("skip ignored after game over");
        } else {
            debug!(round = current.round, "word skipped");
            self.advance_round(current.score);
        }
        self.user_guess.clear();
    }

    fn advance_round(&mut self, score: u32) {
        let current = self.state();
        let next = if self.used_words.len() >= self.rounds as usize {
            info!(score, "game over");
            current.finished(score)
        } else {
            match self.pick_and_shuffle() {
                Some(scrambled) => current.next_round(scrambled, score),
                None => {
                    warn!(used = self.used_words.len(), "word pool exhausted early");
                    current.finished(score)
                }
            }
        };
        self.publish(next);
    }

    /// Draw an unused word, mark it used and return its shuffled form.
    /// `None` once every word in the pool has been shown.
    fn pick_and_shuffle(&mut self) -> Option<String> {
        let pool = &self.config.words;
        let mut picked = None;
        for _ in 0..MAX_PICK_ATTEMPTS {
            let candidate = &pool[self.rng.random_range(0..pool.len())];
            if !self.used_words.contains(candidate) {
                picked = Some(candidate.clone());
                break;
            }
        }
        let word = match picked {
            Some(word) => word,
            None => {
                let unused: Vec<&String> = pool
                    .iter()
                    .filter(|w| !self.used_words.contains(*w))
                    .collect();
                (*unused.choose(&mut self.rng)?).clone()
            }
        };

        trace!(target_word = %word, "picked word");
        let scrambled = shuffle_word(&word, &mut self.rng);
        self.used_words.insert(word.clone());
        self.current_word = word;
        Some(scrambled)
    }

    fn publish(&self, next: UnscrambleState) {
        self.state_tx.send_replace(next);
    }
}

fn guess_matches(guess: &str, word: &str) -> bool {
    guess.to_lowercase() == word.to_lowercase()
}

/// Permute the characters of `word` so the result differs from it.
/// Words with fewer than two distinct characters come back unchanged.
pub fn shuffle_word<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    if chars.windows(2).all(|pair| pair[0] == pair[1]) {
        return word.to_string();
    }

    for _ in 0..MAX_SHUFFLE_ATTEMPTS {
        chars.shuffle(rng);
        let shuffled: String = chars.iter().collect();
        if shuffled != word {
            return shuffled;
        }
    }

    // a one-step rotation only maps a word to itself when all its characters match
    let mut chars: Vec<char> = word.chars().collect();
    chars.rotate_left(1);
    chars.into_iter().collect()
}
