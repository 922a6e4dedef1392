use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::watch;
use tracing::info;

use super::controller::{GameController, GuessOutcome};
use super::renderer;
use super::state::UnscrambleState;
use crate::core::game::{Flow, Game};

/// Key bindings on top of a [`GameController`]
pub struct UnscrambleGame {
    controller: GameController,
}

impl UnscrambleGame {
    pub fn new(controller: GameController) -> Self {
        Self { controller }
    }

    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    fn restart(&mut self) {
        info!("restart requested");
        self.controller.reset();
    }

    fn handle_playing(&mut self, event: KeyEvent) -> Flow {
        match event.code {
            KeyCode::Char('r') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.restart();
            }
            KeyCode::Char(c) if !event.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut guess = self.controller.user_guess().to_string();
                guess.push(c);
                self.controller.update_guess(guess);
            }
            KeyCode::Backspace => {
                let mut guess = self.controller.user_guess().to_string();
                guess.pop();
                self.controller.update_guess(guess);
            }
            KeyCode::Enter => {
                if self.controller.submit_guess() == GuessOutcome::Correct {
                    info!(score = self.controller.state().score, "correct guess");
                }
            }
            KeyCode::Tab => self.controller.skip_word(),
            _ => {}
        }
        Flow::Continue
    }

    fn handle_game_over(&mut self, event: KeyEvent) -> Flow {
        match event.code {
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => {
                self.restart();
                Flow::Continue
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => Flow::Quit,
            _ => Flow::Continue,
        }
    }
}

impl Game for UnscrambleGame {
    type State = UnscrambleState;

    fn subscribe(&self) -> watch::Receiver<Self::State> {
        self.controller.subscribe()
    }

    fn handle_input(&mut self, event: KeyEvent) -> Flow {
        if self.controller.state().is_playable() {
            self.handle_playing(event)
        } else {
            self.handle_game_over(event)
        }
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        renderer::render(
            frame,
            &self.controller.state(),
            self.controller.user_guess(),
            self.controller.max_rounds(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::unscramble::GameConfig;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn game(words: &[&str], max_rounds: u32) -> UnscrambleGame {
        let config = GameConfig {
            words: words.iter().map(|w| w.to_string()).collect(),
            max_rounds,
            score_increase: 20,
        };
        UnscrambleGame::new(GameController::with_seed(config, 11).unwrap())
    }

    fn type_text(game: &mut UnscrambleGame, text: &str) {
        for c in text.chars() {
            game.handle_input(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_and_backspace_edit_guess() {
        let mut game = game(&["cat", "dog"], 2);
        type_text(&mut game, "dogx");
        assert_eq!(game.controller().user_guess(), "dogx");
        game.handle_input(key(KeyCode::Backspace));
        assert_eq!(game.controller().user_guess(), "dog");
    }

    #[test]
    fn test_enter_submits() {
        let mut game = game(&["tea"], 1);
        type_text(&mut game, "TEA");
        assert_eq!(game.handle_input(key(KeyCode::Enter)), Flow::Continue);
        let state = game.controller().state();
        assert_eq!(state.score, 20);
        assert!(state.game_over);
        assert_eq!(game.controller().user_guess(), "");
    }

    #[test]
    fn test_wrong_guess_flags_state() {
        let mut game = game(&["tea", "cup"], 2);
        type_text(&mut game, "zzz");
        game.handle_input(key(KeyCode::Enter));
        assert!(game.controller().state().wrong_guess);
    }

    #[test]
    fn test_tab_skips() {
        let mut game = game(&["cat", "dog"], 2);
        game.handle_input(key(KeyCode::Tab));
        assert_eq!(game.controller().state().round, 2);
        assert_eq!(game.controller().state().score, 0);
    }

    #[test]
    fn test_ctrl_r_restarts_without_typing() {
        let mut game = game(&["cat", "dog", "bird"], 3);
        game.handle_input(key(KeyCode::Tab));
        game.handle_input(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert_eq!(game.controller().state().round, 1);
        assert_eq!(game.controller().user_guess(), "");
    }

    #[test]
    fn test_game_over_keys() {
        let mut game = game(&["cat"], 1);
        game.handle_input(key(KeyCode::Tab));
        assert!(game.controller().state().game_over);

        // typing is ignored on the final score dialog
        game.handle_input(key(KeyCode::Char('x')));
        assert_eq!(game.controller().user_guess(), "");

        game.handle_input(key(KeyCode::Char('r')));
        assert!(!game.controller().state().game_over);

        game.handle_input(key(KeyCode::Tab));
        assert_eq!(game.handle_input(key(KeyCode::Char('q'))), Flow::Quit);
    }
}
