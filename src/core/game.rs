/// Core game interface for the terminal engine
use crossterm::event::KeyEvent;
use std::time::Duration;
use tokio::sync::watch;

/// What the engine should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Main game trait driven by [`crate::core::engine::Engine`]
pub trait Game {
    /// Snapshot type published after every state transition
    type State: Clone + std::fmt::Debug;

    /// Receiver for state snapshots; the engine redraws when it fires
    fn subscribe(&self) -> watch::Receiver<Self::State>;

    /// Handle one key press
    fn handle_input(&mut self, event: KeyEvent) -> Flow;

    /// Draw the current state into the Ratatui frame
    fn render(&self, frame: &mut ratatui::Frame);

    /// Turn-based games don't need a tick
    fn tick_rate(&self) -> Option<Duration> {
        None
    }
}
