use crate::core::game::{Flow, Game};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use std::time::Duration;
use tracing::{debug, info};

/// How long to wait between input polls when nothing changes
const IDLE_POLL: Duration = Duration::from_millis(16);

pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Run until the player quits. The caller owns terminal setup and restore.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut updates = self.game.subscribe();
        info!("engine started");

        loop {
            terminal.draw(|f| self.game.render(f))?;

            // INPUT (Non-blocking)
            if event::poll(Duration::ZERO)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if key.code == KeyCode::Esc {
                            break;
                        }
                        if self.game.handle_input(key) == Flow::Quit {
                            break;
                        }
                    }
                }
            }

            let idle = self.game.tick_rate().unwrap_or(IDLE_POLL);
            tokio::select! {
                Ok(()) = updates.changed() => {
                    let state = updates.borrow_and_update();
                    debug!(state = ?*state, "state changed");
                }
                _ = tokio::time::sleep(idle) => {}
            }
        }

        info!("engine stopped");
        Ok(())
    }
}
