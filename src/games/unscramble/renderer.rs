/// Unscramble screen - pure rendering, no game logic
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::state::UnscrambleState;

const DIALOG_WIDTH: u16 = 36;
const DIALOG_HEIGHT: u16 = 7;

pub fn render(frame: &mut Frame, state: &UnscrambleState, guess: &str, total_rounds: u32) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    frame.render_widget(
        Paragraph::new(" UNSCRAMBLE ")
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" Word {}/{} ", state.round, total_rounds),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
            Span::raw("   "),
            Span::styled(format!("Score: {}", state.score), Style::default().fg(Color::Yellow)),
        ])),
        chunks[1],
    );

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                state.scrambled_word.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from("Unscramble the word using all the letters."),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL)),
        chunks[2],
    );

    let (title, border) = if state.wrong_guess {
        (" Wrong guess! ", Style::default().fg(Color::Red))
    } else {
        (" Enter your word ", Style::default())
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(format!("> {guess}")),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]))
        .block(Block::default().title(title).borders(Borders::ALL).border_style(border)),
        chunks[3],
    );

    frame.render_widget(
        Paragraph::new("[Enter] Submit  [Tab] Skip  [Ctrl+R] Restart  [Esc] Quit")
            .alignment(Alignment::Center),
        chunks[5],
    );

    if state.game_over {
        render_final_score(frame, state.score);
    }
}

fn render_final_score(frame: &mut Frame, score: u32) {
    let area = centered(frame.area(), DIALOG_WIDTH, DIALOG_HEIGHT);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(""),
            Line::from(format!("You scored: {score}")),
            Line::from(""),
            Line::from("[R] Play Again  [Q] Exit"),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Congratulations! ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        ),
        area,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
