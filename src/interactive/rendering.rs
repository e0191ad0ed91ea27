//! TUI rendering with ratatui
//!
//! Board, hint keyboard, messages and status bar. Everything is drawn from
//! the session snapshot.

use super::app::{App, MessageStyle};
use crate::core::{LetterState, WORD_LENGTH};
use crate::game::{GameSnapshot, Phase, RowSignal};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let snapshot = app.session.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and keyboard
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_board(f, &snapshot, main_chunks[0]);
    render_keyboard(f, &snapshot, main_chunks[1]);
    render_messages(f, app, chunks[2]);
    render_status(f, &snapshot, chunks[3]);
}

/// Tile colors for a letter classification
fn tile_style(state: LetterState) -> Style {
    match state {
        LetterState::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterState::Close => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterState::Wrong => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterState::Inactive => Style::default().fg(Color::White),
    }
}

fn tile(letter: char, style: Style) -> [Span<'static>; 2] {
    [Span::styled(format!(" {letter} "), style), Span::raw(" ")]
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn board_lines(snapshot: &GameSnapshot<'_>) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(snapshot.max_guesses * 2);

    for (row, record) in snapshot.history.iter().enumerate() {
        let revealed = snapshot.row_signal == Some(RowSignal::Revealed(row));
        let spans: Vec<Span> = record
            .word
            .text()
            .chars()
            .zip(record.feedback.states())
            .flat_map(|(letter, &state)| {
                let mut style = tile_style(state);
                if revealed {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                tile(letter, style)
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let mut rows_left = snapshot.max_guesses.saturating_sub(snapshot.history.len());
    if snapshot.phase == Phase::Active && rows_left > 0 {
        let style = match snapshot.row_signal {
            Some(RowSignal::Rejected | RowSignal::Unverified) => Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
            _ => Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        };
        let typed = snapshot.buffer.chars().chain(std::iter::repeat('_'));
        let spans: Vec<Span> = typed
            .take(WORD_LENGTH)
            .flat_map(|letter| tile(letter, style))
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
        rows_left -= 1;
    }

    for _ in 0..rows_left {
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|_| tile('·', Style::default().fg(Color::DarkGray)))
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines
}

fn render_board(f: &mut Frame, snapshot: &GameSnapshot<'_>, area: Rect) {
    let title = if snapshot.submitting {
        " Board (checking…) "
    } else {
        " Board "
    };

    let board = Paragraph::new(board_lines(snapshot))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn keyboard_lines(snapshot: &GameSnapshot<'_>) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for row in KEYBOARD_ROWS {
        let spans: Vec<Span> = row
            .chars()
            .flat_map(|key| tile(key, tile_style(snapshot.known.get(key as u8))))
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled(" ENTER ", Style::default().fg(Color::Cyan)),
        Span::raw("submit  "),
        Span::styled(" ⌫ ", Style::default().fg(Color::Cyan)),
        Span::raw("delete"),
    ]));
    lines
}

fn render_keyboard(f: &mut Frame, snapshot: &GameSnapshot<'_>, area: Rect) {
    let keyboard = Paragraph::new(keyboard_lines(snapshot))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Keyboard ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, snapshot: &GameSnapshot<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let (phase_text, phase_color) = match snapshot.phase {
        Phase::Active => ("Playing", Color::White),
        Phase::Won => ("Solved!", Color::Green),
        Phase::Lost => ("Game over", Color::Red),
    };
    let phase = Paragraph::new(phase_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(phase_color));
    f.render_widget(phase, chunks[0]);

    let attempt = snapshot.attempt.min(snapshot.max_guesses);
    let attempts = Paragraph::new(format!("Guess {attempt}/{}", snapshot.max_guesses))
        .alignment(Alignment::Center);
    f.render_widget(attempts, chunks[1]);

    let help_text = if snapshot.phase.is_over() {
        "n: New Game | q: Quit"
    } else {
        "Esc: Quit | ^N: New Word | ^R: Restart"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
