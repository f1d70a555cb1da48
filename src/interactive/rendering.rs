//! TUI rendering with ratatui
//!
//! Screens for the arcade menu and the three games.

use super::app::{App, MessageStyle, Screen};
use crate::core::{Verdict, WORD_LENGTH};
use crate::game::{KEY_ROWS, MAX_GUESSES, RoundStatus};
use crate::games::{Mark, Outcome};
use crate::output::share_grid;
use crate::wordlists::AnswerMode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Screen content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    match app.screen {
        Screen::Menu => render_menu(f, chunks[1]),
        Screen::WordGuess => render_word_guess(f, app, chunks[1]),
        Screen::TicTacToe => render_tictactoe(f, app, chunks[1]),
        Screen::NumberGuess => render_number_guess(f, app, chunks[1]),
    }

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.screen {
        Screen::Menu => "🎮 MINI GAMES ARCADE",
        Screen::WordGuess => "🟩 WORD GUESS",
        Screen::TicTacToe => "❌⭕ TIC-TAC-TOE",
        Screen::NumberGuess => "🔢 NUMBER GUESS",
    };

    let header = Paragraph::new(title)
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

fn render_menu(f: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Pick a game:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  [1]  🟩 Word Guess      5 letters, 6 tries"),
        Line::from("  [2]  ❌ Tic-Tac-Toe    two players, one keyboard"),
        Line::from("  [3]  🔢 Number Guess   higher or lower, 1-100"),
        Line::from(""),
        Line::from(Span::styled(
            "  [q]  Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let menu = Paragraph::new(content).block(
        Block::default()
            .title(" Menu ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(menu, area);
}

fn render_word_guess(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_board(f, app, chunks[0]);
    render_word_side_panel(f, app, chunks[1]);
}

fn verdict_style(verdict: Verdict) -> Style {
    match verdict {
        Verdict::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        Verdict::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        Verdict::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let round = &app.word.round;
    let mut lines = vec![Line::from("")];

    for row in 0..MAX_GUESSES {
        let line = if let Some(record) = round.history().get(row) {
            let spans: Vec<Span> = record
                .guess
                .text()
                .chars()
                .zip(record.verdicts.iter())
                .flat_map(|(letter, verdict)| {
                    [
                        Span::styled(
                            format!(" {letter} "),
                            verdict_style(verdict).add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        } else if row == round.history().len() && !round.status().is_terminal() {
            // The in-progress input row
            let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
            for i in 0..WORD_LENGTH {
                let letter = round.input().chars().nth(i);
                spans.push(Span::styled(
                    format!(" {} ", letter.unwrap_or('_')),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        } else {
            Line::from(Span::styled(
                " ·   ·   ·   ·   · ",
                Style::default().fg(Color::DarkGray),
            ))
        };

        lines.push(line.alignment(Alignment::Center));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_word_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Keyboard
            Constraint::Length(4), // Message / share grid
            Constraint::Min(4),    // Session settings
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_word_message(f, app, chunks[1]);
    render_word_settings(f, app, chunks[2]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.word.round.keyboard();
    let mut lines = Vec::with_capacity(KEY_ROWS.len());

    for row in KEY_ROWS {
        let spans: Vec<Span> = row
            .chars()
            .flat_map(|letter| {
                let style = match keyboard.status_of(letter) {
                    Some(verdict) => verdict_style(verdict),
                    None => Style::default().fg(Color::White),
                };
                [Span::styled(letter.to_string(), style), Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(spans).alignment(Alignment::Center));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(widget, area);
}

fn render_word_message(f: &mut Frame, app: &App, area: Rect) {
    let round = &app.word.round;

    let lines = if let Some(message) = &app.word.message {
        let style = match message.style {
            MessageStyle::Info => Style::default().fg(Color::Cyan),
            MessageStyle::Success => Style::default().fg(Color::Green),
            MessageStyle::Error => Style::default().fg(Color::Red),
        };
        vec![Line::from(Span::styled(message.text.clone(), style))]
    } else if round.status().is_terminal() {
        share_grid(round.history())
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect()
    } else {
        vec![Line::from(Span::styled(
            "Type a word and press Enter.",
            Style::default().fg(Color::DarkGray),
        ))]
    };

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Message ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(widget, area);
}

fn render_word_settings(f: &mut Frame, app: &App, area: Rect) {
    let mode = match app.word.mode {
        AnswerMode::Daily => "Daily",
        AnswerMode::Random => "Random",
    };
    let status = match app.word.round.status() {
        RoundStatus::InProgress => format!("{} guesses left", app.word.round.guesses_remaining()),
        RoundStatus::Won => "Won 🎉".to_string(),
        RoundStatus::Lost => "Lost".to_string(),
    };

    let content = vec![
        Line::from(format!("Mode:   {mode}")),
        Line::from(format!(
            "Strict: {}",
            if app.word.strict { "on" } else { "off" }
        )),
        Line::from(format!("Round:  {status}")),
    ];

    let widget = Paragraph::new(content).block(
        Block::default()
            .title(" Session ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(widget, area);
}

fn render_tictactoe(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.tictactoe;

    let cell_span = |idx: usize| -> Span<'static> {
        match game.cell(idx) {
            Some(Mark::X) => Span::styled(
                " X ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Some(Mark::O) => Span::styled(
                " O ",
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            None => Span::styled(
                format!(" {} ", idx + 1),
                Style::default().fg(Color::DarkGray),
            ),
        }
    };

    let mut lines = vec![Line::from("")];
    for row in 0..3 {
        let base = row * 3;
        lines.push(
            Line::from(vec![
                cell_span(base),
                Span::raw("│"),
                cell_span(base + 1),
                Span::raw("│"),
                cell_span(base + 2),
            ])
            .alignment(Alignment::Center),
        );
        if row < 2 {
            lines.push(Line::from("───┼───┼───").alignment(Alignment::Center));
        }
    }
    lines.push(Line::from(""));

    let status = match game.outcome() {
        Outcome::InPlay => format!("{} to move — press 1-9", game.turn()),
        Outcome::Won(mark) => format!("{mark} wins! Press 'r' to play again."),
        Outcome::Draw => "Draw! Press 'r' to play again.".to_string(),
    };
    lines.push(Line::from(status).alignment(Alignment::Center));

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Tic-Tac-Toe ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(widget, area);
}

fn render_number_guess(f: &mut Frame, app: &App, area: Rect) {
    let screen = &app.number;

    let content = vec![
        Line::from(""),
        Line::from(screen.message.clone()).alignment(Alignment::Center),
        Line::from(""),
        Line::from(vec![
            Span::raw("Your guess: "),
            Span::styled(
                if screen.input.is_empty() {
                    "_".to_string()
                } else {
                    screen.input.clone()
                },
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(format!("Tries: {}", screen.game.tries())).alignment(Alignment::Center),
    ];

    let widget = Paragraph::new(content).block(
        Block::default()
            .title(" Number Guess ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(widget, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help = match app.screen {
        Screen::Menu => "1-3: pick a game | q: quit",
        Screen::WordGuess => {
            "Type + Enter: guess | Ctrl+N: new | Ctrl+D: daily | Ctrl+R: random | Ctrl+S: strict | Esc: menu"
        }
        Screen::TicTacToe => "1-9: place mark | r: reset | Esc: menu",
        Screen::NumberGuess => "Digits + Enter: guess | n: new game | Esc: menu",
    };

    let status = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}
