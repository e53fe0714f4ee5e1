//! TUI rendering with ratatui
//!
//! Board, found words and score display for the spelling bee game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::PUZZLE_SIZE;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_play_panel(f, app, main_chunks[0]);
    render_words_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🐝 SPELLING BEE")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(header, area);
}

fn render_play_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Board
            Constraint::Length(3), // Score gauge
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_score(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn letter_span(letter: u8, style: Style) -> Span<'static> {
    Span::styled(
        format!(" {} ", letter.to_ascii_uppercase() as char),
        style,
    )
}

/// Lay the board out as a hive: two outer letters, center row, two outer letters
fn board_lines(board: &[u8; PUZZLE_SIZE]) -> Vec<Line<'static>> {
    let outer = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let center = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let gap = || Span::raw("  ");

    vec![
        Line::from(""),
        Line::from(vec![letter_span(board[1], outer), gap(), letter_span(board[2], outer)]),
        Line::from(""),
        Line::from(vec![
            letter_span(board[3], outer),
            gap(),
            letter_span(board[0], center),
            gap(),
            letter_span(board[4], outer),
        ]),
        Line::from(""),
        Line::from(vec![letter_span(board[5], outer), gap(), letter_span(board[6], outer)]),
    ]
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = Paragraph::new(board_lines(&app.board))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Puzzle ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let current = app.session.current_score();
    let total = app.session.total_score();
    let percent = if total == 0 {
        0
    } else {
        // Cast is safe: clamped to 100
        (u64::from(current) * 100 / u64::from(total)).min(100) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Score ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Yellow))
        .percent(percent)
        .label(format!("{current}/{total} points"));

    f.render_widget(gauge, area);
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

fn render_words_panel(f: &mut Frame, app: &App, area: Rect) {
    let words: Vec<Span> = app
        .session
        .discovered()
        .map(|entry| {
            let style = if entry.is_pangram() {
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Span::styled(format!("{entry}  "), style)
        })
        .collect();

    let title = format!(
        " Found {}/{} ",
        app.session.current_word_count(),
        app.session.total_words()
    );
    let paragraph = Paragraph::new(Line::from(words))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        );

    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Guess => (" Enter a word | TAB for new puzzle ", Color::Yellow),
        InputMode::Puzzle => (
            " Enter 7 letters, center first | ESC to cancel ",
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(app.input_buffer.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let totals = Paragraph::new(format!(
        "{} words; {} points",
        app.session.current_word_count(),
        app.session.current_score()
    ))
    .alignment(Alignment::Center);
    f.render_widget(totals, chunks[0]);

    let pangrams = app
        .session
        .discovered()
        .filter(|entry| entry.is_pangram())
        .count();
    let pangram_text = format!(
        "Pangrams: {pangrams}/{}",
        app.session.table().pangram_count()
    );
    f.render_widget(
        Paragraph::new(pangram_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help = Paragraph::new("Enter: Submit | ^S: Shuffle | ^R: Random | ^V: Solve | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
