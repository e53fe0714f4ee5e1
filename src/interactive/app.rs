//! TUI application state and logic

use crate::commands::GameSources;
use crate::core::{PUZZLE_SIZE, shuffle_board};
use crate::session::PuzzleSession;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept in the log
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub sources: &'a GameSources,
    pub session: PuzzleSession,
    pub board: [u8; PUZZLE_SIZE],
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    rng: ThreadRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guess,
    Puzzle,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Start on a random puzzle
    #[must_use]
    pub fn new(sources: &'a GameSources) -> Self {
        let mut rng = rand::rng();
        let session = sources.random_session(&mut rng);
        Self::with_session(sources, session, rng)
    }

    fn with_session(sources: &'a GameSources, session: PuzzleSession, rng: ThreadRng) -> Self {
        let board = *session.spec().letters();
        let mut app = Self {
            sources,
            session,
            board,
            input_mode: InputMode::Guess,
            input_buffer: String::new(),
            messages: Vec::new(),
            should_quit: false,
            rng,
        };

        app.add_message(
            "Welcome! Find words using the center letter.",
            MessageStyle::Info,
        );
        if let Some(e) = &sources.dictionary_error {
            app.add_message(&e.to_string(), MessageStyle::Error);
        }
        app.announce_puzzle();
        app
    }

    fn announce_puzzle(&mut self) {
        let text = format!(
            "Puzzle {}: {} words to find",
            self.session.spec().as_str().to_uppercase(),
            self.session.total_words()
        );
        self.add_message(&text, MessageStyle::Info);
        if !self.session.has_pangram() {
            self.add_message("This puzzle has no pangram.", MessageStyle::Error);
        }
    }

    fn replace_session(&mut self, session: PuzzleSession) {
        self.board = *session.spec().letters();
        self.session = session;
        self.announce_puzzle();
    }

    pub fn handle_guess(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);
        if guess.trim().is_empty() {
            return;
        }

        match self.session.check_guess(&guess) {
            Ok(result) if result.is_pangram => {
                self.add_message(
                    &format!("Pangram! {} (+{})", result.word, result.score),
                    MessageStyle::Success,
                );
            }
            Ok(result) => {
                self.add_message(
                    &format!("{} (+{})", result.word, result.score),
                    MessageStyle::Success,
                );
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        }

        if self.session.is_solved() {
            self.add_message("🐝 Every word found!", MessageStyle::Success);
        }
    }

    /// Submit the buffer as a new puzzle, keeping the current one on error
    pub fn handle_puzzle(&mut self) {
        let raw = std::mem::take(&mut self.input_buffer);
        match self.sources.new_session(&raw) {
            Ok(session) => {
                self.replace_session(session);
                self.input_mode = InputMode::Guess;
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn shuffle(&mut self) {
        self.board = shuffle_board(self.board, &mut self.rng);
    }

    pub fn random_puzzle(&mut self) {
        let session = self.sources.random_session(&mut self.rng);
        self.replace_session(session);
    }

    pub fn solve(&mut self) {
        let result = self.session.solve_all();
        let text = format!(
            "Revealed {} words. {} words; {} points",
            result.revealed, result.total_words, result.total_score
        );
        self.add_message(&text, MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('s') if ctrl => self.shuffle(),
            KeyCode::Char('r') if ctrl => self.random_puzzle(),
            KeyCode::Char('v') if ctrl => self.solve(),
            KeyCode::Esc => match self.input_mode {
                InputMode::Guess => self.should_quit = true,
                InputMode::Puzzle => {
                    self.input_mode = InputMode::Guess;
                    self.input_buffer.clear();
                    self.add_message("Cancelled puzzle entry", MessageStyle::Info);
                }
            },
            KeyCode::Tab => {
                self.input_buffer.clear();
                self.input_mode = match self.input_mode {
                    InputMode::Guess => {
                        self.add_message(
                            "Enter 7 letters, center letter first",
                            MessageStyle::Info,
                        );
                        InputMode::Puzzle
                    }
                    InputMode::Puzzle => InputMode::Guess,
                };
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                let limit_reached =
                    self.input_mode == InputMode::Puzzle && self.input_buffer.len() >= PUZZLE_SIZE;
                if !limit_reached {
                    self.input_buffer.push(c.to_ascii_lowercase());
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => match self.input_mode {
                InputMode::Guess => self.handle_guess(),
                InputMode::Puzzle => self.handle_puzzle(),
            },
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
