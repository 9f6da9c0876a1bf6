//! TUI application state and logic

use crate::core::EngineError;
use crate::engine::{Discovery, GameOptions, GameState, JumbleEngine};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a, R: Rng = StdRng> {
    pub engine: JumbleEngine<'a, R>,
    pub length: usize,
    pub options: GameOptions,
    pub game: GameState,
    /// Letters as currently shown; reshuffling never touches the game itself
    pub letters: String,
    pub input_buffer: String,
    pub last_found: Option<String>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub games_completed: usize,
    pub words_found: usize,
}

impl<'a, R: Rng> App<'a, R> {
    /// Start the first game
    ///
    /// # Errors
    ///
    /// Returns the game creation error, e.g. when no word has `length` letters.
    pub fn new(
        mut engine: JumbleEngine<'a, R>,
        length: usize,
        options: GameOptions,
    ) -> Result<Self, EngineError> {
        let game = engine.create_game_state_with(length, &options)?;
        let letters = game.scrambled().to_string();

        Ok(Self {
            engine,
            length,
            options,
            game,
            letters,
            input_buffer: String::new(),
            last_found: None,
            messages: vec![
                Message {
                    text: "Welcome! Find every word hidden in the letters.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a word and press Enter. TAB reshuffles.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics {
                games_played: 1,
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Guessing,
        })
    }

    /// Submit the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);
        if guess.is_empty() {
            return;
        }

        match self.game.discover(&guess) {
            Discovery::Found => {
                self.stats.words_found += 1;
                let text = if self.game.is_original(&guess) {
                    format!("{} is the full word!", guess.to_uppercase())
                } else {
                    format!("Found {}", guess.to_uppercase())
                };
                self.add_message(&text, MessageStyle::Success);
                self.last_found = Some(guess.to_lowercase());

                if self.game.is_complete() {
                    self.stats.games_completed += 1;
                    self.input_mode = InputMode::Finished;
                    self.add_message("🎉 ALL WORDS FOUND! 🎉", MessageStyle::Success);
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                }
            }
            Discovery::AlreadyFound => {
                self.add_message(
                    &format!("{} already found", guess.to_uppercase()),
                    MessageStyle::Info,
                );
            }
            Discovery::Unknown => {
                self.add_message(
                    &format!("{} is not hidden here", guess.to_uppercase()),
                    MessageStyle::Error,
                );
            }
        }
    }

    /// Reshuffle the displayed letters
    pub fn shuffle_letters(&mut self) {
        self.letters = self.engine.scramble(&self.letters);
    }

    /// Give up: show every sub-word and the secret word
    pub fn reveal(&mut self) {
        self.game.reveal();
        self.input_buffer.clear();
        self.input_mode = InputMode::Finished;
        self.add_message(
            &format!("The word was {}", self.game.original().to_uppercase()),
            MessageStyle::Info,
        );
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        match self.engine.create_game_state_with(self.length, &self.options) {
            Ok(game) => {
                self.letters = game.scrambled().to_string();
                self.game = game;
                self.input_buffer.clear();
                self.last_found = None;
                self.messages.clear();
                self.stats.games_played += 1;
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
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
        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Finished => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') if ctrl => self.new_game(),
                KeyCode::Char('r') if ctrl => self.reveal(),
                KeyCode::Tab => self.shuffle_letters(),
                KeyCode::Char(c)
                    if c.is_ascii_alphabetic()
                        && self.input_buffer.len() < self.game.original().len() =>
                {
                    self.input_buffer.push(c.to_ascii_lowercase());
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<'_, R>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

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

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
