//! Simple interactive CLI mode
//!
//! Line-based jumble game without TUI

use crate::engine::{Discovery, GameOptions, GameState, JumbleEngine};
use crate::output::formatters::{format_columns, mask_word};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if the first game cannot be created or terminal I/O fails.
pub fn run_simple<R: Rng>(
    engine: &mut JumbleEngine<'_, R>,
    length: usize,
    options: &GameOptions,
) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play_session(engine, length, options, stdin.lock(), &mut stdout)
}

/// Play games reading commands from `input` until quit or end of input
///
/// # Errors
///
/// Returns an error if the first game cannot be created or I/O fails. Failures
/// creating later games are reported and the current game continues.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn play_session<R, I, W>(
    engine: &mut JumbleEngine<'_, R>,
    length: usize,
    options: &GameOptions,
    mut input: I,
    out: &mut W,
) -> Result<()>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Word Jumble - Interactive Mode               ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Find every word hidden in the scrambled letters.")?;
    writeln!(out, "Type a word and press Enter to guess.\n")?;
    writeln!(out, "Commands: /shuffle, /status, /reveal, /new, /help, /quit\n")?;

    let mut state = engine.create_game_state_with(length, options)?;
    let mut letters = state.scrambled().to_string();
    print_board(out, &state, &letters)?;

    loop {
        let Some(line) = get_user_input(&mut input, out, "Guess")? else {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        };
        if line.is_empty() {
            continue;
        }

        match line.to_lowercase().as_str() {
            "/quit" | "/q" | "/exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "/help" | "/h" => {
                writeln!(out, "  /shuffle  rearrange the letters")?;
                writeln!(out, "  /status   show found and hidden words")?;
                writeln!(out, "  /reveal   give up and show every word")?;
                writeln!(out, "  /new      start a new game")?;
                writeln!(out, "  /quit     exit\n")?;
            }
            "/shuffle" | "/s" => {
                letters = engine.scramble(&letters);
                writeln!(out, "🔀 {}\n", spaced(&letters).bright_white().bold())?;
            }
            "/status" => print_board(out, &state, &letters)?,
            "/reveal" => {
                state.reveal();
                writeln!(
                    out,
                    "\nThe word was {}",
                    state.original().to_uppercase().bright_green().bold()
                )?;
                print_board(out, &state, &letters)?;
                if !ask_play_again(&mut input, out)? {
                    return Ok(());
                }
                start_new_game(engine, length, options, out, &mut state, &mut letters)?;
            }
            "/new" | "/n" => {
                start_new_game(engine, length, options, out, &mut state, &mut letters)?;
            }
            cmd if cmd.starts_with('/') => {
                writeln!(out, "❌ Unknown command {cmd}, try /help\n")?;
            }
            guess => match state.discover(guess) {
                Discovery::Found => {
                    let bonus = if state.is_original(guess) {
                        " (the full word!)"
                    } else {
                        ""
                    };
                    writeln!(
                        out,
                        "✓ {}{bonus}  [{}/{}]\n",
                        guess.to_uppercase().bright_green().bold(),
                        state.discovered_count(),
                        state.total()
                    )?;
                    if state.is_complete() {
                        celebrate(out, &state)?;
                        if !ask_play_again(&mut input, out)? {
                            return Ok(());
                        }
                        start_new_game(engine, length, options, out, &mut state, &mut letters)?;
                    }
                }
                Discovery::AlreadyFound => {
                    writeln!(out, "Already found {}\n", guess.to_uppercase())?;
                }
                Discovery::Unknown => {
                    writeln!(out, "✗ {} is not hidden here\n", guess.to_uppercase().red())?;
                }
            },
        }
    }
}

fn start_new_game<R: Rng, W: Write>(
    engine: &mut JumbleEngine<'_, R>,
    length: usize,
    options: &GameOptions,
    out: &mut W,
    state: &mut GameState,
    letters: &mut String,
) -> Result<()> {
    match engine.create_game_state_with(length, options) {
        Ok(next) => {
            *state = next;
            *letters = state.scrambled().to_string();
            writeln!(out, "\n🔄 New game started!\n")?;
            print_board(out, state, letters)?;
        }
        Err(e) => writeln!(out, "❌ {e}\n")?,
    }
    Ok(())
}

fn print_board<W: Write>(out: &mut W, state: &GameState, letters: &str) -> Result<()> {
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(
        out,
        "Letters: {}   Found {}/{}",
        spaced(letters).bright_white().bold(),
        state.discovered_count(),
        state.total()
    )?;
    writeln!(out, "────────────────────────────────────────────────────────────")?;

    let cells: Vec<String> = state
        .sub_words()
        .iter()
        .map(|(word, &found)| {
            if found {
                word.to_uppercase()
            } else {
                mask_word(word)
            }
        })
        .collect();
    for row in format_columns(&cells, 6) {
        writeln!(out, "  {row}")?;
    }
    writeln!(out)?;
    Ok(())
}

fn celebrate<W: Write>(out: &mut W, state: &GameState) -> Result<()> {
    writeln!(out, "\n{}", "═".repeat(70).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "       🎉 🎊 ✨  J U M B L E   C O M P L E T E !  ✨ 🎊 🎉       "
            .bright_green()
            .bold()
    )?;
    writeln!(out, "{}", "═".repeat(70).bright_cyan())?;
    writeln!(
        out,
        "\n  You found all {} words hidden in {}",
        state.total().to_string().bright_cyan().bold(),
        state.original().to_uppercase().bright_white().bold()
    )?;
    writeln!(out, "\n{}\n", "═".repeat(70).bright_cyan())?;
    Ok(())
}

fn ask_play_again<I: BufRead, W: Write>(input: &mut I, out: &mut W) -> Result<bool> {
    let answer = get_user_input(input, out, "Play again? (yes/no)")?.unwrap_or_default();
    let again = matches!(answer.to_lowercase().as_str(), "yes" | "y");
    if !again {
        writeln!(out, "\n👋 Thanks for playing!\n")?;
    }
    Ok(again)
}

fn spaced(letters: &str) -> String {
    letters
        .to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Prompt and read one trimmed line; `None` at end of input
fn get_user_input<I: BufRead, W: Write>(
    input: &mut I,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
