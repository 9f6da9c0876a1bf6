//! TUI rendering with ratatui
//!
//! Letter tiles, hidden-word board and progress for the jumble game.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::mask_word;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<'_, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 WORD JUMBLE - Interactive Mode")
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

fn render_main_panel<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(5)])
        .split(area);

    render_letters(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
}

fn render_letters<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let mut tiles = Vec::new();
    for c in app.letters.chars() {
        tiles.push(Span::styled(
            format!(" {} ", c.to_ascii_uppercase()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        tiles.push(Span::raw(" "));
    }

    let paragraph = Paragraph::new(vec![Line::default(), Line::from(tiles)])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Letters ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_board<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let cell_width = app.game.original().len() + 2;
    let per_row = (usize::from(area.width.saturating_sub(2)) / cell_width.max(1)).max(1);

    let cells: Vec<Span> = app
        .game
        .sub_words()
        .iter()
        .map(|(word, &found)| {
            let (text, style) = if !found {
                (mask_word(word), Style::default().fg(Color::DarkGray))
            } else if app.last_found.as_deref() == Some(word.as_str()) {
                (
                    word.to_uppercase(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (word.to_uppercase(), Style::default().fg(Color::Green))
            };
            Span::styled(format!("{text:<cell_width$}"), style)
        })
        .collect();

    let lines: Vec<Line> = cells
        .chunks(per_row)
        .map(|row| Line::from(row.to_vec()))
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(
                    " Hidden Words {}/{} ",
                    app.game.discovered_count(),
                    app.game.total()
                ))
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_info_panel<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress gauge
            Constraint::Min(4),    // Remaining by length
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_progress(f, app, chunks[0]);
    render_remaining(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_progress<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let found = app.game.discovered_count();
    let total = app.game.total();
    let progress_pct = (found * 100)
        .checked_div(total)
        .map_or(100, |pct| u16::try_from(pct).unwrap_or(100));

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{found}/{total} words"));

    f.render_widget(gauge, area);
}

fn render_remaining<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let remaining = app.game.remaining_by_length();
    let items: Vec<ListItem> = if remaining.is_empty() {
        vec![ListItem::new("Nothing left to find").style(Style::default().fg(Color::Green))]
    } else {
        remaining
            .iter()
            .map(|(length, count)| ListItem::new(format!("{length:>2} letters: {count}")))
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(" Remaining ")
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
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

fn render_input<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Finished => (
            " 🎉 Game over | Press 'n' for new game or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::Guessing => (
            " Your Guess | Enter to submit ",
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
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

fn render_status<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Completed: {} | Words found: {}",
        app.stats.games_played, app.stats.games_completed, app.stats.words_found
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = match app.input_mode {
        InputMode::Finished => "q: Quit | n: New Game",
        InputMode::Guessing => "Esc: Quit | TAB: Shuffle | ^R: Reveal | ^N: New Game",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
