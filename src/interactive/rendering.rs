//! TUI rendering with ratatui
//!
//! Draws a `Snapshot`; never reaches into the controller.

use crate::core::RarityTier;
use crate::game::{MessageKind, RoundStatus, Snapshot};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
};

/// Foreground and background of a tier badge
#[must_use]
pub const fn tier_colors(tier: RarityTier) -> (Color, Color) {
    match tier {
        RarityTier::Common => (Color::Black, Color::LightBlue),
        RarityTier::Rare => (Color::White, Color::Red),
        RarityTier::Exclusive => (Color::Black, Color::Yellow),
        RarityTier::Legendary => (Color::White, Color::Magenta),
    }
}

/// Space the scrambled letters out so they read as tiles
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    word.chars()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, snapshot: &Snapshot) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(7),    // Board
            Constraint::Length(3), // Time gauge
            Constraint::Length(3), // Input
            Constraint::Length(3), // Message
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, snapshot, chunks[1]);
    render_timer(f, snapshot, chunks[2]);
    render_input(f, snapshot, chunks[3]);
    render_message(f, snapshot, chunks[4]);
    render_status(f, snapshot, chunks[5]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 WORD SCRAMBLE")
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

fn render_board(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let badge = snapshot.tier.map_or_else(
        || Span::raw(""),
        |tier| {
            let (fg, bg) = tier_colors(tier);
            Span::styled(
                format!(" {} ", tier.label()),
                Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
            )
        },
    );

    // After a timeout the answer takes the scramble's place
    let letters = snapshot.revealed_word.as_deref().map_or_else(
        || {
            Span::styled(
                spaced_letters(&snapshot.scrambled),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        },
        |word| {
            Span::styled(
                spaced_letters(word),
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
        },
    );

    let content = vec![
        Line::from(""),
        Line::from(letters).alignment(Alignment::Center),
        Line::from(""),
        Line::from(vec![Span::raw("Hint: "), Span::raw(snapshot.hint.clone())])
            .alignment(Alignment::Center),
        Line::from(badge).alignment(Alignment::Center),
    ];

    let board = Paragraph::new(content).block(
        Block::default()
            .title(" Scrambled Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_timer(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let total = snapshot.round_seconds.max(1);
    let ratio = f64::from(snapshot.remaining_seconds.min(total)) / f64::from(total);
    let color = match snapshot.remaining_seconds {
        0..=5 => Color::Red,
        6..=10 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Time Left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(ratio)
        .label(format!("{}s", snapshot.remaining_seconds));
    f.render_widget(gauge, area);
}

fn render_input(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let (title, color) = match snapshot.status {
        Some(RoundStatus::Correct) => (" Correct! ".to_string(), Color::Green),
        Some(RoundStatus::Incorrect) => (" Try again ".to_string(), Color::Red),
        _ => (
            format!(" Enter a valid word ({} letters) ", snapshot.max_input_len),
            Color::Cyan,
        ),
    };

    let content = if snapshot.input_visible {
        snapshot.input.to_uppercase()
    } else {
        String::new()
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

fn render_message(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let line = snapshot.message.as_ref().map_or_else(Line::default, |msg| {
        let style = match msg.kind {
            MessageKind::Info => Style::default().fg(Color::White),
            MessageKind::Success => Style::default().fg(Color::Green),
            MessageKind::Error => Style::default().fg(Color::Red),
        };
        Line::from(Span::styled(msg.text.clone(), style))
    });

    let message = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, area);
}

fn render_status(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let score = snapshot.praise.map_or_else(
        || {
            Line::from(vec![
                Span::raw("Score: "),
                Span::styled(
                    snapshot.score.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ])
        },
        |praise| {
            Line::from(Span::styled(
                praise,
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ))
        },
    );
    f.render_widget(Paragraph::new(score).alignment(Alignment::Center), chunks[0]);

    let help = Paragraph::new("Enter: Check | Ctrl+R: Refresh | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
