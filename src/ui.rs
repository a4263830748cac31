//! UI rendering helpers for the terminal board.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style, Stylize},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use std::time::Duration;

use crate::app::{App, NowPlaying};
use crate::config::UiSettings;
use crate::transport::TransportState;

const CONTROLS: [(&str, &str); 9] = [
    ("j/k", "up/down"),
    ("enter", "play selected"),
    ("h/←", "back"),
    ("l/→", "next"),
    ("p", "play"),
    ("P", "pause"),
    ("space", "play/pause"),
    ("r", "rescan"),
    ("q", "quit"),
];

fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Format a `Duration` as `MM:SS`.
pub fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn state_text(np: &NowPlaying) -> &'static str {
    if np.loading {
        return "Loading";
    }
    match np.state {
        TransportState::Stopped => "Stopped",
        TransportState::Playing => "Playing",
        TransportState::Paused => "Paused",
    }
}

fn status_text(app: &App, np: &NowPlaying) -> String {
    let mut parts: Vec<String> = vec![state_text(np).to_string()];
    parts.push(format!("Tracks: {}", app.titles.len()));
    if let Some(dir) = &app.current_dir {
        parts.push(format!("Dir: {}", dir.display()));
    }
    if let Some(msg) = &app.message {
        parts.push(msg.clone());
    }
    parts.join(" • ")
}

fn padded() -> Padding {
    Padding {
        left: 1,
        right: 0,
        top: 0,
        bottom: 0,
    }
}

/// Render the whole board into `frame`.
pub fn draw(frame: &mut Frame, app: &App, np: &NowPlaying, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" musicboard ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Title on top, length underneath, like the physical board.
    let board_text = format!(
        "{}\n{}",
        np.title.as_deref().unwrap_or("-"),
        format_mmss(np.length)
    );
    let board = Paragraph::new(board_text)
        .alignment(Alignment::Center)
        .bold()
        .block(Block::default().borders(Borders::ALL).title(" now playing "));
    frame.render_widget(board, chunks[1]);

    let status = Paragraph::new(status_text(app, np))
        .block(Block::bordered().padding(padded()).title(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[2]);

    // Main list, windowed around the cursor.
    {
        let total = app.titles.len();
        let list_height = chunks[3].height.saturating_sub(2) as usize;
        let (start, end) = if total <= list_height || list_height == 0 {
            (0, total)
        } else {
            let half = list_height / 2;
            let mut start = app.cursor.saturating_sub(half);
            if start + list_height > total {
                start = total - list_height;
            }
            (start, start + list_height)
        };

        let items: Vec<ListItem> = app.titles[start..end]
            .iter()
            .enumerate()
            .map(|(offset, title)| {
                let marker = if np.index == Some(start + offset) { "♪ " } else { "  " };
                ListItem::new(format!("{marker}{title}"))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" tracks "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        if total > 0 {
            state.select(Some(app.cursor - start));
        }
        frame.render_stateful_widget(list, chunks[3], &mut state);
    }

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(padded()),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);
}
