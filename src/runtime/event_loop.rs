use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::warn;

use crate::app::{App, NowPlaying};
use crate::config;
use crate::transport::{AudioBackend, Command, Dispatched, FileLister, Sequencer, TransportState};
use crate::ui;

/// What a key press asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    CursorUp,
    CursorDown,
    Run(Command),
    Ignore,
}

/// Map a key to its action. `state` decides what the play/pause toggle does.
pub fn key_action(key: KeyEvent, app: &App, state: TransportState, dir: &Path) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('j') | KeyCode::Down => KeyAction::CursorDown,
        KeyCode::Char('k') | KeyCode::Up => KeyAction::CursorUp,
        KeyCode::Enter if app.has_tracks() => KeyAction::Run(Command::Select(app.cursor)),
        KeyCode::Char('l') | KeyCode::Right => KeyAction::Run(Command::Next),
        KeyCode::Char('h') | KeyCode::Left => KeyAction::Run(Command::Back),
        KeyCode::Char('p') => KeyAction::Run(Command::Play),
        KeyCode::Char('P') => KeyAction::Run(Command::Pause),
        KeyCode::Char(' ') => match state {
            TransportState::Playing => KeyAction::Run(Command::Pause),
            _ => KeyAction::Run(Command::Play),
        },
        KeyCode::Char('r') => KeyAction::Run(Command::Rescan(dir.to_path_buf())),
        _ => KeyAction::Ignore,
    }
}

/// Run one command against the sequencer and reflect the outcome in `app`.
pub fn run_command<L: FileLister, B: AudioBackend>(
    cmd: Command,
    app: &mut App,
    seq: &mut Sequencer<L, B>,
) {
    match seq.dispatch(cmd) {
        Ok(Dispatched::Rescanned(n)) => {
            app.set_playlist(seq.playlist());
            if n == 0 {
                app.set_message("No audio files found");
            } else {
                app.set_message(format!("Loaded {n} tracks"));
            }
        }
        Ok(_) => {}
        Err(e) => {
            warn!(error = %e, "command failed");
            app.report_error(&e);
        }
    }
}

/// Main terminal event loop: applies finished loads, draws the board and
/// handles input. Returns `Ok(())` when the user quits.
pub fn run<L: FileLister, B: AudioBackend>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    seq: &mut Sequencer<L, B>,
    dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        for ev in seq.poll() {
            app.apply_event(&ev);
        }

        let np = NowPlaying::from_sequencer(seq, &settings.ui);
        terminal.draw(|f| ui::draw(f, app, &np, &settings.ui))?;

        // Waiting here doubles as the frame tick for the countdown.
        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key_action(key, app, seq.state(), dir) {
            KeyAction::Quit => return Ok(()),
            KeyAction::CursorUp => app.cursor_up(),
            KeyAction::CursorDown => app.cursor_down(),
            KeyAction::Run(cmd) => run_command(cmd, app, seq),
            KeyAction::Ignore => {}
        }
    }
}
