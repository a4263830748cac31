use std::env;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::app::App;
use crate::audio::RodioBackend;
use crate::library::WalkDirLister;
use crate::logging;
use crate::transport::Sequencer;

mod event_loop;
mod settings;
mod startup;
mod terminal;


pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();
    if let Err(e) = logging::init(&settings) {
        eprintln!("musicboard: logging disabled: {e}");
    }

    let dir = startup::resolve_directory(env::args().nth(1), &settings);
    let backend = RodioBackend::open()?;
    let mut seq = Sequencer::new(WalkDirLister::new(settings.library.clone()), backend);
    let mut app = App::new();
    info!(dir = %dir.display(), "starting board");
    startup::load_board(&mut seq, &mut app, &dir, &settings);

    enable_raw_mode()?;
    let guard = terminal::TerminalGuard::new();
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &mut seq, &dir);

    seq.dispose();
    drop(guard);

    run_result
}
