use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};

/// Restores the terminal when dropped, including on early `?` returns and
/// unwinding out of the event loop.
pub(super) struct TerminalGuard {
    restore: fn(),
}

impl TerminalGuard {
    /// Guard for a terminal already in raw mode.
    pub(super) fn new() -> Self {
        Self::with_restore(restore_terminal)
    }

    pub(super) fn with_restore(restore: fn()) -> Self {
        Self { restore }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn restore_terminal() {
    // Best effort: nothing useful can be done with a failure this late.
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, Show);
}
