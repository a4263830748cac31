//! Application module: the view model used by the board TUI and runtime.
//!
//! `App` lives in `app::model` and holds the cursor, folder and status line;
//! `NowPlaying` is the per-frame snapshot of the sequencer.

mod model;

pub use model::*;
