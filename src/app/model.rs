//! Board view model: `App` and `NowPlaying`.
//!
//! `App` holds what only the terminal host cares about (track list cursor,
//! loaded folder, last status message). Everything about playback is read
//! from the sequencer each frame into a `NowPlaying` snapshot.

use std::path::PathBuf;
use std::time::Duration;

use crate::config::UiSettings;
use crate::error::SequencerError;
use crate::library::TrackRef;
use crate::transport::{AudioBackend, FileLister, Sequencer, SequencerEvent, TransportState};

/// What the board shows about the current track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    pub state: TransportState,
    pub title: Option<String>,
    /// Playlist index of the selected track.
    pub index: Option<usize>,
    /// The length line: remaining time while a clip counts down, else the total.
    pub length: Duration,
    pub loading: bool,
}

impl NowPlaying {
    pub fn from_sequencer<L: FileLister, B: AudioBackend>(
        seq: &Sequencer<L, B>,
        ui: &UiSettings,
    ) -> Self {
        let state = seq.state();
        let counting_down = ui.show_remaining && state != TransportState::Stopped;
        let length = if counting_down {
            seq.remaining_time()
        } else {
            seq.total_time()
        };
        let info = seq.current_track_info();

        Self {
            state,
            title: info.map(|i| i.title.clone()),
            index: info.map(|i| i.index),
            length,
            loading: seq.is_loading(),
        }
    }
}

/// The terminal host's own state.
#[derive(Debug, Default)]
pub struct App {
    pub titles: Vec<String>,
    pub cursor: usize,
    pub current_dir: Option<PathBuf>,
    pub message: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a freshly loaded playlist with the cursor on the first track.
    pub fn set_playlist(&mut self, tracks: &[TrackRef]) {
        self.titles = tracks.iter().map(TrackRef::title).collect();
        self.cursor = 0;
    }

    pub fn set_current_dir(&mut self, dir: PathBuf) {
        self.current_dir = Some(dir);
    }

    pub fn has_tracks(&self) -> bool {
        !self.titles.is_empty()
    }

    /// Move the cursor down, wrapping to the top.
    pub fn cursor_down(&mut self) {
        if self.has_tracks() {
            self.cursor = (self.cursor + 1) % self.titles.len();
        }
    }

    /// Move the cursor up, wrapping to the bottom.
    pub fn cursor_up(&mut self) {
        if self.has_tracks() {
            let len = self.titles.len();
            self.cursor = (self.cursor + len - 1) % len;
        }
    }

    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    pub fn report_error(&mut self, err: &SequencerError) {
        self.set_message(err.to_string());
    }

    /// Fold a sequencer event into the view: the cursor follows the track
    /// that started, failures become the status message.
    pub fn apply_event(&mut self, event: &SequencerEvent) {
        match event {
            SequencerEvent::Started(info) => {
                if info.index < self.titles.len() {
                    self.cursor = info.index;
                }
                self.message = None;
            }
            SequencerEvent::LoadFailed { error, .. } => self.report_error(error),
        }
    }
}
