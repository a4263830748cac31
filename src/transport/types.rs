//! Small value types shared by the sequencer and its hosts.

use std::time::Duration;

use crate::error::SequencerError;

/// The playback state of the sequencer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum TransportState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// What a host shows for the selected track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackInfo {
    /// Position of the track in the playlist.
    pub index: usize,
    pub title: String,
    pub total_duration: Duration,
}

/// Identifies one `select_and_play` request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub index: usize,
    pub generation: u64,
}

/// Results of pending loads, surfaced by [`super::Sequencer::poll`].
#[derive(Debug, Clone, PartialEq)]
pub enum SequencerEvent {
    /// The track finished loading and is now playing.
    Started(TrackInfo),
    /// The backend failed to load the track; the sequencer is stopped.
    LoadFailed {
        index: usize,
        error: SequencerError,
    },
}
