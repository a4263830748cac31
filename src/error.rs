//! Error types for the track sequencer.

use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by [`crate::transport::Sequencer`] and its collaborators.
///
/// None of these are fatal: every variant leaves the sequencer in the state it
/// was in before the failing call (or, for `Decode`, stopped on the previous
/// selection).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequencerError {
    /// The directory to scan does not exist or is not a directory.
    #[error("directory not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The operation needs at least one track.
    #[error("playlist is empty")]
    EmptyPlaylist,

    /// An explicit index outside `[0, len)`.
    #[error("track index {index} out of range (playlist has {len} tracks)")]
    IndexOutOfRange { index: usize, len: usize },

    /// The backend could not load or decode a track.
    #[error("failed to decode track: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, SequencerError>;
