//! Collaborator traits the sequencer is built on.
//!
//! Hosts provide one [`FileLister`] (where tracks come from) and one
//! [`AudioBackend`] (how they sound). Test doubles implement the same traits.

use std::path::Path;
use std::sync::mpsc::Sender;
use std::time::Duration;

use crate::error::Result;
use crate::library::TrackRef;

/// Discovers playable tracks in a directory.
pub trait FileLister {
    /// Return the tracks under `dir` in a stable order.
    ///
    /// Fails with [`crate::error::SequencerError::NotFound`] when `dir` is missing.
    fn list_audio_files(&self, dir: &Path) -> Result<Vec<TrackRef>>;
}

/// Decodes and plays tracks.
///
/// Every method except `begin_load` is expected to return promptly.
/// `begin_load` must not block either: it hands the work off and reports back
/// through the request's [`LoadCompleter`].
pub trait AudioBackend {
    /// A loaded, ready-to-play track.
    type Clip: Send + 'static;

    fn begin_load(&mut self, request: LoadRequest<Self::Clip>);
    fn play(&mut self, clip: &Self::Clip);
    fn pause(&mut self, clip: &Self::Clip);
    fn resume(&mut self, clip: &Self::Clip);
    /// Give the clip back; the sequencer will not touch it again.
    fn release(&mut self, clip: Self::Clip);
    fn total_duration(&self, clip: &Self::Clip) -> Duration;
    fn elapsed(&self, clip: &Self::Clip) -> Duration;
}

/// A finished load, tagged with the generation it was started under.
#[derive(Debug)]
pub struct LoadOutcome<C> {
    pub generation: u64,
    pub result: std::result::Result<C, String>,
}

/// One-shot completion handle for a load. Safe to move to another thread.
#[derive(Debug)]
pub struct LoadCompleter<C> {
    generation: u64,
    tx: Sender<LoadOutcome<C>>,
}

impl<C> LoadCompleter<C> {
    pub(crate) fn new(generation: u64, tx: Sender<LoadOutcome<C>>) -> Self {
        Self { generation, tx }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Report the result. A sequencer that has gone away simply drops it.
    pub fn complete(self, result: std::result::Result<C, String>) {
        let _ = self.tx.send(LoadOutcome {
            generation: self.generation,
            result,
        });
    }
}

/// What the sequencer asks the backend to load.
#[derive(Debug)]
pub struct LoadRequest<C> {
    pub track: TrackRef,
    pub completer: LoadCompleter<C>,
}

impl<C> LoadRequest<C> {
    pub fn generation(&self) -> u64 {
        self.completer.generation()
    }
}
