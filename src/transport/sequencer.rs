use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::error::{Result, SequencerError};
use crate::library::TrackRef;

use super::ports::{AudioBackend, FileLister, LoadCompleter, LoadOutcome, LoadRequest};
use super::types::{LoadTicket, SequencerEvent, TrackInfo, TransportState};

/// Playlist, selection and transport state for one board.
///
/// All mutation goes through `&mut self`, so a sequencer is driven from a
/// single owner thread. Only backend loads run elsewhere; their results come
/// back through [`Sequencer::poll`].
pub struct Sequencer<L: FileLister, B: AudioBackend> {
    lister: L,
    backend: B,

    playlist: Vec<TrackRef>,
    selection: Option<usize>,
    state: TransportState,
    clip: Option<B::Clip>,
    info: Option<TrackInfo>,

    /// The one load whose completion is still wanted.
    pending: Option<LoadTicket>,
    /// Bumped on every selection change, rescan and dispose.
    generation: u64,
    tx: Sender<LoadOutcome<B::Clip>>,
    rx: Receiver<LoadOutcome<B::Clip>>,
}

impl<L: FileLister, B: AudioBackend> Sequencer<L, B> {
    pub fn new(lister: L, backend: B) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            lister,
            backend,
            playlist: Vec::new(),
            selection: None,
            state: TransportState::Stopped,
            clip: None,
            info: None,
            pending: None,
            generation: 0,
            tx,
            rx,
        }
    }

    /// Replace the playlist with the tracks found in `dir` and stop.
    ///
    /// An empty folder is not an error: the playlist is simply empty. When the
    /// lister fails nothing changes.
    pub fn load_directory(&mut self, dir: &Path) -> Result<usize> {
        let tracks = self.lister.list_audio_files(dir)?;

        self.release_clip();
        self.generation += 1;
        self.pending = None;
        self.playlist = tracks;
        self.selection = None;
        self.info = None;
        self.state = TransportState::Stopped;

        if self.playlist.is_empty() {
            warn!(dir = %dir.display(), "no audio files found");
        } else {
            info!(dir = %dir.display(), count = self.playlist.len(), "playlist loaded");
        }
        Ok(self.playlist.len())
    }

    /// Start loading the track at `index`. It begins playing once
    /// [`Sequencer::poll`] sees the load complete.
    ///
    /// The previous clip is released right away, so the transport reads
    /// `Stopped` until then.
    pub fn select_and_play(&mut self, index: usize) -> Result<LoadTicket> {
        let len = self.playlist.len();
        if len == 0 {
            return Err(SequencerError::EmptyPlaylist);
        }
        if index >= len {
            return Err(SequencerError::IndexOutOfRange { index, len });
        }

        self.release_clip();
        self.state = TransportState::Stopped;
        self.generation += 1;
        let ticket = LoadTicket {
            index,
            generation: self.generation,
        };
        self.pending = Some(ticket);

        let track = self.playlist[index].clone();
        debug!(index, generation = ticket.generation, track = %track, "loading track");
        self.backend.begin_load(LoadRequest {
            track,
            completer: LoadCompleter::new(ticket.generation, self.tx.clone()),
        });
        Ok(ticket)
    }

    /// Advance to the following track, wrapping after the last one.
    pub fn next(&mut self) -> Result<Option<LoadTicket>> {
        let len = self.playlist.len();
        if len <= 1 {
            return Ok(None);
        }
        let target = match self.navigation_base() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.select_and_play(target).map(Some)
    }

    /// Go back to the preceding track, wrapping before the first one.
    pub fn previous(&mut self) -> Result<Option<LoadTicket>> {
        let len = self.playlist.len();
        if len <= 1 {
            return Ok(None);
        }
        let target = match self.navigation_base() {
            Some(i) => (i + len - 1) % len,
            None => len - 1,
        };
        self.select_and_play(target).map(Some)
    }

    /// Resume when paused, start the selected (or first) track when stopped.
    pub fn play(&mut self) -> Result<Option<LoadTicket>> {
        match self.state {
            TransportState::Paused => {
                self.resume();
                Ok(None)
            }
            TransportState::Stopped if self.pending.is_none() => {
                let index = self.selection.unwrap_or(0);
                self.select_and_play(index).map(Some)
            }
            _ => Ok(None),
        }
    }

    pub fn pause(&mut self) {
        if self.state != TransportState::Playing {
            return;
        }
        let Some(clip) = self.clip.as_ref() else {
            return;
        };
        self.backend.pause(clip);
        self.state = TransportState::Paused;
    }

    pub fn resume(&mut self) {
        if self.state != TransportState::Paused {
            return;
        }
        let Some(clip) = self.clip.as_ref() else {
            return;
        };
        self.backend.resume(clip);
        self.state = TransportState::Playing;
    }

    /// Apply every load result that has arrived since the last call.
    ///
    /// Never blocks. Results for superseded loads are dropped here and their
    /// clips handed back to the backend.
    pub fn poll(&mut self) -> Vec<SequencerEvent> {
        let mut events = Vec::new();
        while let Ok(outcome) = self.rx.try_recv() {
            if let Some(event) = self.apply(outcome) {
                events.push(event);
            }
        }
        events
    }

    fn apply(&mut self, outcome: LoadOutcome<B::Clip>) -> Option<SequencerEvent> {
        let ticket = match self.pending {
            Some(t) if t.generation == outcome.generation => t,
            _ => {
                debug!(
                    generation = outcome.generation,
                    current = self.generation,
                    "discarding stale load"
                );
                if let Ok(clip) = outcome.result {
                    self.backend.release(clip);
                }
                return None;
            }
        };
        self.pending = None;

        match outcome.result {
            Ok(clip) => {
                self.backend.play(&clip);
                let info = TrackInfo {
                    index: ticket.index,
                    title: self.playlist[ticket.index].title(),
                    total_duration: self.backend.total_duration(&clip),
                };
                info!(index = info.index, title = %info.title, "playing");

                self.clip = Some(clip);
                self.selection = Some(ticket.index);
                self.state = TransportState::Playing;
                self.info = Some(info.clone());
                Some(SequencerEvent::Started(info))
            }
            Err(msg) => {
                warn!(index = ticket.index, error = %msg, "track failed to load");
                self.state = TransportState::Stopped;
                Some(SequencerEvent::LoadFailed {
                    index: ticket.index,
                    error: SequencerError::Decode(msg),
                })
            }
        }
    }

    pub fn remaining_time(&self) -> Duration {
        self.clip
            .as_ref()
            .map(|c| {
                self.backend
                    .total_duration(c)
                    .saturating_sub(self.backend.elapsed(c))
            })
            .unwrap_or(Duration::ZERO)
    }

    pub fn total_time(&self) -> Duration {
        self.clip
            .as_ref()
            .map(|c| self.backend.total_duration(c))
            .unwrap_or(Duration::ZERO)
    }

    pub fn elapsed(&self) -> Duration {
        self.clip
            .as_ref()
            .map(|c| self.backend.elapsed(c))
            .unwrap_or(Duration::ZERO)
    }

    /// Info for the selected track; `None` until something has played.
    pub fn current_track_info(&self) -> Option<&TrackInfo> {
        self.selection.and(self.info.as_ref())
    }

    pub fn state(&self) -> TransportState {
        self.state
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn playlist(&self) -> &[TrackRef] {
        &self.playlist
    }

    pub fn len(&self) -> usize {
        self.playlist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlist.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Stop, release the loaded clip and ignore any load still in flight.
    pub fn dispose(&mut self) {
        self.release_clip();
        self.generation += 1;
        self.pending = None;
        self.state = TransportState::Stopped;
        while let Ok(outcome) = self.rx.try_recv() {
            if let Ok(clip) = outcome.result {
                self.backend.release(clip);
            }
        }
    }

    fn navigation_base(&self) -> Option<usize> {
        self.pending.map(|t| t.index).or(self.selection)
    }

    fn release_clip(&mut self) {
        if let Some(clip) = self.clip.take() {
            self.backend.release(clip);
        }
    }
}

impl<L: FileLister, B: AudioBackend> Drop for Sequencer<L, B> {
    fn drop(&mut self) {
        self.dispose();
    }
}
