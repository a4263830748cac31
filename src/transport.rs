//! Track sequencer and transport.
//!
//! The sequencer owns the playlist, the current selection and the
//! play/pause state. Folder scanning and decoding are delegated to the
//! [`FileLister`] and [`AudioBackend`] it is constructed with.

mod command;
mod ports;
mod sequencer;
mod types;

pub use command::{Command, Dispatched};
pub use ports::{AudioBackend, FileLister, LoadCompleter, LoadOutcome, LoadRequest};
pub use sequencer::Sequencer;
pub use types::{LoadTicket, SequencerEvent, TrackInfo, TransportState};
