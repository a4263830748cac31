//! A jukebox board for a local music folder.
//!
//! The [`transport::Sequencer`] is the reusable core: a playlist, one selected
//! track and play/pause state, driven by [`transport::Command`]s. It talks to
//! the outside world only through a [`transport::FileLister`] and an
//! [`transport::AudioBackend`]. [`library::WalkDirLister`] and
//! [`audio::RodioBackend`] are the local-filesystem and local-speaker
//! implementations, and [`runtime::run`] puts them behind a terminal board.

pub mod audio;
pub mod config;
pub mod error;
pub mod library;
pub mod runtime;
pub mod transport;

mod app;
mod logging;
mod ui;

pub use error::{Result, SequencerError};
