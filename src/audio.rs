//! Local playback through `rodio`.
//!
//! `RodioBackend` is the `AudioBackend` used by the terminal board. Loads
//! run on short-lived loader threads and report back through the
//! sequencer's completion channel.

mod backend;
mod sink;

pub use backend::{RodioBackend, RodioClip};

#[cfg(test)]
mod tests;
