//! Music library: track references and folder scanning.
//!
//! `TrackRef` is the opaque playlist entry handed to the sequencer, and
//! `WalkDirLister` discovers them on the local filesystem.

mod model;
mod scan;

pub use model::TrackRef;
pub use scan::{WalkDirLister, is_audio_file, scan};
