//! Utilities for turning a track on disk into a paused `rodio` sink.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use lofty::file::AudioFile;
use rodio::mixer::Mixer;
use rodio::{Decoder, Sink, Source};

/// Open and decode `path`, returning the source and its length.
///
/// The length comes from the file's own properties when `lofty` can read them,
/// then from the decoder's estimate, and is zero when neither knows.
pub(super) fn open_source(path: &Path) -> Result<(Decoder<BufReader<File>>, Duration), String> {
    let file = File::open(path).map_err(|e| format!("failed to open {}: {e}", path.display()))?;
    let source = Decoder::new(BufReader::new(file))
        .map_err(|e| format!("failed to decode {}: {e}", path.display()))?;

    let total = probe_duration(path)
        .or_else(|| source.total_duration())
        .unwrap_or(Duration::ZERO);
    Ok((source, total))
}

pub(super) fn probe_duration(path: &Path) -> Option<Duration> {
    lofty::read_from_path(path)
        .ok()
        .map(|tagged| tagged.properties().duration())
        .filter(|d| !d.is_zero())
}

/// Create a paused `Sink` on `mixer` holding the decoded `path`.
pub(super) fn create_paused_sink(mixer: &Mixer, path: &Path) -> Result<(Sink, Duration), String> {
    let (source, total) = open_source(path)?;
    let sink = Sink::connect_new(mixer);
    sink.append(source);
    sink.pause();
    Ok((sink, total))
}
