use std::thread;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink, StreamError};
use tracing::debug;

use crate::transport::{AudioBackend, LoadRequest};

use super::sink::create_paused_sink;

/// A decoded track sitting in its own sink.
pub struct RodioClip {
    sink: Sink,
    total: Duration,
}

pub struct RodioBackend {
    stream: OutputStream,
}

impl RodioBackend {
    /// Open the default output device.
    pub fn open() -> Result<Self, StreamError> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio logs to stderr when the stream is dropped, which garbles the TUI.
        stream.log_on_drop(false);
        Ok(Self { stream })
    }
}

impl AudioBackend for RodioBackend {
    type Clip = RodioClip;

    fn begin_load(&mut self, request: LoadRequest<RodioClip>) {
        let mixer = self.stream.mixer().clone();
        thread::spawn(move || {
            let LoadRequest { track, completer } = request;
            debug!(generation = completer.generation(), track = %track, "decoding");
            let result = create_paused_sink(&mixer, track.path())
                .map(|(sink, total)| RodioClip { sink, total });
            completer.complete(result);
        });
    }

    fn play(&mut self, clip: &RodioClip) {
        clip.sink.play();
    }

    fn pause(&mut self, clip: &RodioClip) {
        clip.sink.pause();
    }

    fn resume(&mut self, clip: &RodioClip) {
        clip.sink.play();
    }

    fn release(&mut self, clip: RodioClip) {
        clip.sink.stop();
    }

    fn total_duration(&self, clip: &RodioClip) -> Duration {
        clip.total
    }

    fn elapsed(&self, clip: &RodioClip) -> Duration {
        clip.sink.get_pos()
    }
}
