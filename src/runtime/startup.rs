use std::path::{Path, PathBuf};

use tracing::error;

use crate::app::App;
use crate::config;
use crate::transport::{AudioBackend, FileLister, Sequencer};

/// Folder to load: command-line argument, then `library.directory`, then the
/// current directory.
pub fn resolve_directory(arg: Option<String>, settings: &config::Settings) -> PathBuf {
    arg.map(PathBuf::from)
        .or_else(|| settings.library.directory.clone())
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Load `dir` into the sequencer and the view, starting the first track when
/// autoplay is on.
pub fn load_board<L: FileLister, B: AudioBackend>(
    seq: &mut Sequencer<L, B>,
    app: &mut App,
    dir: &Path,
    settings: &config::Settings,
) {
    app.set_current_dir(dir.to_path_buf());
    match seq.load_directory(dir) {
        Ok(0) => {
            app.set_playlist(seq.playlist());
            app.set_message("No audio files found");
        }
        Ok(_) => {
            app.set_playlist(seq.playlist());
            if settings.playback.autoplay {
                if let Err(e) = seq.select_and_play(0) {
                    app.report_error(&e);
                }
            }
        }
        Err(e) => {
            error!(dir = %dir.display(), error = %e, "failed to load music folder");
            app.report_error(&e);
        }
    }
}
