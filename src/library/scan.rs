use std::path::Path;

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::error::{Result, SequencerError};
use crate::transport::FileLister;

use super::model::TrackRef;

pub fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn sort_key(track: &TrackRef) -> String {
    track
        .path()
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_lowercase()
}

/// List the audio files under `dir`, ordered by file name (case-insensitive),
/// ties broken by full path so the order never depends on walk order.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Result<Vec<TrackRef>> {
    if !dir.is_dir() {
        return Err(SequencerError::NotFound(dir.to_path_buf()));
    }

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    let mut tracks: Vec<TrackRef> = walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                debug!(error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter(|e| {
            let path = e.path();
            path.is_file() && is_audio_file(path, settings)
        })
        .map(|e| TrackRef::new(e.into_path()))
        .collect();

    tracks.sort_by(|a, b| {
        sort_key(a)
            .cmp(&sort_key(b))
            .then_with(|| a.path().cmp(b.path()))
    });

    info!(dir = %dir.display(), count = tracks.len(), "scanned music folder");
    Ok(tracks)
}

/// `FileLister` over the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct WalkDirLister {
    settings: LibrarySettings,
}

impl WalkDirLister {
    pub fn new(settings: LibrarySettings) -> Self {
        Self { settings }
    }
}

impl FileLister for WalkDirLister {
    fn list_audio_files(&self, dir: &Path) -> Result<Vec<TrackRef>> {
        scan(dir, &self.settings)
    }
}
