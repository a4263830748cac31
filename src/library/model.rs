use std::fmt;
use std::path::{Path, PathBuf};

/// A playable item, identified by its path.
///
/// The sequencer never looks inside; only the backend knows how to turn it
/// into audio.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackRef {
    path: PathBuf,
}

impl TrackRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name without its extension, or `UNKNOWN` when the path has none.
    pub fn title(&self) -> String {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("UNKNOWN")
            .to_string()
    }
}

impl From<PathBuf> for TrackRef {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for TrackRef {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl fmt::Display for TrackRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
