//! `tracing` subscriber setup for the binary.
//!
//! The terminal belongs to the board UI, so log lines go to a file.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Settings;

/// `RUST_LOG` when set, otherwise the configured directive.
fn filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| filter_from(&settings.logging.filter))
}

fn filter_from(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Without a usable log path logging stays off.
pub fn init(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = settings.log_file() else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(settings))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| e.to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_directive_is_used() {
        assert_eq!(filter_from("musicboard=debug").to_string(), "musicboard=debug");
    }

    #[test]
    fn invalid_directive_falls_back_to_info() {
        assert_eq!(filter_from("musicboard=notalevel").to_string(), "info");
    }

    #[test]
    fn init_creates_the_log_file_and_refuses_a_second_subscriber() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("board.log");
        let mut settings = Settings::default();
        settings.logging.file = Some(path.clone());

        init(&settings).unwrap();
        assert!(path.is_file());

        // The global subscriber is already set, which surfaces as an error.
        assert!(init(&settings).is_err());
    }
}
