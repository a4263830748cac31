use std::path::Path;

use crate::config::{self, Settings};

/// Settings for this run. A config that fails to load or validate is
/// reported on stderr and replaced by the defaults, since logging is
/// configured from these settings and is not up yet.
pub fn load_settings() -> Settings {
    let path = config::resolve_config_path();
    let (settings, warning) = settings_or_default(Settings::load(), path.as_deref());
    if let Some(warning) = warning {
        eprintln!("musicboard: {warning}, using defaults");
    }
    settings
}

/// Pick the loaded settings if they are usable, else the defaults plus a
/// warning naming the config file.
pub(super) fn settings_or_default(
    loaded: Result<Settings, ::config::ConfigError>,
    path: Option<&Path>,
) -> (Settings, Option<String>) {
    let source = match path {
        Some(p) => p.display().to_string(),
        None => "environment".to_string(),
    };
    match loaded {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(msg) => (
                Settings::default(),
                Some(format!("invalid config in {source}: {msg}")),
            ),
        },
        Err(e) => (
            Settings::default(),
            Some(format!("failed to load config from {source}: {e}")),
        ),
    }
}
