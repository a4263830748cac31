//! Settings schema and loader.
//!
//! Settings come from an optional TOML file plus `MUSICBOARD__*` environment
//! overrides; every field has a default so an absent config is fine.

mod load;
mod schema;

pub use load::{default_config_path, default_log_path, resolve_config_path};
pub use schema::*;
