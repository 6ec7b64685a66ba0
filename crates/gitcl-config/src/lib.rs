//! Configuration management for git-cl.
//!
//! This crate handles loading the optional `git-cl.toml` configuration file.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_FILE_NAME, find_and_load_config_from, load_config, load_or_default};
pub use schema::{ChangelogConfig, Config, LinksConfig};
