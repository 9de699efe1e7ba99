//! Configuration layer for macfact.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **TOML config file** (`--config`, or `macfact/config.toml` under the
//!    user's config directory when present)
//! 3. **Built-in defaults**
//!
//! For filter patterns (`include_interfaces`, `exclude_interfaces`), CLI patterns
//! **replace** TOML patterns entirely (not merged). Include and exclude lists
//! are replaced independently.
//!
//! `--no-sysfs` only disables: if either the CLI flag or `sysfs.enabled = false`
//! is set, the metadata directory is skipped.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;

pub use cli::{Cli, Command, FormatArg};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{OutputFormat, ValidatedConfig, write_default_config};
