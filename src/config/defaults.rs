//! Default values for configuration options.
//!
//! Centralized constants to avoid magic values scattered across the codebase.

use std::path::PathBuf;

pub use crate::network::strategy::SYSFS_NET as SYSFS_ROOT;

/// Default output format name.
pub const FORMAT: &str = "plain";

/// Directory under the user's config directory holding macfact settings.
pub const APP_DIR: &str = "macfact";

/// File name of the configuration loaded when `--config` is not given.
pub const CONFIG_FILE: &str = "config.toml";

/// Default metadata directory as a path.
#[must_use]
pub fn sysfs_root() -> PathBuf {
    PathBuf::from(SYSFS_ROOT)
}

/// Location of the implicit configuration file
/// (`~/.config/macfact/config.toml` on Linux).
///
/// Returns `None` if the platform has no config directory.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}
