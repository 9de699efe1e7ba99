//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid regex pattern for interface filtering.
    #[error("Invalid regex pattern '{pattern}': {source}")]
    InvalidRegex {
        /// The invalid pattern
        pattern: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// Invalid filesystem path for a path-valued option.
    #[error("Invalid path for {field}: {reason}")]
    InvalidPath {
        /// Name of the field
        field: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Kernel name given but blank.
    #[error("Invalid kernel name: must not be empty")]
    EmptyKernel,

    /// Invalid output format value.
    #[error("Invalid output format '{value}': expected plain or json")]
    InvalidFormat {
        /// The invalid value provided
        value: String,
    },
}

/// Well-known field names for `InvalidPath` errors.
///
/// Use these constants for compile-time safety when matching field names.
pub mod field {
    /// The metadata directory field.
    pub const SYSFS_ROOT: &str = "sysfs_root";
    /// The ifconfig binary field.
    pub const IFCONFIG: &str = "ifconfig";
}

impl ConfigError {
    /// Creates an `InvalidPath` error for an empty path value.
    #[must_use]
    pub fn empty_path(field: &'static str) -> Self {
        Self::InvalidPath {
            field,
            reason: "must not be empty".to_string(),
        }
    }
}
