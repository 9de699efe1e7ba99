//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Platform detection overrides
    #[serde(default)]
    pub platform: PlatformSection,

    /// Kernel metadata directory settings
    #[serde(default)]
    pub sysfs: SysfsSection,

    /// Inspection command settings
    #[serde(default)]
    pub command: CommandSection,

    /// Interface filter configuration
    #[serde(default)]
    pub filter: FilterSection,

    /// Output configuration
    #[serde(default)]
    pub output: OutputSection,
}

/// Platform detection section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformSection {
    /// Kernel name to resolve for instead of the host kernel
    pub kernel: Option<String>,
}

/// Kernel metadata directory section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SysfsSection {
    /// Metadata directory (default: /sys/class/net)
    pub root: Option<PathBuf>,

    /// Whether the metadata directory is consulted at all (default: true)
    pub enabled: Option<bool>,
}

/// Inspection command section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandSection {
    /// Explicit ifconfig path
    pub ifconfig: Option<PathBuf>,
}

/// Interface filter configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterSection {
    /// Regex patterns for interfaces to consider
    #[serde(default)]
    pub include: Vec<String>,

    /// Regex patterns for interfaces to skip
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Output configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Output format: "plain" or "json"
    pub format: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# macfact configuration file

[platform]
# Kernel name to resolve for (default: the host kernel)
# Linux uses /sys/class/net then `ifconfig -a`; FreeBSD, OpenBSD, NetBSD,
# DragonFly and Darwin use `ifconfig -a`; windows uses `getmac`.
# kernel = "Linux"

[sysfs]
# Kernel network-interface metadata directory (default: /sys/class/net)
# root = "/sys/class/net"

# Set to false to parse command output only (CLI: --no-sysfs)
# enabled = true

[command]
# Explicit ifconfig path (default: first of /bin, /sbin, /usr/sbin)
# ifconfig = "/sbin/ifconfig"

[filter]
# Regex patterns for interfaces to consider (empty = all)
# Note: CLI patterns REPLACE these entirely (not merged)
# include = ["^eth", "^en"]

# Regex patterns for interfaces to skip
# Note: CLI patterns REPLACE these entirely (not merged)
# exclude = ["^docker", "^veth", "^br-"]

[output]
# Output format: "plain" or "json" (default: plain)
format = "plain"
"#
    .to_string()
}
