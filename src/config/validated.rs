//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::network::filter::{FilterChain, NameRegexFilter};
use crate::network::{CommandSpec, KernelFamily, StrategyTable, host_kernel};

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// How the resolved address is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The bare address on one line; nothing when not found.
    #[default]
    Plain,
    /// `{"macaddress": "..."}`, with `null` when not found.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Explicit kernel name; `None` means the host kernel.
    pub kernel: Option<String>,

    /// Metadata directory for Linux, or `None` when disabled.
    pub sysfs_root: Option<PathBuf>,

    /// Explicit ifconfig path replacing the built-in lookup list.
    pub ifconfig: Option<PathBuf>,

    /// Interface filter configuration
    pub filter: FilterChain,

    /// Output format
    pub format: OutputFormat,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sysfs = self
            .sysfs_root
            .as_ref()
            .map_or_else(|| "disabled".to_string(), |p| p.display().to_string());
        let ifconfig = self
            .ifconfig
            .as_ref()
            .map_or_else(|| "auto".to_string(), |p| p.display().to_string());

        write!(
            f,
            "Config {{ kernel: {}, sysfs: {}, ifconfig: {}, filters: +{}/-{}, format: {} }}",
            self.kernel(),
            sysfs,
            ifconfig,
            self.filter.include_count(),
            self.filter.exclude_count(),
            self.format,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The kernel name is blank
    /// - A path option is empty
    /// - Regex patterns are invalid
    /// - The output format is unknown
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let kernel = Self::resolve_kernel(cli, toml)?;
        let sysfs_root = Self::resolve_sysfs_root(cli, toml)?;
        let ifconfig = Self::resolve_ifconfig(cli, toml)?;
        let filter = Self::build_filter(cli, toml)?;
        let format = Self::resolve_format(cli, toml)?;

        Ok(Self {
            kernel,
            sysfs_root,
            ifconfig,
            filter,
            format,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path. Otherwise
    /// the file at [`defaults::config_path`] is loaded when it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let path = cli
            .config
            .clone()
            .or_else(|| defaults::config_path().filter(|p| p.is_file()));

        let toml = match path {
            Some(ref path) => Some(TomlConfig::load(path)?),
            None => None,
        };

        Self::from_raw(cli, toml.as_ref())
    }

    /// The kernel name to resolve for.
    #[must_use]
    pub fn kernel(&self) -> &str {
        self.kernel.as_deref().unwrap_or_else(|| host_kernel())
    }

    /// Builds the strategy table with path overrides applied.
    ///
    /// The metadata directory only applies to Linux; the ifconfig override
    /// applies to every ifconfig-based family.
    #[must_use]
    pub fn strategy_table(&self) -> StrategyTable {
        StrategyTable::standard().map_strategies(|family, strategy| {
            if family == KernelFamily::Linux {
                strategy.metadata_dir.clone_from(&self.sysfs_root);
            }
            if family == KernelFamily::Windows {
                return;
            }
            if let Some(ref ifconfig) = self.ifconfig {
                strategy.command = CommandSpec::new(
                    [ifconfig.clone()],
                    std::mem::take(&mut strategy.command.args),
                );
            }
        })
    }

    fn resolve_kernel(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Option<String>, ConfigError> {
        let kernel = cli
            .kernel
            .as_deref()
            .or_else(|| toml.and_then(|t| t.platform.kernel.as_deref()));

        match kernel {
            Some(name) if name.trim().is_empty() => Err(ConfigError::EmptyKernel),
            Some(name) => Ok(Some(name.trim().to_string())),
            None => Ok(None),
        }
    }

    fn resolve_sysfs_root(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Option<PathBuf>, ConfigError> {
        // Flags only disable; TOML `enabled = false` cannot be re-enabled from the CLI
        let enabled = !cli.no_sysfs && toml.and_then(|t| t.sysfs.enabled).unwrap_or(true);
        if !enabled {
            return Ok(None);
        }

        let root = cli
            .sysfs_root
            .clone()
            .or_else(|| toml.and_then(|t| t.sysfs.root.clone()))
            .unwrap_or_else(defaults::sysfs_root);

        non_empty(root, field::SYSFS_ROOT).map(Some)
    }

    fn resolve_ifconfig(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Option<PathBuf>, ConfigError> {
        cli.ifconfig
            .clone()
            .or_else(|| toml.and_then(|t| t.command.ifconfig.clone()))
            .map(|path| non_empty(path, field::IFCONFIG))
            .transpose()
    }

    fn build_filter(cli: &Cli, toml: Option<&TomlConfig>) -> Result<FilterChain, ConfigError> {
        let toml_filter = toml.map(|t| &t.filter);

        // CLI patterns replace TOML patterns per list
        let includes = if cli.include_interfaces.is_empty() {
            toml_filter.map_or(&[][..], |f| f.include.as_slice())
        } else {
            cli.include_interfaces.as_slice()
        };
        let excludes = if cli.exclude_interfaces.is_empty() {
            toml_filter.map_or(&[][..], |f| f.exclude.as_slice())
        } else {
            cli.exclude_interfaces.as_slice()
        };

        let mut filter = FilterChain::new();
        for pattern in includes {
            filter = filter.include(compile_pattern(pattern)?);
        }
        for pattern in excludes {
            filter = filter.exclude(compile_pattern(pattern)?);
        }

        Ok(filter)
    }

    fn resolve_format(cli: &Cli, toml: Option<&TomlConfig>) -> Result<OutputFormat, ConfigError> {
        if let Some(format) = cli.format {
            return Ok(format.into());
        }

        let value = toml
            .and_then(|t| t.output.format.as_deref())
            .unwrap_or(defaults::FORMAT);

        parse_format(value)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn compile_pattern(pattern: &str) -> Result<NameRegexFilter, ConfigError> {
    NameRegexFilter::new(pattern).map_err(|e| ConfigError::InvalidRegex {
        pattern: pattern.to_string(),
        source: e,
    })
}

fn non_empty(path: PathBuf, field: &'static str) -> Result<PathBuf, ConfigError> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::empty_path(field));
    }
    Ok(path)
}

fn parse_format(s: &str) -> Result<OutputFormat, ConfigError> {
    match s.to_lowercase().as_str() {
        "plain" | "text" => Ok(OutputFormat::Plain),
        "json" => Ok(OutputFormat::Json),
        _ => Err(ConfigError::InvalidFormat {
            value: s.to_string(),
        }),
    }
}
