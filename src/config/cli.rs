//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use super::OutputFormat;

/// macfact: primary MAC address fact resolver
///
/// Prints the hardware address of the host's first interface with a real
/// MAC address, or nothing if none is found.
#[derive(Debug, Parser)]
#[command(name = "macfact")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Kernel name to resolve for (defaults to the host kernel, e.g. Linux, Darwin, FreeBSD)
    #[arg(long)]
    pub kernel: Option<String>,

    /// Kernel network-interface metadata directory
    #[arg(long = "sysfs-root", value_name = "DIR")]
    pub sysfs_root: Option<PathBuf>,

    /// Skip the metadata directory and parse command output only
    #[arg(long = "no-sysfs")]
    pub no_sysfs: bool,

    /// Path to the ifconfig binary (skips the built-in lookup list)
    #[arg(long, value_name = "PATH")]
    pub ifconfig: Option<PathBuf>,

    /// Regex pattern for interfaces to consider (can be specified multiple times)
    #[arg(long = "include-interface", value_name = "PATTERN")]
    pub include_interfaces: Vec<String>,

    /// Regex pattern for interfaces to skip (can be specified multiple times)
    #[arg(long = "exclude-interface", value_name = "PATTERN")]
    pub exclude_interfaces: Vec<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for macfact
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "macfact.toml")]
        output: PathBuf,
    },
}

/// Output format argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// The bare address, or nothing when not found
    Plain,
    /// A JSON object with a `macaddress` key
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Plain => Self::Plain,
            FormatArg::Json => Self::Json,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
