//! Static table mapping kernel families to enumeration strategies.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use super::KernelFamily;
use super::parse::ListingFormat;

/// Default kernel network-interface metadata directory on Linux.
pub const SYSFS_NET: &str = "/sys/class/net";

/// Places `ifconfig` is commonly installed, in lookup order.
pub const IFCONFIG_PATHS: [&str; 3] = ["/bin/ifconfig", "/sbin/ifconfig", "/usr/sbin/ifconfig"];

/// Arguments listing every interface with `ifconfig`.
pub const IFCONFIG_ARGS: [&str; 1] = ["-a"];

/// Windows adapter listing command, resolved through `PATH`.
pub const GETMAC: &str = "getmac";

/// Arguments producing a verbose, headerless CSV table from `getmac`.
pub const GETMAC_ARGS: [&str; 4] = ["/v", "/fo", "csv", "/nh"];

/// An inspection command and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Candidate program locations; the first available one is executed.
    pub programs: Vec<PathBuf>,
    /// Arguments passed to the program.
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Creates a command spec from candidate program paths and arguments.
    #[must_use]
    pub fn new<P, A>(programs: P, args: A) -> Self
    where
        P: IntoIterator,
        P::Item: Into<PathBuf>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        Self {
            programs: programs.into_iter().map(Into::into).collect(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The standard `ifconfig -a` invocation.
    #[must_use]
    pub fn ifconfig() -> Self {
        Self::new(IFCONFIG_PATHS, IFCONFIG_ARGS)
    }

    /// The standard `getmac` CSV invocation.
    #[must_use]
    pub fn getmac() -> Self {
        Self::new([GETMAC], GETMAC_ARGS)
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let programs: Vec<_> = self
            .programs
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        write!(f, "[{}] {}", programs.join("|"), self.args.join(" "))
    }
}

/// How to discover interfaces on one kernel family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strategy {
    /// Kernel metadata directory tried first, if the family has one.
    pub metadata_dir: Option<PathBuf>,
    /// Command run when the metadata directory is absent or yields nothing.
    pub command: CommandSpec,
    /// Parser for the command's output.
    pub format: ListingFormat,
}

impl Strategy {
    /// Creates a command-only strategy.
    #[must_use]
    pub const fn command(command: CommandSpec, format: ListingFormat) -> Self {
        Self {
            metadata_dir: None,
            command,
            format,
        }
    }

    /// Adds a metadata directory to try before the command.
    #[must_use]
    pub fn with_metadata_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.metadata_dir = Some(dir.into());
        self
    }
}

/// Explicit mapping from kernel family to [`Strategy`].
///
/// Families missing from the table resolve to "not found" without invoking
/// any backend.
///
/// # Examples
///
/// ```
/// use macfact::network::{KernelFamily, ListingFormat, StrategyTable};
///
/// let table = StrategyTable::standard();
/// let linux = table.get(KernelFamily::Linux).unwrap();
///
/// assert!(linux.metadata_dir.is_some());
/// assert_eq!(linux.format, ListingFormat::Linux);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StrategyTable {
    strategies: HashMap<KernelFamily, Strategy>,
}

impl StrategyTable {
    /// Creates an empty table (every family resolves to "not found").
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table for Linux, BSD and Windows hosts.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with(
                KernelFamily::Linux,
                Strategy::command(CommandSpec::ifconfig(), ListingFormat::Linux)
                    .with_metadata_dir(SYSFS_NET),
            )
            .with(
                KernelFamily::Bsd,
                Strategy::command(CommandSpec::ifconfig(), ListingFormat::Bsd),
            )
            .with(
                KernelFamily::Windows,
                Strategy::command(CommandSpec::getmac(), ListingFormat::Windows),
            )
    }

    /// Adds or replaces the strategy for a family.
    #[must_use]
    pub fn with(mut self, family: KernelFamily, strategy: Strategy) -> Self {
        self.strategies.insert(family, strategy);
        self
    }

    /// Returns the strategy for a family, if any.
    #[must_use]
    pub fn get(&self, family: KernelFamily) -> Option<&Strategy> {
        self.strategies.get(&family)
    }

    /// Applies `f` to every strategy in the table.
    #[must_use]
    pub fn map_strategies(mut self, mut f: impl FnMut(KernelFamily, &mut Strategy)) -> Self {
        for (family, strategy) in &mut self.strategies {
            f(*family, strategy);
        }
        self
    }

    /// Returns the number of families in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Returns true if no family is mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}
