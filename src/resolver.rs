//! Primary MAC address resolution.
//!
//! The [`Resolver`] maps a kernel name to a [`Strategy`] through its
//! [`StrategyTable`], walks the metadata directory backend first (when the
//! strategy has one), falls back to the command backend once, and returns
//! the first candidate whose address survives normalization.
//!
//! Every failure along the way (missing directory, unreadable attribute,
//! absent command, unparsable output, degenerate address) collapses to
//! "not found". Nothing is cached; each call is independent.
//!
//! [`Strategy`]: crate::network::Strategy

use crate::network::filter::{FilterChain, FilteredSource};
use crate::network::platform::{CommandSource, SysfsDirectory, SysfsSource, SystemCommand};
use crate::network::{
    CommandExecutor, InterfaceSource, KernelFamily, MacAddress, MetadataDirectory, StrategyTable,
    normalize,
};

/// Resolves the primary hardware address of a host.
///
/// # Type Parameters
///
/// - `D`: The metadata directory accessor (implements [`MetadataDirectory`])
/// - `C`: The command executor (implements [`CommandExecutor`])
///
/// # Example
///
/// ```no_run
/// use macfact::network::host_kernel;
/// use macfact::resolver::Resolver;
///
/// if let Some(mac) = Resolver::system().resolve(host_kernel()) {
///     println!("{mac}");
/// }
/// ```
#[derive(Debug)]
pub struct Resolver<D, C> {
    table: StrategyTable,
    directory: D,
    executor: C,
    filter: FilterChain,
}

impl Resolver<SysfsDirectory, SystemCommand> {
    /// Creates a resolver over the real filesystem and process spawning,
    /// using the standard strategy table.
    #[must_use]
    pub fn system() -> Self {
        Self::new(
            StrategyTable::standard(),
            SysfsDirectory::new(),
            SystemCommand::new(),
        )
    }
}

impl<D: MetadataDirectory, C: CommandExecutor> Resolver<D, C> {
    /// Creates a resolver from a strategy table and host collaborators.
    #[must_use]
    pub fn new(table: StrategyTable, directory: D, executor: C) -> Self {
        Self {
            table,
            directory,
            executor,
            filter: FilterChain::new(),
        }
    }

    /// Restricts resolution to interfaces accepted by `filter`.
    #[must_use]
    pub fn with_filter(mut self, filter: FilterChain) -> Self {
        self.filter = filter;
        self
    }

    /// Resolves the primary MAC address for a host running `kernel`.
    ///
    /// Returns `None` when the kernel has no known family, when the family
    /// has no strategy, or when no backend produced an acceptable address.
    #[must_use]
    pub fn resolve(&self, kernel: &str) -> Option<MacAddress> {
        let Some(family) = KernelFamily::from_kernel(kernel) else {
            tracing::debug!("Kernel {kernel:?} has no known family");
            return None;
        };

        let Some(strategy) = self.table.get(family) else {
            tracing::debug!("No strategy configured for {family} kernels");
            return None;
        };

        if let Some(dir) = &strategy.metadata_dir {
            let source = SysfsSource::new(&self.directory, dir.clone());
            if let Some(mac) = self.first_accepted(source) {
                return Some(mac);
            }
            tracing::debug!(
                "No address from {}, falling back to {}",
                dir.display(),
                strategy.command
            );
        }

        let source = CommandSource::new(&self.executor, strategy.command.clone(), strategy.format);
        self.first_accepted(source)
    }

    fn first_accepted(&self, source: impl InterfaceSource) -> Option<MacAddress> {
        let source = FilteredSource::new(source, &self.filter);

        source.candidates().find_map(|candidate| {
            let mac = normalize(candidate.raw_address());
            match mac {
                Some(mac) => tracing::debug!("Accepted {mac} from {}", candidate.name),
                None => tracing::trace!("Rejected {candidate}"),
            }
            mac
        })
    }
}

/// Resolves the primary MAC address of this host as a canonical string.
///
/// Uses the real filesystem and process spawning with the standard
/// strategy table. The caller owns any caching of the result.
///
/// # Examples
///
/// ```
/// // Kernels without a known family never touch the host.
/// assert_eq!(macfact::resolve_mac_address("Plan9"), None);
/// ```
#[must_use]
pub fn resolve_mac_address(kernel: &str) -> Option<String> {
    Resolver::system()
        .resolve(kernel)
        .map(|mac| mac.to_string())
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
