//! Interface enumeration backends and their host collaborators.
//!
//! # Backends
//!
//! - [`SysfsSource`]: reads `<dir>/<iface>/address` from a kernel metadata
//!   directory, using any [`MetadataDirectory`](crate::network::MetadataDirectory).
//! - [`CommandSource`]: runs an inspection command through any
//!   [`CommandExecutor`](crate::network::CommandExecutor) and parses its output.
//!
//! # Host collaborators
//!
//! - [`SysfsDirectory`]: `std::fs` directory listing and file reads.
//! - [`SystemCommand`]: `std::process::Command` with stderr discarded.

mod command;
mod sysfs;

pub use command::{CommandSource, SystemCommand};
pub use sysfs::{ADDRESS_ATTRIBUTE, SysfsDirectory, SysfsSource};
