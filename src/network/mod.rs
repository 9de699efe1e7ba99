//! Network layer: interface enumeration and address normalization.
//!
//! This module provides types and traits for:
//! - Representing enumerated interfaces ([`InterfaceCandidate`])
//! - Normalizing and filtering hardware addresses ([`MacAddress`])
//! - Classifying kernels into families ([`KernelFamily`])
//! - Mapping families to strategies ([`StrategyTable`])
//! - Enumeration seams and host collaborators ([`InterfaceSource`],
//!   [`MetadataDirectory`], [`CommandExecutor`])
//! - Command output parsers ([`parse`]) and backends ([`platform`])

mod address;
mod candidate;
pub mod filter;
mod kernel;
pub mod parse;
pub mod platform;
mod source;
pub mod strategy;

pub use address::{MacAddress, normalize};
pub use candidate::InterfaceCandidate;
pub use kernel::{KernelFamily, host_kernel};
pub use parse::ListingFormat;
pub use source::{Candidates, CommandExecutor, InterfaceSource, MetadataDirectory, ProbeError};
pub use strategy::{CommandSpec, Strategy, StrategyTable};
