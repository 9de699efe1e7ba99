//! macfact: primary MAC address fact resolver
//!
//! A library for discovering the primary hardware address of a host,
//! trying the kernel's network-interface metadata directory first and
//! falling back to parsing network-configuration command output.

pub mod config;
pub mod network;
pub mod resolver;

pub use resolver::resolve_mac_address;
