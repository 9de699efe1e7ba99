//! Parsers for network-configuration command output.
//!
//! Each parser is a pure function from captured text to candidates in line
//! order. Parsers never fail: blocks they cannot understand simply yield no
//! candidate.
//!
//! - [`linux`]: net-tools `ifconfig -a` (legacy and 2.x layouts)
//! - [`bsd`]: BSD and Darwin `ifconfig -a`
//! - [`windows`]: `getmac /v /fo csv /nh`

pub mod bsd;
pub mod linux;
pub mod windows;

use std::fmt;

use regex::Regex;

use super::InterfaceCandidate;

/// Shape of the command output a platform produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingFormat {
    /// Linux net-tools `ifconfig` blocks.
    Linux,
    /// BSD `ifconfig` blocks.
    Bsd,
    /// Windows `getmac` CSV table.
    Windows,
}

impl ListingFormat {
    /// Parses command output into candidates using this format's rules.
    #[must_use]
    pub fn parse(self, output: &str) -> Vec<InterfaceCandidate> {
        match self {
            Self::Linux => linux::parse(output),
            Self::Bsd => bsd::parse(output),
            Self::Windows => windows::parse(output),
        }
    }
}

impl fmt::Display for ListingFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linux => write!(f, "linux-ifconfig"),
            Self::Bsd => write!(f, "bsd-ifconfig"),
            Self::Windows => write!(f, "windows-getmac"),
        }
    }
}

/// Where an `ifconfig` block may carry its hardware address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AddressLines {
    /// Any line of the block, the header included.
    Any,
    /// Only indented lines following the header.
    Indented,
}

/// Splits `ifconfig`-style output into interface blocks.
///
/// A block starts on a line whose first character is not whitespace; its
/// name is the first token with any trailing `:` removed. The first capture
/// of `label` inside the block is taken as the raw address. Blocks without
/// a match produce no candidate.
fn parse_blocks(output: &str, label: &Regex, lines: AddressLines) -> Vec<InterfaceCandidate> {
    let mut candidates = Vec::new();
    let mut current: Option<Block<'_>> = None;

    for line in output.lines() {
        let is_header = starts_block(line);

        if is_header {
            if let Some(block) = current.take() {
                candidates.extend(block.into_candidate());
            }
            current = block_name(line).map(Block::new);
        }

        let Some(block) = current.as_mut() else {
            continue;
        };

        let eligible = match lines {
            AddressLines::Any => true,
            AddressLines::Indented => !is_header,
        };

        if eligible && block.address.is_none() {
            block.address = label
                .captures(line)
                .and_then(|captures| captures.get(1))
                .map(|m| m.as_str());
        }
    }

    if let Some(block) = current {
        candidates.extend(block.into_candidate());
    }

    candidates
}

fn starts_block(line: &str) -> bool {
    line.chars().next().is_some_and(|c| !c.is_whitespace())
}

fn block_name(line: &str) -> Option<&str> {
    line.split_whitespace()
        .next()
        .map(|token| token.trim_end_matches(':'))
        .filter(|name| !name.is_empty())
}

struct Block<'a> {
    name: &'a str,
    address: Option<&'a str>,
}

impl<'a> Block<'a> {
    const fn new(name: &'a str) -> Self {
        Self {
            name,
            address: None,
        }
    }

    fn into_candidate(self) -> Option<InterfaceCandidate> {
        self.address
            .map(|address| InterfaceCandidate::new(self.name, address))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Captured command output used across parser and resolver tests.

    pub const LINUX_MULTIPLE_INTERFACES: &str = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/fixtures/ifconfig/linux_ifconfig_all_with_multiple_interfaces"
    ));
    pub const LINUX_NO_MAC: &str = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/fixtures/ifconfig/linux_ifconfig_no_mac"
    ));
    pub const LINUX_VENET: &str = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/fixtures/ifconfig/linux_ifconfig_venet"
    ));
    pub const LINUX_NET_TOOLS_2: &str = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/fixtures/ifconfig/linux_ifconfig_net_tools_2"
    ));
    pub const BSD_MULTIPLE_INTERFACES: &str = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/fixtures/ifconfig/bsd_ifconfig_all_with_multiple_interfaces"
    ));
    pub const DARWIN_MULTIPLE_INTERFACES: &str = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/fixtures/ifconfig/darwin_ifconfig_all_with_multiple_interfaces"
    ));
    pub const OPENBSD: &str = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/fixtures/ifconfig/openbsd_ifconfig_all"
    ));
    pub const WINDOWS_GETMAC: &str = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/fixtures/getmac/windows_getmac_csv"
    ));
}
