//! BSD and Darwin `ifconfig -a` output.

use std::sync::LazyLock;

use regex::Regex;

use super::{AddressLines, parse_blocks};
use crate::network::InterfaceCandidate;

// OpenBSD prints `lladdr` where the other BSDs print `ether`.
static HARDWARE_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s+(?:ether|lladdr)\s+([0-9A-Fa-f]{1,2}(?:[:-][0-9A-Fa-f]{1,2}){5,})\b")
        .expect("hardware address pattern is valid")
});

/// Parses BSD `ifconfig -a` output into candidates in line order.
///
/// Blocks begin at column zero (`fxp0: flags=...`); the address is read
/// from the first indented `ether`/`lladdr` line of the block.
#[must_use]
pub fn parse(output: &str) -> Vec<InterfaceCandidate> {
    parse_blocks(output, &HARDWARE_ADDRESS, AddressLines::Indented)
}
