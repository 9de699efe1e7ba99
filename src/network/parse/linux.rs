//! Linux net-tools `ifconfig -a` output.
//!
//! Both layouts are understood:
//!
//! ```text
//! eth0      Link encap:Ethernet  HWaddr 00:12:3f:be:22:01
//!           inet addr:131.252.209.153  Bcast:131.252.209.255
//!
//! enp0s3: flags=4163<UP,BROADCAST,RUNNING,MULTICAST>  mtu 1500
//!         ether 08:00:27:8a:3c:51  txqueuelen 1000  (Ethernet)
//! ```

use std::sync::LazyLock;

use regex::Regex;

use super::{AddressLines, parse_blocks};
use crate::network::InterfaceCandidate;

static HARDWARE_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:HWaddr|ether)\s+([0-9A-Fa-f]{1,2}(?:[:-][0-9A-Fa-f]{1,2}){5,})\b")
        .expect("hardware address pattern is valid")
});

/// Parses Linux `ifconfig -a` output into candidates in line order.
///
/// Only hex-group tokens count as addresses; group width and count are
/// checked by the normalizer, so `venet`-style 16-byte addresses still
/// appear here.
#[must_use]
pub fn parse(output: &str) -> Vec<InterfaceCandidate> {
    parse_blocks(output, &HARDWARE_ADDRESS, AddressLines::Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::parse::fixtures;

    #[test]
    fn legacy_layout_reads_hwaddr_from_header() {
        let candidates = parse(fixtures::LINUX_MULTIPLE_INTERFACES);

        assert_eq!(
            candidates,
            vec![
                InterfaceCandidate::new("eth0", "00:12:3f:be:22:01"),
                InterfaceCandidate::new("eth1", "00:12:3f:be:22:02"),
            ]
        );
    }

    #[test]
    fn modern_layout_reads_ether_line() {
        let candidates = parse(fixtures::LINUX_NET_TOOLS_2);

        assert_eq!(
            candidates,
            vec![
                InterfaceCandidate::new("docker0", "02:42:5c:1a:7b:9e"),
                InterfaceCandidate::new("enp0s3", "08:00:27:8A:3C:51"),
            ]
        );
    }

    #[test]
    fn loopback_only_yields_nothing() {
        assert!(parse(fixtures::LINUX_NO_MAC).is_empty());
    }

    #[test]
    fn venet_addresses_are_passed_through_raw() {
        let candidates = parse(fixtures::LINUX_VENET);
        let names: Vec<_> = candidates.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(names, ["venet0", "venet0:0"]);
        assert_eq!(
            candidates[0].raw_address(),
            Some("00-00-00-00-00-00-00-00-00-00-00-00-00-00-00-00")
        );
    }

    #[test]
    fn ethernet_word_is_not_a_label() {
        let output = "eth0      Link encap:Ethernet  \n          inet addr:10.0.0.1\n";
        assert!(parse(output).is_empty());
    }

    #[test]
    fn truncated_output_keeps_complete_blocks() {
        let output = "eth0      Link encap:Ethernet  HWaddr 00:12:3f:be:22:01\n          inet ad";
        assert_eq!(parse(output).len(), 1);

        assert!(parse("eth0      Link encap:Ethernet  HWad").is_empty());
    }

    #[test]
    fn non_address_token_does_not_hide_later_address() {
        let output = "eth0: flags=1\n ether (none)\n ether 00:12:3f:be:22:01\n";

        assert_eq!(
            parse(output),
            vec![InterfaceCandidate::new("eth0", "00:12:3f:be:22:01")]
        );
    }

    #[test]
    fn label_without_token_yields_nothing() {
        assert!(parse("eth0: flags=1\n        ether\n").is_empty());
    }
}
