//! Hardware address normalization and filtering.

use std::fmt;

use serde::{Serialize, Serializer};

/// Number of octets in an EUI-48 hardware address.
const OCTETS: usize = 6;

/// A normalized, non-degenerate hardware address.
///
/// Always displayed in canonical form: six lowercase hex pairs joined by
/// colons (`00:12:3f:be:22:01`). The all-zero address cannot be represented;
/// it is rejected during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress([u8; OCTETS]);

impl MacAddress {
    /// The degenerate address reported by interfaces without hardware
    /// (loopback, `venet`, tunnels).
    pub const ZERO: [u8; OCTETS] = [0; OCTETS];

    /// Normalizes a raw address string.
    ///
    /// The input is trimmed, lowercased and `-` separators are converted to
    /// `:`. The result must be exactly six two-digit hex groups.
    ///
    /// Returns `None` if the input is empty, malformed, or the all-zero
    /// address. Rejection is a normal outcome, not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use macfact::network::MacAddress;
    ///
    /// let mac = MacAddress::normalize("00-12-3F-BE-22-01").unwrap();
    /// assert_eq!(mac.to_string(), "00:12:3f:be:22:01");
    ///
    /// assert!(MacAddress::normalize("00:00:00:00:00:00").is_none());
    /// assert!(MacAddress::normalize("N/A").is_none());
    /// ```
    #[must_use]
    pub fn normalize(raw: &str) -> Option<Self> {
        let canonical = raw.trim().to_ascii_lowercase().replace('-', ":");
        let octets = parse_octets(&canonical)?;

        if octets == Self::ZERO {
            return None;
        }

        Some(Self(octets))
    }
}

/// Normalizes an optional raw address; absent input is rejected.
#[must_use]
pub fn normalize(raw: Option<&str>) -> Option<MacAddress> {
    raw.and_then(MacAddress::normalize)
}

fn parse_octets(canonical: &str) -> Option<[u8; OCTETS]> {
    let mut octets = [0u8; OCTETS];
    let mut groups = canonical.split(':');

    for octet in &mut octets {
        let group = groups.next()?;
        if group.len() != 2 || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        *octet = u8::from_str_radix(group, 16).ok()?;
    }

    // Longer addresses (InfiniBand, venet) are not six groups
    if groups.next().is_some() {
        return None;
    }

    Some(octets)
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl Serialize for MacAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod accepts {
        use super::*;

        #[test]
        fn uppercase_is_lowercased() {
            let mac = MacAddress::normalize("00:12:3F:BE:22:01").unwrap();
            assert_eq!(mac.to_string(), "00:12:3f:be:22:01");
        }

        #[test]
        fn surrounding_whitespace_is_trimmed() {
            let mac = MacAddress::normalize("  00:12:3f:be:22:01\n").unwrap();
            assert_eq!(mac.to_string(), "00:12:3f:be:22:01");
        }

        #[test]
        fn dash_separators_become_colons() {
            let mac = MacAddress::normalize("00-1A-2B-3C-4D-5E").unwrap();
            assert_eq!(mac.to_string(), "00:1a:2b:3c:4d:5e");
        }

        #[test]
        fn leading_zero_octets_survive() {
            let mac = MacAddress::normalize("00:0b:db:93:09:67").unwrap();
            assert_eq!(mac.to_string(), "00:0b:db:93:09:67");
        }

        #[test]
        fn mixed_separators_after_conversion() {
            assert!(MacAddress::normalize("00-12:3f-be:22-01").is_some());
        }

        #[test]
        fn broadcast_is_not_degenerate() {
            assert!(MacAddress::normalize("ff:ff:ff:ff:ff:ff").is_some());
        }
    }

    mod rejects {
        use super::*;

        #[test]
        fn all_zero_address() {
            assert!(MacAddress::normalize("00:00:00:00:00:00").is_none());
            assert!(MacAddress::normalize("00-00-00-00-00-00").is_none());
        }

        #[test]
        fn empty_and_blank() {
            assert!(MacAddress::normalize("").is_none());
            assert!(MacAddress::normalize("   \n").is_none());
        }

        #[test]
        fn wrong_group_count() {
            assert!(MacAddress::normalize("00:12:3f:be:22").is_none());
            assert!(MacAddress::normalize("00:12:3f:be:22:01:02").is_none());
            assert!(
                MacAddress::normalize("00-00-00-00-00-00-00-00-00-00-00-00-00-00-00-00").is_none()
            );
        }

        #[test]
        fn single_digit_groups() {
            assert!(MacAddress::normalize("0:3:ba:1:2:3").is_none());
        }

        #[test]
        fn non_hex_digits() {
            assert!(MacAddress::normalize("00:12:3g:be:22:01").is_none());
            assert!(MacAddress::normalize("+0:12:3f:be:22:01").is_none());
        }

        #[test]
        fn placeholder_text() {
            assert!(MacAddress::normalize("N/A").is_none());
            assert!(MacAddress::normalize("Physical Address").is_none());
        }
    }

    #[test]
    fn normalize_absent_is_rejected() {
        assert!(normalize(None).is_none());
        assert_eq!(
            normalize(Some("00:12:3f:be:22:01")).map(|m| m.to_string()),
            Some("00:12:3f:be:22:01".to_string())
        );
    }

    #[test]
    fn serializes_as_canonical_string() {
        let mac = MacAddress::normalize("00:12:3F:BE:22:01").unwrap();
        assert_eq!(
            serde_json::to_string(&mac).unwrap(),
            "\"00:12:3f:be:22:01\""
        );
    }
}
