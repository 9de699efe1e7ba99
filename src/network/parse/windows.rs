//! Windows `getmac /v /fo csv /nh` output.
//!
//! Each record is one line of quoted CSV:
//!
//! ```text
//! "Ethernet","Intel(R) Ethernet Connection I219-V","00-1A-2B-3C-4D-5E","\Device\Tcpip_{...}"
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::network::InterfaceCandidate;

/// Column holding the connection name.
const NAME_COLUMN: usize = 0;

/// Column holding the physical address.
const ADDRESS_COLUMN: usize = 2;

static QUOTED_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""((?:[^"]|"")*)""#).expect("CSV field pattern is valid"));

/// Parses `getmac` CSV output into candidates in line order.
///
/// Records with fewer than three columns are skipped. Placeholder cells
/// (`N/A`, `Disabled`) are passed through and rejected by the normalizer.
#[must_use]
pub fn parse(output: &str) -> Vec<InterfaceCandidate> {
    output.lines().filter_map(parse_record).collect()
}

fn parse_record(line: &str) -> Option<InterfaceCandidate> {
    let fields: Vec<String> = QUOTED_FIELD
        .captures_iter(line)
        .filter_map(|captures| captures.get(1))
        .map(|m| m.as_str().replace("\"\"", "\""))
        .collect();

    let name = fields.get(NAME_COLUMN)?;
    let address = fields.get(ADDRESS_COLUMN)?;

    Some(InterfaceCandidate::new(name.as_str(), address.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::parse::fixtures;

    #[test]
    fn records_in_order() {
        let candidates = parse(fixtures::WINDOWS_GETMAC);

        assert_eq!(
            candidates,
            vec![
                InterfaceCandidate::new("Wi-Fi", "N/A"),
                InterfaceCandidate::new("Ethernet", "00-1A-2B-3C-4D-5E"),
                InterfaceCandidate::new("vEthernet (WSL)", "00-15-5D-A1-B2-C3"),
            ]
        );
    }

    #[test]
    fn escaped_quotes_are_unescaped() {
        let candidates = parse(r#""Lab ""A""","Adapter","00-1A-2B-3C-4D-5E","x""#);
        assert_eq!(candidates[0].name, r#"Lab "A""#);
    }

    #[test]
    fn short_records_are_skipped() {
        assert!(parse("\"Ethernet\",\"Intel\"\r\n\r\nINFO: No network adapters found.\r\n").is_empty());
    }
}
