use crate::core::candidate::{parse_candidate, CandidateAddress};
use log::debug;

/*-------------------------------------------------------------------------------------------------
  Configuration Address Scanner
-------------------------------------------------------------------------------------------------*/

const IP_ADDRESS_STATEMENT: &str = "ip address";

// Number of tokens examined on each `ip address` line
const TOKEN_WINDOW: usize = 3;

/// Scan configuration text with the default [Scanner] options and return the
/// candidate IPv4 addresses found on `ip address` lines, in first-seen order.
///
/// ```
/// let config = "interface Vlan10\n ip address 10.1.1.1 255.255.255.0\n";
/// let candidates = ipdupcheck::scan(config);
///
/// let tokens: Vec<&str> = candidates.iter().map(|c| c.token()).collect();
/// assert_eq!(tokens, ["10.1.1.1", "255.255.255.0"]);
/// ```
pub fn scan(configuration: &str) -> Vec<CandidateAddress> {
    Scanner::default().scan(configuration)
}

/*--------------------------------------------------------------------------------------
  Scanner
--------------------------------------------------------------------------------------*/

/// Extracts candidate IPv4 addresses from device configuration text.
///
/// Every line containing `ip address` is split on whitespace and a window of
/// three tokens is examined: the tokens following the `ip address` keywords,
/// or the first three tokens of the line when the keywords are not separate
/// words. Each token that is a valid dotted-quad IPv4 literal becomes a
/// candidate. No deduplication is performed.
///
/// By default the network mask of an `ip address <address> <mask>` statement
/// is reported as a candidate too, since a mask value may coincide with an
/// address in use. Use [Scanner::include_masks] to report only the first
/// address of each statement.
#[derive(Clone, Copy, Debug)]
pub struct Scanner {
    include_masks: bool,
}

impl Default for Scanner {
    fn default() -> Self {
        Self {
            include_masks: true,
        }
    }
}

impl Scanner {
    /// Report (`true`, the default) or drop (`false`) the candidates that
    /// follow the first address of an `ip address` statement.
    pub fn include_masks(mut self, include_masks: bool) -> Self {
        self.include_masks = include_masks;
        self
    }

    /// Scan a block of configuration text.
    pub fn scan(&self, configuration: &str) -> Vec<CandidateAddress> {
        self.scan_lines(configuration.lines())
    }

    /// Scan configuration text that has already been split into lines.
    pub fn scan_lines<I, S>(&self, lines: I) -> Vec<CandidateAddress>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut candidates = Vec::new();

        for line in lines {
            let line = line.as_ref();
            if !line.contains(IP_ADDRESS_STATEMENT) {
                continue;
            }

            let line_candidates = statement_window(line).into_iter().filter_map(parse_candidate);
            if self.include_masks {
                candidates.extend(line_candidates);
            } else {
                candidates.extend(line_candidates.take(1));
            }
        }

        debug!("Found {} candidate address(es)", candidates.len());
        candidates
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

/// Select the tokens of an `ip address` line that may hold addresses.
fn statement_window(line: &str) -> Vec<&str> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let start = tokens
        .windows(2)
        .position(|pair| pair == ["ip", "address"])
        .map(|position| position + 2)
        .unwrap_or(0);

    tokens.into_iter().skip(start).take(TOKEN_WINDOW).collect()
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn tokens(candidates: &[CandidateAddress]) -> Vec<&str> {
        candidates.iter().map(|candidate| candidate.token()).collect()
    }

    /*----------------------------------------------------------------------------------
      Statement Window
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_statement_window_after_keywords() {
        assert_eq!(
            statement_window("  ip address 10.1.1.1 255.255.255.0 secondary extra"),
            ["10.1.1.1", "255.255.255.0", "secondary"]
        );
    }

    #[test]
    fn test_statement_window_without_keyword_tokens() {
        assert_eq!(
            statement_window("set ip addressing 10.0.0.1 mode"),
            ["set", "ip", "addressing"]
        );
    }

    /*----------------------------------------------------------------------------------
      Scanner
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_scan_no_ip_address_lines() {
        let config = "hostname sw1\ninterface Gi1/0/1\n description uplink to core\n shutdown\n";
        assert!(scan(config).is_empty());
        assert!(scan("").is_empty());
    }

    #[test]
    fn test_scan_description_line() {
        assert!(scan("description uplink to core").is_empty());
    }

    #[test]
    fn test_scan_address_and_mask() {
        let candidates = scan("ip address 10.1.1.1 255.255.255.0");
        assert_eq!(tokens(&candidates), ["10.1.1.1", "255.255.255.0"]);
    }

    #[test]
    fn test_scan_out_of_range_address() {
        let candidates = scan("ip address 300.1.1.1 255.255.255.0");
        assert_eq!(tokens(&candidates), ["255.255.255.0"]);
    }

    #[test]
    fn test_scan_indented_interface_stanza() {
        let config = "\
interface Vlan10
 description users
 ip address 10.10.10.1 255.255.255.0
!
interface Loopback0
\tip address 192.0.2.1 255.255.255.255
!
interface Gi1/0/1
 no ip address
";
        let candidates = scan(config);
        assert_eq!(
            tokens(&candidates),
            [
                "10.10.10.1",
                "255.255.255.0",
                "192.0.2.1",
                "255.255.255.255"
            ]
        );
    }

    #[test]
    fn test_scan_crlf_line_endings() {
        let candidates = scan("interface Vlan20\r\n ip address 10.2.2.1 255.255.255.0\r\n");
        assert_eq!(tokens(&candidates), ["10.2.2.1", "255.255.255.0"]);
    }

    #[test]
    fn test_scan_ignores_non_address_tokens() {
        assert!(scan("ip address dhcp").is_empty());
        assert!(scan("ip address negotiated").is_empty());
        assert!(scan("ip address 10.1.1.1/24").is_empty());
    }

    #[test]
    fn test_scan_does_not_deduplicate() {
        let config = "ip address 10.1.1.1 255.255.255.0\nip address 10.1.2.1 255.255.255.0";
        let candidates = scan(config);
        assert_eq!(
            tokens(&candidates),
            ["10.1.1.1", "255.255.255.0", "10.1.2.1", "255.255.255.0"]
        );
    }

    #[test]
    fn test_scan_only_three_tokens() {
        let candidates = scan("ip address 10.1.1.1 255.255.255.0 secondary 10.9.9.9");
        assert_eq!(tokens(&candidates), ["10.1.1.1", "255.255.255.0"]);
    }

    #[test]
    fn test_scan_exclude_masks() {
        let config = "ip address 10.1.1.1 255.255.255.0\nip address 300.1.1.1 255.255.0.0";
        let candidates = Scanner::default().include_masks(false).scan(config);
        // The first valid candidate of each statement is kept
        assert_eq!(tokens(&candidates), ["10.1.1.1", "255.255.0.0"]);
    }

    #[test]
    fn test_scan_lines() {
        let lines = vec![
            String::from("interface Vlan30"),
            String::from(" ip address 172.16.0.1 255.255.0.0"),
        ];
        let candidates = Scanner::default().scan_lines(&lines);
        assert_eq!(tokens(&candidates), ["172.16.0.1", "255.255.0.0"]);
    }

    #[test]
    fn test_scan_is_repeatable() {
        let config = "ip address 10.1.1.1 255.255.255.0\n ip address 10.3.3.3 255.0.0.0";
        assert_eq!(scan(config), scan(config));
    }
}
