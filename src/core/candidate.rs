use lazy_static::lazy_static;
use log::trace;
use regex::Regex;
use std::fmt;
use std::net::Ipv4Addr;

/*-------------------------------------------------------------------------------------------------
  Candidate Address
-------------------------------------------------------------------------------------------------*/

lazy_static! {
    static ref DOTTED_QUAD: Regex =
        Regex::new(r"^[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}$").unwrap();
}

/// An IPv4 literal found in an `ip address` statement. Keeps the token as it
/// was written in the configuration along with the parsed address.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct CandidateAddress {
    token: String,
    address: Ipv4Addr,
}

impl CandidateAddress {
    /// The token exactly as it appeared in the configuration text.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The parsed IPv4 address.
    pub fn address(&self) -> Ipv4Addr {
        self.address
    }
}

impl fmt::Display for CandidateAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}

/*--------------------------------------------------------------------------------------
  Token Validation
--------------------------------------------------------------------------------------*/

/// Parse a configuration token as a [CandidateAddress].
///
/// The token must be a dotted quad (four groups of one to three digits, nothing
/// before or after) and every octet must be in the `0..=255` range. Tokens
/// failing either check are rejected with `None`.
///
/// ```
/// use ipdupcheck::parse_candidate;
///
/// assert!(parse_candidate("10.1.1.1").is_some());
/// assert!(parse_candidate("300.1.1.1").is_none());
/// assert!(parse_candidate("10.1.1.1/24").is_none());
/// ```
pub fn parse_candidate(token: &str) -> Option<CandidateAddress> {
    if !DOTTED_QUAD.is_match(token) {
        trace!("Malformed address token: {:?}", token);
        return None;
    }

    let mut octets = [0u8; 4];
    for (octet, group) in octets.iter_mut().zip(token.split('.')) {
        match group.parse::<u8>() {
            Ok(value) => *octet = value,
            Err(_) => {
                trace!("Octet out of range in address token: {:?}", token);
                return None;
            }
        }
    }

    Some(CandidateAddress {
        token: token.to_string(),
        address: Ipv4Addr::from(octets),
    })
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
