// ── IPv4 network arithmetic ──
//
// Parsing and containment helpers for the provisioning subnet. IPv4 only:
// IPv6 literals fail to parse here and are rejected by the callers.

use std::fmt;
use std::net::Ipv4Addr;

use ipnetwork::Ipv4Network;
use thiserror::Error;

/// Low-level parse failure. The rule sets translate these into
/// field-specific `ValidationError`s.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetError {
    #[error("invalid IPv4 address: {0}")]
    InvalidAddress(String),

    #[error("invalid IPv4 CIDR: {0}")]
    InvalidCidr(String),
}

/// Why a `"begin, end"` pair failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("expected two comma-separated addresses, got: {0}")]
    Malformed(String),

    #[error("invalid IPv4 address in range: {0}")]
    InvalidAddress(String),
}

/// Parse a dotted-decimal IPv4 address.
pub fn parse_ipv4(value: &str) -> Result<Ipv4Addr, NetError> {
    value
        .parse()
        .map_err(|_| NetError::InvalidAddress(value.to_owned()))
}

/// Parse `a.b.c.d/len`. Host bits may be set (`172.30.20.3/24`); the
/// network is still the masked prefix. A bare address without `/len` is
/// not a CIDR.
pub fn parse_cidr(value: &str) -> Result<Ipv4Network, NetError> {
    let invalid = || NetError::InvalidCidr(value.to_owned());

    let (addr, prefix) = value.split_once('/').ok_or_else(invalid)?;
    let addr: Ipv4Addr = addr.parse().map_err(|_| invalid())?;
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let prefix: u8 = prefix.parse().map_err(|_| invalid())?;
    Ipv4Network::new(addr, prefix).map_err(|_| invalid())
}

/// `ip & mask == network & mask`.
pub fn contained_in(ip: Ipv4Addr, network: &Ipv4Network) -> bool {
    network.contains(ip)
}

/// Both endpoints lie inside `network`.
pub fn range_contained_in(begin: Ipv4Addr, end: Ipv4Addr, network: &Ipv4Network) -> bool {
    contained_in(begin, network) && contained_in(end, network)
}

/// `begin <= ip <= end` in numeric (big-endian `u32`) order. A reversed
/// range contains nothing.
pub fn ip_within_inclusive_range(ip: Ipv4Addr, begin: Ipv4Addr, end: Ipv4Addr) -> bool {
    let ip = u32::from(ip);
    u32::from(begin) <= ip && ip <= u32::from(end)
}

// ── DHCP range ──────────────────────────────────────────────────────

/// Inclusive address pool, written `"begin, end"`.
///
/// No ordering is enforced between the endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DhcpRange {
    pub begin: Ipv4Addr,
    pub end: Ipv4Addr,
}

impl DhcpRange {
    /// Split on `,` and trim each token. Anything other than exactly two
    /// tokens is `Malformed`; a bad token is `InvalidAddress`.
    pub fn parse(value: &str) -> Result<Self, RangeError> {
        let tokens: Vec<&str> = value.split(',').map(str::trim).collect();
        let [begin, end] = tokens.as_slice() else {
            return Err(RangeError::Malformed(value.to_owned()));
        };
        let address = |token: &str| {
            token
                .parse::<Ipv4Addr>()
                .map_err(|_| RangeError::InvalidAddress(token.to_owned()))
        };
        Ok(Self {
            begin: address(begin)?,
            end: address(end)?,
        })
    }

    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        ip_within_inclusive_range(ip, self.begin, self.end)
    }

    pub fn within(&self, network: &Ipv4Network) -> bool {
        range_contained_in(self.begin, self.end, network)
    }
}

impl fmt::Display for DhcpRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.begin, self.end)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ip(s: &str) -> Ipv4Addr {
        s.parse().unwrap()
    }

    #[test]
    fn parse_cidr_accepts_network_and_host_forms() {
        let net = parse_cidr("172.30.20.0/24").unwrap();
        assert_eq!(net.network(), ip("172.30.20.0"));
        assert_eq!(net.prefix(), 24);

        let host_form = parse_cidr("172.30.20.3/24").unwrap();
        assert_eq!(host_form.network(), ip("172.30.20.0"));
    }

    #[test]
    fn parse_cidr_rejects_garbage() {
        for bad in [
            "",
            "172.30.20.0",
            "172.30.20.0/",
            "172.30.20.0/33",
            "172.30.20.0/+8",
            "172.30.20.0/ 24",
            "172.30.20/24",
            "fd00:1101::/64",
            "not-a-cidr",
        ] {
            assert_eq!(
                parse_cidr(bad),
                Err(NetError::InvalidCidr(bad.to_owned())),
                "input {bad:?}"
            );
        }
    }

    #[test]
    fn parse_ipv4_rejects_ipv6_and_leading_zeros() {
        assert!(parse_ipv4("172.30.20.3").is_ok());
        assert!(parse_ipv4("fd00:1101::3").is_err());
        assert!(parse_ipv4("172.030.20.3").is_err());
        assert!(parse_ipv4(" 172.30.20.3").is_err());
    }

    #[test]
    fn containment_uses_the_prefix_mask() {
        let net = parse_cidr("172.30.20.0/24").unwrap();
        assert!(contained_in(ip("172.30.20.0"), &net));
        assert!(contained_in(ip("172.30.20.255"), &net));
        assert!(!contained_in(ip("172.30.21.1"), &net));

        let everything = parse_cidr("0.0.0.0/0").unwrap();
        assert!(contained_in(ip("203.0.113.7"), &everything));
    }

    #[test]
    fn range_containment_requires_both_endpoints() {
        let net = parse_cidr("172.30.20.0/24").unwrap();
        assert!(range_contained_in(ip("172.30.20.11"), ip("172.30.20.101"), &net));
        assert!(!range_contained_in(ip("172.30.20.11"), ip("172.30.21.1"), &net));
        assert!(!range_contained_in(ip("172.30.19.1"), ip("172.30.20.1"), &net));
    }

    #[test]
    fn inclusive_range_bounds() {
        let (begin, end) = (ip("172.30.20.11"), ip("172.30.20.101"));
        assert!(ip_within_inclusive_range(begin, begin, end));
        assert!(ip_within_inclusive_range(end, begin, end));
        assert!(ip_within_inclusive_range(ip("172.30.20.20"), begin, end));
        assert!(!ip_within_inclusive_range(ip("172.30.20.10"), begin, end));
        assert!(!ip_within_inclusive_range(ip("172.30.20.102"), begin, end));
    }

    #[test]
    fn reversed_range_contains_nothing() {
        let range = DhcpRange::parse("172.30.20.101,172.30.20.11").unwrap();
        assert!(!range.contains(ip("172.30.20.50")));
    }

    #[test]
    fn dhcp_range_trims_whitespace() {
        let range = DhcpRange::parse(" 172.30.20.11 ,  172.30.20.101 ").unwrap();
        assert_eq!(range.begin, ip("172.30.20.11"));
        assert_eq!(range.end, ip("172.30.20.101"));
        assert_eq!(range.to_string(), "172.30.20.11,172.30.20.101");
    }

    #[test]
    fn dhcp_range_separates_format_from_address_errors() {
        assert_eq!(
            DhcpRange::parse("172.30.20.11:172.30.20.100"),
            Err(RangeError::Malformed("172.30.20.11:172.30.20.100".into()))
        );
        assert_eq!(
            DhcpRange::parse("172.30.20.11,172.30.20.12,172.30.20.13"),
            Err(RangeError::Malformed(
                "172.30.20.11,172.30.20.12,172.30.20.13".into()
            ))
        );
        assert_eq!(
            DhcpRange::parse("172.30.20.11, banana"),
            Err(RangeError::InvalidAddress("banana".into()))
        );
        assert_eq!(
            DhcpRange::parse("172.30.20.0/24, 172.30.20.100"),
            Err(RangeError::InvalidAddress("172.30.20.0/24".into()))
        );
    }
}
