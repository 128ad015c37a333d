//! # Subnet Prefix Model
//!
//! The `/24` prefix the sweep walks: the three leading octets of the local
//! site-local address. Candidate hosts are `.1` through `.254`; the
//! network and broadcast addresses are never probed.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// A `/24` IPv4 prefix such as `192.168.1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubnetPrefix {
    octets: [u8; 3],
}

impl SubnetPrefix {
    /// Number of candidate hosts in a `/24` sweep.
    pub const HOST_COUNT: usize = 254;

    pub fn new(a: u8, b: u8, c: u8) -> Self {
        Self { octets: [a, b, c] }
    }

    /// The prefix of the `/24` network containing `addr`.
    pub fn from_addr(addr: Ipv4Addr) -> Self {
        let [a, b, c, _] = addr.octets();
        Self { octets: [a, b, c] }
    }

    /// The candidate host at `.host_octet`.
    pub fn host(&self, host_octet: u8) -> Ipv4Addr {
        let [a, b, c] = self.octets;
        Ipv4Addr::new(a, b, c, host_octet)
    }

    /// All candidate hosts, `.1` to `.254`, in sweep order.
    pub fn hosts(&self) -> impl Iterator<Item = Ipv4Addr> + '_ {
        (1..=254u8).map(|octet| self.host(octet))
    }
}

impl fmt::Display for SubnetPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.octets;
        write!(f, "{a}.{b}.{c}")
    }
}

impl FromStr for SubnetPrefix {
    type Err = String;

    /// Parses `"192.168.1"` (three octets) or a full address, whose host
    /// octet is discarded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(addr) = s.parse::<Ipv4Addr>() {
            return Ok(Self::from_addr(addr));
        }

        let octets: Vec<u8> = s
            .split('.')
            .map(|part| part.trim().parse::<u8>())
            .collect::<Result<Vec<u8>, _>>()
            .map_err(|e| format!("invalid subnet prefix '{s}': {e}"))?;

        match octets.as_slice() {
            [a, b, c] => Ok(Self::new(*a, *b, *c)),
            _ => Err(format!(
                "invalid subnet prefix '{s}': expected three octets"
            )),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_derives_from_site_local_addr() {
        let prefix = SubnetPrefix::from_addr(Ipv4Addr::new(192, 168, 1, 42));
        assert_eq!(prefix.to_string(), "192.168.1");
        assert_eq!(prefix.host(5), Ipv4Addr::new(192, 168, 1, 5));
    }

    #[test]
    fn sweep_covers_exactly_254_hosts() {
        let prefix = SubnetPrefix::new(10, 0, 0);
        let hosts: Vec<Ipv4Addr> = prefix.hosts().collect();
        assert_eq!(hosts.len(), SubnetPrefix::HOST_COUNT);
        assert_eq!(hosts[0], Ipv4Addr::new(10, 0, 0, 1));
        assert_eq!(hosts[253], Ipv4Addr::new(10, 0, 0, 254));
    }

    #[test]
    fn parses_three_octets_and_full_addresses() {
        assert_eq!(
            "192.168.1".parse::<SubnetPrefix>(),
            Ok(SubnetPrefix::new(192, 168, 1))
        );
        assert_eq!(
            "10.0.0.17".parse::<SubnetPrefix>(),
            Ok(SubnetPrefix::new(10, 0, 0))
        );
    }

    #[test]
    fn rejects_malformed_prefixes() {
        assert!("192.168".parse::<SubnetPrefix>().is_err());
        assert!("192.168.1.2.3".parse::<SubnetPrefix>().is_err());
        assert!("192.abc.1".parse::<SubnetPrefix>().is_err());
        assert!("".parse::<SubnetPrefix>().is_err());
    }
}
