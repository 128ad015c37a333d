//! # Local Interface Discovery
//!
//! Finds the active site-local IPv4 address and derives the `/24` prefix
//! the sweep walks. Interfaces are filtered for viability first: up, not
//! loopback, not a point-to-point link, carrying a private IPv4 address.

use pnet::datalink::NetworkInterface;
use pnet::ipnetwork::IpNetwork;
use std::net::Ipv4Addr;
use thiserror::Error;

use crate::info;
use crate::network::prefix::SubnetPrefix;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
pub enum ViabilityError {
    /// The interface is operationally down.
    #[error("interface is down")]
    IsDown,
    /// The interface is the loopback device.
    #[error("interface is loopback")]
    IsLoopback,
    /// The interface is a point-to-point link (e.g., a VPN).
    #[error("interface is a point-to-point link")]
    IsPointToPoint,
    /// The interface has no site-local IPv4 address.
    #[error("interface has no site-local IPv4 address")]
    NoSiteLocalIp,
}

/// The device's assigned site-local IPv4 address, if any.
pub fn site_local_addr() -> Option<Ipv4Addr> {
    select_site_local_addr(pnet::datalink::interfaces())
}

/// Derives the local `/24` prefix, or errors when no site-local address is
/// assigned. The caller skips the scan and reports this.
pub fn local_prefix() -> anyhow::Result<SubnetPrefix> {
    match site_local_addr() {
        Some(addr) => {
            let prefix = SubnetPrefix::from_addr(addr);
            info!("Derived local subnet {prefix}.x from {addr}");
            Ok(prefix)
        }
        None => anyhow::bail!("no site-local IPv4 address on any active interface"),
    }
}

fn select_site_local_addr(interfaces: Vec<NetworkInterface>) -> Option<Ipv4Addr> {
    interfaces
        .into_iter()
        .filter(|interface| is_viable_interface(interface).is_ok())
        .find_map(|interface| private_v4(&interface))
}

fn is_viable_interface(interface: &NetworkInterface) -> Result<(), ViabilityError> {
    if !interface.is_up() {
        return Err(ViabilityError::IsDown);
    }
    if interface.is_loopback() {
        return Err(ViabilityError::IsLoopback);
    }
    if interface.is_point_to_point() {
        return Err(ViabilityError::IsPointToPoint);
    }
    if private_v4(interface).is_none() {
        return Err(ViabilityError::NoSiteLocalIp);
    }
    Ok(())
}

fn private_v4(interface: &NetworkInterface) -> Option<Ipv4Addr> {
    interface.ips.iter().find_map(|net| match net {
        IpNetwork::V4(v4) if v4.ip().is_private() => Some(v4.ip()),
        _ => None,
    })
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
    use pnet::ipnetwork::IpNetwork;
    use pnet::util::MacAddr;

    const IFF_UP: u32 = 1;
    const IFF_BROADCAST: u32 = 1 << 1;
    const IFF_LOOPBACK: u32 = 1 << 3;
    const IFF_POINTTOPOINT: u32 = 1 << 4;

    fn create_mock_interface(name: &str, ips: Vec<IpNetwork>, flags: u32) -> NetworkInterface {
        NetworkInterface {
            name: name.to_string(),
            description: "An interface".to_string(),
            index: 0,
            mac: Some(MacAddr(0x1, 0x2, 0x3, 0x4, 0x5, 0x6)),
            ips,
            flags,
        }
    }

    fn private_ips() -> Vec<IpNetwork> {
        vec![IpNetwork::V4("192.168.1.100/24".parse().unwrap())]
    }

    #[test]
    fn viable_interface_passes_every_check() {
        let interface = create_mock_interface("eth0", private_ips(), IFF_UP | IFF_BROADCAST);
        assert_eq!(is_viable_interface(&interface), Ok(()));
    }

    #[test]
    fn down_interface_is_rejected() {
        let interface = create_mock_interface("eth0", private_ips(), IFF_BROADCAST);
        assert_eq!(is_viable_interface(&interface), Err(ViabilityError::IsDown));
    }

    #[test]
    fn loopback_is_rejected() {
        let ips = vec![IpNetwork::V4("127.0.0.1/8".parse().unwrap())];
        let interface = create_mock_interface("lo", ips, IFF_UP | IFF_LOOPBACK);
        assert_eq!(
            is_viable_interface(&interface),
            Err(ViabilityError::IsLoopback)
        );
    }

    #[test]
    fn point_to_point_link_is_rejected() {
        let interface =
            create_mock_interface("tun0", private_ips(), IFF_UP | IFF_POINTTOPOINT);
        assert_eq!(
            is_viable_interface(&interface),
            Err(ViabilityError::IsPointToPoint)
        );
    }

    #[test]
    fn public_only_interface_is_rejected() {
        let ips = vec![IpNetwork::V4("203.0.113.7/24".parse().unwrap())];
        let interface = create_mock_interface("eth0", ips, IFF_UP | IFF_BROADCAST);
        assert_eq!(
            is_viable_interface(&interface),
            Err(ViabilityError::NoSiteLocalIp)
        );
    }

    #[test]
    fn selection_skips_nonviable_interfaces() {
        let loopback = create_mock_interface(
            "lo",
            vec![IpNetwork::V4("127.0.0.1/8".parse().unwrap())],
            IFF_UP | IFF_LOOPBACK,
        );
        let lan = create_mock_interface("wlan0", private_ips(), IFF_UP | IFF_BROADCAST);
        let selected = select_site_local_addr(vec![loopback, lan]);
        assert_eq!(selected, Some(Ipv4Addr::new(192, 168, 1, 100)));
    }

    #[test]
    fn selection_yields_none_without_site_local_addr() {
        let ips = vec![IpNetwork::V4("198.51.100.4/24".parse().unwrap())];
        let public_only = create_mock_interface("eth0", ips, IFF_UP | IFF_BROADCAST);
        assert_eq!(select_site_local_addr(vec![public_only]), None);
    }
}
