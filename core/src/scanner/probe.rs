//! # Reachability & Port Probes
//!
//! Low-level connect probes behind the [`Prober`] trait so the scan engine
//! can be driven by fakes in tests.
//!
//! Reachability and port probing read the same syscall differently: for
//! reachability a refused connection still proves a live host (the RST had
//! a sender), while for a port probe only an accepted connection counts.

use std::net::{Ipv4Addr, SocketAddrV4};
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Ports of interest with their report labels.
///
/// A heuristic, fixed table. This is a best-effort household check, not a
/// full port scanner.
pub const PROBED_PORTS: [(u16, &str); 7] = [
    (21, "FTP (Plaintext)"),
    (22, "SSH"),
    (23, "Telnet (Unsecure)"),
    (80, "HTTP"),
    (443, "HTTPS"),
    (445, "SMB (Samba)"),
    (3389, "RDP"),
];

/// Port used for the reachability handshake.
const REACH_PROBE_PORT: u16 = 443;

pub const REACH_TIMEOUT: Duration = Duration::from_millis(300);
pub const PORT_TIMEOUT: Duration = Duration::from_millis(150);

/// Connect-level probes the sweep is built on.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Whether anything answers at `addr` within the probe timeout.
    async fn is_reachable(&self, addr: Ipv4Addr) -> bool;

    /// Whether `addr:port` accepts a TCP connection within the timeout.
    async fn is_port_open(&self, addr: Ipv4Addr, port: u16) -> bool;
}

/// The shipped prober: plain TCP connects, no privileges required.
#[derive(Debug, Clone)]
pub struct ConnectProber {
    reach_timeout: Duration,
    port_timeout: Duration,
}

impl ConnectProber {
    pub fn new(reach_timeout: Duration, port_timeout: Duration) -> Self {
        Self {
            reach_timeout,
            port_timeout,
        }
    }
}

impl Default for ConnectProber {
    fn default() -> Self {
        Self::new(REACH_TIMEOUT, PORT_TIMEOUT)
    }
}

#[async_trait]
impl Prober for ConnectProber {
    async fn is_reachable(&self, addr: Ipv4Addr) -> bool {
        let sa = SocketAddrV4::new(addr, REACH_PROBE_PORT);
        match timeout(self.reach_timeout, TcpStream::connect(sa)).await {
            // Accepted or refused: something answered.
            Ok(Ok(_)) | Ok(Err(_)) => true,
            Err(_elapsed) => false,
        }
    }

    async fn is_port_open(&self, addr: Ipv4Addr, port: u16) -> bool {
        let sa = SocketAddrV4::new(addr, port);
        matches!(
            timeout(self.port_timeout, TcpStream::connect(sa)).await,
            Ok(Ok(_))
        )
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
