//! # Scan Result Model
//!
//! One row in the scan results: either a local subnet host or a Wi-Fi
//! access point. Entries are created when a probe answers, grow findings
//! during the pass, and are discarded wholesale when the next scan starts.

use std::fmt;
use std::net::Ipv4Addr;

/// Lifecycle state of a scanned entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceStatus {
    /// Probing is still in progress.
    Scanning,
    /// All probed ports refused or timed out.
    Secure,
    /// At least one probed port accepted a connection.
    IssuesFound,
    /// The entry is a Wi-Fi access point, not a probed host.
    WifiSignal,
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DeviceStatus::Scanning => "Scanning...",
            DeviceStatus::Secure => "Secure",
            DeviceStatus::IssuesFound => "Potential Issues Found",
            DeviceStatus::WifiSignal => "WiFi Signal Found",
        };
        write!(f, "{label}")
    }
}

/// One discovered entity in the scan results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedDevice {
    /// IP address for subnet hosts, BSSID for Wi-Fi entries.
    pub addr: String,
    /// Network name, for Wi-Fi entries that advertise one.
    pub ssid: Option<String>,
    pub status: DeviceStatus,
    /// Human-readable notes. Only ever grows during a scan pass.
    pub findings: Vec<String>,
    /// Narrative attached by the remote analysis service.
    pub analysis: Option<String>,
    pub is_wifi: bool,
}

impl ScannedDevice {
    /// A subnet host that answered the reachability probe.
    pub fn host(addr: Ipv4Addr) -> Self {
        Self {
            addr: addr.to_string(),
            ssid: None,
            status: DeviceStatus::Scanning,
            findings: Vec::new(),
            analysis: None,
            is_wifi: false,
        }
    }

    /// A visible Wi-Fi access point.
    pub fn wifi(bssid: impl Into<String>, ssid: Option<String>) -> Self {
        Self {
            addr: bssid.into(),
            ssid,
            status: DeviceStatus::WifiSignal,
            findings: Vec::new(),
            analysis: None,
            is_wifi: true,
        }
    }

    pub fn record_finding(&mut self, finding: String) {
        self.findings.push(finding);
    }

    /// Settles the status once every port has been tried.
    pub fn finalize_status(&mut self) {
        self.status = if self.findings.is_empty() {
            DeviceStatus::Secure
        } else {
            DeviceStatus::IssuesFound
        };
    }

    /// Display name: SSID for Wi-Fi (hidden networks get a placeholder),
    /// the address otherwise.
    pub fn display_name(&self) -> &str {
        if self.is_wifi {
            match self.ssid.as_deref() {
                Some(ssid) if !ssid.is_empty() => ssid,
                _ => "Hidden Network",
            }
        } else {
            &self.addr
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
