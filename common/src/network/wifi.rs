//! # Wi-Fi Security Classification
//!
//! Classifies visible access points by their advertised capability tokens.
//! Precedence is strongest-first: a beacon advertising both WPA2 and WPA
//! counts as WPA2.

use std::fmt;

/// Finding attached to access points that accept unauthenticated clients.
pub const OPEN_NETWORK_FINDING: &str = "Security Risk: Open WiFi (No Password)";

/// Advertised security of an access point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WifiSecurity {
    Wpa3,
    Wpa2,
    WpaLegacy,
    Open,
}

impl WifiSecurity {
    /// Classifies a raw capability string such as
    /// `[WPA2-PSK-CCMP][ESS]`. Anything without a WPA token, WEP
    /// included, counts as open.
    pub fn classify(capabilities: &str) -> Self {
        if capabilities.contains("WPA3") {
            WifiSecurity::Wpa3
        } else if capabilities.contains("WPA2") {
            WifiSecurity::Wpa2
        } else if capabilities.contains("WPA") {
            WifiSecurity::WpaLegacy
        } else {
            WifiSecurity::Open
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, WifiSecurity::Open)
    }
}

impl fmt::Display for WifiSecurity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WifiSecurity::Wpa3 => "WPA3 (Secure)",
            WifiSecurity::Wpa2 => "WPA2",
            WifiSecurity::WpaLegacy => "WPA (Legacy)",
            WifiSecurity::Open => "Open",
        };
        write!(f, "{label}")
    }
}

/// One access point as reported by the platform scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiNetwork {
    pub bssid: String,
    /// Empty for hidden networks.
    pub ssid: String,
    /// Signal level in dBm, when the platform reports one.
    pub signal: Option<i16>,
    /// Raw capability flags, e.g. `[WPA2-PSK-CCMP][ESS]`.
    pub capabilities: String,
}

impl WifiNetwork {
    pub fn security(&self) -> WifiSecurity {
        WifiSecurity::classify(&self.capabilities)
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
