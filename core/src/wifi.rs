//! # Platform Wi-Fi Scan
//!
//! The one-shot Wi-Fi listing behind the [`WifiScanner`] port trait. The
//! shipped adapter shells out to `wpa_cli`, which works unprivileged on
//! most Linux setups; the scan resolves exactly once per call and owns the
//! child process lifetime, with no ambient receivers to unregister.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;

use toolbelt_common::network::wifi::WifiNetwork;

/// Settle time between triggering the scan and reading results.
const SCAN_SETTLE: Duration = Duration::from_millis(2500);

#[derive(Debug, Error)]
pub enum WifiError {
    #[error("wpa_cli could not be run: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("WiFi scanning unavailable: {reason}")]
    Unavailable { reason: String },
}

/// A platform Wi-Fi scan, resolved once per call.
#[async_trait]
pub trait WifiScanner: Send + Sync {
    async fn scan(&self) -> Result<Vec<WifiNetwork>, WifiError>;
}

/// `wpa_cli`-backed scanner.
#[derive(Debug, Default)]
pub struct WpaCliScanner {
    /// Restrict to a specific interface, e.g. `wlan0`.
    pub interface: Option<String>,
}

impl WpaCliScanner {
    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new("wpa_cli");
        if let Some(interface) = &self.interface {
            cmd.arg("-i").arg(interface);
        }
        cmd.args(args);
        cmd
    }
}

#[async_trait]
impl WifiScanner for WpaCliScanner {
    async fn scan(&self) -> Result<Vec<WifiNetwork>, WifiError> {
        let trigger = self.command(&["scan"]).output().await?;
        if !trigger.status.success() {
            return Err(WifiError::Unavailable {
                reason: String::from_utf8_lossy(&trigger.stderr).trim().to_string(),
            });
        }

        tokio::time::sleep(SCAN_SETTLE).await;

        let results = self.command(&["scan_results"]).output().await?;
        if !results.status.success() {
            return Err(WifiError::Unavailable {
                reason: String::from_utf8_lossy(&results.stderr).trim().to_string(),
            });
        }

        Ok(parse_scan_results(&String::from_utf8_lossy(
            &results.stdout,
        )))
    }
}

/// Parses `wpa_cli scan_results` output: a header line followed by
/// tab-separated `bssid / frequency / signal level / flags / ssid` rows.
/// Hidden networks (empty or null SSID) are kept, with an empty name.
fn parse_scan_results(output: &str) -> Vec<WifiNetwork> {
    let mut networks = Vec::new();
    for line in output.lines().skip(1) {
        let parts: Vec<&str> = line.split('\t').collect();
        if parts.len() < 4 {
            continue;
        }

        let signal = parts[2].parse::<i16>().ok();
        let ssid = parts.get(4).copied().unwrap_or("");
        let ssid = if ssid == "\\x00" { "" } else { ssid };

        networks.push(WifiNetwork {
            bssid: parts[0].to_string(),
            ssid: ssid.to_string(),
            signal,
            capabilities: parts[3].to_string(),
        });
    }
    networks
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
    use toolbelt_common::network::wifi::WifiSecurity;

    const SAMPLE: &str = "\
bssid / frequency / signal level / flags / ssid
aa:bb:cc:dd:ee:01\t2412\t-45\t[WPA2-PSK-CCMP][ESS]\tattic
aa:bb:cc:dd:ee:02\t5180\t-62\t[ESS]\tcoffeehouse
aa:bb:cc:dd:ee:03\t2437\t-71\t[WPA3-SAE-CCMP][ESS]\t\\x00
aa:bb:cc:dd:ee:04\t2462\t-80\t[WPA-PSK-TKIP][ESS]";

    #[test]
    fn parses_the_scan_results_table() {
        let networks = parse_scan_results(SAMPLE);
        assert_eq!(networks.len(), 4);

        assert_eq!(networks[0].bssid, "aa:bb:cc:dd:ee:01");
        assert_eq!(networks[0].ssid, "attic");
        assert_eq!(networks[0].signal, Some(-45));
        assert_eq!(networks[0].security(), WifiSecurity::Wpa2);

        assert_eq!(networks[1].security(), WifiSecurity::Open);
    }

    #[test]
    fn hidden_networks_are_kept_with_empty_names() {
        let networks = parse_scan_results(SAMPLE);
        assert_eq!(networks[2].ssid, "");
        assert_eq!(networks[2].security(), WifiSecurity::Wpa3);
        // Row without the trailing SSID column at all.
        assert_eq!(networks[3].ssid, "");
        assert_eq!(networks[3].security(), WifiSecurity::WpaLegacy);
    }

    #[test]
    fn garbage_lines_are_skipped() {
        let networks = parse_scan_results("header\nnot-a-row\n\n");
        assert!(networks.is_empty());
    }
}
