//! # Scan Engine
//!
//! Orchestrates the full scan workflow: the one-shot Wi-Fi listing, the
//! sequential `/24` reachability sweep, per-host port probing and the
//! optional remote analysis dispatch.
//!
//! The engine runs as a single spawned task and reports through a stream of
//! [`ScanEvent`]s; the consumer on the other end is the only writer to the
//! displayed result list. A dropped consumer never aborts the scan: sends
//! are fire-and-forget and the pass runs to completion.

pub mod probe;

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use toolbelt_common::network::device::ScannedDevice;
use toolbelt_common::network::prefix::SubnetPrefix;
use toolbelt_common::network::wifi::OPEN_NETWORK_FINDING;

use crate::analysis::Analyst;
use crate::scanner::probe::{PROBED_PORTS, Prober};
use crate::wifi::WifiScanner;

/// Progress and result notifications emitted during a scan.
#[derive(Debug, Clone)]
pub enum ScanEvent {
    /// The sweep prefix has been resolved.
    SubnetResolved { prefix: SubnetPrefix },
    /// One more candidate host has been tried. `scanned` is monotonic and
    /// ends at `total`.
    SweepProgress { scanned: usize, total: usize },
    /// A reachable host was appended to the results.
    HostFound { device: ScannedDevice },
    /// A visible access point; belongs at the head of the results.
    WifiFound { device: ScannedDevice },
    /// An existing entry finished port probing; replaces the entry with the
    /// same address.
    DeviceUpdated { device: ScannedDevice },
    /// Narrative text arrived for the entry with this address.
    AnalysisReady { addr: String, analysis: String },
    /// A non-fatal problem (e.g. the Wi-Fi pass was unavailable).
    Error { message: String },
    /// The scan ran to completion.
    Finished { devices_found: usize },
}

/// The scan workflow with its collaborators plugged in.
pub struct ScanEngine {
    prober: Arc<dyn Prober>,
    wifi: Option<Arc<dyn WifiScanner>>,
    analyst: Option<Arc<dyn Analyst>>,
}

impl ScanEngine {
    pub fn new(prober: Arc<dyn Prober>) -> Self {
        Self {
            prober,
            wifi: None,
            analyst: None,
        }
    }

    /// Enables the Wi-Fi listing pass.
    pub fn with_wifi(mut self, wifi: Arc<dyn WifiScanner>) -> Self {
        self.wifi = Some(wifi);
        self
    }

    /// Enables remote analysis of non-empty findings.
    pub fn with_analyst(mut self, analyst: Arc<dyn Analyst>) -> Self {
        self.analyst = Some(analyst);
        self
    }

    /// Spawns the scan task and hands back the event stream. One scan per
    /// engine; the task owns the engine for its lifetime.
    pub fn start(self, prefix: SubnetPrefix) -> mpsc::UnboundedReceiver<ScanEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(async move {
            self.run(prefix, tx).await;
        });
        rx
    }

    /// Runs the whole workflow on the current task. Exposed for tests and
    /// embedders that want to control scheduling themselves.
    pub async fn run(self, prefix: SubnetPrefix, tx: mpsc::UnboundedSender<ScanEvent>) {
        let mut devices_found: usize = 0;

        self.wifi_pass(&tx, &mut devices_found).await;

        emit(&tx, ScanEvent::SubnetResolved { prefix });
        let total = SubnetPrefix::HOST_COUNT;

        for (index, addr) in prefix.hosts().enumerate() {
            if self.prober.is_reachable(addr).await {
                debug!("host {addr} answered the reachability probe");
                let device = ScannedDevice::host(addr);
                devices_found += 1;
                emit(&tx, ScanEvent::HostFound {
                    device: device.clone(),
                });
                self.probe_ports(device, &tx).await;
            }
            emit(&tx, ScanEvent::SweepProgress {
                scanned: index + 1,
                total,
            });
        }

        emit(&tx, ScanEvent::Finished { devices_found });
    }

    /// The one-shot Wi-Fi listing. Resolves exactly once before the sweep;
    /// failure is reported and never blocks the rest of the scan.
    async fn wifi_pass(&self, tx: &mpsc::UnboundedSender<ScanEvent>, devices_found: &mut usize) {
        let Some(wifi) = &self.wifi else {
            return;
        };

        let networks = match wifi.scan().await {
            Ok(networks) => networks,
            Err(e) => {
                emit(tx, ScanEvent::Error {
                    message: format!("WiFi scan unavailable: {e}"),
                });
                return;
            }
        };

        for network in networks {
            let security = network.security();
            let ssid = if network.ssid.is_empty() {
                None
            } else {
                Some(network.ssid.clone())
            };
            let mut device = ScannedDevice::wifi(network.bssid.clone(), ssid);
            if security.is_open() {
                device.record_finding(OPEN_NETWORK_FINDING.to_string());
            }
            *devices_found += 1;
            emit(tx, ScanEvent::WifiFound {
                device: device.clone(),
            });
            self.dispatch_analysis(&device, vec![format!("WiFi Security: {security}")], tx)
                .await;
        }
    }

    /// Tries every port of interest against a reachable host, settles its
    /// status and forwards non-empty findings to the analysis step.
    async fn probe_ports(&self, mut device: ScannedDevice, tx: &mpsc::UnboundedSender<ScanEvent>) {
        let addr = match device.addr.parse() {
            Ok(addr) => addr,
            Err(_) => return,
        };

        let mut open_ports: Vec<String> = Vec::new();
        for (port, label) in PROBED_PORTS {
            if self.prober.is_port_open(addr, port).await {
                device.record_finding(format!("Port {port} ({label})"));
                open_ports.push(format!("{port} ({label})"));
            }
        }

        device.finalize_status();
        emit(tx, ScanEvent::DeviceUpdated {
            device: device.clone(),
        });

        if !open_ports.is_empty() {
            self.dispatch_analysis(&device, open_ports, tx).await;
        }
    }

    /// Sends findings to the analyst, if one is plugged in. Failures attach
    /// as inline text; the scan itself is never affected.
    async fn dispatch_analysis(
        &self,
        device: &ScannedDevice,
        findings: Vec<String>,
        tx: &mpsc::UnboundedSender<ScanEvent>,
    ) {
        let Some(analyst) = &self.analyst else {
            return;
        };

        let analysis = match analyst.analyze(&device.addr, &findings).await {
            Ok(text) => text,
            Err(e) => format!("AI analysis error: {e}"),
        };

        emit(tx, ScanEvent::AnalysisReady {
            addr: device.addr.clone(),
            analysis,
        });
    }
}

/// The consumer may be gone; the scan still runs to completion.
fn emit(tx: &mpsc::UnboundedSender<ScanEvent>, event: ScanEvent) {
    let _ = tx.send(event);
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
