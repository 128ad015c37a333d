#![cfg(test)]

use std::collections::{HashMap, HashSet};
use std::net::Ipv4Addr;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;

use toolbelt_common::network::device::{DeviceStatus, ScannedDevice};
use toolbelt_common::network::prefix::SubnetPrefix;
use toolbelt_core::scanner::probe::{ConnectProber, Prober};
use toolbelt_core::scanner::{ScanEngine, ScanEvent};

struct TableProber {
    reachable: HashSet<Ipv4Addr>,
    open_ports: HashMap<Ipv4Addr, Vec<u16>>,
}

#[async_trait]
impl Prober for TableProber {
    async fn is_reachable(&self, addr: Ipv4Addr) -> bool {
        self.reachable.contains(&addr)
    }

    async fn is_port_open(&self, addr: Ipv4Addr, port: u16) -> bool {
        self.open_ports
            .get(&addr)
            .is_some_and(|ports| ports.contains(&port))
    }
}

/// Replays the engine's event stream the way the UI consumer does: a single
/// writer folding events into the displayed list.
async fn fold_events(mut rx: mpsc::UnboundedReceiver<ScanEvent>) -> Vec<ScannedDevice> {
    let mut devices: Vec<ScannedDevice> = Vec::new();
    while let Some(event) = rx.recv().await {
        match event {
            ScanEvent::HostFound { device } => devices.push(device),
            ScanEvent::WifiFound { device } => devices.insert(0, device),
            ScanEvent::DeviceUpdated { device } => {
                if let Some(existing) = devices.iter_mut().find(|d| d.addr == device.addr) {
                    *existing = device;
                }
            }
            ScanEvent::AnalysisReady { addr, analysis } => {
                if let Some(existing) = devices.iter_mut().find(|d| d.addr == addr) {
                    existing.analysis = Some(analysis);
                }
            }
            ScanEvent::Finished { .. } => break,
            _ => {}
        }
    }
    devices
}

/// The reference scenario: only `.5` answers, with SSH exposed.
#[tokio::test]
async fn single_reachable_host_with_ssh_open() {
    let host = Ipv4Addr::new(192, 168, 1, 5);
    let prober = TableProber {
        reachable: HashSet::from([host]),
        open_ports: HashMap::from([(host, vec![22])]),
    };

    let engine = ScanEngine::new(Arc::new(prober));
    let prefix: SubnetPrefix = "192.168.1".parse().unwrap();
    let devices = fold_events(engine.start(prefix)).await;

    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0].addr, "192.168.1.5");
    assert_eq!(devices[0].findings, vec!["Port 22 (SSH)".to_string()]);
    assert_eq!(devices[0].status, DeviceStatus::IssuesFound);
    assert!(!devices[0].is_wifi);
}

#[tokio::test]
async fn quiet_subnet_yields_an_empty_list() {
    let prober = TableProber {
        reachable: HashSet::new(),
        open_ports: HashMap::new(),
    };
    let engine = ScanEngine::new(Arc::new(prober));
    let devices = fold_events(engine.start("10.0.0".parse().unwrap())).await;
    assert!(devices.is_empty());
}

/// Loopback answers its own reachability probe: a refused connection still
/// proves the host. Uses the real prober end to end.
#[tokio::test]
async fn real_prober_reaches_loopback() {
    let prober = ConnectProber::default();
    assert!(prober.is_reachable(Ipv4Addr::LOCALHOST).await);
}

#[tokio::test]
async fn real_prober_detects_a_listening_port() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let prober = ConnectProber::default();
    assert!(prober.is_port_open(Ipv4Addr::LOCALHOST, port).await);

    drop(listener);
    assert!(!prober.is_port_open(Ipv4Addr::LOCALHOST, port).await);
}
