//! The network scan command: drives the engine and renders its event
//! stream. This consumer is the only writer to the displayed device list.

use std::sync::Arc;
use std::time::{Duration, Instant};

use colored::*;
use indicatif::ProgressBar;

use toolbelt_common::config::Settings;
use toolbelt_common::network::device::ScannedDevice;
use toolbelt_common::network::interface;
use toolbelt_common::network::prefix::SubnetPrefix;
use toolbelt_common::warn;
use toolbelt_core::analysis::GeminiAnalyst;
use toolbelt_core::scanner::probe::ConnectProber;
use toolbelt_core::scanner::{ScanEngine, ScanEvent};
use toolbelt_core::wifi::WpaCliScanner;

use crate::terminal::{colors, format, print, spinner};
use crate::tprint;

pub async fn scan(
    prefix: Option<SubnetPrefix>,
    no_wifi: bool,
    cfg: &Settings,
) -> anyhow::Result<()> {
    let prefix: SubnetPrefix = match prefix {
        Some(prefix) => prefix,
        None => interface::local_prefix()?,
    };

    print::header("net scanner");
    print::print_status(format!("Scanning subnet {prefix}.x ..."));

    let mut engine = ScanEngine::new(Arc::new(ConnectProber::default()));
    if !no_wifi {
        engine = engine.with_wifi(Arc::new(WpaCliScanner::default()));
    }
    if cfg.ai_analysis {
        if let Some(api_key) = cfg.api_key() {
            engine = engine.with_analyst(Arc::new(GeminiAnalyst::new(api_key)));
        }
    }

    let start_time: Instant = Instant::now();
    let mut rx = engine.start(prefix);

    let mut devices: Vec<ScannedDevice> = Vec::new();
    let bar: ProgressBar = spinner::sweep_bar(SubnetPrefix::HOST_COUNT as u64);
    bar.set_message("sweeping hosts");

    while let Some(event) = rx.recv().await {
        match event {
            ScanEvent::SubnetResolved { prefix } => {
                bar.set_message(format!("sweeping {prefix}.1-254"));
            }
            ScanEvent::SweepProgress { scanned, .. } => {
                bar.set_position(scanned as u64);
            }
            ScanEvent::HostFound { device } => {
                bar.println(format!(
                    "  {} {}",
                    "+".color(colors::PRIMARY),
                    format::device_title(&device)
                ));
                devices.push(device);
            }
            ScanEvent::WifiFound { device } => {
                bar.println(format!(
                    "  {} {}",
                    "+".color(colors::ACCENT),
                    format::device_title(&device)
                ));
                devices.insert(0, device);
            }
            ScanEvent::DeviceUpdated { device } => {
                replace_device(&mut devices, device);
            }
            ScanEvent::AnalysisReady { addr, analysis } => {
                if let Some(device) = devices.iter_mut().find(|device| device.addr == addr) {
                    device.analysis = Some(analysis);
                }
            }
            ScanEvent::Error { message } => {
                warn!("{}", message);
            }
            ScanEvent::Finished { .. } => break,
        }
    }

    bar.finish_and_clear();
    scan_ends(&devices, start_time.elapsed());
    Ok(())
}

fn replace_device(devices: &mut [ScannedDevice], updated: ScannedDevice) {
    if let Some(existing) = devices.iter_mut().find(|device| device.addr == updated.addr) {
        *existing = updated;
    }
}

fn scan_ends(devices: &[ScannedDevice], total_time: Duration) {
    if devices.is_empty() {
        no_devices_found();
        return;
    }

    print::header("scan results");
    print_devices(devices);
    print_summary(devices.len(), total_time);
}

fn no_devices_found() {
    print::header("zero devices detected");
    print::no_results();
    print::end_of_program();
}

fn print_devices(devices: &[ScannedDevice]) {
    for (idx, device) in devices.iter().enumerate() {
        print::tree_head(idx, &format::device_title(device));
        print::as_tree_one_level(format::device_details(device));
        if idx + 1 != devices.len() {
            tprint!();
        }
    }
}

fn print_summary(device_count: usize, total_time: Duration) {
    let found: ColoredString = format!("{device_count} items").bold().green();
    let elapsed: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: ColoredString =
        format!("Scan complete: {found} found in {elapsed}").color(colors::TEXT_DEFAULT);

    print::fat_separator();
    print::centerln(&output.to_string());
    print::end_of_program();
}
