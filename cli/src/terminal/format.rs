use crate::terminal::colors;
use colored::*;
use toolbelt_common::network::device::{DeviceStatus, ScannedDevice};
use toolbelt_common::tools::Tool;

pub type Detail = (String, ColoredString);

/// Title line for a scan result entry.
pub fn device_title(device: &ScannedDevice) -> String {
    if device.is_wifi {
        format!("⌔ WiFi: {}", device.display_name())
    } else {
        format!("⌂ Device: {}", device.addr)
    }
}

pub fn status_to_detail(device: &ScannedDevice) -> Detail {
    let value: ColoredString = match device.status {
        DeviceStatus::Secure => device.status.to_string().color(colors::SAFE),
        DeviceStatus::IssuesFound => device.status.to_string().color(colors::RISK).bold(),
        DeviceStatus::Scanning | DeviceStatus::WifiSignal => {
            device.status.to_string().color(colors::TEXT_DEFAULT)
        }
    };
    ("Status".to_string(), value)
}

pub fn findings_to_detail(device: &ScannedDevice) -> Option<Detail> {
    if device.findings.is_empty() {
        return None;
    }
    let joined: String = device.findings.join(", ");
    Some(("Findings".to_string(), joined.color(colors::RISK)))
}

pub fn analysis_to_detail(device: &ScannedDevice) -> Option<Detail> {
    device
        .analysis
        .as_deref()
        .map(|analysis| ("Analysis".to_string(), analysis.italic().dimmed()))
}

/// All detail rows for one device, in display order.
pub fn device_details(device: &ScannedDevice) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![status_to_detail(device)];
    if device.is_wifi {
        details.push(("BSSID".to_string(), device.addr.normal()));
    }
    if let Some(findings) = findings_to_detail(device) {
        details.push(findings);
    }
    if let Some(analysis) = analysis_to_detail(device) {
        details.push(analysis);
    }
    details
}

/// One rendered tile: fixed-width box with glyph, name and version.
pub fn tile_lines(tool: &Tool, position: usize, width: usize) -> Vec<String> {
    let inner: usize = width.saturating_sub(2);
    let (r, g, b) = tool.accent;

    let pad = |text: &str| -> String {
        " ".repeat(
            inner
                .saturating_sub(2)
                .saturating_sub(console::measure_text_width(text)),
        )
    };

    let top: String = format!("╭{}╮", "─".repeat(inner));
    let label: String = clip(&format!("{} {}", tool.icon, tool.name), inner - 2);
    let name_row: String = format!("│ {}{} │", label.truecolor(r, g, b).bold(), pad(&label));
    let meta: String = clip(&format!("#{position} · v{}", tool.version), inner - 2);
    let meta_row: String = format!("│ {}{} │", meta.color(colors::SEPARATOR), pad(&meta));
    let bottom: String = format!("╰{}╯", "─".repeat(inner));

    vec![top, name_row, meta_row, bottom]
}

fn clip(text: &str, max: usize) -> String {
    if console::measure_text_width(text) <= max {
        return text.to_string();
    }
    let mut clipped = String::new();
    for c in text.chars() {
        if console::measure_text_width(&clipped) + 2 > max {
            break;
        }
        clipped.push(c);
    }
    clipped.push('…');
    clipped
}
