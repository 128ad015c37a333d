use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// A steady-tick spinner for one-shot waits (Wi-Fi listing, feed checks,
/// the speed test).
pub fn start(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap()
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]);

    pb.set_style(style);
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// The sweep progress bar: one tick per candidate host, rendered as a
/// percentage so progress stays monotonic and obvious.
pub fn sweep_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::with_template(
        "{spinner:.blue} [{bar:32.green/white}] {percent:>3}% {msg}",
    )
    .unwrap()
    .progress_chars("█▓░");

    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
