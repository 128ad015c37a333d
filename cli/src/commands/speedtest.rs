//! Downstream bandwidth measurement.

use colored::*;

use toolbelt_core::speedtest;

use crate::terminal::{colors, print, spinner};

pub async fn speedtest() -> anyhow::Result<()> {
    print::header("speed test");

    let wait = spinner::start("Measuring download speed...");
    let result = speedtest::measure_download().await;
    wait.finish_and_clear();

    match result {
        Ok(result) => {
            let rate: ColoredString = format!("{:.2} Mbps", result.mbps()).bold().green();
            print::aligned_line("Download", 8, rate);
            print::aligned_line(
                "Sample",
                8,
                format!(
                    "{} KB in {:.2}s",
                    result.bytes / 1000,
                    result.elapsed.as_secs_f64()
                ),
            );
        }
        Err(e) => {
            print::aligned_line("Download", 8, "Error".color(colors::RISK).bold());
            print::aligned_line("Detail", 8, e.to_string().color(colors::SEPARATOR));
        }
    }

    print::end_of_program();
    Ok(())
}
