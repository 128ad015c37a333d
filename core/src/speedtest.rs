//! # Downstream Speed Test
//!
//! Streams a fixed-size download and reports the measured rate. Strictly
//! best-effort: a failed measurement is reported and nothing else depends
//! on it.

use std::time::{Duration, Instant};

use anyhow::Context;

/// 1 MB sample from the Cloudflare speed endpoint.
pub const SPEED_TEST_URL: &str = "https://speed.cloudflare.com/__down?bytes=1000000";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedTestResult {
    pub bytes: u64,
    pub elapsed: Duration,
}

impl SpeedTestResult {
    /// Megabits per second over the whole transfer.
    pub fn mbps(&self) -> f64 {
        let seconds = self.elapsed.as_secs_f64();
        if seconds <= 0.0 {
            return 0.0;
        }
        (self.bytes as f64 * 8.0 / 1_000_000.0) / seconds
    }
}

/// Downloads the sample and measures the transfer.
pub async fn measure_download() -> anyhow::Result<SpeedTestResult> {
    let client = reqwest::Client::new();
    let started = Instant::now();

    let mut response = client
        .get(SPEED_TEST_URL)
        .send()
        .await
        .context("speed test request failed")?
        .error_for_status()
        .context("speed test endpoint rejected the request")?;

    let mut bytes: u64 = 0;
    while let Some(chunk) = response.chunk().await.context("speed test read failed")? {
        bytes += chunk.len() as u64;
    }

    Ok(SpeedTestResult {
        bytes,
        elapsed: started.elapsed(),
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
