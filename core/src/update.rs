//! # Self-Update Check
//!
//! Queries the release feed for the newest published build, compares
//! version tags numerically and reports whether an update is available.
//! Errors always carry the URL that was checked so the user can diagnose
//! feed problems themselves.

use serde::Deserialize;
use thiserror::Error;

const RELEASE_OWNER: &str = "toolbelt-dev";
const RELEASE_REPO: &str = "toolbelt";

/// Suffix of the distributable package asset in the release feed.
const PACKAGE_SUFFIX: &str = ".apk";

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("network error: {source} (checked {url})")]
    Http {
        #[source]
        source: reqwest::Error,
        url: String,
    },
    #[error("release feed returned {status} (checked {url})")]
    Feed { status: u16, url: String },
    #[error("malformed release feed: {message} (checked {url})")]
    Malformed { message: String, url: String },
}

impl UpdateError {
    /// The URL that was checked when the error occurred.
    pub fn url(&self) -> &str {
        match self {
            UpdateError::Http { url, .. }
            | UpdateError::Feed { url, .. }
            | UpdateError::Malformed { url, .. } => url,
        }
    }
}

/// Outcome of a successful feed check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    UpdateAvailable {
        version: String,
        /// Download URL of the package asset, when the release carries one.
        download_url: Option<String>,
    },
    UpToDate,
}

pub struct UpdateChecker {
    client: reqwest::Client,
    feed_url: String,
    current_version: String,
}

impl UpdateChecker {
    /// Checker against the product release feed.
    pub fn new(current_version: impl Into<String>) -> Self {
        let feed_url =
            format!("https://api.github.com/repos/{RELEASE_OWNER}/{RELEASE_REPO}/releases/latest");
        Self::with_feed(feed_url, current_version)
    }

    /// Checker against an arbitrary feed URL.
    pub fn with_feed(feed_url: impl Into<String>, current_version: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            feed_url: feed_url.into(),
            current_version: current_version.into(),
        }
    }

    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }

    /// Fetches the latest release and compares it against the running
    /// version.
    pub async fn check(&self) -> Result<UpdateStatus, UpdateError> {
        let response = self
            .client
            .get(&self.feed_url)
            .header("User-Agent", "toolbelt-updater")
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|source| UpdateError::Http {
                source,
                url: self.feed_url.clone(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpdateError::Feed {
                status: status.as_u16(),
                url: self.feed_url.clone(),
            });
        }

        let release: Release =
            response
                .json()
                .await
                .map_err(|source| UpdateError::Malformed {
                    message: source.to_string(),
                    url: self.feed_url.clone(),
                })?;

        if is_newer_version(&release.tag_name, &self.current_version) {
            Ok(UpdateStatus::UpdateAvailable {
                download_url: release.package_asset(),
                version: release.tag_name,
            })
        } else {
            Ok(UpdateStatus::UpToDate)
        }
    }
}

#[derive(Debug, Deserialize)]
struct Release {
    tag_name: String,
    #[serde(default)]
    assets: Vec<ReleaseAsset>,
}

#[derive(Debug, Deserialize)]
struct ReleaseAsset {
    name: String,
    browser_download_url: String,
}

impl Release {
    /// The first asset that looks like the distributable package.
    fn package_asset(&self) -> Option<String> {
        self.assets
            .iter()
            .find(|asset| asset.name.ends_with(PACKAGE_SUFFIX))
            .map(|asset| asset.browser_download_url.clone())
    }
}

/// Whether `latest` is strictly newer than `current`.
///
/// Tags are reduced to their dot-separated integer segments (every other
/// character stripped, so `v1.2.0` reads as `1.2.0`), compared left to
/// right with missing segments as zero. The first differing segment
/// decides.
pub fn is_newer_version(latest: &str, current: &str) -> bool {
    let latest_parts = version_segments(latest);
    let current_parts = version_segments(current);

    let length = latest_parts.len().max(current_parts.len());
    for i in 0..length {
        let l = latest_parts.get(i).copied().unwrap_or(0);
        let c = current_parts.get(i).copied().unwrap_or(0);
        if l > c {
            return true;
        }
        if l < c {
            return false;
        }
    }
    false
}

fn version_segments(tag: &str) -> Vec<u64> {
    let cleaned: String = tag
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned
        .split('.')
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<u64>().unwrap_or(0))
        .collect()
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

    #[test]
    fn later_patch_is_newer() {
        assert!(is_newer_version("1.2.0", "1.1.9"));
    }

    #[test]
    fn missing_segments_count_as_zero() {
        assert!(!is_newer_version("1.0", "1.0.0"));
        assert!(!is_newer_version("1.0.0", "1.0"));
        assert!(is_newer_version("1.0.1", "1.0"));
    }

    #[test]
    fn first_differing_segment_decides() {
        assert!(is_newer_version("2.0", "1.9.9"));
        assert!(!is_newer_version("1.9.9", "2.0"));
    }

    #[test]
    fn equal_versions_are_not_newer() {
        assert!(!is_newer_version("1.4.0", "1.4.0"));
    }

    #[test]
    fn tag_prefixes_are_stripped() {
        assert!(is_newer_version("v1.5.0", "1.4.9"));
        assert!(!is_newer_version("v1.4.0", "v1.4.0"));
        assert!(is_newer_version("release-2.0", "1.9"));
    }

    #[test]
    fn release_selects_the_first_package_asset() {
        let raw = r#"{
            "tag_name": "v1.5.0",
            "assets": [
                { "name": "checksums.txt", "browser_download_url": "https://example.com/sums" },
                { "name": "toolbelt-1.5.0.apk", "browser_download_url": "https://example.com/a.apk" },
                { "name": "toolbelt-1.5.0-beta.apk", "browser_download_url": "https://example.com/b.apk" }
            ]
        }"#;
        let release: Release = serde_json::from_str(raw).unwrap();
        assert_eq!(
            release.package_asset().as_deref(),
            Some("https://example.com/a.apk")
        );
    }

    #[test]
    fn release_without_package_asset_yields_none() {
        let raw = r#"{ "tag_name": "v1.5.0", "assets": [] }"#;
        let release: Release = serde_json::from_str(raw).unwrap();
        assert!(release.package_asset().is_none());

        let no_assets: Release = serde_json::from_str(r#"{ "tag_name": "v1.5.0" }"#).unwrap();
        assert!(no_assets.package_asset().is_none());
    }
}
