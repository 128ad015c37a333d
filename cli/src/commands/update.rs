//! The self-update check. Errors surface with the URL that was checked so
//! feed problems are diagnosable from the terminal.

use colored::*;

use toolbelt_core::update::{UpdateChecker, UpdateStatus};

use crate::terminal::{colors, print, spinner};

pub async fn update() -> anyhow::Result<()> {
    print::header("update check");

    let checker = UpdateChecker::new(env!("CARGO_PKG_VERSION"));
    let wait = spinner::start("Checking for updates...");
    let result = checker.check().await;
    wait.finish_and_clear();

    match result {
        Ok(UpdateStatus::UpdateAvailable {
            version,
            download_url,
        }) => {
            print::aligned_line("Status", 8, "Update available".color(colors::SAFE).bold());
            print::aligned_line("Latest", 8, version);
            match download_url {
                Some(url) => {
                    print::aligned_line("Download", 8, url.bright_blue().underline());
                }
                None => {
                    print::aligned_line(
                        "Download",
                        8,
                        "no package asset in this release".color(colors::SEPARATOR),
                    );
                }
            }
        }
        Ok(UpdateStatus::UpToDate) => {
            print::aligned_line(
                "Status",
                8,
                "You are on the latest version".color(colors::SAFE),
            );
            print::aligned_line("Current", 8, env!("CARGO_PKG_VERSION"));
        }
        Err(e) => {
            print::aligned_line("Status", 8, "Update check failed".color(colors::RISK).bold());
            print::aligned_line("Error", 8, e.to_string());
            print::aligned_line("Checked", 8, e.url().color(colors::SEPARATOR));
        }
    }

    print::end_of_program();
    Ok(())
}
