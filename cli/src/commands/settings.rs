//! Show and change persisted settings.

use colored::*;

use toolbelt_common::config::Settings;
use toolbelt_common::success;

use crate::commands::SettingsAction;
use crate::terminal::{colors, print};

pub fn settings(action: Option<SettingsAction>, cfg: Settings) -> anyhow::Result<()> {
    match action.unwrap_or(SettingsAction::Show) {
        SettingsAction::Show => {
            show(&cfg);
            Ok(())
        }
        SettingsAction::Theme { theme } => {
            let mut updated = cfg;
            updated.theme = theme;
            updated.save()?;
            success!("Theme set to {}", theme);
            Ok(())
        }
        SettingsAction::Ai { enabled } => {
            let mut updated = cfg;
            updated.ai_analysis = enabled;
            updated.save()?;
            success!(
                "AI analysis {}",
                if enabled { "enabled" } else { "disabled" }
            );
            Ok(())
        }
        SettingsAction::ApiKey { key } => {
            let mut updated = cfg;
            updated.api_key = key;
            updated.save()?;
            if updated.api_key().is_some() {
                success!("API key stored");
            } else {
                success!("API key cleared");
            }
            Ok(())
        }
    }
}

fn show(cfg: &Settings) {
    print::header("settings");
    print::aligned_line("Theme", 12, cfg.theme.to_string());
    print::aligned_line(
        "AI analysis",
        12,
        if cfg.ai_analysis { "on" } else { "off" },
    );
    let key_display: ColoredString = match cfg.api_key() {
        Some(_) => "configured".color(colors::SAFE),
        None => "not set".color(colors::SEPARATOR),
    };
    print::aligned_line("API key", 12, key_display);
    match Settings::default_path() {
        Some(path) => print::aligned_line("File", 12, path.display().to_string()),
        None => print::aligned_line("File", 12, "no config directory".color(colors::SEPARATOR)),
    }
    print::end_of_program();
}
