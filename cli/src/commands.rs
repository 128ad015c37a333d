pub mod home;
pub mod info;
pub mod launch;
pub mod scan;
pub mod settings;
pub mod speedtest;
pub mod tools;
pub mod update;

use clap::{Parser, Subcommand};
use toolbelt_common::network::prefix::SubnetPrefix;

#[derive(Parser)]
#[command(name = "toolbelt")]
#[command(about = "A terminal toolbox of launchable utility tiles.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the home screen of pinned tool tiles
    #[command(alias = "h")]
    Home,
    /// Launch a tool by id or name
    #[command(alias = "l")]
    Launch { tool: String },
    /// Manage which tools are pinned to the home screen
    #[command(alias = "t")]
    Tools {
        #[command(subcommand)]
        action: ToolsAction,
    },
    /// Scan the local network for devices and WiFi signals
    #[command(alias = "s")]
    Scan {
        /// Sweep this /24 prefix instead of the detected one
        #[arg(long)]
        prefix: Option<SubnetPrefix>,
        /// Skip the WiFi listing pass
        #[arg(long)]
        no_wifi: bool,
    },
    /// Measure downstream bandwidth
    Speedtest,
    /// Check the release feed for a newer build
    #[command(alias = "u")]
    Update,
    /// Show or change persisted settings
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },
    /// Show information about this tool
    #[command(alias = "i")]
    Info,
}

#[derive(Subcommand)]
pub enum ToolsAction {
    /// List pinned tiles and what else is available
    List,
    /// Pin a tool to the home screen
    Add { tool: String },
    /// Remove a tool from the home screen
    Remove { tool: String },
    /// Move a tile from one position to another (as listed, 1-based)
    Move { from: usize, to: usize },
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print the current settings
    Show,
    /// Set the color theme: light, dark or system
    Theme {
        theme: toolbelt_common::config::Theme,
    },
    /// Enable or disable AI analysis of scan findings
    Ai {
        #[arg(value_parser = clap::builder::BoolishValueParser::new())]
        enabled: bool,
    },
    /// Store the analysis service API key (empty to clear)
    ApiKey { key: String },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
