mod commands;
mod terminal;

use commands::{
    CommandLine, Commands, home, info, launch, scan, settings, speedtest, tools, update,
};
use toolbelt_common::config::{Settings, Theme};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let command_line = CommandLine::parse_args();

    terminal::logging::init();

    let cfg = Settings::load();
    apply_theme(cfg.theme);

    match command_line.command.unwrap_or(Commands::Home) {
        Commands::Home => home::home(&cfg).await,
        Commands::Launch { tool } => launch::launch(&tool, &cfg).await,
        Commands::Tools { action } => tools::tools(action, &cfg),
        Commands::Scan { prefix, no_wifi } => scan::scan(prefix, no_wifi, &cfg).await,
        Commands::Speedtest => speedtest::speedtest().await,
        Commands::Update => update::update().await,
        Commands::Settings { action } => settings::settings(action, cfg),
        Commands::Info => info::info(&cfg),
    }
}

/// System honors the tty and `NO_COLOR`; dark forces color; light strips it.
fn apply_theme(theme: Theme) {
    match theme {
        Theme::System => {}
        Theme::Dark => colored::control::set_override(true),
        Theme::Light => colored::control::set_override(false),
    }
}
