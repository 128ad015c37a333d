//! The home screen: the pinned tile grid, footer and release-feed status.

use colored::*;

use toolbelt_common::config::Settings;
use toolbelt_common::tools::HomeTools;
use toolbelt_core::update::{UpdateChecker, UpdateStatus};

use crate::terminal::{colors, format, print};
use crate::tprint;

const TILE_WIDTH: usize = 24;

pub async fn home(cfg: &Settings) -> anyhow::Result<()> {
    let home_tools = HomeTools::from_csv(cfg.home_tools.as_deref());

    print::banner();
    print::header("home");

    if home_tools.is_empty() {
        print::print_status("No tiles pinned. Add one with 'toolbelt tools add <tool>'.");
    } else {
        render_grid(&home_tools);
    }

    tprint!();
    render_update_card().await;
    render_footer();
    print::end_of_program();
    Ok(())
}

/// Tiles in rows sized to the terminal, two columns minimum.
fn render_grid(home_tools: &HomeTools) {
    let columns: usize = grid_columns();

    for row in home_tools.tools().chunks(columns) {
        let rendered: Vec<Vec<String>> = row
            .iter()
            .map(|tool| format::tile_lines(tool, position_of(home_tools, tool.id), TILE_WIDTH))
            .collect();

        for line_idx in 0..rendered[0].len() {
            let line: String = rendered
                .iter()
                .map(|tile| tile[line_idx].as_str())
                .collect::<Vec<&str>>()
                .join(" ");
            print::print(&line);
        }
    }
}

fn position_of(home_tools: &HomeTools, id: u32) -> usize {
    home_tools
        .tools()
        .iter()
        .position(|tool| tool.id == id)
        .map(|idx| idx + 1)
        .unwrap_or(0)
}

fn grid_columns() -> usize {
    let width = crossterm::terminal::size()
        .map(|(cols, _)| cols as usize)
        .unwrap_or(print::TOTAL_WIDTH);
    (width / (TILE_WIDTH + 1)).max(2)
}

/// The update status card: quietly reports the release feed.
async fn render_update_card() {
    let checker = UpdateChecker::new(env!("CARGO_PKG_VERSION"));
    let line: ColoredString = match checker.check().await {
        Ok(UpdateStatus::UpdateAvailable { version, .. }) => {
            format!("New version: {version} (run 'toolbelt update')")
                .color(colors::SAFE)
                .bold()
        }
        Ok(UpdateStatus::UpToDate) => "Up to date".color(colors::SEPARATOR),
        Err(_) => "Update check failed".color(colors::SEPARATOR),
    };
    print::aligned_line("Updates", 8, line);
}

fn render_footer() {
    print::aligned_line("Version", 8, env!("CARGO_PKG_VERSION"));
    print::aligned_line("About", 8, "© Toolbelt");
}
