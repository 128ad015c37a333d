//! Pin, unpin and reorder home screen tiles. Every mutation rewrites the
//! persisted id list immediately.

use colored::*;

use toolbelt_common::config::Settings;
use toolbelt_common::tools::{self, HomeTools};
use toolbelt_common::{success, warn};

use crate::commands::ToolsAction;
use crate::terminal::{colors, print};
use crate::tprint;

pub fn tools(action: ToolsAction, cfg: &Settings) -> anyhow::Result<()> {
    let mut home_tools = HomeTools::from_csv(cfg.home_tools.as_deref());

    match action {
        ToolsAction::List => {
            list(&home_tools);
            Ok(())
        }
        ToolsAction::Add { tool } => {
            let id = resolve_id(&tool)?;
            if home_tools.add(id) {
                persist(cfg, &home_tools)?;
                success!("Pinned '{}' to the home screen", tool);
            } else {
                warn!("'{}' is already pinned", tool);
            }
            Ok(())
        }
        ToolsAction::Remove { tool } => {
            let id = resolve_id(&tool)?;
            if home_tools.remove(id) {
                persist(cfg, &home_tools)?;
                success!("Removed '{}' from the home screen", tool);
            } else {
                warn!("'{}' is not on the home screen", tool);
            }
            Ok(())
        }
        ToolsAction::Move { from, to } => {
            if from == 0 || to == 0 {
                anyhow::bail!("positions are 1-based, as shown by 'toolbelt tools list'");
            }
            if home_tools.move_tool(from - 1, to - 1) {
                persist(cfg, &home_tools)?;
                success!("Moved tile {} to position {}", from, to);
                list(&home_tools);
            } else {
                anyhow::bail!(
                    "positions must be within 1..={}",
                    home_tools.len()
                );
            }
            Ok(())
        }
    }
}

fn list(home_tools: &HomeTools) {
    print::header("pinned tiles");
    for (idx, tool) in home_tools.tools().iter().enumerate() {
        print::tree_head(idx + 1, &format!("{} {}", tool.icon, tool.name));
    }

    let available = home_tools.available_to_add();
    if !available.is_empty() {
        tprint!();
        print::print_status("Available to add:");
        let names: String = available
            .iter()
            .map(|tool| tool.name)
            .collect::<Vec<&str>>()
            .join(", ");
        print::print(&format!("  {}", names.color(colors::SEPARATOR)));
    }
    print::end_of_program();
}

fn resolve_id(query: &str) -> anyhow::Result<u32> {
    tools::resolve(query)
        .map(|tool| tool.id)
        .ok_or_else(|| anyhow::anyhow!("no tool matches '{query}'"))
}

fn persist(cfg: &Settings, home_tools: &HomeTools) -> anyhow::Result<()> {
    let mut updated = cfg.clone();
    updated.home_tools = Some(home_tools.to_csv());
    updated.save()
}
