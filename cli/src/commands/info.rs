//! The about screen.

use colored::*;

use toolbelt_common::config::Settings;
use toolbelt_common::network::interface;
use toolbelt_common::tools::CATALOG;

use crate::terminal::{colors, print};

pub fn info(cfg: &Settings) -> anyhow::Result<()> {
    print::banner();
    print::header("about the tool");

    print::aligned_line("Version", 9, env!("CARGO_PKG_VERSION"));
    print::aligned_line("Catalog", 9, format!("{} tools", CATALOG.len()));
    print::aligned_line("Theme", 9, cfg.theme.to_string());

    let network: ColoredString = match interface::site_local_addr() {
        Some(addr) => addr.to_string().color(colors::SAFE),
        None => "no site-local address".color(colors::SEPARATOR),
    };
    print::aligned_line("Network", 9, network);

    if let Some(path) = Settings::default_path() {
        print::aligned_line("Config", 9, path.display().to_string());
    }

    print::end_of_program();
    Ok(())
}
