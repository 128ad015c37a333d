//! Launches a tile: real features run, link tiles print their target, and
//! everything not yet built shows the coming-soon notice.

use colored::*;
use rand::seq::IndexedRandom;

use toolbelt_common::config::Settings;
use toolbelt_common::tools;

use crate::commands::{scan, settings, update};
use crate::terminal::print;
use crate::tprint;

pub async fn launch(query: &str, cfg: &Settings) -> anyhow::Result<()> {
    let Some(tool) = tools::resolve(query) else {
        anyhow::bail!("no tool matches '{query}', try 'toolbelt tools list'");
    };

    match tool.id {
        4 => settings::settings(None, cfg.clone()),
        9 => {
            idea_generator();
            Ok(())
        }
        12 => update::update().await,
        13 => {
            open_link("Web Portal", "https://portal.toolbelt.dev");
            Ok(())
        }
        16 => {
            open_link("Dev Board", "https://board.toolbelt.dev/main-development");
            Ok(())
        }
        20 => scan::scan(None, false, cfg).await,
        _ => {
            coming_soon(tool.name);
            Ok(())
        }
    }
}

fn coming_soon(name: &str) {
    print::header(name);
    print::centerln(&format!("{name} module is coming soon!"));
    print::end_of_program();
}

/// Link tiles live in the browser; the terminal prints the destination.
fn open_link(name: &str, url: &str) {
    print::header(name);
    print::aligned_line("Open", 4, url.bright_blue().underline());
    print::end_of_program();
}

/// Random theme/mechanic/goal triple for brainstorming sessions.
fn idea_generator() {
    const THEMES: &[&str] = &[
        "Cyberpunk",
        "Medieval",
        "Underwater",
        "Space Western",
        "Post-Apocalyptic",
    ];
    const MECHANICS: &[&str] = &[
        "Permadeath",
        "Time Loop",
        "Deck Building",
        "Base Management",
        "Grappling Hook",
    ];
    const GOALS: &[&str] = &[
        "Escaping a prison",
        "Finding a cure",
        "Building an empire",
        "Revenge",
        "Exploration",
    ];

    let mut rng = rand::rng();
    print::header("game mechanic idea");
    print::aligned_line("Theme", 8, *THEMES.choose(&mut rng).unwrap_or(&THEMES[0]));
    print::aligned_line(
        "Mechanic",
        8,
        *MECHANICS.choose(&mut rng).unwrap_or(&MECHANICS[0]),
    );
    print::aligned_line("Goal", 8, *GOALS.choose(&mut rng).unwrap_or(&GOALS[0]));
    tprint!();
    print::print_status("Run again for a new idea.");
    print::end_of_program();
}
