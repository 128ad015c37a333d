#![cfg(test)]

use std::path::PathBuf;

use toolbelt_common::config::{Settings, Theme};
use toolbelt_common::tools::HomeTools;

/// Unique scratch path per test; cleaned up by the guard.
struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    fn new(name: &str) -> Self {
        let path = std::env::temp_dir()
            .join(format!("toolbelt-test-{}-{}", std::process::id(), name));
        Self { path }
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

#[test]
fn settings_round_trip_through_the_filesystem() {
    let scratch = ScratchFile::new("roundtrip.toml");

    let mut original = Settings::default();
    original.theme = Theme::Dark;
    original.ai_analysis = false;
    original.api_key = "k-abc".to_string();
    original.home_tools = Some("20,1,12".to_string());
    original.save_to(&scratch.path).unwrap();

    let reloaded = Settings::load_from(&scratch.path).unwrap();
    assert_eq!(reloaded.theme, Theme::Dark);
    assert!(!reloaded.ai_analysis);
    assert_eq!(reloaded.api_key, "k-abc");
    assert_eq!(reloaded.home_tools.as_deref(), Some("20,1,12"));
}

/// Persist, reload, and rebuild the home set: the reload equals the filter
/// of the saved ids against the catalog, order preserved.
#[test]
fn home_set_survives_persistence_with_unknown_ids_dropped() {
    let scratch = ScratchFile::new("home.toml");

    let mut settings = Settings::default();
    settings.home_tools = Some("20,999,3,1".to_string());
    settings.save_to(&scratch.path).unwrap();

    let reloaded = Settings::load_from(&scratch.path).unwrap();
    let home = HomeTools::from_csv(reloaded.home_tools.as_deref());
    let ids: Vec<u32> = home.tools().iter().map(|tool| tool.id).collect();
    assert_eq!(ids, vec![20, 3, 1]);
}

#[test]
fn reorder_then_persist_round_trips() {
    let scratch = ScratchFile::new("reorder.toml");

    let mut home = HomeTools::from_csv(Some("1,2,3,4"));
    assert!(home.move_tool(3, 0));

    let mut settings = Settings::default();
    settings.home_tools = Some(home.to_csv());
    settings.save_to(&scratch.path).unwrap();

    let reloaded = Settings::load_from(&scratch.path).unwrap();
    let restored = HomeTools::from_csv(reloaded.home_tools.as_deref());
    let ids: Vec<u32> = restored.tools().iter().map(|tool| tool.id).collect();
    assert_eq!(ids, vec![4, 1, 2, 3]);
}

#[test]
fn missing_file_is_an_error() {
    let scratch = ScratchFile::new("missing.toml");
    assert!(Settings::load_from(&scratch.path).is_err());
}
