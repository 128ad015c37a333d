//! # Tool Catalog
//!
//! The static catalog of launchable feature tiles and the user-ordered
//! subset pinned to the home screen.
//!
//! The pinned subset is persisted as a comma-separated id list. On load,
//! ids unknown to the catalog are silently dropped; the persisted set is
//! therefore always a subset of catalog ids, order preserved.

/// A launchable feature tile. Immutable, defined at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tool {
    pub id: u32,
    pub name: &'static str,
    /// Glyph shown on the tile.
    pub icon: &'static str,
    pub version: &'static str,
    /// Accent color as RGB.
    pub accent: (u8, u8, u8),
    /// Optional background image for richer frontends.
    pub image_url: Option<&'static str>,
}

const DEFAULT_ACCENT: (u8, u8, u8) = (0x62, 0x00, 0xee);

const fn tool(id: u32, name: &'static str, icon: &'static str) -> Tool {
    Tool {
        id,
        name,
        icon,
        version: "1.0.0",
        accent: DEFAULT_ACCENT,
        image_url: None,
    }
}

/// Every tool the application knows about. The home screen shows a
/// user-chosen, user-ordered subset of these.
pub const CATALOG: &[Tool] = &[
    tool(1, "Calendar", "▦"),
    tool(2, "Converter", "⇄"),
    tool(3, "Notes", "✎"),
    tool(4, "Settings", "⚙"),
    tool(5, "About", "ℹ"),
    tool(9, "Idea Generator", "✧"),
    tool(10, "Color Picker", "▨"),
    tool(11, "Dice Roller", "⚄"),
    tool(12, "Update", "⭡"),
    tool(13, "Web Portal", "◉"),
    tool(14, "Lore Gen", "✍"),
    tool(15, "Engine Guide", "➤"),
    tool(16, "Dev Board", "☰"),
    tool(17, "SSH Client", "⌨"),
    tool(18, "Ping Tool", "↺"),
    tool(19, "Pass Gen", "⚿"),
    tool(20, "Net Scanner", "⇶"),
];

/// How many catalog entries form the default home set.
const DEFAULT_HOME_LEN: usize = 4;

/// Looks up a catalog entry by id.
pub fn find(id: u32) -> Option<&'static Tool> {
    CATALOG.iter().find(|tool| tool.id == id)
}

/// Looks up a catalog entry by id string or case-insensitive name.
pub fn resolve(query: &str) -> Option<&'static Tool> {
    if let Ok(id) = query.parse::<u32>() {
        return find(id);
    }
    CATALOG
        .iter()
        .find(|tool| tool.name.eq_ignore_ascii_case(query))
}

/// The ordered set of tools currently pinned to the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeTools {
    tools: Vec<&'static Tool>,
}

impl HomeTools {
    /// Restores the home set from its persisted CSV form.
    ///
    /// `None` (never customized) yields the default leading catalog slice.
    /// Unknown and malformed ids are dropped; order is preserved.
    pub fn from_csv(csv: Option<&str>) -> Self {
        let tools = match csv {
            Some(raw) => raw
                .split(',')
                .filter_map(|part| part.trim().parse::<u32>().ok())
                .filter_map(find)
                .collect(),
            None => CATALOG.iter().take(DEFAULT_HOME_LEN).collect(),
        };
        Self { tools }
    }

    /// Serializes the current order back to the persisted CSV form.
    pub fn to_csv(&self) -> String {
        self.tools
            .iter()
            .map(|tool| tool.id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn tools(&self) -> &[&'static Tool] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.tools.iter().any(|tool| tool.id == id)
    }

    /// Catalog entries not currently pinned, in catalog order.
    pub fn available_to_add(&self) -> Vec<&'static Tool> {
        CATALOG
            .iter()
            .filter(|tool| !self.contains(tool.id))
            .collect()
    }

    /// Appends a catalog tool. Returns false for unknown ids and duplicates.
    pub fn add(&mut self, id: u32) -> bool {
        if self.contains(id) {
            return false;
        }
        match find(id) {
            Some(tool) => {
                self.tools.push(tool);
                true
            }
            None => false,
        }
    }

    /// Removes a pinned tool. Returns false when it was not pinned.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.tools.len();
        self.tools.retain(|tool| tool.id != id);
        self.tools.len() != before
    }

    /// Reorders by walking the tile through adjacent swaps, which matches
    /// a direct positional move and preserves every other relative order.
    pub fn move_tool(&mut self, from: usize, to: usize) -> bool {
        if from >= self.tools.len() || to >= self.tools.len() {
            return false;
        }
        if from < to {
            for i in from..to {
                self.tools.swap(i, i + 1);
            }
        } else {
            for i in (to + 1..=from).rev() {
                self.tools.swap(i, i - 1);
            }
        }
        true
    }
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

    fn ids(home: &HomeTools) -> Vec<u32> {
        home.tools().iter().map(|tool| tool.id).collect()
    }

    #[test]
    fn catalog_ids_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate catalog id {}", a.id);
            }
        }
    }

    #[test]
    fn default_home_set_is_leading_catalog_slice() {
        let home = HomeTools::from_csv(None);
        assert_eq!(ids(&home), vec![1, 2, 3, 4]);
    }

    #[test]
    fn unknown_ids_are_dropped_and_order_preserved() {
        let home = HomeTools::from_csv(Some("20,999,3,7,1"));
        assert_eq!(ids(&home), vec![20, 3, 1]);
    }

    #[test]
    fn malformed_entries_are_ignored() {
        let home = HomeTools::from_csv(Some("4, ,x,12,"));
        assert_eq!(ids(&home), vec![4, 12]);
    }

    #[test]
    fn csv_round_trips() {
        let home = HomeTools::from_csv(Some("5,1,20"));
        assert_eq!(home.to_csv(), "5,1,20");
        let reloaded = HomeTools::from_csv(Some(&home.to_csv()));
        assert_eq!(home, reloaded);
    }

    #[test]
    fn add_refuses_duplicates_and_unknown_ids() {
        let mut home = HomeTools::from_csv(Some("1,2"));
        assert!(home.add(20));
        assert!(!home.add(20));
        assert!(!home.add(999));
        assert_eq!(ids(&home), vec![1, 2, 20]);
    }

    #[test]
    fn remove_reports_whether_anything_changed() {
        let mut home = HomeTools::from_csv(Some("1,2,3"));
        assert!(home.remove(2));
        assert!(!home.remove(2));
        assert_eq!(ids(&home), vec![1, 3]);
    }

    #[test]
    fn move_forward_matches_direct_positional_move() {
        let mut swapped = HomeTools::from_csv(Some("1,2,3,4,5"));
        assert!(swapped.move_tool(0, 3));

        let mut direct = HomeTools::from_csv(Some("1,2,3,4,5"));
        let tool = direct.tools.remove(0);
        direct.tools.insert(3, tool);

        assert_eq!(ids(&swapped), ids(&direct));
        assert_eq!(ids(&swapped), vec![2, 3, 4, 1, 5]);
    }

    #[test]
    fn move_backward_matches_direct_positional_move() {
        let mut swapped = HomeTools::from_csv(Some("1,2,3,4,5"));
        assert!(swapped.move_tool(4, 1));

        let mut direct = HomeTools::from_csv(Some("1,2,3,4,5"));
        let tool = direct.tools.remove(4);
        direct.tools.insert(1, tool);

        assert_eq!(ids(&swapped), ids(&direct));
        assert_eq!(ids(&swapped), vec![1, 5, 2, 3, 4]);
    }

    #[test]
    fn move_preserves_the_id_multiset() {
        let mut home = HomeTools::from_csv(Some("1,2,3,4,5"));
        home.move_tool(2, 0);
        let mut sorted = ids(&home);
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn move_out_of_bounds_is_rejected() {
        let mut home = HomeTools::from_csv(Some("1,2"));
        assert!(!home.move_tool(0, 5));
        assert!(!home.move_tool(5, 0));
        assert_eq!(ids(&home), vec![1, 2]);
    }

    #[test]
    fn resolve_accepts_id_or_name() {
        assert_eq!(resolve("20").map(|tool| tool.id), Some(20));
        assert_eq!(resolve("net scanner").map(|tool| tool.id), Some(20));
        assert_eq!(resolve("nope"), None);
    }

    #[test]
    fn available_to_add_excludes_pinned() {
        let home = HomeTools::from_csv(Some("1,2,3,4"));
        let available = home.available_to_add();
        assert!(available.iter().all(|tool| tool.id > 4));
        assert_eq!(available.len(), CATALOG.len() - 4);
    }
}
