// Native tests for the level grid: drive the public initializer with an
// in-memory store and a recording navigator, no browser required.

use orbital_bus_levels::{
    initialize, GridItem, KeyValueStore, MemoryStore, Navigator, SelectorConfig,
};

struct Cell {
    level: Option<&'static str>,
    class: String,
}

impl Cell {
    fn new(level: Option<&'static str>) -> Self {
        Self {
            level,
            class: "locked".to_string(),
        }
    }
}

impl GridItem for Cell {
    fn declared_level(&self, attribute: &str) -> Option<String> {
        assert_eq!(attribute, "data-level");
        self.level.map(str::to_string)
    }

    fn mark_enabled(&mut self, class: &str) {
        self.class = class.to_string();
    }
}

#[derive(Default)]
struct Pages {
    visited: Vec<String>,
}

impl Navigator for Pages {
    fn navigate(&mut self, href: &str) {
        self.visited.push(href.to_string());
    }
}

// Fresh player: max level defaults to 1, only the first cell opens.
#[test]
fn fresh_player_walkthrough() {
    let config = SelectorConfig::default();
    let mut store = MemoryStore::new();
    let mut grid = vec![Cell::new(Some("1")), Cell::new(Some("2")), Cell::new(Some("3"))];
    let mut pages = Pages::default();

    let report = initialize(&config, &mut store, &mut grid);

    assert_eq!(store.get("orbital-bus-max-level").as_deref(), Some("1"));
    assert_eq!(grid[0].class, "enabled");
    assert_eq!(grid[1].class, "locked");
    assert_eq!(grid[2].class, "locked");

    report.selections[0].activate(&config, &mut store, &mut pages);
    assert_eq!(store.get("orbital-bus-level").as_deref(), Some("1"));
    assert_eq!(pages.visited, vec!["game.html".to_string()]);

    // Locked cells have no selection to activate.
    assert!(report.selection(1).is_none());
    assert!(report.selection(2).is_none());
}

#[test]
fn enable_rule_holds_across_levels() {
    let config = SelectorConfig::default();
    let levels = ["1", "2", "3", "4", "5", "6"];

    for max in 0..=7i64 {
        let mut store = MemoryStore::new().with_entry(&config.max_level_key, &max.to_string());
        let mut grid: Vec<Cell> = levels.iter().map(|level| Cell::new(Some(*level))).collect();

        let report = initialize(&config, &mut store, &mut grid);

        for (index, cell) in grid.iter().enumerate() {
            let level = index as i64 + 1;
            assert_eq!(cell.class == "enabled", level <= max, "level {level} max {max}");
            assert_eq!(report.is_enabled(index), level <= max);
        }
    }
}

#[test]
fn unparsable_entries_never_enable() {
    let config = SelectorConfig::default();
    let mut store = MemoryStore::new().with_entry(&config.max_level_key, "9");
    let mut grid = vec![
        Cell::new(None),
        Cell::new(Some("bonus")),
        Cell::new(Some("2")),
    ];

    let report = initialize(&config, &mut store, &mut grid);

    assert_eq!(report.enabled_count(), 1);
    assert_eq!(report.selections[0].index, 2);
    assert_eq!(grid[0].class, "locked");
    assert_eq!(grid[1].class, "locked");
}

#[test]
fn custom_keys_and_target_are_honoured() {
    let config = SelectorConfig::default()
        .with_keys("max", "picked")
        .with_default_max_level("2")
        .with_game_page("play.html");
    let mut store = MemoryStore::new();
    let mut grid = vec![Cell::new(Some("2")), Cell::new(Some("3"))];
    let mut pages = Pages::default();

    let report = initialize(&config, &mut store, &mut grid);
    assert_eq!(store.get("max").as_deref(), Some("2"));
    assert_eq!(report.enabled_count(), 1);

    report.selections[0].activate(&config, &mut store, &mut pages);
    assert_eq!(store.get("picked").as_deref(), Some("2"));
    assert_eq!(pages.visited, vec!["play.html".to_string()]);
}
