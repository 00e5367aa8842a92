use std::collections::HashMap;

use crate::config::SelectorConfig;
use crate::level::{is_unlocked, parse_level, Level};

/// String key-value storage scoped to the page origin.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

pub trait Navigator {
    fn navigate(&mut self, href: &str);
}

/// One cell of the level grid as seen by the initializer.
pub trait GridItem {
    /// Raw value of the level attribute, `None` when the item has none.
    fn declared_level(&self, attribute: &str) -> Option<String>;
    fn mark_enabled(&mut self, class: &str);
}

/// Handle for an enabled grid item. Only enabled items get one, so a
/// disabled item has nothing to activate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
    pub level: String,
}

impl Selection {
    /// Stores the declared level verbatim and leaves for the game page.
    pub fn activate<S, N>(&self, config: &SelectorConfig, store: &mut S, navigator: &mut N)
    where
        S: KeyValueStore + ?Sized,
        N: Navigator + ?Sized,
    {
        log::info!("Level {} selected", self.level);
        store.set(&config.selected_level_key, &self.level);
        navigator.navigate(&config.game_page);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitReport {
    pub max_level: Option<Level>,
    pub defaulted: bool,
    pub scanned: usize,
    pub selections: Vec<Selection>,
}

impl InitReport {
    pub fn enabled_count(&self) -> usize {
        self.selections.len()
    }

    pub fn is_enabled(&self, index: usize) -> bool {
        self.selection(index).is_some()
    }

    pub fn selection(&self, index: usize) -> Option<&Selection> {
        self.selections.iter().find(|selection| selection.index == index)
    }
}

/// Reads the unlocked level, writing the default first when the key is
/// missing. Returns the raw stored string and whether the default was used.
pub fn load_max_level<S>(config: &SelectorConfig, store: &mut S) -> (String, bool)
where
    S: KeyValueStore + ?Sized,
{
    match store.get(&config.max_level_key) {
        Some(raw) => (raw, false),
        None => {
            store.set(&config.max_level_key, &config.default_max_level);
            (config.default_max_level.clone(), true)
        }
    }
}

/// Single pass over the grid: enables every item whose declared level is
/// unlocked and returns a selection handle for each of them.
pub fn initialize<S, I>(config: &SelectorConfig, store: &mut S, items: &mut [I]) -> InitReport
where
    S: KeyValueStore + ?Sized,
    I: GridItem,
{
    let (raw_max, defaulted) = load_max_level(config, store);
    let max_level = parse_level(&raw_max);
    if max_level.is_none() {
        log::warn!("Stored max level {raw_max:?} is not a number, all levels stay locked");
    }

    let mut selections = Vec::new();
    for (index, item) in items.iter_mut().enumerate() {
        let Some(declared) = item.declared_level(&config.level_attribute) else {
            log::debug!("Grid item {index} has no level, skipped");
            continue;
        };

        if !is_unlocked(parse_level(&declared), max_level) {
            log::debug!("Grid item {index} (level {declared:?}) locked");
            continue;
        }

        item.mark_enabled(&config.enabled_class);
        selections.push(Selection {
            index,
            level: declared,
        });
    }

    log::info!(
        "Level grid ready: {} of {} items enabled (max level {raw_max})",
        selections.len(),
        items.len()
    );

    InitReport {
        max_level,
        defaulted,
        scanned: items.len(),
        selections,
    }
}

/// In-memory store for hosts without durable storage, and for tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Number of `set` calls since construction.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.writes += 1;
        self.entries.insert(key.to_string(), value.to_string());
    }
}
