pub const MAX_LEVEL_KEY: &str = "orbital-bus-max-level";
pub const SELECTED_LEVEL_KEY: &str = "orbital-bus-level";
pub const DEFAULT_MAX_LEVEL: &str = "1";
pub const GAME_PAGE: &str = "game.html";
pub const GRID_ID: &str = "grid";
pub const LEVEL_ATTRIBUTE: &str = "data-level";
pub const ENABLED_CLASS: &str = "enabled";

/// Names shared with the page markup and the game page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorConfig {
    pub max_level_key: String,
    pub selected_level_key: String,
    pub default_max_level: String,
    pub game_page: String,
    pub grid_id: String,
    pub level_attribute: String,
    pub enabled_class: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            max_level_key: MAX_LEVEL_KEY.to_string(),
            selected_level_key: SELECTED_LEVEL_KEY.to_string(),
            default_max_level: DEFAULT_MAX_LEVEL.to_string(),
            game_page: GAME_PAGE.to_string(),
            grid_id: GRID_ID.to_string(),
            level_attribute: LEVEL_ATTRIBUTE.to_string(),
            enabled_class: ENABLED_CLASS.to_string(),
        }
    }
}

impl SelectorConfig {
    pub fn with_keys(mut self, max_level_key: &str, selected_level_key: &str) -> Self {
        self.max_level_key = max_level_key.to_string();
        self.selected_level_key = selected_level_key.to_string();
        self
    }

    pub fn with_default_max_level(mut self, value: &str) -> Self {
        self.default_max_level = value.to_string();
        self
    }

    pub fn with_game_page(mut self, href: &str) -> Self {
        self.game_page = href.to_string();
        self
    }

    pub fn with_grid_id(mut self, id: &str) -> Self {
        self.grid_id = id.to_string();
        self
    }
}
