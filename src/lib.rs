pub mod config;
pub mod core;
pub mod level;

#[cfg(target_arch = "wasm32")]
pub mod persistence;
#[cfg(target_arch = "wasm32")]
pub mod ui;

pub use crate::config::SelectorConfig;
pub use crate::core::{initialize, GridItem, InitReport, KeyValueStore, MemoryStore, Navigator, Selection};
pub use crate::level::{is_unlocked, parse_level, Level};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    ui::start()
}
