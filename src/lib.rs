//! Food Catcher core crate.
//!
//! A basket slides along the bottom of a full-window canvas catching falling
//! food: green items score, a red item ends the game. Game rules, input,
//! rendering and configuration are plain Rust and test natively; `browser`
//! wires them to the DOM and is what `start_game()` launches.

use wasm_bindgen::prelude::*;

pub mod assets;
pub mod config;
pub mod game;
pub mod input;
pub mod render;

mod browser;

pub use config::GameConfig;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

/// Start with the built-in defaults. Expects `#gameCanvas`, `#gameOverScreen`
/// and `#restartButton` in the page.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    browser::start(GameConfig::default())
}

/// Start with a JSON object overriding any subset of `GameConfig`.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(json)
        .map_err(|err| JsValue::from_str(&format!("invalid config: {}", err)))?;
    browser::start(config)
}
