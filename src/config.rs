//! Tunable game constants. Defaults reproduce the shipped game; with the `serde`
//! feature any subset can be overridden from JSON.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Paths of the images and sound the browser layer loads at startup.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AssetPaths {
    pub green_food: String,
    pub red_food: String,
    pub basket: String,
    pub alert_sound: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            green_food: "../Sprites/KFC.png".into(),
            red_food: "../Sprites/Police.png".into(),
            basket: "../Sprites/George.png".into(),
            alert_sound: "../Sounds/Breathe.mp3".into(),
        }
    }
}

/// Element ids the page must provide.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DomIds {
    pub canvas: String,
    pub game_over_screen: String,
    pub restart_button: String,
}

impl Default for DomIds {
    fn default() -> Self {
        Self {
            canvas: "gameCanvas".into(),
            game_over_screen: "gameOverScreen".into(),
            restart_button: "restartButton".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub basket_width: f64,
    pub basket_height: f64,
    /// Distance from the bottom edge of the canvas to the basket's top edge.
    pub basket_bottom_offset: f64,
    pub basket_speed: f64, // px/s
    /// Keyboard steps assume this many key repeats per second, independent of
    /// the real frame rate.
    pub keyboard_tick_hz: f64,
    pub food_size: f64,
    pub fall_speed: f64, // px/s
    /// Per-frame probability of spawning one item.
    pub spawn_chance: f64,
    /// Rolls below this value spawn green food, the rest red.
    pub green_threshold: f64,
    pub food_hitbox_inset: f64,
    pub basket_hitbox_inset: f64,
    pub basket_fallback_color: String,
    pub score_font: String,
    pub score_color: String,
    pub score_position: (f64, f64),
    /// Restart button reloads the page instead of resetting in place.
    pub reload_on_restart: bool,
    pub assets: AssetPaths,
    pub dom: DomIds,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            basket_width: 50.0,
            basket_height: 50.0,
            basket_bottom_offset: 60.0,
            basket_speed: 400.0,
            keyboard_tick_hz: 60.0,
            food_size: 70.0,
            fall_speed: 300.0,
            spawn_chance: 0.02,
            green_threshold: 0.6,
            food_hitbox_inset: 10.0,
            basket_hitbox_inset: 5.0,
            basket_fallback_color: "#8b5a2b".into(),
            score_font: "20px Arial".into(),
            score_color: "black".into(),
            score_position: (10.0, 20.0),
            reload_on_restart: true,
            assets: AssetPaths::default(),
            dom: DomIds::default(),
        }
    }
}

impl GameConfig {
    /// Pixels moved by one arrow-key press.
    pub fn keyboard_step(&self) -> f64 {
        self.basket_speed / self.keyboard_tick_hz
    }

    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
