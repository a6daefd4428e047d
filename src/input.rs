//! Keyboard and touch steering. Both end up in `GameState::nudge_basket`, which
//! clamps the basket to the canvas and ignores input after game over.

use crate::game::GameState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
}

impl Key {
    /// Map a `KeyboardEvent.key` value. Anything but the horizontal arrows is
    /// not a game key.
    pub fn from_key_name(name: &str) -> Option<Key> {
        match name {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            _ => None,
        }
    }
}

/// One arrow press moves a fixed step (speed / keyboard_tick_hz), regardless of
/// how long the frame actually took.
pub fn press_key(state: &mut GameState, key: Key) -> bool {
    let step = state.config().keyboard_step();
    let dx = match key {
        Key::Left => -step,
        Key::Right => step,
    };
    state.nudge_basket(dx)
}

/// Single-finger drag: each move shifts the basket by the finger's horizontal
/// travel since the previous event, 1:1 in pixels.
#[derive(Clone, Copy, Debug, Default)]
pub struct TouchDrag {
    last_x: Option<f64>,
}

impl TouchDrag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.last_x.is_some()
    }

    pub fn start(&mut self, state: &GameState, x: f64) {
        if state.is_game_over() {
            return;
        }
        self.last_x = Some(x);
    }

    pub fn move_to(&mut self, state: &mut GameState, x: f64) -> bool {
        let Some(last) = self.last_x else {
            return false;
        };
        if !state.nudge_basket(x - last) {
            return false;
        }
        self.last_x = Some(x);
        true
    }

    pub fn end(&mut self) {
        self.last_x = None;
    }
}
