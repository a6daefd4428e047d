use rand::Rng;

use super::{GameState, UpdateReport};
use crate::assets::SpriteSet;
use crate::render::{self, Surface};

/// FrameClock turns animation-frame timestamps into elapsed milliseconds.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last_ms: Option<f64>, // timestamp of the previous frame
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds since the previous call. The first frame after a (re)start
    /// has no predecessor and reports 0; a timestamp going backwards also does.
    pub fn delta_ms(&mut self, now: f64) -> f64 {
        let dt = self.last_ms.map_or(0.0, |last| (now - last).max(0.0));
        self.last_ms = Some(now);
        dt
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

/// Result of one animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame {
    /// Game over was already latched: nothing was drawn or updated and the
    /// caller should stop requesting frames.
    Halted,
    Continue(UpdateReport),
}

/// Drives `GameState` one display refresh at a time: clear, draw, update, spawn.
pub struct GameLoop {
    state: GameState,
    clock: FrameClock,
}

impl GameLoop {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            clock: FrameClock::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn tick<S, R>(
        &mut self,
        now: f64,
        surface: &mut S,
        sprites: &SpriteSet<S::Image>,
        rng: &mut R,
    ) -> Frame
    where
        S: Surface,
        R: Rng + ?Sized,
    {
        if self.state.is_game_over() {
            return Frame::Halted;
        }
        let dt = self.clock.delta_ms(now);
        render::draw_frame(surface, &self.state, sprites);
        let report = self.state.update(dt);
        self.state.maybe_spawn(rng);
        Frame::Continue(report)
    }

    /// Reset state and forget the previous frame time so the first frame after
    /// a restart does not see the whole game-over pause as elapsed time.
    pub fn restart(&mut self) {
        self.state.reset();
        self.clock.reset();
    }
}
