//! Game state and the per-frame rules: falling food, catching, scoring and the
//! game-over latch. Nothing in here touches the DOM, so the whole module runs
//! under native `cargo test`.

use rand::Rng;

use crate::config::GameConfig;

mod basket;
mod food;
mod frame;
mod hitbox;

pub use basket::Basket;
pub use food::{FoodColor, FoodItem};
pub use frame::{Frame, FrameClock, GameLoop};
pub use hitbox::Rect;

/// What happened during one `update` pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateReport {
    pub greens_caught: u32,
    pub red_caught: bool,
    pub missed: u32,
}

impl UpdateReport {
    /// The alert sound plays at most once per frame, even if several red items
    /// land together.
    pub fn alert(&self) -> bool {
        self.red_caught
    }
}

/// All mutable game state. One instance lives for the lifetime of the page.
pub struct GameState {
    config: GameConfig,
    canvas_w: f64,
    canvas_h: f64,
    basket: Basket,
    foods: Vec<FoodItem>,
    score: u32,
    game_over: bool,
}

impl GameState {
    pub fn new(config: &GameConfig, canvas_w: f64, canvas_h: f64) -> Self {
        let basket = Basket::new(
            config.basket_width,
            config.basket_height,
            config.basket_speed,
            canvas_w,
            canvas_h - config.basket_bottom_offset,
        );
        Self {
            config: config.clone(),
            canvas_w,
            canvas_h,
            basket,
            foods: Vec::new(),
            score: 0,
            game_over: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn canvas_size(&self) -> (f64, f64) {
        (self.canvas_w, self.canvas_h)
    }

    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    pub fn basket_mut(&mut self) -> &mut Basket {
        &mut self.basket
    }

    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    pub fn push_food(&mut self, item: FoodItem) {
        self.foods.push(item);
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Move the basket horizontally by `dx` pixels, clamped to the canvas.
    /// Ignored once the game is over. Returns whether the input was applied.
    pub fn nudge_basket(&mut self, dx: f64) -> bool {
        if self.game_over {
            return false;
        }
        self.basket.shift(dx);
        true
    }

    /// Advance every item by `dt_ms` of falling, resolve catches and drop items
    /// that left the canvas. No-op once the game is over.
    pub fn update(&mut self, dt_ms: f64) -> UpdateReport {
        let mut report = UpdateReport::default();
        if self.game_over {
            return report;
        }

        let dy = self.config.fall_speed * (dt_ms / 1000.0);
        let size = self.config.food_size;
        let food_inset = self.config.food_hitbox_inset;
        let catch_box = self.basket.hitbox(self.config.basket_hitbox_inset);
        let floor = self.canvas_h;

        self.foods.retain_mut(|f| {
            f.y += dy;
            if f.bounds(size).inset(food_inset).intersects(&catch_box) {
                match f.color {
                    FoodColor::Green => report.greens_caught += 1,
                    FoodColor::Red => report.red_caught = true,
                }
                return false;
            }
            if f.y > floor {
                report.missed += 1;
                return false;
            }
            true
        });

        self.score += report.greens_caught;
        if report.red_caught {
            self.game_over = true;
            log::info!("red food caught, game over with score {}", self.score);
        }
        report
    }

    /// Roll the per-frame spawn chance and maybe add one item at the top.
    pub fn maybe_spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<FoodItem> {
        if self.game_over || rng.gen_range(0.0..1.0) >= self.config.spawn_chance {
            return None;
        }
        let item = FoodItem::spawn(
            rng,
            self.canvas_w,
            self.config.food_size,
            self.config.green_threshold,
        );
        log::trace!("spawned {:?} food at x={:.1}", item.color, item.x);
        self.foods.push(item);
        Some(item)
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.foods.clear();
        self.basket.recenter();
        self.game_over = false;
    }
}
