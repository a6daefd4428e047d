use rand::Rng;

use super::hitbox::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FoodColor {
    Green, // scores
    Red,   // ends the game
}

impl FoodColor {
    /// Weighted coin flip: `roll` in [0, 1) below `green_threshold` is green.
    pub fn from_roll(roll: f64, green_threshold: f64) -> Self {
        if roll < green_threshold {
            FoodColor::Green
        } else {
            FoodColor::Red
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FoodItem {
    pub x: f64,
    pub y: f64,
    pub color: FoodColor,
}

impl FoodItem {
    pub fn new(x: f64, y: f64, color: FoodColor) -> Self {
        Self { x, y, color }
    }

    /// New item just above the visible area at a uniformly random column.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        canvas_w: f64,
        size: f64,
        green_threshold: f64,
    ) -> Self {
        let span = canvas_w - size;
        let x = if span > 0.0 { rng.gen_range(0.0..span) } else { 0.0 };
        let color = FoodColor::from_roll(rng.gen_range(0.0..1.0), green_threshold);
        Self::new(x, -size, color)
    }

    pub fn bounds(&self, size: f64) -> Rect {
        Rect::new(self.x, self.y, size, size)
    }
}
