use super::hitbox::Rect;

/// The player-controlled catcher. Its x is kept inside the canvas on every move.
#[derive(Clone, Debug, PartialEq)]
pub struct Basket {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub speed: f64, // px/s
    max_x: f64,
}

impl Basket {
    pub fn new(width: f64, height: f64, speed: f64, canvas_w: f64, y: f64) -> Self {
        let mut b = Self {
            x: 0.0,
            y,
            width,
            height,
            speed,
            max_x: (canvas_w - width).max(0.0),
        };
        b.recenter();
        b
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    pub fn recenter(&mut self) {
        self.x = self.max_x / 2.0;
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x.clamp(0.0, self.max_x);
    }

    pub fn shift(&mut self, dx: f64) {
        self.set_x(self.x + dx);
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn hitbox(&self, inset: f64) -> Rect {
        self.bounds().inset(inset)
    }
}
