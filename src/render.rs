//! Drawing. `draw_frame` only reads game state; the `Surface` trait keeps it
//! independent of the browser canvas so it can be checked natively.

use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::assets::SpriteSet;
use crate::game::{GameState, Rect};

/// The handful of 2-D drawing operations the game needs.
pub trait Surface {
    type Image;

    fn clear(&mut self, w: f64, h: f64);
    fn fill_rect(&mut self, color: &str, r: Rect);
    fn draw_image(&mut self, image: &Self::Image, r: Rect);
    fn fill_text(&mut self, text: &str, font: &str, color: &str, x: f64, y: f64);
}

pub fn draw_frame<S: Surface>(surface: &mut S, state: &GameState, sprites: &SpriteSet<S::Image>) {
    let cfg = state.config();
    let (w, h) = state.canvas_size();
    surface.clear(w, h);

    // Basket
    let basket = state.basket().bounds();
    match sprites.basket() {
        Some(img) => surface.draw_image(img, basket),
        None => surface.fill_rect(&cfg.basket_fallback_color, basket),
    }

    // Food
    for food in state.foods() {
        if let Some(img) = sprites.food(food.color) {
            surface.draw_image(img, food.bounds(cfg.food_size));
        }
    }

    // Score
    let (sx, sy) = cfg.score_position;
    surface.fill_text(
        &format!("Score: {}", state.score()),
        &cfg.score_font,
        &cfg.score_color,
        sx,
        sy,
    );
}

/// Browser canvas backend.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    type Image = HtmlImageElement;

    fn clear(&mut self, w: f64, h: f64) {
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn fill_rect(&mut self, color: &str, r: Rect) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(r.x, r.y, r.w, r.h);
    }

    fn draw_image(&mut self, image: &HtmlImageElement, r: Rect) {
        if let Err(err) = self
            .ctx
            .draw_image_with_html_image_element_and_dw_and_dh(image, r.x, r.y, r.w, r.h)
        {
            log::warn!("drawImage failed: {:?}", err);
        }
    }

    fn fill_text(&mut self, text: &str, font: &str, color: &str, x: f64, y: f64) {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(font);
        self.ctx.fill_text(text, x, y).ok();
    }
}
