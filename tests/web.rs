// Browser tests, run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use food_catcher::assets;
use food_catcher::game::{FoodColor, FoodItem, GameState};
use food_catcher::render::{CanvasSurface, draw_frame};
use food_catcher::{GameConfig, assets::SpriteSet};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

// 1x1 transparent PNG.
const PIXEL: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

fn canvas_ctx() -> CanvasRenderingContext2d {
    let doc = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = doc.create_element("canvas").unwrap().dyn_into().unwrap();
    canvas.set_width(800);
    canvas.set_height(600);
    canvas.get_context("2d").unwrap().unwrap().dyn_into().unwrap()
}

#[wasm_bindgen_test]
async fn loads_all_three_sprites() {
    let paths = food_catcher::config::AssetPaths {
        green_food: PIXEL.into(),
        red_food: PIXEL.into(),
        basket: PIXEL.into(),
        ..Default::default()
    };
    let sprites = assets::load_sprites(&paths).await.unwrap();
    assert!(sprites.is_complete());
}

#[wasm_bindgen_test]
async fn broken_image_fails_the_load() {
    assert!(assets::load_image("data:image/png;base64,AAAA").await.is_err());
}

#[wasm_bindgen_test]
fn draws_on_a_real_canvas() {
    let mut state = GameState::new(&GameConfig::default(), 800.0, 600.0);
    state.push_food(FoodItem::new(10.0, 10.0, FoodColor::Green));
    let mut surface = CanvasSurface::new(canvas_ctx());
    draw_frame(&mut surface, &state, &SpriteSet::empty());
}
