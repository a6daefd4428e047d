//! Browser glue: DOM lookup, listeners, asset loading and the animation-frame
//! loop. All game rules live in `game`; this file only forwards events and
//! performs the side effects (audio, overlay, reload).

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{
    CanvasRenderingContext2d, HtmlAudioElement, HtmlCanvasElement, HtmlElement, HtmlImageElement,
    window,
};

use crate::assets::{self, SpriteSet};
use crate::config::GameConfig;
use crate::game::{Frame, GameLoop, GameState};
use crate::input::{self, Key, TouchDrag};
use crate::render::CanvasSurface;

/// Everything the page keeps alive between frames.
struct Runtime {
    game: GameLoop,
    surface: CanvasSurface,
    sprites: SpriteSet<HtmlImageElement>,
    touch: TouchDrag,
    alert: HtmlAudioElement,
    overlay: HtmlElement,
    rng: StdRng,
}

impl Runtime {
    /// Run one frame. Returns whether another frame should be requested.
    fn frame(&mut self, ts: f64) -> bool {
        match self
            .game
            .tick(ts, &mut self.surface, &self.sprites, &mut self.rng)
        {
            Frame::Halted => {
                set_display(&self.overlay, "block");
                log::info!("final score {}", self.game.state().score());
                false
            }
            Frame::Continue(report) => {
                if report.alert() {
                    self.play_alert();
                }
                true
            }
        }
    }

    fn play_alert(&self) {
        self.alert.set_current_time(0.0);
        match self.alert.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    log::warn!("alert sound did not play: {:?}", err);
                }
            }),
            Err(err) => log::warn!("alert sound did not play: {:?}", err),
        }
    }
}

thread_local! {
    static RUNTIME: RefCell<Option<Runtime>> = const { RefCell::new(None) };
}

fn with_runtime<T>(f: impl FnOnce(&mut Runtime) -> T) -> Option<T> {
    RUNTIME.with(|cell| cell.borrow_mut().as_mut().map(f))
}

pub fn start(config: GameConfig) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas: HtmlCanvasElement = doc
        .get_element_by_id(&config.dom.canvas)
        .ok_or_else(|| JsValue::from_str(&format!("no #{} element", config.dom.canvas)))?
        .dyn_into()?;
    let overlay: HtmlElement = doc
        .get_element_by_id(&config.dom.game_over_screen)
        .ok_or_else(|| {
            JsValue::from_str(&format!("no #{} element", config.dom.game_over_screen))
        })?
        .dyn_into()?;
    let restart_button = doc
        .get_element_by_id(&config.dom.restart_button)
        .ok_or_else(|| JsValue::from_str(&format!("no #{} element", config.dom.restart_button)))?;

    // Sized once to the viewport; later window resizes are not tracked.
    let width = win
        .inner_width()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerWidth is not a number"))?;
    let height = win
        .inner_height()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerHeight is not a number"))?;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()?;

    let alert = HtmlAudioElement::new_with_src(&config.assets.alert_sound)?;
    let state = GameState::new(&config, canvas.width() as f64, canvas.height() as f64);
    log::info!(
        "starting on {}x{} canvas",
        canvas.width(),
        canvas.height()
    );

    RUNTIME.with(|cell| {
        cell.replace(Some(Runtime {
            game: GameLoop::new(state),
            surface: CanvasSurface::new(ctx),
            sprites: SpriteSet::empty(),
            touch: TouchDrag::new(),
            alert,
            overlay,
            rng: StdRng::from_entropy(),
        }))
    });

    add_keyboard_listener(&doc)?;
    add_touch_listeners(&canvas)?;
    add_restart_listener(&restart_button, config.reload_on_restart)?;

    let paths = config.assets.clone();
    spawn_local(async move {
        match assets::load_sprites(&paths).await {
            Ok(sprites) => {
                log::info!("sprites loaded");
                with_runtime(|rt| rt.sprites = sprites);
                start_frame_loop();
            }
            Err(err) => log::error!("game not started: {:#}", err),
        }
    });
    Ok(())
}

fn add_keyboard_listener(doc: &web_sys::Document) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
        if let Some(key) = Key::from_key_name(&evt.key()) {
            with_runtime(|rt| input::press_key(rt.game.state_mut(), key));
        }
    }) as Box<dyn FnMut(_)>);
    doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn add_touch_listeners(canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::TouchEvent| {
            with_runtime(|rt| {
                if rt.game.state().is_game_over() {
                    return;
                }
                evt.prevent_default();
                if let Some(t) = evt.touches().item(0) {
                    rt.touch.start(rt.game.state(), t.client_x() as f64);
                }
            });
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::TouchEvent| {
            with_runtime(|rt| {
                if !rt.touch.is_dragging() || rt.game.state().is_game_over() {
                    return;
                }
                evt.prevent_default();
                if let Some(t) = evt.touches().item(0) {
                    rt.touch.move_to(rt.game.state_mut(), t.client_x() as f64);
                }
            });
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::TouchEvent| {
            with_runtime(|rt| rt.touch.end());
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn add_restart_listener(button: &web_sys::Element, reload: bool) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
        let restarted = with_runtime(|rt| {
            let was_over = rt.game.state().is_game_over();
            rt.game.restart();
            rt.touch.end();
            set_display(&rt.overlay, "none");
            was_over
        });
        log::info!("restart requested");
        if reload {
            if let Some(Err(err)) = window().map(|w| w.location().reload()) {
                log::error!("reload failed: {:?}", err);
            }
        } else if restarted == Some(true) {
            // The previous loop stopped scheduling at game over.
            start_frame_loop();
        }
    }) as Box<dyn FnMut(_)>);
    button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn set_display(el: &HtmlElement, value: &str) {
    if let Err(err) = el.style().set_property("display", value) {
        log::warn!("could not set display={}: {:?}", value, err);
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_frame_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        if with_runtime(|rt| rt.frame(ts)).unwrap_or(false) {
            request_frame(&f);
        }
    }) as Box<dyn FnMut(f64)>));
    request_frame(&g);
}

fn request_frame(f: &FrameCallback) {
    let Some(w) = window() else {
        return;
    };
    let cb = f.borrow();
    if let Some(cb) = cb.as_ref() {
        if let Err(err) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", err);
        }
    }
}
