//! Sprite loading. Three images load concurrently; the game starts once all of
//! them are ready, whatever order they finish in.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use anyhow::{Result, anyhow};
use futures::channel::oneshot;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlImageElement;

use crate::config::AssetPaths;
use crate::game::FoodColor;

/// Loaded sprites, keyed by what they depict. `I` is the image handle type
/// (`HtmlImageElement` in the browser).
#[derive(Clone, Debug)]
pub struct SpriteSet<I> {
    green_food: Option<I>,
    red_food: Option<I>,
    basket: Option<I>,
}

impl<I> SpriteSet<I> {
    pub fn new(green_food: I, red_food: I, basket: I) -> Self {
        Self {
            green_food: Some(green_food),
            red_food: Some(red_food),
            basket: Some(basket),
        }
    }

    /// Nothing loaded yet; the renderer falls back to a plain basket.
    pub fn empty() -> Self {
        Self {
            green_food: None,
            red_food: None,
            basket: None,
        }
    }

    pub fn food(&self, color: FoodColor) -> Option<&I> {
        match color {
            FoodColor::Green => self.green_food.as_ref(),
            FoodColor::Red => self.red_food.as_ref(),
        }
    }

    pub fn basket(&self) -> Option<&I> {
        self.basket.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.green_food.is_some() && self.red_food.is_some() && self.basket.is_some()
    }
}

/// Wait for all three loads. Resolves only after every one has finished; the
/// first failure aborts the whole set.
pub async fn join_sprites<I, G, R, B>(green: G, red: R, basket: B) -> Result<SpriteSet<I>>
where
    G: Future<Output = Result<I>>,
    R: Future<Output = Result<I>>,
    B: Future<Output = Result<I>>,
{
    let (green, red, basket) = futures::try_join!(green, red, basket)?;
    Ok(SpriteSet::new(green, red, basket))
}

pub async fn load_image(source: &str) -> Result<HtmlImageElement> {
    let image = HtmlImageElement::new()
        .map_err(|err| anyhow!("Could not create HtmlImageElement: {:#?}", err))?;

    let (complete_tx, complete_rx) = oneshot::channel::<Result<()>>();
    let success_tx = Rc::new(RefCell::new(Some(complete_tx)));
    let error_tx = Rc::clone(&success_tx);
    let failed_source = source.to_string();

    let success_callback = Closure::once(move || {
        if let Some(tx) = success_tx.borrow_mut().take() {
            let _ = tx.send(Ok(()));
        }
    });
    let error_callback = Closure::once(move |err: JsValue| {
        if let Some(tx) = error_tx.borrow_mut().take() {
            let _ = tx.send(Err(anyhow!(
                "Error loading image {}: {:#?}",
                failed_source,
                err
            )));
        }
    });

    image.set_onload(Some(success_callback.as_ref().unchecked_ref()));
    image.set_onerror(Some(error_callback.as_ref().unchecked_ref()));
    image.set_src(source);

    complete_rx.await??;
    Ok(image)
}

pub async fn load_sprites(paths: &AssetPaths) -> Result<SpriteSet<HtmlImageElement>> {
    join_sprites(
        load_image(&paths.green_food),
        load_image(&paths.red_food),
        load_image(&paths.basket),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_empty_set_has_no_sprites() {
        let s: SpriteSet<u8> = SpriteSet::empty();
        assert!(!s.is_complete());
        assert!(s.basket().is_none());
        assert!(s.food(FoodColor::Green).is_none());
    }

    #[test]
    fn test_food_lookup_by_color() {
        let s = SpriteSet::new(1u8, 2u8, 3u8);
        assert!(s.is_complete());
        assert_eq!(s.food(FoodColor::Green), Some(&1));
        assert_eq!(s.food(FoodColor::Red), Some(&2));
        assert_eq!(s.basket(), Some(&3));
    }

    #[test]
    fn test_join_fails_if_any_load_fails() {
        let ok = |v: u8| async move { Ok::<u8, anyhow::Error>(v) };
        let bad = async { Err::<u8, _>(anyhow!("404")) };
        let res = block_on(join_sprites(ok(1), bad, ok(3)));
        assert!(res.is_err());
    }

    #[test]
    fn test_join_waits_for_all_three_in_any_order() {
        use futures::executor::LocalPool;
        use futures::task::LocalSpawnExt;

        let (green_tx, green_rx) = oneshot::channel::<u8>();
        let (red_tx, red_rx) = oneshot::channel::<u8>();
        let (basket_tx, basket_rx) = oneshot::channel::<u8>();
        let loaded = |rx: oneshot::Receiver<u8>| async move { Ok::<u8, anyhow::Error>(rx.await?) };

        let done: Rc<RefCell<Option<SpriteSet<u8>>>> = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&done);
        let mut pool = LocalPool::new();
        pool.spawner()
            .spawn_local(async move {
                let set = join_sprites(loaded(green_rx), loaded(red_rx), loaded(basket_rx)).await;
                *slot.borrow_mut() = set.ok();
            })
            .unwrap();

        pool.run_until_stalled();
        assert!(done.borrow().is_none());
        basket_tx.send(3).unwrap();
        pool.run_until_stalled();
        assert!(done.borrow().is_none());
        red_tx.send(2).unwrap();
        pool.run_until_stalled();
        assert!(done.borrow().is_none());
        green_tx.send(1).unwrap();
        pool.run_until_stalled();

        let set = done.borrow_mut().take().unwrap();
        assert!(set.is_complete());
        assert_eq!(set.food(FoodColor::Green), Some(&1));
        assert_eq!(set.food(FoodColor::Red), Some(&2));
        assert_eq!(set.basket(), Some(&3));
    }
}
