// Gameplay scenarios on an 800x600 canvas with default tuning.
// Native-only: no browser APIs are touched.

use food_catcher::GameConfig;
use food_catcher::game::{FoodColor, FoodItem, GameState};

fn fresh() -> GameState {
    GameState::new(&GameConfig::default(), 800.0, 600.0)
}

#[test]
fn green_catch_scores_once_and_removes_item() {
    let mut s = fresh();
    assert_eq!(s.basket().x, 375.0);
    s.push_food(FoodItem::new(380.0, 530.0, FoodColor::Green));
    let report = s.update(16.0);
    assert_eq!(s.score(), 1);
    assert!(s.foods().is_empty());
    assert!(!s.is_game_over());
    assert_eq!(report.greens_caught, 1);
    assert!(!report.alert());
}

#[test]
fn red_catch_ends_game_and_alerts_once() {
    let mut s = fresh();
    s.push_food(FoodItem::new(380.0, 530.0, FoodColor::Red));
    let report = s.update(16.0);
    assert!(s.is_game_over());
    assert_eq!(s.score(), 0);
    assert!(s.foods().is_empty());
    assert!(report.alert());

    // Later frames neither alert again nor change anything.
    let again = s.update(16.0);
    assert!(!again.alert());
    assert_eq!(again, Default::default());
}

#[test]
fn two_reds_in_one_frame_alert_once() {
    let mut s = fresh();
    s.push_food(FoodItem::new(370.0, 530.0, FoodColor::Red));
    s.push_food(FoodItem::new(385.0, 530.0, FoodColor::Red));
    let report = s.update(0.0);
    assert!(report.alert());
    assert!(s.is_game_over());
    assert!(s.foods().is_empty());
}

#[test]
fn mixed_catch_in_one_frame() {
    let mut s = fresh();
    s.push_food(FoodItem::new(370.0, 530.0, FoodColor::Green));
    s.push_food(FoodItem::new(385.0, 530.0, FoodColor::Green));
    s.push_food(FoodItem::new(0.0, 100.0, FoodColor::Red));
    s.update(0.0);
    assert_eq!(s.score(), 2);
    assert_eq!(s.foods().len(), 1);
    assert_eq!(s.foods()[0].color, FoodColor::Red);
}

#[test]
fn item_beside_basket_is_not_caught() {
    let mut s = fresh();
    // Sprite bounds overlap the basket by 5px but the inset hitboxes do not.
    s.push_food(FoodItem::new(310.0, 530.0, FoodColor::Green));
    s.update(0.0);
    assert_eq!(s.score(), 0);
    assert_eq!(s.foods().len(), 1);
}

#[test]
fn falling_item_is_caught_on_the_way_down() {
    let mut s = fresh();
    s.push_food(FoodItem::new(370.0, -70.0, FoodColor::Green));
    let mut frames = 0;
    while !s.foods().is_empty() && frames < 1_000 {
        s.update(16.0);
        frames += 1;
    }
    assert_eq!(s.score(), 1, "item should hit the basket before the floor");
}

#[test]
fn items_below_canvas_never_survive_an_update() {
    let mut s = fresh();
    for i in 0..10 {
        s.push_food(FoodItem::new(i as f64 * 20.0, 560.0 + i as f64 * 5.0, FoodColor::Green));
    }
    for _ in 0..20 {
        s.update(33.0);
        assert!(s.foods().iter().all(|f| f.y <= 600.0));
    }
}

#[test]
fn color_threshold_at_sixty_percent() {
    assert_eq!(FoodColor::from_roll(0.59, 0.6), FoodColor::Green);
    assert_eq!(FoodColor::from_roll(0.61, 0.6), FoodColor::Red);
}
