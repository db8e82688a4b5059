use std::time::Duration;

use gallery::{Catalog, Category, Event, GalleryController, Key, Settings};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn controller_with(len: usize, seed: u64) -> GalleryController {
    let images: Vec<String> = (0..len).map(|i| format!("drawing-{i}.png")).collect();
    let catalog = Catalog::new().with_images(Category::Drawing, images);
    GalleryController::with_rng(catalog, Settings::default(), StdRng::seed_from_u64(seed))
}

/// Moves to `start` using `next()` only.
fn seek(controller: &mut GalleryController, start: usize) {
    for _ in 0..start {
        controller.next();
    }
}

proptest! {
    #[test]
    fn next_len_times_returns_to_start(len in 1usize..40, start_seed in any::<usize>()) {
        let mut c = controller_with(len, 0);
        let start = start_seed % len;
        seek(&mut c, start);

        for _ in 0..len {
            c.next();
        }
        prop_assert_eq!(c.view().current_index, Some(start));
    }

    #[test]
    fn previous_undoes_next(len in 1usize..40, start_seed in any::<usize>()) {
        let mut c = controller_with(len, 0);
        let start = start_seed % len;
        seek(&mut c, start);

        c.next();
        c.previous();
        prop_assert_eq!(c.view().current_index, Some(start));

        c.dispatch(Event::Key(Key::ArrowLeft));
        c.dispatch(Event::Key(Key::ArrowRight));
        prop_assert_eq!(c.view().current_index, Some(start));
    }

    #[test]
    fn random_jump_stays_in_range(len in 1usize..40, seed in any::<u64>(), jumps in 1usize..20) {
        let mut c = controller_with(len, seed);
        for _ in 0..jumps {
            c.dispatch(Event::Random);
            let index = c.view().current_index.expect("non-empty list has an index");
            prop_assert!(index < len);
        }
    }

    #[test]
    fn stored_interval_is_always_clamped(minutes in proptest::num::f64::ANY) {
        let mut c = controller_with(3, 0);
        c.dispatch(Event::SetInterval(minutes));
        let stored = c.view().interval_minutes;
        prop_assert!((0.5..=60.0).contains(&stored));
    }

    #[test]
    fn at_most_one_tick_per_period(len in 2usize..10, periods in 1u32..30, minutes in 0.5f64..5.0) {
        let mut c = controller_with(len, 0);
        c.set_interval(minutes);
        c.toggle_auto_play();

        let period = Duration::from_secs_f64(c.view().interval_minutes * 60.0);
        for _ in 0..periods {
            c.advance(period);
        }
        prop_assert_eq!(c.view().current_index, Some(periods as usize % len));
    }
}

#[test]
fn drawing_scenario_wraps_after_three() {
    let mut c = controller_with(3, 0);
    assert_eq!(c.view().current_index, Some(0));
    c.next();
    assert_eq!(c.view().current_index, Some(1));
    c.next();
    assert_eq!(c.view().current_index, Some(2));
    c.next();
    assert_eq!(c.view().current_index, Some(0));
}

#[test]
fn short_interval_scenario() {
    let mut c = controller_with(3, 0);
    c.set_interval(0.3);
    assert_eq!(c.view().interval_minutes, 0.5);
    assert_eq!(c.view().interval_display, "30 seconds");
}

#[test]
fn interval_extremes() {
    let mut c = controller_with(3, 0);
    c.set_interval(0.0);
    assert_eq!(c.view().interval_minutes, 0.5);
    c.set_interval(100.0);
    assert_eq!(c.view().interval_minutes, 60.0);
}

#[test]
fn toggling_auto_play_off_leaves_no_timer() {
    let mut c = controller_with(3, 0);
    c.dispatch(Event::ToggleAutoPlay);
    c.advance(Duration::from_secs(60));
    assert_eq!(c.view().current_index, Some(1));

    c.dispatch(Event::ToggleAutoPlay);
    assert!(!c.timer_active());
    c.advance(Duration::from_secs(60 * 60));
    assert_eq!(c.view().current_index, Some(1));
}

#[test]
fn empty_category_scenario() {
    let mut c = controller_with(3, 0);
    c.dispatch(Event::SelectCategory(Category::Figure));

    for event in [Event::Next, Event::Previous, Event::Random] {
        c.dispatch(event);
        let view = c.view();
        assert_eq!(view.current_index, None);
        assert_eq!(view.total, 0);
    }
}

#[test]
fn no_ticks_after_teardown() {
    let mut c = controller_with(3, 0);
    c.toggle_auto_play();
    c.advance(Duration::from_secs(30));
    c.shutdown();

    c.advance(Duration::from_secs(60 * 10));
    assert_eq!(c.view().current_index, Some(0));
    assert!(!c.timer_active());
}
