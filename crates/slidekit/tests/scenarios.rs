//! End-to-end interaction scenarios.
//!
//! Each test mounts a slider on a 200px track through the scripted harness
//! and drives it the way a browser would.

use slidekit::{ActiveKnob, Key, ListenerKind, RangeSliderProps, RangeValue, Rect, SliderProps};
use slidekit_test::Harness;
use web_time::Duration;

const TRACK: Rect = Rect::new(0.0, 0.0, 200.0, 20.0);

// =============================================================================
// Single Slider Scenarios
// =============================================================================

#[test]
fn test_click_at_half_track_sets_half_value() {
    let mut harness = Harness::slider(SliderProps::new(), TRACK).expect("valid props");

    harness.click(100.0);

    harness.assert_value(50.0).assert_emitted(&[50.0]);
    assert_eq!(harness.control().percent(), 50.0);
}

#[test]
fn test_drag_past_either_end_clamps_to_bounds() {
    let props = SliderProps::new().min(5.0).max(25.0).step(5.0);
    let mut harness = Harness::slider(props, TRACK).expect("valid props");

    harness.press(100.0).assert_value(15.0);
    harness.move_to(-50.0).assert_value(5.0);
    harness.move_to(260.0).assert_value(25.0);
    harness.release(260.0).tick();

    harness.assert_emitted(&[15.0, 5.0, 25.0]);
    assert_eq!(harness.control().percent(), 100.0);
}

#[test]
fn test_home_key_jumps_to_min() {
    let props = SliderProps::new().min(10.0).default_value(40.0);
    let mut harness = Harness::slider(props, TRACK).expect("valid props");

    harness.click(150.0);
    assert_ne!(harness.value(), 10.0);
    harness.key(Key::Home);

    harness.assert_value(10.0);
}

#[test]
fn test_arrow_and_page_keys_step() {
    let mut harness = Harness::slider(SliderProps::new(), TRACK).expect("valid props");
    harness.click(100.0).clear_emitted();

    harness.key(Key::Right).key(Key::Up).key(Key::PageDown).key(Key::Left);

    harness.assert_emitted(&[51.0, 52.0, 42.0, 41.0]);
}

#[test]
fn test_keys_need_focus() {
    let mut harness =
        Harness::slider(SliderProps::new().default_value(30.0), TRACK).expect("valid props");

    harness.key(Key::End).assert_value(30.0);
    assert!(harness.control_mut().focus());
    harness.key(Key::End).assert_value(100.0);
}

#[test]
fn test_mouse_out_ends_single_drag() {
    let mut harness = Harness::slider(SliderProps::new(), TRACK).expect("valid props");

    harness.press(100.0).mouse_out(100.0);
    assert!(!harness.control().is_active());

    harness.move_to(150.0).assert_value(50.0);
}

#[test]
fn test_touch_drag() {
    let mut harness = Harness::slider(SliderProps::new(), TRACK).expect("valid props");

    harness.touch_start(&[100.0]).touch_move(&[150.0]).touch_end(150.0).tick();

    harness.assert_emitted(&[50.0, 75.0]).assert_idle_listeners();
    assert_eq!(harness.prevented_defaults(), 0);
}

#[test]
fn test_multi_touch_suppresses_default() {
    let mut harness = Harness::slider(SliderProps::new(), TRACK).expect("valid props");

    harness.touch_start(&[100.0, 120.0]);

    assert_eq!(harness.prevented_defaults(), 1);
    harness.assert_value(50.0);
}

#[test]
fn test_controlled_slider_waits_for_owner() {
    let props = SliderProps::new().value(20.0);
    let mut harness = Harness::slider(props, TRACK).expect("valid props");

    harness.click(100.0).assert_value(20.0).assert_emitted(&[50.0]);
    assert_eq!(harness.control().percent(), 20.0);

    assert!(harness.control_mut().set_value(50.0));
    harness.assert_value(50.0);
    assert_eq!(harness.control().percent(), 50.0);
}

#[test]
fn test_controlled_range_waits_for_owner() {
    let props = RangeSliderProps::new().step(1.0).value([0.0, 50.0]);
    let mut harness = Harness::range(props, TRACK).expect("valid props");

    harness.drag(100.0, &[150.0]);

    harness
        .assert_value(RangeValue::new(0.0, 50.0))
        .assert_emitted(&[RangeValue::new(0.0, 75.0)]);
}

#[test]
fn test_unseeded_slider_starts_at_zero_within_range() {
    let props = SliderProps::new().min(-50.0).max(50.0);
    let harness = Harness::slider(props, TRACK).expect("valid props");

    harness.assert_value(0.0);
    assert_eq!(harness.control().percent(), 50.0);
}

#[test]
fn test_initial_and_controlled_values_land_on_grid() {
    let props = SliderProps::new().step(5.0).default_value(7.0);
    let mut harness = Harness::slider(props, TRACK).expect("valid props");
    harness.assert_value(5.0);
    assert!(harness.control_mut().focus());
    harness.key(Key::Right).key(Key::Right).assert_value(15.0);

    let props = SliderProps::new().min(2.0).max(30.0).step(5.0).value(9.0);
    let mut harness = Harness::slider(props, TRACK).expect("valid props");
    harness.assert_value(7.0);
    assert!(harness.control_mut().set_value(13.0));
    harness.assert_value(12.0);
    assert!(harness.control_mut().set_value(30.0));
    harness.assert_value(27.0);
}

#[test]
fn test_uncontrolled_ignores_overwrite() {
    let mut harness = Harness::slider(SliderProps::new(), TRACK).expect("valid props");

    assert!(!harness.control_mut().set_value(30.0));
    harness.assert_value(0.0);
}

#[test]
fn test_disabled_slider_ignores_pointer() {
    let props = SliderProps::new().disabled(true);
    let mut harness = Harness::slider(props, TRACK).expect("valid props");

    harness.click(100.0);

    harness.assert_value(0.0).assert_emitted(&[]).assert_idle_listeners();
}

// =============================================================================
// Range Slider Scenarios
// =============================================================================

fn range_harness() -> Harness<slidekit::RangeSlider> {
    slidekit_test::init_tracing();
    let props = RangeSliderProps::new().step(1.0).default_value([0.0, 50.0]);
    Harness::range(props, TRACK).expect("valid props")
}

#[test]
fn test_start_knob_stops_one_step_below_end() {
    let mut harness = range_harness();

    harness.drag(0.0, &[160.0]);

    harness
        .assert_value(RangeValue::new(49.0, 50.0))
        .assert_emitted(&[RangeValue::new(49.0, 50.0)]);
}

#[test]
fn test_end_knob_stops_one_step_above_start() {
    let mut harness = range_harness();
    harness.drag(0.0, &[40.0]).assert_value(RangeValue::new(20.0, 50.0));

    harness.drag(100.0, &[10.0]);

    harness.assert_value(RangeValue::new(20.0, 21.0));
}

#[test]
fn test_mouse_out_keeps_range_drag() {
    let mut harness = range_harness();

    harness.press(100.0).mouse_out(150.0);
    assert_eq!(harness.control().active_knob(), ActiveKnob::End);

    harness.move_to(150.0).release(150.0).tick();
    harness.assert_value(RangeValue::new(0.0, 75.0)).assert_idle_listeners();
}

#[test]
fn test_range_keys_follow_focused_knob() {
    let mut harness = range_harness();

    harness.click(100.0).key(Key::PageUp);
    harness.assert_value(RangeValue::new(0.0, 60.0));
    harness.key(Key::End);
    harness.assert_value(RangeValue::new(0.0, 100.0));

    harness.click(0.0).key(Key::End);
    harness.assert_value(RangeValue::new(99.0, 100.0));
    harness.key(Key::Home);
    harness.assert_value(RangeValue::new(0.0, 100.0));
}

#[test]
fn test_track_segment_with_offset_min() {
    let props = RangeSliderProps::new()
        .min(10.0)
        .max(110.0)
        .step(1.0)
        .default_value([35.0, 85.0]);
    let harness = Harness::range(props, TRACK).expect("valid props");

    assert_eq!(harness.control().percents(), [25.0, 75.0]);
    assert_eq!(harness.control().track_segment(), [25.0, 50.0]);
}

#[test]
fn test_unordered_controlled_pair_rejected() {
    let props = RangeSliderProps::new().value([10.0, 20.0]);
    let mut harness = Harness::range(props, TRACK).expect("valid props");

    assert!(harness.control_mut().set_values([30.0, 5.0]).is_err());
    assert!(harness
        .control_mut()
        .set_values([30.0, 40.0])
        .expect("ordered pair"));
    harness.assert_value(RangeValue::new(30.0, 40.0));
}

// =============================================================================
// Resize and Listener Lifecycle
// =============================================================================

#[test]
fn test_resize_burst_measures_once() {
    let mut harness = Harness::slider(SliderProps::new(), TRACK).expect("valid props");

    for _ in 0..10 {
        harness.resize(1024.0, 768.0).advance(Duration::from_millis(5));
    }
    assert_eq!(harness.remeasures(), 0);
    harness.advance(Duration::from_millis(300));

    assert_eq!(harness.remeasures(), 1);
    assert_eq!(harness.control().geometry().measure_count(), 2);
}

#[test]
fn test_remeasure_picks_up_new_track() {
    let mut harness = Harness::slider(SliderProps::new(), TRACK).expect("valid props");

    harness
        .set_track(Rect::new(0.0, 0.0, 400.0, 20.0))
        .resize(800.0, 600.0)
        .advance(Duration::from_millis(300));
    harness.click(100.0);

    harness.assert_value(25.0);
}

#[test]
fn test_detached_track_ignores_pointer() {
    let mut harness = Harness::slider(SliderProps::new(), TRACK).expect("valid props");

    harness
        .detach_track()
        .resize(800.0, 600.0)
        .advance(Duration::from_millis(300));
    harness.click(100.0);

    harness.assert_value(0.0).assert_emitted(&[]);
}

#[test]
fn test_end_listeners_released_next_tick() {
    let mut harness = Harness::slider(SliderProps::new(), TRACK).expect("valid props");

    harness.press(100.0).release(100.0);
    assert!(!harness.host().is_attached(ListenerKind::MouseMove));
    assert!(harness.host().is_attached(ListenerKind::MouseUp));

    harness.tick();
    harness.assert_idle_listeners();
}

#[test]
fn test_repeated_drags_do_not_leak() {
    let mut harness = range_harness();

    for x in [20.0, 40.0, 60.0] {
        harness.drag(0.0, &[x]);
        harness.drag(harness.x_at(harness.value().start), &[0.0]);
    }

    harness.assert_idle_listeners();
}

#[test]
fn test_teardown_mid_drag_releases_everything() {
    let mut harness = Harness::slider(SliderProps::new(), TRACK).expect("valid props");

    harness.press(100.0).teardown();
    harness.assert_no_listeners();

    harness.resize(800.0, 600.0).advance(Duration::from_millis(300));
    assert_eq!(harness.remeasures(), 0);
}
