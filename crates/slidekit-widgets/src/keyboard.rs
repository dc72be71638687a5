//! Discrete keyboard stepping for focused knobs.

use crate::drag::Knob;
use crate::range_slider::RangeValue;
use slidekit_core::{Key, SliderConfig};
use tracing::trace;

/// What a key asks the focused knob to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyIntent {
    /// Home
    ToMin,
    /// End
    ToMax,
    /// ArrowUp / ArrowRight
    StepUp,
    /// ArrowDown / ArrowLeft
    StepDown,
    /// PageUp
    PageUp,
    /// PageDown
    PageDown,
}

impl KeyIntent {
    /// Map a key; keys without a slider meaning return `None`.
    #[must_use]
    pub const fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Home => Some(Self::ToMin),
            Key::End => Some(Self::ToMax),
            Key::Up | Key::Right => Some(Self::StepUp),
            Key::Down | Key::Left => Some(Self::StepDown),
            Key::PageUp => Some(Self::PageUp),
            Key::PageDown => Some(Self::PageDown),
            _ => None,
        }
    }
}

/// New value of a single-value knob after `intent`.
#[must_use]
pub fn single_step(intent: KeyIntent, value: f64, config: &SliderConfig) -> f64 {
    let proposed = match intent {
        KeyIntent::ToMin => config.min(),
        KeyIntent::ToMax => config.max(),
        KeyIntent::StepUp => value + config.step(),
        KeyIntent::StepDown => value - config.step(),
        KeyIntent::PageUp => value + config.page_step(),
        KeyIntent::PageDown => value - config.page_step(),
    };
    let next = config.quantize(proposed);
    trace!(?intent, from = value, to = next, "key step");
    next
}

/// New value pair after `intent` on one knob of a range slider.
///
/// A knob never reaches the other one: the start knob stops one step below
/// the end value and the end knob one step above the start value.
#[must_use]
pub fn range_step(
    intent: KeyIntent,
    knob: Knob,
    values: RangeValue,
    config: &SliderConfig,
) -> RangeValue {
    let RangeValue { start, end } = values;
    let (min, max, step, page) = (config.min(), config.max(), config.step(), config.page_step());
    let next = match knob {
        Knob::Start => {
            let start = match intent {
                KeyIntent::ToMin => min,
                KeyIntent::ToMax => end - step,
                KeyIntent::StepUp => below(start + step, end, step),
                KeyIntent::PageUp => below(start + page, end, step),
                KeyIntent::StepDown => {
                    if start > min {
                        start - step
                    } else {
                        start
                    }
                }
                KeyIntent::PageDown => {
                    let proposed = start - page;
                    if proposed > min {
                        proposed
                    } else {
                        min
                    }
                }
            };
            RangeValue { start, end }
        }
        Knob::End => {
            let end = match intent {
                KeyIntent::ToMin | KeyIntent::ToMax => max,
                KeyIntent::StepUp => {
                    if end < max {
                        end + step
                    } else {
                        end
                    }
                }
                KeyIntent::PageUp => {
                    let proposed = end + page;
                    if proposed < max {
                        proposed
                    } else {
                        max
                    }
                }
                KeyIntent::StepDown => above(end - step, start, step),
                KeyIntent::PageDown => above(end - page, start, step),
            };
            RangeValue { start, end }
        }
    }
    .normalize(config);
    trace!(?intent, ?knob, start = next.start, end = next.end, "range key step");
    next
}

fn below(proposed: f64, end: f64, step: f64) -> f64 {
    if proposed < end {
        proposed
    } else {
        end - step
    }
}

fn above(proposed: f64, start: f64, step: f64) -> f64 {
    if proposed > start {
        proposed
    } else {
        start + step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn config(min: f64, max: f64, step: f64) -> SliderConfig {
        SliderConfig::new(min, max, step).unwrap()
    }

    fn pair(start: f64, end: f64) -> RangeValue {
        RangeValue { start, end }
    }

    // =========================================================================
    // Key mapping
    // =========================================================================

    #[test]
    fn test_from_key() {
        assert_eq!(KeyIntent::from_key(Key::Home), Some(KeyIntent::ToMin));
        assert_eq!(KeyIntent::from_key(Key::End), Some(KeyIntent::ToMax));
        assert_eq!(KeyIntent::from_key(Key::Right), Some(KeyIntent::StepUp));
        assert_eq!(KeyIntent::from_key(Key::Up), Some(KeyIntent::StepUp));
        assert_eq!(KeyIntent::from_key(Key::Left), Some(KeyIntent::StepDown));
        assert_eq!(KeyIntent::from_key(Key::PageDown), Some(KeyIntent::PageDown));
        assert_eq!(KeyIntent::from_key(Key::Tab), None);
        assert_eq!(KeyIntent::from_key(Key::Other), None);
    }

    // =========================================================================
    // Single knob
    // =========================================================================

    #[test]
    fn test_single_home_goes_to_min() {
        let cfg = config(10.0, 90.0, 1.0);
        assert_eq!(single_step(KeyIntent::ToMin, 73.0, &cfg), 10.0);
        assert_eq!(single_step(KeyIntent::ToMin, 10.0, &cfg), 10.0);
    }

    #[test]
    fn test_single_end_goes_to_max() {
        assert_eq!(single_step(KeyIntent::ToMax, 3.0, &config(0.0, 50.0, 1.0)), 50.0);
    }

    #[test]
    fn test_single_steps_clamp() {
        let cfg = config(0.0, 100.0, 1.0);
        assert_eq!(single_step(KeyIntent::StepUp, 40.0, &cfg), 41.0);
        assert_eq!(single_step(KeyIntent::StepDown, 40.0, &cfg), 39.0);
        assert_eq!(single_step(KeyIntent::PageUp, 40.0, &cfg), 50.0);
        assert_eq!(single_step(KeyIntent::PageDown, 5.0, &cfg), 0.0);
        assert_eq!(single_step(KeyIntent::PageUp, 95.0, &cfg), 100.0);
        assert_eq!(single_step(KeyIntent::StepUp, 100.0, &cfg), 100.0);
    }

    #[test]
    fn test_single_fractional_step_is_quantized() {
        let cfg = config(0.0, 1.0, 0.1);
        assert_eq!(single_step(KeyIntent::StepUp, 0.2, &cfg), 0.3);
    }

    // =========================================================================
    // Range: start knob
    // =========================================================================

    #[test]
    fn test_range_start_home_and_end() {
        let cfg = config(0.0, 100.0, 1.0);
        assert_eq!(range_step(KeyIntent::ToMin, Knob::Start, pair(30.0, 60.0), &cfg), pair(0.0, 60.0));
        assert_eq!(range_step(KeyIntent::ToMax, Knob::Start, pair(30.0, 60.0), &cfg), pair(59.0, 60.0));
    }

    #[test]
    fn test_range_start_cannot_reach_end() {
        let cfg = config(0.0, 100.0, 1.0);
        assert_eq!(range_step(KeyIntent::StepUp, Knob::Start, pair(58.0, 60.0), &cfg), pair(59.0, 60.0));
        assert_eq!(range_step(KeyIntent::StepUp, Knob::Start, pair(59.0, 60.0), &cfg), pair(59.0, 60.0));
        assert_eq!(range_step(KeyIntent::PageUp, Knob::Start, pair(55.0, 60.0), &cfg), pair(59.0, 60.0));
    }

    #[test]
    fn test_range_start_down_stops_at_min() {
        let cfg = config(0.0, 100.0, 1.0);
        assert_eq!(range_step(KeyIntent::StepDown, Knob::Start, pair(0.0, 60.0), &cfg), pair(0.0, 60.0));
        assert_eq!(range_step(KeyIntent::StepDown, Knob::Start, pair(4.0, 60.0), &cfg), pair(3.0, 60.0));
        assert_eq!(range_step(KeyIntent::PageDown, Knob::Start, pair(4.0, 60.0), &cfg), pair(0.0, 60.0));
        assert_eq!(range_step(KeyIntent::PageDown, Knob::Start, pair(40.0, 60.0), &cfg), pair(30.0, 60.0));
    }

    // =========================================================================
    // Range: end knob
    // =========================================================================

    #[test]
    fn test_range_end_home_and_end_go_to_max() {
        let cfg = config(0.0, 100.0, 1.0);
        assert_eq!(range_step(KeyIntent::ToMin, Knob::End, pair(30.0, 60.0), &cfg), pair(30.0, 100.0));
        assert_eq!(range_step(KeyIntent::ToMax, Knob::End, pair(30.0, 60.0), &cfg), pair(30.0, 100.0));
    }

    #[test]
    fn test_range_end_up_stops_at_max() {
        let cfg = config(0.0, 100.0, 1.0);
        assert_eq!(range_step(KeyIntent::StepUp, Knob::End, pair(30.0, 100.0), &cfg), pair(30.0, 100.0));
        assert_eq!(range_step(KeyIntent::StepUp, Knob::End, pair(30.0, 60.0), &cfg), pair(30.0, 61.0));
        assert_eq!(range_step(KeyIntent::PageUp, Knob::End, pair(30.0, 95.0), &cfg), pair(30.0, 100.0));
    }

    #[test]
    fn test_range_end_cannot_reach_start() {
        let cfg = config(0.0, 100.0, 1.0);
        assert_eq!(range_step(KeyIntent::StepDown, Knob::End, pair(30.0, 31.0), &cfg), pair(30.0, 31.0));
        assert_eq!(range_step(KeyIntent::PageDown, Knob::End, pair(30.0, 35.0), &cfg), pair(30.0, 31.0));
        assert_eq!(range_step(KeyIntent::PageDown, Knob::End, pair(30.0, 60.0), &cfg), pair(30.0, 50.0));
    }

    #[test]
    fn test_range_fractional_step_is_quantized() {
        let cfg = config(0.0, 1.0, 0.01);
        let next = range_step(KeyIntent::StepUp, Knob::Start, pair(0.1, 0.5), &cfg);
        assert_eq!(next, pair(0.11, 0.5));
    }

    // =========================================================================
    // Properties
    // =========================================================================

    fn intent() -> impl Strategy<Value = KeyIntent> {
        prop_oneof![
            Just(KeyIntent::ToMin),
            Just(KeyIntent::ToMax),
            Just(KeyIntent::StepUp),
            Just(KeyIntent::StepDown),
            Just(KeyIntent::PageUp),
            Just(KeyIntent::PageDown),
        ]
    }

    proptest! {
        #[test]
        fn prop_range_keys_keep_order(
            keys in prop::collection::vec((intent(), any::<bool>()), 1..40),
        ) {
            let cfg = config(0.0, 100.0, 1.0);
            let mut values = pair(20.0, 80.0);
            for (intent, on_start) in keys {
                let knob = if on_start { Knob::Start } else { Knob::End };
                values = range_step(intent, knob, values, &cfg);
                prop_assert!(values.start <= values.end);
                prop_assert!(values.start >= 0.0 && values.end <= 100.0);
            }
        }

        #[test]
        fn prop_single_keys_stay_in_range(
            keys in prop::collection::vec(intent(), 1..40),
            start in 0.0f64..=50.0,
        ) {
            let cfg = config(0.0, 50.0, 0.5);
            let mut value = cfg.quantize(start);
            for intent in keys {
                value = single_step(intent, value, &cfg);
                prop_assert!((0.0..=50.0).contains(&value));
            }
        }
    }
}
