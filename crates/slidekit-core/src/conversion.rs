//! Pixel, percent and value conversion for slider tracks.
//!
//! Every function here is pure and total: a zero-width track or a degenerate
//! range yields 0 instead of NaN or infinity.
//!
//! ```
//! use slidekit_core::conversion::{percent_to_value, value_to_percent};
//!
//! assert_eq!(value_to_percent(25.0, 0.0, 50.0), 50.0);
//! assert_eq!(percent_to_value(50.0, 0.0, 50.0, 1.0), 25.0);
//! ```

/// Largest number of fractional digits honoured when rounding.
const MAX_PRECISION: u32 = 15;

/// Position of `value` inside `[min, max]`, mapped to `[0, 100]`.
#[must_use]
pub fn value_to_percent(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span == 0.0 || !span.is_finite() {
        return 0.0;
    }
    (value - min) * 100.0 / span
}

/// Domain value at `percent` of `[min, max]`, quantized to the step precision.
#[must_use]
pub fn percent_to_value(percent: f64, min: f64, max: f64, step: f64) -> f64 {
    let raw = percent * (max - min) / 100.0 + min;
    if step > 0.0 {
        round_to_step_precision(raw, step)
    } else {
        raw
    }
}

/// Number of digits after the decimal point in the decimal form of `step`.
///
/// Integer steps have precision 0.
#[must_use]
pub fn step_precision(step: f64) -> u32 {
    if !step.is_finite() {
        return 0;
    }
    let repr = step.abs().to_string();
    repr.split_once('.')
        .map_or(0, |(_, fraction)| fraction.len() as u32)
        .min(MAX_PRECISION)
}

/// Round `x` to as many decimal digits as `step` carries.
///
/// Integer steps round to whole numbers.
#[must_use]
pub fn round_to_step_precision(x: f64, step: f64) -> f64 {
    let factor = 10f64.powi(step_precision(step) as i32);
    (x * factor).round() / factor
}

/// Clamp `value` into `[min, max]` and snap it to the nearest step line
/// counted from `min`.
///
/// A line past `max` falls back one step, so a range that is not a whole
/// number of steps tops out at the last line below `max`.
#[must_use]
pub fn snap_to_step_grid(value: f64, min: f64, max: f64, step: f64) -> f64 {
    let clamped = clamp_value(value, min, max);
    if step <= 0.0 || max <= min || clamped.is_nan() {
        return clamped;
    }
    let precision = step_precision(step).max(step_precision(min));
    let factor = 10f64.powi(precision as i32);
    let line = |index: f64| ((min + index * step) * factor).round() / factor;
    let index = ((clamped - min) / step).round();
    let snapped = line(index);
    if snapped > max {
        line(index - 1.0)
    } else {
        snapped
    }
}

/// Percent of the track covered by `pixel`; 0 when the track has no width.
#[must_use]
pub fn pixel_to_percent(pixel: f64, track_width: f64) -> f64 {
    if track_width <= 0.0 || !track_width.is_finite() {
        return 0.0;
    }
    pixel * 100.0 / track_width
}

/// Clamp `pixel` into `[0, track_width]` and snap it to the nearest step line.
///
/// The grid divides the track into `(max - min) / step` equal parts, so grid
/// line zero sits at `min`.
#[must_use]
pub fn clamp_pixel_to_step_grid(pixel: f64, track_width: f64, min: f64, max: f64, step: f64) -> f64 {
    if track_width <= 0.0 || !track_width.is_finite() || pixel.is_nan() {
        return 0.0;
    }
    let clamped = pixel.clamp(0.0, track_width);
    let span = max - min;
    if step <= 0.0 || span <= 0.0 {
        return clamped;
    }
    let step_count = span / step;
    let pixel_step = track_width / step_count;
    (clamped / pixel_step).round() * pixel_step
}

/// Clamp a percent into `[0, 100]`.
#[must_use]
pub fn clamp_percent(percent: f64) -> f64 {
    percent.min(100.0).max(0.0)
}

/// Clamp a domain value into `[min, max]`.
#[must_use]
pub fn clamp_value(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}
