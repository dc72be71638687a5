//! Slidekit: headless slider position and value engine.
//!
//! Converts pointer, touch and keyboard input on a horizontal track into
//! stepped values for a single-value [`Slider`] and a two-knob
//! [`RangeSlider`]. The engine never touches a DOM itself: hosts feed it
//! events, report where the track sits and register the listeners it asks for.
//!
//! # Native Usage
//!
//! ```
//! use slidekit::{Event, MouseButton, Point, Rect, Slider, SliderProps};
//! use web_time::Instant;
//!
//! let mut slider = Slider::new(SliderProps::new().min(5.0).max(25.0).step(5.0))
//!     .unwrap()
//!     .with_track(Rect::new(0.0, 0.0, 200.0, 20.0));
//! slider.mount();
//!
//! let press = Event::MouseDown {
//!     position: Point::new(110.0, 10.0),
//!     button: MouseButton::Left,
//! };
//! slider.handle_event(&press, Instant::now());
//! assert_eq!(slider.value(), 15.0);
//! ```
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { WasmSlider } from './slidekit.js';
//!
//! await init();
//! const slider = new WasmSlider(0, 100, 1, undefined, 30, false, 'volume-label');
//! slider.mount(document.getElementById('track'));
//! for (const entry of slider.aria_attributes()) {
//!   const [name, value] = entry.split('=');
//!   knob.setAttribute(name, value);
//! }
//! ```

pub mod browser;

pub use slidekit_core::*;
pub use slidekit_widgets as widgets;
pub use slidekit_widgets::{
    ActiveKnob, AnySlider, ChangeCallback, EventResponse, GeometryProvider, Knob, ListenerHost,
    ListenerKind, ListenerOp, NoopHost, QueuedHost, RangeSlider, RangeSliderChanged,
    RangeSliderProps, RangeSliderView, RangeValue, RecordingHost, SharedTrack, Slider,
    SliderChanged, SliderControl, SliderProps, SliderView, TrackSource,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_reexports_build_sliders() {
        let slider = Slider::new(SliderProps::new().default_value(40.0)).unwrap();
        assert_eq!(slider.value(), 40.0);
        let range = RangeSlider::new(RangeSliderProps::new()).unwrap();
        assert_eq!(range.values(), RangeValue::new(0.0, 100.0));
    }
}
