//! Slider controllers for Slidekit.
//!
//! [`Slider`] holds one value, [`RangeSlider`] an ordered pair. Both are
//! headless: the host feeds them [`Event`](slidekit_core::Event)s, tells them
//! where the track sits through a [`TrackSource`], and performs listener
//! (un)registration through a [`ListenerHost`].
//!
//! # Examples
//!
//! ```
//! use slidekit_core::{Event, MouseButton, Point, Rect};
//! use slidekit_widgets::{Slider, SliderProps};
//! use web_time::Instant;
//!
//! let mut slider = Slider::new(SliderProps::new())
//!     .unwrap()
//!     .with_track(Rect::new(0.0, 0.0, 200.0, 20.0));
//! slider.mount();
//!
//! let press = Event::MouseDown {
//!     position: Point::new(100.0, 10.0),
//!     button: MouseButton::Left,
//! };
//! let response = slider.handle_event(&press, Instant::now());
//! assert_eq!(response.changed, Some(50.0));
//! ```

mod control;
pub mod drag;
pub mod keyboard;
pub mod listeners;
pub mod range_slider;
pub mod slider;
pub mod track;

pub use control::{ChangeCallback, SliderControl};
pub use drag::{
    ActiveKnob, DragController, DragPhase, DragState, DragUpdate, EventResponse, Knob,
    PointerTarget,
};
pub use keyboard::{range_step, single_step, KeyIntent};
pub use listeners::{
    ListenerHost, ListenerKind, ListenerOp, ListenerRegistry, NoopHost, QueuedHost,
    RecordingHost,
};
pub use range_slider::{
    RangeSlider, RangeSliderChanged, RangeSliderProps, RangeSliderView, RangeValue,
};
pub use slider::{Slider, SliderChanged, SliderProps, SliderView};
pub use track::{DetachedTrack, GeometryProvider, SharedTrack, TrackSource};

use slidekit_core::{ConfigError, SliderDescriptor};

/// Either slider variant, as built from a [`SliderDescriptor`].
#[derive(Debug)]
pub enum AnySlider {
    /// Single-value slider
    Single(Slider),
    /// Two-knob range slider
    Range(RangeSlider),
}

impl AnySlider {
    /// Build the variant named by the descriptor's `kind`.
    pub fn from_descriptor(descriptor: &SliderDescriptor) -> Result<Self, ConfigError> {
        match SliderProps::from_descriptor(descriptor) {
            Some(props) => Slider::new(props).map(Self::Single),
            None => RangeSlider::new(
                RangeSliderProps::from_descriptor(descriptor).unwrap_or_default(),
            )
            .map(Self::Range),
        }
    }

    /// Build every slider of a YAML descriptor list.
    pub fn list_from_yaml(yaml: &str) -> Result<Vec<Self>, ConfigError> {
        SliderDescriptor::list_from_yaml(yaml)?
            .iter()
            .map(Self::from_descriptor)
            .collect()
    }

    /// Measure the track and register the resize listener.
    pub fn mount(&mut self) {
        match self {
            Self::Single(slider) => slider.mount(),
            Self::Range(slider) => slider.mount(),
        }
    }

    /// Release every listener.
    pub fn teardown(&mut self) {
        match self {
            Self::Single(slider) => slider.teardown(),
            Self::Range(slider) => slider.teardown(),
        }
    }

    /// Committed value(s) as hidden form input values.
    #[must_use]
    pub fn form_values(&self) -> Vec<f64> {
        match self {
            Self::Single(slider) => vec![slider.form_value()],
            Self::Range(slider) => slider.form_values().to_vec(),
        }
    }

    /// Whether this is a range slider.
    #[must_use]
    pub const fn is_range(&self) -> bool {
        matches!(self, Self::Range(_))
    }
}
