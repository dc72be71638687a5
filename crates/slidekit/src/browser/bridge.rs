//! JavaScript bindings for the slider controllers.
//!
//! The page owns the DOM listeners. After each call it drains
//! [`listener_changes`](WasmSlider::listener_changes) and adds or removes
//! handlers on `document` or `window`, forwarding their events back here.

use super::dom::{active_knob_name, attribute_entries, listener_change};
use super::events::{
    element_rect, keyboard_event_to_slidekit, mouse_event_to_slidekit, touch_event_to_slidekit,
};
use crate::{
    Event, Knob, QueuedHost, RangeSlider, RangeSliderProps, RangeValue, SharedTrack, Slider,
    SliderControl, SliderProps,
};
use wasm_bindgen::prelude::*;
use web_sys::{Element, KeyboardEvent, MouseEvent, TouchEvent};
use web_time::Instant;

struct Bridge<C: SliderControl> {
    control: C,
    track: SharedTrack,
    host: QueuedHost,
}

impl<C: SliderControl> Bridge<C> {
    fn dispatch(&mut self, event: Option<Event>, raw: &web_sys::Event) -> Option<C::Value> {
        let response = self.control.handle_event(&event?, Instant::now());
        if response.prevent_default {
            raw.prevent_default();
        }
        response.changed
    }

    fn mount(&mut self, track: &Element) {
        self.track.set(element_rect(track));
        self.control.mount();
    }

    fn tick(&mut self, track: &Element) -> bool {
        self.track.set(element_rect(track));
        self.control.tick(Instant::now())
    }

    fn listener_changes(&self) -> Vec<String> {
        self.host.drain().into_iter().map(listener_change).collect()
    }
}

fn to_knob(knob: u8) -> Knob {
    if knob == 0 {
        Knob::Start
    } else {
        Knob::End
    }
}

fn js_error(error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// Single-value slider bound to a track element.
#[wasm_bindgen]
pub struct WasmSlider {
    inner: Bridge<Slider>,
}

#[wasm_bindgen]
impl WasmSlider {
    /// Create a slider. Pass `value` for a controlled slider.
    #[wasm_bindgen(constructor)]
    pub fn new(
        min: f64,
        max: f64,
        step: f64,
        value: Option<f64>,
        default_value: Option<f64>,
        disabled: bool,
        aria_labelled_by: Option<String>,
    ) -> Result<WasmSlider, JsValue> {
        let mut props = SliderProps::new().min(min).max(max).step(step).disabled(disabled);
        if let Some(value) = value {
            props = props.value(value);
        }
        if let Some(value) = default_value {
            props = props.default_value(value);
        }
        if let Some(id) = aria_labelled_by {
            props = props.aria_labelled_by(id);
        }
        let track = SharedTrack::default();
        let host = QueuedHost::new();
        let control = Slider::new(props)
            .map_err(js_error)?
            .with_listener_host(host.clone())
            .with_track(track.clone());
        Ok(Self {
            inner: Bridge {
                control,
                track,
                host,
            },
        })
    }

    /// Measure `track` and start listening for window resizes.
    pub fn mount(&mut self, track: &Element) {
        self.inner.mount(track);
    }

    /// Release every listener.
    pub fn teardown(&mut self) {
        self.inner.control.teardown();
    }

    /// Run deferred work. Returns whether the track was re-measured.
    pub fn tick(&mut self, track: &Element) -> bool {
        self.inner.tick(track)
    }

    /// Forward a mouse event. Returns the new value if it changed.
    pub fn on_mouse(&mut self, event: &MouseEvent, event_type: &str) -> Option<f64> {
        let converted = mouse_event_to_slidekit(event, event_type);
        self.inner.dispatch(converted, event)
    }

    /// Forward a touch event. Returns the new value if it changed.
    pub fn on_touch(&mut self, event: &TouchEvent, event_type: &str) -> Option<f64> {
        let converted = touch_event_to_slidekit(event, event_type);
        self.inner.dispatch(converted, event)
    }

    /// Forward a keydown event. Returns the new value if it changed.
    pub fn on_key(&mut self, event: &KeyboardEvent) -> Option<f64> {
        let converted = keyboard_event_to_slidekit(event, "keydown");
        self.inner.dispatch(converted, event)
    }

    /// Forward a window resize.
    pub fn on_resize(&mut self, width: f64, height: f64) {
        self.inner
            .control
            .handle_event(&Event::Resize { width, height }, Instant::now());
    }

    /// Listener changes since the last call, as `+document:mousemove` or
    /// `-window:resize`.
    pub fn listener_changes(&self) -> Vec<String> {
        self.inner.listener_changes()
    }

    /// Overwrite a controlled value. Returns whether it changed.
    pub fn set_value(&mut self, value: f64) -> bool {
        self.inner.control.set_value(value)
    }

    /// Enable or disable the slider.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.inner.control.set_disabled(disabled);
    }

    /// Give the slider keyboard focus.
    pub fn focus(&mut self) -> bool {
        self.inner.control.focus()
    }

    /// Drop keyboard focus.
    pub fn blur(&mut self) {
        self.inner.control.blur();
    }

    /// Committed value.
    pub fn value(&self) -> f64 {
        self.inner.control.value()
    }

    /// Knob position along the track, 0 to 100.
    pub fn percent(&self) -> f64 {
        self.inner.control.percent()
    }

    /// Whether a drag is in progress.
    pub fn is_active(&self) -> bool {
        self.inner.control.is_active()
    }

    /// Knob attributes as `name=value` entries.
    pub fn aria_attributes(&self) -> Vec<String> {
        attribute_entries(&self.inner.control.accessibility())
    }
}

/// Two-knob range slider bound to a track element.
#[wasm_bindgen]
pub struct WasmRangeSlider {
    inner: Bridge<RangeSlider>,
}

#[wasm_bindgen]
impl WasmRangeSlider {
    /// Create a range slider. Pass `start` and `end` for a controlled slider.
    #[wasm_bindgen(constructor)]
    pub fn new(
        min: f64,
        max: f64,
        step: f64,
        start: Option<f64>,
        end: Option<f64>,
        disabled: bool,
        aria_labelled_by: Option<String>,
    ) -> Result<WasmRangeSlider, JsValue> {
        let mut props = RangeSliderProps::new()
            .min(min)
            .max(max)
            .step(step)
            .disabled(disabled);
        if let (Some(start), Some(end)) = (start, end) {
            props = props.value([start, end]);
        }
        if let Some(id) = aria_labelled_by {
            props = props.aria_labelled_by(id);
        }
        let track = SharedTrack::default();
        let host = QueuedHost::new();
        let control = RangeSlider::new(props)
            .map_err(js_error)?
            .with_listener_host(host.clone())
            .with_track(track.clone());
        Ok(Self {
            inner: Bridge {
                control,
                track,
                host,
            },
        })
    }

    /// Measure `track` and start listening for window resizes.
    pub fn mount(&mut self, track: &Element) {
        self.inner.mount(track);
    }

    /// Release every listener.
    pub fn teardown(&mut self) {
        self.inner.control.teardown();
    }

    /// Run deferred work. Returns whether the track was re-measured.
    pub fn tick(&mut self, track: &Element) -> bool {
        self.inner.tick(track)
    }

    /// Forward a mouse event. Returns `[start, end]` if it changed.
    pub fn on_mouse(&mut self, event: &MouseEvent, event_type: &str) -> Option<Vec<f64>> {
        let converted = mouse_event_to_slidekit(event, event_type);
        self.inner
            .dispatch(converted, event)
            .map(|value| value.to_array().to_vec())
    }

    /// Forward a touch event. Returns `[start, end]` if it changed.
    pub fn on_touch(&mut self, event: &TouchEvent, event_type: &str) -> Option<Vec<f64>> {
        let converted = touch_event_to_slidekit(event, event_type);
        self.inner
            .dispatch(converted, event)
            .map(|value| value.to_array().to_vec())
    }

    /// Forward a keydown event. Returns `[start, end]` if it changed.
    pub fn on_key(&mut self, event: &KeyboardEvent) -> Option<Vec<f64>> {
        let converted = keyboard_event_to_slidekit(event, "keydown");
        self.inner
            .dispatch(converted, event)
            .map(|value| value.to_array().to_vec())
    }

    /// Forward a window resize.
    pub fn on_resize(&mut self, width: f64, height: f64) {
        self.inner
            .control
            .handle_event(&Event::Resize { width, height }, Instant::now());
    }

    /// Listener changes since the last call, as `+document:mousemove` or
    /// `-window:resize`.
    pub fn listener_changes(&self) -> Vec<String> {
        self.inner.listener_changes()
    }

    /// Overwrite controlled values. Returns whether they changed.
    pub fn set_values(&mut self, start: f64, end: f64) -> Result<bool, JsValue> {
        self.inner
            .control
            .set_values(RangeValue::new(start, end))
            .map_err(js_error)
    }

    /// Enable or disable the slider.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.inner.control.set_disabled(disabled);
    }

    /// Give a knob keyboard focus: 0 for start, 1 for end.
    pub fn focus(&mut self, knob: u8) -> bool {
        self.inner.control.focus(to_knob(knob))
    }

    /// Drop keyboard focus.
    pub fn blur(&mut self) {
        self.inner.control.blur();
    }

    /// Committed `[start, end]`.
    pub fn values(&self) -> Vec<f64> {
        self.inner.control.values().to_array().to_vec()
    }

    /// Knob positions along the track, 0 to 100.
    pub fn percents(&self) -> Vec<f64> {
        self.inner.control.percents().to_vec()
    }

    /// Highlighted segment as `[left, width]` in percent.
    pub fn track_segment(&self) -> Vec<f64> {
        self.inner.control.track_segment().to_vec()
    }

    /// Knob being dragged: `"none"`, `"start"` or `"end"`.
    pub fn active_knob(&self) -> String {
        active_knob_name(self.inner.control.active_knob()).to_string()
    }

    /// Attributes of one knob (0 for start, 1 for end) as `name=value` entries.
    pub fn aria_attributes(&self, knob: u8) -> Vec<String> {
        let [start, end] = self.inner.control.accessibility();
        attribute_entries(if to_knob(knob) == Knob::Start { &start } else { &end })
    }
}
