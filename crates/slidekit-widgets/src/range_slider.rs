//! Two-knob range slider controller.
//!
//! Both knobs share one track, one drag machine and one listener registry.
//! Every committed update keeps `start <= end`: a knob pushed onto or past
//! its partner stops one step short of it.

use crate::control::{ChangeCallback, SliderControl};
use crate::drag::{ActiveKnob, DragController, DragPhase, EventResponse, Knob, PointerTarget};
use crate::keyboard::{range_step, KeyIntent};
use crate::listeners::{ListenerHost, ListenerKind, ListenerRegistry};
use crate::track::{GeometryProvider, TrackSource};
use slidekit_core::{
    ensure_finite, AccessibleRole, ConfigError, Event, Key, LayoutResult, Point, Rect,
    SliderAccessibility, SliderConfig, SliderDescriptor, TypeId, ValueOwnership, Widget,
    DEFAULT_KNOB_RADIUS, DEFAULT_MAX, DEFAULT_MIN, DEFAULT_RANGE_STEP,
};
use std::any::Any;
use std::fmt;
use web_time::{Duration, Instant};
use tracing::debug;

/// Ordered start/end pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RangeValue {
    /// Lower value
    pub start: f64,
    /// Upper value
    pub end: f64,
}

impl RangeValue {
    /// Create a pair.
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Value of one knob.
    #[must_use]
    pub const fn get(&self, knob: Knob) -> f64 {
        match knob {
            Knob::Start => self.start,
            Knob::End => self.end,
        }
    }

    /// Pair after dragging `knob` to `proposed`.
    ///
    /// The start knob accepts values strictly below `end` and otherwise lands
    /// on `end - step`; the end knob accepts values strictly above `start` and
    /// otherwise lands on `start + step`.
    #[must_use]
    pub fn with_drag(self, knob: Knob, proposed: f64, step: f64) -> Self {
        match knob {
            Knob::Start => Self {
                start: if proposed < self.end {
                    proposed
                } else {
                    self.end - step
                },
                ..self
            },
            Knob::End => Self {
                end: if proposed > self.start {
                    proposed
                } else {
                    self.start + step
                },
                ..self
            },
        }
    }

    /// Clamp both values into range, quantize them and restore ordering.
    #[must_use]
    pub fn normalize(self, config: &SliderConfig) -> Self {
        let start = config.quantize(self.start);
        let end = config.quantize(self.end);
        Self {
            start: start.min(end),
            end,
        }
    }

    /// As a `[start, end]` array.
    #[must_use]
    pub const fn to_array(self) -> [f64; 2] {
        [self.start, self.end]
    }
}

impl From<[f64; 2]> for RangeValue {
    fn from([start, end]: [f64; 2]) -> Self {
        Self { start, end }
    }
}

impl From<(f64, f64)> for RangeValue {
    fn from((start, end): (f64, f64)) -> Self {
        Self { start, end }
    }
}

/// Message emitted when a range slider value changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSliderChanged {
    /// The new ordered pair
    pub value: RangeValue,
}

/// Construction properties of a [`RangeSlider`].
pub struct RangeSliderProps {
    min: f64,
    max: f64,
    step: f64,
    value: Option<RangeValue>,
    default_value: Option<RangeValue>,
    disabled: bool,
    on_change: Option<ChangeCallback<RangeValue>>,
    aria_labelled_by: Option<String>,
    knob_radius: f64,
    test_id: Option<String>,
    accessible_name: Option<String>,
}

impl fmt::Debug for RangeSliderProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSliderProps")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("step", &self.step)
            .field("value", &self.value)
            .field("default_value", &self.default_value)
            .field("disabled", &self.disabled)
            .field("on_change", &self.on_change.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for RangeSliderProps {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeSliderProps {
    /// Defaults: `0..=100`, step 0.01, uncontrolled, spanning the full range.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            step: DEFAULT_RANGE_STEP,
            value: None,
            default_value: None,
            disabled: false,
            on_change: None,
            aria_labelled_by: None,
            knob_radius: DEFAULT_KNOB_RADIUS,
            test_id: None,
            accessible_name: None,
        }
    }

    /// Props of a `kind: range` descriptor; `None` for any other kind.
    #[must_use]
    pub fn from_descriptor(descriptor: &SliderDescriptor) -> Option<Self> {
        match descriptor {
            SliderDescriptor::Range {
                id,
                min,
                max,
                step,
                value,
                default_value,
                disabled,
                aria_labelled_by,
            } => {
                let mut props = Self::new()
                    .min(*min)
                    .max(*max)
                    .step(step.unwrap_or(DEFAULT_RANGE_STEP))
                    .disabled(*disabled);
                props.value = value.map(RangeValue::from);
                props.default_value = default_value.map(RangeValue::from);
                props.aria_labelled_by.clone_from(aria_labelled_by);
                props.test_id.clone_from(id);
                Some(props)
            }
            SliderDescriptor::Single { .. } => None,
        }
    }

    /// Set the minimum value.
    #[must_use]
    pub const fn min(mut self, min: f64) -> Self {
        self.min = min;
        self
    }

    /// Set the maximum value.
    #[must_use]
    pub const fn max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    /// Set the step increment.
    #[must_use]
    pub const fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Owner-supplied pair; makes the slider controlled.
    #[must_use]
    pub fn value(mut self, value: impl Into<RangeValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Initial pair of an uncontrolled slider.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<RangeValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Callback invoked with every committed pair, or with every proposal
    /// when controlled.
    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut(RangeValue) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Id of the element labelling both knobs.
    #[must_use]
    pub fn aria_labelled_by(mut self, id: impl Into<String>) -> Self {
        self.aria_labelled_by = Some(id.into());
        self
    }

    /// Knob hit radius in pixels.
    #[must_use]
    pub fn knob_radius(mut self, radius: f64) -> Self {
        self.knob_radius = radius.max(0.0);
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = Some(id.into());
        self
    }

    /// Set accessible name.
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name = Some(name.into());
        self
    }
}

/// Snapshot of everything a presentation layer needs to draw a [`RangeSlider`].
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSliderView {
    /// Current pair
    pub value: RangeValue,
    /// Knob positions in percent
    pub percents: [f64; 2],
    /// Filled segment between the knobs: `[left%, width%]`
    pub track_segment: [f64; 2],
    /// Knob being dragged
    pub active_knob: ActiveKnob,
    /// Knob with keyboard focus
    pub focused_knob: Option<Knob>,
    /// Whether input is ignored
    pub disabled: bool,
    /// Start and end knob accessibility attributes
    pub accessibility: [SliderAccessibility; 2],
    /// Values mirrored into hidden form inputs
    pub form_values: [f64; 2],
}

/// Two-knob range slider.
///
/// A controlled range slider reports proposed pairs through the change
/// callback and keeps its values until [`set_values`](RangeSlider::set_values).
pub struct RangeSlider {
    config: SliderConfig,
    ownership: ValueOwnership,
    values: RangeValue,
    proposed: Option<RangeValue>,
    disabled: bool,
    focused_knob: Option<Knob>,
    mounted: bool,
    knob_radius: f64,
    aria_labelled_by: Option<String>,
    test_id_value: Option<String>,
    accessible_name_value: Option<String>,
    on_change: Option<ChangeCallback<RangeValue>>,
    drag: DragController,
    listeners: ListenerRegistry,
    geometry: GeometryProvider,
}

impl fmt::Debug for RangeSlider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSlider")
            .field("config", &self.config)
            .field("ownership", &self.ownership)
            .field("values", &self.values)
            .field("disabled", &self.disabled)
            .field("focused_knob", &self.focused_knob)
            .field("drag", &self.drag)
            .field("listeners", &self.listeners)
            .field("geometry", &self.geometry)
            .finish_non_exhaustive()
    }
}

fn checked_pair(
    field: &'static str,
    pair: Option<RangeValue>,
) -> Result<Option<RangeValue>, ConfigError> {
    let Some(pair) = pair else {
        return Ok(None);
    };
    ensure_finite(field, pair.start)?;
    ensure_finite(field, pair.end)?;
    if pair.start > pair.end {
        return Err(ConfigError::UnorderedPair {
            start: pair.start,
            end: pair.end,
        });
    }
    Ok(Some(pair))
}

impl RangeSlider {
    /// Build a range slider. The initial pair is clamped and quantized; no
    /// change callback fires.
    pub fn new(props: RangeSliderProps) -> Result<Self, ConfigError> {
        let config = SliderConfig::new(props.min, props.max, props.step)?;
        let value = checked_pair("value", props.value)?;
        let default_value = checked_pair("default_value", props.default_value)?;
        let full = RangeValue::new(config.min(), config.max());
        let (ownership, seed) = ValueOwnership::resolve(value, default_value, full);

        Ok(Self {
            config,
            ownership,
            values: seed.normalize(&config),
            proposed: None,
            disabled: props.disabled,
            focused_knob: None,
            mounted: false,
            knob_radius: props.knob_radius,
            aria_labelled_by: props.aria_labelled_by,
            test_id_value: props.test_id,
            accessible_name_value: props.accessible_name,
            on_change: props.on_change,
            drag: DragController::new(),
            listeners: ListenerRegistry::default(),
            geometry: GeometryProvider::default(),
        })
    }

    /// Build from a `kind: range` descriptor.
    pub fn from_descriptor(descriptor: &SliderDescriptor) -> Result<Option<Self>, ConfigError> {
        RangeSliderProps::from_descriptor(descriptor)
            .map(Self::new)
            .transpose()
    }

    /// Register host listeners through `host`.
    #[must_use]
    pub fn with_listener_host(mut self, host: impl ListenerHost + 'static) -> Self {
        self.listeners = ListenerRegistry::new(host);
        self
    }

    /// Measure the track through `source`.
    #[must_use]
    pub fn with_track(mut self, source: impl TrackSource + 'static) -> Self {
        self.geometry.set_source(source);
        self
    }

    /// Override the resize debounce period.
    #[must_use]
    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.geometry = self.geometry.with_debounce(delay);
        self
    }

    /// Measure the track and start listening for window resizes.
    pub fn mount(&mut self) {
        self.geometry.measure();
        self.listeners.acquire(&[ListenerKind::WindowResize]);
        self.mounted = true;
        debug!(start = self.values.start, end = self.values.end, "range slider mounted");
    }

    /// Abort any drag and release every listener.
    pub fn teardown(&mut self) {
        self.drag.cancel(&mut self.listeners);
        self.listeners.release_all();
        self.geometry.cancel_resize();
        self.mounted = false;
        debug!("range slider torn down");
    }

    /// Run deferred listener releases and a due re-measure.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.listeners.tick();
        self.geometry.poll(now)
    }

    /// Feed one input event observed at `now`, hit-testing pointer-downs.
    pub fn handle_event(&mut self, event: &Event, now: Instant) -> EventResponse<RangeValue> {
        match event {
            Event::Resize { .. } => {
                if !self.listeners.is_attached(ListenerKind::WindowResize) {
                    return EventResponse::ignored();
                }
                self.geometry.on_resize(now);
                EventResponse::handled(None, false)
            }
            Event::KeyDown { key } => self.key_down(*key),
            _ if event.is_pointer() => {
                let target = event.position().and_then(|p| self.hit_test(&p));
                self.pointer_event(event, target)
            }
            _ => EventResponse::ignored(),
        }
    }

    /// Feed a pointer event whose down target the host already resolved.
    pub fn pointer_down_on(
        &mut self,
        target: PointerTarget,
        event: &Event,
    ) -> EventResponse<RangeValue> {
        self.pointer_event(event, Some(target))
    }

    /// Apply a key to the focused knob.
    pub fn key_down(&mut self, key: Key) -> EventResponse<RangeValue> {
        if self.disabled {
            return EventResponse::ignored();
        }
        let (Some(knob), Some(intent)) = (self.focused_knob, KeyIntent::from_key(key)) else {
            return EventResponse::ignored();
        };
        let next = range_step(intent, knob, self.values, &self.config);
        EventResponse::handled(self.commit(next), false)
    }

    fn pointer_event(
        &mut self,
        event: &Event,
        target: Option<PointerTarget>,
    ) -> EventResponse<RangeValue> {
        if self.disabled {
            return EventResponse::ignored();
        }
        let Some(update) = self.drag.handle(event, target, &mut self.listeners, false) else {
            return EventResponse::ignored();
        };
        if update.phase == DragPhase::Start {
            self.focused_knob = Some(update.knob);
        }
        let changed = update
            .client_x
            .and_then(|x| self.geometry.percent_at(x, &self.config))
            .and_then(|percent| {
                let proposed = self.config.percent_to_value(percent);
                let next = self
                    .values
                    .with_drag(update.knob, proposed, self.config.step())
                    .normalize(&self.config);
                self.commit(next)
            });
        EventResponse::handled(changed, update.prevent_default)
    }

    /// What a pointer at `point` would press.
    ///
    /// The end knob is drawn above the start knob and wins overlaps; a press
    /// on the bare track drives the start knob.
    #[must_use]
    pub fn hit_test(&self, point: &Point) -> Option<PointerTarget> {
        if !self.geometry.geometry().is_valid() {
            return None;
        }
        for knob in [Knob::End, Knob::Start] {
            let center = self.knob_center(knob);
            if point.distance_to(&center) <= self.knob_radius {
                return Some(PointerTarget::Knob(knob));
            }
        }
        self.geometry.contains(point).then_some(PointerTarget::Track)
    }

    /// Centre of a knob in client coordinates.
    #[must_use]
    pub fn knob_center(&self, knob: Knob) -> Point {
        let percent = self.config.value_to_percent(self.values.get(knob));
        Point::new(
            self.geometry.client_x_of(percent),
            self.geometry.bounds().center().y,
        )
    }

    fn commit(&mut self, next: RangeValue) -> Option<RangeValue> {
        if next == self.proposed.unwrap_or(self.values) {
            return None;
        }
        if self.ownership.is_controlled() {
            self.proposed = (next != self.values).then_some(next);
        } else {
            self.values = next;
        }
        if let Some(callback) = self.on_change.as_mut() {
            callback(next);
        }
        Some(next)
    }

    /// Overwrite the pair of a controlled slider.
    ///
    /// Uncontrolled sliders ignore this and return `Ok(false)`; no change
    /// callback fires.
    pub fn set_values(&mut self, values: impl Into<RangeValue>) -> Result<bool, ConfigError> {
        let Some(values) = checked_pair("value", Some(values.into()))? else {
            return Ok(false);
        };
        if !self.ownership.is_controlled() {
            return Ok(false);
        }
        let values = values.normalize(&self.config);
        self.proposed = None;
        if values == self.values {
            return Ok(false);
        }
        debug!(start = values.start, end = values.end, "controlled range overwritten");
        self.values = values;
        Ok(true)
    }

    /// Enable or disable input; disabling aborts a drag in flight.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.drag.cancel(&mut self.listeners);
            self.focused_knob = None;
        }
    }

    /// Give one knob keyboard focus. Disabled knobs cannot be focused.
    pub fn focus(&mut self, knob: Knob) -> bool {
        self.focused_knob = (!self.disabled).then_some(knob);
        self.focused_knob.is_some()
    }

    /// Drop keyboard focus.
    pub fn blur(&mut self) {
        self.focused_knob = None;
    }

    /// Current pair.
    #[must_use]
    pub const fn values(&self) -> RangeValue {
        self.values
    }

    /// Knob positions in percent.
    #[must_use]
    pub fn percents(&self) -> [f64; 2] {
        [
            self.config.value_to_percent(self.values.start),
            self.config.value_to_percent(self.values.end),
        ]
    }

    /// Filled segment between the knobs as `[left%, width%]`.
    #[must_use]
    pub fn track_segment(&self) -> [f64; 2] {
        let [start, end] = self.percents();
        [start, end - start]
    }

    /// Knob being dragged.
    #[must_use]
    pub const fn active_knob(&self) -> ActiveKnob {
        self.drag.active_knob()
    }

    /// Knob with keyboard focus.
    #[must_use]
    pub const fn focused_knob(&self) -> Option<Knob> {
        self.focused_knob
    }

    /// Whether input is ignored.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether [`mount`](Self::mount) ran without a later teardown.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Value ownership chosen at construction.
    #[must_use]
    pub const fn ownership(&self) -> ValueOwnership {
        self.ownership
    }

    /// Numeric configuration.
    #[must_use]
    pub const fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Track measurement state.
    #[must_use]
    pub const fn geometry(&self) -> &GeometryProvider {
        &self.geometry
    }

    /// Listeners currently held.
    #[must_use]
    pub const fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    /// Values mirrored into hidden form inputs.
    #[must_use]
    pub const fn form_values(&self) -> [f64; 2] {
        self.values.to_array()
    }

    /// Accessibility attributes of the start and end knobs.
    #[must_use]
    pub fn accessibility(&self) -> [SliderAccessibility; 2] {
        let knob = |now| {
            SliderAccessibility::horizontal(self.config.min(), self.config.max(), now)
                .labelled_by(self.aria_labelled_by.clone())
                .disabled(self.disabled)
        };
        [knob(self.values.start), knob(self.values.end)]
    }

    /// Render snapshot.
    #[must_use]
    pub fn view(&self) -> RangeSliderView {
        RangeSliderView {
            value: self.values,
            percents: self.percents(),
            track_segment: self.track_segment(),
            active_knob: self.active_knob(),
            focused_knob: self.focused_knob,
            disabled: self.disabled,
            accessibility: self.accessibility(),
            form_values: self.form_values(),
        }
    }
}

impl SliderControl for RangeSlider {
    type Value = RangeValue;

    fn mount(&mut self) {
        Self::mount(self);
    }

    fn teardown(&mut self) {
        Self::teardown(self);
    }

    fn handle_event(&mut self, event: &Event, now: Instant) -> EventResponse<RangeValue> {
        Self::handle_event(self, event, now)
    }

    fn tick(&mut self, now: Instant) -> bool {
        Self::tick(self, now)
    }

    fn current(&self) -> RangeValue {
        self.values
    }

    fn geometry(&self) -> &GeometryProvider {
        &self.geometry
    }
}

impl Widget for RangeSlider {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.geometry.set_source(bounds);
        self.geometry.measure();
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        self.handle_event(event, Instant::now())
            .changed
            .map(|value| Box::new(RangeSliderChanged { value }) as Box<dyn Any + Send>)
    }

    fn is_interactive(&self) -> bool {
        !self.disabled
    }

    fn is_focusable(&self) -> bool {
        !self.disabled
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Group
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}
