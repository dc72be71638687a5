//! Single-value slider controller.

use crate::control::{ChangeCallback, SliderControl};
use crate::drag::{DragController, DragPhase, EventResponse, Knob, PointerTarget};
use crate::keyboard::{single_step, KeyIntent};
use crate::listeners::{ListenerHost, ListenerKind, ListenerRegistry};
use crate::track::{GeometryProvider, TrackSource};
use slidekit_core::{
    ensure_finite, AccessibleRole, ConfigError, Event, Key, LayoutResult, Point, Rect,
    SliderAccessibility, SliderConfig, SliderDescriptor, TypeId, ValueOwnership, Widget,
    DEFAULT_KNOB_RADIUS, DEFAULT_MAX, DEFAULT_MIN, DEFAULT_STEP,
};
use std::any::Any;
use std::fmt;
use web_time::{Duration, Instant};
use tracing::debug;

/// Message emitted when slider value changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderChanged {
    /// The new value
    pub value: f64,
}

/// Construction properties of a [`Slider`].
pub struct SliderProps {
    min: f64,
    max: f64,
    step: f64,
    value: Option<f64>,
    default_value: Option<f64>,
    disabled: bool,
    on_change: Option<ChangeCallback<f64>>,
    aria_labelled_by: Option<String>,
    knob_radius: f64,
    test_id: Option<String>,
    accessible_name: Option<String>,
}

impl fmt::Debug for SliderProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderProps")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("step", &self.step)
            .field("value", &self.value)
            .field("default_value", &self.default_value)
            .field("disabled", &self.disabled)
            .field("on_change", &self.on_change.is_some())
            .field("aria_labelled_by", &self.aria_labelled_by)
            .finish_non_exhaustive()
    }
}

impl Default for SliderProps {
    fn default() -> Self {
        Self::new()
    }
}

impl SliderProps {
    /// Defaults: `0..=100`, step 1, uncontrolled, seeded with 0 clamped into range.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            step: DEFAULT_STEP,
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

    /// Props of a `kind: single` descriptor; `None` for any other kind.
    #[must_use]
    pub fn from_descriptor(descriptor: &SliderDescriptor) -> Option<Self> {
        match descriptor {
            SliderDescriptor::Single {
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
                    .step(step.unwrap_or(DEFAULT_STEP))
                    .disabled(*disabled);
                props.value = *value;
                props.default_value = *default_value;
                props.aria_labelled_by.clone_from(aria_labelled_by);
                props.test_id.clone_from(id);
                Some(props)
            }
            SliderDescriptor::Range { .. } => None,
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

    /// Owner-supplied value; makes the slider controlled.
    #[must_use]
    pub const fn value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// Initial value of an uncontrolled slider.
    #[must_use]
    pub const fn default_value(mut self, value: f64) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Callback invoked with every committed value, or with every proposal
    /// when controlled.
    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut(f64) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Id of the element labelling the knob.
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

/// Snapshot of everything a presentation layer needs to draw a [`Slider`].
#[derive(Debug, Clone, PartialEq)]
pub struct SliderView {
    /// Current value
    pub value: f64,
    /// Knob position and track fill width, in percent
    pub percent: f64,
    /// Whether the knob is being dragged
    pub active: bool,
    /// Whether the knob has keyboard focus
    pub focused: bool,
    /// Whether input is ignored
    pub disabled: bool,
    /// Knob accessibility attributes
    pub accessibility: SliderAccessibility,
    /// Value mirrored into a hidden form input
    pub form_value: f64,
}

/// Single-value slider.
///
/// Pointer, touch and keyboard input all funnel into one commit path that
/// quantizes the value and invokes the change callback only when the value
/// actually moved. A controlled slider only proposes: its value changes
/// through [`set_value`](Slider::set_value).
pub struct Slider {
    config: SliderConfig,
    ownership: ValueOwnership,
    value: f64,
    percent: f64,
    proposed: Option<f64>,
    disabled: bool,
    focused: bool,
    mounted: bool,
    knob_radius: f64,
    aria_labelled_by: Option<String>,
    test_id_value: Option<String>,
    accessible_name_value: Option<String>,
    on_change: Option<ChangeCallback<f64>>,
    drag: DragController,
    listeners: ListenerRegistry,
    geometry: GeometryProvider,
}

impl fmt::Debug for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("config", &self.config)
            .field("ownership", &self.ownership)
            .field("value", &self.value)
            .field("percent", &self.percent)
            .field("disabled", &self.disabled)
            .field("focused", &self.focused)
            .field("drag", &self.drag)
            .field("listeners", &self.listeners)
            .field("geometry", &self.geometry)
            .finish_non_exhaustive()
    }
}

impl Slider {
    /// Build a slider. The initial value is clamped and quantized; no change
    /// callback fires.
    pub fn new(props: SliderProps) -> Result<Self, ConfigError> {
        let config = SliderConfig::new(props.min, props.max, props.step)?;
        let value = props.value.map(|v| ensure_finite("value", v)).transpose()?;
        let default_value = props
            .default_value
            .map(|v| ensure_finite("default_value", v))
            .transpose()?;
        let (ownership, seed) = ValueOwnership::resolve(value, default_value, 0.0);
        let value = config.quantize(seed);

        Ok(Self {
            config,
            ownership,
            value,
            percent: config.value_to_percent(value),
            proposed: None,
            disabled: props.disabled,
            focused: false,
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

    /// Build from a `kind: single` descriptor.
    pub fn from_descriptor(descriptor: &SliderDescriptor) -> Result<Option<Self>, ConfigError> {
        SliderProps::from_descriptor(descriptor)
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
        debug!(value = self.value, "slider mounted");
    }

    /// Abort any drag and release every listener.
    pub fn teardown(&mut self) {
        self.drag.cancel(&mut self.listeners);
        self.listeners.release_all();
        self.geometry.cancel_resize();
        self.mounted = false;
        debug!("slider torn down");
    }

    /// Run deferred listener releases and a due re-measure.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.listeners.tick();
        self.geometry.poll(now)
    }

    /// Feed one input event observed at `now`.
    pub fn handle_event(&mut self, event: &Event, now: Instant) -> EventResponse<f64> {
        match event {
            Event::Resize { .. } => {
                if !self.listeners.is_attached(ListenerKind::WindowResize) {
                    return EventResponse::ignored();
                }
                self.geometry.on_resize(now);
                EventResponse::handled(None, false)
            }
            Event::KeyDown { key } => self.key_down(*key),
            _ if event.is_pointer() => self.pointer_event(event),
            _ => EventResponse::ignored(),
        }
    }

    /// Apply a key to the focused knob.
    pub fn key_down(&mut self, key: Key) -> EventResponse<f64> {
        if self.disabled || !self.focused {
            return EventResponse::ignored();
        }
        let Some(intent) = KeyIntent::from_key(key) else {
            return EventResponse::ignored();
        };
        let next = single_step(intent, self.value, &self.config);
        EventResponse::handled(self.commit(next), false)
    }

    fn pointer_event(&mut self, event: &Event) -> EventResponse<f64> {
        if self.disabled {
            return EventResponse::ignored();
        }
        let target = event.position().and_then(|p| self.hit_test(&p));
        let Some(update) = self.drag.handle(event, target, &mut self.listeners, true) else {
            return EventResponse::ignored();
        };
        if update.phase == DragPhase::Start {
            self.focused = true;
        }
        let changed = update
            .client_x
            .and_then(|x| self.geometry.percent_at(x, &self.config))
            .and_then(|percent| self.commit(self.config.percent_to_value(percent)));
        EventResponse::handled(changed, update.prevent_default)
    }

    /// What a pointer at `point` would press.
    #[must_use]
    pub fn hit_test(&self, point: &Point) -> Option<PointerTarget> {
        if !self.geometry.geometry().is_valid() {
            return None;
        }
        let center = self.knob_center();
        if point.distance_to(&center) <= self.knob_radius {
            return Some(PointerTarget::Knob(Knob::Start));
        }
        self.geometry.contains(point).then_some(PointerTarget::Track)
    }

    /// Centre of the knob in client coordinates.
    #[must_use]
    pub fn knob_center(&self) -> Point {
        Point::new(
            self.geometry.client_x_of(self.percent),
            self.geometry.bounds().center().y,
        )
    }

    fn commit(&mut self, proposed: f64) -> Option<f64> {
        let value = self.config.quantize(proposed);
        if value == self.proposed.unwrap_or(self.value) {
            return None;
        }
        if self.ownership.is_controlled() {
            self.proposed = (value != self.value).then_some(value);
        } else {
            self.value = value;
            self.percent = self.config.value_to_percent(value);
        }
        if let Some(callback) = self.on_change.as_mut() {
            callback(value);
        }
        Some(value)
    }

    /// Overwrite the value of a controlled slider. Uncontrolled sliders
    /// ignore this and return `false`; no change callback fires.
    pub fn set_value(&mut self, value: f64) -> bool {
        if !self.ownership.is_controlled() || !value.is_finite() {
            return false;
        }
        let value = self.config.quantize(value);
        self.proposed = None;
        if value == self.value {
            return false;
        }
        debug!(from = self.value, to = value, "controlled value overwritten");
        self.value = value;
        self.percent = self.config.value_to_percent(value);
        true
    }

    /// Enable or disable input; disabling aborts a drag in flight.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.drag.cancel(&mut self.listeners);
            self.focused = false;
        }
    }

    /// Give the knob keyboard focus. Disabled knobs cannot be focused.
    pub fn focus(&mut self) -> bool {
        self.focused = !self.disabled;
        self.focused
    }

    /// Drop keyboard focus.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Current value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Knob position in percent.
    #[must_use]
    pub const fn percent(&self) -> f64 {
        self.percent
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Whether input is ignored.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether the knob has keyboard focus.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
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

    /// Value mirrored into a hidden form input.
    #[must_use]
    pub const fn form_value(&self) -> f64 {
        self.value
    }

    /// Knob accessibility attributes.
    #[must_use]
    pub fn accessibility(&self) -> SliderAccessibility {
        SliderAccessibility::horizontal(self.config.min(), self.config.max(), self.value)
            .labelled_by(self.aria_labelled_by.clone())
            .disabled(self.disabled)
    }

    /// Render snapshot.
    #[must_use]
    pub fn view(&self) -> SliderView {
        SliderView {
            value: self.value,
            percent: self.percent,
            active: self.is_active(),
            focused: self.focused,
            disabled: self.disabled,
            accessibility: self.accessibility(),
            form_value: self.form_value(),
        }
    }
}

impl SliderControl for Slider {
    type Value = f64;

    fn mount(&mut self) {
        Self::mount(self);
    }

    fn teardown(&mut self) {
        Self::teardown(self);
    }

    fn handle_event(&mut self, event: &Event, now: Instant) -> EventResponse<f64> {
        Self::handle_event(self, event, now)
    }

    fn tick(&mut self, now: Instant) -> bool {
        Self::tick(self, now)
    }

    fn current(&self) -> f64 {
        self.value
    }

    fn geometry(&self) -> &GeometryProvider {
        &self.geometry
    }
}

impl Widget for Slider {
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
            .map(|value| Box::new(SliderChanged { value }) as Box<dyn Any + Send>)
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
        AccessibleRole::Slider
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}
