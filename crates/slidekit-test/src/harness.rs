//! Scripted interaction harness for slider controllers.

use slidekit_core::{ConfigError, Event, Key, MouseButton, Point, Rect, Touch};
use slidekit_widgets::{
    ListenerKind, RangeSlider, RangeSliderProps, RecordingHost, SharedTrack, Slider,
    SliderControl, SliderProps,
};
use std::collections::VecDeque;
use web_time::{Duration, Instant};

/// Drives one slider through pointer, touch, keyboard and resize input on a
/// virtual clock.
///
/// The track is a [`SharedTrack`] the test can move or resize, and listener
/// registration goes to a [`RecordingHost`] so leaks are observable.
pub struct Harness<C: SliderControl> {
    control: C,
    track: SharedTrack,
    host: RecordingHost,
    epoch: Instant,
    elapsed: Duration,
    event_queue: VecDeque<Event>,
    emitted: Vec<C::Value>,
    prevented: usize,
    remeasures: usize,
}

impl Harness<Slider> {
    /// Mount a single-value slider on a track at `rect`.
    pub fn slider(props: SliderProps, rect: Rect) -> Result<Self, ConfigError> {
        let track = SharedTrack::new(rect);
        let host = RecordingHost::new();
        let control = Slider::new(props)?
            .with_listener_host(host.clone())
            .with_track(track.clone());
        Ok(Self::mounted(control, track, host))
    }
}

impl Harness<RangeSlider> {
    /// Mount a range slider on a track at `rect`.
    pub fn range(props: RangeSliderProps, rect: Rect) -> Result<Self, ConfigError> {
        let track = SharedTrack::new(rect);
        let host = RecordingHost::new();
        let control = RangeSlider::new(props)?
            .with_listener_host(host.clone())
            .with_track(track.clone());
        Ok(Self::mounted(control, track, host))
    }
}

impl<C: SliderControl> Harness<C> {
    /// Mount `control`, which must already read from `track` and register
    /// through `host`.
    pub fn mounted(mut control: C, track: SharedTrack, host: RecordingHost) -> Self {
        control.mount();
        Self {
            control,
            track,
            host,
            epoch: Instant::now(),
            elapsed: Duration::ZERO,
            event_queue: VecDeque::new(),
            emitted: Vec::new(),
            prevented: 0,
            remeasures: 0,
        }
    }

    // === Clock ===

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.epoch + self.elapsed
    }

    /// Advance the virtual clock and run one scheduling turn.
    pub fn advance(&mut self, by: Duration) -> &mut Self {
        self.elapsed += by;
        self.tick()
    }

    /// Run one scheduling turn without moving the clock.
    pub fn tick(&mut self) -> &mut Self {
        let now = self.now();
        if self.control.tick(now) {
            self.remeasures += 1;
        }
        self
    }

    // === Pointer ===

    /// Vertical centre of the track.
    #[must_use]
    pub fn track_y(&self) -> f64 {
        self.control.geometry().bounds().center().y
    }

    /// Client X of `percent` along the track.
    #[must_use]
    pub fn x_at(&self, percent: f64) -> f64 {
        self.control.geometry().client_x_of(percent)
    }

    /// Press the left mouse button at `x`.
    pub fn press(&mut self, x: f64) -> &mut Self {
        let position = Point::new(x, self.track_y());
        self.dispatch(Event::MouseDown {
            position,
            button: MouseButton::Left,
        })
    }

    /// Move the mouse to `x`.
    pub fn move_to(&mut self, x: f64) -> &mut Self {
        let position = Point::new(x, self.track_y());
        self.dispatch(Event::MouseMove { position })
    }

    /// Release the left mouse button at `x`.
    pub fn release(&mut self, x: f64) -> &mut Self {
        let position = Point::new(x, self.track_y());
        self.dispatch(Event::MouseUp {
            position,
            button: MouseButton::Left,
        })
    }

    /// Move the mouse out of the control at `x`.
    pub fn mouse_out(&mut self, x: f64) -> &mut Self {
        let position = Point::new(x, self.track_y());
        self.dispatch(Event::MouseOut { position })
    }

    /// Press, drag through `path`, release at its last point, then tick.
    pub fn drag(&mut self, from: f64, path: &[f64]) -> &mut Self {
        self.press(from);
        for &x in path {
            self.move_to(x);
        }
        let end = path.last().copied().unwrap_or(from);
        self.release(end).tick()
    }

    /// Press and release at `x`, then tick.
    pub fn click(&mut self, x: f64) -> &mut Self {
        self.press(x).release(x).tick()
    }

    // === Touch ===

    fn touches(&self, xs: &[f64]) -> Vec<Touch> {
        let y = self.track_y();
        xs.iter()
            .zip(0u32..)
            .map(|(&x, id)| Touch::new(id, Point::new(x, y)))
            .collect()
    }

    /// Put fingers down at `xs`.
    pub fn touch_start(&mut self, xs: &[f64]) -> &mut Self {
        let touches = self.touches(xs);
        self.dispatch(Event::TouchStart {
            changed_touches: touches.clone(),
            touches,
        })
    }

    /// Move the fingers to `xs`.
    pub fn touch_move(&mut self, xs: &[f64]) -> &mut Self {
        let touches = self.touches(xs);
        self.dispatch(Event::TouchMove {
            changed_touches: touches.clone(),
            touches,
        })
    }

    /// Lift every finger; the first lifted one was at `x`.
    pub fn touch_end(&mut self, x: f64) -> &mut Self {
        let changed_touches = self.touches(&[x]);
        self.dispatch(Event::TouchEnd {
            touches: Vec::new(),
            changed_touches,
        })
    }

    // === Keyboard and window ===

    /// Press a key.
    pub fn key(&mut self, key: Key) -> &mut Self {
        self.dispatch(Event::KeyDown { key })
    }

    /// Fire a window resize.
    pub fn resize(&mut self, width: f64, height: f64) -> &mut Self {
        self.dispatch(Event::Resize { width, height })
    }

    /// Move or resize the track element.
    pub fn set_track(&mut self, rect: Rect) -> &mut Self {
        self.track.set(rect);
        self
    }

    /// Detach the track element.
    pub fn detach_track(&mut self) -> &mut Self {
        self.track.detach();
        self
    }

    /// Tear the control down.
    pub fn teardown(&mut self) -> &mut Self {
        self.control.teardown();
        self
    }

    // === Queries ===

    /// Current committed value.
    #[must_use]
    pub fn value(&self) -> C::Value {
        self.control.current()
    }

    /// Every value reported as changed, in order.
    #[must_use]
    pub fn emitted(&self) -> &[C::Value] {
        &self.emitted
    }

    /// Most recent reported change.
    #[must_use]
    pub fn last_emitted(&self) -> Option<C::Value> {
        self.emitted.last().copied()
    }

    /// Forget reported changes.
    pub fn clear_emitted(&mut self) -> &mut Self {
        self.emitted.clear();
        self
    }

    /// Number of events whose default action was suppressed.
    #[must_use]
    pub const fn prevented_defaults(&self) -> usize {
        self.prevented
    }

    /// Re-measurements triggered by resize bursts.
    #[must_use]
    pub const fn remeasures(&self) -> usize {
        self.remeasures
    }

    /// The control under test.
    #[must_use]
    pub const fn control(&self) -> &C {
        &self.control
    }

    /// The control under test, mutably.
    pub fn control_mut(&mut self) -> &mut C {
        &mut self.control
    }

    /// Listener registrations seen by the host.
    #[must_use]
    pub const fn host(&self) -> &RecordingHost {
        &self.host
    }

    // === Assertions ===

    /// Assert the committed value.
    ///
    /// # Panics
    ///
    /// Panics if the value differs.
    pub fn assert_value(&self, expected: C::Value) -> &Self {
        let actual = self.value();
        assert_eq!(
            actual, expected,
            "Expected slider value {expected:?} but got {actual:?}"
        );
        self
    }

    /// Assert the reported changes.
    ///
    /// # Panics
    ///
    /// Panics if the sequence differs.
    pub fn assert_emitted(&self, expected: &[C::Value]) -> &Self {
        assert_eq!(
            self.emitted.as_slice(),
            expected,
            "Unexpected change notifications"
        );
        self
    }

    /// Assert that only the window resize listener is attached.
    ///
    /// # Panics
    ///
    /// Panics if drag listeners are still attached.
    pub fn assert_idle_listeners(&self) -> &Self {
        let active = self.host.active();
        assert_eq!(
            active,
            vec![ListenerKind::WindowResize],
            "Expected only the resize listener, found {active:?}"
        );
        self
    }

    /// Assert that no listener is attached.
    ///
    /// # Panics
    ///
    /// Panics if any listener is still attached.
    pub fn assert_no_listeners(&self) -> &Self {
        let active = self.host.active();
        assert!(active.is_empty(), "Leaked listeners: {active:?}");
        self
    }

    // === Internal ===

    fn dispatch(&mut self, event: Event) -> &mut Self {
        self.event_queue.push_back(event);
        self.process_events();
        self
    }

    fn process_events(&mut self) {
        let now = self.now();
        while let Some(event) = self.event_queue.pop_front() {
            let response = self.control.handle_event(&event, now);
            if response.prevent_default {
                self.prevented += 1;
            }
            if let Some(value) = response.changed {
                self.emitted.push(value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidekit_widgets::RangeValue;

    const TRACK: Rect = Rect::new(0.0, 0.0, 200.0, 20.0);

    #[test]
    fn test_harness_mounts() {
        let harness = Harness::slider(SliderProps::new(), TRACK).unwrap();
        harness.assert_idle_listeners().assert_value(0.0);
        assert_eq!(harness.control().geometry().measure_count(), 1);
        assert_eq!(harness.track_y(), 10.0);
        assert_eq!(harness.x_at(25.0), 50.0);
    }

    #[test]
    fn test_harness_rejects_bad_props() {
        assert!(Harness::slider(SliderProps::new().min(1.0).max(0.0), TRACK).is_err());
    }

    #[test]
    fn test_click_records_change() {
        let mut harness = Harness::slider(SliderProps::new(), TRACK).unwrap();
        harness.click(150.0);
        harness.assert_value(75.0).assert_emitted(&[75.0]).assert_idle_listeners();
    }

    #[test]
    fn test_drag_path() {
        let mut harness = Harness::slider(SliderProps::new(), TRACK).unwrap();
        harness.drag(0.0, &[20.0, 40.0, 40.0, 60.0]);
        harness.assert_emitted(&[10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_clock_advances() {
        let mut harness = Harness::slider(SliderProps::new(), TRACK).unwrap();
        let start = harness.now();
        harness.advance(Duration::from_millis(250));
        assert_eq!(harness.now() - start, Duration::from_millis(250));
    }

    #[test]
    fn test_range_harness() {
        let mut harness =
            Harness::range(RangeSliderProps::new().step(1.0).default_value([0.0, 50.0]), TRACK)
                .unwrap();
        harness.drag(0.0, &[160.0]);
        harness.assert_value(RangeValue::new(49.0, 50.0));
    }

    #[test]
    fn test_teardown_clears_listeners() {
        let mut harness = Harness::slider(SliderProps::new(), TRACK).unwrap();
        harness.press(10.0).teardown();
        harness.assert_no_listeners();
    }
}
