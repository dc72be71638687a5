//! Behaviour shared by the single-value and range controllers.

use crate::drag::EventResponse;
use crate::track::GeometryProvider;
use slidekit_core::Event;
use std::fmt;
use web_time::Instant;

/// Change callback invoked synchronously with every committed value.
pub type ChangeCallback<T> = Box<dyn FnMut(T) + Send>;

/// A slider controller driven by host events.
///
/// Hosts call [`mount`](Self::mount) once the track is attached, feed every
/// input event through [`handle_event`](Self::handle_event), call
/// [`tick`](Self::tick) once per scheduling turn, and call
/// [`teardown`](Self::teardown) (or drop the control) when it goes away.
pub trait SliderControl: Send {
    /// Value reported on change: `f64` or a start/end pair.
    type Value: Copy + PartialEq + fmt::Debug;

    /// Measure the track and register the window resize listener.
    fn mount(&mut self);

    /// Abort any drag and release every listener.
    fn teardown(&mut self);

    /// Feed one input event observed at `now`.
    fn handle_event(&mut self, event: &Event, now: Instant) -> EventResponse<Self::Value>;

    /// Run deferred work due at `now`. Returns whether the track was re-measured.
    fn tick(&mut self, now: Instant) -> bool;

    /// Current committed value.
    fn current(&self) -> Self::Value;

    /// Track measurement state.
    fn geometry(&self) -> &GeometryProvider;
}
