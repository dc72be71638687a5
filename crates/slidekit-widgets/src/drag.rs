//! Drag lifecycle shared by every slider variant.
//!
//! Mouse and touch streams are folded into one `Idle -> Dragging -> Idle`
//! machine. Starting a drag acquires the document-level move/end listeners;
//! ending it releases the move listeners at once and the end listeners on the
//! next tick, so an end that is still being dispatched never loses its own
//! handler.

use crate::listeners::{ListenerKind, ListenerRegistry};
use slidekit_core::{Event, MouseButton};
use tracing::{debug, trace};

/// One of the two knobs of a range slider. Single sliders use `Start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Knob {
    /// Lower knob
    Start,
    /// Upper knob
    End,
}

/// Knob currently being dragged, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActiveKnob {
    /// No drag in progress
    #[default]
    None,
    /// Lower knob is being dragged
    Start,
    /// Upper knob is being dragged
    End,
}

impl From<Option<Knob>> for ActiveKnob {
    fn from(knob: Option<Knob>) -> Self {
        match knob {
            None => Self::None,
            Some(Knob::Start) => Self::Start,
            Some(Knob::End) => Self::End,
        }
    }
}

impl ActiveKnob {
    /// The knob, if one is active.
    #[must_use]
    pub const fn knob(self) -> Option<Knob> {
        match self {
            Self::None => None,
            Self::Start => Some(Knob::Start),
            Self::End => Some(Knob::End),
        }
    }
}

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerTarget {
    /// The track itself
    Track,
    /// A knob element
    Knob(Knob),
}

impl PointerTarget {
    /// Knob driven by a drag starting here; the track drives the start knob.
    #[must_use]
    pub const fn knob(self) -> Knob {
        match self {
            Self::Track => Knob::Start,
            Self::Knob(knob) => knob,
        }
    }
}

/// Drag state machine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DragState {
    /// No drag
    #[default]
    Idle,
    /// Dragging the given knob
    Dragging(Knob),
}

/// Lifecycle transition produced by an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// Pointer went down
    Start,
    /// Pointer moved while dragging
    Move,
    /// Pointer released
    End,
}

/// Result of feeding one event through the drag machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragUpdate {
    /// Transition taken
    pub phase: DragPhase,
    /// Knob the drag drives
    pub knob: Knob,
    /// Horizontal client coordinate, when the event carried one
    pub client_x: Option<f64>,
    /// Whether the host should suppress its default scroll/zoom handling
    pub prevent_default: bool,
}

/// Outcome reported to the host for one event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EventResponse<T> {
    /// New committed value, when the event changed it
    pub changed: Option<T>,
    /// Whether the event was consumed (stop propagation)
    pub handled: bool,
    /// Whether the host's default action must be suppressed
    pub prevent_default: bool,
}

impl<T> EventResponse<T> {
    /// An event the control ignored.
    #[must_use]
    pub const fn ignored() -> Self {
        Self {
            changed: None,
            handled: false,
            prevent_default: false,
        }
    }

    /// A consumed event with an optional change.
    #[must_use]
    pub const fn handled(changed: Option<T>, prevent_default: bool) -> Self {
        Self {
            changed,
            handled: true,
            prevent_default,
        }
    }
}

/// Unified mouse/touch drag controller.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    /// Create an idle controller.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> DragState {
        self.state
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Knob being dragged.
    #[must_use]
    pub const fn active_knob(&self) -> ActiveKnob {
        match self.state {
            DragState::Idle => ActiveKnob::None,
            DragState::Dragging(Knob::Start) => ActiveKnob::Start,
            DragState::Dragging(Knob::End) => ActiveKnob::End,
        }
    }

    /// Feed an event.
    ///
    /// `target` is where a pointer-down landed; `None` means outside the
    /// control, so the down is ignored. `end_on_pointer_out` makes a
    /// pointer-out terminate the drag.
    pub fn handle(
        &mut self,
        event: &Event,
        target: Option<PointerTarget>,
        listeners: &mut ListenerRegistry,
        end_on_pointer_out: bool,
    ) -> Option<DragUpdate> {
        match event {
            Event::MouseDown {
                button: MouseButton::Left,
                ..
            }
            | Event::TouchStart { .. } => target.map(|t| self.start(t.knob(), event, listeners)),
            Event::MouseMove { .. } | Event::TouchMove { .. } => self.drag_move(event),
            Event::MouseUp { .. } | Event::TouchEnd { .. } => self.end(event, listeners),
            Event::MouseOut { .. } if end_on_pointer_out => self.end(event, listeners),
            _ => None,
        }
    }

    /// Enter `Dragging(knob)` and acquire the document-level listeners.
    ///
    /// A start while already dragging retargets the drag.
    pub fn start(
        &mut self,
        knob: Knob,
        event: &Event,
        listeners: &mut ListenerRegistry,
    ) -> DragUpdate {
        self.state = DragState::Dragging(knob);
        listeners.acquire(&ListenerKind::DRAG_MOVE);
        listeners.acquire(&ListenerKind::DRAG_END);
        let update = Self::update(DragPhase::Start, knob, event);
        debug!(?knob, client_x = ?update.client_x, "drag start");
        update
    }

    /// Track a move; ignored unless dragging.
    pub fn drag_move(&mut self, event: &Event) -> Option<DragUpdate> {
        let DragState::Dragging(knob) = self.state else {
            return None;
        };
        let update = Self::update(DragPhase::Move, knob, event);
        trace!(?knob, client_x = ?update.client_x, "drag move");
        Some(update)
    }

    /// Leave `Dragging`; ignored unless dragging.
    pub fn end(&mut self, event: &Event, listeners: &mut ListenerRegistry) -> Option<DragUpdate> {
        let DragState::Dragging(knob) = self.state else {
            return None;
        };
        self.state = DragState::Idle;
        listeners.release(&ListenerKind::DRAG_MOVE);
        listeners.release_next_tick(&ListenerKind::DRAG_END);
        let update = Self::update(DragPhase::End, knob, event);
        debug!(?knob, client_x = ?update.client_x, "drag end");
        Some(update)
    }

    /// Abort any drag and release its listeners immediately.
    pub fn cancel(&mut self, listeners: &mut ListenerRegistry) {
        if self.is_dragging() {
            debug!("drag cancelled");
        }
        self.state = DragState::Idle;
        listeners.release(&ListenerKind::DRAG_MOVE);
        listeners.release(&ListenerKind::DRAG_END);
    }

    fn update(phase: DragPhase, knob: Knob, event: &Event) -> DragUpdate {
        DragUpdate {
            phase,
            knob,
            client_x: event.position().map(|p| p.x),
            prevent_default: event.changed_touch_count() > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listeners::RecordingHost;
    use slidekit_core::{Point, Touch};

    fn down(x: f64) -> Event {
        Event::MouseDown {
            position: Point::new(x, 5.0),
            button: MouseButton::Left,
        }
    }

    fn mouse_move(x: f64) -> Event {
        Event::MouseMove {
            position: Point::new(x, 5.0),
        }
    }

    fn up(x: f64) -> Event {
        Event::MouseUp {
            position: Point::new(x, 5.0),
            button: MouseButton::Left,
        }
    }

    fn touch(id: u32, x: f64) -> Touch {
        Touch::new(id, Point::new(x, 5.0))
    }

    // =========================================================================
    // Knob enums
    // =========================================================================

    #[test]
    fn test_active_knob_conversions() {
        assert_eq!(ActiveKnob::from(None), ActiveKnob::None);
        assert_eq!(ActiveKnob::from(Some(Knob::End)), ActiveKnob::End);
        assert_eq!(ActiveKnob::Start.knob(), Some(Knob::Start));
        assert_eq!(ActiveKnob::None.knob(), None);
        assert_eq!(PointerTarget::Track.knob(), Knob::Start);
        assert_eq!(PointerTarget::Knob(Knob::End).knob(), Knob::End);
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    #[test]
    fn test_start_move_end() {
        let host = RecordingHost::new();
        let mut listeners = ListenerRegistry::new(host.clone());
        let mut drag = DragController::new();

        let start = drag
            .handle(&down(10.0), Some(PointerTarget::Track), &mut listeners, false)
            .unwrap();
        assert_eq!(start.phase, DragPhase::Start);
        assert_eq!(start.client_x, Some(10.0));
        assert_eq!(drag.state(), DragState::Dragging(Knob::Start));
        assert_eq!(host.active().len(), 4);

        let moved = drag.handle(&mouse_move(30.0), None, &mut listeners, false).unwrap();
        assert_eq!(moved.phase, DragPhase::Move);
        assert_eq!(moved.client_x, Some(30.0));

        let end = drag.handle(&up(40.0), None, &mut listeners, false).unwrap();
        assert_eq!(end.phase, DragPhase::End);
        assert_eq!(end.client_x, Some(40.0));
        assert_eq!(drag.state(), DragState::Idle);
    }

    #[test]
    fn test_end_defers_end_listener_release_by_one_tick() {
        let host = RecordingHost::new();
        let mut listeners = ListenerRegistry::new(host.clone());
        let mut drag = DragController::new();
        drag.start(Knob::Start, &down(0.0), &mut listeners);
        drag.end(&up(0.0), &mut listeners);

        assert!(!host.is_attached(ListenerKind::MouseMove));
        assert!(!host.is_attached(ListenerKind::TouchMove));
        assert!(host.is_attached(ListenerKind::MouseUp));
        assert!(host.is_attached(ListenerKind::TouchEnd));

        listeners.tick();
        assert!(host.active().is_empty());
    }

    #[test]
    fn test_restart_within_same_tick_keeps_end_listeners() {
        let host = RecordingHost::new();
        let mut listeners = ListenerRegistry::new(host.clone());
        let mut drag = DragController::new();
        drag.start(Knob::Start, &down(0.0), &mut listeners);
        drag.end(&up(0.0), &mut listeners);
        drag.start(Knob::Start, &down(5.0), &mut listeners);
        listeners.tick();
        assert!(host.is_attached(ListenerKind::MouseUp));
        assert!(drag.is_dragging());
    }

    #[test]
    fn test_idle_ignores_move_and_end() {
        let mut listeners = ListenerRegistry::default();
        let mut drag = DragController::new();
        assert!(drag.handle(&mouse_move(3.0), None, &mut listeners, true).is_none());
        assert!(drag.handle(&up(3.0), None, &mut listeners, true).is_none());
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_down_outside_is_ignored() {
        let mut listeners = ListenerRegistry::default();
        let mut drag = DragController::new();
        assert!(drag.handle(&down(3.0), None, &mut listeners, false).is_none());
        assert!(!drag.is_dragging());
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_right_button_does_not_start() {
        let mut listeners = ListenerRegistry::default();
        let mut drag = DragController::new();
        let right = Event::MouseDown {
            position: Point::ORIGIN,
            button: MouseButton::Right,
        };
        assert!(drag
            .handle(&right, Some(PointerTarget::Track), &mut listeners, false)
            .is_none());
    }

    #[test]
    fn test_pointer_out_ends_only_when_enabled() {
        let mut listeners = ListenerRegistry::default();
        let mut drag = DragController::new();
        let out = Event::MouseOut {
            position: Point::new(99.0, 0.0),
        };
        drag.start(Knob::Start, &down(0.0), &mut listeners);
        assert!(drag.handle(&out, None, &mut listeners, false).is_none());
        assert!(drag.is_dragging());
        let end = drag.handle(&out, None, &mut listeners, true).unwrap();
        assert_eq!(end.phase, DragPhase::End);
        assert_eq!(end.client_x, Some(99.0));
    }

    #[test]
    fn test_active_knob_tracks_target() {
        let mut listeners = ListenerRegistry::default();
        let mut drag = DragController::new();
        drag.handle(
            &down(0.0),
            Some(PointerTarget::Knob(Knob::End)),
            &mut listeners,
            false,
        );
        assert_eq!(drag.active_knob(), ActiveKnob::End);
        drag.handle(&up(0.0), None, &mut listeners, false);
        assert_eq!(drag.active_knob(), ActiveKnob::None);
    }

    // =========================================================================
    // Touch
    // =========================================================================

    #[test]
    fn test_touch_first_point_drives() {
        let mut listeners = ListenerRegistry::default();
        let mut drag = DragController::new();
        let start = Event::TouchStart {
            touches: vec![touch(1, 20.0)],
            changed_touches: vec![touch(1, 20.0)],
        };
        let update = drag
            .handle(&start, Some(PointerTarget::Track), &mut listeners, false)
            .unwrap();
        assert_eq!(update.client_x, Some(20.0));
        assert!(!update.prevent_default);

        let moved = Event::TouchMove {
            touches: vec![touch(1, 25.0), touch(2, 80.0)],
            changed_touches: vec![touch(1, 25.0), touch(2, 80.0)],
        };
        let update = drag.handle(&moved, None, &mut listeners, false).unwrap();
        assert_eq!(update.client_x, Some(25.0));
        assert!(update.prevent_default);
    }

    #[test]
    fn test_touch_end_uses_changed_touch() {
        let mut listeners = ListenerRegistry::default();
        let mut drag = DragController::new();
        drag.start(Knob::Start, &down(0.0), &mut listeners);
        let end = Event::TouchEnd {
            touches: vec![],
            changed_touches: vec![touch(1, 64.0)],
        };
        let update = drag.handle(&end, None, &mut listeners, false).unwrap();
        assert_eq!(update.client_x, Some(64.0));
    }

    #[test]
    fn test_cancel_releases_everything_now() {
        let host = RecordingHost::new();
        let mut listeners = ListenerRegistry::new(host.clone());
        let mut drag = DragController::new();
        drag.start(Knob::End, &down(0.0), &mut listeners);
        drag.cancel(&mut listeners);
        assert!(host.active().is_empty());
        assert!(!listeners.has_deferred());
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_event_response_constructors() {
        let ignored = EventResponse::<f64>::ignored();
        assert!(!ignored.handled);
        assert_eq!(ignored.changed, None);
        let handled = EventResponse::handled(Some(2.0), true);
        assert!(handled.handled);
        assert!(handled.prevent_default);
        assert_eq!(handled.changed, Some(2.0));
    }
}
