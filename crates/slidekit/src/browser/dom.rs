//! DOM event vocabulary mapped onto core events.
//!
//! These functions take the plain values a DOM event carries, so the mapping
//! is shared by the `wasm32` bindings and native tests.

use slidekit_core::{Event, Key, MouseButton, Point, SliderAccessibility, Touch};
use slidekit_widgets::{ActiveKnob, ListenerKind, ListenerOp};
use tracing::trace;

/// Map `MouseEvent.button` to a core button.
#[must_use]
pub const fn mouse_button(button: i16) -> MouseButton {
    match button {
        1 => MouseButton::Middle,
        2 => MouseButton::Right,
        _ => MouseButton::Left,
    }
}

/// Build a core event from a mouse event type and its client coordinates.
///
/// `mouseleave` is treated like `mouseout`. Other types return `None`.
#[must_use]
pub fn mouse_event(event_type: &str, client_x: f64, client_y: f64, button: i16) -> Option<Event> {
    let position = Point::new(client_x, client_y);
    let button = mouse_button(button);
    match event_type {
        "mousedown" => Some(Event::MouseDown { position, button }),
        "mousemove" => Some(Event::MouseMove { position }),
        "mouseup" => Some(Event::MouseUp { position, button }),
        "mouseout" | "mouseleave" => Some(Event::MouseOut { position }),
        _ => {
            trace!(event_type, "unhandled mouse event");
            None
        }
    }
}

/// Build a core event from a touch event type and its touch lists.
///
/// `touchcancel` ends a drag like `touchend`.
#[must_use]
pub fn touch_event(
    event_type: &str,
    touches: Vec<Touch>,
    changed_touches: Vec<Touch>,
) -> Option<Event> {
    match event_type {
        "touchstart" => Some(Event::TouchStart {
            touches,
            changed_touches,
        }),
        "touchmove" => Some(Event::TouchMove {
            touches,
            changed_touches,
        }),
        "touchend" | "touchcancel" => Some(Event::TouchEnd {
            touches,
            changed_touches,
        }),
        _ => {
            trace!(event_type, "unhandled touch event");
            None
        }
    }
}

/// Build a core event from a keyboard event type and `KeyboardEvent.key`.
#[must_use]
pub fn key_event(event_type: &str, key: &str) -> Option<Event> {
    (event_type == "keydown").then(|| Event::KeyDown {
        key: Key::from_name(key),
    })
}

/// Where the host registers a listener: `"document"` or `"window"`.
#[must_use]
pub const fn listener_target(kind: ListenerKind) -> &'static str {
    if kind.is_document_level() {
        "document"
    } else {
        "window"
    }
}

/// Encode a listener operation as `+document:mousemove` or `-window:resize`.
#[must_use]
pub fn listener_change(op: ListenerOp) -> String {
    let (sign, kind) = match op {
        ListenerOp::Attach(kind) => ('+', kind),
        ListenerOp::Detach(kind) => ('-', kind),
    };
    format!("{sign}{}:{}", listener_target(kind), kind.event_name())
}

/// Knob attributes as `name=value` entries, in render order.
#[must_use]
pub fn attribute_entries(accessibility: &SliderAccessibility) -> Vec<String> {
    accessibility
        .attributes()
        .into_iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect()
}

/// `"none"`, `"start"` or `"end"`.
#[must_use]
pub const fn active_knob_name(knob: ActiveKnob) -> &'static str {
    match knob {
        ActiveKnob::None => "none",
        ActiveKnob::Start => "start",
        ActiveKnob::End => "end",
    }
}
