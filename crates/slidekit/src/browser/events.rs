//! `web_sys` event conversion.

use super::dom;
use slidekit_core::{Event, Point, Rect, Touch};
use web_sys::{Element, KeyboardEvent, MouseEvent, TouchEvent, TouchList};

/// Convert a browser mouse event.
pub fn mouse_event_to_slidekit(event: &MouseEvent, event_type: &str) -> Option<Event> {
    dom::mouse_event(
        event_type,
        f64::from(event.client_x()),
        f64::from(event.client_y()),
        event.button(),
    )
}

/// Convert a browser touch event.
pub fn touch_event_to_slidekit(event: &TouchEvent, event_type: &str) -> Option<Event> {
    dom::touch_event(
        event_type,
        touch_list(&event.touches()),
        touch_list(&event.changed_touches()),
    )
}

/// Convert a browser keyboard event.
pub fn keyboard_event_to_slidekit(event: &KeyboardEvent, event_type: &str) -> Option<Event> {
    dom::key_event(event_type, &event.key())
}

/// Client-space bounding rectangle of `element`.
pub fn element_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

fn touch_list(list: &TouchList) -> Vec<Touch> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .map(|touch| {
            Touch::new(
                touch.identifier().unsigned_abs(),
                Point::new(f64::from(touch.client_x()), f64::from(touch.client_y())),
            )
        })
        .collect()
}
