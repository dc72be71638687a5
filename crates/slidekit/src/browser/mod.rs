//! Browser integration.
//!
//! [`dom`] maps DOM event names and values onto core events and builds on
//! every target. The `wasm32` modules convert `web_sys` events and expose the
//! sliders to JavaScript.

pub mod dom;

#[cfg(target_arch = "wasm32")]
pub mod bridge;
#[cfg(target_arch = "wasm32")]
pub mod events;

pub use dom::{
    active_knob_name, attribute_entries, key_event, listener_change, listener_target,
    mouse_button, mouse_event, touch_event,
};
