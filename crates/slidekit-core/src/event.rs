//! Input events consumed by slider controls.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
///
/// Positions are client (viewport) coordinates; the controls translate them
/// into track-relative offsets themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse button pressed
    MouseDown {
        /// Position of press
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Mouse moved to position
    MouseMove {
        /// New position
        position: Point,
    },
    /// Mouse button released
    MouseUp {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Pointer left the control's element
    MouseOut {
        /// Last known position
        position: Point,
    },
    /// One or more touch points started
    TouchStart {
        /// Touch points currently on the surface
        touches: Vec<Touch>,
        /// Touch points that changed in this event
        changed_touches: Vec<Touch>,
    },
    /// One or more touch points moved
    TouchMove {
        /// Touch points currently on the surface
        touches: Vec<Touch>,
        /// Touch points that changed in this event
        changed_touches: Vec<Touch>,
    },
    /// One or more touch points lifted
    TouchEnd {
        /// Touch points still on the surface
        touches: Vec<Touch>,
        /// Touch points that were lifted
        changed_touches: Vec<Touch>,
    },
    /// Key pressed
    KeyDown {
        /// Key pressed
        key: Key,
    },
    /// Window resized
    Resize {
        /// New viewport width
        width: f64,
        /// New viewport height
        height: f64,
    },
}

impl Event {
    /// Whether this is a mouse or touch event.
    #[must_use]
    pub const fn is_pointer(&self) -> bool {
        !matches!(self, Self::KeyDown { .. } | Self::Resize { .. })
    }

    /// Pointer position carried by the event.
    ///
    /// For touch events the first active touch wins; when none remain (a
    /// touch end) the first changed touch is used instead.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::MouseDown { position, .. }
            | Self::MouseMove { position }
            | Self::MouseUp { position, .. }
            | Self::MouseOut { position } => Some(*position),
            Self::TouchStart {
                touches,
                changed_touches,
            }
            | Self::TouchMove {
                touches,
                changed_touches,
            }
            | Self::TouchEnd {
                touches,
                changed_touches,
            } => touches
                .first()
                .or_else(|| changed_touches.first())
                .map(|touch| touch.position),
            Self::KeyDown { .. } | Self::Resize { .. } => None,
        }
    }

    /// Number of touch points that changed simultaneously (0 for non-touch).
    #[must_use]
    pub fn changed_touch_count(&self) -> usize {
        match self {
            Self::TouchStart {
                changed_touches, ..
            }
            | Self::TouchMove {
                changed_touches, ..
            }
            | Self::TouchEnd {
                changed_touches, ..
            } => changed_touches.len(),
            _ => 0,
        }
    }
}

/// Identifier the browser assigns to one finger for the life of a touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TouchId(pub u32);

/// A single touch point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Touch {
    /// Touch identifier
    pub id: TouchId,
    /// Client position
    pub position: Point,
}

impl Touch {
    /// Create a touch point.
    #[must_use]
    pub const fn new(id: u32, position: Point) -> Self {
        Self {
            id: TouchId(id),
            position,
        }
    }
}

/// Mouse button, as reported by `MouseEvent.button`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (wheel click)
    Middle,
}

/// Keyboard key identifiers relevant to slider navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Home key
    Home,
    /// End key
    End,
    /// Page Up key
    PageUp,
    /// Page Down key
    PageDown,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Tab key
    Tab,
    /// Enter/Return key
    Enter,
    /// Escape key
    Escape,
    /// Space key
    Space,
    /// Any key without a slider meaning
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` name to a key.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Home" => Self::Home,
            "End" => Self::End,
            "PageUp" => Self::PageUp,
            "PageDown" => Self::PageDown,
            "ArrowUp" => Self::Up,
            "ArrowDown" => Self::Down,
            "ArrowLeft" => Self::Left,
            "ArrowRight" => Self::Right,
            "Tab" => Self::Tab,
            "Enter" => Self::Enter,
            "Escape" => Self::Escape,
            " " | "Spacebar" => Self::Space,
            _ => Self::Other,
        }
    }
}
