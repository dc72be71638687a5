//! Host framework integration.
//!
//! Sliders receive their track bounds through [`Widget::layout`] and input
//! through [`Widget::event`]. Painting stays with the host; a control only
//! reports what changed.
//!
//! ```
//! use slidekit_core::TypeId;
//!
//! assert_ne!(TypeId::of::<String>(), TypeId::of::<i32>());
//! ```

use crate::accessibility::AccessibleRole;
use crate::event::Event;
use crate::geometry::{Rect, Size};
use std::any::Any;

/// Concrete type of a control behind `dyn Widget`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Identifier of `T`.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Size a control occupies once laid out.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Occupied size
    pub size: Size,
}

/// A control the host can lay out and feed events to.
pub trait Widget: Send {
    /// Concrete type of the control.
    fn type_id(&self) -> TypeId;

    /// Accept the bounds allocated by the host.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Handle an input event, returning a message when state changed.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Whether pointer input is accepted.
    fn is_interactive(&self) -> bool {
        false
    }

    /// Whether the control takes keyboard focus.
    fn is_focusable(&self) -> bool {
        false
    }

    /// Name announced by assistive technology.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Role announced by assistive technology.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Stable id for test selectors.
    fn test_id(&self) -> Option<&str> {
        None
    }
}
