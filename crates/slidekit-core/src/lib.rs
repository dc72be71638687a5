//! Core types for Slidekit slider controls.
//!
//! This crate provides the pieces every slider variant shares:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`TrackGeometry`]
//! - Input events: [`Event`], [`Key`], [`Touch`]
//! - Pure pixel/percent/value math: [`conversion`]
//! - Validated configuration: [`SliderConfig`], [`SliderDescriptor`]
//! - Accessibility attributes: [`SliderAccessibility`]
//! - The [`Widget`] trait and a resize [`Debouncer`]

mod accessibility;
mod config;
pub mod conversion;
mod error;
mod event;
mod geometry;
mod timing;
pub mod widget;

pub use accessibility::{AccessibleRole, Orientation, SliderAccessibility};
pub use config::{
    SliderConfig, SliderDescriptor, ValueOwnership, DEFAULT_KNOB_RADIUS, DEFAULT_MAX, DEFAULT_MIN,
    DEFAULT_RANGE_STEP, DEFAULT_STEP, PAGE_STEP_MULTIPLIER,
};
pub use error::{ensure_finite, ConfigError};
pub use event::{Event, Key, MouseButton, Touch, TouchId};
pub use geometry::{Point, Rect, Size, TrackGeometry};
pub use timing::{Debouncer, DEBOUNCE_RESIZE_MS};
pub use widget::{LayoutResult, TypeId, Widget};
