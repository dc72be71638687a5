//! Slider configuration, value ownership and YAML descriptors.
//!
//! # Examples
//!
//! ```
//! use slidekit_core::{SliderConfig, SliderDescriptor};
//!
//! let config = SliderConfig::new(0.0, 10.0, 0.1).unwrap();
//! assert_eq!(config.quantize(3.26), 3.3);
//!
//! let descriptor = SliderDescriptor::from_yaml(
//!     "kind: range\nid: price\nmin: 0\nmax: 500\nvalue: [50, 250]\n",
//! )
//! .unwrap();
//! assert_eq!(descriptor.config().unwrap().step(), 0.01);
//! ```

use crate::conversion::{
    clamp_value, percent_to_value, round_to_step_precision, snap_to_step_grid, value_to_percent,
};
use crate::error::{ensure_finite, ConfigError};
use serde::{Deserialize, Serialize};

/// Default lower bound.
pub const DEFAULT_MIN: f64 = 0.0;
/// Default upper bound.
pub const DEFAULT_MAX: f64 = 100.0;
/// Default step of a single-value slider.
pub const DEFAULT_STEP: f64 = 1.0;
/// Default step of a range slider.
pub const DEFAULT_RANGE_STEP: f64 = 0.01;
/// Multiplier applied to `step` by PageUp / PageDown.
pub const PAGE_STEP_MULTIPLIER: f64 = 10.0;
/// Default hit radius of a knob, in pixels.
pub const DEFAULT_KNOB_RADIUS: f64 = 8.0;

/// Validated numeric configuration shared by every slider variant.
///
/// Invariants: all fields finite, `min < max`, `step > 0`. Instances are
/// immutable; build a new one to change the range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSliderConfig")]
pub struct SliderConfig {
    min: f64,
    max: f64,
    step: f64,
}

#[derive(Deserialize)]
struct RawSliderConfig {
    min: f64,
    max: f64,
    step: f64,
}

impl TryFrom<RawSliderConfig> for SliderConfig {
    type Error = ConfigError;

    fn try_from(raw: RawSliderConfig) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max, raw.step)
    }
}

impl SliderConfig {
    /// Validate and build a configuration.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, ConfigError> {
        let min = ensure_finite("min", min)?;
        let max = ensure_finite("max", max)?;
        let step = ensure_finite("step", step)?;
        if min >= max {
            return Err(ConfigError::InvalidRange { min, max });
        }
        if step <= 0.0 {
            return Err(ConfigError::InvalidStep(step));
        }
        Ok(Self { min, max, step })
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Step increment.
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Increment used by PageUp / PageDown.
    #[must_use]
    pub fn page_step(&self) -> f64 {
        self.step * PAGE_STEP_MULTIPLIER
    }

    /// Percent position of `value`.
    #[must_use]
    pub fn value_to_percent(&self, value: f64) -> f64 {
        value_to_percent(value, self.min, self.max)
    }

    /// Quantized value at `percent`.
    #[must_use]
    pub fn percent_to_value(&self, percent: f64) -> f64 {
        percent_to_value(percent, self.min, self.max, self.step)
    }

    /// Clamp into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        clamp_value(value, self.min, self.max)
    }

    /// Round to the step precision without clamping.
    #[must_use]
    pub fn round(&self, value: f64) -> f64 {
        round_to_step_precision(value, self.step)
    }

    /// Clamp into range and snap onto the step grid anchored at `min`.
    #[must_use]
    pub fn quantize(&self, value: f64) -> f64 {
        snap_to_step_grid(value, self.min, self.max, self.step)
    }
}

/// Who owns the current value of a control.
///
/// Decided once at construction and never re-evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueOwnership {
    /// The owner may overwrite the value at any time.
    Controlled,
    /// The control owns its value after the initial seed.
    Uncontrolled,
}

impl ValueOwnership {
    /// Pick the ownership mode and the seed value.
    ///
    /// An explicit value wins (controlled); otherwise the default value seeds
    /// an uncontrolled control; otherwise `fallback` does.
    pub fn resolve<T>(value: Option<T>, default_value: Option<T>, fallback: T) -> (Self, T) {
        match (value, default_value) {
            (Some(value), _) => (Self::Controlled, value),
            (None, Some(default_value)) => (Self::Uncontrolled, default_value),
            (None, None) => (Self::Uncontrolled, fallback),
        }
    }

    /// Whether the owner is the source of truth.
    #[must_use]
    pub const fn is_controlled(self) -> bool {
        matches!(self, Self::Controlled)
    }
}

/// Declarative description of a slider, typically loaded from YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SliderDescriptor {
    /// Single-value slider
    Single {
        /// Identifier used by the host
        #[serde(default)]
        id: Option<String>,
        /// Lower bound
        #[serde(default = "default_min")]
        min: f64,
        /// Upper bound
        #[serde(default = "default_max")]
        max: f64,
        /// Step increment (defaults to 1)
        #[serde(default)]
        step: Option<f64>,
        /// Controlled value
        #[serde(default)]
        value: Option<f64>,
        /// Uncontrolled seed value
        #[serde(default)]
        default_value: Option<f64>,
        /// Whether input is ignored
        #[serde(default)]
        disabled: bool,
        /// Id of the labelling element
        #[serde(default)]
        aria_labelled_by: Option<String>,
    },
    /// Two-knob range slider
    Range {
        /// Identifier used by the host
        #[serde(default)]
        id: Option<String>,
        /// Lower bound
        #[serde(default = "default_min")]
        min: f64,
        /// Upper bound
        #[serde(default = "default_max")]
        max: f64,
        /// Step increment (defaults to 0.01)
        #[serde(default)]
        step: Option<f64>,
        /// Controlled value pair
        #[serde(default)]
        value: Option<[f64; 2]>,
        /// Uncontrolled seed pair
        #[serde(default)]
        default_value: Option<[f64; 2]>,
        /// Whether input is ignored
        #[serde(default)]
        disabled: bool,
        /// Id of the labelling element
        #[serde(default)]
        aria_labelled_by: Option<String>,
    },
}

const fn default_min() -> f64 {
    DEFAULT_MIN
}

const fn default_max() -> f64 {
    DEFAULT_MAX
}

impl SliderDescriptor {
    /// Parse one descriptor.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Parse a YAML sequence of descriptors.
    pub fn list_from_yaml(yaml: &str) -> Result<Vec<Self>, ConfigError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Host identifier, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Single { id, .. } | Self::Range { id, .. } => id.as_deref(),
        }
    }

    /// Whether this describes a range slider.
    #[must_use]
    pub const fn is_range(&self) -> bool {
        matches!(self, Self::Range { .. })
    }

    /// Validated numeric configuration, applying the per-kind default step.
    pub fn config(&self) -> Result<SliderConfig, ConfigError> {
        match self {
            Self::Single { min, max, step, .. } => {
                SliderConfig::new(*min, *max, step.unwrap_or(DEFAULT_STEP))
            }
            Self::Range { min, max, step, .. } => {
                SliderConfig::new(*min, *max, step.unwrap_or(DEFAULT_RANGE_STEP))
            }
        }
    }
}
