//! ARIA-style slider attributes exposed to the presentation layer.

use serde::{Deserialize, Serialize};

/// Accessible role of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// Generic container (no semantic role)
    #[default]
    Generic,
    /// Group of related controls
    Group,
    /// Slider
    Slider,
}

impl AccessibleRole {
    /// ARIA role name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Group => "group",
            Self::Slider => "slider",
        }
    }
}

/// Orientation of a slider track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Left-to-right track
    #[default]
    Horizontal,
    /// Bottom-to-top track
    Vertical,
}

impl Orientation {
    /// ARIA orientation value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

/// Accessibility attributes of one knob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderAccessibility {
    /// Always [`AccessibleRole::Slider`]
    pub role: AccessibleRole,
    /// Track orientation
    pub orientation: Orientation,
    /// Lower bound (`aria-valuemin`)
    pub value_min: f64,
    /// Upper bound (`aria-valuemax`)
    pub value_max: f64,
    /// Current value (`aria-valuenow`)
    pub value_now: f64,
    /// Id of the labelling element (`aria-labelledby`)
    pub labelled_by: Option<String>,
    /// Tab index; `None` when the knob cannot take focus
    pub tab_index: Option<i32>,
    /// Whether the knob is disabled
    pub disabled: bool,
}

impl SliderAccessibility {
    /// Attributes for a horizontal knob.
    #[must_use]
    pub fn horizontal(value_min: f64, value_max: f64, value_now: f64) -> Self {
        Self {
            role: AccessibleRole::Slider,
            orientation: Orientation::Horizontal,
            value_min,
            value_max,
            value_now,
            labelled_by: None,
            tab_index: Some(0),
            disabled: false,
        }
    }

    /// Set the labelling element id.
    #[must_use]
    pub fn labelled_by(mut self, id: Option<impl Into<String>>) -> Self {
        self.labelled_by = id.map(Into::into);
        self
    }

    /// Mark as disabled; disabled knobs leave the tab order.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self.tab_index = if disabled { None } else { Some(0) };
        self
    }

    /// Flatten into `(attribute, value)` pairs for a DOM-like host.
    #[must_use]
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![
            ("role", self.role.as_str().to_string()),
            ("aria-orientation", self.orientation.as_str().to_string()),
            ("aria-valuemin", self.value_min.to_string()),
            ("aria-valuemax", self.value_max.to_string()),
            ("aria-valuenow", self.value_now.to_string()),
        ];
        if let Some(id) = &self.labelled_by {
            attrs.push(("aria-labelledby", id.clone()));
        }
        if let Some(index) = self.tab_index {
            attrs.push(("tabindex", index.to_string()));
        }
        if self.disabled {
            attrs.push(("aria-disabled", "true".to_string()));
        }
        attrs
    }
}
