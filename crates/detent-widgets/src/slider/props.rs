//! Slider configuration.

use crate::error::{ConfigError, SliderError};
use detent_core::range::round_to_value;
use serde::{Deserialize, Serialize};

/// Default base color.
pub const DEFAULT_COLOR: &str = "#2b9fe2";

/// Color applied while disabled.
pub const DISABLED_COLOR: &str = "gray";

/// When the value tooltip above the handle is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueLabel {
    /// Always shown
    On,
    /// Never shown
    #[default]
    Off,
    /// Shown while dragging, focused or hovered
    Auto,
}

impl ValueLabel {
    /// Whether the tooltip is visible for the given interaction state.
    #[must_use]
    pub const fn is_visible(&self, dragging: bool, focused: bool, hovered: bool) -> bool {
        match self {
            Self::On => true,
            Self::Off => false,
            Self::Auto => dragging || focused || hovered,
        }
    }
}

/// Instantiation parameters for a [`Slider`](super::Slider).
///
/// Every field has a default, so a props document only lists what it
/// overrides:
///
/// ```yaml
/// min: 0
/// max: 100
/// value: 40
/// value_label: auto
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SliderProps {
    /// Minimum value, rounded to the nearest integer
    pub min: f64,
    /// Maximum value, rounded to the nearest integer
    pub max: f64,
    /// Caller-owned value; its presence makes the slider controlled
    pub value: Option<f64>,
    /// Initial value when uncontrolled
    pub default_value: f64,
    /// Suppresses input-driven updates
    pub disabled: bool,
    /// Tooltip visibility policy
    pub value_label: ValueLabel,
    /// Base color inherited by rail, track and handle
    pub color: String,
    /// Form field name, forwarded to the range input
    pub name: Option<String>,
    /// Element id, forwarded to the range input
    pub id: Option<String>,
    /// Tab order of the handle
    pub tab_index: Option<i32>,
    /// Focus the handle on mount
    pub auto_focus: bool,
    /// Accessible label for the handle
    pub accessible_name: Option<String>,
}

impl Default for SliderProps {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            value: None,
            default_value: 0.0,
            disabled: false,
            value_label: ValueLabel::Off,
            color: DEFAULT_COLOR.to_string(),
            name: None,
            id: None,
            tab_index: None,
            auto_focus: false,
            accessible_name: None,
        }
    }
}

impl SliderProps {
    /// Props with every field at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a YAML props document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let props: Self = serde_yaml_ng::from_str(yaml)?;
        props.range()?;
        Ok(props)
    }

    /// Set the range bounds.
    #[must_use]
    pub const fn range_of(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Make the slider controlled with the given value.
    #[must_use]
    pub const fn value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// Set the uncontrolled initial value.
    #[must_use]
    pub const fn default_value(mut self, value: f64) -> Self {
        self.default_value = value;
        self
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the tooltip policy.
    #[must_use]
    pub const fn value_label(mut self, value_label: ValueLabel) -> Self {
        self.value_label = value_label;
        self
    }

    /// Set the base color.
    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the form field name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Focus the handle on mount.
    #[must_use]
    pub const fn auto_focus(mut self, auto_focus: bool) -> Self {
        self.auto_focus = auto_focus;
        self
    }

    /// Set accessible name.
    #[must_use]
    pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name = Some(name.into());
        self
    }

    /// Rounded `(min, max)`, rejecting empty, inverted and non-finite ranges.
    pub fn range(&self) -> Result<(i64, i64), SliderError> {
        validate_range(self.min, self.max)
    }
}

/// Round range bounds and check `min < max`.
pub(crate) fn validate_range(min: f64, max: f64) -> Result<(i64, i64), SliderError> {
    let min = round_to_value(min).ok_or(SliderError::NonFinite { field: "min" })?;
    let max = round_to_value(max).ok_or(SliderError::NonFinite { field: "max" })?;
    if min == max {
        return Err(SliderError::EmptyRange { value: min });
    }
    if min > max {
        return Err(SliderError::InvertedRange { min, max });
    }
    Ok((min, max))
}
