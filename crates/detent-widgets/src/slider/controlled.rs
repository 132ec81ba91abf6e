//! Controlled/uncontrolled value reconciliation.
//!
//! A slider either displays a value owned by its caller (controlled) or one
//! it owns itself (uncontrolled). The mode is chosen once, at construction,
//! from whether a value was supplied. In both modes the displayed value is
//! the source value clamped into range.

use crate::error::SliderError;
use detent_core::clamp_value_to_range;
use detent_core::range::round_to_value;

/// Where the displayed value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    /// Caller-owned; the slider only requests changes
    Controlled(i64),
    /// Slider-owned local state
    Uncontrolled(i64),
}

/// Outcome of [`ControlledValue::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueUpdate {
    /// Local state changed; the displayed value is now this
    Stored(i64),
    /// Controlled: the caller should feed this value back
    Requested(i64),
    /// Nothing to notify
    Unchanged,
}

impl ValueUpdate {
    /// Value to report in a change notification, if any.
    #[must_use]
    pub const fn notified(&self) -> Option<i64> {
        match self {
            Self::Stored(v) | Self::Requested(v) => Some(*v),
            Self::Unchanged => None,
        }
    }
}

/// Single entry point for reading and writing a slider's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlledValue {
    source: ValueSource,
}

impl ControlledValue {
    /// Choose the mode from `controlled` and round the chosen source value.
    pub fn new(controlled: Option<f64>, default_value: f64) -> Result<Self, SliderError> {
        let source = match controlled {
            Some(value) => ValueSource::Controlled(
                round_to_value(value).ok_or(SliderError::NonFinite { field: "value" })?,
            ),
            None => ValueSource::Uncontrolled(
                round_to_value(default_value).ok_or(SliderError::NonFinite {
                    field: "default_value",
                })?,
            ),
        };
        Ok(Self { source })
    }

    /// Whether the caller owns the value.
    #[must_use]
    pub const fn is_controlled(&self) -> bool {
        matches!(self.source, ValueSource::Controlled(_))
    }

    /// The source value before clamping.
    #[must_use]
    pub const fn raw(&self) -> i64 {
        match self.source {
            ValueSource::Controlled(v) | ValueSource::Uncontrolled(v) => v,
        }
    }

    /// The source value, clamped into `[min, max]`.
    #[must_use]
    pub fn resolve(&self, min: i64, max: i64) -> i64 {
        clamp_value_to_range(self.raw(), min, max)
    }

    /// Whether the source value lies outside `[min, max]`.
    #[must_use]
    pub const fn is_out_of_range(&self, min: i64, max: i64) -> bool {
        let raw = self.raw();
        raw < min || raw > max
    }

    /// Set a new value.
    ///
    /// Uncontrolled: stores `new_value` and reports the new displayed value
    /// if it changed. Controlled: leaves everything untouched and requests
    /// `new_value` from the caller unless the caller already holds it.
    pub fn set(&mut self, new_value: i64, min: i64, max: i64) -> ValueUpdate {
        match self.source {
            ValueSource::Uncontrolled(current) => {
                let before = clamp_value_to_range(current, min, max);
                self.source = ValueSource::Uncontrolled(new_value);
                let after = clamp_value_to_range(new_value, min, max);
                if after == before {
                    ValueUpdate::Unchanged
                } else {
                    ValueUpdate::Stored(after)
                }
            }
            ValueSource::Controlled(current) if current == new_value => ValueUpdate::Unchanged,
            ValueSource::Controlled(_) => ValueUpdate::Requested(new_value),
        }
    }

    /// Feed back a caller-owned value. Returns `false`, changing nothing,
    /// when uncontrolled or when `value` is not finite.
    pub fn supply(&mut self, value: f64) -> bool {
        match (self.source, round_to_value(value)) {
            (ValueSource::Controlled(_), Some(rounded)) => {
                self.source = ValueSource::Controlled(rounded);
                true
            }
            _ => false,
        }
    }
}
