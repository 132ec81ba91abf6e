//! Error types for detent-widgets.

use thiserror::Error;

/// Invalid slider configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderError {
    /// `min` and `max` round to the same integer; percentages are undefined.
    #[error("empty range: min and max both round to {value}")]
    EmptyRange {
        /// The shared bound
        value: i64,
    },

    /// `min` rounds above `max`.
    #[error("inverted range: min {min} is greater than max {max}")]
    InvertedRange {
        /// Rounded minimum
        min: i64,
        /// Rounded maximum
        max: i64,
    },

    /// A numeric field is NaN or infinite.
    #[error("{field} must be a finite number")]
    NonFinite {
        /// Offending field name
        field: &'static str,
    },
}

/// Errors loading slider configuration documents.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML syntax or shape error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Well-formed document describing an invalid slider.
    #[error("Invalid slider: {0}")]
    Invalid(#[from] SliderError),
}
