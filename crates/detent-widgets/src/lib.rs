//! Widget implementations for Detent.

pub mod error;
pub mod slider;

pub use error::{ConfigError, SliderError};
pub use slider::{
    ControlledValue, CoordinateTracker, Slider, SliderChanged, SliderProps, SliderView,
    ValueLabel, ValueSource, ValueUpdate,
};
