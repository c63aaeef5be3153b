use thiserror::Error;

/// Errors raised by stroke geometry operations
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StrokeError {
    /// Scaling needs a positive, finite factor
    #[error("scale factor must be positive and finite, got {0}")]
    InvalidScaleFactor(f32),
}

/// Errors found while validating a [`crate::CanvasConfig`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive and finite, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("slider range is empty: min {min} > max {max}")]
    EmptySliderRange { min: f32, max: f32 },

    #[error("{field} {value} is outside the slider range {min}..={max}")]
    OutsideSliderRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("speed mapping needs min_speed < max_speed, got {min_speed} and {max_speed}")]
    InvertedSpeedRange { min_speed: f32, max_speed: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
}
