use thiserror::Error;

use crate::coords::Corner;

/// Rejected shape input.
///
/// Setters report these instead of clamping so that the value a caller
/// configured is always the value the shape is drawn and hit-tested with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("{corner:?} radius {value} is outside [0, 1]")]
    RadiusOutOfRange { corner: Corner, value: f32 },

    #[error("border thickness {value} is outside [0, 1]")]
    BorderOutOfRange { value: f32 },

    #[error("{what} must be a finite, non-negative length (got {value})")]
    NegativeLength { what: &'static str, value: f32 },

    #[error("world-unit {what} needs a laid-out rect with a non-zero size")]
    NoLayout { what: &'static str },

    #[error("falloff {value} must be finite and non-negative")]
    FalloffOutOfRange { value: f32 },

    #[error("unknown rounding unit {0:?} (expected \"percentage\" or \"world\")")]
    UnknownUnit(String),

    #[error("unknown shape mode {0:?} (expected \"fill\" or \"border\")")]
    UnknownMode(String),
}
