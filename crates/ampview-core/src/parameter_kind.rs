//! Parameter kinds and their value mappings.
//!
//! A [`ParameterKind`] describes the domain of a parameter and owns the
//! conversion between the host-facing normalized value (`0.0..=1.0`) and the
//! actual value in natural units.
//!
//! | Kind | Actual domain | Normalized mapping |
//! |------|---------------|--------------------|
//! | `Continuous` | `min..=max` | linear |
//! | `Integer` | integers in `min..=max` | linear, rounded to the nearest step |
//! | `Boolean` | `{0.0, 1.0}` | `> 0.5` is on |

use crate::error::{ParameterError, Result};
use crate::types::ParameterValue;

/// Domain of a parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterKind {
    /// Continuous float range.
    Continuous {
        /// Minimum actual value.
        min: f64,
        /// Maximum actual value.
        max: f64,
        /// Default actual value.
        default: f64,
    },
    /// On/off toggle.
    Boolean {
        /// Default state.
        default: bool,
    },
    /// Discrete integer range.
    Integer {
        /// Minimum actual value.
        min: i64,
        /// Maximum actual value.
        max: i64,
        /// Default actual value.
        default: i64,
    },
}

impl ParameterKind {
    /// Lower bound of the actual domain.
    pub fn min(&self) -> ParameterValue {
        match *self {
            Self::Continuous { min, .. } => min,
            Self::Boolean { .. } => 0.0,
            Self::Integer { min, .. } => min as f64,
        }
    }

    /// Upper bound of the actual domain.
    pub fn max(&self) -> ParameterValue {
        match *self {
            Self::Continuous { max, .. } => max,
            Self::Boolean { .. } => 1.0,
            Self::Integer { max, .. } => max as f64,
        }
    }

    /// Default value in the actual domain.
    pub fn default_actual(&self) -> ParameterValue {
        match *self {
            Self::Continuous { default, .. } => default,
            Self::Boolean { default } => bool_to_value(default),
            Self::Integer { default, .. } => default as f64,
        }
    }

    /// Default value in normalized form.
    pub fn default_normalized(&self) -> ParameterValue {
        self.normalize(self.default_actual())
    }

    /// Number of discrete steps. 0 = continuous, 1 = toggle, >1 = discrete.
    pub fn step_count(&self) -> i32 {
        match *self {
            Self::Continuous { .. } => 0,
            Self::Boolean { .. } => 1,
            Self::Integer { min, max, .. } => {
                // i128 keeps extreme ranges like i64::MIN..=i64::MAX from overflowing
                let span = (max as i128) - (min as i128);
                span.clamp(0, i32::MAX as i128) as i32
            }
        }
    }

    /// Clamp an actual value into this kind's domain.
    ///
    /// Integers round to the nearest whole number and booleans snap to
    /// `0.0` or `1.0`. `NaN` maps to the default.
    pub fn clamp(&self, actual: ParameterValue) -> ParameterValue {
        if actual.is_nan() {
            return self.default_actual();
        }
        match *self {
            // max/min rather than clamp: an inverted range must not panic
            // before `validate` gets to report it.
            Self::Continuous { min, max, .. } => actual.max(min).min(max),
            Self::Boolean { .. } => bool_to_value(actual > 0.5),
            Self::Integer { min, max, .. } => actual.round().max(min as f64).min(max as f64),
        }
    }

    /// Convert an actual value to normalized `0.0..=1.0`.
    pub fn normalize(&self, actual: ParameterValue) -> ParameterValue {
        let actual = self.clamp(actual);
        match *self {
            Self::Boolean { .. } => actual,
            _ => {
                let (min, max) = (self.min(), self.max());
                let span = max - min;
                if span <= 0.0 {
                    0.5
                } else {
                    ((actual - min) / span).clamp(0.0, 1.0)
                }
            }
        }
    }

    /// Convert a normalized value to the actual domain.
    ///
    /// Out-of-range input is clamped to `0.0..=1.0` first.
    pub fn denormalize(&self, normalized: ParameterValue) -> ParameterValue {
        let normalized = if normalized.is_nan() {
            self.default_normalized()
        } else {
            normalized.clamp(0.0, 1.0)
        };
        match *self {
            Self::Continuous { min, max, .. } => min + normalized * (max - min),
            Self::Boolean { .. } => bool_to_value(normalized > 0.5),
            Self::Integer { min, max, .. } => {
                let span = (max as f64) - (min as f64);
                (min as f64 + (normalized * span).round())
                    .max(min as f64)
                    .min(max as f64)
            }
        }
    }

    /// Check that the declared bounds and default are consistent.
    pub fn validate(&self, id: &str) -> Result<()> {
        let (min, max, default) = (self.min(), self.max(), self.default_actual());
        if min.is_nan() || max.is_nan() || min > max {
            return Err(ParameterError::InvalidRange {
                id: id.to_string(),
                min,
                max,
            });
        }
        if default.is_nan() || default < min || default > max {
            return Err(ParameterError::DefaultOutOfRange {
                id: id.to_string(),
                default,
                min,
                max,
            });
        }
        Ok(())
    }
}

#[inline]
fn bool_to_value(value: bool) -> ParameterValue {
    if value {
        1.0
    } else {
        0.0
    }
}
