//! Error types for the ACO solver.
//!
//! Every failure is reported synchronously from the call that received the
//! bad input; nothing here is retried and nothing is fatal to the process.

use thiserror::Error;

/// Errors produced by the ACO solver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcoError {
    /// The point set cannot define a tour.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Description of what is wrong with the input.
        reason: String,
    },

    /// A configuration value is out of range.
    #[error("invalid config: {field} {reason}")]
    InvalidConfig {
        /// Name of the offending configuration field.
        field: &'static str,
        /// Description of the violated rule.
        reason: String,
    },

    /// Two points coincide while coincident-point clamping is disabled.
    #[error("degenerate geometry: points {first} and {second} coincide")]
    DegenerateGeometry {
        /// Index of the first coincident point.
        first: usize,
        /// Index of the second coincident point.
        second: usize,
    },
}

impl AcoError {
    pub(crate) fn input(reason: impl Into<String>) -> Self {
        AcoError::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn config(field: &'static str, reason: impl Into<String>) -> Self {
        AcoError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = AcoError::config("decay_factor", "must be in [0, 1), got 1");
        assert_eq!(
            err.to_string(),
            "invalid config: decay_factor must be in [0, 1), got 1"
        );

        let err = AcoError::DegenerateGeometry {
            first: 2,
            second: 5,
        };
        assert_eq!(
            err.to_string(),
            "degenerate geometry: points 2 and 5 coincide"
        );
    }
}
