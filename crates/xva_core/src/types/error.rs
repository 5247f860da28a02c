//! Error types for structured error handling.
//!
//! This module provides:
//! - `GridError`: Errors from time grid construction
//! - `RandomVariableError`: Errors from random variable operations
//! - `CurveError`: Errors from sampled curve construction

use thiserror::Error;

/// Time grid construction errors.
///
/// A valid grid is a non-empty, strictly increasing sequence of finite
/// time points.
///
/// # Examples
/// ```
/// use xva_core::time::TimeGrid;
/// use xva_core::types::GridError;
///
/// let result = TimeGrid::from_times(vec![0.0, 0.5, 0.5]);
/// assert!(matches!(result, Err(GridError::NonIncreasing { index: 2 })));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    /// The grid has no time points.
    #[error("Time grid must contain at least one point")]
    Empty,

    /// Time points are not strictly increasing.
    #[error("Time points are not strictly increasing at index {index}")]
    NonIncreasing {
        /// Index of the first offending point.
        index: usize,
    },

    /// A uniform grid was requested with a non-positive step.
    #[error("Grid step must be positive, got {dt}")]
    InvalidStep {
        /// The offending step size.
        dt: f64,
    },

    /// A time point is NaN or infinite.
    #[error("Time point at index {index} is not finite")]
    NonFinite {
        /// Index of the offending point.
        index: usize,
    },
}

/// Random variable operation errors.
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RandomVariableError {
    /// Two sample vectors of different lengths were combined.
    #[error("Sample count mismatch: {left} vs {right}")]
    ShapeMismatch {
        /// Sample count of the left operand.
        left: usize,
        /// Sample count of the right operand.
        right: usize,
    },

    /// A random variable was constructed from an empty sample vector.
    #[error("Sample vector must not be empty")]
    EmptySamples,

    /// Quantile level outside the open interval (0, 1).
    #[error("Quantile level must lie in (0, 1), got {alpha}")]
    InvalidQuantileLevel {
        /// The offending level.
        alpha: f64,
    },
}

/// Sampled curve construction errors.
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveError {
    /// Fewer data points than interpolation requires.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided.
        got: usize,
        /// Minimum number of points required.
        need: usize,
    },

    /// Abscissae and ordinates have different lengths.
    #[error("times and values must have same length: got {times} and {values}")]
    LengthMismatch {
        /// Number of abscissae.
        times: usize,
        /// Number of ordinates.
        values: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_error_display() {
        let err = GridError::NonIncreasing { index: 3 };
        assert_eq!(
            format!("{}", err),
            "Time points are not strictly increasing at index 3"
        );
    }

    #[test]
    fn test_shape_mismatch_display() {
        let err = RandomVariableError::ShapeMismatch {
            left: 100,
            right: 200,
        };
        assert_eq!(format!("{}", err), "Sample count mismatch: 100 vs 200");
    }

    #[test]
    fn test_quantile_level_display() {
        let err = RandomVariableError::InvalidQuantileLevel { alpha: 1.5 };
        assert_eq!(
            format!("{}", err),
            "Quantile level must lie in (0, 1), got 1.5"
        );
    }

    #[test]
    fn test_curve_error_display() {
        let err = CurveError::InsufficientData { got: 1, need: 2 };
        assert_eq!(
            format!("{}", err),
            "Insufficient data points: got 1, need at least 2"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = GridError::Empty;
        let _: &dyn std::error::Error = &err;
        let err = RandomVariableError::EmptySamples;
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = RandomVariableError::ShapeMismatch { left: 2, right: 3 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
