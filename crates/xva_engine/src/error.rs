//! Engine-level error types.

use thiserror::Error;
use xva_core::types::{CurveError, RandomVariableError};

/// Errors surfaced by the exposure engine and metric reductions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Deal maturity lies outside the simulated time grid.
    #[error("Deal maturity {maturity} lies outside the grid [{t_min}, {t_max}]")]
    OutOfGridMaturity {
        /// The deal maturity.
        maturity: f64,
        /// First grid point.
        t_min: f64,
        /// Last grid point.
        t_max: f64,
    },

    /// Two exposure series on different grids were combined.
    #[error("Exposure series are defined on different time grids")]
    GridMismatch,

    /// Random variable algebra error (sample count mismatch and friends).
    #[error(transparent)]
    RandomVariable(#[from] RandomVariableError),

    /// Curve construction error from a metric profile.
    #[error(transparent)]
    Curve(#[from] CurveError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_grid_display() {
        let err = EngineError::OutOfGridMaturity {
            maturity: 2.0,
            t_min: 0.0,
            t_max: 0.999,
        };
        assert_eq!(
            format!("{}", err),
            "Deal maturity 2 lies outside the grid [0, 0.999]"
        );
    }

    #[test]
    fn test_from_random_variable_error() {
        let inner = RandomVariableError::ShapeMismatch { left: 2, right: 3 };
        let err: EngineError = inner.clone().into();
        assert_eq!(err, EngineError::RandomVariable(inner));
    }
}
