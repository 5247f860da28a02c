//! Forward instrument definitions.
//!
//! A forward is a contract to exchange the asset at maturity `T` against
//! a fixed strike `K`. Under the drift measure its present value is
//!
//! ```text
//! V = q * sign * (S_0 - K * exp(-r * T))
//! ```
//!
//! which the exposure engine uses to anchor the initial exposure slice.

use thiserror::Error;

/// Position direction.
///
/// - `Long`: receive the asset, pay the strike (positive payoff above `K`)
/// - `Short`: deliver the asset, receive the strike
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Long the forward (buy the asset at `K`).
    Long,
    /// Short the forward (sell the asset at `K`).
    Short,
}

impl Direction {
    /// Returns the sign multiplier for payoff and exposure calculation.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Long => 1.0,
            Direction::Short => -1.0,
        }
    }

    /// Returns whether this is a long position.
    #[inline]
    pub fn is_long(&self) -> bool {
        matches!(self, Direction::Long)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Long => write!(f, "Long"),
            Direction::Short => write!(f, "Short"),
        }
    }
}

/// Error types for forward construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Strike must be non-negative and finite.
    #[error("Strike must be non-negative, got {value}")]
    InvalidStrike {
        /// The offending strike.
        value: f64,
    },

    /// Maturity must be positive and finite.
    #[error("Maturity must be positive, got {value}")]
    InvalidMaturity {
        /// The offending maturity.
        value: f64,
    },

    /// Quantity must be positive and finite.
    #[error("Quantity must be positive, got {value}")]
    InvalidQuantity {
        /// The offending quantity.
        value: f64,
    },
}

/// Forward contract on the simulated asset.
///
/// # Examples
///
/// ```
/// use xva_models::instruments::{Direction, Forward};
///
/// let forward = Forward::new(80.0, 0.999, 1000.0, Direction::Long).unwrap();
///
/// // V = q * (S_0 - K * exp(-r T))
/// let value = forward.analytic_value(100.0, 0.01);
/// let expected = 1000.0 * (100.0 - 80.0 * (-0.01_f64 * 0.999).exp());
/// assert!((value - expected).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Forward {
    strike: f64,
    maturity: f64,
    quantity: f64,
    direction: Direction,
}

impl Forward {
    /// Creates a validated forward.
    ///
    /// Whether `maturity` lies on the pricing grid is checked later, at
    /// the exposure engine boundary, where the grid is known.
    ///
    /// # Errors
    ///
    /// Returns an [`InstrumentError`] for a negative strike, non-positive
    /// maturity or non-positive quantity.
    pub fn new(
        strike: f64,
        maturity: f64,
        quantity: f64,
        direction: Direction,
    ) -> Result<Self, InstrumentError> {
        if !strike.is_finite() || strike < 0.0 {
            return Err(InstrumentError::InvalidStrike { value: strike });
        }
        if !maturity.is_finite() || maturity <= 0.0 {
            return Err(InstrumentError::InvalidMaturity { value: maturity });
        }
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(InstrumentError::InvalidQuantity { value: quantity });
        }
        Ok(Self {
            strike,
            maturity,
            quantity,
            direction,
        })
    }

    /// Returns the strike.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the maturity in year fractions.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Returns the quantity (number of units).
    #[inline]
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Returns the position direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the signed quantity `q * sign`.
    #[inline]
    pub fn signed_quantity(&self) -> f64 {
        self.quantity * self.direction.sign()
    }

    /// Closed-form present value under the drift measure.
    ///
    /// `V = q * sign * (spot - K * exp(-rate * T))`.
    #[inline]
    pub fn analytic_value(&self, spot: f64, rate: f64) -> f64 {
        self.signed_quantity() * (spot - self.strike * (-rate * self.maturity).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_direction_sign() {
        assert_eq!(Direction::Long.sign(), 1.0);
        assert_eq!(Direction::Short.sign(), -1.0);
        assert!(Direction::Long.is_long());
        assert!(!Direction::Short.is_long());
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(format!("{}", Direction::Long), "Long");
        assert_eq!(format!("{}", Direction::Short), "Short");
    }

    #[test]
    fn test_forward_validation() {
        assert!(matches!(
            Forward::new(-1.0, 1.0, 1.0, Direction::Long),
            Err(InstrumentError::InvalidStrike { .. })
        ));
        assert!(matches!(
            Forward::new(80.0, 0.0, 1.0, Direction::Long),
            Err(InstrumentError::InvalidMaturity { .. })
        ));
        assert!(matches!(
            Forward::new(80.0, 1.0, 0.0, Direction::Long),
            Err(InstrumentError::InvalidQuantity { .. })
        ));
        assert!(Forward::new(0.0, 1.0, 1.0, Direction::Short).is_ok());
    }

    #[test]
    fn test_analytic_value_long() {
        // Reference deal: K = 80, T = 0.999, q = 1000, S_0 = 100, r = 1%
        let forward = Forward::new(80.0, 0.999, 1000.0, Direction::Long).unwrap();
        let value = forward.analytic_value(100.0, 0.01);
        let expected = 1000.0 * (100.0 - 80.0 * (-0.01_f64 * 0.999).exp());
        assert_relative_eq!(value, expected, epsilon = 1e-9);
        // About 20_795 for the reference scenario
        assert!((value - 20_795.2).abs() < 0.1);
    }

    #[test]
    fn test_analytic_value_short_negates() {
        let long = Forward::new(90.0, 0.999, 1000.0, Direction::Long).unwrap();
        let short = Forward::new(90.0, 0.999, 1000.0, Direction::Short).unwrap();
        assert_relative_eq!(
            long.analytic_value(100.0, 0.01),
            -short.analytic_value(100.0, 0.01),
            epsilon = 1e-12
        );
    }
}
