//! Flat discount curve implementation.

use super::DiscountCurve;
use num_traits::Float;

/// Flat curve with a constant continuously compounded rate.
///
/// The same rate applies to all maturities, which is the term-structure
/// model used throughout this engine (one curve per funding view).
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g. `f64`)
///
/// # Example
///
/// ```
/// use xva_core::curves::{DiscountCurve, FlatCurve};
///
/// let collateral = FlatCurve::new(0.01_f64);
///
/// // D(0, 1) = exp(-0.01)
/// let df = collateral.discount_factor(1.0);
/// assert!((df - (-0.01_f64).exp()).abs() < 1e-15);
///
/// // D(t, T) carries the forward payoff back to t
/// let fwd_df = collateral.forward_discount_factor(0.5, 1.0);
/// assert!((fwd_df - (-0.01_f64 * 0.5).exp()).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatCurve<T: Float> {
    /// The constant rate
    rate: T,
}

impl<T: Float> FlatCurve<T> {
    /// Constructs a flat curve with the given constant rate.
    #[inline]
    pub fn new(rate: T) -> Self {
        Self { rate }
    }

    /// Returns the constant rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }
}

impl<T: Float> DiscountCurve<T> for FlatCurve<T> {
    /// Returns `D(0, t) = exp(-r * t)`.
    #[inline]
    fn discount_factor(&self, t: T) -> T {
        (-self.rate * t).exp()
    }

    /// Returns `D(t1, t2) = exp(-r * (t2 - t1))`.
    ///
    /// Overridden to avoid the ratio of two exponentials.
    #[inline]
    fn forward_discount_factor(&self, t1: T, t2: T) -> T {
        (-self.rate * (t2 - t1)).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_discount_factor_at_zero() {
        let curve = FlatCurve::new(0.05_f64);
        assert_relative_eq!(curve.discount_factor(0.0), 1.0);
    }

    #[test]
    fn test_discount_factor() {
        let curve = FlatCurve::new(0.01_f64);
        assert_relative_eq!(
            curve.discount_factor(0.999),
            (-0.01_f64 * 0.999).exp(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_forward_discount_factor_consistency() {
        let curve = FlatCurve::new(0.03_f64);
        let direct = curve.forward_discount_factor(0.25, 0.75);
        let ratio = curve.discount_factor(0.75) / curve.discount_factor(0.25);
        assert_relative_eq!(direct, ratio, epsilon = 1e-14);
    }

    #[test]
    fn test_zero_rate_curve_is_identity() {
        let curve = FlatCurve::new(0.0_f64);
        assert_relative_eq!(curve.discount_factor(5.0), 1.0);
        assert_relative_eq!(curve.forward_discount_factor(1.0, 3.0), 1.0);
    }
}
