//! Discount curves.
//!
//! The adjustment integrals discount at two flat continuously compounded
//! rates (collateral and unsecured). The [`DiscountCurve`] trait keeps the
//! integrators agnostic of the curve shape.

mod flat;

pub use flat::FlatCurve;

use num_traits::Float;

/// Discount factor provider for continuously observed maturities.
pub trait DiscountCurve<T: Float> {
    /// Returns the discount factor `D(0, t)` for maturity `t >= 0`.
    fn discount_factor(&self, t: T) -> T;

    /// Returns the forward discount factor `D(t1, t2) = D(0, t2) / D(0, t1)`.
    ///
    /// This is the factor that carries a cashflow at `t2` back to `t1`.
    fn forward_discount_factor(&self, t1: T, t2: T) -> T {
        self.discount_factor(t2) / self.discount_factor(t1)
    }
}
