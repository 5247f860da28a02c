//! Discounting Valuation Adjustment (DiscVA) calculation.
//!
//! An uncollateralised deal is funded at an unsecured rate `r_u` rather
//! than the collateral rate `r_c` the xVA desk discounts at. To first
//! order in the spread, the two valuations differ by
//!
//! ```text
//! DiscVA = (r_u - r_c) * integral_0^T  V(t) * exp(-r_u * t) dt
//! ```
//!
//! where `V(t)` is the expected collateral-discounted mark-to-market.
//! DiscVA is the amount by which the front-office valuation falls short
//! of the desk valuation:
//!
//! ```text
//! V_frontOffice  ~=  V_xvaDesk - DiscVA
//! ```
//!
//! so it is positive when the unsecured rate exceeds the collateral rate
//! and the expected exposure is positive.

use crate::exposure::ExposureSeries;

/// Computes the DiscVA of an exposure series.
///
/// Uses the left-rectangle rule: slice `i` carries the weight
/// `t_{i+1} - t_i` (the last slice reuses the final step), which reduces
/// to a constant `dt` on the uniform grids of the reference scenarios.
///
/// # Arguments
///
/// * `series` - Pathwise exposure discounted at the collateral rate
/// * `collateral_rate` - Flat collateral (risk-free) rate
/// * `unsecured_rate` - Flat unsecured funding rate
///
/// # Returns
///
/// The adjustment in deal currency. Degenerate single-point grids have
/// no integration interval and return zero.
///
/// # Examples
///
/// ```
/// use xva_core::time::TimeGrid;
/// use xva_models::instruments::{Direction, Forward};
/// use xva_models::simulation::{BlackScholesSimulator, BsParams};
/// use xva_engine::adjustments::compute_discva;
/// use xva_engine::exposure::exposure_series;
///
/// let grid = TimeGrid::uniform(0.0, 100, 0.01).unwrap();
/// let params = BsParams::new(100.0, 0.01, 0.25).unwrap();
/// let paths = BlackScholesSimulator::new(params).simulate(&grid, 1000, 42).unwrap();
/// let deal = Forward::new(80.0, grid.last(), 1000.0, Direction::Long).unwrap();
/// let series = exposure_series(&paths, &deal, 0.01).unwrap();
///
/// // Positive exposure funded above the collateral rate costs money
/// let discva = compute_discva(&series, 0.01, 0.05);
/// assert!(discva > 0.0);
/// ```
pub fn compute_discva(series: &ExposureSeries, collateral_rate: f64, unsecured_rate: f64) -> f64 {
    let grid = series.grid();
    let n = grid.len();
    if n < 2 {
        return 0.0;
    }

    let spread = unsecured_rate - collateral_rate;

    let mut integral = 0.0;
    for i in 0..n {
        let t = grid.time(i);
        let dt = if i + 1 < n { grid.step(i + 1) } else { grid.step(i) };
        integral += series.value_at(i).mean() * (-unsecured_rate * t).exp() * dt;
    }

    spread * integral
}
