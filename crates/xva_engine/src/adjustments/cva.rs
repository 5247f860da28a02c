//! Credit Valuation Adjustment (CVA) calculation.
//!
//! CVA is the expected discounted loss on counterparty default:
//!
//! ```text
//! CVA = LGD * integral_0^T  E[max(-E(t), 0)] * df(t) * dPD(t)
//! ```
//!
//! discretised with the trapezoidal rule over the exposure grid:
//!
//! ```text
//! NE_i = mean( max(-E[i], 0) * df(t_i) + max(-E[i-1], 0) * df(t_{i-1}) )
//! CVA  = LGD * 0.5 * sum_{i=1}^{N-1}  NE_i * (Q(t_{i-1}) - Q(t_i))
//! ```
//!
//! with `df(t) = exp(-r_c * t)` and survival `Q(t) = exp(-lambda * t)`.
//! Discounting inside the integral uses the collateral rate; some
//! conventions use the risky factor `exp(-(r_c + lambda) * t)` instead,
//! which is not what this engine computes.
//!
//! The clip is applied to each series separately for standalone CVA and
//! to the netted sum for portfolio CVA. Because `max` is not additive,
//! standalone CVAs of offsetting deals exceed the portfolio CVA - the
//! netting benefit.

use crate::error::EngineError;
use crate::exposure::ExposureSeries;

use super::credit::CreditParams;

/// Computes the CVA of an exposure series.
///
/// For a portfolio, net the series with [`ExposureSeries::sum`] first;
/// clipping after netting is what produces the netting benefit.
///
/// # Arguments
///
/// * `series` - Pathwise exposure discounted at the collateral rate
/// * `credit` - Counterparty hazard rate and loss given default
/// * `collateral_rate` - Flat rate for the discount factors inside the
///   integral
///
/// # Returns
///
/// The adjustment in deal currency (non-negative: the integrand is a
/// clipped exposure times a default probability). Degenerate
/// single-point grids return zero.
///
/// # Errors
///
/// Propagates sample-shape errors from the slice algebra; a series built
/// by [`crate::exposure::exposure_series`] never triggers them.
pub fn compute_cva(
    series: &ExposureSeries,
    credit: &CreditParams,
    collateral_rate: f64,
) -> Result<f64, EngineError> {
    let grid = series.grid();
    let n = grid.len();
    if n < 2 {
        return Ok(0.0);
    }

    let mut cva = 0.0;
    for i in 1..n {
        let t1 = grid.time(i - 1);
        let t2 = grid.time(i);

        let df1 = (-collateral_rate * t1).exp();
        let df2 = (-collateral_rate * t2).exp();
        let marginal_pd = credit.marginal_pd(t1, t2);

        // Counterparty's claim: the negative part of our exposure
        let prev_claim = series.value_at(i - 1).neg().floor(0.0);
        let curr_claim = series.value_at(i).neg().floor(0.0);

        let discounted = curr_claim.mult(df2).add_rv(&prev_claim.mult(df1))?;
        cva += discounted.mean() * marginal_pd;
    }

    Ok(cva * credit.lgd() * 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exposure::exposure_series;
    use approx::assert_relative_eq;
    use xva_core::time::TimeGrid;
    use xva_models::instruments::{Direction, Forward};
    use xva_models::simulation::{AssetPaths, BlackScholesSimulator, BsParams};

    fn simulate(sigma: f64, n_paths: usize, seed: u64) -> AssetPaths {
        let grid = TimeGrid::uniform(0.0, 200, 0.005).unwrap();
        let params = BsParams::new(100.0, 0.01, sigma).unwrap();
        BlackScholesSimulator::new(params)
            .simulate(&grid, n_paths, seed)
            .unwrap()
    }

    #[test]
    fn test_deep_itm_long_has_negligible_cva() {
        // A deal that is always positive to us never exposes the
        // counterparty's claim
        let paths = simulate(0.0, 4, 1);
        let deal = Forward::new(10.0, paths.grid().last(), 1000.0, Direction::Long).unwrap();
        let series = exposure_series(&paths, &deal, 0.01).unwrap();
        let credit = CreditParams::new(0.04, 0.6).unwrap();

        assert_eq!(compute_cva(&series, &credit, 0.01).unwrap(), 0.0);
    }

    #[test]
    fn test_cva_non_negative() {
        let paths = simulate(0.25, 2000, 11);
        let deal = Forward::new(100.0, paths.grid().last(), 1000.0, Direction::Long).unwrap();
        let series = exposure_series(&paths, &deal, 0.01).unwrap();
        let credit = CreditParams::new(0.04, 0.6).unwrap();

        assert!(compute_cva(&series, &credit, 0.01).unwrap() > 0.0);
    }

    #[test]
    fn test_cva_proportional_to_lgd() {
        let paths = simulate(0.25, 2000, 11);
        let deal = Forward::new(100.0, paths.grid().last(), 1000.0, Direction::Long).unwrap();
        let series = exposure_series(&paths, &deal, 0.01).unwrap();

        let lgd_30 = CreditParams::new(0.04, 0.3).unwrap();
        let lgd_60 = CreditParams::new(0.04, 0.6).unwrap();

        let cva_30 = compute_cva(&series, &lgd_30, 0.01).unwrap();
        let cva_60 = compute_cva(&series, &lgd_60, 0.01).unwrap();
        assert_relative_eq!(cva_60 / cva_30, 2.0, max_relative = 1e-12);
    }

    #[test]
    fn test_cva_increases_with_hazard_rate() {
        let paths = simulate(0.25, 2000, 11);
        let deal = Forward::new(100.0, paths.grid().last(), 1000.0, Direction::Long).unwrap();
        let series = exposure_series(&paths, &deal, 0.01).unwrap();

        let low = CreditParams::new(0.01, 0.6).unwrap();
        let high = CreditParams::new(0.08, 0.6).unwrap();
        assert!(
            compute_cva(&series, &high, 0.01).unwrap() > compute_cva(&series, &low, 0.01).unwrap()
        );
    }

    #[test]
    fn test_zero_hazard_rate_gives_zero_cva() {
        let paths = simulate(0.25, 500, 11);
        let deal = Forward::new(100.0, paths.grid().last(), 1000.0, Direction::Long).unwrap();
        let series = exposure_series(&paths, &deal, 0.01).unwrap();
        let credit = CreditParams::new(0.0, 0.6).unwrap();

        assert_eq!(compute_cva(&series, &credit, 0.01).unwrap(), 0.0);
    }

    #[test]
    fn test_trapezoidal_rule_pinned_deterministic() {
        // sigma = 0 collapses every slice to a constant, so the
        // trapezoidal sum has a direct scalar replica
        // A short forward struck below spot is always negative to us,
        // so the claim is non-trivial on every slice
        let paths = simulate(0.0, 4, 1);
        let grid = paths.grid().clone();
        let (rc, q, k) = (0.01, 1000.0, 95.0);
        let deal = Forward::new(k, grid.last(), q, Direction::Short).unwrap();
        let series = exposure_series(&paths, &deal, rc).unwrap();
        let credit = CreditParams::new(0.04, 0.6).unwrap();

        let mut expected = 0.0;
        for i in 1..grid.len() {
            let (t1, t2) = (grid.time(i - 1), grid.time(i));
            let ne1 = (-series.value_at(i - 1).mean()).max(0.0) * (-rc * t1).exp();
            let ne2 = (-series.value_at(i).mean()).max(0.0) * (-rc * t2).exp();
            expected += (ne1 + ne2) * credit.marginal_pd(t1, t2);
        }
        expected *= 0.6 * 0.5;

        let cva = compute_cva(&series, &credit, rc).unwrap();
        assert_relative_eq!(cva, expected, max_relative = 1e-12);
    }
}
