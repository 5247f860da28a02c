//! Exposure metrics.
//!
//! Reductions of a single exposure slice:
//!
//! - **EPE**: `mean(floor(X, 0))` - expected positive exposure
//! - **ENE**: `mean(cap(X, 0))` - expected negative exposure (non-positive)
//! - **PFE**: `quantile(X, alpha)` - potential future exposure
//!
//! Applied slice-wise over an [`ExposureSeries`] these produce profile
//! curves over the time grid, exposed as precomputed `(t_i, y_i)` arrays
//! ([`Curve`]) rather than closures of time. Slices are independent, so
//! the profile loops parallelise over time with deterministic per-slice
//! reduction order.

use rayon::prelude::*;
use xva_core::math::Curve;
use xva_core::stochastic::RandomVariable;

use crate::error::EngineError;
use crate::exposure::ExposureSeries;

/// Expected positive exposure of a single slice.
///
/// # Examples
///
/// ```
/// use xva_core::stochastic::RandomVariable;
/// use xva_engine::metrics::{ene, epe};
///
/// let x = RandomVariable::from_samples(0.0, vec![-10.0, 5.0, 15.0]).unwrap();
/// assert!((epe(&x) - 20.0 / 3.0).abs() < 1e-12);
/// assert!((ene(&x) + 10.0 / 3.0).abs() < 1e-12);
/// ```
#[inline]
pub fn epe(slice: &RandomVariable) -> f64 {
    slice.floor(0.0).mean()
}

/// Expected negative exposure of a single slice (a non-positive number).
#[inline]
pub fn ene(slice: &RandomVariable) -> f64 {
    slice.cap(0.0).mean()
}

/// Potential future exposure of a single slice at confidence `alpha`.
///
/// This is the raw quantile of the exposure distribution; it is negative
/// whenever more than `alpha` of the mass lies below zero.
#[inline]
pub fn pfe(slice: &RandomVariable, alpha: f64) -> Result<f64, EngineError> {
    Ok(slice.quantile(alpha)?)
}

/// Expected positive exposure profile over the grid.
pub fn epe_profile(series: &ExposureSeries) -> Result<Curve, EngineError> {
    let values: Vec<f64> = series.values().par_iter().map(epe).collect();
    Ok(Curve::new(series.grid().times().to_vec(), values)?)
}

/// Expected negative exposure profile over the grid.
pub fn ene_profile(series: &ExposureSeries) -> Result<Curve, EngineError> {
    let values: Vec<f64> = series.values().par_iter().map(ene).collect();
    Ok(Curve::new(series.grid().times().to_vec(), values)?)
}

/// Potential future exposure profile over the grid at confidence `alpha`.
///
/// # Errors
///
/// Propagates the quantile-level validation from the slice reduction.
pub fn pfe_profile(series: &ExposureSeries, alpha: f64) -> Result<Curve, EngineError> {
    let values = series
        .values()
        .par_iter()
        .map(|slice| slice.quantile(alpha))
        .collect::<Result<Vec<f64>, _>>()?;
    Ok(Curve::new(series.grid().times().to_vec(), values)?)
}
