//! Pathwise mark-to-market exposure.
//!
//! For a forward with strike `K`, maturity `T`, quantity `q` and sign
//! `s`, the exposure at grid time `t_i <= T` along path `p` is
//!
//! ```text
//! E[i, p] = q * s * (S[i, p] - K) * D(t_i, T)
//! D(t, T) = exp(-r_c * (T - t))
//! ```
//!
//! discounting at the collateral rate. At `t_i = T` the discount factor
//! is one and the exposure is the payoff itself; beyond `T` the deal has
//! expired and the exposure is zero.

use xva_core::curves::{DiscountCurve, FlatCurve};
use xva_core::stochastic::RandomVariable;
use xva_core::time::TimeGrid;
use xva_models::instruments::Forward;
use xva_models::simulation::AssetPaths;

use crate::error::EngineError;

/// Grid-indexed sequence of exposure random variables.
///
/// One [`RandomVariable`] per grid point; immutable after construction.
#[derive(Clone, Debug)]
pub struct ExposureSeries {
    grid: TimeGrid,
    values: Vec<RandomVariable>,
}

impl ExposureSeries {
    /// Returns the underlying time grid.
    #[inline]
    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Returns the number of time slices.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns the exposure slice at grid index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[inline]
    pub fn value_at(&self, i: usize) -> &RandomVariable {
        &self.values[i]
    }

    /// Returns all exposure slices in grid order.
    #[inline]
    pub fn values(&self) -> &[RandomVariable] {
        &self.values
    }

    /// Pointwise sum with another series: the netted portfolio exposure.
    ///
    /// Netting happens here, before any positive/negative clipping - this
    /// ordering is what makes portfolio CVA differ from the sum of
    /// standalone CVAs.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::GridMismatch`] when the series live on
    /// different grids, or a shape mismatch from the slice algebra.
    pub fn sum(&self, other: &Self) -> Result<Self, EngineError> {
        if self.grid != other.grid {
            return Err(EngineError::GridMismatch);
        }
        let values = self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| a.add_rv(b))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            grid: self.grid.clone(),
            values,
        })
    }
}

/// Computes the pathwise exposure series of a forward.
///
/// The initial slice `E[0]` is anchored to the deal's closed-form present
/// value as a constant random variable. This is intentional: all paths
/// start at the same spot, so the time-zero valuation is a known number
/// rather than a Monte Carlo estimate.
///
/// # Arguments
///
/// * `paths` - Simulated asset realisations
/// * `deal` - The forward contract
/// * `collateral_rate` - Flat rate used for mark-to-market discounting
///
/// # Errors
///
/// Returns [`EngineError::OutOfGridMaturity`] when the deal matures
/// outside the simulated grid.
pub fn exposure_series(
    paths: &AssetPaths,
    deal: &Forward,
    collateral_rate: f64,
) -> Result<ExposureSeries, EngineError> {
    let grid = paths.grid();
    let maturity = deal.maturity();
    if !grid.contains(maturity) {
        return Err(EngineError::OutOfGridMaturity {
            maturity,
            t_min: grid.first(),
            t_max: grid.last(),
        });
    }

    let curve = FlatCurve::new(collateral_rate);
    let signed_quantity = deal.signed_quantity();
    let strike = deal.strike();

    let mut values = Vec::with_capacity(grid.len());

    // All paths share the initial spot, so the anchor is exact.
    let spot = paths.asset_value(0).get(0);
    let anchor =
        signed_quantity * (spot - strike * curve.forward_discount_factor(grid.first(), maturity));
    values.push(RandomVariable::constant(grid.first(), anchor));

    for i in 1..grid.len() {
        let t = grid.time(i);
        if t > maturity {
            values.push(RandomVariable::constant(t, 0.0));
            continue;
        }
        let df = curve.forward_discount_factor(t, maturity);
        let slice = paths
            .asset_value(i)
            .mult(df)
            .sub(strike * df)
            .mult(signed_quantity);
        values.push(slice);
    }

    Ok(ExposureSeries {
        grid: grid.clone(),
        values,
    })
}
