//! Black-Scholes Monte Carlo path simulator.
//!
//! Simulates the asset under the risk-neutral measure with drift equal to
//! the collateral rate and constant volatility, using the exact log-space
//! solution of geometric Brownian motion:
//!
//! ```text
//! S(0)   = S_0
//! S(t_i) = S(t_{i-1}) * exp((r - sigma^2/2) * dt_i + sigma * sqrt(dt_i) * Z_i)
//! ```
//!
//! with `Z_i` i.i.d. standard normal. The scheme is exact in distribution
//! at the grid points, so the only discretisation effect left in the
//! downstream integrals is the quadrature of the adjustment formulas.
//!
//! # Memory layout
//!
//! Paths are stored time-major: one contiguous sample vector per grid
//! point, wrapped in a [`RandomVariable`]. This is the layout the
//! exposure engine consumes (whole time slices at once).

use thiserror::Error;
use xva_core::stochastic::RandomVariable;
use xva_core::time::TimeGrid;
use xva_core::types::{GridError, RandomVariableError};

use crate::rng::SimRng;

/// Path simulation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Initial value must be strictly positive.
    #[error("Initial value must be positive, got {value}")]
    InvalidInitialValue {
        /// The offending initial value.
        value: f64,
    },

    /// Volatility must be non-negative and finite.
    #[error("Volatility must be non-negative, got {value}")]
    InvalidVolatility {
        /// The offending volatility.
        value: f64,
    },

    /// At least one path is required.
    #[error("Number of paths must be positive")]
    InvalidPathCount,

    /// A path realisation left the representable domain.
    #[error("Path value became non-finite at time index {index}")]
    NumericalDomain {
        /// Grid index where the first non-finite value appeared.
        index: usize,
    },

    /// Grid construction error surfaced through the simulator.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Random variable construction error (sample bookkeeping).
    #[error(transparent)]
    RandomVariable(#[from] RandomVariableError),
}

/// Black-Scholes model parameters.
///
/// # Examples
///
/// ```
/// use xva_models::simulation::BsParams;
///
/// let params = BsParams::new(100.0, 0.01, 0.25).unwrap();
/// assert_eq!(params.spot(), 100.0);
///
/// // Zero volatility is a valid (deterministic) model
/// assert!(BsParams::new(100.0, 0.01, 0.0).is_ok());
/// assert!(BsParams::new(-1.0, 0.01, 0.25).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BsParams {
    /// Initial spot value `S_0`.
    spot: f64,
    /// Risk-neutral drift (the collateral rate), annualised.
    rate: f64,
    /// Volatility, annualised.
    volatility: f64,
}

impl BsParams {
    /// Creates validated model parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidInitialValue`] for a non-positive
    /// or non-finite spot and [`SimulationError::InvalidVolatility`] for a
    /// negative or non-finite volatility.
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, SimulationError> {
        if !spot.is_finite() || spot <= 0.0 {
            return Err(SimulationError::InvalidInitialValue { value: spot });
        }
        if !volatility.is_finite() || volatility < 0.0 {
            return Err(SimulationError::InvalidVolatility { value: volatility });
        }
        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the initial spot value.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-neutral drift.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }
}

/// Simulated asset realisations over a time grid.
///
/// Conceptually an `N x M` matrix (`N` grid points, `M` paths), exposed as
/// one [`RandomVariable`] per grid point.
#[derive(Clone, Debug)]
pub struct AssetPaths {
    grid: TimeGrid,
    slices: Vec<RandomVariable>,
    n_paths: usize,
}

impl AssetPaths {
    /// Returns the time grid the paths were simulated over.
    #[inline]
    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Returns the number of simulated paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the asset slice at grid index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[inline]
    pub fn asset_value(&self, i: usize) -> &RandomVariable {
        &self.slices[i]
    }

    /// Returns the asset slice at the grid point at or before `t`.
    pub fn asset_value_at_time(&self, t: f64) -> &RandomVariable {
        let i = self.grid.nearest_index_less_or_equal(t);
        &self.slices[i]
    }
}

/// Monte Carlo simulator for the Black-Scholes model.
///
/// # Examples
///
/// ```
/// use xva_core::time::TimeGrid;
/// use xva_models::simulation::{BlackScholesSimulator, BsParams};
///
/// let grid = TimeGrid::uniform(0.0, 100, 0.01).unwrap();
/// let params = BsParams::new(100.0, 0.01, 0.25).unwrap();
/// let simulator = BlackScholesSimulator::new(params);
///
/// let paths = simulator.simulate(&grid, 500, 42).unwrap();
/// assert_eq!(paths.n_paths(), 500);
/// assert_eq!(paths.asset_value(0).get(123), 100.0);
/// ```
#[derive(Clone, Debug)]
pub struct BlackScholesSimulator {
    params: BsParams,
}

impl BlackScholesSimulator {
    /// Creates a simulator for the given model parameters.
    #[inline]
    pub fn new(params: BsParams) -> Self {
        Self { params }
    }

    /// Returns the model parameters.
    #[inline]
    pub fn params(&self) -> &BsParams {
        &self.params
    }

    /// Simulates `n_paths` realisations over `grid` from the given seed.
    ///
    /// Draws are consumed time-major (all paths at step 1, then step 2,
    /// ...), so output is bit-reproducible for a fixed seed regardless of
    /// the surrounding code.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidPathCount`] when `n_paths == 0`
    /// and [`SimulationError::NumericalDomain`] if a realisation becomes
    /// non-finite (extreme parameter regimes).
    pub fn simulate(
        &self,
        grid: &TimeGrid,
        n_paths: usize,
        seed: u64,
    ) -> Result<AssetPaths, SimulationError> {
        if n_paths == 0 {
            return Err(SimulationError::InvalidPathCount);
        }

        let sigma = self.params.volatility;
        let rate = self.params.rate;

        let mut rng = SimRng::from_seed(seed);
        let mut slices = Vec::with_capacity(grid.len());
        let mut current = vec![self.params.spot; n_paths];
        let mut shocks = vec![0.0; n_paths];

        slices.push(RandomVariable::from_samples(grid.first(), current.clone())?);

        for i in 1..grid.len() {
            let dt = grid.step(i);
            let drift = (rate - 0.5 * sigma * sigma) * dt;
            let diffusion = sigma * dt.sqrt();

            rng.fill_normal(&mut shocks);
            for (s, &z) in current.iter_mut().zip(shocks.iter()) {
                *s *= (drift + diffusion * z).exp();
            }
            if current.iter().any(|s| !s.is_finite()) {
                return Err(SimulationError::NumericalDomain { index: i });
            }
            slices.push(RandomVariable::from_samples(grid.time(i), current.clone())?);
        }

        Ok(AssetPaths {
            grid: grid.clone(),
            slices,
            n_paths,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_grid() -> TimeGrid {
        TimeGrid::uniform(0.0, 200, 0.005).unwrap()
    }

    #[test]
    fn test_params_validation() {
        assert!(matches!(
            BsParams::new(0.0, 0.01, 0.25),
            Err(SimulationError::InvalidInitialValue { .. })
        ));
        assert!(matches!(
            BsParams::new(100.0, 0.01, -0.1),
            Err(SimulationError::InvalidVolatility { .. })
        ));
        assert!(BsParams::new(100.0, -0.02, 0.25).is_ok());
    }

    #[test]
    fn test_rejects_zero_paths() {
        let params = BsParams::new(100.0, 0.01, 0.25).unwrap();
        let simulator = BlackScholesSimulator::new(params);
        assert_eq!(
            simulator
                .simulate(&reference_grid(), 0, 1)
                .map(|p| p.n_paths()),
            Err(SimulationError::InvalidPathCount)
        );
    }

    #[test]
    fn test_initial_slice_is_spot() {
        let params = BsParams::new(100.0, 0.01, 0.25).unwrap();
        let paths = BlackScholesSimulator::new(params)
            .simulate(&reference_grid(), 50, 99)
            .unwrap();
        for p in 0..50 {
            assert_eq!(paths.asset_value(0).get(p), 100.0);
        }
    }

    #[test]
    fn test_determinism_same_seed() {
        let grid = reference_grid();
        let params = BsParams::new(100.0, 0.01, 0.25).unwrap();
        let simulator = BlackScholesSimulator::new(params);

        let a = simulator.simulate(&grid, 100, 42).unwrap();
        let b = simulator.simulate(&grid, 100, 42).unwrap();
        for i in 0..grid.len() {
            for p in 0..100 {
                assert_eq!(a.asset_value(i).get(p), b.asset_value(i).get(p));
            }
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let grid = reference_grid();
        let params = BsParams::new(100.0, 0.01, 0.25).unwrap();
        let simulator = BlackScholesSimulator::new(params);

        let a = simulator.simulate(&grid, 100, 1).unwrap();
        let b = simulator.simulate(&grid, 100, 2).unwrap();
        let last = grid.len() - 1;
        assert_ne!(a.asset_value(last).get(0), b.asset_value(last).get(0));
    }

    #[test]
    fn test_martingale_property() {
        // E[S(t) * exp(-r t)] = S_0 within Monte Carlo error
        let grid = reference_grid();
        let spot = 100.0;
        let rate = 0.01;
        let sigma = 0.25;
        let n_paths = 20_000;
        let params = BsParams::new(spot, rate, sigma).unwrap();
        let paths = BlackScholesSimulator::new(params)
            .simulate(&grid, n_paths, 31_415)
            .unwrap();

        let tolerance = 4.0 * sigma * spot / (n_paths as f64).sqrt();
        for i in [0, 50, 100, 199] {
            let t = grid.time(i);
            let discounted = paths.asset_value(i).mean() * (-rate * t).exp();
            assert!(
                (discounted - spot).abs() < tolerance,
                "martingale violated at t = {}: {} vs {}",
                t,
                discounted,
                spot
            );
        }
    }

    #[test]
    fn test_lognormal_first_moment() {
        // E[S(t)] = S_0 * exp(r t) within Monte Carlo error
        let grid = reference_grid();
        let spot = 100.0;
        let rate = 0.05;
        let sigma = 0.2;
        let n_paths = 20_000;
        let params = BsParams::new(spot, rate, sigma).unwrap();
        let paths = BlackScholesSimulator::new(params)
            .simulate(&grid, n_paths, 2_718)
            .unwrap();

        let last = grid.len() - 1;
        let t = grid.time(last);
        let expected = spot * (rate * t).exp();
        let tolerance = 4.0 * sigma * spot / (n_paths as f64).sqrt();
        assert!((paths.asset_value(last).mean() - expected).abs() < tolerance);
    }

    #[test]
    fn test_zero_volatility_is_deterministic_growth() {
        let grid = reference_grid();
        let params = BsParams::new(100.0, 0.03, 0.0).unwrap();
        let paths = BlackScholesSimulator::new(params)
            .simulate(&grid, 10, 5)
            .unwrap();

        for i in [0, 37, 199] {
            let t = grid.time(i);
            let expected = 100.0 * (0.03 * t).exp();
            for p in 0..10 {
                assert_relative_eq!(paths.asset_value(i).get(p), expected, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_asset_value_at_time_uses_nearest_lower_index() {
        let grid = TimeGrid::from_times(vec![0.0, 0.5, 1.0]).unwrap();
        let params = BsParams::new(100.0, 0.0, 0.1).unwrap();
        let paths = BlackScholesSimulator::new(params)
            .simulate(&grid, 10, 11)
            .unwrap();

        let slice = paths.asset_value_at_time(0.7);
        assert_eq!(slice.get(3), paths.asset_value(1).get(3));
    }
}
