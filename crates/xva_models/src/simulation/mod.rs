//! Monte Carlo path simulation.

mod black_scholes;

pub use black_scholes::{AssetPaths, BlackScholesSimulator, BsParams, SimulationError};
