//! Pseudo-random number generation for Monte Carlo simulation.
//!
//! Provides [`SimRng`], a seeded PRNG wrapper offering reproducible
//! standard normal draws with zero-allocation batch generation.

mod sim_rng;

pub use sim_rng::SimRng;
