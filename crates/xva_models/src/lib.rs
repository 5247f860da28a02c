//! # xVA Models (Model Layer)
//!
//! Stochastic models and instruments for the exposure engine.
//!
//! This crate provides:
//! - A seeded random number generator wrapper for reproducible draws
//! - A Black-Scholes (geometric Brownian motion) Monte Carlo path
//!   simulator under the risk-neutral measure
//! - The forward instrument priced by the exposure engine
//!
//! ## Determinism
//!
//! Path generation is single-threaded with a fixed draw order (time-major),
//! so a given seed and configuration reproduces every path bit-for-bit.

#![warn(missing_docs)]

pub mod instruments;
pub mod rng;
pub mod simulation;

// Re-export commonly used types
pub use instruments::{Direction, Forward, InstrumentError};
pub use rng::SimRng;
pub use simulation::{AssetPaths, BlackScholesSimulator, BsParams, SimulationError};
