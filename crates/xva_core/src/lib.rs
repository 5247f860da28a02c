//! # xVA Core (Foundation Layer)
//!
//! Foundation types for Monte Carlo exposure simulation.
//!
//! This crate provides:
//! - Time discretisation grids with nearest-index lookup
//! - Immutable random variables with pointwise arithmetic and
//!   statistical reductions
//! - Flat discount curves
//! - Sampled curves with linear interpolation
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             xva_core                    │
//! ├─────────────────────────────────────────┤
//! │  time/       - TimeGrid                 │
//! │  stochastic/ - RandomVariable           │
//! │  curves/     - DiscountCurve, FlatCurve │
//! │  math/       - Curve (interpolation)    │
//! │  types/      - error enums              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! All entities are immutable after construction: every operation on a
//! [`stochastic::RandomVariable`] returns a fresh value, so instances may
//! be freely shared across threads.

#![warn(missing_docs)]

pub mod curves;
pub mod math;
pub mod stochastic;
pub mod time;
pub mod types;

// Re-export commonly used types
pub use curves::{DiscountCurve, FlatCurve};
pub use math::Curve;
pub use stochastic::RandomVariable;
pub use time::TimeGrid;
pub use types::{CurveError, GridError, RandomVariableError};
