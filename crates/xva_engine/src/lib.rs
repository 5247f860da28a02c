//! # xVA Engine (Application Layer)
//!
//! Pathwise exposure and valuation adjustments for linear derivative
//! portfolios.
//!
//! This crate provides:
//! - Pathwise mark-to-market exposure series for forwards
//! - Exposure metrics: EPE, ENE and PFE profiles over the time grid
//! - Adjustment calculators: DiscVA (funding-discounting correction) and
//!   CVA (counterparty credit) with a constant hazard-rate default model
//!
//! ## Pipeline
//!
//! ```text
//! configure -> simulate -> derive exposures -> reduce -> integrate
//!
//! ┌──────────────┐   ┌─────────────────┐   ┌────────────────────┐
//! │  xva_models  │──▶│ exposure_series │──▶│ metrics (EPE/ENE/  │
//! │  AssetPaths  │   │ ExposureSeries  │   │ PFE profiles)      │
//! └──────────────┘   └───────┬─────────┘   └────────────────────┘
//!                            │
//!                            ▼
//!                    ┌────────────────────┐
//!                    │ adjustments        │
//!                    │ (DiscVA, CVA)      │
//!                    └────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use xva_core::time::TimeGrid;
//! use xva_models::instruments::{Direction, Forward};
//! use xva_models::simulation::{BlackScholesSimulator, BsParams};
//! use xva_engine::adjustments::{compute_cva, CreditParams};
//! use xva_engine::exposure::exposure_series;
//! use xva_engine::metrics::epe;
//!
//! let grid = TimeGrid::uniform(0.0, 100, 0.01).unwrap();
//! let params = BsParams::new(100.0, 0.01, 0.25).unwrap();
//! let paths = BlackScholesSimulator::new(params).simulate(&grid, 1000, 42).unwrap();
//!
//! let forward = Forward::new(80.0, grid.last(), 1000.0, Direction::Long).unwrap();
//! let series = exposure_series(&paths, &forward, 0.01).unwrap();
//!
//! // A deep in-the-money long forward carries positive expected exposure
//! assert!(epe(series.value_at(50)) > 0.0);
//!
//! let credit = CreditParams::new(0.04, 0.6).unwrap();
//! let cva = compute_cva(&series, &credit, 0.01).unwrap();
//! assert!(cva >= 0.0);
//! ```

#![warn(missing_docs)]

pub mod adjustments;
pub mod error;
pub mod exposure;
pub mod metrics;

// Re-export commonly used types
pub use adjustments::{compute_cva, compute_discva, AdjustmentError, CreditParams};
pub use error::EngineError;
pub use exposure::{exposure_series, ExposureSeries};
