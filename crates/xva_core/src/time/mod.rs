//! Time discretisation.

mod grid;

pub use grid::TimeGrid;
