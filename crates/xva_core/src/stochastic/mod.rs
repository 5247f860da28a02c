//! Stochastic quantities observed at a point in time.

mod random_variable;

pub use random_variable::RandomVariable;
