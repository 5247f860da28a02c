//! Instrument definitions.

mod forward;

pub use forward::{Direction, Forward, InstrumentError};
