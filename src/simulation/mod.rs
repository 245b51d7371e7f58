//! Repeated-game simulation and statistics aggregation.

mod driver;
mod stats;

pub use driver::{simulate, Simulation};
pub use stats::Statistics;
