//! Core types: sides, RNG, configuration, errors.

pub mod side;
pub mod rng;
pub mod config;
pub mod error;

pub use side::{Side, SideMap};
pub use rng::{GameRng, RandomSource};
pub use config::{MinTurnsMode, SimulationConfig};
pub use error::{BoardError, ConfigError, SimulationError};
