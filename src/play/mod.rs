//! Turn-taking: player agents and the single-game runner.

pub mod agent;
pub mod game;

pub use agent::Agent;
pub use game::{GameOutcome, GameRunner};
