//! # ttt-sim
//!
//! Random-play tic-tac-toe on N×N boards, repeated many times to collect
//! outcome statistics.
//!
//! ## Rules
//!
//! 1. **Board**: N×N cells, each empty or marked by side A or B. A cell is
//!    marked at most once per game.
//!
//! 2. **Win**: a side wins by owning a full row, a full column, or one of the
//!    two main diagonals. There is no shorter win length.
//!
//! 3. **Play**: side A always opens. Each turn picks a uniformly random empty
//!    cell. A full board without a winner is a draw.
//!
//! ## Architecture
//!
//! - **Flat board**: cells sit in a `Vec` addressed by `(y - 1) * N + (x - 1)`;
//!   lines are walked arithmetically, never cached.
//!
//! - **Injected randomness**: the game runner draws through the
//!   `RandomSource` trait. `GameRng` (ChaCha8) makes seeded runs reproducible.
//!
//! - **Parallel trials**: each rayon worker owns a board and two agents;
//!   per-worker `Statistics` are merged with an order-independent reduction.
//!
//! ## Modules
//!
//! - `core`: sides, RNG, configuration, errors
//! - `board`: cell storage, line extraction, win detection
//! - `play`: player agents and the single-game runner
//! - `simulation`: batch driver and statistics
//!
//! ## Example
//!
//! ```
//! use ttt_sim::{simulate, SimulationConfig};
//!
//! let stats = simulate(SimulationConfig::new().with_trials(100).with_seed(7)).unwrap();
//! assert_eq!(stats.games, 100);
//! assert_eq!(stats.wins + stats.no_winners, 100);
//! ```

pub mod core;
pub mod board;
pub mod play;
pub mod simulation;

// Re-export commonly used types
pub use crate::core::{
    Side, SideMap,
    GameRng, RandomSource,
    MinTurnsMode, SimulationConfig,
    BoardError, ConfigError, SimulationError,
};

pub use crate::board::{has_winner, lines, winning_line, Board, Cell, Coord, Line, LineKind};

pub use crate::play::{Agent, GameOutcome, GameRunner};

pub use crate::simulation::{simulate, Simulation, Statistics};
