//! Board representation and win detection.
//!
//! - `grid`: the N×N cell store with get/set/reset and empty-cell enumeration
//! - `lines`: row/column/diagonal extraction and the win check built on it

pub mod grid;
pub mod lines;

pub use grid::{Board, Cell, Coord};
pub use lines::{has_winner, line, lines, winning_line, Line, LineKind};
