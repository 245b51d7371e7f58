//! Per-side player state.

use serde::{Deserialize, Serialize};

use crate::board::{has_winner, Board};
use crate::core::{BoardError, Side};

/// A random-playing participant bound to one side.
///
/// The side is fixed for the agent's lifetime; the winner flag and turn
/// counter are per game and cleared by [`Agent::reset`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    side: Side,
    is_winner: bool,
    done_turns: u32,
}

impl Agent {
    #[must_use]
    pub const fn new(side: Side) -> Self {
        Self {
            side,
            is_winner: false,
            done_turns: 0,
        }
    }

    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    #[must_use]
    pub const fn is_winner(&self) -> bool {
        self.is_winner
    }

    /// Successful placements in the current game.
    #[must_use]
    pub const fn done_turns(&self) -> u32 {
        self.done_turns
    }

    /// Place this agent's mark at `(x, y)`.
    ///
    /// The turn counter moves by exactly one on success. Board errors are
    /// returned unchanged and leave the counter alone.
    pub fn turn(&mut self, board: &mut Board, x: usize, y: usize) -> Result<(), BoardError> {
        board.set(x, y, self.side)?;
        self.done_turns += 1;
        Ok(())
    }

    /// Re-evaluate the winner flag against `board`.
    pub fn check_winner(&mut self, board: &Board) -> bool {
        self.is_winner = has_winner(board, self.side);
        self.is_winner
    }

    /// Back to the start-of-game state. The side is kept.
    pub fn reset(&mut self) {
        self.is_winner = false;
        self.done_turns = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_new_agent() {
        let agent = Agent::new(Side::B);
        assert_eq!(agent.side(), Side::B);
        assert!(!agent.is_winner());
        assert_eq!(agent.done_turns(), 0);
    }

    #[test]
    fn test_turn_counts_once_per_placement() {
        let mut board = Board::new(3).unwrap();
        let mut agent = Agent::new(Side::A);

        agent.turn(&mut board, 1, 1).unwrap();
        agent.turn(&mut board, 2, 1).unwrap();

        assert_eq!(agent.done_turns(), 2);
        assert_eq!(board.get(2, 1), Ok(Cell::Marked(Side::A)));
    }

    #[test]
    fn test_failed_turn_propagates_and_does_not_count() {
        let mut board = Board::new(3).unwrap();
        let mut a = Agent::new(Side::A);
        let mut b = Agent::new(Side::B);

        a.turn(&mut board, 2, 2).unwrap();
        let err = b.turn(&mut board, 2, 2).unwrap_err();

        assert!(matches!(err, BoardError::CellOccupied { x: 2, y: 2, .. }));
        assert_eq!(b.done_turns(), 0);
        assert_eq!(board.get(2, 2), Ok(Cell::Marked(Side::A)));
    }

    #[test]
    fn test_check_winner_sets_flag() {
        let mut board = Board::new(3).unwrap();
        let mut agent = Agent::new(Side::A);

        for x in 1..=2 {
            agent.turn(&mut board, x, 1).unwrap();
            assert!(!agent.check_winner(&board));
        }
        agent.turn(&mut board, 3, 1).unwrap();

        assert!(agent.check_winner(&board));
        assert!(agent.is_winner());
    }

    #[test]
    fn test_reset_keeps_side() {
        let mut board = Board::new(1).unwrap();
        let mut agent = Agent::new(Side::B);
        agent.turn(&mut board, 1, 1).unwrap();
        agent.check_winner(&board);

        agent.reset();

        assert_eq!(agent, Agent::new(Side::B));
    }
}
