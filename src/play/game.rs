//! Single-game runner.
//!
//! Side A opens every game. Each turn the current agent marks a uniformly
//! random empty cell and is checked for a win before the turn passes, so a
//! winning move ends the game immediately. A full board without a winner is
//! a draw. Every turn fills one cell, so a game lasts at most N² turns.

use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

use super::Agent;
use crate::board::{Board, Coord};
use crate::core::{BoardError, RandomSource, Side, SideMap};

/// Result of one finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Winning side, `None` for a draw.
    pub winner: Option<Side>,
    /// Turns each side made in this game.
    pub turns: SideMap<u32>,
}

impl GameOutcome {
    /// Snapshot the agents after a game.
    #[must_use]
    pub fn from_agents(winner: Option<Side>, agents: &SideMap<Agent>) -> Self {
        Self {
            winner,
            turns: SideMap::new(|side| agents[side].done_turns()),
        }
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }

    /// Turns made by the winner, if there is one.
    #[must_use]
    pub fn winner_turns(&self) -> Option<u32> {
        self.winner.map(|side| self.turns[side])
    }

    /// Turns made by both sides together.
    #[must_use]
    pub fn total_turns(&self) -> u32 {
        self.turns.values().sum()
    }
}

/// Drives games on a shared board.
///
/// Holds a scratch buffer for the empty-cell list so repeated games do not
/// reallocate it.
#[derive(Clone, Debug, Default)]
pub struct GameRunner {
    empty: Vec<Coord>,
}

impl GameRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Play one game to completion and return the winning side.
    ///
    /// `board` and `agents` must be in their start-of-game state. A board
    /// error here means move selection picked an occupied or off-board
    /// cell, which is a bug; it is returned as-is.
    #[instrument(level = "trace", skip_all, fields(size = board.size()))]
    pub fn play<R: RandomSource>(
        &mut self,
        board: &mut Board,
        agents: &mut SideMap<Agent>,
        rng: &mut R,
    ) -> Result<Option<Side>, BoardError> {
        let mut current = Side::A;

        loop {
            board.empty_cells_into(&mut self.empty);
            if self.empty.is_empty() {
                trace!(board = %board, "game over, draw");
                return Ok(None);
            }

            let pick = self.empty[rng.uniform(0, self.empty.len() - 1)];
            let agent = &mut agents[current];
            agent.turn(board, pick.x, pick.y)?;
            trace!(side = %current, cell = %pick, "turn");

            if agent.check_winner(board) {
                trace!(winner = %current, board = %board, "game over");
                return Ok(Some(current));
            }
            current = current.opponent();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    /// Always picks the first empty cell.
    struct FirstCell;

    impl RandomSource for FirstCell {
        fn uniform(&mut self, min: usize, _max: usize) -> usize {
            min
        }
    }

    /// Always picks the last empty cell.
    struct LastCell;

    impl RandomSource for LastCell {
        fn uniform(&mut self, _min: usize, max: usize) -> usize {
            max
        }
    }

    fn agents() -> SideMap<Agent> {
        SideMap::new(Agent::new)
    }

    #[test]
    fn test_first_cell_policy_a_wins_anti_diagonal() {
        // a b a / b a b / a . . : A completes the anti-diagonal on its 4th turn.
        let mut board = Board::new(3).unwrap();
        let mut agents = agents();

        let winner = GameRunner::new().play(&mut board, &mut agents, &mut FirstCell).unwrap();

        assert_eq!(winner, Some(Side::A));
        assert_eq!(agents[Side::A].done_turns(), 4);
        assert_eq!(agents[Side::B].done_turns(), 3);
        assert!(agents[Side::A].is_winner());
        assert!(!agents[Side::B].is_winner());
        assert_eq!(board.empty_cells().len(), 2);
    }

    #[test]
    fn test_last_cell_policy_is_deterministic() {
        let mut board = Board::new(3).unwrap();
        let mut agents = agents();

        let winner = GameRunner::new().play(&mut board, &mut agents, &mut LastCell).unwrap();

        assert_eq!(winner, Some(Side::A));
        assert_eq!(agents[Side::A].done_turns(), 4);
    }

    #[test]
    fn test_single_cell_board_first_move_wins() {
        let mut board = Board::new(1).unwrap();
        let mut agents = agents();
        let mut rng = GameRng::new(1);

        let winner = GameRunner::new().play(&mut board, &mut agents, &mut rng).unwrap();

        assert_eq!(winner, Some(Side::A));
        assert_eq!(agents[Side::A].done_turns(), 1);
        assert_eq!(agents[Side::B].done_turns(), 0);
    }

    #[test]
    fn test_game_terminates_within_board_capacity() {
        let mut runner = GameRunner::new();
        for seed in 0..200 {
            let mut board = Board::new(3).unwrap();
            let mut agents = agents();
            let mut rng = GameRng::new(seed);

            let winner = runner.play(&mut board, &mut agents, &mut rng).unwrap();
            let outcome = GameOutcome::from_agents(winner, &agents);

            assert!(outcome.total_turns() <= 9);
            match winner {
                Some(side) => {
                    assert!(agents[side].is_winner());
                    assert!(outcome.winner_turns().unwrap() >= 3);
                    // A opens, so A is always level with or one ahead of B.
                    assert!(outcome.turns[Side::A] - outcome.turns[Side::B] <= 1);
                }
                None => {
                    assert!(board.is_full());
                    assert_eq!(outcome.total_turns(), 9);
                }
            }
        }
    }

    #[test]
    fn test_existing_marks_are_never_overwritten() {
        let mut board = Board::new(2).unwrap();
        let mut agents = agents();
        board.set(1, 1, Side::B).unwrap();

        let winner = GameRunner::new().play(&mut board, &mut agents, &mut FirstCell).unwrap();

        assert!(winner.is_some());
        assert_eq!(board.get(1, 1).unwrap().side(), Some(Side::B));
    }

    #[test]
    fn test_outcome_helpers() {
        let outcome = GameOutcome {
            winner: Some(Side::B),
            turns: SideMap::with_value(3),
        };
        assert_eq!(outcome.winner_turns(), Some(3));
        assert_eq!(outcome.total_turns(), 6);
        assert!(!outcome.is_draw());

        let draw = GameOutcome {
            winner: None,
            turns: SideMap::new(|s| if s == Side::A { 5 } else { 4 }),
        };
        assert!(draw.is_draw());
        assert_eq!(draw.winner_turns(), None);
    }
}
