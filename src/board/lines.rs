//! Line extraction and win detection.
//!
//! A board of size N has N rows, N columns and the two main diagonals.
//! Lines are derived from the current cells on demand; nothing is cached.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{Board, Cell, Coord};
use crate::core::Side;

/// Cells of one line, in increasing coordinate order.
pub type Line = SmallVec<[Cell; 8]>;

/// Identifies one line of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Fixed `y`, `x` from 1 to N.
    Row(usize),
    /// Fixed `x`, `y` from 1 to N.
    Column(usize),
    /// `x == y`.
    Diagonal,
    /// `x + y == N + 1`.
    AntiDiagonal,
}

impl LineKind {
    /// Every line of a board of edge `size`: rows, then columns, then the
    /// diagonal and the anti-diagonal.
    pub fn all(size: usize) -> impl Iterator<Item = LineKind> {
        (1..=size)
            .map(LineKind::Row)
            .chain((1..=size).map(LineKind::Column))
            .chain([LineKind::Diagonal, LineKind::AntiDiagonal])
    }

    /// Coordinates covered by this line.
    pub fn coords(self, size: usize) -> impl Iterator<Item = Coord> {
        (1..=size).map(move |i| match self {
            LineKind::Row(y) => Coord::new(i, y),
            LineKind::Column(x) => Coord::new(x, i),
            LineKind::Diagonal => Coord::new(i, i),
            LineKind::AntiDiagonal => Coord::new(i, size + 1 - i),
        })
    }
}

/// Read the cells of one line.
#[must_use]
pub fn line(board: &Board, kind: LineKind) -> Line {
    kind.coords(board.size()).map(|c| board.cell(c)).collect()
}

/// All lines of the board with their current contents.
pub fn lines(board: &Board) -> impl Iterator<Item = (LineKind, Line)> + '_ {
    LineKind::all(board.size()).map(move |kind| (kind, line(board, kind)))
}

/// First line fully occupied by `side`, in [`LineKind::all`] order.
#[must_use]
pub fn winning_line(board: &Board, side: Side) -> Option<LineKind> {
    let size = board.size();
    let mark = Cell::Marked(side);
    LineKind::all(size).find(|kind| kind.coords(size).all(|c| board.cell(c) == mark))
}

/// Does `side` own every cell of at least one line?
#[must_use]
pub fn has_winner(board: &Board, side: Side) -> bool {
    winning_line(board, side).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, marks: &[(usize, usize, Side)]) -> Board {
        let mut board = Board::new(size).unwrap();
        for &(x, y, side) in marks {
            board.set(x, y, side).unwrap();
        }
        board
    }

    #[test]
    fn test_line_count() {
        for size in 1..=6 {
            let board = Board::new(size).unwrap();
            assert_eq!(lines(&board).count(), 2 * size + 2);
            assert!(lines(&board).all(|(_, l)| l.len() == size));
        }
    }

    #[test]
    fn test_line_order() {
        let kinds: Vec<_> = LineKind::all(2).collect();
        assert_eq!(
            kinds,
            vec![
                LineKind::Row(1),
                LineKind::Row(2),
                LineKind::Column(1),
                LineKind::Column(2),
                LineKind::Diagonal,
                LineKind::AntiDiagonal,
            ]
        );
    }

    #[test]
    fn test_anti_diagonal_coords() {
        let coords: Vec<_> = LineKind::AntiDiagonal.coords(3).collect();
        assert_eq!(coords, vec![Coord::new(1, 3), Coord::new(2, 2), Coord::new(3, 1)]);
    }

    #[test]
    fn test_line_contents() {
        let board = board_with(3, &[(1, 2, Side::A), (3, 2, Side::B)]);
        let row = line(&board, LineKind::Row(2));
        assert_eq!(
            row.as_slice(),
            &[Cell::Marked(Side::A), Cell::Empty, Cell::Marked(Side::B)]
        );
    }

    #[test]
    fn test_row_win() {
        let board = board_with(3, &[(1, 3, Side::B), (2, 3, Side::B), (3, 3, Side::B)]);
        assert_eq!(winning_line(&board, Side::B), Some(LineKind::Row(3)));
        assert!(!has_winner(&board, Side::A));
    }

    #[test]
    fn test_column_win() {
        let board = board_with(3, &[(2, 1, Side::A), (2, 2, Side::A), (2, 3, Side::A)]);
        assert_eq!(winning_line(&board, Side::A), Some(LineKind::Column(2)));
    }

    #[test]
    fn test_diagonal_wins() {
        let diag = board_with(3, &[(1, 1, Side::A), (2, 2, Side::A), (3, 3, Side::A)]);
        assert_eq!(winning_line(&diag, Side::A), Some(LineKind::Diagonal));

        let anti = board_with(3, &[(1, 3, Side::B), (2, 2, Side::B), (3, 1, Side::B)]);
        assert_eq!(winning_line(&anti, Side::B), Some(LineKind::AntiDiagonal));
    }

    #[test]
    fn test_no_winner() {
        // a b a
        // a b b
        // b a a
        let board = board_with(
            3,
            &[
                (1, 1, Side::A),
                (2, 1, Side::B),
                (3, 1, Side::A),
                (1, 2, Side::A),
                (2, 2, Side::B),
                (3, 2, Side::B),
                (1, 3, Side::B),
                (2, 3, Side::A),
                (3, 3, Side::A),
            ],
        );
        assert!(board.is_full());
        assert!(!has_winner(&board, Side::A));
        assert!(!has_winner(&board, Side::B));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(3, &[(1, 1, Side::A), (2, 1, Side::A), (3, 1, Side::B)]);
        assert!(!has_winner(&board, Side::A));
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::new(4).unwrap();
        assert!(!has_winner(&board, Side::A));
        assert!(!has_winner(&board, Side::B));
    }

    #[test]
    fn test_single_cell_is_every_line() {
        let board = board_with(1, &[(1, 1, Side::A)]);
        assert!(lines(&board).all(|(_, l)| l.as_slice() == [Cell::Marked(Side::A)]));
        assert_eq!(winning_line(&board, Side::A), Some(LineKind::Row(1)));
    }
}
