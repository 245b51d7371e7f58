//! N×N board storage.
//!
//! Cells live in a flat `Vec` addressed row-major by 1-based coordinates:
//! `(x, y)` maps to `(y - 1) * size + (x - 1)`.

use serde::{Deserialize, Serialize};

use crate::core::{BoardError, Side};

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Side),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The side occupying this cell, if any.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Marked(side) => Some(side),
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => write!(f, "empty"),
            Cell::Marked(side) => write!(f, "{side}"),
        }
    }
}

/// 1-based cell coordinate; both axes lie in `[1, size]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Linear index on a board of edge `size`, or `None` if off the board.
    #[must_use]
    pub const fn index(self, size: usize) -> Option<usize> {
        if self.x == 0 || self.y == 0 || self.x > size || self.y > size {
            None
        } else {
            Some((self.y - 1) * size + (self.x - 1))
        }
    }

    /// Inverse of [`Coord::index`].
    #[must_use]
    pub const fn from_index(index: usize, size: usize) -> Self {
        Self {
            x: index % size + 1,
            y: index / size + 1,
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}y{}", self.x, self.y)
    }
}

/// Square playing field.
///
/// Always holds exactly `size²` cells. A cell is written at most once per
/// game; [`Board::reset`] clears all of them between games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with `size × size` cells.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidSize(size));
        }
        let count = size.checked_mul(size).ok_or(BoardError::InvalidSize(size))?;
        Ok(Self {
            size,
            cells: vec![Cell::Empty; count],
        })
    }

    /// Edge length, the exact integer square root of the cell count.
    #[must_use]
    pub fn size(&self) -> usize {
        debug_assert_eq!(self.size * self.size, self.cells.len());
        self.size
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn index_of(&self, x: usize, y: usize, attempted: Option<Side>) -> Result<usize, BoardError> {
        Coord::new(x, y).index(self.size).ok_or(BoardError::InvalidCoordinate {
            x,
            y,
            size: self.size,
            attempted,
        })
    }

    /// Read the cell at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<Cell, BoardError> {
        let idx = self.index_of(x, y, None)?;
        Ok(self.cells[idx])
    }

    /// Unchecked read for line scans; off-board coordinates read as empty.
    pub(crate) fn cell(&self, coord: Coord) -> Cell {
        coord.index(self.size).map_or(Cell::Empty, |i| self.cells[i])
    }

    /// Mark `(x, y)` for `side`. The cell must be empty; on failure the board
    /// is left untouched.
    pub fn set(&mut self, x: usize, y: usize, side: Side) -> Result<(), BoardError> {
        let idx = self.index_of(x, y, Some(side))?;
        match self.cells[idx] {
            Cell::Empty => {
                self.cells[idx] = Cell::Marked(side);
                Ok(())
            }
            current => Err(BoardError::CellOccupied {
                x,
                y,
                current,
                attempted: side,
            }),
        }
    }

    /// Coordinates of all empty cells, row by row.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<Coord> {
        let mut out = Vec::with_capacity(self.cells.len());
        self.empty_cells_into(&mut out);
        out
    }

    /// Like [`Board::empty_cells`], reusing `out`'s allocation.
    pub fn empty_cells_into(&self, out: &mut Vec<Coord>) {
        out.clear();
        out.extend(
            self.cells()
                .filter(|(_, cell)| cell.is_empty())
                .map(|(coord, _)| coord),
        );
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Clear every cell; the size is unchanged.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Iterate over `(Coord, Cell)` row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &c)| (Coord::from_index(i, self.size), c))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.size) {
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Marked(Side::A) => 'a',
                    Cell::Marked(Side::B) => 'b',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
