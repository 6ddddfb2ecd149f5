use std::fmt;

use super::PlayerId;
use crate::error::MoveError;

/// Number of same-player cells in a winning run.
pub const RUN_LENGTH: usize = 4;

/// Row/column deltas for the four run directions: horizontal, vertical,
/// diagonal down-right, diagonal down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(PlayerId),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// The grid. Row 0 is the top, row `rows - 1` the bottom; pieces fall
/// towards the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    ///
    /// Zero-sized, overflowing, or unallocatable dimensions are rejected
    /// with [`MoveError::InvalidDimensions`].
    pub fn new(rows: usize, columns: usize) -> Result<Self, MoveError> {
        let invalid = MoveError::InvalidDimensions { rows, columns };
        if rows == 0 || columns == 0 {
            return Err(invalid);
        }
        let len = rows.checked_mul(columns).ok_or_else(|| invalid.clone())?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| invalid)?;
        cells.resize(len, Cell::Empty);

        Ok(Board {
            rows,
            columns,
            cells,
        })
    }

    /// A fresh empty board with the same dimensions.
    pub fn cleared(&self) -> Board {
        Board {
            rows: self.rows,
            columns: self.columns,
            cells: vec![Cell::Empty; self.cells.len()],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Get the cell at a specific position. Panics if out of range.
    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[self.index(row, column)]
    }

    /// Like [`Board::get`], but `None` for coordinates off the board.
    pub fn try_get(&self, row: usize, column: usize) -> Option<Cell> {
        (row < self.rows && column < self.columns).then(|| self.get(row, column))
    }

    fn index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    fn check_column(&self, column: usize) -> Result<(), MoveError> {
        if column >= self.columns {
            return Err(MoveError::InvalidColumn {
                column,
                columns: self.columns,
            });
        }
        Ok(())
    }

    /// Lowest empty row in `column`, or `None` when the column is full.
    pub fn landing_row(&self, column: usize) -> Result<Option<usize>, MoveError> {
        self.check_column(column)?;
        Ok((0..self.rows)
            .rev()
            .find(|&row| self.get(row, column).is_empty()))
    }

    /// Mark a cell as occupied. Callers obtain `row` from
    /// [`Board::landing_row`] so the cell is always empty and supported.
    pub(crate) fn place(&mut self, row: usize, column: usize, player: PlayerId) {
        debug_assert!(self.get(row, column).is_empty(), "cell already occupied");
        let idx = self.index(row, column);
        self.cells[idx] = Cell::Occupied(player);
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= self.columns {
            return true;
        }
        !self.get(0, column).is_empty()
    }

    /// Columns that can still take a piece
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.columns)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Whether the run of [`RUN_LENGTH`] cells starting at (row, column) in
    /// direction (dr, dc) is entirely on the board and owned by `player`.
    fn is_run(
        &self,
        row: usize,
        column: usize,
        (dr, dc): (isize, isize),
        player: PlayerId,
    ) -> bool {
        (0..RUN_LENGTH as isize).all(|step| {
            let r = row as isize + dr * step;
            let c = column as isize + dc * step;
            r >= 0
                && c >= 0
                && self.try_get(r as usize, c as usize) == Some(Cell::Occupied(player))
        })
    }

    /// Scan every cell as the start of a run in every direction.
    pub fn has_run_anywhere(&self, player: PlayerId) -> bool {
        (0..self.rows).any(|row| {
            (0..self.columns).any(|column| {
                DIRECTIONS
                    .iter()
                    .any(|&dir| self.is_run(row, column, dir, player))
            })
        })
    }

    /// Check only the runs passing through (row, column), counting outwards
    /// in both senses of each direction.
    pub fn has_run_through(&self, row: usize, column: usize, player: PlayerId) -> bool {
        if self.try_get(row, column) != Some(Cell::Occupied(player)) {
            return false;
        }

        DIRECTIONS.iter().any(|&(dr, dc)| {
            let count = 1
                + self.count_from(row, column, (dr, dc), player)
                + self.count_from(row, column, (-dr, -dc), player);
            count >= RUN_LENGTH
        })
    }

    /// Consecutive `player` cells after (row, column) in direction (dr, dc)
    fn count_from(
        &self,
        row: usize,
        column: usize,
        (dr, dc): (isize, isize),
        player: PlayerId,
    ) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = column as isize + dc;
        while r >= 0
            && c >= 0
            && self.try_get(r as usize, c as usize) == Some(Cell::Occupied(player))
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line: String = (0..self.columns)
                .map(|col| match self.get(row, col) {
                    Cell::Empty => '.',
                    Cell::Occupied(player) => player.symbol(),
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        let footer: String = (0..self.columns)
            .map(|col| char::from_digit(((col + 1) % 10) as u32, 10).unwrap_or('?'))
            .collect();
        write!(f, "{footer}")
    }
}
