#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative toroidal grid state.
//!
//! The [`Grid`] exclusively owns every cell. All addressing goes through
//! [`Grid::normalize`], so callers may hand in raw points that drifted past
//! any edge and still land on the cell at the opposite side.

use torus_shapes_core::{wrap, CellState, GridError, Point};

/// Value that marks an occupied cell in caller-provided rows.
pub const OCCUPIED_INPUT: u8 = 1;

/// Fixed-size toroidal occupancy grid stored in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates a grid with every cell empty.
    pub fn new(rows: usize, columns: usize) -> Result<Self, GridError> {
        if rows == 0 || columns == 0 {
            return Err(GridError::InvalidDimensions { rows, columns });
        }
        let cell_count = rows
            .checked_mul(columns)
            .ok_or(GridError::TooLarge { rows, columns })?;

        Ok(Self {
            rows,
            columns,
            cells: vec![CellState::Empty; cell_count],
        })
    }

    /// Builds a grid from rows of `0`/`1` values.
    ///
    /// The first row fixes the width. Cells equal to [`OCCUPIED_INPUT`]
    /// become occupied; any other value is treated as empty.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, GridError>
    where
        R: AsRef<[u8]>,
    {
        let columns = rows.first().map_or(0, |row| row.as_ref().len());
        let mut grid = Self::new(rows.len(), columns)?;

        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != columns {
                return Err(GridError::RaggedRow {
                    row: row_index,
                    expected: columns,
                    found: row.len(),
                });
            }

            let start = row_index * columns;
            for (slot, &value) in grid.cells[start..start + columns].iter_mut().zip(row) {
                if value == OCCUPIED_INPUT {
                    *slot = CellState::Occupied;
                }
            }
        }

        Ok(grid)
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Provides the grid dimensions as `(rows, columns)`.
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Wraps a raw point onto the torus so both coordinates index a cell.
    #[must_use]
    pub fn normalize(&self, point: Point) -> Point {
        Point::new(
            wrap(point.x(), self.columns) as i64,
            wrap(point.y(), self.rows) as i64,
        )
    }

    /// Reads the state of the cell addressed by `point` after wrapping.
    #[must_use]
    pub fn state_at(&self, point: Point) -> CellState {
        self.cells[self.index(point)]
    }

    /// Reports whether the cell addressed by `point` was already consumed.
    #[must_use]
    pub fn is_visited(&self, point: Point) -> bool {
        self.state_at(point) == CellState::Visited
    }

    /// Marks the addressed cell occupied.
    pub fn set_occupied(&mut self, point: Point) {
        let index = self.index(point);
        self.cells[index] = CellState::Occupied;
    }

    /// Consumes the addressed cell and returns the state it held before.
    ///
    /// Empty cells are consumed as well, so a cell is never offered to the
    /// traversal twice regardless of what it held.
    ///
    /// # Panics
    ///
    /// Panics when the cell was already visited. Callers must check
    /// [`Grid::is_visited`] first; reaching this is a traversal defect.
    pub fn mark_visited(&mut self, point: Point) -> CellState {
        let index = self.index(point);
        let prior = self.cells[index];
        if prior == CellState::Visited {
            panic!(
                "cell visited twice: raw {point}, normalized {}",
                self.normalize(point)
            );
        }
        self.cells[index] = CellState::Visited;
        prior
    }

    fn index(&self, point: Point) -> usize {
        let column = wrap(point.x(), self.columns);
        let row = wrap(point.y(), self.rows);
        row * self.columns + column
    }
}
