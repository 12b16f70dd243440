#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the torus shapes workspace.
//!
//! This crate defines the vocabulary that connects the authoritative grid,
//! the pure discovery systems, and the adapters. The world owns cell state
//! and hands out [`CellState`] values, the traversal system produces
//! [`Shape`] values made of raw [`Point`]s, and the registry compares shapes
//! through the [`Direction`] signature they carry implicitly in their point
//! order.

use std::fmt;

use thiserror::Error;

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Cell that holds no part of any shape.
    Empty,
    /// Cell that belongs to a shape and has not been explored yet.
    Occupied,
    /// Cell consumed by the traversal. Never leaves this state.
    Visited,
}

/// Wraps `value` into `0..dimension` using floored modulo.
///
/// Negative values wrap from the far edge, so `wrap(-1, 3) == 2` and every
/// multiple of `dimension` maps to zero.
///
/// # Panics
///
/// Panics when `dimension` is zero.
#[must_use]
pub fn wrap(value: i64, dimension: usize) -> usize {
    assert!(dimension > 0, "cannot wrap a coordinate into an empty axis");
    let dimension = dimension as i64;
    value.rem_euclid(dimension) as usize
}

/// Signed grid coordinate.
///
/// Points produced by the traversal are raw: they accumulate unit offsets
/// from the seed and may fall outside the grid. Normalized points are
/// obtained explicitly through the grid and always index a real cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    x: i64,
    y: i64,
}

impl Point {
    /// Creates a point from column (`x`) and row (`y`) coordinates.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Column coordinate.
    #[must_use]
    pub const fn x(&self) -> i64 {
        self.x
    }

    /// Row coordinate.
    #[must_use]
    pub const fn y(&self) -> i64 {
        self.y
    }

    /// Returns the raw point one unit away in the provided direction.
    ///
    /// Coordinates wrap at the `i64` limits. Seeds inside the grid stay far
    /// from those limits, so signatures are only meaningful for such seeds.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "point(x:{}, y:{})", self.x, self.y)
    }
}

/// Unit move between two orthogonally adjacent raw points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Movement toward decreasing row coordinates.
    Up,
    /// Movement toward increasing row coordinates.
    Down,
    /// Movement toward decreasing column coordinates.
    Left,
    /// Movement toward increasing column coordinates.
    Right,
}

impl Direction {
    /// Order in which the traversal expands the neighbors of a cell.
    pub const EXPANSION_ORDER: [Direction; 4] =
        [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    /// Column and row delta of a single step in this direction.
    #[must_use]
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Derives the direction from `from` to `to` using raw coordinates.
    ///
    /// Rows are compared before columns, so a diagonal pair reports the
    /// vertical component.
    ///
    /// # Panics
    ///
    /// Panics when both points are identical; no traversal ever records the
    /// same raw point twice in a row.
    #[must_use]
    pub fn between(from: Point, to: Point) -> Self {
        if from.y > to.y {
            Self::Up
        } else if from.y < to.y {
            Self::Down
        } else if from.x > to.x {
            Self::Left
        } else if from.x < to.x {
            Self::Right
        } else {
            panic!("direction requested between identical points {from} and {to}")
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(label)
    }
}

/// Connected component captured as raw points in discovery order.
///
/// The order is load-bearing: the directions between consecutive points form
/// the signature used to decide congruence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Shape {
    points: Vec<Point>,
}

impl Shape {
    /// Creates a shape from points listed in discovery order.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Raw points of the shape in discovery order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points composing the shape.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Reports whether the shape holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Directions between consecutive points; empty for a single point.
    pub fn signature(&self) -> impl Iterator<Item = Direction> + '_ {
        self.points
            .windows(2)
            .map(|pair| Direction::between(pair[0], pair[1]))
    }

    /// Decides whether two shapes belong to the same congruence class.
    ///
    /// Shapes match when they hold the same number of points and, beyond a
    /// single point, walk through identical signatures. Absolute positions
    /// are never compared, and neither rotation nor reflection is
    /// considered.
    #[must_use]
    pub fn matches(&self, other: &Shape) -> bool {
        if self.len() != other.len() {
            return false;
        }
        if other.len() == 1 {
            return true;
        }
        self.signature().eq(other.signature())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, direction) in self.signature().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{direction}")?;
        }
        Ok(())
    }
}

/// Errors raised while constructing a grid from caller-provided input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// The grid must contain at least one row and one column.
    #[error("grid dimensions must be positive (received {rows} rows and {columns} columns)")]
    InvalidDimensions {
        /// Number of rows supplied.
        rows: usize,
        /// Number of columns supplied.
        columns: usize,
    },
    /// The cell count `rows * columns` does not fit in memory addressing.
    #[error("grid of {rows} rows and {columns} columns is too large to allocate")]
    TooLarge {
        /// Number of rows supplied.
        rows: usize,
        /// Number of columns supplied.
        columns: usize,
    },
    /// A row's length disagrees with the width established by the first row.
    #[error("row {row} holds {found} cells but the grid is {expected} columns wide")]
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width established by the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
}
