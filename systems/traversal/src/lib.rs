#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Flood-fill system that discovers connected shapes on the toroidal grid.
//!
//! Discovery walks raw, unwrapped coordinates away from the seed and only
//! wraps them when touching the grid. A component that crosses an edge
//! therefore keeps its true geometry in the recorded points.

use torus_shapes_core::{CellState, Direction, Point, Shape};
use torus_shapes_world::Grid;

/// Depth-first traversal with a reusable frame stack.
///
/// The stack replaces recursion so large components cannot exhaust the call
/// stack, while the visit order stays identical to a recursive pre-order
/// walk over [`Direction::EXPANSION_ORDER`].
#[derive(Debug, Default)]
pub struct Traversal {
    frames: Vec<Frame>,
}

impl Traversal {
    /// Creates a traversal with an empty frame stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discovers the shape containing `seed`, consuming every cell it touches.
    ///
    /// Returns `None` when the seed was already visited or was not occupied.
    /// In the latter case the seed is still marked visited, which keeps it
    /// from ever seeding again.
    pub fn discover(&mut self, grid: &mut Grid, seed: Point) -> Option<Shape> {
        if grid.is_visited(seed) {
            return None;
        }
        if grid.mark_visited(seed) != CellState::Occupied {
            return None;
        }

        let mut points = vec![seed];
        self.frames.clear();
        self.frames.push(Frame::new(seed));

        while let Some(frame) = self.frames.last_mut() {
            let Some(direction) = frame.next_direction() else {
                let _ = self.frames.pop();
                continue;
            };

            let neighbor = frame.point.step(direction);
            if grid.is_visited(neighbor) {
                continue;
            }
            if grid.mark_visited(neighbor) == CellState::Occupied {
                points.push(neighbor);
                self.frames.push(Frame::new(neighbor));
            }
        }

        Some(Shape::new(points))
    }

    /// Seeds discovery at every cell in row-major order.
    ///
    /// Each discovered shape is handed to `on_shape` as soon as it is
    /// complete, so callers observe shapes in discovery order.
    pub fn scan<F>(&mut self, grid: &mut Grid, mut on_shape: F)
    where
        F: FnMut(Shape),
    {
        let (rows, columns) = grid.dimensions();
        for y in 0..rows {
            for x in 0..columns {
                if let Some(shape) = self.discover(grid, Point::new(x as i64, y as i64)) {
                    on_shape(shape);
                }
            }
        }
    }
}

/// Discovers a single shape with a throwaway traversal.
pub fn discover(grid: &mut Grid, seed: Point) -> Option<Shape> {
    Traversal::new().discover(grid, seed)
}

/// Scans the whole grid with a throwaway traversal.
pub fn scan<F>(grid: &mut Grid, on_shape: F)
where
    F: FnMut(Shape),
{
    Traversal::new().scan(grid, on_shape);
}

#[derive(Clone, Copy, Debug)]
struct Frame {
    point: Point,
    next: usize,
}

impl Frame {
    fn new(point: Point) -> Self {
        Self { point, next: 0 }
    }

    fn next_direction(&mut self) -> Option<Direction> {
        let direction = Direction::EXPANSION_ORDER.get(self.next).copied()?;
        self.next += 1;
        Some(direction)
    }
}
