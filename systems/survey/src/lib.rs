#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Survey system that runs a full discovery pass over a grid.
//!
//! The survey owns the grid for the duration of the scan, feeds every
//! discovered shape into a [`ShapeRegistry`], and hands back the registry
//! once the grid is exhausted. The grid is dropped afterwards.

use log::{debug, trace};
use torus_shapes_core::GridError;
use torus_shapes_system_registry::ShapeRegistry;
use torus_shapes_system_traversal::Traversal;
use torus_shapes_world::Grid;

/// Runs discovery and classification over whole grids.
#[derive(Debug, Default)]
pub struct Survey {
    traversal: Traversal,
}

impl Survey {
    /// Creates a survey with fresh traversal buffers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans `grid` row-major and classifies every shape it contains.
    pub fn run(&mut self, mut grid: Grid) -> ShapeRegistry {
        let (rows, columns) = grid.dimensions();
        debug!("surveying {rows}x{columns} grid");

        let mut registry = ShapeRegistry::new();
        let mut discovered = 0usize;
        self.traversal.scan(&mut grid, |shape| {
            discovered += 1;
            let size = shape.len();
            if registry.classify(shape) {
                debug!(
                    "shape {discovered} ({size} cells) opened class {}",
                    registry.len()
                );
            } else {
                trace!("shape {discovered} ({size} cells) matched an existing class");
            }
        });

        debug!(
            "survey finished: {discovered} shapes in {} classes",
            registry.len()
        );
        registry
    }
}

/// Builds a grid from `0`/`1` rows and surveys it.
pub fn survey_rows<R>(rows: &[R]) -> Result<ShapeRegistry, GridError>
where
    R: AsRef<[u8]>,
{
    let grid = Grid::from_rows(rows)?;
    Ok(Survey::new().run(grid))
}
