#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Text rendering for surveyed shapes.
//!
//! Each exemplar is wrapped back onto the grid, cropped to its bounding box,
//! and drawn as a fixed-width [`TextBlock`] followed by a separator line.
//! Blocks are independent of each other and are written back to back.

mod style;

use std::{fmt, io::Write};

use anyhow::{Context, Result as AnyResult};
use torus_shapes_core::{wrap, Shape};

pub use style::RenderStyle;

/// Rendered rows of a single exemplar, separator line included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextBlock {
    lines: Vec<String>,
    width: usize,
}

impl TextBlock {
    /// Lines of the block in output order, without line terminators.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of shape rows drawn above the separator.
    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    /// Number of shape columns drawn after the margin.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }
}

impl fmt::Display for TextBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Draws shapes as text blocks using a [`RenderStyle`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Renderer {
    style: RenderStyle,
}

impl Renderer {
    /// Creates a renderer that draws with the provided style.
    #[must_use]
    pub const fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    /// Style applied to every rendered block.
    #[must_use]
    pub const fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Renders `shape` as it appears on a `rows` x `columns` torus.
    ///
    /// Points are wrapped onto the grid before cropping, so the block never
    /// exceeds the grid's own dimensions. Points that wrap onto the same
    /// cell simply draw the same glyph.
    #[must_use]
    pub fn render(&self, shape: &Shape, rows: usize, columns: usize) -> TextBlock {
        let cells: Vec<(usize, usize)> = shape
            .points()
            .iter()
            .map(|point| (wrap(point.x(), columns), wrap(point.y(), rows)))
            .collect();
        let bounds = Bounds::enclosing(&cells, rows, columns);
        let width = bounds.width();
        let height = bounds.height();

        let mut canvas = vec![vec![false; width]; height];
        for &(column, row) in &cells {
            canvas[row - bounds.low_y][column - bounds.low_x] = true;
        }

        let margin = " ".repeat(self.style.margin());
        let mut lines: Vec<String> = canvas
            .iter()
            .map(|row| {
                let mut line = margin.clone();
                line.extend(row.iter().map(|&filled| {
                    if filled {
                        self.style.filled()
                    } else {
                        self.style.empty()
                    }
                }));
                line
            })
            .collect();

        let separator_length = width + self.style.margin();
        lines.push(
            std::iter::repeat(self.style.separator())
                .take(separator_length)
                .collect(),
        );

        TextBlock { lines, width }
    }

    /// Renders every exemplar in order.
    #[must_use]
    pub fn render_all(&self, exemplars: &[Shape], rows: usize, columns: usize) -> Vec<TextBlock> {
        exemplars
            .iter()
            .map(|shape| self.render(shape, rows, columns))
            .collect()
    }
}

/// Renders `shape` with the default style.
#[must_use]
pub fn render(shape: &Shape, rows: usize, columns: usize) -> TextBlock {
    Renderer::default().render(shape, rows, columns)
}

/// Streams blocks into `sink` back to back, then flushes it.
pub fn write_blocks<'a, I, W>(blocks: I, sink: &mut W) -> AnyResult<()>
where
    I: IntoIterator<Item = &'a TextBlock>,
    W: Write,
{
    for block in blocks {
        write!(sink, "{block}").context("failed to write rendered shape")?;
    }
    sink.flush().context("failed to flush rendered shapes")
}

/// Inclusive bounding box over wrapped cells.
///
/// Seeded with the far corner so an empty cell set collapses to a zero-area
/// box instead of underflowing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Bounds {
    low_x: usize,
    high_x: usize,
    low_y: usize,
    high_y: usize,
}

impl Bounds {
    fn enclosing(cells: &[(usize, usize)], rows: usize, columns: usize) -> Self {
        let mut bounds = Self {
            low_x: columns,
            high_x: 0,
            low_y: rows,
            high_y: 0,
        };
        for &(column, row) in cells {
            bounds.low_x = bounds.low_x.min(column);
            bounds.high_x = bounds.high_x.max(column);
            bounds.low_y = bounds.low_y.min(row);
            bounds.high_y = bounds.high_y.max(row);
        }
        bounds
    }

    fn width(&self) -> usize {
        (self.high_x + 1).saturating_sub(self.low_x)
    }

    fn height(&self) -> usize {
        (self.high_y + 1).saturating_sub(self.low_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use torus_shapes_core::Point;

    fn shape(points: &[(i64, i64)]) -> Shape {
        Shape::new(points.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    #[test]
    fn bounds_cover_every_cell() {
        let bounds = Bounds::enclosing(&[(3, 1), (1, 4), (2, 2)], 6, 6);

        assert_eq!(
            bounds,
            Bounds {
                low_x: 1,
                high_x: 3,
                low_y: 1,
                high_y: 4,
            }
        );
        assert_eq!(bounds.width(), 3);
        assert_eq!(bounds.height(), 4);
    }

    #[test]
    fn empty_bounds_have_no_area() {
        let bounds = Bounds::enclosing(&[], 3, 5);

        assert_eq!(bounds.width(), 0);
        assert_eq!(bounds.height(), 0);
    }

    #[test]
    fn empty_shape_renders_only_the_separator() {
        let block = render(&Shape::default(), 3, 3);

        assert_eq!(block.lines(), &["----".to_owned()]);
        assert_eq!(block.height(), 0);
        assert_eq!(block.width(), 0);
    }

    #[test]
    fn single_cell_renders_with_margin() {
        let block = render(&shape(&[(1, 1)]), 3, 3);

        assert_eq!(block.to_string(), "    X\n-----\n");
        assert_eq!(block.height(), 1);
        assert_eq!(block.width(), 1);
    }

    #[test]
    fn raw_points_are_wrapped_before_cropping() {
        let block = render(&shape(&[(0, 0), (-1, 0)]), 1, 5);

        assert_eq!(block.to_string(), "    X   X\n---------\n");
    }

    #[test]
    fn overlapping_wrapped_points_draw_once() {
        let block = render(&shape(&[(0, 0), (1, 0), (2, 0), (3, 0)]), 1, 3);

        assert_eq!(block.to_string(), "    XXX\n-------\n");
    }

    #[test]
    fn custom_style_changes_glyphs_and_margin() {
        let style = RenderStyle::new(1, '#', '.', '=');
        let block = Renderer::new(style).render(&shape(&[(0, 0), (1, 1)]), 4, 4);

        assert_eq!(block.to_string(), " #.\n .#\n===\n");
    }

    #[test]
    fn write_blocks_concatenates_without_blank_lines() {
        let blocks = vec![
            render(&shape(&[(0, 0)]), 2, 2),
            render(&shape(&[(0, 0), (1, 0)]), 2, 2),
        ];
        let mut sink = Vec::new();

        write_blocks(&blocks, &mut sink).expect("writing to memory succeeds");

        assert_eq!(
            String::from_utf8(sink).expect("blocks are utf-8"),
            "    X\n-----\n    XX\n------\n"
        );
    }
}
