#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Registry system that sorts discovered shapes into congruence classes.

use torus_shapes_core::Shape;

/// Ordered collection holding one exemplar per congruence class.
///
/// Congruence follows [`Shape::matches`]: translation-invariant, but
/// sensitive to rotation, reflection and the order in which the traversal
/// happened to walk the shape. Exemplars keep their first-discovery order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShapeRegistry {
    exemplars: Vec<Shape>,
}

impl ShapeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `shape` as a new exemplar unless an existing one matches it.
    ///
    /// Returns `true` when the shape opened a new class. Congruent shapes
    /// are dropped.
    pub fn classify(&mut self, shape: Shape) -> bool {
        if self.find_match(&shape).is_some() {
            return false;
        }
        self.exemplars.push(shape);
        true
    }

    /// Index of the first exemplar congruent with `shape`, if any.
    #[must_use]
    pub fn find_match(&self, shape: &Shape) -> Option<usize> {
        self.exemplars
            .iter()
            .position(|exemplar| exemplar.matches(shape))
    }

    /// Exemplars in first-discovery order.
    #[must_use]
    pub fn exemplars(&self) -> &[Shape] {
        &self.exemplars
    }

    /// Iterator over the exemplars in first-discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.exemplars.iter()
    }

    /// Number of congruence classes recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.exemplars.len()
    }

    /// Reports whether no shape has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exemplars.is_empty()
    }

    /// Consumes the registry, yielding the exemplars.
    #[must_use]
    pub fn into_exemplars(self) -> Vec<Shape> {
        self.exemplars
    }
}
