//! Static level layout.
//!
//! A `Layout` is built once per game and shared by every state of that game
//! through an `Arc`. It is never mutated after construction.

use rustc_hash::FxHashSet;

use super::geometry::Point;

/// Dimensions, walkable cells and exit of a level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    width: usize,
    height: usize,
    walkable: FxHashSet<Point>,
    exit: Point,
}

impl Layout {
    /// Create a layout.
    ///
    /// # Panics
    ///
    /// Panics if a dimension is zero or the exit is not walkable.
    #[must_use]
    pub fn new(width: usize, height: usize, walkable: FxHashSet<Point>, exit: Point) -> Self {
        assert!(width > 0 && height > 0, "Layout dimensions must be positive");
        assert!(walkable.contains(&exit), "Exit {exit} must be walkable");

        Self {
            width,
            height,
            walkable,
            exit,
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The exit cell.
    #[must_use]
    pub fn exit(&self) -> Point {
        self.exit
    }

    /// Whether `point` is a non-wall cell.
    #[inline]
    #[must_use]
    pub fn is_walkable(&self, point: Point) -> bool {
        self.walkable.contains(&point)
    }

    /// Iterate over all walkable cells (unordered).
    pub fn walkable(&self) -> impl Iterator<Item = Point> + '_ {
        self.walkable.iter().copied()
    }

    /// Number of walkable cells.
    #[must_use]
    pub fn walkable_count(&self) -> usize {
        self.walkable.len()
    }

    /// Smaller of width and height.
    #[must_use]
    pub fn min_dimension(&self) -> usize {
        self.width.min(self.height)
    }
}
