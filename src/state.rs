use std::collections::HashSet;

use itertools::Itertools;

/// A cell position on the unbounded plane. `y` grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i64, i64)> for Coord {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

/// Builds a [`Generation`] from individual `(x, y)` pairs.
///
/// ```ignore
/// let block = generation![(1, 1), (2, 1), (1, 2), (2, 2)];
/// ```
#[macro_export]
macro_rules! generation {
    () => { $crate::state::Generation::new() };
    ($(($x:expr, $y:expr)),+ $(,)?) => {
        $crate::state::Generation::seed([$($crate::state::Coord::new($x, $y)),+])
    };
}

/// The set of live cells at one simulation step.
///
/// Membership is by value, so duplicate coordinates collapse on insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generation {
    cells: HashSet<Coord>,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed<I, C>(cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Coord>,
    {
        cells.into_iter().map(Into::into).collect()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_alive(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Live cells in no particular order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    pub fn translate(&self, dx: i64, dy: i64) -> Self {
        self.cells().map(|c| c.offset(dx, dy)).collect()
    }

    /// Returns the tightest rectangle holding every live cell, or the
    /// single-cell box at the origin when there are none.
    pub fn bounding_box(&self) -> BoundingBox {
        let (Some((min_x, max_x)), Some((min_y, max_y))) = (
            self.cells().map(|c| c.x).minmax().into_option(),
            self.cells().map(|c| c.y).minmax().into_option(),
        ) else {
            return BoundingBox::new(Coord::ORIGIN, Coord::ORIGIN);
        };
        BoundingBox::new(Coord::new(min_x, min_y), Coord::new(max_x, max_y))
    }
}

impl FromIterator<Coord> for Generation {
    fn from_iter<T: IntoIterator<Item = Coord>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<Coord> for Generation {
    fn extend<T: IntoIterator<Item = Coord>>(&mut self, iter: T) {
        self.cells.extend(iter);
    }
}

/// Returns true iff `generation` holds a cell equal to `coord`.
pub fn is_alive(coord: Coord, generation: &Generation) -> bool {
    generation.is_alive(coord)
}

/// Inclusive axis-aligned rectangle. `bottom_left <= top_right` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub bottom_left: Coord,
    pub top_right: Coord,
}

impl BoundingBox {
    pub fn new(bottom_left: Coord, top_right: Coord) -> Self {
        Self {
            bottom_left,
            top_right,
        }
    }

    /// Grows the box by `by` cells on every side.
    pub fn expand(self, by: i64) -> Self {
        Self::new(
            self.bottom_left.offset(-by, -by),
            self.top_right.offset(by, by),
        )
    }

    pub fn width(&self) -> u64 {
        self.top_right.x.abs_diff(self.bottom_left.x) + 1
    }

    pub fn height(&self) -> u64 {
        self.top_right.y.abs_diff(self.bottom_left.y) + 1
    }

    pub fn contains(&self, coord: Coord) -> bool {
        (self.bottom_left.x..=self.top_right.x).contains(&coord.x)
            && (self.bottom_left.y..=self.top_right.y).contains(&coord.y)
    }

    /// Row indices from the top row down.
    pub fn rows(&self) -> impl Iterator<Item = i64> {
        (self.bottom_left.y..=self.top_right.y).rev()
    }

    /// Column indices from left to right.
    pub fn columns(&self) -> impl Iterator<Item = i64> {
        self.bottom_left.x..=self.top_right.x
    }

    /// Every cell in the box, row-major: y descending, then x ascending.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let columns = self.bottom_left.x..=self.top_right.x;
        self.rows()
            .flat_map(move |y| columns.clone().map(move |x| Coord::new(x, y)))
    }
}
