use std::collections::{BTreeSet, VecDeque};
use std::str::FromStr;

use super::key::ShapeKey;
use super::types::{Point, ShapeError};
use crate::cfg::MAX_SIZE;
use crate::transform;

/// One polyomino: a non-empty set of cells; `size` is the cell count.
///
/// Invariants:
/// - `points.len() == size >= 1`.
/// - Shapes built through `parse`/`from_points` are edge-connected; `grow`
///   preserves connectivity when the new cell is a free boundary cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    size: usize,
    points: BTreeSet<Point>,
}

impl Shape {
    pub(crate) fn from_set(points: BTreeSet<Point>) -> Self {
        Self {
            size: points.len(),
            points,
        }
    }

    /// The single cell at the origin, `"1/0"`.
    pub fn monomino() -> Self {
        Self::from_set(BTreeSet::from([Point::new(0, 0)]))
    }

    /// Build from an explicit cell list; `size` becomes the number of cells
    /// (at most the encodable maximum). Coordinates are kept as given (they
    /// may be negative).
    pub fn from_points<I>(points: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = Point>,
    {
        let raw: Vec<Point> = points.into_iter().collect();
        if raw.is_empty() {
            return Err(ShapeError::EmptyShape);
        }
        if raw.len() > MAX_SIZE {
            return Err(ShapeError::invalid(format!(
                "{} cells exceed the maximum of {MAX_SIZE}",
                raw.len()
            )));
        }
        let set: BTreeSet<Point> = raw.iter().copied().collect();
        if set.len() != raw.len() {
            return Err(ShapeError::invalid(format!(
                "{} duplicate point(s) in point list",
                raw.len() - set.len()
            )));
        }
        let shape = Self::from_set(set);
        if !shape.is_connected() {
            return Err(ShapeError::invalid("cells are not edge-connected"));
        }
        Ok(shape)
    }

    /// Parse `"<size>/<n1>.<n2>…"` (see `ShapeKey::parse`) and require the
    /// cells to be edge-connected.
    pub fn parse(s: &str) -> Result<Self, ShapeError> {
        ShapeKey::parse(s)?.to_shape()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn points(&self) -> &BTreeSet<Point> {
        &self.points
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }

    /// Lower-left corner of the bounding box `(min x, min y)`.
    pub fn corner(&self) -> Point {
        transform::corner(&self.points).unwrap_or_default()
    }

    /// Tight bounding box `(width, height)`.
    pub fn bounding_box(&self) -> (usize, usize) {
        let lo = self.corner();
        let (hx, hy) = self
            .points
            .iter()
            .fold((lo.x, lo.y), |(hx, hy), p| (hx.max(p.x), hy.max(p.y)));
        ((hx - lo.x + 1) as usize, (hy - lo.y + 1) as usize)
    }

    /// Canonical key of the corner-anchored cells (translation invariant,
    /// not symmetry reduced).
    pub fn key(&self) -> ShapeKey {
        ShapeKey::from_anchored(self.size, &transform::anchored(&self.points))
    }

    /// Unoccupied 4-neighbours of occupied cells.
    pub fn free_boundary_cells(&self) -> BTreeSet<Point> {
        self.points
            .iter()
            .flat_map(|p| p.neighbours())
            .filter(|n| !self.points.contains(n))
            .collect()
    }

    /// New shape with `p` added; `p` must be unoccupied (normally drawn from
    /// `free_boundary_cells`). The result is not re-anchored.
    pub fn grow(&self, p: Point) -> Shape {
        debug_assert!(!self.points.contains(&p), "grow onto occupied cell {p:?}");
        let mut points = self.points.clone();
        points.insert(p);
        Self::from_set(points)
    }

    /// Edge-connectivity via BFS from the first cell.
    pub fn is_connected(&self) -> bool {
        let Some(&start) = self.points.iter().next() else {
            return false;
        };
        let mut seen = BTreeSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(p) = queue.pop_front() {
            for n in p.neighbours() {
                if self.points.contains(&n) && seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        seen.len() == self.points.len()
    }

    /// Translated so that `min x == min y == 0`.
    pub fn normalized(&self) -> Shape {
        Self::from_set(transform::anchored(&self.points))
    }

    /// Rotated 90° counterclockwise and re-anchored.
    pub fn rotated_ccw(&self) -> Shape {
        Self::from_set(transform::anchored(
            &transform::Symmetry::Rot90.apply(&self.points),
        ))
    }

    /// Reflected across the diagonal `x = y` (not re-anchored).
    pub fn transposed(&self) -> Shape {
        Self::from_set(transform::transpose(&self.points))
    }
}

impl FromStr for Shape {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
