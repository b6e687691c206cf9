//! Pure geometric transforms on cell sets and the dihedral group of the square.
//!
//! Every function returns a new set; nothing is mutated in place.
//!
//! - `normalize`: translate so that `min x == min y == 0`.
//! - `rotate_ccw`: `(x, y) ↦ (-y, x)` then normalize.
//! - `transpose`: `(x, y) ↦ (y, x)`, no normalization.
//!
//! `Symmetry` names the 8 elements `R^k` and `R^k ∘ T` (R = quarter turn
//! counterclockwise, T = transpose) as integer 2×2 matrices.

use nalgebra::{Matrix2, Vector2};
use std::collections::BTreeSet;

use crate::shape::{Point, ShapeError};

/// `(min x, min y)` over the set, `None` when empty.
pub fn corner(points: &BTreeSet<Point>) -> Option<Point> {
    let mut it = points.iter();
    let first = *it.next()?;
    Some(it.fold(first, |lo, p| Point::new(lo.x.min(p.x), lo.y.min(p.y))))
}

/// Translate to the corner; the empty set maps to itself.
pub(crate) fn anchored(points: &BTreeSet<Point>) -> BTreeSet<Point> {
    match corner(points) {
        Some(lo) => points
            .iter()
            .map(|p| Point::new(p.x - lo.x, p.y - lo.y))
            .collect(),
        None => BTreeSet::new(),
    }
}

/// Subtract `min x` / `min y` from every point.
pub fn normalize(points: &BTreeSet<Point>) -> Result<BTreeSet<Point>, ShapeError> {
    if points.is_empty() {
        return Err(ShapeError::EmptyShape);
    }
    Ok(anchored(points))
}

/// Quarter turn counterclockwise about the origin, then normalize.
pub fn rotate_ccw(points: &BTreeSet<Point>) -> Result<BTreeSet<Point>, ShapeError> {
    normalize(&Symmetry::Rot90.apply(points))
}

/// Reflection across the diagonal.
pub fn transpose(points: &BTreeSet<Point>) -> BTreeSet<Point> {
    Symmetry::Transpose.apply(points)
}

/// Element of the dihedral group of order 8 acting on the grid.
///
/// `TransposeRotK` means: transpose first, then rotate `K` degrees
/// counterclockwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symmetry {
    Identity,
    Rot90,
    Rot180,
    Rot270,
    Transpose,
    TransposeRot90,
    TransposeRot180,
    TransposeRot270,
}

impl Symmetry {
    /// Group elements in image order: rotations, then reflections.
    pub const ALL: [Symmetry; 8] = [
        Symmetry::Identity,
        Symmetry::Rot90,
        Symmetry::Rot180,
        Symmetry::Rot270,
        Symmetry::Transpose,
        Symmetry::TransposeRot90,
        Symmetry::TransposeRot180,
        Symmetry::TransposeRot270,
    ];

    /// Number of counterclockwise quarter turns.
    pub fn quarter_turns(self) -> u8 {
        match self {
            Symmetry::Identity | Symmetry::Transpose => 0,
            Symmetry::Rot90 | Symmetry::TransposeRot90 => 1,
            Symmetry::Rot180 | Symmetry::TransposeRot180 => 2,
            Symmetry::Rot270 | Symmetry::TransposeRot270 => 3,
        }
    }

    /// Orientation-reversing element?
    pub fn is_reflection(self) -> bool {
        matches!(
            self,
            Symmetry::Transpose
                | Symmetry::TransposeRot90
                | Symmetry::TransposeRot180
                | Symmetry::TransposeRot270
        )
    }

    /// Inverse element. Reflections are involutions.
    pub fn inverse(self) -> Symmetry {
        match self {
            Symmetry::Rot90 => Symmetry::Rot270,
            Symmetry::Rot270 => Symmetry::Rot90,
            other => other,
        }
    }

    /// Integer matrix `R^k` or `R^k T`.
    pub fn matrix(self) -> Matrix2<i32> {
        let quarter = Matrix2::new(0, -1, 1, 0);
        let mut m = if self.is_reflection() {
            Matrix2::new(0, 1, 1, 0)
        } else {
            Matrix2::identity()
        };
        for _ in 0..self.quarter_turns() {
            m = quarter * m;
        }
        m
    }

    /// Map every point through the matrix (no normalization).
    pub fn apply(self, points: &BTreeSet<Point>) -> BTreeSet<Point> {
        let m = self.matrix();
        points
            .iter()
            .map(|&p| Point::from(m * Vector2::from(p)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(pts: &[(i32, i32)]) -> BTreeSet<Point> {
        pts.iter().map(|&p| Point::from(p)).collect()
    }

    #[test]
    fn normalize_anchors_corner() {
        let pts = set(&[(3, -2), (4, -2), (4, -1)]);
        let n = normalize(&pts).unwrap();
        assert_eq!(n, set(&[(0, 0), (1, 0), (1, 1)]));
        assert_eq!(corner(&n), Some(Point::new(0, 0)));
    }

    #[test]
    fn normalize_empty_is_an_error() {
        assert_eq!(normalize(&BTreeSet::new()), Err(ShapeError::EmptyShape));
        assert_eq!(rotate_ccw(&BTreeSet::new()), Err(ShapeError::EmptyShape));
    }

    #[test]
    fn rotate_ccw_maps_and_reanchors() {
        // L-tromino: (0,0),(1,0),(0,1) -> (0,0),(0,1),(-1,0) -> +1 on x
        let l = set(&[(0, 0), (1, 0), (0, 1)]);
        assert_eq!(rotate_ccw(&l).unwrap(), set(&[(1, 0), (1, 1), (0, 0)]));
    }

    #[test]
    fn four_rotations_are_identity() {
        let s = set(&[(0, 0), (1, 0), (2, 0), (2, 1)]);
        let mut r = s.clone();
        for _ in 0..4 {
            r = rotate_ccw(&r).unwrap();
        }
        assert_eq!(r, s);
    }

    #[test]
    fn transpose_swaps_coordinates_without_anchoring() {
        let s = set(&[(-1, 2), (0, 2)]);
        assert_eq!(transpose(&s), set(&[(2, -1), (2, 0)]));
    }

    #[test]
    fn matrices_match_composition_order() {
        let r = Symmetry::Rot90.matrix();
        let t = Symmetry::Transpose.matrix();
        assert_eq!(Symmetry::Identity.matrix(), Matrix2::identity());
        assert_eq!(Symmetry::Rot180.matrix(), r * r);
        assert_eq!(Symmetry::TransposeRot90.matrix(), r * t);
        assert_eq!(Symmetry::TransposeRot270.matrix(), r * r * r * t);
        for s in Symmetry::ALL {
            assert_eq!(s.matrix() * s.inverse().matrix(), Matrix2::identity());
            let det = s.matrix().map(|v| v as f64).determinant();
            assert_eq!(det < 0.0, s.is_reflection());
        }
    }

    #[test]
    fn all_elements_are_distinct() {
        let mats: BTreeSet<[i32; 4]> = Symmetry::ALL
            .iter()
            .map(|s| {
                let m = s.matrix();
                [m[(0, 0)], m[(0, 1)], m[(1, 0)], m[(1, 1)]]
            })
            .collect();
        assert_eq!(mats.len(), 8);
    }
}
