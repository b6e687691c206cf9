//! Grid points and the construction error type.

use nalgebra::Vector2;
use std::fmt;

/// Integer grid cell `(x, y)`; y grows upwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The 4-neighbourhood (left, right, down, up).
    #[inline]
    pub fn neighbours(self) -> [Point; 4] {
        [
            Point::new(self.x - 1, self.y),
            Point::new(self.x + 1, self.y),
            Point::new(self.x, self.y - 1),
            Point::new(self.x, self.y + 1),
        ]
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for Vector2<i32> {
    #[inline]
    fn from(p: Point) -> Self {
        Vector2::new(p.x, p.y)
    }
}

impl From<Vector2<i32>> for Point {
    #[inline]
    fn from(v: Vector2<i32>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Errors raised while building a `Shape` from external input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// Malformed encoding or point list (count mismatch, bad or duplicate
    /// coordinate, disconnected cells, ...).
    InvalidEncoding { reason: String },
    /// Zero cells where at least one is required.
    EmptyShape,
}

impl ShapeError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidEncoding {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEncoding { reason } => write!(f, "invalid shape encoding: {reason}"),
            Self::EmptyShape => write!(f, "shape has no cells"),
        }
    }
}

impl std::error::Error for ShapeError {}
