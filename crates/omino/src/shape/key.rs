//! `ShapeKey`: the `(size, sorted linear coordinates)` encoding.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::omino::Shape;
use super::types::{Point, ShapeError};
use crate::cfg::MAX_SIZE;

/// Orderable, hashable encoding of an anchored cell pattern.
///
/// Ordering is tuple order: `size` first, then `cells` lexicographically.
/// Each cell is `x + y*size` inside the implicit `size × size` box.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeKey {
    size: usize,
    cells: Vec<u32>,
}

impl ShapeKey {
    /// Linearize corner-anchored points. Callers guarantee `0 <= x, y < size`.
    pub(crate) fn from_anchored(size: usize, points: &BTreeSet<Point>) -> Self {
        let side = size as u32;
        let mut cells: Vec<u32> = points
            .iter()
            .map(|p| p.x as u32 + p.y as u32 * side)
            .collect();
        cells.sort_unstable();
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Parse `"<size>/<n1>.<n2>…"`.
    ///
    /// Whitespace and zero padding around numbers are accepted; coordinates
    /// may come in any order. Connectivity is checked by `to_shape`.
    pub fn parse(s: &str) -> Result<Self, ShapeError> {
        let (size_str, cells_str) = s
            .trim()
            .split_once('/')
            .ok_or_else(|| ShapeError::invalid(format!("missing '/' separator in {s:?}")))?;
        let size: usize = size_str
            .trim()
            .parse()
            .map_err(|_| ShapeError::invalid(format!("size {:?} is not a number", size_str.trim())))?;
        if size == 0 {
            return Err(ShapeError::EmptyShape);
        }
        if size > MAX_SIZE {
            return Err(ShapeError::invalid(format!(
                "size {size} exceeds the maximum of {MAX_SIZE}"
            )));
        }
        let limit = (size as u64) * (size as u64);
        let mut cells = Vec::with_capacity(size);
        for raw in cells_str.split('.') {
            let raw = raw.trim();
            let cell: u32 = raw
                .parse()
                .map_err(|_| ShapeError::invalid(format!("coordinate {raw:?} is not a number")))?;
            if u64::from(cell) >= limit {
                return Err(ShapeError::invalid(format!(
                    "coordinate {cell} is outside the {size}x{size} box"
                )));
            }
            cells.push(cell);
        }
        if cells.len() != size {
            return Err(ShapeError::invalid(format!(
                "expected {size} coordinates, found {}",
                cells.len()
            )));
        }
        cells.sort_unstable();
        if let Some(w) = cells.windows(2).find(|w| w[0] == w[1]) {
            return Err(ShapeError::invalid(format!("duplicate coordinate {}", w[0])));
        }
        Ok(Self { size, cells })
    }

    /// Fixed-width form: every coordinate is zero-padded to the width of the
    /// largest coordinate of the box, so string order agrees with key order
    /// for keys of the same size.
    pub fn to_padded_string(&self) -> String {
        let width = (self.size * self.size - 1).to_string().len();
        let cells: Vec<String> = self
            .cells
            .iter()
            .map(|c| format!("{c:0width$}"))
            .collect();
        format!("{}/{}", self.size, cells.join("."))
    }

    /// The points encoded by this key (anchored when produced by `Shape::key`).
    pub fn points(&self) -> BTreeSet<Point> {
        let side = self.size as u32;
        self.cells
            .iter()
            .map(|&c| Point::new((c % side) as i32, (c / side) as i32))
            .collect()
    }

    /// Rebuild the shape; fails if the cells are not edge-connected.
    pub fn to_shape(&self) -> Result<Shape, ShapeError> {
        let shape = Shape::from_set(self.points());
        if !shape.is_connected() {
            return Err(ShapeError::invalid(format!(
                "cells of {self} are not edge-connected"
            )));
        }
        Ok(shape)
    }
}

impl fmt::Display for ShapeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/", self.size)?;
        for (i, c) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for ShapeKey {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
