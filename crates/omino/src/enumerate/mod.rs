//! Generation-by-generation enumeration of free polyominoes.
//!
//! Purpose
//! - `next_generation` turns the canonical shapes of size N into the
//!   canonical shapes of size N+1: every free boundary cell of every shape is
//!   added, the candidate is canonicalized, and the result is inserted into a
//!   map keyed by `ShapeKey`.
//!
//! Why this is complete
//! - Every polyomino of size N+1 has a cell whose removal leaves a connected
//!   polyomino of size N, and that polyomino's class is in the input. Growing
//!   its representative at the matching cell reaches the larger shape (up to
//!   symmetry), so every class of size N+1 is produced at least once; the key
//!   map keeps exactly one.
//! - Adding a boundary cell to a connected shape keeps it connected, so no
//!   connectivity check is needed on candidates.
//!
//! Resources
//! - A growth step holds the input and the output generation; counts grow
//!   exponentially, the caller decides how far to go.
//! - `Generations` keeps its own copy of the generation it last yielded, so
//!   while the caller holds that item two copies of the largest generation
//!   are alive. Loops that must stay at one copy drive
//!   `Generation::successor` directly.

use std::collections::{btree_map, BTreeMap};

use crate::canonical::canonical_entry;
use crate::shape::{Shape, ShapeError, ShapeKey};

/// Number of free polyominoes of sizes 1..=12 (OEIS A000105).
pub const KNOWN_FREE_COUNTS: [u64; 12] = [1, 1, 2, 5, 12, 35, 108, 369, 1285, 4655, 17073, 63600];

/// Known free polyomino count for `size`, if tabulated.
pub fn known_count(size: usize) -> Option<u64> {
    size.checked_sub(1)
        .and_then(|i| KNOWN_FREE_COUNTS.get(i))
        .copied()
}

/// Canonical shapes of one size, one per free polyomino class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    size: usize,
    shapes: BTreeMap<ShapeKey, Shape>,
}

impl Generation {
    /// Size 1: the single cell.
    pub fn monomino() -> Self {
        let mut g = Self::empty(1);
        g.insert(Shape::monomino());
        g
    }

    /// A generation of the given size with no shapes.
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            shapes: BTreeMap::new(),
        }
    }

    /// Collect arbitrary shapes of one size, canonicalizing and deduplicating.
    /// Every shape must be edge-connected.
    pub fn from_shapes<I>(size: usize, shapes: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = Shape>,
    {
        let mut g = Self::empty(size);
        for s in shapes {
            if s.size() != size {
                return Err(ShapeError::invalid(format!(
                    "shape of size {} in a generation of size {size}",
                    s.size()
                )));
            }
            if !s.is_connected() {
                return Err(ShapeError::invalid(format!(
                    "shape {} is not edge-connected",
                    s.key()
                )));
            }
            g.insert(s);
        }
        Ok(g)
    }

    /// Canonicalize and insert; returns `false` if the class was present.
    fn insert(&mut self, shape: Shape) -> bool {
        let (key, _, canonical) = canonical_entry(&shape);
        match self.shapes.entry(key) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(canonical);
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Canonical shapes in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> + '_ {
        self.shapes.values()
    }

    /// Canonical keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &ShapeKey> + '_ {
        self.shapes.keys()
    }

    pub fn get(&self, key: &ShapeKey) -> Option<&Shape> {
        self.shapes.get(key)
    }

    /// Does the generation hold the class of `shape` (any orientation)?
    pub fn contains(&self, shape: &Shape) -> bool {
        self.shapes.contains_key(&canonical_entry(shape).0)
    }

    /// Shorthand for `next_generation(self)`.
    pub fn successor(&self) -> Generation {
        next_generation(self)
    }
}

impl IntoIterator for Generation {
    type Item = Shape;
    type IntoIter = btree_map::IntoValues<ShapeKey, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.into_values()
    }
}

/// Counters for one growth step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GrowthStats {
    /// Shapes in the input generation.
    pub parents: usize,
    /// Grown candidates examined (one per parent and free cell).
    pub candidates: usize,
    /// Distinct classes in the output.
    pub distinct: usize,
}

impl GrowthStats {
    /// Candidates that landed on an already present class.
    pub fn duplicates(&self) -> usize {
        self.candidates - self.distinct
    }
}

/// All free polyominoes of size `prev.size() + 1` reachable by one cell.
pub fn next_generation(prev: &Generation) -> Generation {
    next_generation_with_stats(prev).0
}

/// `next_generation` plus growth counters.
pub fn next_generation_with_stats(prev: &Generation) -> (Generation, GrowthStats) {
    let mut next = Generation::empty(prev.size + 1);
    let mut stats = GrowthStats {
        parents: prev.len(),
        ..GrowthStats::default()
    };
    for shape in prev.iter() {
        for cell in shape.free_boundary_cells() {
            stats.candidates += 1;
            next.insert(shape.grow(cell));
        }
    }
    stats.distinct = next.len();
    (next, stats)
}

/// Endless sequence of generations starting at size 1.
///
/// Each yielded generation is a clone of the one kept for the next step.
#[derive(Clone, Debug, Default)]
pub struct Generations {
    last: Option<Generation>,
}

/// Iterate generations 1, 2, 3, …; use `take(n)` to bound the run.
pub fn generations() -> Generations {
    Generations::default()
}

impl Iterator for Generations {
    type Item = Generation;

    fn next(&mut self) -> Option<Generation> {
        let next = match &self.last {
            None => Generation::monomino(),
            Some(prev) => next_generation(prev),
        };
        self.last = Some(next.clone());
        Some(next)
    }
}
