//! Random polyominoes by random growth (replay tokens).
//!
//! Model
//! - Start from the monomino and repeatedly add a free boundary cell chosen
//!   uniformly. The distribution over classes is not uniform; the sampler is
//!   meant for tests, benches and spot checks, not for statistics.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so draw `index` of a stream can be regenerated on its own.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::shape::{Shape, ShapeError};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Grow a random polyomino with `size` cells; corner-anchored, not canonical.
pub fn random_polyomino(size: usize, tok: ReplayToken) -> Result<Shape, ShapeError> {
    if size == 0 {
        return Err(ShapeError::EmptyShape);
    }
    let mut rng = tok.to_std_rng();
    let mut shape = Shape::monomino();
    while shape.size() < size {
        let free: Vec<_> = shape.free_boundary_cells().into_iter().collect();
        let cell = free[rng.gen_range(0..free.len())];
        shape = shape.grow(cell);
    }
    Ok(shape.normalized())
}

/// `count` consecutive draws `index = 0..count` for one seed.
pub fn random_polyominoes(size: usize, seed: u64, count: u64) -> Result<Vec<Shape>, ShapeError> {
    (0..count)
        .map(|index| random_polyomino(size, ReplayToken { seed, index }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Point;

    #[test]
    fn zero_cells_is_an_error() {
        let tok = ReplayToken { seed: 1, index: 0 };
        assert_eq!(random_polyomino(0, tok), Err(ShapeError::EmptyShape));
    }

    #[test]
    fn draws_are_connected_anchored_and_sized() {
        for shape in random_polyominoes(15, 42, 20).unwrap() {
            assert_eq!(shape.size(), 15);
            assert!(shape.is_connected());
            assert_eq!(shape.corner(), Point::new(0, 0));
        }
    }

    #[test]
    fn replay_token_is_deterministic() {
        let tok = ReplayToken { seed: 7, index: 3 };
        assert_eq!(random_polyomino(12, tok), random_polyomino(12, tok));
        let stream = random_polyominoes(12, 7, 4).unwrap();
        assert_eq!(stream[3], random_polyomino(12, tok).unwrap());
    }

    #[test]
    fn different_indices_usually_differ() {
        let stream = random_polyominoes(20, 99, 8).unwrap();
        let distinct: std::collections::BTreeSet<_> = stream.iter().map(|s| s.key()).collect();
        assert!(distinct.len() > 1);
    }
}
