//! Free polyomino enumeration by growth and canonicalization.
//!
//! A polyomino is held as a set of integer grid cells (`Shape`). Generation
//! N+1 is built from generation N by adding every free boundary cell to every
//! shape, mapping each candidate to the minimal key among its 8 dihedral
//! images, and collecting the results in a map keyed by that canonical key.
//!
//! Modules
//! - `shape`: the `Shape` value type, textual encoding, rendering, errors.
//! - `transform`: normalize / rotate / transpose on point sets, `Symmetry`.
//! - `canonical`: dihedral images and the canonical representative.
//! - `enumerate`: `Generation` sets and the generation step.
//! - `rand`: reproducible random polyominoes (random growth).

pub mod canonical;
mod cfg;
pub mod enumerate;
pub mod rand;
pub mod shape;
pub mod transform;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use canonical::{canonicalize, canonicalize_with_symmetry, images, is_canonical};
pub use enumerate::{generations, next_generation, Generation, GrowthStats, KNOWN_FREE_COUNTS};
pub use shape::{Frame, Point, RenderCfg, Shape, ShapeError, ShapeKey};
pub use transform::Symmetry;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::canonical::{canonicalize, canonicalize_with_symmetry, images};
    pub use crate::enumerate::{
        generations, known_count, next_generation, next_generation_with_stats, Generation,
        GrowthStats, KNOWN_FREE_COUNTS,
    };
    pub use crate::rand::{random_polyomino, random_polyominoes, ReplayToken};
    pub use crate::shape::{Frame, Point, RenderCfg, Shape, ShapeError, ShapeKey};
    pub use crate::transform::{normalize, rotate_ccw, transpose, Symmetry};
}
