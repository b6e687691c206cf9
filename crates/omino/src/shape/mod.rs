//! Polyomino value type (point set + cell count).
//!
//! Purpose
//! - `Shape` holds the occupied cells of one polyomino and its cell count
//!   `size`. It is immutable: growth and every transform return a new value.
//! - `ShapeKey` is the explicit orderable/hashable key `(size, sorted x + y*size)`
//!   used for deduplication; `Shape` equality itself is plain point-set
//!   equality, so raw (un-canonical) shapes only compare equal when identical.
//!
//! Conventions
//! - `size` is the cell count and the side of the implicit `size × size` box
//!   used for linear coordinates. It is not the tight bounding box.
//! - Keys are taken on the corner-anchored point set, so shapes that differ
//!   by a translation share a key.
//! - Textual form: `"<size>/<n1>.<n2>…"`, e.g. `"2/0.1"` for the domino.
//!
//! Code cross-refs: `transform::{normalize,rotate_ccw,transpose}`,
//! `canonical::canonicalize`.

mod key;
mod omino;
mod render;
mod types;

pub use key::ShapeKey;
pub use omino::Shape;
pub use render::{Frame, RenderCfg};
pub use types::{Point, ShapeError};
