//! Canonical representative of a shape's symmetry class.
//!
//! Purpose
//! - Map every shape to the image with the minimal `ShapeKey` among its 8
//!   images under rotation and reflection. Two shapes are the same free
//!   polyomino iff their canonical forms are equal, so a plain map keyed by
//!   `ShapeKey` deduplicates a generation.
//!
//! Model
//! - Images are built from the normalized shape as
//!   `id, r, r², r³, t, r∘t, r²∘t, r³∘t` (`r` = rotate_ccw, `t` = transpose),
//!   each corner-anchored. Self-symmetric shapes yield repeated images; taking
//!   the minimum is unaffected.
//! - Ties keep the earliest element of `Symmetry::ALL`, so the reported
//!   symmetry is deterministic.
//!
//! Code cross-refs: `transform::{rotate_ccw,transpose,Symmetry}`, `ShapeKey`.

use crate::shape::{Shape, ShapeKey};
use crate::transform::Symmetry;

/// The 8 corner-anchored images, in `Symmetry::ALL` order.
pub fn images(shape: &Shape) -> [Shape; 8] {
    let id = shape.normalized();
    let r1 = id.rotated_ccw();
    let r2 = r1.rotated_ccw();
    let r3 = r2.rotated_ccw();
    let t = id.transposed().normalized();
    let t1 = t.rotated_ccw();
    let t2 = t1.rotated_ccw();
    let t3 = t2.rotated_ccw();
    [id, r1, r2, r3, t, t1, t2, t3]
}

/// Minimal image together with its key and the symmetry producing it.
pub(crate) fn canonical_entry(shape: &Shape) -> (ShapeKey, Symmetry, Shape) {
    let mut best: Option<(ShapeKey, Symmetry, Shape)> = None;
    for (sym, img) in Symmetry::ALL.into_iter().zip(images(shape)) {
        let key = img.key();
        if best.as_ref().map_or(true, |(k, _, _)| key < *k) {
            best = Some((key, sym, img));
        }
    }
    best.unwrap_or_else(|| (shape.key(), Symmetry::Identity, shape.normalized()))
}

/// Canonical representative of the free polyomino `shape` belongs to.
pub fn canonicalize(shape: &Shape) -> Shape {
    canonical_entry(shape).2
}

/// Canonical representative plus the symmetry `g` with
/// `canonical == normalize(g(shape))`.
pub fn canonicalize_with_symmetry(shape: &Shape) -> (Shape, Symmetry) {
    let (_, sym, img) = canonical_entry(shape);
    (img, sym)
}

/// Is `shape` already its own canonical representative (as a point set)?
pub fn is_canonical(shape: &Shape) -> bool {
    canonicalize(shape) == *shape
}
