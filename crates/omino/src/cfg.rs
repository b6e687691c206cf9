//! Encoding limits (internal).
//!
//! Policy
//! - Linear coordinates `x + y*size` are stored as `u32`; `size` is capped so
//!   that every coordinate of a `size × size` box fits.

/// Largest cell count accepted by the textual encoding.
pub(crate) const MAX_SIZE: usize = u16::MAX as usize;
