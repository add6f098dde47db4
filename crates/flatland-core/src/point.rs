// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The point value type shared by both layout variants.
//!
//! Every store in this crate holds logical `(x, y)` pairs; the stores differ
//! only in where those pairs live (inline in one buffer vs one heap box per
//! slot). Arithmetic and ordering are defined here, once, so the variants
//! cannot drift apart: a timing delta between two stores with identical
//! contents must be attributable to layout, not logic.

use bytemuck::{Pod, Zeroable};
use std::cmp::Ordering;

/// Plain 2D point of two signed 32-bit integers.
///
/// # Layout Guarantees
///
/// `#[repr(C)]` with two `i32` fields: 8 bytes, 4-byte aligned, no padding.
/// The `Pod`/`Zeroable` derives machine-check that claim — the inline store's
/// entire premise is that elements are flat copyable bytes.
///
/// Invariants
/// - Field order is `x` then `y`; the sort order keys on them in that order.
/// - All arithmetic wraps per two's complement; there is no overflow error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Point {
    /// Primary sort key.
    pub x: i32,
    /// Secondary sort key (tie-breaker).
    pub y: i32,
}

const _: () = assert!(std::mem::size_of::<Point>() == 8);
const _: () = assert!(std::mem::align_of::<Point>() == 4);

impl Point {
    /// Additive identity, and the fold seed for accumulation.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Creates a point from raw coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Field-wise addition, wrapping per two's complement on overflow.
    ///
    /// Accumulating a full store of uniform draws is expected to overflow
    /// many times; saturating or checked math would change what the
    /// accumulate workload measures.
    #[must_use]
    pub const fn wrapping_add(self, other: Self) -> Self {
        Self::new(self.x.wrapping_add(other.x), self.y.wrapping_add(other.y))
    }

    /// The one comparator used by every sort in the crate: `x` ascending,
    /// ties broken by `y` ascending.
    ///
    /// Total over all inputs. Kept as a named function (rather than derived
    /// `Ord`) so both layout variants visibly share the same comparison path.
    #[must_use]
    pub fn cmp_xy(&self, other: &Self) -> Ordering {
        self.x.cmp(&other.x).then_with(|| self.y.cmp(&other.y))
    }
}

/// Converts an `[i32; 2]` array into a `Point` interpreted as `(x, y)`.
///
/// # Examples
/// ```
/// use flatland_core::Point;
/// let p = Point::from([3, -7]);
/// assert_eq!((p.x, p.y), (3, -7));
/// ```
impl From<[i32; 2]> for Point {
    fn from(value: [i32; 2]) -> Self {
        let [x, y] = value;
        Self::new(x, y)
    }
}
