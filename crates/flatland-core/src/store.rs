// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Layout variants: one contiguous value buffer vs one heap box per slot.
//!
//! Parity contract (applies to both implementations):
//! - Comparison routes through [`Point::cmp_xy`]; addition routes through
//!   [`Point::wrapping_add`]. Neither variant carries private arithmetic.
//! - `sort` and `accumulate` have identical observable results for identical
//!   contents; only their timing may differ.
//! - `set` overwrites the slot's *value* and never replaces the slot's
//!   allocation, so allocator state set up at construction survives
//!   regeneration.

use crate::point::Point;

/// Behavioral contract shared by both layout variants of a point collection.
///
/// The two implementations exist so benchmarks can attribute a timing delta
/// to layout alone. Anything observable through this trait — lengths, values,
/// sort results, accumulation results — must agree between variants holding
/// the same contents.
pub trait PointStore {
    /// Number of slots.
    fn len(&self) -> usize;

    /// True when the store has no slots.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies out the value at `idx`.
    ///
    /// Panics if `idx` is out of bounds; an index is a caller bug, not a
    /// recoverable condition.
    fn get(&self, idx: usize) -> Point;

    /// Overwrites the value at `idx` in place, reusing the slot's allocation.
    ///
    /// Panics if `idx` is out of bounds.
    fn set(&mut self, idx: usize, value: Point);

    /// Sorts the collection in place by `x` ascending, ties by `y` ascending.
    ///
    /// Comparison-based and unstable — the order is total, so stability is
    /// unobservable in the result.
    fn sort(&mut self);

    /// Folds all values left to right into a single wrapping sum, starting
    /// from [`Point::ORIGIN`]. Total: overflow wraps, an empty store yields
    /// the origin.
    fn accumulate(&self) -> Point;
}

/// Inline variant: `Point` values stored directly in one contiguous buffer.
///
/// Value semantics throughout — elements are copied on read and write, have
/// no identity, cannot alias, and cost no per-element allocation. A sorted
/// store is sorted in memory, not merely in slot order.
#[derive(Debug, Clone)]
pub struct InlineStore {
    points: Vec<Point>,
}

impl InlineStore {
    /// Allocates `len` slots, all at the origin.
    pub fn new(len: usize) -> Self {
        Self {
            points: vec![Point::ORIGIN; len],
        }
    }

    /// Borrows the backing slice. Mainly for assertions in tests; benchmarks
    /// go through [`PointStore`] like the boxed variant does.
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }
}

impl PointStore for InlineStore {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn get(&self, idx: usize) -> Point {
        self.points[idx]
    }

    fn set(&mut self, idx: usize, value: Point) {
        self.points[idx] = value;
    }

    fn sort(&mut self) {
        self.points.sort_unstable_by(Point::cmp_xy);
    }

    fn accumulate(&self) -> Point {
        self.points
            .iter()
            .fold(Point::ORIGIN, |acc, p| acc.wrapping_add(*p))
    }
}

/// Boxed variant: each slot owns exactly one heap-allocated `Point`, and
/// every read or write goes through that indirection.
///
/// Sorting permutes the boxes (the pointers), not the pointed-to values, so
/// after the first sort the pointer order no longer tracks heap layout;
/// later passes chase whatever order earlier passes left behind. That is the
/// cost this variant exists to expose.
#[derive(Debug, Clone)]
pub struct BoxedStore {
    points: Vec<Box<Point>>,
}

impl BoxedStore {
    /// Allocates `len` slots with one boxed origin point each.
    ///
    /// Slot allocations are made exactly once, here; [`PointStore::set`]
    /// writes through them for the rest of the store's life.
    pub fn new(len: usize) -> Self {
        Self {
            points: (0..len).map(|_| Box::new(Point::ORIGIN)).collect(),
        }
    }
}

impl PointStore for BoxedStore {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn get(&self, idx: usize) -> Point {
        *self.points[idx]
    }

    fn set(&mut self, idx: usize, value: Point) {
        *self.points[idx] = value;
    }

    fn sort(&mut self) {
        self.points.sort_unstable_by(|a, b| a.cmp_xy(b));
    }

    fn accumulate(&self) -> Point {
        self.points
            .iter()
            .fold(Point::ORIGIN, |acc, p| acc.wrapping_add(**p))
    }
}
