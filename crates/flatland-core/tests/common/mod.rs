// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]

use flatland_core::{BoxedStore, InlineStore, Point, PointStore};
use rustc_hash::FxHashMap;

/// Copies every slot out of a store into a plain vector, in slot order.
pub fn snapshot<S: PointStore>(store: &S) -> Vec<Point> {
    (0..store.len()).map(|idx| store.get(idx)).collect()
}

/// Writes `values` into consecutive slots of a store of matching length.
pub fn fill<S: PointStore>(store: &mut S, values: &[Point]) {
    assert_eq!(store.len(), values.len(), "fill expects a matching length");
    for (idx, &value) in values.iter().enumerate() {
        store.set(idx, value);
    }
}

/// Builds one store per layout variant, both holding `values`.
pub fn paired_stores(values: &[Point]) -> (BoxedStore, InlineStore) {
    let mut boxed = BoxedStore::new(values.len());
    let mut inline = InlineStore::new(values.len());
    fill(&mut boxed, values);
    fill(&mut inline, values);
    (boxed, inline)
}

/// Multiset of points with occurrence counts, for permutation checks.
pub fn multiset(points: &[Point]) -> FxHashMap<Point, usize> {
    let mut counts = FxHashMap::default();
    for &p in points {
        *counts.entry(p).or_insert(0) += 1;
    }
    counts
}

/// Asserts `points` is ordered by `x` ascending with ties by `y` ascending:
/// every adjacent pair `(a, b)` satisfies `a.x < b.x`, or
/// `a.x == b.x && a.y <= b.y`.
pub fn assert_sorted_xy(points: &[Point]) {
    for (pos, pair) in points.windows(2).enumerate() {
        let (a, b) = (pair[0], pair[1]);
        assert!(
            a.x < b.x || (a.x == b.x && a.y <= b.y),
            "adjacent pair out of order at {pos}: ({}, {}) then ({}, {})",
            a.x,
            a.y,
            b.x,
            b.y
        );
    }
}
