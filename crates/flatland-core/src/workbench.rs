// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Paired stores with per-iteration regeneration.

use crate::point::Point;
use crate::store::{BoxedStore, InlineStore, PointStore};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Element count used by the shipped sort/accumulate benchmarks.
///
/// Large enough that the working set (8 MB of inline points; the boxed
/// variant adds a pointer array plus one million 8-byte heap chunks) spills
/// every data cache on current hardware, which is where layout differences
/// show up.
pub const BENCH_POINT_COUNT: usize = 1_000_000;

/// Owns one store per layout variant and refreshes both with identical
/// contents before each measured pass.
///
/// Construction allocates both stores once; regeneration overwrites values
/// in place. Allocator and cache state therefore carries across iterations
/// (deliberately — that is part of what a layout benchmark observes), while
/// logical contents never do.
///
/// Invariants
/// - Both stores always have the same length.
/// - After any `regenerate*` call, `boxed.get(i) == inline.get(i)` for every
///   slot `i`, with draws uniform over the full `i32` range.
/// - Not shared across threads; each benchmark instance owns its workbench
///   exclusively (`&mut self` on every mutator enforces this at compile time).
#[derive(Debug)]
pub struct Workbench {
    boxed: BoxedStore,
    inline: InlineStore,
}

impl Workbench {
    /// Allocates both stores with `len` slots each, all at the origin.
    pub fn new(len: usize) -> Self {
        Self {
            boxed: BoxedStore::new(len),
            inline: InlineStore::new(len),
        }
    }

    /// Number of slots in each store.
    pub fn len(&self) -> usize {
        self.inline.len()
    }

    /// True when the stores have no slots.
    pub fn is_empty(&self) -> bool {
        self.inline.is_empty()
    }

    /// Refreshes both stores with fresh uniform draws from an entropy-seeded
    /// generator. Call once before each measured pass; exact values are not
    /// reproducible across runs, and do not need to be.
    pub fn regenerate(&mut self) {
        let mut rng = SmallRng::from_entropy();
        self.fill(&mut rng);
    }

    /// Refreshes both stores from a fixed seed. Same seed, same contents —
    /// within one build; the generator's stream is not a cross-release
    /// contract. Intended for tests.
    pub fn regenerate_seeded(&mut self, seed: u64) {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.fill(&mut rng);
    }

    /// Writes one fresh `(x, y)` pair per slot into both stores, boxed slot
    /// and inline slot receiving the identical value.
    fn fill(&mut self, rng: &mut SmallRng) {
        debug_assert_eq!(self.boxed.len(), self.inline.len());
        for idx in 0..self.inline.len() {
            let value = Point::new(rng.gen(), rng.gen());
            self.boxed.set(idx, value);
            self.inline.set(idx, value);
        }
    }

    /// Borrows the boxed (one-allocation-per-slot) store.
    pub fn boxed(&self) -> &BoxedStore {
        &self.boxed
    }

    /// Mutably borrows the boxed store, e.g. to sort it in place.
    pub fn boxed_mut(&mut self) -> &mut BoxedStore {
        &mut self.boxed
    }

    /// Borrows the inline (contiguous value buffer) store.
    pub fn inline(&self) -> &InlineStore {
        &self.inline
    }

    /// Mutably borrows the inline store, e.g. to sort it in place.
    pub fn inline_mut(&mut self) -> &mut InlineStore {
        &mut self.inline
    }
}
