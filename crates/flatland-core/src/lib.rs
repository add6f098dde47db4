// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! flatland-core: paired boxed/inline point stores for layout microbenchmarks.
//!
//! One logical entity — a plain `(x, y)` pair of `i32` — is held in two
//! representations with identical behavior: a contiguous value buffer
//! ([`InlineStore`]) and a one-heap-box-per-slot collection ([`BoxedStore`]).
//! Both implement the same [`PointStore`] contract, and a [`Workbench`]
//! refreshes both with identical uniform draws before each measured pass, so
//! any timing difference between variants under the sort and accumulate
//! workloads is attributable to memory layout and indirection, not logic.
//!
//! The crate measures; it does not decide or serve. Running and reporting
//! belong to the Criterion harness in `flatland-benches`.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions,
    clippy::trivially_copy_pass_by_ref
)]

mod point;
mod sink;
mod store;
mod workbench;

// Re-exports for stable public API
pub use point::Point;
pub use sink::consume;
pub use store::{BoxedStore, InlineStore, PointStore};
pub use workbench::{Workbench, BENCH_POINT_COUNT};
