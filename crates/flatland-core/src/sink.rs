// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Opaque consumption hook for benchmark results.

/// Observes `value` in a way the optimizer must treat as a real use, then
/// hands it back.
///
/// Every timed operation's result must flow through this (or an equivalent
/// opaque sink such as Criterion's `black_box`); otherwise the compiler is
/// entitled to notice the result is dead and delete the workload being
/// timed. Wraps [`std::hint::black_box`], which carries exactly that
/// anti-elision guarantee without pessimizing the value's computation.
///
/// # Examples
/// ```
/// use flatland_core::{consume, Point};
/// let sum = consume(Point::new(4, 6));
/// assert_eq!(sum, Point::new(4, 6));
/// ```
#[inline]
pub fn consume<T>(value: T) -> T {
    std::hint::black_box(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    #[test]
    fn consume_is_identity_on_values() {
        assert_eq!(consume(41_i32), 41);
        assert_eq!(consume(Point::new(-3, 9)), Point::new(-3, 9));
    }
}
