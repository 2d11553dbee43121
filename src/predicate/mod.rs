//! Leaf checks
//!
//! Each submodule holds the checks of one family. A check is a plain factory
//! returning an [`AssertionStep`](crate::step::AssertionStep): a precondition,
//! an evaluation predicate, a message key and the captured operands. The
//! same module adds the matching builder method to the
//! [`Assertor`](crate::Assertor) kind it applies to, so
//! `number::is_gt(10)` and `that(5).is_gt(10)` build the same step.
//!
//! The engine knows nothing about these modules; a new family only needs its
//! factories and its templates.
//!
//! # Example
//!
//! ```rust
//! use assertor::predicate::{number, string};
//! use assertor::that;
//!
//! // the builder methods
//! assert!(that("abc").has_length(3).and_that(4).is_between(1, 5).is_ok());
//!
//! // the same checks through `verify`
//! let ok = that("abc")
//!     .verify(string::has_length(3))
//!     .and_that(4)
//!     .verify(number::is_between(1, 5))
//!     .is_ok();
//! assert!(ok);
//! ```

use rayon::prelude::*;

use crate::step::AnalysisMode;

pub mod boolean;
pub mod class;
pub mod collection;
pub mod date;
pub mod enumeration;
pub mod map;
pub mod number;
pub mod object;
pub mod string;
pub mod throwable;

/// Smallest slice a rayon job handles in [`AnalysisMode::Parallel`].
const CHUNK: usize = 1024;

/// Templates of every built-in check.
pub(crate) fn templates() -> impl Iterator<Item = &'static (&'static str, &'static str)> {
    object::TEMPLATES
        .iter()
        .chain(boolean::TEMPLATES)
        .chain(number::TEMPLATES)
        .chain(string::TEMPLATES)
        .chain(collection::TEMPLATES)
        .chain(map::TEMPLATES)
        .chain(date::TEMPLATES)
        .chain(enumeration::TEMPLATES)
        .chain(class::TEMPLATES)
        .chain(throwable::TEMPLATES)
}

/// Whether any item satisfies `pred`.
///
/// In [`AnalysisMode::Parallel`] the scan runs on the rayon global pool and
/// stops once any worker finds a match. A panic in `pred` reaches the caller.
pub(crate) fn scan_any<T: Sync>(
    items: &[T],
    mode: AnalysisMode,
    pred: impl Fn(&T) -> bool + Send + Sync,
) -> bool {
    match mode {
        AnalysisMode::Parallel if items.len() > CHUNK => {
            items.par_iter().with_min_len(CHUNK).any(pred)
        }
        _ => items.iter().any(pred),
    }
}

/// Whether every item satisfies `pred`.
pub(crate) fn scan_all<T: Sync>(
    items: &[T],
    mode: AnalysisMode,
    pred: impl Fn(&T) -> bool + Send + Sync,
) -> bool {
    !scan_any(items, mode, |item| !pred(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_parallel_scan_matches_sequential() {
        let items: Vec<u32> = (0..10_000).collect();
        for mode in [AnalysisMode::Standard, AnalysisMode::Parallel] {
            assert!(scan_any(&items, mode, |n| *n == 9_999));
            assert!(!scan_any(&items, mode, |n| *n == 10_000));
            assert!(scan_all(&items, mode, |n| *n < 10_000));
            assert!(!scan_all(&items, mode, |n| *n != 5_000));
        }
    }

    #[test]
    fn test_parallel_scan_propagates_panic() {
        let items: Vec<u32> = (0..4 * CHUNK as u32).collect();
        let outcome = std::panic::catch_unwind(|| {
            scan_any(&items, AnalysisMode::Parallel, |n| {
                assert!(*n != 3_000, "boom");
                false
            })
        });
        assert!(outcome.is_err());
    }

    #[test]
    fn test_parallel_scan_over_many_chunks() {
        // far more chunks than worker threads
        let items: Vec<u32> = (0..1_000_000).collect();
        assert!(scan_any(&items, AnalysisMode::Parallel, |n| *n == 999_999));
        assert!(scan_all(&items, AnalysisMode::Parallel, |n| *n < 1_000_000));
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<u32> = Vec::new();
        assert!(!scan_any(&items, AnalysisMode::Parallel, |_| true));
        assert!(scan_all(&items, AnalysisMode::Parallel, |_| false));
    }

    #[test]
    fn test_template_keys_are_unique() {
        let mut seen = HashSet::new();
        for (key, _) in templates() {
            assert!(seen.insert(*key), "duplicate template key {key}");
        }
    }
}
