//! Collection checks
//!
//! Apply to arrays, slices, vectors, deques and sets. A null collection is
//! empty; every other check requires a non-null subject.
//!
//! The containment and matching checks scan with the chain's
//! [`AnalysisMode`]: in `Parallel` mode large inputs are split into chunks
//! scanned on scoped threads. The results are the same in both modes.

use crate::fluent::Assertor;
use crate::kind;
use crate::step::{AnalysisMode, AssertionStep};
use crate::value::Value;

use super::{scan_all, scan_any};

pub(crate) const TEMPLATES: &[(&str, &str)] = &[
    ("assertor.constraint.iterable.empty", "the iterable '%1$s*' should be empty"),
    ("assertor.constraint.iterable.empty.not", "the iterable should not be empty"),
    ("assertor.constraint.iterable.not_empty", "the iterable should not be empty"),
    (
        "assertor.constraint.iterable.not_empty.not",
        "the iterable '%1$s*' should be empty",
    ),
    (
        "assertor.constraint.iterable.size",
        "the iterable '%1$s*' should have a size of '%2$s*'",
    ),
    (
        "assertor.constraint.iterable.size.not",
        "the iterable '%1$s*' should not have a size of '%2$s*'",
    ),
    (
        "assertor.constraint.iterable.contains",
        "the iterable '%1$s*' should contain '%2$s*'",
    ),
    (
        "assertor.constraint.iterable.contains.not",
        "the iterable '%1$s*' should not contain '%2$s*'",
    ),
    (
        "assertor.constraint.iterable.contains_all",
        "the iterable '%1$s*' should contain all the values of '%2$s*'",
    ),
    (
        "assertor.constraint.iterable.contains_all.not",
        "the iterable '%1$s*' should not contain all the values of '%2$s*'",
    ),
    (
        "assertor.constraint.iterable.contains_any",
        "the iterable '%1$s*' should contain any of the values of '%2$s*'",
    ),
    (
        "assertor.constraint.iterable.contains_any.not",
        "the iterable '%1$s*' should not contain any of the values of '%2$s*'",
    ),
    (
        "assertor.constraint.iterable.any_match",
        "any element of the iterable '%1$s*' should match the predicate",
    ),
    (
        "assertor.constraint.iterable.any_match.not",
        "no element of the iterable '%1$s*' should match the predicate",
    ),
    (
        "assertor.constraint.iterable.all_match",
        "all the elements of the iterable '%1$s*' should match the predicate",
    ),
    (
        "assertor.constraint.iterable.all_match.not",
        "not all the elements of the iterable '%1$s*' should match the predicate",
    ),
    ("assertor.constraint.iterable.prerequisite", "the iterable cannot be null"),
];

fn values<I, T>(items: I) -> Vec<Value>
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    items.into_iter().map(Into::into).collect()
}

/// The subject is null or has no element.
pub fn is_empty() -> AssertionStep {
    AssertionStep::new("assertor.constraint.iterable.empty", Value::is_empty)
}

/// The subject has at least one element.
pub fn is_not_empty() -> AssertionStep {
    AssertionStep::new("assertor.constraint.iterable.not_empty", |v| !v.is_empty())
}

/// The subject has exactly `size` elements.
pub fn has_size(size: usize) -> AssertionStep {
    AssertionStep::new("assertor.constraint.iterable.size", move |v| {
        v.as_list().is_some_and(|items| items.len() == size)
    })
    .requires_subject()
    .operand(size)
}

/// The subject contains `item`.
pub fn contains(item: impl Into<Value>, mode: AnalysisMode) -> AssertionStep {
    let item = item.into();
    AssertionStep::new("assertor.constraint.iterable.contains", {
        let item = item.clone();
        move |v| {
            v.as_list()
                .is_some_and(|items| scan_any(items, mode, |candidate| *candidate == item))
        }
    })
    .requires_subject()
    .operand(item)
}

/// The subject contains every one of `expected`. Vacuously true when
/// `expected` is empty.
pub fn contains_all<I, T>(expected: I, mode: AnalysisMode) -> AssertionStep
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    let expected = values(expected);
    AssertionStep::new("assertor.constraint.iterable.contains_all", {
        let expected = expected.clone();
        move |v| {
            v.as_list().is_some_and(|items| {
                expected
                    .iter()
                    .all(|wanted| scan_any(items, mode, |candidate| candidate == wanted))
            })
        }
    })
    .requires_subject()
    .operand(expected)
}

/// The subject contains at least one of `expected`.
pub fn contains_any<I, T>(expected: I, mode: AnalysisMode) -> AssertionStep
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    let expected = values(expected);
    AssertionStep::new("assertor.constraint.iterable.contains_any", {
        let expected = expected.clone();
        move |v| {
            v.as_list().is_some_and(|items| {
                scan_any(items, mode, |candidate| expected.contains(candidate))
            })
        }
    })
    .requires_subject()
    .operand(expected)
}

/// At least one element satisfies `predicate`.
pub fn any_match<F>(predicate: F, mode: AnalysisMode) -> AssertionStep
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    AssertionStep::new("assertor.constraint.iterable.any_match", move |v| {
        v.as_list()
            .is_some_and(|items| scan_any(items, mode, &predicate))
    })
    .requires_subject()
}

/// Every element satisfies `predicate`. Vacuously true when empty.
pub fn all_match<F>(predicate: F, mode: AnalysisMode) -> AssertionStep
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    AssertionStep::new("assertor.constraint.iterable.all_match", move |v| {
        v.as_list()
            .is_some_and(|items| scan_all(items, mode, &predicate))
    })
    .requires_subject()
}

impl Assertor<kind::Iterable> {
    fn mode(&self) -> AnalysisMode {
        self.chain().analysis_mode()
    }

    /// See [`is_empty`].
    pub fn is_empty(self) -> Self {
        self.verify(is_empty())
    }

    /// See [`is_not_empty`].
    pub fn is_not_empty(self) -> Self {
        self.verify(is_not_empty())
    }

    /// See [`has_size`].
    pub fn has_size(self, size: usize) -> Self {
        self.verify(has_size(size))
    }

    /// See [`contains`].
    pub fn contains(self, item: impl Into<Value>) -> Self {
        let mode = self.mode();
        self.verify(contains(item, mode))
    }

    /// See [`contains_all`].
    ///
    /// ```rust
    /// use assertor::that;
    ///
    /// assert!(that(vec!["a", "b", "c"]).contains_all(["c", "a"]).is_ok());
    /// assert_eq!(
    ///     that([1, 2]).contains_all([2, 3]).get_errors().as_deref(),
    ///     Some("the iterable '[1, 2]' should contain all the values of '[2, 3]'")
    /// );
    /// ```
    pub fn contains_all<I, T>(self, expected: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let mode = self.mode();
        self.verify(contains_all(expected, mode))
    }

    /// See [`contains_any`].
    pub fn contains_any<I, T>(self, expected: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let mode = self.mode();
        self.verify(contains_any(expected, mode))
    }

    /// See [`any_match`].
    pub fn any_match<F>(self, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        let mode = self.mode();
        self.verify(any_match(predicate, mode))
    }

    /// See [`all_match`].
    pub fn all_match<F>(self, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        let mode = self.mode();
        self.verify(all_match(predicate, mode))
    }
}
