//! Number checks
//!
//! Bounds accept any primitive number. Integers are compared exactly,
//! mixed integer/float comparisons go through `f64`, and NaN compares with
//! nothing, so every ordering check on NaN is false.

use std::cmp::Ordering;

use crate::fluent::Assertor;
use crate::kind;
use crate::step::AssertionStep;
use crate::value::{Number, Value};

pub(crate) const TEMPLATES: &[(&str, &str)] = &[
    ("assertor.constraint.number.zero", "the number '%1$s*' should be zero"),
    ("assertor.constraint.number.zero.not", "the number '%1$s*' should not be zero"),
    ("assertor.constraint.number.positive", "the number '%1$s*' should be positive"),
    (
        "assertor.constraint.number.positive.not",
        "the number '%1$s*' should not be positive",
    ),
    ("assertor.constraint.number.negative", "the number '%1$s*' should be negative"),
    (
        "assertor.constraint.number.negative.not",
        "the number '%1$s*' should not be negative",
    ),
    (
        "assertor.constraint.number.gt",
        "the number '%1$s*' should be greater than '%2$s*'",
    ),
    (
        "assertor.constraint.number.gt.not",
        "the number '%1$s*' should not be greater than '%2$s*'",
    ),
    (
        "assertor.constraint.number.gte",
        "the number '%1$s*' should be greater than or equal to '%2$s*'",
    ),
    (
        "assertor.constraint.number.gte.not",
        "the number '%1$s*' should not be greater than or equal to '%2$s*'",
    ),
    (
        "assertor.constraint.number.lt",
        "the number '%1$s*' should be lower than '%2$s*'",
    ),
    (
        "assertor.constraint.number.lt.not",
        "the number '%1$s*' should not be lower than '%2$s*'",
    ),
    (
        "assertor.constraint.number.lte",
        "the number '%1$s*' should be lower than or equal to '%2$s*'",
    ),
    (
        "assertor.constraint.number.lte.not",
        "the number '%1$s*' should not be lower than or equal to '%2$s*'",
    ),
    (
        "assertor.constraint.number.between",
        "the number '%1$s*' should be between '%2$s*' and '%3$s*'",
    ),
    (
        "assertor.constraint.number.between.not",
        "the number '%1$s*' should not be between '%2$s*' and '%3$s*'",
    ),
    (
        "assertor.constraint.number.between.prerequisite",
        "the number cannot be null and '%2$s*' cannot be greater than '%3$s*'",
    ),
    ("assertor.constraint.number.prerequisite", "the number cannot be null"),
];

fn is_number(v: &Value) -> bool {
    v.as_number().is_some()
}

fn ordering(v: &Value, bound: &Number) -> Option<Ordering> {
    v.as_number().and_then(|n| n.compare(bound))
}

fn compare<F>(key: &'static str, bound: Number, accept: F) -> AssertionStep
where
    F: Fn(Ordering) -> bool + Send + Sync + 'static,
{
    AssertionStep::new(key, move |v| ordering(v, &bound).is_some_and(&accept))
        .precondition(is_number)
        .operand(bound)
}

/// The subject is zero.
pub fn is_zero() -> AssertionStep {
    AssertionStep::new("assertor.constraint.number.zero", |v| {
        ordering(v, &Number::Int(0)) == Some(Ordering::Equal)
    })
    .precondition(is_number)
}

/// The subject is strictly positive.
pub fn is_positive() -> AssertionStep {
    AssertionStep::new("assertor.constraint.number.positive", |v| {
        ordering(v, &Number::Int(0)) == Some(Ordering::Greater)
    })
    .precondition(is_number)
}

/// The subject is strictly negative.
pub fn is_negative() -> AssertionStep {
    AssertionStep::new("assertor.constraint.number.negative", |v| {
        ordering(v, &Number::Int(0)) == Some(Ordering::Less)
    })
    .precondition(is_number)
}

/// `subject > bound`
pub fn is_gt(bound: impl Into<Number>) -> AssertionStep {
    compare("assertor.constraint.number.gt", bound.into(), |o| {
        o == Ordering::Greater
    })
}

/// `subject >= bound`
pub fn is_gte(bound: impl Into<Number>) -> AssertionStep {
    compare("assertor.constraint.number.gte", bound.into(), |o| {
        o != Ordering::Less
    })
}

/// `subject < bound`
pub fn is_lt(bound: impl Into<Number>) -> AssertionStep {
    compare("assertor.constraint.number.lt", bound.into(), |o| {
        o == Ordering::Less
    })
}

/// `subject <= bound`
pub fn is_lte(bound: impl Into<Number>) -> AssertionStep {
    compare("assertor.constraint.number.lte", bound.into(), |o| {
        o != Ordering::Greater
    })
}

/// `from <= subject <= to`
///
/// Inverted bounds are an unmet precondition.
pub fn is_between(from: impl Into<Number>, to: impl Into<Number>) -> AssertionStep {
    let (from, to) = (from.into(), to.into());
    AssertionStep::new("assertor.constraint.number.between", move |v| {
        ordering(v, &from).is_some_and(|o| o != Ordering::Less)
            && ordering(v, &to).is_some_and(|o| o != Ordering::Greater)
    })
    .precondition(move |v| {
        is_number(v) && from.compare(&to).is_some_and(|o| o != Ordering::Greater)
    })
    .operand(from)
    .operand(to)
}

impl Assertor<kind::Numeric> {
    /// See [`is_zero`].
    pub fn is_zero(self) -> Self {
        self.verify(is_zero())
    }

    /// See [`is_positive`].
    pub fn is_positive(self) -> Self {
        self.verify(is_positive())
    }

    /// See [`is_negative`].
    pub fn is_negative(self) -> Self {
        self.verify(is_negative())
    }

    /// See [`is_gt`].
    pub fn is_gt(self, bound: impl Into<Number>) -> Self {
        self.verify(is_gt(bound))
    }

    /// See [`is_gte`].
    pub fn is_gte(self, bound: impl Into<Number>) -> Self {
        self.verify(is_gte(bound))
    }

    /// See [`is_lt`].
    pub fn is_lt(self, bound: impl Into<Number>) -> Self {
        self.verify(is_lt(bound))
    }

    /// See [`is_lte`].
    pub fn is_lte(self, bound: impl Into<Number>) -> Self {
        self.verify(is_lte(bound))
    }

    /// See [`is_between`].
    pub fn is_between(self, from: impl Into<Number>, to: impl Into<Number>) -> Self {
        self.verify(is_between(from, to))
    }
}

#[cfg(test)]
mod tests {
    use crate::that;

    #[test]
    fn test_comparisons() {
        assert!(that(5).is_gt(4).is_ok());
        assert!(!that(5).is_gt(5).is_ok());
        assert!(that(5).is_gte(5).is_ok());
        assert!(that(-1i8).is_lt(0u64).is_ok());
        assert!(that(2.5).is_lte(3).is_ok());
        assert!(that(u64::MAX).is_gt(i64::MAX).is_ok());
    }

    #[test]
    fn test_sign_checks() {
        assert!(that(0).is_zero().is_ok());
        assert!(that(0.0).is_zero().is_ok());
        assert!(that(3u8).is_positive().is_ok());
        assert!(that(-0.5).is_negative().is_ok());
        assert!(!that(0).is_positive().is_ok());
    }

    #[test]
    fn test_nan_fails_every_ordering() {
        assert!(!that(f64::NAN).is_gt(0).is_ok());
        assert!(!that(f64::NAN).is_lte(0).is_ok());
        assert!(!that(f64::NAN).is_zero().is_ok());
    }

    #[test]
    fn test_between() {
        assert!(that(5).is_between(1, 10).is_ok());
        assert!(that(1).is_between(1, 1).is_ok());
        assert_eq!(
            that(11).is_between(1, 10).get_errors().as_deref(),
            Some("the number '11' should be between '1' and '10'")
        );
        let err = that(5).is_between(10, 1).or_else_throw().unwrap_err();
        assert!(err.is_precondition());
        assert_eq!(
            err.message(),
            "the number cannot be null and '10' cannot be greater than '1'"
        );
    }

    #[test]
    fn test_null_number_fails_precondition() {
        let err = that(None::<i32>).is_gt(1).or_else_throw().unwrap_err();
        assert!(err.is_precondition());
        assert_eq!(err.message(), "the number cannot be null");
    }
}
