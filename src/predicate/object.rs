//! Checks available on every kind

use crate::fluent::Assertor;
use crate::step::AssertionStep;
use crate::value::{TypeTag, Value};

pub(crate) const TEMPLATES: &[(&str, &str)] = &[
    ("assertor.constraint.object.null", "the object '%1$s*' should be null"),
    ("assertor.constraint.object.null.not", "the object should not be null"),
    ("assertor.constraint.object.not_null", "the object should not be null"),
    ("assertor.constraint.object.not_null.not", "the object '%1$s*' should be null"),
    (
        "assertor.constraint.object.equal",
        "the object '%1$s*' should be equal to '%2$s*'",
    ),
    (
        "assertor.constraint.object.equal.not",
        "the object '%1$s*' should not be equal to '%2$s*'",
    ),
    (
        "assertor.constraint.object.different",
        "the object '%1$s*' should be different from '%2$s*'",
    ),
    (
        "assertor.constraint.object.different.not",
        "the object '%1$s*' should be equal to '%2$s*'",
    ),
    (
        "assertor.constraint.object.type",
        "the object '%1$s*' should be of type '%2$s*'",
    ),
    (
        "assertor.constraint.object.type.not",
        "the object '%1$s*' should not be of type '%2$s*'",
    ),
    (
        "assertor.constraint.object.validates",
        "the object '%1$s*' should match the predicate",
    ),
    (
        "assertor.constraint.object.validates.not",
        "the object '%1$s*' should not match the predicate",
    ),
];

/// The subject is null.
pub fn is_null() -> AssertionStep {
    AssertionStep::new("assertor.constraint.object.null", Value::is_null)
}

/// The subject is not null.
pub fn is_not_null() -> AssertionStep {
    AssertionStep::new("assertor.constraint.object.not_null", |v| !v.is_null())
}

/// The subject equals `expected`. Numbers compare across widths.
pub fn is_equal(expected: impl Into<Value>) -> AssertionStep {
    let expected = expected.into();
    AssertionStep::new("assertor.constraint.object.equal", {
        let expected = expected.clone();
        move |v| *v == expected
    })
    .operand(expected)
}

/// The subject differs from `other`.
pub fn is_not_equal(other: impl Into<Value>) -> AssertionStep {
    let other = other.into();
    AssertionStep::new("assertor.constraint.object.different", {
        let other = other.clone();
        move |v| *v != other
    })
    .operand(other)
}

/// The subject's value is of type `expected`.
///
/// The tag is read from the value itself, so arrays and vectors both report
/// [`TypeTag::Iterable`] and null reports [`TypeTag::Unknown`].
pub fn has_type(expected: TypeTag) -> AssertionStep {
    AssertionStep::new("assertor.constraint.object.type", move |v| {
        v.type_tag() == expected
    })
    .operand(expected.name())
}

/// The subject satisfies `predicate`.
pub fn validates<F>(predicate: F) -> AssertionStep
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    AssertionStep::new("assertor.constraint.object.validates", predicate)
}

impl<K> Assertor<K> {
    /// See [`is_null`].
    pub fn is_null(self) -> Self {
        self.verify(is_null())
    }

    /// See [`is_not_null`].
    pub fn is_not_null(self) -> Self {
        self.verify(is_not_null())
    }

    /// See [`is_equal`].
    pub fn is_equal(self, expected: impl Into<Value>) -> Self {
        self.verify(is_equal(expected))
    }

    /// See [`is_not_equal`].
    pub fn is_not_equal(self, other: impl Into<Value>) -> Self {
        self.verify(is_not_equal(other))
    }

    /// See [`has_type`].
    pub fn has_type(self, expected: TypeTag) -> Self {
        self.verify(has_type(expected))
    }

    /// See [`validates`].
    ///
    /// ```rust
    /// use assertor::that;
    ///
    /// let even = |v: &assertor::Value| v.as_number().is_some_and(|n| n.as_f64() % 2.0 == 0.0);
    /// assert!(that(4).validates(even).is_ok());
    /// assert!(!that(3).validates(even).is_ok());
    /// ```
    pub fn validates<F>(self, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.verify(validates(predicate))
    }
}

#[cfg(test)]
mod tests {
    use crate::that;
    use crate::value::{TypeTag, Value};

    #[test]
    fn test_null_checks() {
        assert!(that(None::<i32>).is_null().is_ok());
        assert!(that(Some(1)).is_not_null().is_ok());
        assert_eq!(
            that(3).is_null().get_errors().as_deref(),
            Some("the object '3' should be null")
        );
    }

    #[test]
    fn test_equality_messages() {
        assert_eq!(
            that("a").is_equal("b").get_errors().as_deref(),
            Some("the object 'a' should be equal to 'b'")
        );
        assert_eq!(
            that("a").not().is_equal("a").get_errors().as_deref(),
            Some("the object 'a' should not be equal to 'a'")
        );
        assert!(that(2u8).is_equal(2.0).is_ok());
        assert!(that(2).is_not_equal(3).is_ok());
    }

    #[test]
    fn test_has_type() {
        assert!(that(Value::from(1.5)).has_type(TypeTag::Number).is_ok());
        assert_eq!(
            that(true).has_type(TypeTag::Number).get_errors().as_deref(),
            Some("the object 'true' should be of type 'number'")
        );
    }
}
