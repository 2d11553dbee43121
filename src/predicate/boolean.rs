//! Boolean checks

use crate::fluent::Assertor;
use crate::kind;
use crate::step::AssertionStep;

pub(crate) const TEMPLATES: &[(&str, &str)] = &[
    ("assertor.constraint.boolean.true", "the boolean should be true"),
    ("assertor.constraint.boolean.true.not", "the boolean should be false"),
    ("assertor.constraint.boolean.false", "the boolean should be false"),
    ("assertor.constraint.boolean.false.not", "the boolean should be true"),
    ("assertor.constraint.boolean.prerequisite", "the boolean cannot be null"),
];

/// The subject is `true`.
pub fn is_true() -> AssertionStep {
    AssertionStep::new("assertor.constraint.boolean.true", |v| v.as_bool() == Some(true))
        .requires_subject()
}

/// The subject is `false`.
pub fn is_false() -> AssertionStep {
    AssertionStep::new("assertor.constraint.boolean.false", |v| v.as_bool() == Some(false))
        .requires_subject()
}

impl Assertor<kind::Boolean> {
    /// See [`is_true`].
    pub fn is_true(self) -> Self {
        self.verify(is_true())
    }

    /// See [`is_false`].
    pub fn is_false(self) -> Self {
        self.verify(is_false())
    }
}

#[cfg(test)]
mod tests {
    use crate::that;

    #[test]
    fn test_true_false() {
        assert!(that(true).is_true().is_ok());
        assert!(that(false).is_false().is_ok());
        assert!(!that(false).is_true().is_ok());
        assert_eq!(
            that(true).not().is_true().get_errors().as_deref(),
            Some("the boolean should be false")
        );
    }

    #[test]
    fn test_null_is_a_precondition_failure() {
        let err = that(None::<bool>).is_true().or_else_throw().unwrap_err();
        assert!(err.is_precondition());
        assert_eq!(err.message(), "the boolean cannot be null");
    }
}
