//! Error checks
//!
//! The cause of an error is its [`source`](std::error::Error::source).
//! `has_cause` and `has_cause_message` apply negation themselves: a missing
//! error fails them whether negated or not.

use std::error::Error as StdError;

use crate::fluent::Assertor;
use crate::kind;
use crate::step::AssertionStep;

pub(crate) const TEMPLATES: &[(&str, &str)] = &[
    ("assertor.constraint.throwable.cause", "the throwable '%1$s*' should have a cause"),
    (
        "assertor.constraint.throwable.cause.not",
        "the throwable '%1$s*' should not have a cause",
    ),
    (
        "assertor.constraint.throwable.cause_message",
        "the cause of the throwable '%1$s*' should have the message '%2$s*'",
    ),
    (
        "assertor.constraint.throwable.cause_message.not",
        "the cause of the throwable '%1$s*' should not have the message '%2$s*'",
    ),
    (
        "assertor.constraint.throwable.message",
        "the throwable '%1$s*' should have the message '%2$s*'",
    ),
    (
        "assertor.constraint.throwable.message.not",
        "the throwable '%1$s*' should not have the message '%2$s*'",
    ),
    (
        "assertor.constraint.throwable.message_containing",
        "the message of the throwable '%1$s*' should contain '%2$s*'",
    ),
    (
        "assertor.constraint.throwable.message_containing.not",
        "the message of the throwable '%1$s*' should not contain '%2$s*'",
    ),
    ("assertor.constraint.throwable.prerequisite", "the throwable cannot be null"),
];

fn cause<'a>(
    error: &'a (dyn StdError + Send + Sync + 'static),
) -> Option<&'a (dyn StdError + 'static)> {
    error.source()
}

/// The error has a source.
pub fn has_cause() -> AssertionStep {
    AssertionStep::handling_not("assertor.constraint.throwable.cause", |v, not| {
        v.as_error()
            .is_some_and(|error| cause(error).is_some() != not)
    })
    .requires_subject()
}

/// The error has a source whose message is `message`.
///
/// Negated, the source must exist and carry another message.
pub fn has_cause_message(message: impl Into<String>) -> AssertionStep {
    let message = message.into();
    AssertionStep::handling_not("assertor.constraint.throwable.cause_message", {
        let message = message.clone();
        move |v, not| {
            v.as_error()
                .and_then(cause)
                .is_some_and(|source| (source.to_string() == message) != not)
        }
    })
    .requires_subject()
    .operand(message)
}

/// The error's message is `message`.
pub fn has_message(message: impl Into<String>) -> AssertionStep {
    let message = message.into();
    AssertionStep::new("assertor.constraint.throwable.message", {
        let message = message.clone();
        move |v| v.as_error().is_some_and(|error| error.to_string() == message)
    })
    .requires_subject()
    .operand(message)
}

/// The error's message contains `part`.
pub fn has_message_containing(part: impl Into<String>) -> AssertionStep {
    let part = part.into();
    AssertionStep::new("assertor.constraint.throwable.message_containing", {
        let part = part.clone();
        move |v| {
            v.as_error()
                .is_some_and(|error| error.to_string().contains(part.as_str()))
        }
    })
    .requires_subject()
    .operand(part)
}

impl Assertor<kind::Throwable> {
    /// See [`has_cause`].
    pub fn has_cause(self) -> Self {
        self.verify(has_cause())
    }

    /// See [`has_cause_message`].
    pub fn has_cause_message(self, message: impl Into<String>) -> Self {
        self.verify(has_cause_message(message))
    }

    /// See [`has_message`].
    pub fn has_message(self, message: impl Into<String>) -> Self {
        self.verify(has_message(message))
    }

    /// See [`has_message_containing`].
    pub fn has_message_containing(self, part: impl Into<String>) -> Self {
        self.verify(has_message_containing(part))
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use crate::that;
    use crate::value::Throwable;

    #[derive(Debug)]
    struct Root;

    impl fmt::Display for Root {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("disk full")
        }
    }

    impl std::error::Error for Root {}

    #[derive(Debug, thiserror::Error)]
    #[error("save failed")]
    struct Wrapped(#[source] Root);

    #[test]
    fn test_messages() {
        let err = Throwable::new(Wrapped(Root));
        assert!(that(err.clone()).has_message("save failed").is_ok());
        assert!(that(err.clone()).has_message_containing("fail").is_ok());
        assert!(that(err).has_cause_message("disk full").is_ok());
    }

    #[test]
    fn test_cause_handles_not() {
        assert!(that(Throwable::new(Wrapped(Root))).has_cause().is_ok());
        assert!(that(Throwable::new(Root)).not().has_cause().is_ok());
        assert_eq!(
            that(Throwable::new(Root)).has_cause().get_errors().as_deref(),
            Some("the throwable 'disk full' should have a cause")
        );
    }

    #[test]
    fn test_negated_cause_message_requires_cause() {
        // no cause at all: fails in both polarities
        assert!(!that(Throwable::new(Root)).has_cause_message("x").is_ok());
        assert!(!that(Throwable::new(Root)).not().has_cause_message("x").is_ok());
        assert!(that(Throwable::new(Wrapped(Root)))
            .not()
            .has_cause_message("x")
            .is_ok());
    }
}
