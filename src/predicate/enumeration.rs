//! Enumeration checks on [`Variant`](crate::value::Variant)

use crate::fluent::Assertor;
use crate::kind;
use crate::step::AssertionStep;

pub(crate) const TEMPLATES: &[(&str, &str)] = &[
    (
        "assertor.constraint.enum.name",
        "the enum '%1$s*' should be named '%2$s*'",
    ),
    (
        "assertor.constraint.enum.name.not",
        "the enum '%1$s*' should not be named '%2$s*'",
    ),
    (
        "assertor.constraint.enum.ordinal",
        "the enum '%1$s*' should have the ordinal '%2$s*'",
    ),
    (
        "assertor.constraint.enum.ordinal.not",
        "the enum '%1$s*' should not have the ordinal '%2$s*'",
    ),
    ("assertor.constraint.enum.prerequisite", "the enum cannot be null"),
];

/// The variant is named `name`.
pub fn has_name(name: impl Into<String>) -> AssertionStep {
    let name = name.into();
    AssertionStep::new("assertor.constraint.enum.name", {
        let name = name.clone();
        move |v| v.as_variant().is_some_and(|variant| variant.name() == name)
    })
    .requires_subject()
    .operand(name)
}

/// The variant is declared at index `ordinal`.
pub fn has_ordinal(ordinal: usize) -> AssertionStep {
    AssertionStep::new("assertor.constraint.enum.ordinal", move |v| {
        v.as_variant()
            .is_some_and(|variant| variant.ordinal() == ordinal)
    })
    .requires_subject()
    .operand(ordinal)
}

impl Assertor<kind::Enum> {
    /// See [`has_name`].
    ///
    /// ```rust
    /// use assertor::that;
    /// use assertor::value::Variant;
    ///
    /// let level = Variant::new("Level", "Warn", 2);
    /// assert!(that(level.clone()).has_name("Warn").and().has_ordinal(2).is_ok());
    /// assert!(!that(level).has_name("Error").is_ok());
    /// ```
    pub fn has_name(self, name: impl Into<String>) -> Self {
        self.verify(has_name(name))
    }

    /// See [`has_ordinal`].
    pub fn has_ordinal(self, ordinal: usize) -> Self {
        self.verify(has_ordinal(ordinal))
    }
}

#[cfg(test)]
mod tests {
    use crate::that;
    use crate::value::Variant;

    #[test]
    fn test_message_uses_variant_name() {
        let errors = that(Variant::new("Level", "Info", 1))
            .has_name("Warn")
            .get_errors();
        assert_eq!(
            errors.as_deref(),
            Some("the enum 'Info' should be named 'Warn'")
        );
    }

    #[test]
    fn test_null_variant() {
        assert!(that(None::<Variant>)
            .has_ordinal(0)
            .or_else_throw()
            .unwrap_err()
            .is_precondition());
    }
}
