//! Type checks on [`TypeInfo`]

use crate::fluent::Assertor;
use crate::kind;
use crate::step::AssertionStep;
use crate::value::TypeInfo;

pub(crate) const TEMPLATES: &[(&str, &str)] = &[
    (
        "assertor.constraint.class.type",
        "the class '%1$s*' should be '%2$s*'",
    ),
    (
        "assertor.constraint.class.type.not",
        "the class '%1$s*' should not be '%2$s*'",
    ),
    (
        "assertor.constraint.class.name",
        "the class '%1$s*' should be named '%2$s*'",
    ),
    (
        "assertor.constraint.class.name.not",
        "the class '%1$s*' should not be named '%2$s*'",
    ),
    (
        "assertor.constraint.class.simple_name",
        "the class '%1$s*' should have the simple name '%2$s*'",
    ),
    (
        "assertor.constraint.class.simple_name.not",
        "the class '%1$s*' should not have the simple name '%2$s*'",
    ),
    ("assertor.constraint.class.prerequisite", "the class cannot be null"),
];

/// The subject describes `T`.
pub fn is_type<T: ?Sized + 'static>() -> AssertionStep {
    let expected = TypeInfo::of::<T>();
    AssertionStep::new("assertor.constraint.class.type", move |v| {
        v.as_class().is_some_and(|info| *info == expected)
    })
    .requires_subject()
    .operand(expected)
}

/// The fully qualified type name is `name`.
pub fn has_name(name: impl Into<String>) -> AssertionStep {
    let name = name.into();
    AssertionStep::new("assertor.constraint.class.name", {
        let name = name.clone();
        move |v| v.as_class().is_some_and(|info| info.name() == name)
    })
    .requires_subject()
    .operand(name)
}

/// The last path segment of the type name is `name`.
pub fn has_simple_name(name: impl Into<String>) -> AssertionStep {
    let name = name.into();
    AssertionStep::new("assertor.constraint.class.simple_name", {
        let name = name.clone();
        move |v| v.as_class().is_some_and(|info| info.simple_name() == name)
    })
    .requires_subject()
    .operand(name)
}

impl Assertor<kind::Class> {
    /// See [`is_type`].
    ///
    /// ```rust
    /// use assertor::that;
    /// use assertor::value::TypeInfo;
    ///
    /// assert!(that(TypeInfo::of::<String>()).is_type::<String>().is_ok());
    /// assert!(that(TypeInfo::of::<Vec<u8>>()).has_simple_name("Vec").is_ok());
    /// ```
    pub fn is_type<T: ?Sized + 'static>(self) -> Self {
        self.verify(is_type::<T>())
    }

    /// See [`has_name`].
    pub fn has_name(self, name: impl Into<String>) -> Self {
        self.verify(has_name(name))
    }

    /// See [`has_simple_name`].
    pub fn has_simple_name(self, name: impl Into<String>) -> Self {
        self.verify(has_simple_name(name))
    }
}

#[cfg(test)]
mod tests {
    use crate::that;
    use crate::value::TypeInfo;

    #[test]
    fn test_type_checks() {
        assert!(that(TypeInfo::of::<str>()).is_type::<str>().is_ok());
        assert!(!that(TypeInfo::of::<i32>()).is_type::<i64>().is_ok());
        assert!(that(TypeInfo::of::<i32>()).has_name("i32").is_ok());
    }

    #[test]
    fn test_type_message() {
        assert_eq!(
            that(TypeInfo::of::<u8>()).is_type::<u16>().get_errors().as_deref(),
            Some("the class 'u8' should be 'u16'")
        );
    }
}
