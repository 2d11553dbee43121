//! String checks
//!
//! Lengths count `char`s, not bytes. A null string counts as empty and as
//! blank; the other checks require a non-null subject.
//!
//! ```rust
//! use assertor::that;
//!
//! assert!(that("héllo").has_length(5).is_ok());
//! assert!(that(None::<&str>).is_blank().is_ok());
//! assert!(that("2024-06-01").matches(r"\d{4}-\d{2}-\d{2}").is_ok());
//! ```

use regex::Regex;

use crate::fluent::Assertor;
use crate::kind;
use crate::step::AssertionStep;
use crate::value::Value;

pub(crate) const TEMPLATES: &[(&str, &str)] = &[
    ("assertor.constraint.string.empty", "the char sequence '%1$s*' should be empty"),
    ("assertor.constraint.string.empty.not", "the char sequence should not be empty"),
    ("assertor.constraint.string.not_empty", "the char sequence should not be empty"),
    (
        "assertor.constraint.string.not_empty.not",
        "the char sequence '%1$s*' should be empty",
    ),
    ("assertor.constraint.string.blank", "the char sequence '%1$s*' should be blank"),
    (
        "assertor.constraint.string.blank.not",
        "the char sequence '%1$s*' should not be blank",
    ),
    (
        "assertor.constraint.string.not_blank",
        "the char sequence '%1$s*' should not be blank",
    ),
    (
        "assertor.constraint.string.not_blank.not",
        "the char sequence '%1$s*' should be blank",
    ),
    (
        "assertor.constraint.string.length",
        "the char sequence '%1$s*' should have a length of '%2$s*'",
    ),
    (
        "assertor.constraint.string.length.not",
        "the char sequence '%1$s*' should not have a length of '%2$s*'",
    ),
    (
        "assertor.constraint.string.contains",
        "the char sequence '%1$s*' should contain '%2$s*'",
    ),
    (
        "assertor.constraint.string.contains.not",
        "the char sequence '%1$s*' should not contain '%2$s*'",
    ),
    (
        "assertor.constraint.string.starts_with",
        "the char sequence '%1$s*' should start with '%2$s*'",
    ),
    (
        "assertor.constraint.string.starts_with.not",
        "the char sequence '%1$s*' should not start with '%2$s*'",
    ),
    (
        "assertor.constraint.string.ends_with",
        "the char sequence '%1$s*' should end with '%2$s*'",
    ),
    (
        "assertor.constraint.string.ends_with.not",
        "the char sequence '%1$s*' should not end with '%2$s*'",
    ),
    (
        "assertor.constraint.string.matches",
        "the char sequence '%1$s*' should match the pattern '%2$s*'",
    ),
    (
        "assertor.constraint.string.matches.not",
        "the char sequence '%1$s*' should not match the pattern '%2$s*'",
    ),
    (
        "assertor.constraint.string.finds",
        "the char sequence '%1$s*' should contain a match of '%2$s*'",
    ),
    (
        "assertor.constraint.string.finds.not",
        "the char sequence '%1$s*' should not contain a match of '%2$s*'",
    ),
    (
        "assertor.constraint.string.matches.prerequisite",
        "the char sequence cannot be null and '%2$s*' must be a valid pattern",
    ),
    (
        "assertor.constraint.string.finds.prerequisite",
        "the char sequence cannot be null and '%2$s*' must be a valid pattern",
    ),
    (
        "assertor.constraint.string.prerequisite",
        "the char sequence cannot be null and the searched text cannot be empty",
    ),
];

fn blank(v: &Value) -> bool {
    match v {
        Value::Null => true,
        other => other.as_str().is_some_and(|s| s.trim().is_empty()),
    }
}

fn search<F>(key: &'static str, needle: String, found: F) -> AssertionStep
where
    F: Fn(&str, &str) -> bool + Send + Sync + 'static,
{
    let precondition_needle_empty = needle.is_empty();
    AssertionStep::new(key, {
        let needle = needle.clone();
        move |v| v.as_str().is_some_and(|s| found(s, &needle))
    })
    .precondition(move |v| !v.is_null() && !precondition_needle_empty)
    .operand(needle)
}

fn pattern(key: &'static str, regex: &str, anchored: bool) -> AssertionStep {
    let source = if anchored {
        format!("^(?:{regex})$")
    } else {
        regex.to_owned()
    };
    let compiled = Regex::new(&source).ok();
    let valid = compiled.is_some();
    AssertionStep::new(key, move |v| match (&compiled, v.as_str()) {
        (Some(compiled), Some(s)) => compiled.is_match(s),
        _ => false,
    })
    .precondition(move |v| valid && !v.is_null())
    .operand(regex)
}

/// The subject is null or `""`.
pub fn is_empty() -> AssertionStep {
    AssertionStep::new("assertor.constraint.string.empty", Value::is_empty)
}

/// The subject has at least one char.
pub fn is_not_empty() -> AssertionStep {
    AssertionStep::new("assertor.constraint.string.not_empty", |v| !v.is_empty())
}

/// The subject is null, empty or only whitespace.
pub fn is_blank() -> AssertionStep {
    AssertionStep::new("assertor.constraint.string.blank", blank)
}

/// The subject has a non-whitespace char.
pub fn is_not_blank() -> AssertionStep {
    AssertionStep::new("assertor.constraint.string.not_blank", |v| !blank(v))
}

/// The subject has exactly `length` chars.
pub fn has_length(length: usize) -> AssertionStep {
    AssertionStep::new("assertor.constraint.string.length", move |v| {
        v.as_str().is_some_and(|s| s.chars().count() == length)
    })
    .requires_subject()
    .operand(length)
}

/// The subject contains `needle`.
pub fn contains(needle: impl Into<String>) -> AssertionStep {
    search("assertor.constraint.string.contains", needle.into(), |s, n| {
        s.contains(n)
    })
}

/// The subject starts with `prefix`.
pub fn starts_with(prefix: impl Into<String>) -> AssertionStep {
    search(
        "assertor.constraint.string.starts_with",
        prefix.into(),
        |s, p| s.starts_with(p),
    )
}

/// The subject ends with `suffix`.
pub fn ends_with(suffix: impl Into<String>) -> AssertionStep {
    search(
        "assertor.constraint.string.ends_with",
        suffix.into(),
        |s, p| s.ends_with(p),
    )
}

/// The whole subject matches the regular expression `regex`.
///
/// An invalid expression is an unmet precondition.
pub fn matches(regex: &str) -> AssertionStep {
    pattern("assertor.constraint.string.matches", regex, true)
}

/// Some part of the subject matches the regular expression `regex`.
///
/// An invalid expression is an unmet precondition.
pub fn finds(regex: &str) -> AssertionStep {
    pattern("assertor.constraint.string.finds", regex, false)
}

impl Assertor<kind::Text> {
    /// See [`is_empty`].
    pub fn is_empty(self) -> Self {
        self.verify(is_empty())
    }

    /// See [`is_not_empty`].
    pub fn is_not_empty(self) -> Self {
        self.verify(is_not_empty())
    }

    /// See [`is_blank`].
    pub fn is_blank(self) -> Self {
        self.verify(is_blank())
    }

    /// See [`is_not_blank`].
    pub fn is_not_blank(self) -> Self {
        self.verify(is_not_blank())
    }

    /// See [`has_length`].
    pub fn has_length(self, length: usize) -> Self {
        self.verify(has_length(length))
    }

    /// See [`contains`].
    pub fn contains(self, needle: impl Into<String>) -> Self {
        self.verify(contains(needle))
    }

    /// See [`starts_with`].
    pub fn starts_with(self, prefix: impl Into<String>) -> Self {
        self.verify(starts_with(prefix))
    }

    /// See [`ends_with`].
    pub fn ends_with(self, suffix: impl Into<String>) -> Self {
        self.verify(ends_with(suffix))
    }

    /// See [`matches`].
    pub fn matches(self, regex: &str) -> Self {
        self.verify(matches(regex))
    }

    /// See [`finds`].
    pub fn finds(self, regex: &str) -> Self {
        self.verify(finds(regex))
    }
}
