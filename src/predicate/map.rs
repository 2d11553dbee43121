//! Map checks

use crate::fluent::Assertor;
use crate::kind;
use crate::step::{AnalysisMode, AssertionStep};
use crate::value::Value;

use super::scan_any;

pub(crate) const TEMPLATES: &[(&str, &str)] = &[
    ("assertor.constraint.map.empty", "the map '%1$s*' should be empty"),
    ("assertor.constraint.map.empty.not", "the map should not be empty"),
    ("assertor.constraint.map.not_empty", "the map should not be empty"),
    ("assertor.constraint.map.not_empty.not", "the map '%1$s*' should be empty"),
    (
        "assertor.constraint.map.size",
        "the map '%1$s*' should have a size of '%2$s*'",
    ),
    (
        "assertor.constraint.map.size.not",
        "the map '%1$s*' should not have a size of '%2$s*'",
    ),
    (
        "assertor.constraint.map.contains_key",
        "the map '%1$s*' should contain the key '%2$s*'",
    ),
    (
        "assertor.constraint.map.contains_key.not",
        "the map '%1$s*' should not contain the key '%2$s*'",
    ),
    (
        "assertor.constraint.map.contains_value",
        "the map '%1$s*' should contain the value '%2$s*'",
    ),
    (
        "assertor.constraint.map.contains_value.not",
        "the map '%1$s*' should not contain the value '%2$s*'",
    ),
    (
        "assertor.constraint.map.contains_entry",
        "the map '%1$s*' should contain the entry '%2$s*=%3$s*'",
    ),
    (
        "assertor.constraint.map.contains_entry.not",
        "the map '%1$s*' should not contain the entry '%2$s*=%3$s*'",
    ),
    (
        "assertor.constraint.map.contains_all_keys",
        "the map '%1$s*' should contain all the keys of '%2$s*'",
    ),
    (
        "assertor.constraint.map.contains_all_keys.not",
        "the map '%1$s*' should not contain all the keys of '%2$s*'",
    ),
    ("assertor.constraint.map.prerequisite", "the map cannot be null"),
];

fn any_entry<F>(v: &Value, mode: AnalysisMode, pred: F) -> bool
where
    F: Fn(&(Value, Value)) -> bool + Send + Sync,
{
    v.as_map()
        .is_some_and(|entries| scan_any(entries, mode, pred))
}

/// The subject is null or has no entry.
pub fn is_empty() -> AssertionStep {
    AssertionStep::new("assertor.constraint.map.empty", Value::is_empty)
}

/// The subject has at least one entry.
pub fn is_not_empty() -> AssertionStep {
    AssertionStep::new("assertor.constraint.map.not_empty", |v| !v.is_empty())
}

/// The subject has exactly `size` entries.
pub fn has_size(size: usize) -> AssertionStep {
    AssertionStep::new("assertor.constraint.map.size", move |v| {
        v.as_map().is_some_and(|entries| entries.len() == size)
    })
    .requires_subject()
    .operand(size)
}

/// The subject has the key `key`.
pub fn contains_key(key: impl Into<Value>, mode: AnalysisMode) -> AssertionStep {
    let key = key.into();
    AssertionStep::new("assertor.constraint.map.contains_key", {
        let key = key.clone();
        move |v| any_entry(v, mode, |(k, _)| *k == key)
    })
    .requires_subject()
    .operand(key)
}

/// Some entry of the subject has the value `value`.
pub fn contains_value(value: impl Into<Value>, mode: AnalysisMode) -> AssertionStep {
    let value = value.into();
    AssertionStep::new("assertor.constraint.map.contains_value", {
        let value = value.clone();
        move |v| any_entry(v, mode, |(_, candidate)| *candidate == value)
    })
    .requires_subject()
    .operand(value)
}

/// The subject maps `key` to `value`.
pub fn contains_entry(
    key: impl Into<Value>,
    value: impl Into<Value>,
    mode: AnalysisMode,
) -> AssertionStep {
    let (key, value) = (key.into(), value.into());
    AssertionStep::new("assertor.constraint.map.contains_entry", {
        let (key, value) = (key.clone(), value.clone());
        move |v| any_entry(v, mode, |(k, candidate)| *k == key && *candidate == value)
    })
    .requires_subject()
    .operand(key)
    .operand(value)
}

/// The subject has every key of `keys`.
pub fn contains_all_keys<I, T>(keys: I, mode: AnalysisMode) -> AssertionStep
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    let keys: Vec<Value> = keys.into_iter().map(Into::into).collect();
    AssertionStep::new("assertor.constraint.map.contains_all_keys", {
        let keys = keys.clone();
        move |v| {
            v.as_map().is_some() && keys.iter().all(|key| any_entry(v, mode, |(k, _)| k == key))
        }
    })
    .requires_subject()
    .operand(keys)
}

impl Assertor<kind::Map> {
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

    /// See [`contains_key`].
    pub fn contains_key(self, key: impl Into<Value>) -> Self {
        let mode = self.mode();
        self.verify(contains_key(key, mode))
    }

    /// See [`contains_value`].
    pub fn contains_value(self, value: impl Into<Value>) -> Self {
        let mode = self.mode();
        self.verify(contains_value(value, mode))
    }

    /// See [`contains_entry`].
    pub fn contains_entry(self, key: impl Into<Value>, value: impl Into<Value>) -> Self {
        let mode = self.mode();
        self.verify(contains_entry(key, value, mode))
    }

    /// See [`contains_all_keys`].
    pub fn contains_all_keys<I, T>(self, keys: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let mode = self.mode();
        self.verify(contains_all_keys(keys, mode))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};

    use crate::that;

    fn sample() -> BTreeMap<&'static str, i32> {
        BTreeMap::from([("a", 1), ("b", 2)])
    }

    #[test]
    fn test_size_and_emptiness() {
        assert!(that(HashMap::<String, i32>::new()).is_empty().is_ok());
        assert!(that(sample()).is_not_empty().and().has_size(2).is_ok());
    }

    #[test]
    fn test_lookups() {
        assert!(that(sample()).contains_key("a").is_ok());
        assert!(that(sample()).contains_value(2).is_ok());
        assert!(that(sample()).contains_entry("b", 2).is_ok());
        assert!(!that(sample()).contains_entry("b", 1).is_ok());
        assert!(that(sample()).contains_all_keys(["a", "b"]).is_ok());
        assert!(!that(sample()).contains_all_keys(["a", "z"]).is_ok());
    }

    #[test]
    fn test_entry_message() {
        assert_eq!(
            that(sample()).contains_entry("c", 3).get_errors().as_deref(),
            Some("the map '{a=1, b=2}' should contain the entry 'c=3'")
        );
    }
}
