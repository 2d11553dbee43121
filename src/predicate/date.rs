//! Date checks
//!
//! Subjects and operands are compared as UTC instants, so a
//! [`SystemTime`](std::time::SystemTime), a zoned [`DateTime`] and a naive
//! date-time read as UTC all mix freely.

use chrono::{DateTime, Utc};

use crate::fluent::Assertor;
use crate::kind;
use crate::step::AssertionStep;
use crate::value::Timestamp;

pub(crate) const TEMPLATES: &[(&str, &str)] = &[
    (
        "assertor.constraint.date.after",
        "the date '%1$s*' should be after '%2$s*'",
    ),
    (
        "assertor.constraint.date.after.not",
        "the date '%1$s*' should not be after '%2$s*'",
    ),
    (
        "assertor.constraint.date.after_or_equal",
        "the date '%1$s*' should be after or equal to '%2$s*'",
    ),
    (
        "assertor.constraint.date.after_or_equal.not",
        "the date '%1$s*' should not be after or equal to '%2$s*'",
    ),
    (
        "assertor.constraint.date.before",
        "the date '%1$s*' should be before '%2$s*'",
    ),
    (
        "assertor.constraint.date.before.not",
        "the date '%1$s*' should not be before '%2$s*'",
    ),
    (
        "assertor.constraint.date.before_or_equal",
        "the date '%1$s*' should be before or equal to '%2$s*'",
    ),
    (
        "assertor.constraint.date.before_or_equal.not",
        "the date '%1$s*' should not be before or equal to '%2$s*'",
    ),
    ("assertor.constraint.date.prerequisite", "the date cannot be null"),
];

fn compare<F>(key: &'static str, other: impl Timestamp, accept: F) -> AssertionStep
where
    F: Fn(DateTime<Utc>, DateTime<Utc>) -> bool + Send + Sync + 'static,
{
    let other = other.to_utc();
    AssertionStep::new(key, move |v| {
        v.as_date().is_some_and(|date| accept(date, other))
    })
    .requires_subject()
    .operand(other)
}

/// The subject is strictly after `other`.
pub fn is_after(other: impl Timestamp) -> AssertionStep {
    compare("assertor.constraint.date.after", other, |a, b| a > b)
}

/// The subject is after or at `other`.
pub fn is_after_or_equal(other: impl Timestamp) -> AssertionStep {
    compare("assertor.constraint.date.after_or_equal", other, |a, b| a >= b)
}

/// The subject is strictly before `other`.
pub fn is_before(other: impl Timestamp) -> AssertionStep {
    compare("assertor.constraint.date.before", other, |a, b| a < b)
}

/// The subject is before or at `other`.
pub fn is_before_or_equal(other: impl Timestamp) -> AssertionStep {
    compare("assertor.constraint.date.before_or_equal", other, |a, b| a <= b)
}

impl Assertor<kind::Date> {
    /// See [`is_after`].
    pub fn is_after(self, other: impl Timestamp) -> Self {
        self.verify(is_after(other))
    }

    /// See [`is_after_or_equal`].
    pub fn is_after_or_equal(self, other: impl Timestamp) -> Self {
        self.verify(is_after_or_equal(other))
    }

    /// See [`is_before`].
    pub fn is_before(self, other: impl Timestamp) -> Self {
        self.verify(is_before(other))
    }

    /// See [`is_before_or_equal`].
    pub fn is_before_or_equal(self, other: impl Timestamp) -> Self {
        self.verify(is_before_or_equal(other))
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, UNIX_EPOCH};

    use chrono::{DateTime, NaiveDate, Utc};

    use crate::that;
    use crate::value::{TypeTag, Value};

    #[test]
    fn test_ordering() {
        let earlier = UNIX_EPOCH;
        let later = UNIX_EPOCH + Duration::from_secs(60);
        assert!(that(later).is_after(earlier).is_ok());
        assert!(that(later).is_after_or_equal(later).is_ok());
        assert!(that(earlier).is_before(later).is_ok());
        assert!(!that(later).is_before_or_equal(earlier).is_ok());
    }

    #[test]
    fn test_message_renders_iso_dates() {
        let later = UNIX_EPOCH + Duration::from_secs(1_000_000_000);
        assert_eq!(
            that(UNIX_EPOCH).is_after(later).get_errors().as_deref(),
            Some("the date '1970-01-01T00:00:00Z' should be after '2001-09-09T01:46:40Z'")
        );
    }

    #[test]
    fn test_pre_epoch_subsecond_message() {
        let subject = UNIX_EPOCH - Duration::from_millis(500);
        assert_eq!(
            that(subject).is_after(UNIX_EPOCH).get_errors().as_deref(),
            Some("the date '1969-12-31T23:59:59Z' should be after '1970-01-01T00:00:00Z'")
        );
    }

    #[test]
    fn test_chrono_subjects_mix_with_system_time() {
        let zoned = DateTime::parse_from_rfc3339("1970-01-01T02:00:00+01:00").unwrap();
        assert!(that(zoned).is_after(UNIX_EPOCH).is_ok());
        assert!(that(zoned).is_before(Utc::now()).is_ok());

        let day = NaiveDate::from_ymd_opt(1970, 1, 2).unwrap();
        assert!(that(day).is_after(UNIX_EPOCH + Duration::from_secs(3_600)).is_ok());
        assert!(that(UNIX_EPOCH).is_before(day).is_ok());
        assert_eq!(Value::from(day), Value::from(UNIX_EPOCH + Duration::from_secs(86_400)));
    }

    #[test]
    fn test_chrono_type_tags() {
        use crate::kind::Subject;
        assert_eq!(<DateTime<Utc> as Subject>::TYPE, TypeTag::Calendar);
        assert_eq!(<NaiveDate as Subject>::TYPE, TypeTag::Temporal);
        assert_eq!(TypeTag::Temporal.name(), "temporal");
    }
}
