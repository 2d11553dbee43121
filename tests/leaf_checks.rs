//! Integration tests for the checks of each subject kind

use std::collections::{BTreeMap, HashSet};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use assertor::step::{AnalysisMode, AssertionStep};
use assertor::value::{Object, Throwable, TypeInfo, TypeTag, Variant};
use assertor::{that, that_with_mode, Value};

#[derive(Debug, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

#[test]
fn test_object_checks() {
    assert!(that(Object(Point { x: 1, y: 2 }))
        .is_not_null()
        .and()
        .is_equal(Value::object(Point { x: 1, y: 2 }))
        .is_ok());
    assert!(that(None::<i32>).is_null().is_ok());
    assert!(that(1u8).is_equal(1i64).is_ok());
    assert!(that(vec![1]).has_type(TypeTag::Iterable).is_ok());
    assert_eq!(
        that(Object(Point { x: 0, y: 0 }))
            .is_not_equal(Value::object(Point { x: 0, y: 0 }))
            .get_errors()
            .as_deref(),
        Some("the object 'Point { x: 0, y: 0 }' should be different from 'Point { x: 0, y: 0 }'")
    );
}

#[test]
fn test_number_checks() {
    assert!(that(0).is_zero().is_ok());
    assert!(that(-0.5).is_negative().is_ok());
    assert!(that(10u64).is_gte(10).and().is_lte(10i8).is_ok());
    assert!(that(5).is_between(1, 10).is_ok());
    assert!(!that(f64::NAN).is_gt(0).is_ok());
}

#[test]
fn test_between_with_inverted_bounds() {
    let err = that(5).is_between(10, 1).or_else_throw().unwrap_err();
    assert!(err.is_precondition());
    assert_eq!(
        err.message(),
        "the number cannot be null and '10' cannot be greater than '1'"
    );
}

#[test]
fn test_string_checks() {
    assert!(that("  ").is_blank().and().is_not_empty().is_ok());
    assert!(that("hello world")
        .starts_with("hello")
        .and()
        .ends_with("world")
        .and()
        .contains("o w")
        .is_ok());
    assert!(that("abc123").finds(r"\d+").is_ok());
    assert!(!that("abc123").matches(r"\d+").is_ok());
}

#[test]
fn test_string_preconditions() {
    let err = that("abc").contains("").or_else_throw().unwrap_err();
    assert!(err.is_precondition());

    let err = that("abc").matches("(").or_else_throw().unwrap_err();
    assert!(err.is_precondition());
    assert_eq!(
        err.message(),
        "the char sequence cannot be null and '(' must be a valid pattern"
    );
}

#[test]
fn test_collection_checks() {
    let set: HashSet<&str> = ["a", "b"].into_iter().collect();
    assert!(that(set).has_size(2).and().contains_all(["a", "b"]).is_ok());
    assert!(that([1, 2, 3]).contains_any([0, 3]).is_ok());
    assert!(that(Vec::<i32>::new()).is_empty().is_ok());
    assert!(that(vec![2, 4, 6])
        .all_match(|v| v.as_number().is_some_and(|n| n.as_f64() % 2.0 == 0.0))
        .is_ok());
    assert!(!that(vec![1, 3]).any_match(|v| *v == Value::from(2)).is_ok());
}

#[test]
fn test_parallel_scan_agrees_with_standard() {
    let items: Vec<u32> = (0..10_000).collect();
    for mode in [AnalysisMode::Standard, AnalysisMode::Parallel] {
        assert!(that_with_mode(items.clone(), mode).contains(9_999u32).is_ok());
        assert!(!that_with_mode(items.clone(), mode).contains(10_000u32).is_ok());
        assert!(that_with_mode(items.clone(), mode)
            .all_match(|v| !v.is_null())
            .is_ok());
    }
}

#[test]
fn test_map_checks() {
    let map: BTreeMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
    assert!(that(map.clone())
        .contains_key("a")
        .and()
        .contains_value(2)
        .and()
        .contains_entry("b", 2)
        .and()
        .contains_all_keys(["a", "b"])
        .is_ok());
    assert_eq!(
        that(map).contains_entry("a", 2).get_errors().as_deref(),
        Some("the map '{a=1, b=2}' should contain the entry 'a=2'")
    );
}

#[test]
fn test_date_checks() {
    let epoch = UNIX_EPOCH;
    let later = epoch + Duration::from_secs(86_400);
    assert!(that(later).is_after(epoch).and().is_before_or_equal(later).is_ok());
    assert!(that(SystemTime::now()).is_after_or_equal(later).is_ok());
    assert_eq!(
        that(epoch).is_after(later).get_errors().as_deref(),
        Some("the date '1970-01-01T00:00:00Z' should be after '1970-01-02T00:00:00Z'")
    );
}

#[test]
fn test_enum_class_and_error_checks() {
    assert!(that(Variant::new("Color", "Red", 0))
        .has_name("Red")
        .and()
        .has_ordinal(0)
        .is_ok());
    assert!(that(TypeInfo::of::<Point>()).has_simple_name("Point").is_ok());
    let err = Throwable::new(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
    assert!(that(err).has_message("boom").and().not().has_cause().is_ok());
}

#[test]
fn test_custom_step() {
    let short = AssertionStep::new("custom.short", |v| v.len().is_some_and(|n| n < 4))
        .requires_subject()
        .with_message("'%1$s*' is too long");
    assert_eq!(
        that("assertor").verify(short).get_errors().as_deref(),
        Some("'assertor' is too long")
    );
}
