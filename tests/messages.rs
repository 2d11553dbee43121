//! Integration tests for message composition

use assertor::{that, Catalog, Locale, Message, Settings};

#[test]
fn test_custom_message_with_parameters() {
    let errors = that(3)
        .is_gt(10)
        .with_message("%1$s* is not above %2$s*")
        .get_errors();
    assert_eq!(errors.as_deref(), Some("3 is not above 10"));
}

#[test]
fn test_custom_message_with_arguments() {
    let errors = that(3)
        .is_gt(10)
        .with_message(Message::new("%s: got %1$s*, wanted more than %2$s*").arg("count"))
        .get_errors();
    assert_eq!(errors.as_deref(), Some("count: got 3, wanted more than 10"));
}

#[test]
fn test_custom_message_applies_to_last_check_only() {
    let errors = that(3)
        .is_negative()
        .or()
        .is_gt(10)
        .with_message("too small")
        .get_errors();
    assert_eq!(
        errors.as_deref(),
        Some("the number '3' should be negative OR too small")
    );
}

#[test]
fn test_custom_message_replaces_precondition_text() {
    let err = that(None::<i32>)
        .is_positive()
        .with_message("a count is required")
        .or_else_throw()
        .unwrap_err();
    assert!(err.is_precondition());
    assert_eq!(err.message(), "a count is required");
}

#[test]
fn test_unresolved_placeholders_stay_literal() {
    let errors = that(1)
        .is_negative()
        .with_message("%3$s* and %s")
        .get_errors();
    assert_eq!(errors.as_deref(), Some("%3$s* and %s"));
}

#[test]
fn test_locale_formats_numbers() {
    let errors = that(1.5)
        .is_gt(2.5)
        .with_locale(Locale::GERMANY)
        .get_errors();
    assert_eq!(
        errors.as_deref(),
        Some("the number '1,5' should be greater than '2,5'")
    );
}

#[test]
fn test_grouping_placeholder() {
    let errors = that(1_234_567)
        .is_lt(1000)
        .with_message(Message::new("%1$,d*").locale(Locale::GERMANY))
        .get_errors();
    assert_eq!(errors.as_deref(), Some("1.234.567"));
}

#[test]
fn test_settings_override_template() {
    let settings = Settings::new().with_template(
        "assertor.constraint.number.positive",
        "%1$s* doit être positif",
    );
    let errors = that(-2).is_positive().with_settings(settings).get_errors();
    assert_eq!(errors.as_deref(), Some("-2 doit être positif"));
}

#[test]
fn test_properties_catalog() {
    let overrides = Catalog::from_properties(
        "# french\n\
         assertor.constraint.string.not_empty = la chaîne ne doit pas être vide\n",
    )
    .unwrap();
    let catalog = Catalog::builtin().merge(overrides);
    let errors = that("")
        .is_not_empty()
        .with_settings(Settings::new().with_catalog(catalog))
        .get_errors();
    assert_eq!(errors.as_deref(), Some("la chaîne ne doit pas être vide"));
}

#[test]
fn test_missing_template_uses_fallback() {
    let errors = that(1)
        .is_negative()
        .with_settings(Settings::new().with_catalog(Catalog::empty()))
        .get_errors();
    assert_eq!(errors.as_deref(), Some("Assertion failed"));
}

#[test]
fn test_or_else_throw_message() {
    let err = that("abc")
        .has_length(5)
        .or_else_throw_message("'%1$s*' must have %2$s* characters")
        .unwrap_err();
    assert!(!err.is_precondition());
    assert_eq!(err.message(), "'abc' must have 5 characters");
}

#[test]
fn test_invalid_combination_text() {
    let errors = that(1).is_positive().nand().is_zero().get_errors();
    assert_eq!(errors.as_deref(), Some("the combination of checks is invalid"));
}

#[test]
fn test_negated_template() {
    let errors = that(vec![1, 2]).not().contains(2).get_errors();
    assert_eq!(
        errors.as_deref(),
        Some("the iterable '[1, 2]' should not contain '2'")
    );
}

#[cfg(feature = "serde")]
mod serde_tests {
    use assertor::{that, Catalog, Settings};

    #[test]
    fn test_catalog_from_json() {
        let catalog: Catalog = serde_json::from_str(
            r#"{ "assertor.constraint.boolean.true": "expected true, got %1$s*" }"#,
        )
        .unwrap();
        let errors = that(false)
            .is_true()
            .with_settings(Settings::new().with_catalog(catalog))
            .get_errors();
        assert_eq!(errors.as_deref(), Some("expected true, got false"));
    }

    #[test]
    fn test_catalog_json_roundtrip_keeps_entries() {
        let catalog = Catalog::empty().with("a.b", "x %s");
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(json, r#"{"a.b":"x %s"}"#);
    }
}
