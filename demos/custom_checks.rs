//! Custom Checks Example
//!
//! Shows user-defined steps, custom messages, locales and message catalogs.
//!
//! Run with: cargo run --example custom_checks

use assertor::step::AssertionStep;
use assertor::value::Object;
use assertor::{that, AssertionError, Catalog, Locale, Message, Settings};

#[derive(Debug, Clone, PartialEq)]
struct User {
    name: String,
    age: u32,
}

#[derive(Debug, thiserror::Error)]
enum RegistrationError {
    #[error("registration rejected: {0}")]
    Rejected(#[source] AssertionError),
}

fn main() {
    println!("=== Custom Checks Example ===\n");

    custom_steps();
    custom_messages();
    catalogs();
    real_world_example();
}

fn adult() -> AssertionStep {
    AssertionStep::new("demo.user.adult", |v| {
        v.downcast_ref::<User>().is_some_and(|user| user.age >= 18)
    })
    .requires_subject()
    .with_message("the user '%1$s*' should be an adult")
}

/// Steps of your own go through `verify`
fn custom_steps() {
    println!("--- Custom Steps ---\n");

    let alice = User {
        name: "alice".to_string(),
        age: 17,
    };
    let chain = that(Object(alice)).verify(adult());
    println!("alice is an adult: {}", chain.is_ok());
    println!("  message: {:?}", chain.get_errors());

    let even = |v: &assertor::Value| v.as_number().is_some_and(|n| n.as_f64() % 2.0 == 0.0);
    println!("4 validates even: {}", that(4).validates(even).is_ok());
    println!();
}

/// Messages replaced per check or per terminal
fn custom_messages() {
    println!("--- Custom Messages ---\n");

    let errors = that(3)
        .is_gt(10)
        .with_message(Message::new("%s: got %1$s*, wanted more than %2$s*").arg("count"))
        .get_errors();
    println!("{:?}", errors);

    let errors = that(1_234_567.891)
        .is_lt(1000)
        .with_message(Message::new("%1$,.2f* is too large").locale(Locale::GERMANY))
        .get_errors();
    println!("{:?}", errors);

    let result = that("abc")
        .has_length(5)
        .or_else_throw_message("'%1$s*' must have %2$s* characters");
    println!("{:?}", result);
    println!();
}

/// Templates loaded from properties text
fn catalogs() {
    println!("--- Catalogs ---\n");

    let overrides = Catalog::from_properties(
        "assertor.constraint.number.gt = le nombre %1$s* doit être supérieur à %2$s*\n",
    );
    match overrides {
        Ok(overrides) => {
            let settings = Settings::new()
                .with_locale(Locale::FRANCE)
                .with_catalog(Catalog::builtin().merge(overrides));
            let errors = that(2.5).is_gt(10).with_settings(settings).get_errors();
            println!("{:?}", errors);
        }
        Err(e) => println!("bad properties: {}", e),
    }
    println!();
}

fn register(name: &str, email: &str, age: i64) -> Result<(), RegistrationError> {
    that(name)
        .is_not_blank()
        .and_that(email)
        .matches(r"[^@\s]+@[^@\s]+\.[a-z]+")
        .and_that(age)
        .is_between(18, 120)
        .or_else_throw_with(RegistrationError::Rejected)?;
    Ok(())
}

/// A registration form
fn real_world_example() {
    println!("--- Real World: Registration ---\n");

    for (name, email, age) in [
        ("bob", "bob@example.com", 30),
        ("", "carol@example.com", 25),
        ("dave", "not-an-email", 40),
        ("erin", "erin@example.com", 12),
    ] {
        match register(name, email, age) {
            Ok(()) => println!("{:?}: accepted", name),
            Err(e) => println!("{:?}: {}", name, e),
        }
    }
}
