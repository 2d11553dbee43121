//! Basic Chains Example
//!
//! Builds chains over several subject kinds, combines them with logical
//! operators and reads the results through each terminal operation.
//!
//! Run with: cargo run --example basic_chains

use assertor::{that, LogicalOp, Value};

fn main() {
    println!("=== Basic Chains Example ===\n");

    single_checks();
    operators();
    sub_expressions();
    terminals();
}

/// One check per chain
fn single_checks() {
    println!("--- Single Checks ---\n");

    println!("that(5).is_gt(10): {}", that(5).is_gt(10).is_ok()); // false
    println!("that(\"\").is_empty(): {}", that("").is_empty().is_ok()); // true
    println!(
        "that(vec![1, 2, 3]).contains(2): {}",
        that(vec![1, 2, 3]).contains(2).is_ok()
    ); // true

    if let Some(errors) = that(5).is_gt(10).get_errors() {
        println!("  message: {}", errors);
    }
    println!();
}

/// Operators between units, and how short-circuiting reports
fn operators() {
    println!("--- Operators ---\n");

    let chain = that(5).is_gt(10).or().is_lt(10);
    println!("5 > 10 OR 5 < 10: {}", chain.is_ok()); // true

    let chain = that("").is_not_empty().and_that(5).is_gt(10);
    println!("'' not empty AND 5 > 10: {}", chain.is_ok()); // false
    println!("  message: {:?}", chain.get_errors());

    let chain = that("").is_not_empty().or_that(5).is_gt(10);
    println!("'' not empty OR 5 > 10: {}", chain.is_ok()); // false
    println!("  message: {:?}", chain.get_errors());

    for op in LogicalOp::ALL {
        let ok = that(true).is_true().then_that(op, false).is_true().is_ok();
        println!("true {} false: {}", op, ok);
    }
    println!();
}

/// Parenthesized groups
fn sub_expressions() {
    println!("--- Sub-expressions ---\n");

    // 7 > 10 OR (7 < 10 AND 7 != 0)
    let chain = that(7)
        .is_gt(10)
        .or_sub(that(7).is_lt(10).and().is_not_equal(0));
    println!("7 > 10 OR (7 < 10 AND 7 != 0): {}", chain.is_ok()); // true

    let chain = that(7)
        .is_gt(10)
        .or_sub(that(7).is_lt(1).and().is_zero());
    println!("  message: {:?}", chain.get_errors());
    println!();
}

/// Reading the outcome
fn terminals() {
    println!("--- Terminals ---\n");

    let name = that("  ").is_not_blank().or_else("anonymous");
    println!("name: {}", name); // anonymous

    let age: Option<Value> = that(42).is_between(0, 150).get();
    println!("age: {:?}", age);

    match that(None::<i32>).is_positive().or_else_throw() {
        Ok(value) => println!("value: {}", value),
        Err(e) if e.is_precondition() => println!("precondition failed: {}", e),
        Err(e) => println!("invalid: {}", e),
    }
}
