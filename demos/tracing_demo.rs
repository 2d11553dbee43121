//! Demonstrates tracing integration with chain evaluation
//!
//! Run with: cargo run --example tracing_demo --features tracing

use assertor::that;

fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Starting tracing demo");

    // Each node is traced; the OR short-circuits once the first unit holds
    let ok = that(5).is_lt(10).or().is_gt(100).and().is_zero().is_ok();
    tracing::info!("short-circuit chain: {}", ok);

    // A panicking check is logged and counts as false
    let ok = that(vec![1, 2, 3])
        .validates(|v| v.as_list().map(|items| items[10] == items[0]).unwrap_or(false))
        .is_ok();
    tracing::info!("panicking check: {}", ok);

    // A null subject stops the chain on its precondition
    match that(None::<i32>).is_positive().or_else_throw() {
        Ok(value) => tracing::info!("value: {}", value),
        Err(e) => tracing::error!("chain failed: {}", e),
    }

    // with_message after an operator has no check to attach to
    let errors = that(1).is_negative().and().with_message("ignored").get_errors();
    tracing::info!("errors: {:?}", errors);
}
