//! # Assertor
//!
//! Fluent assertion chains with short-circuit logical combination and lazy
//! error messages.
//!
//! ## Philosophy
//!
//! A chain is built first and evaluated once, at the call site:
//! - **Build** = each fluent call appends one step (a check, an operator,
//!   a negation, a new subject or a parenthesized sub-chain)
//! - **Evaluate** = one forward pass that stops as soon as the outcome is
//!   decided, formatting messages only when the caller asks for them
//!
//! ## Quick Example
//!
//! ```rust
//! use assertor::that;
//!
//! // 5 > 10 is false, 5 < 10 is true: the OR holds
//! assert!(that(5).is_gt(10).or().is_lt(10).is_ok());
//!
//! // failures carry a composed message
//! let errors = that("")
//!     .is_not_empty()
//!     .and_that(5)
//!     .is_gt(10)
//!     .get_errors();
//! assert_eq!(errors.as_deref(), Some("the char sequence should not be empty"));
//!
//! // or a Result
//! let value = that(42).is_positive().or_else_throw()?;
//! assert_eq!(value, assertor::Value::from(42));
//! # Ok::<(), assertor::AssertionError>(())
//! ```
//!
//! ## Custom checks
//!
//! Every check is an [`AssertionStep`]: a precondition, a predicate, a
//! message key and its operands. Steps of your own go through
//! [`Assertor::verify`]; see [`step`] for the contract.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod engine;
pub mod error;
pub mod fluent;
pub mod kind;
pub mod message;
pub mod operator;
pub mod parameter;
pub mod predicate;
pub mod settings;
pub mod step;
pub mod testing;
pub mod value;

// Re-exports
pub use engine::Evaluation;
pub use error::AssertionError;
pub use fluent::{that, that_with_mode, Assertor};
pub use message::{Catalog, Locale, Message};
pub use operator::LogicalOp;
pub use settings::Settings;
pub use step::{AnalysisMode, AssertionStep};
pub use value::Value;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::AssertionError;
    pub use crate::fluent::{that, that_with_mode, Assertor};
    pub use crate::kind::Subject;
    pub use crate::message::{Locale, Message};
    pub use crate::operator::LogicalOp;
    pub use crate::settings::Settings;
    pub use crate::step::{AnalysisMode, AssertionStep};
    pub use crate::value::{Object, Throwable, Value};
}
