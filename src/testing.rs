//! Testing utilities
//!
//! Assertion macros for chains, and property-based testing support for
//! [`LogicalOp`](crate::operator::LogicalOp) behind the `proptest` feature.
//!
//! # Assertion Macros
//!
//! ```rust
//! use assertor::{assert_invalid, assert_precondition_failed, assert_valid, that};
//!
//! assert_valid!(that(5).is_gt(1));
//! assert_invalid!(that(5).is_gt(10));
//! assert_invalid!(that(5).is_gt(10), "the number '5' should be greater than '10'");
//! assert_precondition_failed!(that(None::<i32>).is_gt(10));
//! ```

/// Assert that a chain holds.
///
/// Panics with the composed failure text otherwise.
///
/// # Example
///
/// ```rust
/// use assertor::{assert_valid, that};
///
/// assert_valid!(that("abc").has_length(3));
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($chain:expr) => {
        match $chain.or_else_throw() {
            Ok(_) => {}
            Err(e) => {
                panic!("Expected a valid chain, got: {}", e);
            }
        }
    };
}

/// Assert that a chain does not hold, optionally with a given message.
///
/// A precondition failure also counts as invalid.
///
/// # Example
///
/// ```rust
/// use assertor::{assert_invalid, that};
///
/// assert_invalid!(that(true).is_false());
/// assert_invalid!(that(true).is_false(), "the boolean should be false");
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($chain:expr) => {
        match $chain.or_else_throw() {
            Err(_) => {}
            Ok(v) => {
                panic!("Expected an invalid chain, got value: {:?}", v);
            }
        }
    };
    ($chain:expr, $expected:expr) => {
        match $chain.or_else_throw() {
            Err(e) => {
                assert_eq!(e.message(), $expected);
            }
            Ok(v) => {
                panic!(
                    "Expected an invalid chain with message {:?}, got value: {:?}",
                    $expected, v
                );
            }
        }
    };
}

/// Assert that a chain stopped on an unmet precondition.
///
/// # Example
///
/// ```rust
/// use assertor::{assert_precondition_failed, that};
///
/// assert_precondition_failed!(that(None::<&str>).contains("x"));
/// ```
#[macro_export]
macro_rules! assert_precondition_failed {
    ($chain:expr) => {
        match $chain.or_else_throw() {
            Err(e) if e.is_precondition() => {}
            Err(e) => {
                panic!("Expected a precondition failure, got: {}", e);
            }
            Ok(v) => {
                panic!("Expected a precondition failure, got value: {:?}", v);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for crate::operator::LogicalOp {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        proptest::sample::select(crate::operator::LogicalOp::ALL.to_vec()).boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::that;

    #[test]
    fn assert_valid_macro() {
        assert_valid!(that(1).is_positive());
    }

    #[test]
    fn assert_invalid_macro() {
        assert_invalid!(that(1).is_negative());
        assert_invalid!(that(1).is_negative(), "the number '1' should be negative");
    }

    #[test]
    fn assert_precondition_failed_macro() {
        assert_precondition_failed!(that(None::<f64>).is_zero());
    }

    #[test]
    #[should_panic(expected = "Expected a valid chain")]
    fn assert_valid_panics_on_invalid() {
        assert_valid!(that(1).is_negative());
    }

    #[test]
    #[should_panic(expected = "Expected an invalid chain")]
    fn assert_invalid_panics_on_valid() {
        assert_invalid!(that(1).is_positive());
    }

    #[test]
    #[should_panic(expected = "Expected a precondition failure")]
    fn assert_precondition_failed_panics_on_plain_failure() {
        assert_precondition_failed!(that(1).is_negative());
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::operator::LogicalOp;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn logical_op_arbitrary_generates_known_operators(op in any::<LogicalOp>()) {
                prop_assert!(LogicalOp::ALL.contains(&op));
            }
        }
    }
}
