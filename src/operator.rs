//! Logical operators joining the units of a chain
//!
//! Operators combine the running result of a chain (`previous`) with the
//! result of the next unit (`current`). NAND and NOR are applied step-wise on
//! the negated operands rather than as a negation of the final AND/OR:
//!
//! | operator | result |
//! |---|---|
//! | AND | `previous ∧ current` |
//! | OR | `previous ∨ current` |
//! | XOR | `previous ⊕ current` |
//! | NAND | `¬previous ∧ ¬current` |
//! | NOR | `¬previous ∨ ¬current` |
//!
//! # Example
//!
//! ```rust
//! use assertor::operator::{is_valid, LogicalOp};
//!
//! assert!(!LogicalOp::Nand.combine(true, true));
//! assert!(LogicalOp::Nor.combine(false, false));
//! assert!(is_valid(true, true, None)); // no operator means AND
//! ```

use std::fmt;

/// A logical operator between two units of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogicalOp {
    /// Conjunction, the default.
    And,
    /// Disjunction.
    Or,
    /// Exclusive disjunction.
    Xor,
    /// Both sides false.
    Nand,
    /// At least one side false.
    Nor,
}

impl LogicalOp {
    /// Every operator.
    pub const ALL: [LogicalOp; 5] = [
        LogicalOp::And,
        LogicalOp::Or,
        LogicalOp::Xor,
        LogicalOp::Nand,
        LogicalOp::Nor,
    ];

    /// Combine the running result with the next unit's result.
    #[inline]
    pub fn combine(self, previous: bool, current: bool) -> bool {
        match self {
            LogicalOp::And => previous && current,
            LogicalOp::Or => previous || current,
            LogicalOp::Xor => previous ^ current,
            LogicalOp::Nand => !previous && !current,
            LogicalOp::Nor => !previous || !current,
        }
    }

    /// The outcome of the whole chain if it is already decided by the
    /// running result, whatever the remaining units evaluate to.
    ///
    /// `Some(true)` for `valid OR` and `invalid NOR`, `Some(false)` for
    /// `valid NAND` and `invalid AND`.
    ///
    /// ```rust
    /// use assertor::operator::LogicalOp;
    ///
    /// assert_eq!(LogicalOp::Or.short_circuit(true), Some(true));
    /// assert_eq!(LogicalOp::And.short_circuit(false), Some(false));
    /// assert_eq!(LogicalOp::Xor.short_circuit(true), None);
    /// ```
    pub fn short_circuit(self, valid: bool) -> Option<bool> {
        match (self, valid) {
            (LogicalOp::Or, true) | (LogicalOp::Nor, false) => Some(true),
            (LogicalOp::Nand, true) | (LogicalOp::And, false) => Some(false),
            _ => None,
        }
    }

    /// Upper-case token used to join messages.
    pub fn token(self) -> &'static str {
        match self {
            LogicalOp::And => "AND",
            LogicalOp::Or => "OR",
            LogicalOp::Xor => "XOR",
            LogicalOp::Nand => "NAND",
            LogicalOp::Nor => "NOR",
        }
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Combine `previous` and `current`; a missing operator behaves as AND.
#[inline]
pub fn is_valid(previous: bool, current: bool, operator: Option<LogicalOp>) -> bool {
    operator.unwrap_or(LogicalOp::And).combine(previous, current)
}
