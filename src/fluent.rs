//! The fluent builder
//!
//! Every call on an [`Assertor`] appends one node to its chain and returns
//! the builder, so a chain reads left to right:
//!
//! ```rust
//! use assertor::that;
//!
//! let ok = that("hello")
//!     .is_not_blank()
//!     .and()
//!     .starts_with("he")
//!     .and_that(5)
//!     .is_gt(2)
//!     .is_ok();
//! assert!(ok);
//! ```
//!
//! Nothing is evaluated until a terminal operation runs:
//!
//! | terminal | result |
//! |---|---|
//! | [`is_ok`](Assertor::is_ok) | `bool`, no message built |
//! | [`get_errors`](Assertor::get_errors) | failure text when invalid |
//! | [`or_else_throw`](Assertor::or_else_throw) | `Result<Value, AssertionError>` |
//! | [`get`](Assertor::get), [`or_else`](Assertor::or_else) | the last checked subject |
//!
//! Parenthesized sub-expressions are built as separate chains and joined
//! with `and_sub`, `or_sub` and friends:
//!
//! ```rust
//! use assertor::that;
//!
//! // 7 > 10 OR (7 < 10 AND 7 != 0)
//! let ok = that(7)
//!     .is_gt(10)
//!     .or_sub(that(7).is_lt(10).and().is_not_equal(0))
//!     .is_ok();
//! assert!(ok);
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::engine::Evaluation;
use crate::error::AssertionError;
use crate::kind::Subject;
use crate::message::{Locale, Message, MessageComposer};
use crate::operator::LogicalOp;
use crate::settings::Settings;
use crate::step::{AnalysisMode, AssertionStep, Chain, StepNode};
use crate::value::Value;

/// Start a chain on `subject`.
pub fn that<S: Subject>(subject: S) -> Assertor<S::Kind> {
    that_with_mode(subject, AnalysisMode::Standard)
}

/// Start a chain on `subject`, choosing how collection checks scan.
///
/// ```rust
/// use assertor::step::AnalysisMode;
/// use assertor::that_with_mode;
///
/// let big: Vec<u32> = (0..100_000).collect();
/// assert!(that_with_mode(big, AnalysisMode::Parallel).contains(99_999u32).is_ok());
/// ```
pub fn that_with_mode<S: Subject>(subject: S, mode: AnalysisMode) -> Assertor<S::Kind> {
    Assertor::from_chain(Chain::new(subject, S::TYPE, mode), Settings::default())
}

/// A chain under construction. `K` is the kind of the current subject.
pub struct Assertor<K> {
    chain: Chain,
    settings: Settings,
    _kind: PhantomData<fn() -> K>,
}

impl<K> Clone for Assertor<K> {
    fn clone(&self) -> Self {
        Assertor {
            chain: self.chain.clone(),
            settings: self.settings.clone(),
            _kind: PhantomData,
        }
    }
}

impl<K> fmt::Debug for Assertor<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Assertor")
            .field("kind", &std::any::type_name::<K>())
            .field("chain", &self.chain)
            .finish_non_exhaustive()
    }
}

impl<K> Assertor<K> {
    pub(crate) fn from_chain(chain: Chain, settings: Settings) -> Self {
        Assertor {
            chain,
            settings,
            _kind: PhantomData,
        }
    }

    fn push(mut self, node: StepNode) -> Self {
        self.chain = self.chain.push(node);
        self
    }

    fn retype<K2>(self) -> Assertor<K2> {
        Assertor::from_chain(self.chain, self.settings)
    }

    /// The chain built so far.
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// The chain, for evaluation elsewhere or reuse as a sub-expression.
    pub fn into_chain(self) -> Chain {
        self.chain
    }

    /// The message settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Use `settings` when composing messages.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Format numbers in messages with `locale`.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.settings = self.settings.with_locale(locale);
        self
    }

    /// Append a check. This is how every leaf check enters the chain, and
    /// the way to add checks of your own.
    ///
    /// ```rust
    /// use assertor::step::AssertionStep;
    /// use assertor::that;
    ///
    /// let even = AssertionStep::new("custom.even", |v| {
    ///     v.as_number().is_some_and(|n| n.as_f64() % 2.0 == 0.0)
    /// })
    /// .requires_subject()
    /// .with_message("%1$s* is odd");
    ///
    /// assert_eq!(that(3).verify(even).get_errors().as_deref(), Some("3 is odd"));
    /// ```
    pub fn verify(self, step: AssertionStep) -> Self {
        self.push(StepNode::Assertion(step))
    }

    /// Replace the message of the check just added.
    ///
    /// Only the most recent node is considered; if it is not a check, the
    /// call does nothing.
    pub fn with_message(mut self, message: impl Into<Message>) -> Self {
        match self.chain.last_assertion_mut() {
            Some(step) => step.set_user_message(message.into()),
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!("with_message ignored: the last node is not a check");
            }
        }
        self
    }

    /// Negate the next check. Two `not()` cancel out.
    pub fn not(self) -> Self {
        self.push(StepNode::Not(true))
    }

    /// Join the next unit with `op`.
    pub fn operator(self, op: LogicalOp) -> Self {
        self.push(StepNode::Operator(op))
    }

    /// Join the next unit with AND (also the default).
    pub fn and(self) -> Self {
        self.operator(LogicalOp::And)
    }

    /// Join the next unit with OR.
    pub fn or(self) -> Self {
        self.operator(LogicalOp::Or)
    }

    /// Join the next unit with XOR.
    pub fn xor(self) -> Self {
        self.operator(LogicalOp::Xor)
    }

    /// Join the next unit with NAND.
    pub fn nand(self) -> Self {
        self.operator(LogicalOp::Nand)
    }

    /// Join the next unit with NOR.
    pub fn nor(self) -> Self {
        self.operator(LogicalOp::Nor)
    }

    /// Switch to checking `subject`, joined to the result so far with `op`.
    pub fn then_that<S: Subject>(self, op: LogicalOp, subject: S) -> Assertor<S::Kind> {
        self.push(StepNode::NewSubject {
            subject: subject.into(),
            type_tag: S::TYPE,
            operator: op,
            checked: true,
        })
        .retype()
    }

    /// Switch to checking `subject`, joined with AND.
    pub fn and_that<S: Subject>(self, subject: S) -> Assertor<S::Kind> {
        self.then_that(LogicalOp::And, subject)
    }

    /// Switch to checking `subject`, joined with OR.
    pub fn or_that<S: Subject>(self, subject: S) -> Assertor<S::Kind> {
        self.then_that(LogicalOp::Or, subject)
    }

    /// Switch to checking `subject`, joined with XOR.
    pub fn xor_that<S: Subject>(self, subject: S) -> Assertor<S::Kind> {
        self.then_that(LogicalOp::Xor, subject)
    }

    /// Switch to checking `subject`, joined with NAND.
    pub fn nand_that<S: Subject>(self, subject: S) -> Assertor<S::Kind> {
        self.then_that(LogicalOp::Nand, subject)
    }

    /// Switch to checking `subject`, joined with NOR.
    pub fn nor_that<S: Subject>(self, subject: S) -> Assertor<S::Kind> {
        self.then_that(LogicalOp::Nor, subject)
    }

    /// Join a separately built chain as one parenthesized unit. `None`
    /// records a missing sub-expression, which fails as a precondition.
    pub fn sub(self, op: LogicalOp, sub: Option<Chain>) -> Self {
        self.operator(op).push(StepNode::Sub(sub.map(Box::new)))
    }

    /// `... AND (sub)`.
    pub fn and_sub<S>(self, sub: Assertor<S>) -> Self {
        self.sub(LogicalOp::And, Some(sub.into_chain()))
    }

    /// `... OR (sub)`.
    pub fn or_sub<S>(self, sub: Assertor<S>) -> Self {
        self.sub(LogicalOp::Or, Some(sub.into_chain()))
    }

    /// `... XOR (sub)`.
    pub fn xor_sub<S>(self, sub: Assertor<S>) -> Self {
        self.sub(LogicalOp::Xor, Some(sub.into_chain()))
    }

    /// `... NAND (sub)`.
    pub fn nand_sub<S>(self, sub: Assertor<S>) -> Self {
        self.sub(LogicalOp::Nand, Some(sub.into_chain()))
    }

    /// `... NOR (sub)`.
    pub fn nor_sub<S>(self, sub: Assertor<S>) -> Self {
        self.sub(LogicalOp::Nor, Some(sub.into_chain()))
    }

    /// Evaluate the chain with this builder's settings.
    pub fn evaluate(&self, load_message: bool) -> Evaluation {
        self.chain.combine(load_message, &self.settings)
    }

    /// Whether the chain holds. No message is built.
    pub fn is_ok(&self) -> bool {
        self.evaluate(false).is_valid()
    }

    /// The failure text, or `None` when the chain holds.
    pub fn get_errors(&self) -> Option<String> {
        self.failure().err().map(|err| err.message().to_owned())
    }

    /// The last checked subject, or the failure as an error.
    pub fn or_else_throw(&self) -> Result<Value, AssertionError> {
        self.failure()
    }

    /// Like [`or_else_throw`](Self::or_else_throw), mapping the failure
    /// into the caller's error type. The computed [`AssertionError`] is
    /// handed over so it can be kept as a source.
    ///
    /// ```rust
    /// use assertor::{that, AssertionError};
    ///
    /// #[derive(Debug)]
    /// struct Rejected(AssertionError);
    ///
    /// let err = that(-1).is_positive().or_else_throw_with(Rejected).unwrap_err();
    /// assert_eq!(err.0.message(), "the number '-1' should be positive");
    /// ```
    pub fn or_else_throw_with<E, F>(&self, f: F) -> Result<Value, E>
    where
        F: FnOnce(AssertionError) -> E,
    {
        self.failure().map_err(f)
    }

    /// Like [`or_else_throw`](Self::or_else_throw) with the failure text
    /// replaced by `message`, formatted against the chain's parameters.
    pub fn or_else_throw_message(
        &self,
        message: impl Into<Message>,
    ) -> Result<Value, AssertionError> {
        let evaluation = self.evaluate(false);
        if evaluation.is_valid() {
            return Ok(last_subject(&evaluation));
        }
        let text =
            MessageComposer::new(&self.settings).custom(&message.into(), evaluation.parameters());
        Err(if evaluation.precondition_passed() {
            AssertionError::Invalid { message: text }
        } else {
            AssertionError::Precondition { message: text }
        })
    }

    /// The last checked subject when the chain holds and it is not null.
    pub fn get(&self) -> Option<Value> {
        self.get_nullable().filter(|value| !value.is_null())
    }

    /// The last checked subject when the chain holds, null included.
    pub fn get_nullable(&self) -> Option<Value> {
        let evaluation = self.evaluate(false);
        evaluation.is_valid().then(|| last_subject(&evaluation))
    }

    /// The last checked subject when the chain holds, else `default`.
    pub fn or_else(&self, default: impl Into<Value>) -> Value {
        self.get_nullable().unwrap_or_else(|| default.into())
    }

    /// The last checked subject when the chain holds, else `f()`.
    pub fn or_else_get<V, F>(&self, f: F) -> Value
    where
        V: Into<Value>,
        F: FnOnce() -> V,
    {
        self.get_nullable().unwrap_or_else(|| f().into())
    }

    fn failure(&self) -> Result<Value, AssertionError> {
        let evaluation = self.evaluate(true);
        if evaluation.is_valid() {
            return Ok(last_subject(&evaluation));
        }
        let message = evaluation
            .message()
            .map(str::to_owned)
            .unwrap_or_else(|| self.settings.catalog().fallback().to_owned());
        Err(if evaluation.precondition_passed() {
            AssertionError::Invalid { message }
        } else {
            AssertionError::Precondition { message }
        })
    }
}

fn last_subject(evaluation: &Evaluation) -> Value {
    evaluation.last_subject().cloned().unwrap_or_default()
}
