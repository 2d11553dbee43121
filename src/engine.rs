//! The combination engine
//!
//! [`combine`] evaluates a [`Chain`] in a single forward pass. It keeps a
//! running result, applies each unit through the pending [`LogicalOp`]
//! (AND when none was given), and stops as soon as the outcome is decided:
//!
//! - `valid OR` and `invalid NOR` end the walk as valid
//! - `valid NAND` and `invalid AND` end the walk as invalid
//!
//! A check whose precondition does not hold ends the walk at once. No
//! operator can rescue it.
//!
//! Message text is only built when `load_message` is set, so a plain
//! [`is_ok`](crate::Assertor::is_ok) never formats anything.
//!
//! # Leaf panics
//!
//! A check that panics is treated as a failed check and a panicking
//! precondition as an unmet one. The panic is logged through `tracing` when
//! the `tracing` feature is enabled.
//!
//! # Example
//!
//! ```rust
//! use assertor::engine::combine;
//! use assertor::settings::Settings;
//! use assertor::that;
//!
//! let chain = that(5).is_gt(10).or().is_lt(10).into_chain();
//! let evaluation = combine(&chain, true, &Settings::default());
//! assert!(evaluation.is_valid());
//! assert_eq!(evaluation.message(), None);
//! ```

use std::ops::ControlFlow;
use std::panic::{self, AssertUnwindSafe};

use crate::message::MessageComposer;
use crate::operator::{self, LogicalOp};
use crate::parameter::{self, Parameter};
use crate::settings::Settings;
use crate::step::{AssertionStep, Chain, StepNode};
use crate::value::{TypeTag, Value};

static NULL: Value = Value::Null;

/// Outcome of evaluating a chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    precondition_passed: bool,
    valid: bool,
    message: Option<String>,
    parameters: Vec<Parameter>,
}

impl Evaluation {
    /// Whether every precondition that was reached held.
    pub fn precondition_passed(&self) -> bool {
        self.precondition_passed
    }

    /// Whether the chain holds. Always false after a precondition failure.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Failure text; `None` when valid or when messages were not requested.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Subjects and operands recorded up to where evaluation stopped.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// The most recent checked subject.
    pub fn last_subject(&self) -> Option<&Value> {
        parameter::last_checked(&self.parameters)
    }

    pub(crate) fn into_parts(self) -> (bool, bool, Option<String>, Vec<Parameter>) {
        (
            self.precondition_passed,
            self.valid,
            self.message,
            self.parameters,
        )
    }
}

/// Evaluate `chain`, composing messages only when `load_message` is set.
pub fn combine(chain: &Chain, load_message: bool, settings: &Settings) -> Evaluation {
    let mut walk = Walk::new(load_message, settings);
    for node in chain.nodes() {
        if let ControlFlow::Break(evaluation) = walk.step(node) {
            return evaluation;
        }
    }
    walk.finish()
}

struct Walk<'a> {
    composer: MessageComposer<'a>,
    settings: &'a Settings,
    load_message: bool,
    not: bool,
    valid: bool,
    operator: Option<LogicalOp>,
    subject: &'a Value,
    type_tag: TypeTag,
    buffer: String,
    parameters: Vec<Parameter>,
}

impl<'a> Walk<'a> {
    fn new(load_message: bool, settings: &'a Settings) -> Self {
        Walk {
            composer: MessageComposer::new(settings),
            settings,
            load_message,
            not: false,
            valid: true,
            operator: None,
            subject: &NULL,
            type_tag: TypeTag::Unknown,
            buffer: String::new(),
            parameters: Vec::new(),
        }
    }

    fn step(&mut self, node: &'a StepNode) -> ControlFlow<Evaluation> {
        #[cfg(feature = "tracing")]
        tracing::trace!(node = node_name(node), valid = self.valid, "processing node");

        match node {
            StepNode::Creation {
                subject, type_tag, ..
            } => {
                self.subject = subject;
                self.type_tag = *type_tag;
                self.parameters
                    .push(Parameter::subject(subject.clone(), *type_tag));
                ControlFlow::Continue(())
            }
            StepNode::Assertion(step) => self.assertion(step),
            StepNode::Operator(op) => {
                self.operator = Some(*op);
                self.short_circuit(*op)
            }
            StepNode::Not(negate) => {
                self.not ^= *negate;
                ControlFlow::Continue(())
            }
            StepNode::NewSubject {
                subject,
                type_tag,
                operator,
                checked,
            } => {
                self.operator = Some(*operator);
                self.subject = subject;
                self.type_tag = *type_tag;
                self.parameters
                    .push(Parameter::new(subject.clone(), *type_tag, *checked));
                self.short_circuit(*operator)
            }
            StepNode::Sub(sub) => self.sub(sub.as_deref()),
        }
    }

    fn assertion(&mut self, step: &AssertionStep) -> ControlFlow<Evaluation> {
        self.parameters.extend(step.operands().iter().cloned());
        let not = std::mem::take(&mut self.not);
        let operator = self.operator.take();
        let subject = self.subject;

        let pre_checked = guarded(step.message_key(), "precondition", || {
            step.pre_check(subject)
        });
        if !pre_checked {
            #[cfg(feature = "tracing")]
            tracing::debug!(key = step.message_key(), "precondition not met");
            let message = self
                .load_message
                .then(|| self.composer.precondition(step, &self.local(step)));
            return ControlFlow::Break(self.precondition_failed(message));
        }

        let raw = guarded(step.message_key(), "check", || step.check(subject, not));
        let result = if step.is_not_applied_by_checker() {
            raw
        } else {
            raw ^ not
        };
        let op = operator.unwrap_or(LogicalOp::And);
        self.valid = operator::is_valid(self.valid, result, operator);

        if self.load_message {
            if self.valid {
                self.buffer.clear();
            } else if caused_failure(result, op) {
                // a passing check can only break xor, nand or nor
                let text = if result {
                    self.composer.invalid_combination()
                } else {
                    self.composer.failure(step, not, &self.local(step))
                };
                self.append(op, &text);
            }
        }
        ControlFlow::Continue(())
    }

    fn sub(&mut self, sub: Option<&Chain>) -> ControlFlow<Evaluation> {
        let operator = self.operator.take();
        let Some(chain) = sub else {
            let message = self.load_message.then(|| self.composer.missing_sub());
            return ControlFlow::Break(self.precondition_failed(message));
        };

        let (precondition_passed, result, message, parameters) =
            combine(chain, self.load_message, self.settings).into_parts();
        if !precondition_passed {
            #[cfg(feature = "tracing")]
            tracing::debug!("precondition failure propagated from sub-expression");
            self.parameters.extend(parameters);
            return ControlFlow::Break(self.precondition_failed(message));
        }

        let op = operator.unwrap_or(LogicalOp::And);
        self.valid = operator::is_valid(self.valid, result, operator);
        self.parameters.extend(parameters);

        if self.load_message {
            if self.valid {
                self.buffer.clear();
            } else if caused_failure(result, op) {
                let inner = message.unwrap_or_else(|| self.composer.invalid_combination());
                let text = self.composer.sub(&inner);
                self.append(op, &text);
            }
        }
        ControlFlow::Continue(())
    }

    fn short_circuit(&mut self, op: LogicalOp) -> ControlFlow<Evaluation> {
        match op.short_circuit(self.valid) {
            Some(true) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(operator = %op, "short-circuit: valid");
                self.valid = true;
                ControlFlow::Break(self.done(None))
            }
            Some(false) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(operator = %op, "short-circuit: invalid");
                self.valid = false;
                let message = self.load_message.then(|| self.failure_text());
                ControlFlow::Break(self.done(message))
            }
            None => ControlFlow::Continue(()),
        }
    }

    fn finish(mut self) -> Evaluation {
        let message = (!self.valid && self.load_message).then(|| self.failure_text());
        self.done(message)
    }

    fn failure_text(&mut self) -> String {
        if self.buffer.is_empty() {
            self.composer.invalid_combination()
        } else {
            std::mem::take(&mut self.buffer)
        }
    }

    fn done(&mut self, message: Option<String>) -> Evaluation {
        Evaluation {
            precondition_passed: true,
            valid: self.valid,
            message,
            parameters: std::mem::take(&mut self.parameters),
        }
    }

    fn precondition_failed(&mut self, message: Option<String>) -> Evaluation {
        Evaluation {
            precondition_passed: false,
            valid: false,
            message,
            parameters: std::mem::take(&mut self.parameters),
        }
    }

    fn append(&mut self, op: LogicalOp, text: &str) {
        if !self.buffer.is_empty() {
            self.buffer.push(' ');
            self.buffer.push_str(op.token());
            self.buffer.push(' ');
        }
        self.buffer.push_str(text);
    }

    /// The current subject followed by the step's operands.
    fn local(&self, step: &AssertionStep) -> Vec<Parameter> {
        let mut local = Vec::with_capacity(step.operands().len() + 1);
        local.push(Parameter::subject(self.subject.clone(), self.type_tag));
        local.extend(step.operands().iter().cloned());
        local
    }
}

/// Whether the unit just combined is a cause of the failure. Under AND a
/// passing unit after an earlier failure adds nothing to report.
fn caused_failure(result: bool, op: LogicalOp) -> bool {
    !result || op != LogicalOp::And
}

fn guarded(key: &str, stage: &str, f: impl FnOnce() -> bool) -> bool {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(_) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(key, stage, "leaf {} panicked; treated as false", stage);
            #[cfg(not(feature = "tracing"))]
            let _ = (key, stage);
            false
        }
    }
}

#[cfg(feature = "tracing")]
fn node_name(node: &StepNode) -> &'static str {
    match node {
        StepNode::Creation { .. } => "creation",
        StepNode::Assertion(_) => "assertion",
        StepNode::Operator(_) => "operator",
        StepNode::Not(_) => "not",
        StepNode::NewSubject { .. } => "new-subject",
        StepNode::Sub(_) => "sub",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::AnalysisMode;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn chain(subject: impl Into<Value>) -> Chain {
        let subject = subject.into();
        let tag = subject.type_tag();
        Chain::new(subject, tag, AnalysisMode::Standard)
    }

    fn fixed(result: bool) -> StepNode {
        let key = if result { "test.pass" } else { "test.fail" };
        StepNode::Assertion(AssertionStep::new(key, move |_| result))
    }

    fn settings() -> Settings {
        Settings::new()
            .with_template("test.fail", "fail(%1$s*)")
            .with_template("test.fail.not", "not fail(%1$s*)")
            .with_template("test.pass", "pass(%1$s*)")
            .with_template("test.pass.not", "not pass(%1$s*)")
    }

    fn eval(chain: &Chain) -> Evaluation {
        combine(chain, true, &settings())
    }

    #[test]
    fn test_empty_chain_is_valid() {
        let evaluation = eval(&chain(1));
        assert!(evaluation.is_valid());
        assert!(evaluation.precondition_passed());
        assert_eq!(evaluation.last_subject(), Some(&Value::from(1)));
    }

    #[test]
    fn test_implicit_and() {
        let c = chain(1).push(fixed(true)).push(fixed(false));
        let evaluation = eval(&c);
        assert!(!evaluation.is_valid());
        assert_eq!(evaluation.message(), Some("fail(1)"));
    }

    #[test]
    fn test_passing_unit_after_failure_adds_no_text() {
        let c = chain(1).push(fixed(false)).push(fixed(true));
        assert_eq!(eval(&c).message(), Some("fail(1)"));
    }

    #[test]
    fn test_operator_token_joins_messages() {
        let c = chain(2)
            .push(fixed(false))
            .push(StepNode::Operator(LogicalOp::Or))
            .push(fixed(false));
        assert_eq!(eval(&c).message(), Some("fail(2) OR fail(2)"));
    }

    #[test]
    fn test_buffer_cleared_when_result_recovers() {
        let c = chain(3)
            .push(fixed(false))
            .push(StepNode::Operator(LogicalOp::Xor))
            .push(fixed(true))
            .push(StepNode::Operator(LogicalOp::Xor))
            .push(fixed(true));
        let evaluation = eval(&c);
        assert!(!evaluation.is_valid());
        assert_eq!(
            evaluation.message(),
            Some("the combination of checks is invalid")
        );
    }

    #[test]
    fn test_passing_check_breaking_xor_uses_generic_text() {
        let c = chain(2)
            .push(fixed(true))
            .push(StepNode::Operator(LogicalOp::Xor))
            .push(fixed(true));
        assert_eq!(
            eval(&c).message(),
            Some("the combination of checks is invalid")
        );
    }

    #[test]
    fn test_walk_continues_after_sub() {
        let sub = chain(1).push(fixed(true));
        let c = chain(1)
            .push(fixed(false))
            .push(StepNode::Operator(LogicalOp::Or))
            .push(StepNode::Sub(Some(Box::new(sub))))
            .push(StepNode::Operator(LogicalOp::And))
            .push(fixed(false));
        let evaluation = eval(&c);
        assert!(!evaluation.is_valid());
        assert_eq!(evaluation.message(), Some("fail(1)"));
    }

    #[test]
    fn test_not_selects_negated_template() {
        let c = chain(4).push(StepNode::Not(true)).push(fixed(true));
        assert_eq!(eval(&c).message(), Some("not pass(4)"));
    }

    #[test]
    fn test_not_is_reset_after_assertion() {
        let c = chain(4)
            .push(StepNode::Not(true))
            .push(fixed(false))
            .push(fixed(true));
        assert!(eval(&c).is_valid());
    }

    #[test]
    fn test_or_short_circuit_skips_rest() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let counted = AssertionStep::new("test.fail", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            false
        });
        let c = chain(1)
            .push(fixed(true))
            .push(StepNode::Operator(LogicalOp::Or))
            .push(StepNode::Assertion(counted));
        assert!(eval(&c).is_valid());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_and_short_circuit_reports_buffer() {
        let c = chain(1)
            .push(fixed(false))
            .push(StepNode::Operator(LogicalOp::And))
            .push(fixed(true));
        let evaluation = eval(&c);
        assert!(!evaluation.is_valid());
        assert_eq!(evaluation.message(), Some("fail(1)"));
    }

    #[test]
    fn test_nand_short_circuit_uses_generic_text() {
        let c = chain(1)
            .push(StepNode::Operator(LogicalOp::Nand))
            .push(fixed(false));
        let evaluation = eval(&c);
        assert!(!evaluation.is_valid());
        assert_eq!(
            evaluation.message(),
            Some("the combination of checks is invalid")
        );
    }

    #[test]
    fn test_nor_short_circuit_on_invalid() {
        let c = chain(1)
            .push(fixed(false))
            .push(StepNode::Operator(LogicalOp::Nor))
            .push(fixed(true));
        let evaluation = eval(&c);
        assert!(evaluation.is_valid());
        assert_eq!(evaluation.message(), None);
    }

    #[test]
    fn test_precondition_failure_is_not_rescued() {
        let strict = AssertionStep::new("test.pass", |_| true).requires_subject();
        let c = chain(Value::Null)
            .push(fixed(false))
            .push(StepNode::Operator(LogicalOp::Or))
            .push(StepNode::Assertion(strict));
        let evaluation = eval(&c);
        assert!(!evaluation.precondition_passed());
        assert!(!evaluation.is_valid());
        assert_eq!(
            evaluation.message(),
            Some("the check cannot be applied to 'null'")
        );
    }

    #[test]
    fn test_messages_skipped_without_load() {
        let c = chain(1).push(fixed(false));
        let evaluation = combine(&c, false, &settings());
        assert!(!evaluation.is_valid());
        assert_eq!(evaluation.message(), None);
    }

    #[test]
    fn test_new_subject_switches_checked_value() {
        let c = chain(1)
            .push(fixed(true))
            .push(StepNode::NewSubject {
                subject: "x".into(),
                type_tag: TypeTag::CharSequence,
                operator: LogicalOp::And,
                checked: true,
            })
            .push(fixed(false));
        let evaluation = eval(&c);
        assert_eq!(evaluation.message(), Some("fail(x)"));
        assert_eq!(evaluation.last_subject(), Some(&Value::from("x")));
    }

    #[test]
    fn test_sub_message_parenthesized() {
        let inner = chain(7)
            .push(fixed(false))
            .push(StepNode::Operator(LogicalOp::Or))
            .push(fixed(false));
        let c = chain(1)
            .push(fixed(true))
            .push(StepNode::Operator(LogicalOp::And))
            .push(StepNode::Sub(Some(Box::new(inner))));
        let evaluation = eval(&c);
        assert!(!evaluation.is_valid());
        assert_eq!(evaluation.message(), Some("(fail(7) OR fail(7))"));
        assert_eq!(evaluation.last_subject(), Some(&Value::from(7)));
    }

    #[test]
    fn test_missing_sub_is_precondition_failure() {
        let c = chain(1).push(StepNode::Sub(None));
        let evaluation = eval(&c);
        assert!(!evaluation.precondition_passed());
        assert_eq!(evaluation.message(), Some("the sub-expression is missing"));
    }

    #[test]
    fn test_sub_precondition_failure_propagates() {
        let inner = chain(Value::Null)
            .push(StepNode::Assertion(
                AssertionStep::new("test.pass", |_| true).requires_subject(),
            ));
        let c = chain(1)
            .push(fixed(true))
            .push(StepNode::Operator(LogicalOp::Or))
            .push(fixed(false));
        let c = c.push(StepNode::Sub(Some(Box::new(inner))));
        // the OR already decided the outcome before the sub was reached
        assert!(eval(&c).is_valid());

        let inner = chain(Value::Null).push(StepNode::Assertion(
            AssertionStep::new("test.pass", |_| true).requires_subject(),
        ));
        let c = chain(1)
            .push(fixed(false))
            .push(StepNode::Operator(LogicalOp::Or))
            .push(StepNode::Sub(Some(Box::new(inner))));
        assert!(!eval(&c).precondition_passed());
    }

    #[test]
    fn test_panicking_check_counts_as_false() {
        let c = chain(1).push(StepNode::Assertion(AssertionStep::new(
            "test.fail",
            |_| panic!("boom"),
        )));
        let evaluation = eval(&c);
        assert!(evaluation.precondition_passed());
        assert!(!evaluation.is_valid());
    }

    #[test]
    fn test_panicking_precondition_is_unmet() {
        let step = AssertionStep::new("test.pass", |_| true).precondition(|_| panic!("boom"));
        let evaluation = eval(&chain(1).push(StepNode::Assertion(step)));
        assert!(!evaluation.precondition_passed());
    }

    #[test]
    fn test_checker_applied_not() {
        // the step sees the flag and the engine leaves the result alone
        let step = AssertionStep::handling_not("test.pass", |_, not| not);
        let c = chain(1).push(StepNode::Not(true)).push(StepNode::Assertion(step));
        assert!(eval(&c).is_valid());
    }
}

#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use crate::step::AnalysisMode;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_panicking_check_is_logged() {
        let c = Chain::new(1, TypeTag::Number, AnalysisMode::Standard).push(
            StepNode::Assertion(AssertionStep::new("test.boom", |_| panic!("boom"))),
        );
        assert!(!combine(&c, false, &Settings::default()).is_valid());
        assert!(logs_contain("leaf check panicked"));
    }

    #[test]
    #[traced_test]
    fn test_short_circuit_is_logged() {
        let c = Chain::new(1, TypeTag::Number, AnalysisMode::Standard)
            .push(StepNode::Assertion(AssertionStep::new("k", |_| true)))
            .push(StepNode::Operator(LogicalOp::Or));
        assert!(combine(&c, false, &Settings::default()).is_valid());
        assert!(logs_contain("short-circuit: valid"));
    }
}
