//! Chain nodes and the leaf assertion contract
//!
//! A [`Chain`] is an ordered sequence of [`StepNode`]s that always starts with
//! a single `Creation` node. Each fluent call appends one node to a chain it
//! owns and hands the chain on, so a chain is never observed half-built.
//!
//! Leaf checks plug into the engine through [`AssertionStep`]: a precondition,
//! an evaluation predicate, a message key and the captured operands.
//!
//! # Example
//!
//! ```rust
//! use assertor::step::{AnalysisMode, AssertionStep, Chain, StepNode};
//! use assertor::operator::LogicalOp;
//! use assertor::settings::Settings;
//! use assertor::value::TypeTag;
//!
//! let even = AssertionStep::new("custom.even", |v| {
//!     v.as_number().is_some_and(|n| n.as_f64() % 2.0 == 0.0)
//! })
//! .requires_subject();
//!
//! let chain = Chain::new(4, TypeTag::Number, AnalysisMode::Standard)
//!     .push(StepNode::Assertion(even.clone()))
//!     .push(StepNode::Operator(LogicalOp::And))
//!     .push(StepNode::Not(true))
//!     .push(StepNode::Assertion(even));
//!
//! assert!(!chain.combine(false, &Settings::default()).is_valid());
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::engine::{self, Evaluation};
use crate::message::Message;
use crate::operator::LogicalOp;
use crate::parameter::Parameter;
use crate::settings::Settings;
use crate::value::{TypeTag, Value};

/// Precondition evaluated against the current subject.
pub type PreCheck = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Evaluation predicate: `(subject, not_flag) -> result`.
pub type Check = Arc<dyn Fn(&Value, bool) -> bool + Send + Sync>;

/// How collection and map checks scan their elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnalysisMode {
    /// Scan sequentially on the calling thread.
    #[default]
    Standard,
    /// Split large inputs into chunks scanned on scoped threads.
    Parallel,
}

/// One leaf check.
#[derive(Clone)]
pub struct AssertionStep {
    pre_check: PreCheck,
    check: Check,
    message_key: Cow<'static, str>,
    negate_key_on_not: bool,
    not_applied_by_checker: bool,
    operands: Vec<Parameter>,
    user_message: Option<Message>,
}

impl AssertionStep {
    /// A check whose result the engine negates under `not()`.
    pub fn new<F>(message_key: impl Into<Cow<'static, str>>, check: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        AssertionStep {
            pre_check: Arc::new(|_| true),
            check: Arc::new(move |value, _| check(value)),
            message_key: message_key.into(),
            negate_key_on_not: true,
            not_applied_by_checker: false,
            operands: Vec::new(),
            user_message: None,
        }
    }

    /// A check that receives the NOT flag and applies it itself.
    ///
    /// Use this when negation changes which branch runs, e.g. "has a cause
    /// with this message" negated still requires a cause.
    pub fn handling_not<F>(message_key: impl Into<Cow<'static, str>>, check: F) -> Self
    where
        F: Fn(&Value, bool) -> bool + Send + Sync + 'static,
    {
        AssertionStep {
            pre_check: Arc::new(|_| true),
            check: Arc::new(check),
            message_key: message_key.into(),
            negate_key_on_not: true,
            not_applied_by_checker: true,
            operands: Vec::new(),
            user_message: None,
        }
    }

    /// Replace the precondition.
    pub fn precondition<F>(mut self, pre_check: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.pre_check = Arc::new(pre_check);
        self
    }

    /// Require a non-null subject.
    pub fn requires_subject(self) -> Self {
        self.precondition(|value| !value.is_null())
    }

    /// Record an operand for messages.
    pub fn operand(mut self, operand: impl Into<Value>) -> Self {
        self.operands.push(Parameter::operand(operand));
        self
    }

    /// Record an already tagged operand.
    pub fn tagged_operand(mut self, operand: Value, type_tag: TypeTag) -> Self {
        self.operands.push(Parameter::new(operand, type_tag, false));
        self
    }

    /// Keep the same message key under `not()`.
    pub fn fixed_message_key(mut self) -> Self {
        self.negate_key_on_not = false;
        self
    }

    /// Override the catalog template.
    pub fn with_message(mut self, message: impl Into<Message>) -> Self {
        self.user_message = Some(message.into());
        self
    }

    pub(crate) fn set_user_message(&mut self, message: Message) {
        self.user_message = Some(message);
    }

    /// Run the precondition.
    pub fn pre_check(&self, subject: &Value) -> bool {
        (self.pre_check)(subject)
    }

    /// Run the evaluation predicate.
    pub fn check(&self, subject: &Value, not: bool) -> bool {
        (self.check)(subject, not)
    }

    /// Catalog key of the failure template.
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Whether the key gains a `.not` suffix under `not()`.
    pub fn negates_key_on_not(&self) -> bool {
        self.negate_key_on_not
    }

    /// Whether the predicate applies the NOT flag itself.
    pub fn is_not_applied_by_checker(&self) -> bool {
        self.not_applied_by_checker
    }

    /// Captured operands.
    pub fn operands(&self) -> &[Parameter] {
        &self.operands
    }

    /// Custom message, if any.
    pub fn user_message(&self) -> Option<&Message> {
        self.user_message.as_ref()
    }
}

impl fmt::Debug for AssertionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssertionStep")
            .field("message_key", &self.message_key)
            .field("negate_key_on_not", &self.negate_key_on_not)
            .field("not_applied_by_checker", &self.not_applied_by_checker)
            .field("operands", &self.operands)
            .field("user_message", &self.user_message)
            .finish_non_exhaustive()
    }
}

/// One unit of a chain.
#[derive(Debug, Clone)]
pub enum StepNode {
    /// The chain root.
    Creation {
        /// The first subject.
        subject: Value,
        /// Its semantic type.
        type_tag: TypeTag,
        /// How collection checks scan.
        analysis_mode: AnalysisMode,
    },
    /// A leaf check.
    Assertion(AssertionStep),
    /// How the next unit combines with the running result.
    Operator(LogicalOp),
    /// Toggle negation of the next assertion.
    Not(bool),
    /// Switch to a new subject, combined through `operator`.
    NewSubject {
        /// The new subject.
        subject: Value,
        /// Its semantic type.
        type_tag: TypeTag,
        /// Operator joining it to the running result.
        operator: LogicalOp,
        /// Whether it counts as a checked subject.
        checked: bool,
    },
    /// A parenthesized, independently built chain.
    Sub(Option<Box<Chain>>),
}

/// An ordered sequence of steps rooted at a `Creation` node.
#[derive(Debug, Clone)]
pub struct Chain {
    nodes: Vec<StepNode>,
}

impl Chain {
    /// Start a chain on `subject`.
    pub fn new(subject: impl Into<Value>, type_tag: TypeTag, analysis_mode: AnalysisMode) -> Self {
        Chain {
            nodes: vec![StepNode::Creation {
                subject: subject.into(),
                type_tag,
                analysis_mode,
            }],
        }
    }

    /// Append a node. A second `Creation` node is ignored so the chain keeps
    /// exactly one root.
    pub fn push(mut self, node: StepNode) -> Self {
        if let StepNode::Creation { .. } = node {
            #[cfg(feature = "tracing")]
            tracing::debug!("ignoring a creation node pushed onto an existing chain");
            return self;
        }
        self.nodes.push(node);
        self
    }

    /// Nodes in root-to-tip order.
    pub fn nodes(&self) -> &[StepNode] {
        &self.nodes
    }

    /// Number of nodes, the root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether only the root is present.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Scan mode set on the root.
    pub fn analysis_mode(&self) -> AnalysisMode {
        match self.nodes.first() {
            Some(StepNode::Creation { analysis_mode, .. }) => *analysis_mode,
            _ => AnalysisMode::Standard,
        }
    }

    /// The tip node when it is an assertion.
    pub(crate) fn last_assertion_mut(&mut self) -> Option<&mut AssertionStep> {
        match self.nodes.last_mut() {
            Some(StepNode::Assertion(step)) => Some(step),
            _ => None,
        }
    }

    /// Evaluate the chain. Messages are only composed when `load_message`.
    pub fn combine(&self, load_message: bool, settings: &Settings) -> Evaluation {
        engine::combine(self, load_message, settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_keeps_single_root() {
        let chain = Chain::new(1, TypeTag::Number, AnalysisMode::Parallel)
            .push(StepNode::Creation {
                subject: 2.into(),
                type_tag: TypeTag::Number,
                analysis_mode: AnalysisMode::Standard,
            })
            .push(StepNode::Not(true));
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.analysis_mode(), AnalysisMode::Parallel);
        assert!(!chain.is_empty());
    }

    #[test]
    fn test_new_step_defaults() {
        let step = AssertionStep::new("k", |_| true).operand(3);
        assert!(step.pre_check(&Value::Null));
        assert!(step.negates_key_on_not());
        assert!(!step.is_not_applied_by_checker());
        assert_eq!(step.operands().len(), 1);
        // the engine, not the step, applies NOT for plain checks
        assert!(step.check(&Value::Null, true));
    }

    #[test]
    fn test_handling_not_receives_flag() {
        let step = AssertionStep::handling_not("k", |_, not| !not);
        assert!(step.is_not_applied_by_checker());
        assert!(step.check(&Value::Null, false));
        assert!(!step.check(&Value::Null, true));
    }

    #[test]
    fn test_last_assertion_only_at_tip() {
        let mut chain = Chain::new(1, TypeTag::Number, AnalysisMode::Standard)
            .push(StepNode::Assertion(AssertionStep::new("k", |_| true)));
        assert!(chain.last_assertion_mut().is_some());
        let mut chain = chain.push(StepNode::Operator(LogicalOp::Or));
        assert!(chain.last_assertion_mut().is_none());
    }
}
