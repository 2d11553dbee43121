//! Parameters recorded while a chain is evaluated
//!
//! Every subject and every operand that enters a chain is recorded as a
//! [`Parameter`]. Parameters feed the `%s*` placeholders of message
//! templates, and the most recent checked one is what terminal operations
//! such as [`get`](crate::Assertor::get) hand back.

use crate::value::{TypeTag, Value};

/// A value tagged with its semantic type and its role in the chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    value: Value,
    type_tag: TypeTag,
    checked: bool,
}

impl Parameter {
    /// Create a parameter.
    pub fn new(value: Value, type_tag: TypeTag, checked: bool) -> Self {
        Parameter {
            value,
            type_tag,
            checked,
        }
    }

    /// A checked subject.
    pub fn subject(value: Value, type_tag: TypeTag) -> Self {
        Parameter::new(value, type_tag, true)
    }

    /// An operand, tagged with the natural type of the value.
    ///
    /// ```rust
    /// use assertor::parameter::Parameter;
    /// use assertor::value::TypeTag;
    ///
    /// let p = Parameter::operand(10);
    /// assert_eq!(p.type_tag(), TypeTag::Number);
    /// assert!(!p.is_checked());
    /// ```
    pub fn operand(value: impl Into<Value>) -> Self {
        let value = value.into();
        let type_tag = value.type_tag();
        Parameter::new(value, type_tag, false)
    }

    /// The recorded value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The semantic type.
    pub fn type_tag(&self) -> TypeTag {
        self.type_tag
    }

    /// Whether this is a checked subject rather than an operand.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Take the value out.
    pub fn into_value(self) -> Value {
        self.value
    }
}

/// The most recent checked subject in `parameters`.
pub(crate) fn last_checked(parameters: &[Parameter]) -> Option<&Value> {
    parameters
        .iter()
        .rev()
        .find(|p| p.is_checked())
        .map(Parameter::value)
}
