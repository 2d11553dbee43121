//! Failure messages
//!
//! Messages are only built when a terminal operation asks for them
//! ([`get_errors`](crate::Assertor::get_errors), `or_else_throw*`). A pure
//! [`is_ok`](crate::Assertor::is_ok) never formats anything.
//!
//! Text comes from two places:
//!
//! - the [`Catalog`] carried by [`Settings`], keyed by each check's message
//!   key (with a `.not` suffix under negation)
//! - a caller-supplied [`Message`], which replaces the catalog template for
//!   that one check
//!
//! See [`format`] for the placeholder syntax.
//!
//! # Example
//!
//! ```rust
//! use assertor::message::Message;
//! use assertor::that;
//!
//! let errors = that(3)
//!     .is_gt(10)
//!     .with_message(Message::new("%s: got %1$s*, wanted more than %2$s*").arg("count"))
//!     .get_errors();
//! assert_eq!(errors.as_deref(), Some("count: got 3, wanted more than 10"));
//! ```

mod catalog;
pub mod format;
mod locale;

pub use catalog::{Catalog, CatalogError, FALLBACK};
pub use locale::Locale;

use crate::parameter::Parameter;
use crate::settings::Settings;
use crate::step::AssertionStep;
use crate::value::Value;

/// A custom message template with its own arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    template: String,
    args: Vec<Value>,
    locale: Option<Locale>,
}

impl Message {
    /// A template with no arguments.
    pub fn new(template: impl Into<String>) -> Self {
        Message {
            template: template.into(),
            args: Vec::new(),
            locale: None,
        }
    }

    /// Append an argument for the next `%s`.
    pub fn arg(mut self, arg: impl Into<Value>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, T>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Format this message with `locale` instead of the chain's.
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// The raw template.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The arguments.
    pub fn arguments(&self) -> &[Value] {
        &self.args
    }

    /// The locale override, if any.
    pub fn locale_override(&self) -> Option<Locale> {
        self.locale
    }
}

impl From<&str> for Message {
    fn from(template: &str) -> Self {
        Message::new(template)
    }
}

impl From<String> for Message {
    fn from(template: String) -> Self {
        Message::new(template)
    }
}

/// Renders check failures into text using the active [`Settings`].
#[derive(Debug, Clone, Copy)]
pub struct MessageComposer<'a> {
    settings: &'a Settings,
}

impl<'a> MessageComposer<'a> {
    /// Compose with `settings`.
    pub fn new(settings: &'a Settings) -> Self {
        MessageComposer { settings }
    }

    /// The settings in use.
    pub fn settings(&self) -> &Settings {
        self.settings
    }

    /// Failure text of a check that evaluated to false.
    ///
    /// `parameters` holds the checked subject followed by the step's operands.
    pub fn failure(&self, step: &AssertionStep, not: bool, parameters: &[Parameter]) -> String {
        if let Some(message) = step.user_message() {
            return self.custom(message, parameters);
        }
        let catalog = self.settings.catalog();
        let template = if not && step.negates_key_on_not() {
            catalog.resolve(&format!("{}.not", step.message_key()))
        } else {
            catalog.resolve(step.message_key())
        };
        self.render(template, &[], parameters)
    }

    /// Text of a check whose precondition did not hold.
    ///
    /// Looks up `<key>.prerequisite`, then the family's `.prerequisite`
    /// (`assertor.constraint.number.gt` falls back to
    /// `assertor.constraint.number.prerequisite`), then the generic text.
    pub fn precondition(&self, step: &AssertionStep, parameters: &[Parameter]) -> String {
        if let Some(message) = step.user_message() {
            return self.custom(message, parameters);
        }
        let catalog = self.settings.catalog();
        let key = step.message_key();
        let family = key.rsplit_once('.').map(|(family, _)| family);
        let template = catalog
            .get(&format!("{key}.prerequisite"))
            .or_else(|| family.and_then(|f| catalog.get(&format!("{f}.prerequisite"))))
            .or_else(|| catalog.get(catalog::PREREQUISITE))
            .unwrap_or_else(|| catalog.fallback());
        self.render(template, &[], parameters)
    }

    /// Format a caller-supplied message.
    pub fn custom(&self, message: &Message, parameters: &[Parameter]) -> String {
        let locale = message
            .locale_override()
            .unwrap_or_else(|| self.settings.locale());
        format::format_template(message.template(), message.arguments(), parameters, &locale)
    }

    /// Text used when a combination fails with nothing in the buffer.
    pub fn invalid_combination(&self) -> String {
        self.settings
            .catalog()
            .resolve(catalog::INVALID_COMBINATION)
            .to_owned()
    }

    /// Text used when a sub-expression is absent.
    pub fn missing_sub(&self) -> String {
        self.settings
            .catalog()
            .resolve(catalog::MISSING_SUB)
            .to_owned()
    }

    /// Wrap a sub-expression message for embedding in its parent.
    pub fn sub(&self, text: &str) -> String {
        format!("({text})")
    }

    fn render(&self, template: &str, args: &[Value], parameters: &[Parameter]) -> String {
        format::format_template(template, args, parameters, &self.settings.locale())
    }
}
