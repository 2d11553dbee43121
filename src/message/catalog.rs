//! Message templates keyed by check
//!
//! A [`Catalog`] maps message keys to templates. The built-in catalog holds
//! English templates for every check shipped with the crate; callers can
//! override entries, merge catalogs, or load `key=template` properties text.
//!
//! ```rust
//! use assertor::message::Catalog;
//!
//! let catalog = Catalog::from_properties(
//!     "# overrides\nassertor.constraint.number.gt = %1$s* doit être > %2$s*\n",
//! )
//! .unwrap();
//! assert_eq!(
//!     catalog.get("assertor.constraint.number.gt"),
//!     Some("%1$s* doit être > %2$s*")
//! );
//! ```

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Text used when a key has no template.
pub const FALLBACK: &str = "Assertion failed";

/// Key of the message used when a combination fails without any failing check
/// to report.
pub const INVALID_COMBINATION: &str = "assertor.combination.invalid";

/// Key of the message used when a check has no precondition message of its own.
pub const PREREQUISITE: &str = "assertor.prerequisite";

/// Key of the message used when a sub-expression is absent.
pub const MISSING_SUB: &str = "assertor.combination.sub.missing";

const ENGINE_TEMPLATES: &[(&str, &str)] = &[
    (FALLBACK_KEY, FALLBACK),
    (INVALID_COMBINATION, "the combination of checks is invalid"),
    (PREREQUISITE, "the check cannot be applied to '%1$s*'"),
    (MISSING_SUB, "the sub-expression is missing"),
];

const FALLBACK_KEY: &str = "assertor.default";

/// Error raised while parsing properties text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// A non-comment line has no `=` or `:`.
    #[error("line {line}: expected `key=template`")]
    MissingSeparator {
        /// 1-based line number.
        line: usize,
    },
    /// A line has a separator but nothing before it.
    #[error("line {line}: empty key")]
    EmptyKey {
        /// 1-based line number.
        line: usize,
    },
}

/// Message templates by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Catalog {
    templates: HashMap<String, String>,
}

impl Catalog {
    /// A catalog with no templates.
    pub fn empty() -> Self {
        Catalog::default()
    }

    /// The English templates for every built-in check.
    pub fn builtin() -> Self {
        let templates = ENGINE_TEMPLATES
            .iter()
            .chain(crate::predicate::templates())
            .map(|(key, template)| ((*key).to_owned(), (*template).to_owned()))
            .collect();
        Catalog { templates }
    }

    /// The built-in catalog, built once and shared.
    pub fn shared_builtin() -> Arc<Catalog> {
        static BUILTIN: OnceLock<Arc<Catalog>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| Arc::new(Catalog::builtin()))
            .clone()
    }

    /// Parse `key=template` (or `key: template`) lines. Blank lines and lines
    /// starting with `#` or `!` are skipped.
    pub fn from_properties(text: &str) -> Result<Self, CatalogError> {
        let mut templates = HashMap::new();
        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            let split = line
                .find(|c: char| c == '=' || c == ':')
                .ok_or(CatalogError::MissingSeparator { line: line_no })?;
            let key = line[..split].trim();
            if key.is_empty() {
                return Err(CatalogError::EmptyKey { line: line_no });
            }
            let template = line[split + 1..].trim();
            templates.insert(key.to_owned(), template.to_owned());
        }
        Ok(Catalog { templates })
    }

    /// Add or replace a template.
    pub fn with(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.insert(key, template);
        self
    }

    /// Add or replace a template in place.
    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(key.into(), template.into());
    }

    /// Overlay `other` on top of this catalog.
    pub fn merge(mut self, other: Catalog) -> Self {
        self.templates.extend(other.templates);
        self
    }

    /// Template for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.templates.get(key).map(String::as_str)
    }

    /// Template for `key`, or the catalog's fallback text.
    pub fn resolve(&self, key: &str) -> &str {
        self.get(key).unwrap_or_else(|| self.fallback())
    }

    /// The fallback text.
    pub fn fallback(&self) -> &str {
        self.get(FALLBACK_KEY).unwrap_or(FALLBACK)
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the catalog has no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
