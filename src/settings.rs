//! Message configuration
//!
//! [`Settings`] replaces any process-wide locale: it travels with the chain
//! and is read only when a message is composed.
//!
//! ```rust
//! use assertor::message::Locale;
//! use assertor::settings::Settings;
//! use assertor::that;
//!
//! let settings = Settings::new()
//!     .with_locale(Locale::GERMANY)
//!     .with_template("assertor.constraint.number.gt", "%1$s* ist nicht größer als %2$s*");
//!
//! let errors = that(1.5).with_settings(settings).is_gt(2.5).get_errors();
//! assert_eq!(errors.as_deref(), Some("1,5 ist nicht größer als 2,5"));
//! ```

use std::sync::Arc;

use crate::message::{Catalog, Locale};

/// Locale and message catalog used to compose failure text.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    locale: Locale,
    catalog: Arc<Catalog>,
}

impl Settings {
    /// The defaults: [`Locale::ROOT`] and the built-in catalog.
    pub fn new() -> Self {
        Settings::default()
    }

    /// Use `locale` for number formatting.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Replace the catalog entirely.
    pub fn with_catalog(mut self, catalog: impl Into<Arc<Catalog>>) -> Self {
        self.catalog = catalog.into();
        self
    }

    /// Override a single template, keeping the rest of the catalog.
    pub fn with_template(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.catalog).insert(key, template);
        self
    }

    /// The locale.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// The catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            locale: Locale::ROOT,
            catalog: Catalog::shared_builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_does_not_touch_shared_catalog() {
        let settings = Settings::new().with_template("assertor.constraint.boolean.true", "nope");
        assert_eq!(
            settings.catalog().get("assertor.constraint.boolean.true"),
            Some("nope")
        );
        assert_ne!(
            Catalog::shared_builtin().get("assertor.constraint.boolean.true"),
            Some("nope")
        );
    }

    #[test]
    fn test_replace_catalog() {
        let settings = Settings::new().with_catalog(Catalog::empty().with("k", "v"));
        assert_eq!(settings.catalog().len(), 1);
        assert_eq!(settings.locale(), Locale::ROOT);
    }
}
