//! Number formatting conventions

/// Separators used when rendering numbers into messages.
///
/// Locales are plain values carried by [`Settings`](crate::settings::Settings)
/// or by a single [`Message`](super::Message); nothing global is mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Locale {
    decimal_separator: char,
    grouping_separator: char,
}

impl Locale {
    /// Neutral formatting: `1234.5`, grouped as `1,234.5`.
    pub const ROOT: Locale = Locale::new('.', ',');
    /// United States.
    pub const US: Locale = Locale::new('.', ',');
    /// United Kingdom.
    pub const UK: Locale = Locale::new('.', ',');
    /// France: `1234,5`, grouped with a no-break space.
    pub const FRANCE: Locale = Locale::new(',', '\u{a0}');
    /// Germany: `1234,5`, grouped as `1.234,5`.
    pub const GERMANY: Locale = Locale::new(',', '.');

    /// Custom separators.
    pub const fn new(decimal_separator: char, grouping_separator: char) -> Self {
        Locale {
            decimal_separator,
            grouping_separator,
        }
    }

    /// Separator between integer and fraction digits.
    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// Separator between groups of three integer digits.
    pub fn grouping_separator(&self) -> char {
        self.grouping_separator
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::ROOT
    }
}
