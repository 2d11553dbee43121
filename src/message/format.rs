//! Placeholder substitution and value rendering
//!
//! Templates use printf-like placeholders:
//!
//! - `%s`, `%2$s` take message arguments (sequentially, or by 1-based index)
//! - `%s*`, `%2$s*` take chain parameters: the checked subject, then operands
//! - `%d`, `%f`, `%.2f` and the `,` grouping flag (`%,d`) format numbers
//! - `%%` is a literal percent sign
//!
//! A placeholder that points past the available values is left as written.

use chrono::{DateTime, SecondsFormat, Utc};

use super::Locale;
use crate::parameter::Parameter;
use crate::value::{Number, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conversion {
    Text,
    Integer,
    Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placeholder {
    index: Option<usize>,
    grouping: bool,
    precision: Option<usize>,
    conversion: Conversion,
    checked: bool,
}

impl Placeholder {
    /// Parse the text following a `%`; returns the placeholder and the number
    /// of bytes it spans.
    fn parse(spec: &str) -> Option<(Placeholder, usize)> {
        let bytes = spec.as_bytes();
        let mut i = 0;

        let digits = count_digits(&bytes[i..]);
        let index = if digits > 0 {
            if bytes.get(digits) != Some(&b'$') {
                return None;
            }
            let n = spec[..digits].parse::<usize>().ok().filter(|n| *n > 0)?;
            i = digits + 1;
            Some(n)
        } else {
            None
        };

        let grouping = bytes.get(i) == Some(&b',');
        if grouping {
            i += 1;
        }

        let mut precision = None;
        if bytes.get(i) == Some(&b'.') {
            i += 1;
            let digits = count_digits(&bytes[i..]);
            if digits == 0 {
                return None;
            }
            precision = Some(spec[i..i + digits].parse::<usize>().ok()?);
            i += digits;
        }

        let conversion = match bytes.get(i) {
            Some(b's') => Conversion::Text,
            Some(b'd') => Conversion::Integer,
            Some(b'f') => Conversion::Decimal,
            _ => return None,
        };
        i += 1;

        let checked = bytes.get(i) == Some(&b'*');
        if checked {
            i += 1;
        }

        Some((
            Placeholder {
                index,
                grouping,
                precision,
                conversion,
                checked,
            },
            i,
        ))
    }

    fn render(&self, value: &Value, locale: &Locale) -> String {
        match (self.conversion, value) {
            (Conversion::Integer, Value::Number(n)) => {
                let n = match *n {
                    Number::Float(f) => Number::Int(f.trunc() as i64),
                    other => other,
                };
                render_number(&n, locale, self.grouping, None)
            }
            (Conversion::Decimal, Value::Number(n)) => render_number(
                &Number::Float(n.as_f64()),
                locale,
                self.grouping,
                Some(self.precision.unwrap_or(6)),
            ),
            (_, Value::Number(n)) => render_number(n, locale, self.grouping, self.precision),
            (_, other) => render(other, locale),
        }
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Substitute the placeholders of `template`.
pub fn format_template(
    template: &str,
    args: &[Value],
    parameters: &[Parameter],
    locale: &Locale,
) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut next_arg = 0;
    let mut next_param = 0;
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(stripped) = after.strip_prefix('%') {
            out.push('%');
            rest = stripped;
            continue;
        }

        let Some((placeholder, len)) = Placeholder::parse(after) else {
            out.push('%');
            rest = after;
            continue;
        };

        let value = if placeholder.checked {
            let index = placeholder.index.unwrap_or_else(|| {
                next_param += 1;
                next_param
            });
            parameters.get(index - 1).map(Parameter::value)
        } else {
            let index = placeholder.index.unwrap_or_else(|| {
                next_arg += 1;
                next_arg
            });
            args.get(index - 1)
        };

        match value {
            Some(value) => out.push_str(&placeholder.render(value, locale)),
            None => {
                out.push('%');
                out.push_str(&after[..len]);
            }
        }
        rest = &after[len..];
    }

    out.push_str(rest);
    out
}

/// Render a value for a message.
pub fn render(value: &Value, locale: &Locale) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => render_number(n, locale, false, None),
        Value::Char(c) => c.to_string(),
        Value::Str(s) => s.clone(),
        Value::List(items) => {
            let inner: Vec<String> = items.iter().map(|v| render(v, locale)).collect();
            format!("[{}]", inner.join(", "))
        }
        Value::Map(entries) => {
            let inner: Vec<String> = entries
                .iter()
                .map(|(k, v)| format!("{}={}", render(k, locale), render(v, locale)))
                .collect();
            format!("{{{}}}", inner.join(", "))
        }
        Value::Date(t) => render_date(t),
        Value::Enum(v) => v.name().to_owned(),
        Value::Class(t) => t.name().to_owned(),
        Value::Error(e) => e.to_string(),
        Value::Object(o) => format!("{o:?}"),
    }
}

fn render_number(n: &Number, locale: &Locale, grouping: bool, precision: Option<usize>) -> String {
    let raw = match (*n, precision) {
        (Number::Int(v), None) => v.to_string(),
        (Number::UInt(v), None) => v.to_string(),
        (Number::Float(v), None) => v.to_string(),
        (other, Some(p)) => format!("{:.*}", p, other.as_f64()),
    };

    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(raw.len() + 4);
    out.push_str(sign);
    if grouping && integer.bytes().all(|b| b.is_ascii_digit()) {
        for (i, c) in integer.chars().enumerate() {
            if i > 0 && (integer.len() - i) % 3 == 0 {
                out.push(locale.grouping_separator());
            }
            out.push(c);
        }
    } else {
        out.push_str(integer);
    }
    if let Some(fraction) = fraction {
        out.push(locale.decimal_separator());
        out.push_str(fraction);
    }
    out
}

/// RFC 3339 in UTC, truncated to the second.
fn render_date(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}
