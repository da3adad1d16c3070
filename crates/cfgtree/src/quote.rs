/*
 * quote.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Rendering values as text and wrapping them in quotes.
//!
//! [`render`] is the single place that decides how a scalar reads as text.
//! The quoting helpers build on it, and so does the INI encoder.

use crate::value::Value;
use std::borrow::Cow;
use unicode_general_category::{GeneralCategory, get_general_category};

/// Quoting convention used by [`quote_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    /// `"…"` with backslash, double quote and newline escaped.
    Double,
    /// `'…'` with the content embedded verbatim.
    Single,
}

/// Render a value as text.
///
/// | variant  | text                                   |
/// |----------|----------------------------------------|
/// | String   | verbatim                               |
/// | Bytes    | UTF-8 (invalid sequences replaced)     |
/// | Bool     | `true` / `false`                       |
/// | Integer  | decimal                                |
/// | Float    | six decimal places                     |
/// | Error    | the message                            |
/// | Null     | empty                                  |
/// | Sequence | `[a, b]`                               |
/// | Mapping  | `{k: v}` with keys sorted              |
pub fn render(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        Value::Bytes(bytes) => String::from_utf8_lossy(bytes),
        Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Value::Integer(n) => Cow::Owned(n.to_string()),
        Value::Float(n) => Cow::Owned(format!("{n:.6}")),
        Value::Error(message) => Cow::Borrowed(message),
        Value::Null => Cow::Borrowed(""),
        Value::Sequence(items) => {
            let rendered: Vec<_> = items.iter().map(render).collect();
            Cow::Owned(format!("[{}]", rendered.join(", ")))
        }
        Value::Mapping(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let rendered: Vec<String> = keys
                .into_iter()
                .map(|key| format!("{key}: {}", render(&map[key])))
                .collect();
            Cow::Owned(format!("{{{}}}", rendered.join(", ")))
        }
    }
}

/// Wrap `s` in double quotes, escaping `\`, `"` and newline.
pub fn double_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Wrap `s` in single quotes. Nothing is escaped.
pub fn single_quote(s: &str) -> String {
    format!("'{s}'")
}

fn quote_one(value: &Value, style: QuoteStyle) -> String {
    let text = render(value);
    match style {
        QuoteStyle::Double => double_quote(&text),
        QuoteStyle::Single => single_quote(&text),
    }
}

/// Render and quote each value, joined by single spaces.
pub fn quote_all(values: &[Value], style: QuoteStyle) -> String {
    values
        .iter()
        .map(|value| quote_one(value, style))
        .collect::<Vec<_>>()
        .join(" ")
}

/// [`quote_all`] in [`QuoteStyle::Double`].
pub fn quote(values: &[Value]) -> String {
    quote_all(values, QuoteStyle::Double)
}

/// [`quote_all`] in [`QuoteStyle::Single`].
pub fn squote(values: &[Value]) -> String {
    quote_all(values, QuoteStyle::Single)
}

/// Double-quote each value separately.
pub fn quote_list(values: &[Value]) -> Vec<String> {
    values
        .iter()
        .map(|value| quote_one(value, QuoteStyle::Double))
        .collect()
}

/// Spellings read back as booleans.
const BOOL_SPELLINGS: &[&str] = &[
    "1", "0", "t", "f", "T", "F", "true", "false", "TRUE", "FALSE", "True", "False",
];

/// Whether `c` has no visible rendering: controls, format characters,
/// private-use and unassigned code points, surrogates, line and paragraph
/// separators.
pub fn is_unprintable(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::Surrogate
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}

/// Whether the INI encoder must quote `s` to read it back unchanged.
///
/// True for the empty string, text containing whitespace, unprintable
/// characters, `\` or `"`, text starting with `'`, and anything that reads
/// as a boolean or a number.
pub fn needs_quote(s: &str) -> bool {
    if s.is_empty() || s.starts_with('\'') {
        return true;
    }
    if s
        .chars()
        .any(|c| c.is_whitespace() || is_unprintable(c) || c == '\\' || c == '"')
    {
        return true;
    }
    BOOL_SPELLINGS.contains(&s) || s.parse::<f64>().is_ok()
}
