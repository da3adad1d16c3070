/*
 * encode.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::quote::{double_quote, is_unprintable, needs_quote, render};
use crate::value::{Mapping, Value};
use std::borrow::Cow;

/// Serialize a mapping as INI text.
pub fn encode(tree: &Mapping) -> String {
    let mut out = String::new();
    write_mapping(&mut out, tree, "");
    tracing::debug!(bytes = out.len(), "encoded INI");
    out
}

/// The right-hand side of a `key = value` line.
///
/// Booleans and numbers are written bare. Everything else is rendered and
/// double-quoted when the bare text would read back differently.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::Bool(_) | Value::Integer(_) | Value::Float(_) => render(value).into_owned(),
        _ => {
            let text = render(value);
            if needs_quote(&text) {
                double_quote(&text)
            } else {
                text.into_owned()
            }
        }
    }
}

/// A key or section component as written in INI text.
///
/// Keys that would be read as a comment, a header, part of the `=` split or
/// a section path separator are double-quoted, as are keys with surrounding
/// whitespace or unprintable characters and the empty key.
pub fn key_text(key: &str) -> Cow<'_, str> {
    let plain = !key.is_empty()
        && !key.starts_with(['#', ';', '\''])
        && !key.chars().any(|c| {
            c.is_whitespace()
                || is_unprintable(c)
                || matches!(c, '=' | '.' | '[' | ']' | '"' | '\\')
        });
    if plain {
        Cow::Borrowed(key)
    } else {
        Cow::Owned(double_quote(key))
    }
}

fn sorted_keys(map: &Mapping) -> Vec<&String> {
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();
    keys
}

fn write_mapping(out: &mut String, map: &Mapping, section_prefix: &str) {
    let mut sections = Vec::new();
    for key in sorted_keys(map) {
        match &map[key] {
            Value::Mapping(child) => sections.push((key, child)),
            value => {
                out.push_str(&format!("{} = {}\n", key_text(key), scalar_text(value)));
            }
        }
    }

    for (key, child) in sections {
        let section = format!("{section_prefix}{}", key_text(key));
        out.push_str(&format!("\n[{section}]\n"));
        write_mapping(out, child, &format!("{section}."));
    }
}
