/*
 * json.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Decoding text into [`Value`] trees.
//!
//! [`TextDecoder`] is the seam callers use; [`JsonDecoder`] is the stock
//! implementation. Numbers keep as much precision as the value model allows:
//! integers stay integers, and numbers too large for `f64` keep their
//! source text exactly as written instead of turning into infinity.

use crate::error::DecodeResult;
use crate::value::{Mapping, Value};
use indexmap::IndexMap;
use serde_json::value::RawValue;

/// Turns text into an untyped value tree.
pub trait TextDecoder {
    fn decode_text(&self, text: &str) -> DecodeResult<Value>;
}

/// Decodes JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl TextDecoder for JsonDecoder {
    fn decode_text(&self, text: &str) -> DecodeResult<Value> {
        let raw: &RawValue = serde_json::from_str(text)?;
        from_raw(raw)
    }
}

/// Convert one raw JSON value into a [`Value`], descending into containers.
///
/// Containers are split into raw children so that every number is seen as
/// the slice of source text it came from.
pub fn from_raw(raw: &RawValue) -> DecodeResult<Value> {
    let text = raw.get().trim_start();
    Ok(match text.as_bytes().first() {
        Some(b'{') => {
            let entries: IndexMap<String, &RawValue> = serde_json::from_str(text)?;
            let map = entries
                .into_iter()
                .map(|(key, child)| Ok((key, from_raw(child)?)))
                .collect::<DecodeResult<Mapping>>()?;
            Value::Mapping(map)
        }
        Some(b'[') => {
            let items: Vec<&RawValue> = serde_json::from_str(text)?;
            Value::Sequence(items.into_iter().map(from_raw).collect::<DecodeResult<_>>()?)
        }
        Some(b'"') => Value::String(serde_json::from_str(text)?),
        Some(b't' | b'f') => Value::Bool(serde_json::from_str(text)?),
        Some(b'n') => Value::Null,
        _ => from_number_text(text.trim_end()),
    })
}

fn from_number_text(text: &str) -> Value {
    if let Ok(i) = text.parse::<i64>() {
        return Value::Integer(i);
    }
    match text.parse::<f64>() {
        Ok(f) if f.is_finite() => Value::Float(f),
        _ => Value::String(text.to_string()),
    }
}
