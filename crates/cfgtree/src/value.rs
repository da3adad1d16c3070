/*
 * value.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The untyped value model shared by every operation in this crate.
//!
//! Template data arrives as loosely-typed trees: strings, numbers, nested
//! maps, lists. [`Value`] makes the shape explicit so that navigation and
//! serialization can match on the variant instead of guessing at runtime.

use indexmap::IndexMap;
use std::fmt;

/// A string-keyed map of values.
///
/// Insertion ordered, but equality ignores order. Anything that serializes a
/// `Mapping` sorts its keys first.
pub type Mapping = IndexMap<String, Value>;

/// A dynamically-typed scalar or container.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The absent value (a missing template argument, JSON `null`).
    #[default]
    Null,

    /// A string value.
    String(String),

    /// A boolean value.
    Bool(bool),

    /// A signed integer.
    Integer(i64),

    /// A floating-point number.
    Float(f64),

    /// Raw bytes, interpreted as UTF-8 when rendered.
    Bytes(Vec<u8>),

    /// The message of an error value.
    Error(String),

    /// A nested map. The only container a path can descend through.
    Mapping(Mapping),

    /// An ordered list of values.
    Sequence(Vec<Value>),
}

impl Value {
    /// Build an error value from anything implementing [`std::error::Error`].
    pub fn error(err: &dyn std::error::Error) -> Self {
        Value::Error(err.to_string())
    }

    /// An empty mapping.
    pub fn empty_mapping() -> Self {
        Value::Mapping(Mapping::new())
    }

    /// Name of the runtime type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::String(_) => "string",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "int",
            Value::Float(_) => "float",
            Value::Bytes(_) => "bytes",
            Value::Error(_) => "error",
            Value::Mapping(_) => "map",
            Value::Sequence(_) => "list",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            Value::Mapping(m) => Some(m),
            _ => None,
        }
    }

    /// Consume the value, returning the mapping if it is one.
    pub fn into_mapping(self) -> Option<Mapping> {
        match self {
            Value::Mapping(m) => Some(m),
            _ => None,
        }
    }
}

/// Displays the canonical rendering (see [`crate::quote::render`]).
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::quote::render(self))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Integer(i64::from(n))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::Bytes(bytes.to_vec())
    }
}

impl From<Mapping> for Value {
    fn from(m: Mapping) -> Self {
        Value::Mapping(m)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(Value::from("a").type_name(), "string");
        assert_eq!(Value::from(0).type_name(), "int");
        assert_eq!(Value::from(1.5).type_name(), "float");
        assert_eq!(Value::from(true).type_name(), "bool");
        assert_eq!(Value::from(vec![b'a']).type_name(), "bytes");
        assert_eq!(Value::empty_mapping().type_name(), "map");
        assert_eq!(Value::Sequence(vec![]).type_name(), "list");
        assert_eq!(Value::Null.type_name(), "null");
    }

    #[test]
    fn test_mapping_equality_ignores_order() {
        let mut a = Mapping::new();
        a.insert("x".to_string(), Value::from(1));
        a.insert("y".to_string(), Value::from(2));

        let mut b = Mapping::new();
        b.insert("y".to_string(), Value::from(2));
        b.insert("x".to_string(), Value::from(1));

        assert_eq!(Value::Mapping(a), Value::Mapping(b));
    }

    #[test]
    fn test_error_value_keeps_message() {
        let err = std::io::Error::other("disk on fire");
        assert_eq!(Value::error(&err), Value::Error("disk on fire".to_string()));
    }

    #[test]
    fn test_string_reference_converts() {
        let s = String::from("a");
        assert_eq!(Value::from(&s), Value::String("a".to_string()));
    }
}
