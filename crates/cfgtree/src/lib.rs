/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Path-addressed editing and INI serialization of untyped config trees.
//!
//! Template functions receive loosely-typed data: nested maps of strings,
//! numbers and lists. This crate gives that data an explicit shape
//! ([`Value`], [`Mapping`]) and provides the operations templates need:
//!
//! - Path resolution: `"a.b.c"` or `["a", "b", "c"]` to ancestors + leaf
//! - Navigation: find the mapping that holds a path's leaf
//! - Mutation: set or delete the value at a path
//! - Quoting: render scalars as text and wrap them in `"…"` or `'…'`
//! - INI: encode a nested mapping as `[section.path]` blocks and decode it back
//! - JSON: decode text into a [`Value`] without losing huge numbers
//!
//! # Navigation misses are not errors
//!
//! A path whose ancestors are missing, or pass through a non-mapping value,
//! simply does not locate anything: [`navigate`] returns `Ok(None)` and
//! [`delete_value_at_path`] leaves the tree untouched. Errors are reserved
//! for paths that cannot be read at all ([`PathError`]) and malformed INI
//! text ([`IniError`]).
//!
//! # Example
//!
//! ```
//! use cfgtree::{Mapping, Value, ini, set_value_at_path};
//!
//! let tree = set_value_at_path("section.key", Value::from("value"), Mapping::new())?;
//! assert_eq!(ini::encode(&tree), "\n[section]\nkey = value\n");
//! # Ok::<(), cfgtree::PathError>(())
//! ```

pub mod error;
pub mod ini;
pub mod json;
pub mod mutate;
pub mod path;
pub mod quote;
pub mod value;

pub use error::{DecodeError, DecodeResult, IniError, IniResult, PathError, PathResult};
pub use json::{JsonDecoder, TextDecoder};
pub use mutate::{delete_value_at_path, prune_empty_mappings, set_value_at_path};
pub use path::{AsPath, Located, ResolvedPath, navigate, resolve_path};
pub use quote::{QuoteStyle, needs_quote, quote, quote_all, quote_list, render, squote};
pub use value::{Mapping, Value};
