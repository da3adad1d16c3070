/*
 * mod.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! INI-style text for nested mappings.
//!
//! Flat keys come first as `key = value` lines, then every nested mapping as
//! a `[dotted.section.path]` block, each preceded by a blank line:
//!
//! ```text
//! key = value
//!
//! [section]
//! subKey = subValue
//!
//! [section.subsection]
//! subSubKey = subSubValue
//! ```
//!
//! Keys that could be misread (empty, containing `=`, `.` or whitespace,
//! starting with a comment or header character) are double-quoted, both on
//! `key = value` lines and as header components (`["a.b".c]`).
//!
//! Keys are sorted at every level, so the text is a function of the tree's
//! content alone. Decoding yields strings for every scalar; an integer
//! written as `n = 1` comes back as `"1"`.

mod decode;
mod encode;

pub use decode::decode;
pub use encode::{encode, key_text, scalar_text};
