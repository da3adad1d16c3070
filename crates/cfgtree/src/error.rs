/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for path resolution, INI decoding and text decoding.
//!
//! A navigation miss (absent key, non-map ancestor) is not an error. These
//! types only describe inputs that cannot be interpreted at all.

use crate::value::Value;
use thiserror::Error;

/// Errors raised while turning a path argument into keys.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// The path has no segments.
    #[error("empty path")]
    EmptyPath,

    /// The segment at `index` is the empty string.
    #[error("{index}: empty path element")]
    EmptyPathElement { index: usize },

    /// An element of a value sequence is not a string.
    #[error("{value}: invalid path element type {}", .value.type_name())]
    InvalidPathElement { value: Value },

    /// The path is neither a string nor a sequence.
    #[error("{value}: invalid path type {}", .value.type_name())]
    InvalidPathType { value: Value },
}

/// Errors raised while decoding INI text.
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IniError {
    /// A line that is neither blank, a comment, a header nor an assignment,
    /// or an assignment whose value cannot be unquoted.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A section header whose name does not split into valid keys.
    #[error("line {line}: invalid section [{name}]: {source}")]
    InvalidSection {
        line: usize,
        name: String,
        #[source]
        source: PathError,
    },
}

/// Errors raised by a [`crate::json::TextDecoder`].
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for path operations.
pub type PathResult<T> = Result<T, PathError>;

/// Result type for INI decoding.
pub type IniResult<T> = Result<T, IniError>;

/// Result type for text decoding.
pub type DecodeResult<T> = Result<T, DecodeError>;
