/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for template functions.
//!
//! Every message starts with the template function's name so that a failed
//! evaluation points at the call that caused it.

use cfgtree::{DecodeError, IniError, PathError};
use thiserror::Error;

/// Errors raised while resolving redirects.
#[derive(Debug, Error)]
pub enum RedirectError {
    /// The input is not an absolute URL.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// More redirects than the configured limit.
    #[error("{url}: too many redirects (limit {limit})")]
    TooManyRedirects { url: String, limit: usize },

    /// The request itself failed (connection, timeout, ...).
    #[error("{url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Errors raised by [`crate::TemplateFuncs`].
#[derive(Debug, Error)]
pub enum FuncError {
    #[error("{func}: {source}")]
    Path {
        func: &'static str,
        #[source]
        source: PathError,
    },

    #[error("{func}: {source}")]
    Ini {
        func: &'static str,
        #[source]
        source: IniError,
    },

    #[error("{func}: {source}")]
    Decode {
        func: &'static str,
        #[source]
        source: DecodeError,
    },

    #[error("{func}: {source}")]
    Redirect {
        func: &'static str,
        #[source]
        source: RedirectError,
    },

    /// An argument of the wrong type.
    #[error("{func}: expected {expected}, found {found}")]
    InvalidArgument {
        func: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

/// Result type for redirect resolution.
pub type RedirectResult<T> = Result<T, RedirectError>;

/// Result type for template functions.
pub type FuncResult<T> = Result<T, FuncError>;
