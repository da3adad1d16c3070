/*
 * path.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Key paths into nested mappings.
//!
//! A path is written either as a dotted string (`"format.html.theme"`) or as
//! a sequence of keys. Either form resolves to the keys leading to the
//! containing mapping (the *ancestors*) plus the final key (the *leaf*).

use crate::error::{PathError, PathResult};
use crate::value::{Mapping, Value};

/// Anything that can be read as a key path.
///
/// Implementations only split the input into raw segments; emptiness checks
/// are shared in [`resolve_path`].
pub trait AsPath {
    /// Split into raw segments, rejecting inputs of the wrong shape.
    fn path_segments(&self) -> PathResult<Vec<&str>>;
}

impl AsPath for str {
    fn path_segments(&self) -> PathResult<Vec<&str>> {
        if self.is_empty() {
            return Err(PathError::EmptyPath);
        }
        Ok(self.split('.').collect())
    }
}

impl AsPath for String {
    fn path_segments(&self) -> PathResult<Vec<&str>> {
        self.as_str().path_segments()
    }
}

impl AsPath for [String] {
    fn path_segments(&self) -> PathResult<Vec<&str>> {
        Ok(self.iter().map(String::as_str).collect())
    }
}

impl AsPath for Vec<String> {
    fn path_segments(&self) -> PathResult<Vec<&str>> {
        self.as_slice().path_segments()
    }
}

impl AsPath for [&str] {
    fn path_segments(&self) -> PathResult<Vec<&str>> {
        Ok(self.to_vec())
    }
}

impl<const N: usize> AsPath for [&str; N] {
    fn path_segments(&self) -> PathResult<Vec<&str>> {
        self.as_slice().path_segments()
    }
}

impl AsPath for [Value] {
    fn path_segments(&self) -> PathResult<Vec<&str>> {
        self.iter()
            .map(|element| match element {
                Value::String(s) => Ok(s.as_str()),
                other => Err(PathError::InvalidPathElement {
                    value: other.clone(),
                }),
            })
            .collect()
    }
}

impl AsPath for Vec<Value> {
    fn path_segments(&self) -> PathResult<Vec<&str>> {
        self.as_slice().path_segments()
    }
}

/// A template argument used as a path.
///
/// Strings are dotted paths, sequences are key lists, and an absent argument
/// is a path with no keys.
impl AsPath for Value {
    fn path_segments(&self) -> PathResult<Vec<&str>> {
        match self {
            Value::String(s) => s.path_segments(),
            Value::Sequence(items) => items.path_segments(),
            Value::Null => Err(PathError::EmptyPath),
            other => Err(PathError::InvalidPathType {
                value: other.clone(),
            }),
        }
    }
}

/// A validated path split into ancestor keys and the leaf key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// Every key but the last, outermost first.
    pub ancestors: Vec<String>,
    /// The last key.
    pub leaf: String,
}

impl ResolvedPath {
    /// All keys in order, the leaf last.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.ancestors
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.leaf.as_str()))
    }

    /// The path joined back into dotted form.
    pub fn dotted(&self) -> String {
        self.keys().collect::<Vec<_>>().join(".")
    }
}

/// Resolve a path into ancestors and leaf.
///
/// Fails if the path has no segments, if any segment is empty, or if the
/// argument has the wrong shape.
pub fn resolve_path<P: AsPath + ?Sized>(path: &P) -> PathResult<ResolvedPath> {
    let segments = path.path_segments()?;
    if let Some(index) = segments.iter().position(|s| s.is_empty()) {
        return Err(PathError::EmptyPathElement { index });
    }

    let (leaf, ancestors) = segments.split_last().ok_or(PathError::EmptyPath)?;
    Ok(ResolvedPath {
        ancestors: ancestors.iter().map(|s| s.to_string()).collect(),
        leaf: leaf.to_string(),
    })
}

/// The mapping that holds (or would hold) the leaf of a path.
#[derive(Debug, Clone, PartialEq)]
pub struct Located<'a> {
    /// The innermost mapping reached through the ancestors.
    pub mapping: &'a Mapping,
    /// The leaf key to look up in `mapping`.
    pub leaf: String,
}

impl<'a> Located<'a> {
    /// The value stored at the leaf, if any.
    pub fn value(&self) -> Option<&'a Value> {
        self.mapping.get(&self.leaf)
    }
}

/// Walk `tree` through the ancestors of `path`.
///
/// Returns `Ok(None)` when an ancestor key is missing or holds something
/// other than a mapping. Only malformed paths are errors.
pub fn navigate<'a, P: AsPath + ?Sized>(
    tree: &'a Mapping,
    path: &P,
) -> PathResult<Option<Located<'a>>> {
    let resolved = resolve_path(path)?;
    let mapping = mapping_at(tree, &resolved.ancestors);
    if mapping.is_none() {
        tracing::trace!(path = %resolved.dotted(), "ancestor chain does not reach a mapping");
    }
    Ok(mapping.map(|mapping| Located {
        mapping,
        leaf: resolved.leaf,
    }))
}

/// Descend through `keys`, stopping at the first miss.
pub(crate) fn mapping_at<'a>(tree: &'a Mapping, keys: &[String]) -> Option<&'a Mapping> {
    keys.iter()
        .try_fold(tree, |current, key| current.get(key)?.as_mapping())
}

/// Mutable counterpart of [`mapping_at`].
pub(crate) fn mapping_at_mut<'a>(tree: &'a mut Mapping, keys: &[String]) -> Option<&'a mut Mapping> {
    keys.iter()
        .try_fold(tree, |current, key| current.get_mut(key)?.as_mapping_mut())
}
