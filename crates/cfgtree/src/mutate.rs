/*
 * mutate.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Setting and deleting values at a path.
//!
//! Every function here takes the tree by value and hands back the result, so
//! a caller can never observe a half-applied change on a tree it still holds.
//! Callers that need the original keep a clone.

use crate::error::PathResult;
use crate::path::{AsPath, ResolvedPath, mapping_at_mut, resolve_path};
use crate::value::{Mapping, Value};

/// Store `value` at `path`, creating intermediate mappings as needed.
///
/// Any non-mapping value found on the way is replaced by a fresh mapping.
/// The leaf is overwritten outright, even if it held a mapping: setting
/// `"key1"` on `{"key1": {"key2": ..}}` yields `{"key1": value}`. Keys not
/// on the path keep their values and positions.
pub fn set_value_at_path<P: AsPath + ?Sized>(
    path: &P,
    value: Value,
    tree: Mapping,
) -> PathResult<Mapping> {
    let resolved = resolve_path(path)?;
    tracing::debug!(path = %resolved.dotted(), "setting value");
    let ResolvedPath { ancestors, leaf } = resolved;
    Ok(update_mapping_at(tree, &ancestors, |map| {
        map.insert(leaf, value);
    }))
}

/// Descend through `keys`, creating or replacing mappings on the way, and
/// apply `update` to the innermost one.
pub(crate) fn update_mapping_at(
    mut map: Mapping,
    keys: &[String],
    update: impl FnOnce(&mut Mapping),
) -> Mapping {
    match keys.split_first() {
        None => update(&mut map),
        Some((key, rest)) => {
            let child = match map.get_mut(key).map(std::mem::take) {
                Some(Value::Mapping(child)) => child,
                Some(other) => {
                    tracing::trace!(key = %key, found = other.type_name(), "replacing with mapping");
                    Mapping::new()
                }
                None => Mapping::new(),
            };
            map.insert(key.clone(), Value::Mapping(update_mapping_at(child, rest, update)));
        }
    }
    map
}

/// Remove the value at `path`.
///
/// A path whose ancestors do not lead to a mapping, or whose leaf is absent,
/// leaves the tree unchanged. Only malformed paths are errors.
pub fn delete_value_at_path<P: AsPath + ?Sized>(path: &P, mut tree: Mapping) -> PathResult<Mapping> {
    let resolved = resolve_path(path)?;
    match mapping_at_mut(&mut tree, &resolved.ancestors) {
        Some(map) => {
            let removed = map.shift_remove(&resolved.leaf);
            tracing::debug!(
                path = %resolved.dotted(),
                removed = removed.is_some(),
                "deleting value"
            );
        }
        None => {
            tracing::debug!(path = %resolved.dotted(), "nothing to delete");
        }
    }
    Ok(tree)
}

/// Recursively drop keys whose value is an empty mapping.
///
/// Children are pruned first, so a mapping that only held empty mappings
/// disappears too.
pub fn prune_empty_mappings(tree: Mapping) -> Mapping {
    tree.into_iter()
        .filter_map(|(key, value)| match value {
            Value::Mapping(child) => {
                let child = prune_empty_mappings(child);
                (!child.is_empty()).then(|| (key, Value::Mapping(child)))
            }
            other => Some((key, other)),
        })
        .collect()
}
