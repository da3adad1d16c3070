/*
 * properties.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Property-based tests for navigation, mutation and the INI codec.
 */

use cfgtree::{Mapping, Value, delete_value_at_path, ini, navigate, set_value_at_path};
use proptest::prelude::*;

// ============================================================================
// Generators
// ============================================================================

fn key() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

fn path() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(key(), 1..4)
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,8}".prop_map(Value::String),
        any::<i64>().prop_map(Value::Integer),
        any::<bool>().prop_map(Value::Bool),
    ]
}

/// Nested mappings up to three levels deep with scalar leaves.
fn tree() -> impl Strategy<Value = Mapping> {
    let value = scalar().prop_recursive(3, 24, 4, |inner| {
        prop::collection::vec((key(), inner), 0..4)
            .prop_map(|entries| Value::Mapping(entries.into_iter().collect()))
    });
    prop::collection::vec((key(), value), 0..5).prop_map(|entries| entries.into_iter().collect())
}

/// Flat mappings of arbitrary strings, including ones that need quoting.
fn flat_string_tree() -> impl Strategy<Value = Mapping> {
    prop::collection::vec((key(), any::<String>()), 0..6).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect()
    })
}

/// One level of sections with arbitrary keys and string values.
fn arbitrary_key_tree() -> impl Strategy<Value = Mapping> {
    let leaf = any::<String>().prop_map(Value::String);
    let section = prop::collection::vec((any::<String>(), leaf.clone()), 0..3)
        .prop_map(|entries| Value::Mapping(entries.into_iter().collect()));
    prop::collection::vec((any::<String>(), prop_oneof![leaf, section]), 0..5)
        .prop_map(|entries| entries.into_iter().collect())
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn set_then_navigate_finds_value(tree in tree(), path in path(), value in scalar()) {
        let updated = set_value_at_path(&path, value.clone(), tree).unwrap();
        let located = navigate(&updated, &path).unwrap();
        prop_assert!(located.is_some());
        prop_assert_eq!(located.unwrap().value(), Some(&value));
    }

    #[test]
    fn set_preserves_other_top_level_keys(tree in tree(), path in path(), value in scalar()) {
        let updated = set_value_at_path(&path, value, tree.clone()).unwrap();
        for (key, original) in tree.iter().filter(|(key, _)| **key != path[0]) {
            prop_assert_eq!(updated.get(key), Some(original));
        }
    }

    #[test]
    fn delete_then_navigate_is_absent(tree in tree(), path in path()) {
        let updated = delete_value_at_path(&path, tree).unwrap();
        if let Some(located) = navigate(&updated, &path).unwrap() {
            prop_assert_eq!(located.value(), None);
        }
    }

    #[test]
    fn delete_is_idempotent(tree in tree(), path in path()) {
        let once = delete_value_at_path(&path, tree).unwrap();
        let twice = delete_value_at_path(&path, once.clone()).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn flat_strings_round_trip(tree in flat_string_tree()) {
        let decoded = ini::decode(&ini::encode(&tree)).unwrap();
        prop_assert_eq!(decoded, tree);
    }

    #[test]
    fn arbitrary_keys_round_trip(tree in arbitrary_key_tree()) {
        let decoded = ini::decode(&ini::encode(&tree)).unwrap();
        prop_assert_eq!(decoded, tree);
    }

    #[test]
    fn encoding_ignores_insertion_order(tree in tree()) {
        let reversed: Mapping = tree.clone().into_iter().rev().collect();
        prop_assert_eq!(ini::encode(&reversed), ini::encode(&tree));
    }
}
