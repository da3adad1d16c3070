/*
 * ini_fixtures.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Encode trees and compare against the expected INI fixtures, then decode
 * the fixtures back.
 */

use cfgtree::{Mapping, Value, ini};
use pretty_assertions::assert_eq;
use std::path::Path;

/// Helper to get the path to test fixtures
fn fixture_path(name: &str) -> std::path::PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    Path::new(manifest_dir)
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Helper to load a fixture as text
fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

fn map<const N: usize>(entries: [(&str, Value); N]) -> Mapping {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

fn section<const N: usize>(entries: [(&str, Value); N]) -> Value {
    Value::Mapping(map(entries))
}

/// Every scalar replaced by its INI rendering, which is what decoding gives back.
fn stringified(tree: &Mapping) -> Mapping {
    tree.iter()
        .map(|(key, value)| {
            let value = match value {
                Value::Mapping(child) => Value::Mapping(stringified(child)),
                other => Value::String(cfgtree::render(other).into_owned()),
            };
            (key.clone(), value)
        })
        .collect()
}

fn assert_fixture(tree: &Mapping, name: &str) {
    let expected = load_fixture(name);
    assert_eq!(ini::encode(tree), expected, "encoding {}", name);
    assert_eq!(
        ini::decode(&expected).unwrap(),
        stringified(tree),
        "decoding {}",
        name
    );
}

#[test]
fn test_native_scalars() {
    let tree = map([
        ("bool", Value::from(true)),
        ("float", Value::from(1.0)),
        ("int", Value::from(1)),
        ("quotedString", Value::from("\"")),
        ("string", Value::from("string")),
    ]);
    assert_fixture(&tree, "native-scalars.ini");
}

#[test]
fn test_ambiguous_strings() {
    let tree = map([
        ("bool", Value::from("true")),
        ("float", Value::from("1.0")),
        ("int", Value::from("1")),
        ("string", Value::from("string string")),
    ]);
    assert_fixture(&tree, "ambiguous-strings.ini");
}

#[test]
fn test_one_section() {
    let tree = map([
        ("key", Value::from("value")),
        ("section", section([("subKey", Value::from("subValue"))])),
    ]);
    assert_fixture(&tree, "one-section.ini");
}

#[test]
fn test_empty_parent_section() {
    let tree = map([(
        "section",
        section([(
            "subsection",
            section([("subSubKey", Value::from("subSubValue"))]),
        )]),
    )]);
    assert_fixture(&tree, "empty-parent-section.ini");
}

#[test]
fn test_nested_sections() {
    let tree = map([
        ("key", Value::from("value")),
        (
            "section",
            section([
                ("subKey", Value::from("subValue")),
                (
                    "subsection",
                    section([("subSubKey", Value::from("subSubValue"))]),
                ),
            ]),
        ),
    ]);
    assert_fixture(&tree, "nested-sections.ini");
}

#[test]
fn test_sibling_sections_depth_first() {
    // Inserted out of order: output order must come from sorting alone.
    let tree = map([
        (
            "section2",
            section([
                (
                    "subsection2b",
                    section([("subSubKey2b", Value::from("subSubValue2b"))]),
                ),
                ("subKey2", Value::from("subValue2")),
                (
                    "subsection2a",
                    section([("subSubKey2a", Value::from("subSubValue2a"))]),
                ),
            ]),
        ),
        (
            "section1",
            section([
                ("subKey1", Value::from("subValue1")),
                (
                    "subsection1b",
                    section([("subSubKey1b", Value::from("subSubValue1b"))]),
                ),
                (
                    "subsection1a",
                    section([("subSubKey1a", Value::from("subSubValue1a"))]),
                ),
            ]),
        ),
    ]);
    assert_fixture(&tree, "sibling-sections.ini");
}

#[test]
fn test_awkward_strings_round_trip() {
    let tree = map([
        ("backslash", Value::from("C:\\path")),
        ("bell", Value::from("\u{7}")),
        ("empty", Value::from("")),
        ("leadingQuote", Value::from("'x'")),
        ("multiline", Value::from("line1\nline2")),
        ("padded", Value::from("  both  ")),
        ("tab", Value::from("a\tb")),
        ("unicode", Value::from("héllo wörld")),
    ]);
    let decoded = ini::decode(&ini::encode(&tree)).unwrap();
    assert_eq!(decoded, tree);
}

#[test]
fn test_awkward_keys() {
    let tree = map([
        ("#comment", Value::from("v1")),
        (";comment", Value::from("v2")),
        ("a=b", Value::from("v3")),
        ("", Value::from("v4")),
        ("[x", Value::from("v5")),
        (" padded ", Value::from("v6")),
        ("dotted.key", section([("inner key", Value::from("v7"))])),
    ]);
    assert_fixture(&tree, "awkward-keys.ini");
}
