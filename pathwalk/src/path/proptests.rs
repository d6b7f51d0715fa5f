//! Property-based tests for the path algebra.
//!
//! Note: The grammar and value modules carry example-based tests for the
//! literal decomposition scenarios. This module checks the algebraic
//! identities over generated inputs, including irregular separator runs.

use proptest::prelude::*;

use super::grammar;
use super::Path;

// Strategy for a single path component (no separators, no dots)
fn component_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,10}"
}

// Strategy for a run of 1..4 separators drawn from both accepted characters
fn separator_run_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![Just('\\'), Just('/')], 1..4)
        .prop_map(|chars| chars.into_iter().collect())
}

// Relative path with irregular separator runs between components
fn dirty_relative_strategy() -> impl Strategy<Value = (String, Vec<String>)> {
    prop::collection::vec((component_strategy(), separator_run_strategy()), 1..6).prop_map(
        |parts| {
            let mut text = String::new();
            let mut components = Vec::new();
            for (i, (component, run)) in parts.iter().enumerate() {
                if i > 0 {
                    text.push_str(run);
                }
                text.push_str(component);
                components.push(component.clone());
            }
            (text, components)
        },
    )
}

// Relative path with exactly one separator between components
fn clean_path_strategy() -> impl Strategy<Value = String> {
    (
        prop::option::of("[a-zA-Z]:\\\\"),
        prop::collection::vec(component_strategy(), 1..6),
    )
        .prop_map(|(root, parts)| format!("{}{}", root.unwrap_or_default(), parts.join("\\")))
}

// Any path text: optional drive prefix, optional root separator, dirty body
fn any_path_strategy() -> impl Strategy<Value = String> {
    (
        prop::option::of("[a-zA-Z]:"),
        prop::option::of(separator_run_strategy()),
        dirty_relative_strategy(),
    )
        .prop_map(|(drive, root, (body, _))| {
            let mut text = String::new();
            if let Some(drive) = drive {
                text.push_str(&drive);
            }
            if let Some(root) = root {
                text.push_str(&root);
            }
            text.push_str(&body);
            text
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // root_path is always the concatenation of root_name and root_directory
    #[test]
    fn root_path_is_name_plus_directory(text in any_path_strategy()) {
        let expected = format!("{}{}", grammar::root_name(&text), grammar::root_directory(&text));
        prop_assert_eq!(grammar::root_path(&text), expected);
    }

    // every path is the concatenation of its root path and relative path
    #[test]
    fn path_is_root_plus_relative(text in any_path_strategy()) {
        let whole = format!("{}{}", grammar::root_path(&text), grammar::relative_path(&text));
        prop_assert_eq!(text, whole);
    }

    // when a filename exists, parent / filename recomposes the path
    // (modulo separator normalization)
    #[test]
    fn parent_join_filename_recomposes(text in clean_path_strategy()) {
        let path = Path::from(text.as_str());
        if path.has_filename() && path.parent_path() != path.as_str() {
            let recomposed = Path::from(path.parent_path()).join(path.filename());
            prop_assert_eq!(recomposed, path);
        }
    }

    // make_preferred is idempotent
    #[test]
    fn make_preferred_idempotent(text in any_path_strategy()) {
        let mut once = Path::from(text.as_str());
        once.make_preferred();
        let mut twice = once.clone();
        twice.make_preferred();
        prop_assert_eq!(once, twice);
    }

    // stem + extension always reassembles the filename
    #[test]
    fn stem_plus_extension_is_filename(text in any_path_strategy()) {
        let reassembled = format!("{}{}", grammar::stem(&text), grammar::extension(&text));
        prop_assert_eq!(grammar::filename(&text), reassembled);
    }

    // iterating a dirty relative path yields exactly its components in order
    #[test]
    fn component_iteration_roundtrip((text, components) in dirty_relative_strategy()) {
        let path = Path::from(text.as_str());
        let elements: Vec<String> = path.components().map(ToString::to_string).collect();
        prop_assert_eq!(elements, components);
    }

    // iteration never yields an empty element, for any input
    #[test]
    fn no_empty_elements(text in any_path_strategy()) {
        let path = Path::from(text.as_str());
        for element in &path {
            prop_assert!(!element.is_empty());
        }
    }

    // grammar functions are total: they never panic on arbitrary text
    #[test]
    fn grammar_total_over_arbitrary_text(text in ".{0,40}") {
        let _ = grammar::root_name(&text);
        let _ = grammar::root_directory(&text);
        let _ = grammar::root_path(&text);
        let _ = grammar::relative_path(&text);
        let _ = grammar::parent_path(&text);
        let _ = grammar::filename(&text);
        let _ = grammar::extension(&text);
        let _ = grammar::stem(&text);
        let _ = Path::from(text.as_str()).components().count();
    }
}
