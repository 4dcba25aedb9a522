//! Tree flattening: project a generic value tree onto its leaf paths.

use std::collections::BTreeMap;

use propdiff_value::{PropertyPath, Value};

/// Mapping from property path to the canonical text of the leaf found there.
///
/// Every entry corresponds to a non-null leaf somewhere in the source tree;
/// null leaves and empty containers contribute no entry. Each call to
/// [`flatten`] returns an independent view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlattenedView {
    entries: BTreeMap<PropertyPath, String>,
}

impl FlattenedView {
    /// Returns `true` if no leaves were recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded leaves.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Canonical text recorded at a path, if any.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    /// Iterate entries in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&PropertyPath, &str)> {
        self.entries.iter().map(|(path, text)| (path, text.as_str()))
    }

    /// Iterate recorded paths in order.
    pub fn paths(&self) -> impl Iterator<Item = &PropertyPath> {
        self.entries.keys()
    }
}

/// Flatten a value tree into a mapping from leaf path to canonical text.
///
/// Depth-first pre-order walk starting at the empty root path. Mapping
/// fields extend the path with `.<field>`, sequence elements with their
/// zero-based `[<index>]`. Sequence elements are identified purely by
/// position, so a reordered sequence diffs element-by-element against the
/// old positions. Null leaves and empty containers record nothing; a null
/// root yields an empty view. Total over any value, pure, and bounded only
/// by tree depth.
pub fn flatten(value: &Value) -> FlattenedView {
    let mut entries = BTreeMap::new();
    walk(PropertyPath::root(), value, &mut entries);
    FlattenedView { entries }
}

fn walk(path: PropertyPath, value: &Value, entries: &mut BTreeMap<PropertyPath, String>) {
    match value {
        Value::Null => {}
        Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            if let Some(text) = value.canonical_text() {
                entries.insert(path, text);
            }
        }
        Value::Sequence(items) => {
            for (i, item) in items.iter().enumerate() {
                walk(path.index(i), item, entries);
            }
        }
        Value::Mapping(fields) => {
            for (name, child) in fields {
                walk(path.field(name), child, entries);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    #[test]
    fn null_root_is_empty() {
        assert!(flatten(&Value::Null).is_empty());
    }

    #[test]
    fn scalar_root_records_the_root_path() {
        let view = flatten(&Value::from(42i64));
        assert_eq!(view.len(), 1);
        assert_eq!(view.get(""), Some("42"));
    }

    #[test]
    fn mapping_fields_become_dotted_paths() {
        let view = flatten(&tree(json!({"title": "A", "meta": {"tag": "x"}})));
        assert_eq!(view.get("title"), Some("A"));
        assert_eq!(view.get("meta.tag"), Some("x"));
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn sequence_elements_become_indexed_paths() {
        let view = flatten(&tree(json!({"list": ["x", "y"]})));
        assert_eq!(view.get("list[0]"), Some("x"));
        assert_eq!(view.get("list[1]"), Some("y"));
    }

    #[test]
    fn leaves_canonicalize() {
        let view = flatten(&tree(json!({"flag": true, "n": 1.0, "s": "text"})));
        assert_eq!(view.get("flag"), Some("true"));
        assert_eq!(view.get("n"), Some("1"));
        assert_eq!(view.get("s"), Some("text"));
    }

    #[test]
    fn null_leaves_record_nothing() {
        let view = flatten(&tree(json!({"present": "x", "absent": null})));
        assert_eq!(view.len(), 1);
        assert_eq!(view.get("absent"), None);
    }

    #[test]
    fn empty_containers_record_nothing() {
        let view = flatten(&tree(json!({"seq": [], "map": {}})));
        assert!(view.is_empty());
    }

    #[test]
    fn deep_nesting_builds_combined_paths() {
        let view = flatten(&tree(json!({"a": [{"b": {"c": [1, 2]}}]})));
        assert_eq!(view.get("a[0].b.c[0]"), Some("1"));
        assert_eq!(view.get("a[0].b.c[1]"), Some("2"));
    }

    #[test]
    fn iteration_is_in_path_order() {
        let view = flatten(&tree(json!({"b": 1, "a": 2, "c": 3})));
        let entries: Vec<(&str, &str)> = view.iter().map(|(p, v)| (p.as_str(), v)).collect();
        assert_eq!(entries, vec![("a", "2"), ("b", "1"), ("c", "3")]);
        let paths: Vec<&str> = view.paths().map(|p| p.as_str()).collect();
        assert_eq!(paths, vec!["a", "b", "c"]);
    }

    #[test]
    fn repeated_flatten_yields_identical_views() {
        let value = tree(json!({"a": {"b": [1, true, "x"]}, "n": null}));
        assert_eq!(flatten(&value), flatten(&value));
    }
}
