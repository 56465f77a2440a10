//! Remove engine.
//!
//! Walks the document together with a compiled [`PathTrie`], deleting the
//! fields the trie marks as leaves. Everything the trie does not mention is
//! left exactly where it was.

use serde_json::{Map, Value};

use crate::trie::{Children, PathTrie, TrieNode};

/// Delete the fields named by `trie` from `tree`, in place.
///
/// Returns the same tree for chaining. Arrays are transparent: every element
/// is pruned with the same trie level. Missing fields are ignored and a path
/// that runs into a scalar stops there.
///
/// # Example
///
/// ```
/// use json_prune::{remove_in_place, PathTrie};
/// use serde_json::json;
///
/// let mut doc = json!({"a": [{"x": 1, "y": 2}, {"x": 3, "y": 4}], "b": true});
/// remove_in_place(&mut doc, &PathTrie::compile(&["a.x"]));
/// assert_eq!(doc, json!({"a": [{"y": 2}, {"y": 4}], "b": true}));
/// ```
pub fn remove_in_place<'a>(tree: &'a mut Value, trie: &PathTrie) -> &'a mut Value {
    if !trie.is_empty() {
        prune(tree, trie.children());
    }
    tree
}

fn prune(node: &mut Value, level: &Children) {
    match node {
        Value::Array(items) => {
            for item in items {
                prune(item, level);
            }
        }
        Value::Object(map) => prune_object(map, level),
        _ => {}
    }
}

fn prune_object(map: &mut Map<String, Value>, level: &Children) {
    let mut doomed: Vec<&str> = Vec::new();
    for (key, node) in level {
        match (node, map.get_mut(key)) {
            (TrieNode::Branch(children), Some(child)) => prune(child, children),
            (_, Some(_)) => doomed.push(key),
            (_, None) => {}
        }
    }
    if doomed.is_empty() {
        return;
    }
    tracing::trace!(fields = ?doomed, "removing fields");
    map.retain(|key, _| !doomed.contains(&key.as_str()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{PrefixPrecedence, PruneOptions};
    use serde_json::json;

    fn removed(mut doc: Value, paths: &[&str]) -> Value {
        remove_in_place(&mut doc, &PathTrie::compile(paths));
        doc
    }

    #[test]
    fn removes_top_level_field() {
        let doc = json!({"field1": 1, "field2": 2});
        assert_eq!(removed(doc, &["field1"]), json!({"field2": 2}));
    }

    #[test]
    fn removes_whole_subtree_at_leaf() {
        let doc = json!({"a": {"b": {"c": 1}}, "d": 2});
        assert_eq!(removed(doc, &["a"]), json!({"d": 2}));
    }

    #[test]
    fn removes_nested_field_only() {
        let doc = json!({"a": {"b": 1, "c": 2}});
        assert_eq!(removed(doc, &["a.b"]), json!({"a": {"c": 2}}));
    }

    #[test]
    fn nested_arrays_are_transparent() {
        let doc = json!({"a": [[{"x": 1, "y": 2}], [{"x": 3}]]});
        assert_eq!(removed(doc, &["a.x"]), json!({"a": [[{"y": 2}], [{}]]}));
    }

    #[test]
    fn array_root_is_transparent() {
        let doc = json!([{"x": 1, "y": 2}, {"x": 3}, 7]);
        assert_eq!(removed(doc, &["x"]), json!([{"y": 2}, {}, 7]));
    }

    #[test]
    fn scalar_in_the_middle_stops_recursion() {
        let doc = json!({"a": "text", "b": 1});
        assert_eq!(removed(doc.clone(), &["a.b.c"]), doc);
    }

    #[test]
    fn missing_fields_are_ignored() {
        let doc = json!({"a": 1});
        assert_eq!(removed(doc.clone(), &["nonexistent.field", "zzz"]), doc);
    }

    #[test]
    fn scalar_root_is_untouched() {
        assert_eq!(removed(json!(42), &["a"]), json!(42));
        assert_eq!(removed(Value::Null, &["a"]), Value::Null);
    }

    #[test]
    fn empty_trie_is_a_noop() {
        let doc = json!({"a": 1});
        assert_eq!(removed(doc.clone(), &[""]), doc);
        assert_eq!(removed(doc.clone(), &[]), doc);
    }

    #[test]
    fn surviving_keys_keep_their_order() {
        let doc = json!({"z": 1, "y": 2, "x": 3, "w": 4});
        let out = removed(doc, &["y"]);
        let keys: Vec<&String> = out.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "x", "w"]);
    }

    #[test]
    fn precedence_controls_overlapping_paths() {
        let doc = json!({"a": {"b": 1, "c": 2}, "d": 3});
        assert_eq!(removed(doc.clone(), &["a", "a.b"]), json!({"d": 3}));

        let opts = PruneOptions::default().with_prefix_precedence(PrefixPrecedence::LongestWins);
        let mut longest = doc;
        remove_in_place(&mut longest, &PathTrie::compile_with(&["a", "a.b"], &opts));
        assert_eq!(longest, json!({"a": {"c": 2}, "d": 3}));
    }
}
