//! Keep or remove fields of a JSON document by dotted path.
//!
//! Two complementary operations share one path dialect (see
//! [`json_prune_path`]):
//!
//! - **keep** retains only the named paths and always builds a new tree;
//! - **remove** deletes the named paths and leaves everything else in place.
//!
//! Arrays are traversed implicitly: a path step that lands on an array
//! applies to the named field inside every element.
//!
//! # Example
//!
//! ```
//! use json_prune::{keep_fields, remove_fields};
//! use serde_json::json;
//!
//! let doc = json!({
//!     "field1": 1,
//!     "field2": 2,
//!     "field3": {"array": [{"arrayField1": 1, "arrayField2": "AB"}, {"arrayField2": "CD"}]}
//! });
//!
//! let kept = keep_fields(&doc, &["field3.array.arrayField2"]).unwrap();
//! assert_eq!(kept, json!({"field3": {"array": [{"arrayField2": "AB"}, {"arrayField2": "CD"}]}}));
//!
//! let removed = remove_fields(&doc, &["field2", "field3.array.arrayField1"]).unwrap();
//! assert_eq!(removed, json!({
//!     "field1": 1,
//!     "field3": {"array": [{"arrayField2": "AB"}, {"arrayField2": "CD"}]}
//! }));
//! ```

use json_prune_path::{parse_path_with, Path};
use serde_json::{Map, Value};

mod error;
pub use error::PruneError;

mod options;
pub use options::{PrefixPrecedence, PruneOptions};

mod source;
pub use source::{IntoTree, Serialized};

pub mod trie;
pub use trie::{PathTrie, TrieNode};

mod keep;
pub use keep::keep_tree;

mod remove;
pub use remove::remove_in_place;

/// Keep only the fields named by `paths`.
///
/// An empty path list, or only empty paths, yields `{}`, as does an absent
/// source (`None`).
///
/// # Errors
///
/// Returns [`PruneError::Parse`] for invalid JSON text and
/// [`PruneError::Serialization`] for a [`Serialized`] value that cannot be
/// written as JSON.
///
/// # Example
///
/// ```
/// use json_prune::keep_fields;
/// use serde_json::json;
///
/// let kept = keep_fields(r#"{"a":[{"x":1,"y":2},{"x":3,"y":4}]}"#, &["a.x"]).unwrap();
/// assert_eq!(kept, json!({"a": [{"x": 1}, {"x": 3}]}));
///
/// assert_eq!(keep_fields(json!({"a": 1}), &[""]).unwrap(), json!({}));
/// ```
pub fn keep_fields<S, P>(source: S, paths: &[P]) -> Result<Value, PruneError>
where
    S: IntoTree,
    P: AsRef<str>,
{
    keep_fields_with(source, paths, &PruneOptions::default())
}

/// [`keep_fields`] with explicit options.
///
/// # Errors
///
/// See [`keep_fields`].
pub fn keep_fields_with<S, P>(
    source: S,
    paths: &[P],
    options: &PruneOptions,
) -> Result<Value, PruneError>
where
    S: IntoTree,
    P: AsRef<str>,
{
    let Some(tree) = source.into_tree()? else {
        tracing::debug!(paths = paths.len(), "keeping fields of an absent source");
        return Ok(Value::Object(Map::new()));
    };
    let parsed = parse_all(paths, options.separator);
    tracing::debug!(
        paths = paths.len(),
        usable = parsed.iter().filter(|path| !path.is_empty()).count(),
        root = root_kind(&tree),
        "keeping fields"
    );
    Ok(keep_tree(&tree, &parsed))
}

/// [`keep_fields`], serialized to compact JSON text.
///
/// # Errors
///
/// See [`keep_fields`].
pub fn keep_fields_as_text<S, P>(source: S, paths: &[P]) -> Result<String, PruneError>
where
    S: IntoTree,
    P: AsRef<str>,
{
    to_text(&keep_fields(source, paths)?)
}

/// Remove the fields named by `paths`, keeping everything else.
///
/// The source is coerced into an owned tree first and pruned in place, so a
/// borrowed `&Value` is left untouched. An empty path list, or only empty
/// paths, returns the tree unchanged. An absent source (`None`) yields `{}`.
///
/// # Errors
///
/// See [`keep_fields`].
///
/// # Example
///
/// ```
/// use json_prune::remove_fields;
/// use serde_json::json;
///
/// let doc = json!({"a": [{"x": 1, "y": 2}, {"x": 3, "y": 4}], "b": true});
/// let removed = remove_fields(&doc, &["a.x", "nonexistent.field"]).unwrap();
/// assert_eq!(removed, json!({"a": [{"y": 2}, {"y": 4}], "b": true}));
///
/// assert_eq!(remove_fields(&doc, &[""]).unwrap(), doc);
/// ```
pub fn remove_fields<S, P>(source: S, paths: &[P]) -> Result<Value, PruneError>
where
    S: IntoTree,
    P: AsRef<str>,
{
    remove_fields_with(source, paths, &PruneOptions::default())
}

/// [`remove_fields`] with explicit options.
///
/// # Errors
///
/// See [`keep_fields`].
pub fn remove_fields_with<S, P>(
    source: S,
    paths: &[P],
    options: &PruneOptions,
) -> Result<Value, PruneError>
where
    S: IntoTree,
    P: AsRef<str>,
{
    let Some(mut tree) = source.into_tree()? else {
        tracing::debug!(paths = paths.len(), "removing fields of an absent source");
        return Ok(Value::Object(Map::new()));
    };
    let trie = PathTrie::compile_with(paths, options);
    tracing::debug!(
        paths = paths.len(),
        usable = trie.paths().len(),
        root = root_kind(&tree),
        "removing fields"
    );
    remove_in_place(&mut tree, &trie);
    Ok(tree)
}

/// [`remove_fields`], serialized to compact JSON text.
///
/// # Errors
///
/// See [`keep_fields`].
pub fn remove_fields_as_text<S, P>(source: S, paths: &[P]) -> Result<String, PruneError>
where
    S: IntoTree,
    P: AsRef<str>,
{
    to_text(&remove_fields(source, paths)?)
}

fn parse_all<P: AsRef<str>>(paths: &[P], separator: char) -> Vec<Path> {
    paths
        .iter()
        .map(|path| parse_path_with(path.as_ref(), separator))
        .collect()
}

fn to_text(tree: &Value) -> Result<String, PruneError> {
    serde_json::to_string(tree).map_err(PruneError::Serialization)
}

fn root_kind(tree: &Value) -> &'static str {
    match tree {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
