//! Keep engine.
//!
//! Unlike removal, keeping is driven by the parsed paths directly: each path
//! is walked against the source and the chain it names is rebuilt in a fresh
//! output tree. When a step lands on an array, the rest of the path is
//! replayed against every element.

use json_prune_path::{format_path, Path};
use serde_json::{Map, Value};

/// Build a new tree holding only the fields named by `paths`.
///
/// The source is never modified. Results of all paths are merged into one
/// output root whose shape mirrors the source root: an array source yields
/// one entry per element, anything else yields an object. A `null` or scalar
/// source, or a path list with no usable path, yields `{}`.
///
/// # Example
///
/// ```
/// use json_prune::keep_tree;
/// use json_prune_path::parse_path;
/// use serde_json::json;
///
/// let doc = json!({"a": [{"x": 1, "y": 2}, {"x": 3, "y": 4}], "b": true});
/// let kept = keep_tree(&doc, &[parse_path("a.x")]);
/// assert_eq!(kept, json!({"a": [{"x": 1}, {"x": 3}]}));
/// ```
pub fn keep_tree(tree: &Value, paths: &[Path]) -> Value {
    let paths: Vec<&Path> = paths.iter().filter(|path| !path.is_empty()).collect();
    if paths.is_empty() {
        return Value::Object(Map::new());
    }
    match tree {
        Value::Array(items) => {
            let mut built = Vec::with_capacity(items.len());
            for path in &paths {
                fan_out(items, &mut built, path, path);
            }
            Value::Array(built)
        }
        Value::Object(_) => {
            let mut out = Map::new();
            for path in &paths {
                keep_path(tree, &mut out, path, path);
            }
            Value::Object(out)
        }
        _ => Value::Object(Map::new()),
    }
}

/// Copy the chain named by `steps` from `source` into `out`.
///
/// `full` is the whole path, used only for diagnostics.
fn keep_path(source: &Value, out: &mut Map<String, Value>, steps: &[String], full: &[String]) {
    let Some((step, rest)) = steps.split_first() else {
        return;
    };
    let Some(found) = source.as_object().and_then(|map| map.get(step)) else {
        tracing::trace!(path = %format_path(full), missing = %step, "keep path abandoned");
        return;
    };

    if rest.is_empty() {
        out.insert(step.clone(), found.clone());
        return;
    }

    match found {
        Value::Array(items) => {
            let slot = out
                .entry(step.clone())
                .or_insert_with(|| Value::Array(Vec::with_capacity(items.len())));
            if !slot.is_array() {
                *slot = Value::Array(Vec::with_capacity(items.len()));
            }
            if let Value::Array(built) = slot {
                fan_out(items, built, rest, full);
            }
        }
        Value::Object(_) => {
            let created = !out.contains_key(step);
            let slot = out
                .entry(step.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            let emptied = match slot {
                Value::Object(inner) => {
                    keep_path(found, inner, rest, full);
                    inner.is_empty()
                }
                _ => false,
            };
            if created && emptied {
                out.remove(step);
            }
        }
        _ => {
            tracing::trace!(path = %format_path(full), scalar = %step, "keep path abandoned");
        }
    }
}

/// Replay `rest` against every element of `items`, merging into `built`.
///
/// `built` holds one output per element. Nested arrays fan out again;
/// elements that cannot hold fields still get an (empty) object so that
/// positions line up with the source.
fn fan_out(items: &[Value], built: &mut Vec<Value>, rest: &[String], full: &[String]) {
    for (i, item) in items.iter().enumerate() {
        if built.len() <= i {
            built.push(match item {
                Value::Array(_) => Value::Array(Vec::new()),
                _ => Value::Object(Map::new()),
            });
        }
        match (item, &mut built[i]) {
            (Value::Array(inner), Value::Array(inner_built)) => {
                fan_out(inner, inner_built, rest, full)
            }
            (_, Value::Object(element)) => keep_path(item, element, rest, full),
            _ => {}
        }
    }
}
