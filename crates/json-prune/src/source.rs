//! Input coercion.
//!
//! Anything the pruning functions accept is first turned into a
//! [`serde_json::Value`]: trees are used as they are, text is parsed, and
//! other serializable values go through JSON text and back. An absent
//! source (`None`) is kept apart from a JSON `null`.

use serde::Serialize;
use serde_json::Value;

use crate::error::PruneError;

/// A source that can be turned into a JSON tree.
pub trait IntoTree {
    /// Produce the tree, or `None` when there is no source at all.
    fn into_tree(self) -> Result<Option<Value>, PruneError>;
}

impl IntoTree for Value {
    fn into_tree(self) -> Result<Option<Value>, PruneError> {
        Ok(Some(self))
    }
}

/// Borrowed trees are cloned, so removal never touches the caller's copy.
impl IntoTree for &Value {
    fn into_tree(self) -> Result<Option<Value>, PruneError> {
        Ok(Some(self.clone()))
    }
}

impl IntoTree for &str {
    fn into_tree(self) -> Result<Option<Value>, PruneError> {
        parse_text(self)
    }
}

impl IntoTree for String {
    fn into_tree(self) -> Result<Option<Value>, PruneError> {
        parse_text(&self)
    }
}

impl IntoTree for &String {
    fn into_tree(self) -> Result<Option<Value>, PruneError> {
        parse_text(self)
    }
}

/// `None` is an absent source, which both operations turn into `{}`.
impl<T: IntoTree> IntoTree for Option<T> {
    fn into_tree(self) -> Result<Option<Value>, PruneError> {
        match self {
            Some(inner) => inner.into_tree(),
            None => Ok(None),
        }
    }
}

/// Wraps any serializable value so it can be pruned.
///
/// The value is written as JSON text and parsed back, which keeps numbers
/// exactly as the serializer printed them.
///
/// # Example
///
/// ```
/// use json_prune::{keep_fields, Serialized};
/// use serde_json::json;
/// use std::collections::BTreeMap;
///
/// let mut config = BTreeMap::new();
/// config.insert("host", "localhost");
/// config.insert("password", "hunter2");
///
/// let kept = keep_fields(Serialized(&config), &["host"]).unwrap();
/// assert_eq!(kept, json!({"host": "localhost"}));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Serialized<T>(pub T);

impl<T: Serialize> IntoTree for Serialized<T> {
    fn into_tree(self) -> Result<Option<Value>, PruneError> {
        let text = serde_json::to_string(&self.0).map_err(PruneError::Serialization)?;
        parse_text(&text)
    }
}

fn parse_text(text: &str) -> Result<Option<Value>, PruneError> {
    serde_json::from_str(text).map(Some).map_err(PruneError::Parse)
}
