//! Dotted field paths.
//!
//! This crate implements the small path dialect used by `json-prune`: a path
//! is a list of literal field names joined with `.`, such as
//! `field3.array.arrayField2`. There are no indices, wildcards or predicates;
//! arrays are traversed implicitly, so a step matches the named field inside
//! every element.
//!
//! # Example
//!
//! ```
//! use json_prune_path::{parse_path, format_path};
//!
//! // Parse a dotted path into its steps
//! let path = parse_path("foo.bar");
//! assert_eq!(path, vec!["foo".to_string(), "bar".to_string()]);
//!
//! // Format steps back to a dotted path
//! assert_eq!(format_path(&path), "foo.bar");
//! ```

pub mod types;
pub use types::{Path, PathStep, DEFAULT_SEPARATOR};

/// Parse a dotted path into its steps.
///
/// Empty segments (from leading, trailing or doubled separators) are
/// dropped, so `""`, `"."` and `".."` all parse to the empty path.
///
/// # Example
///
/// ```
/// use json_prune_path::parse_path;
///
/// assert_eq!(parse_path(""), Vec::<String>::new());
/// assert_eq!(parse_path("field1"), vec!["field1"]);
/// assert_eq!(parse_path("a.b.c"), vec!["a", "b", "c"]);
/// assert_eq!(parse_path("a..b."), vec!["a", "b"]);
/// ```
pub fn parse_path(path: &str) -> Path {
    parse_path_with(path, DEFAULT_SEPARATOR)
}

/// Parse a path using a custom separator.
///
/// # Example
///
/// ```
/// use json_prune_path::parse_path_with;
///
/// assert_eq!(parse_path_with("a/b.c", '/'), vec!["a", "b.c"]);
/// ```
pub fn parse_path_with(path: &str, separator: char) -> Path {
    if path.is_empty() {
        return Vec::new();
    }
    path.split(separator)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Format path steps into a dotted path.
///
/// Returns an empty string for the empty path.
///
/// # Example
///
/// ```
/// use json_prune_path::format_path;
///
/// assert_eq!(format_path(&[]), "");
/// assert_eq!(format_path(&["foo".to_string()]), "foo");
/// assert_eq!(format_path(&["foo".to_string(), "bar".to_string()]), "foo.bar");
/// ```
pub fn format_path(path: &[String]) -> String {
    format_path_with(path, DEFAULT_SEPARATOR)
}

/// Format path steps using a custom separator.
pub fn format_path_with(path: &[String], separator: char) -> String {
    let mut out = String::new();
    for (i, step) in path.iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        out.push_str(step);
    }
    out
}
