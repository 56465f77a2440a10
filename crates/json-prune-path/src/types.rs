//! Type definitions for dotted field paths.

/// A single field name in a dotted path.
///
/// Steps are literal object keys; there is no index or wildcard syntax.
pub type PathStep = String;

/// A parsed dotted path.
pub type Path = Vec<PathStep>;

/// The segment separator used when none is configured.
pub const DEFAULT_SEPARATOR: char = '.';
