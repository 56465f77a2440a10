//! Options shared by the keep and remove pipelines.

use json_prune_path::DEFAULT_SEPARATOR;

/// How the path compiler resolves a path that is a prefix of another one,
/// e.g. `a` together with `a.b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrefixPrecedence {
    /// The shorter path is terminal and covers everything below it:
    /// `a` is handled wholesale, `a.b` is redundant. Order does not matter.
    #[default]
    ShortestWins,
    /// The longer path turns the shorter one into a branch: only `a.b` is
    /// handled. A later shorter path never collapses an existing branch.
    LongestWins,
}

/// Settings shared by [`keep_fields_with`](crate::keep_fields_with) and
/// [`remove_fields_with`](crate::remove_fields_with).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneOptions {
    /// Character separating field names in a path.
    pub separator: char,
    /// Tie-break between overlapping paths when compiling for removal.
    pub prefix_precedence: PrefixPrecedence,
}

impl Default for PruneOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            prefix_precedence: PrefixPrecedence::default(),
        }
    }
}

impl PruneOptions {
    /// Use `separator` between field names instead of `.`.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Choose how overlapping paths are compiled for removal.
    pub fn with_prefix_precedence(mut self, precedence: PrefixPrecedence) -> Self {
        self.prefix_precedence = precedence;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = PruneOptions::default();
        assert_eq!(opts.separator, '.');
        assert_eq!(opts.prefix_precedence, PrefixPrecedence::ShortestWins);
    }

    #[test]
    fn builders() {
        let opts = PruneOptions::default()
            .with_separator('/')
            .with_prefix_precedence(PrefixPrecedence::LongestWins);
        assert_eq!(opts.separator, '/');
        assert_eq!(opts.prefix_precedence, PrefixPrecedence::LongestWins);
    }
}
