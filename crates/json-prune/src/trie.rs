//! Path compiler.
//!
//! Turns a flat list of dotted paths into a trie keyed by field name. The
//! remove engine walks the trie and the document side by side.

use std::collections::BTreeMap;

use json_prune_path::{format_path_with, parse_path_with, Path, DEFAULT_SEPARATOR};

use crate::options::{PrefixPrecedence, PruneOptions};

/// Children of a trie level, keyed by field name.
pub type Children = BTreeMap<String, TrieNode>;

/// A node below the trie root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrieNode {
    /// The path ends here: the field is handled as a whole.
    Leaf,
    /// The path continues into the field's value.
    Branch(Children),
}

impl TrieNode {
    /// True when the path ends at this node.
    pub fn is_leaf(&self) -> bool {
        matches!(self, TrieNode::Leaf)
    }

    /// The next level down, or `None` for a leaf.
    pub fn children(&self) -> Option<&Children> {
        match self {
            TrieNode::Leaf => None,
            TrieNode::Branch(children) => Some(children),
        }
    }
}

/// Compiled form of a path set.
///
/// Never contains an empty segment; a set with no usable paths compiles to
/// the empty trie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTrie {
    root: Children,
    separator: char,
}

impl Default for PathTrie {
    fn default() -> Self {
        Self {
            root: Children::new(),
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl PathTrie {
    /// Compile paths with the default options.
    ///
    /// # Example
    ///
    /// ```
    /// use json_prune::PathTrie;
    ///
    /// let trie = PathTrie::compile(&["a.b", "a.c", "d"]);
    /// assert_eq!(trie.paths(), vec!["a.b", "a.c", "d"]);
    ///
    /// assert!(PathTrie::compile(&[""]).is_empty());
    /// ```
    pub fn compile<P: AsRef<str>>(paths: &[P]) -> Self {
        Self::compile_with(paths, &PruneOptions::default())
    }

    /// Compile paths with explicit options.
    ///
    /// # Example
    ///
    /// ```
    /// use json_prune::{PathTrie, PrefixPrecedence, PruneOptions};
    ///
    /// let shortest = PathTrie::compile(&["a.b", "a"]);
    /// assert_eq!(shortest.paths(), vec!["a"]);
    ///
    /// let opts = PruneOptions::default().with_prefix_precedence(PrefixPrecedence::LongestWins);
    /// let longest = PathTrie::compile_with(&["a", "a.b"], &opts);
    /// assert_eq!(longest.paths(), vec!["a.b"]);
    /// ```
    pub fn compile_with<P: AsRef<str>>(paths: &[P], options: &PruneOptions) -> Self {
        let mut trie = PathTrie {
            root: Children::new(),
            separator: options.separator,
        };
        for path in paths {
            let steps = parse_path_with(path.as_ref(), options.separator);
            trie.insert(&steps, options.prefix_precedence);
        }
        trie
    }

    /// Insert one parsed path. The empty path is ignored.
    pub fn insert(&mut self, steps: &[String], precedence: PrefixPrecedence) {
        let Some((last, init)) = steps.split_last() else {
            return;
        };
        let mut level = &mut self.root;
        for step in init {
            let node = level
                .entry(step.clone())
                .or_insert_with(|| TrieNode::Branch(Children::new()));
            if node.is_leaf() {
                match precedence {
                    PrefixPrecedence::ShortestWins => return,
                    PrefixPrecedence::LongestWins => *node = TrieNode::Branch(Children::new()),
                }
            }
            level = match node {
                TrieNode::Branch(children) => children,
                TrieNode::Leaf => return,
            };
        }
        match precedence {
            PrefixPrecedence::ShortestWins => {
                level.insert(last.clone(), TrieNode::Leaf);
            }
            PrefixPrecedence::LongestWins => {
                level.entry(last.clone()).or_insert(TrieNode::Leaf);
            }
        }
    }

    /// True when no path was compiled in; removal is then a no-op.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// The root level of the trie.
    pub fn children(&self) -> &Children {
        &self.root
    }

    /// The terminal paths held by the trie, sorted.
    pub fn paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut prefix = Path::new();
        collect_paths(&self.root, self.separator, &mut prefix, &mut out);
        out
    }
}

fn collect_paths(level: &Children, separator: char, prefix: &mut Path, out: &mut Vec<String>) {
    for (step, node) in level {
        prefix.push(step.clone());
        match node {
            TrieNode::Leaf => out.push(format_path_with(prefix, separator)),
            TrieNode::Branch(children) => collect_paths(children, separator, prefix, out),
        }
        prefix.pop();
    }
}
