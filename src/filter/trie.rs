use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::{debug, debug_span};

use super::matches::{Match, Matches};
use super::Filter;
use crate::settings::FilterSettings;
use crate::stock::{FileStock, StockError, WordStock};
use crate::unicode::canonicalize;

pub(super) struct Node {
    children: HashMap<char, Node>,
    pub(super) terminal: bool,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            terminal: false,
        }
    }

    pub(super) fn child(&self, key: char) -> Option<&Node> {
        self.children.get(&key)
    }

    /// Returns (node_count, max_depth) of the subtree below this node.
    fn measure(&self) -> (usize, usize) {
        let mut nodes = 0;
        let mut depth = 0;
        for child in self.children.values() {
            let (n, d) = child.measure();
            nodes += n + 1;
            depth = depth.max(d + 1);
        }
        (nodes, depth)
    }
}

/// Shape of a built filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterStats {
    /// Distinct words after normalization.
    pub words: usize,
    /// Trie nodes, not counting the root.
    pub nodes: usize,
    /// Length of the longest word, in canonical characters.
    pub max_depth: usize,
}

/// Trie-based sensitive-word filter.
///
/// Words are folded with [`canonicalize`] and stripped of whitespace on
/// insertion. Once built the word set is fixed; only the skip set can be
/// extended, and only through `&mut self`.
pub struct TrieFilter {
    root: Node,
    skip: HashSet<char>,
    words: usize,
}

impl TrieFilter {
    /// An empty filter that matches nothing.
    pub fn new() -> Self {
        Self {
            root: Node::new(),
            skip: HashSet::new(),
            words: 0,
        }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let _span = debug_span!("build_filter").entered();
        let mut filter = Self::new();
        let mut skipped = 0usize;
        for word in words {
            if !filter.insert(word.as_ref()) {
                skipped += 1;
            }
        }
        debug!(words = filter.words, skipped, "filter built");
        filter
    }

    pub fn from_stock(stock: &dyn WordStock) -> Self {
        Self::from_words(stock.read_all())
    }

    /// Build a filter from a newline-delimited word file.
    ///
    /// Fails without building anything if the file cannot be read in full.
    pub fn open(path: &Path) -> Result<Self, StockError> {
        let stock = FileStock::open(path)?;
        Ok(Self::from_stock(&stock))
    }

    /// Apply the skip characters from `settings`.
    pub fn configure(&mut self, settings: &FilterSettings) {
        let chars: Vec<char> = settings.skip.chars().collect();
        self.exclude(&chars);
    }

    /// Insert one word. Returns `true` if the word was new.
    fn insert(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        let mut node = &mut self.root;
        for c in word.chars() {
            if c.is_whitespace() {
                continue;
            }
            node = node.children.entry(canonicalize(c)).or_insert_with(Node::new);
        }
        if node.terminal {
            return false;
        }
        node.terminal = true;
        self.words += 1;
        true
    }

    /// Number of distinct words in the filter.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Whether `c` is ignored while matching.
    pub fn is_excluded(&self, c: char) -> bool {
        self.skip.contains(&canonicalize(c))
    }

    pub fn stats(&self) -> FilterStats {
        let (nodes, max_depth) = self.root.measure();
        FilterStats {
            words: self.words,
            nodes,
            max_depth,
        }
    }

    /// Iterate over every match in `text`, left to right.
    pub fn find_iter<'f, 't>(&'f self, text: &'t str) -> Matches<'f, 't> {
        Matches::new(&self.root, &self.skip, text)
    }

    pub fn find_first_match<'t>(&self, text: &'t str) -> Option<Match<'t>> {
        self.find_iter(text).next()
    }
}

impl Default for TrieFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TrieFilter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

impl Filter for TrieFilter {
    fn exclude(&mut self, chars: &[char]) {
        self.skip.extend(chars.iter().copied().map(canonicalize));
    }

    fn contains(&self, text: &str) -> bool {
        self.find_iter(text).next().is_some()
    }

    fn find_first<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.find_first_match(text).map(|m| m.as_str())
    }

    fn find_all<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.find_iter(text).map(|m| m.as_str()).collect()
    }

    fn replace(&self, text: &str, replacement: char) -> String {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for m in self.find_iter(text) {
            out.push_str(&text[last..m.start()]);
            out.extend(std::iter::repeat(replacement).take(m.char_len()));
            last = m.end();
        }
        out.push_str(&text[last..]);
        out
    }
}
