mod matches;
mod trie;

#[cfg(test)]
mod tests;

pub use matches::{Match, Matches};
pub use trie::{FilterStats, TrieFilter};

/// A sensitive-word filter.
///
/// Implementations are configured through `exclude` before being shared and
/// are read-only afterwards, so every query takes `&self`.
pub trait Filter: Send + Sync {
    /// Register characters to ignore between the characters of a word.
    ///
    /// With `-` excluded and `今天` in the dictionary, both `今天` and
    /// `今-天` are reported.
    fn exclude(&mut self, chars: &[char]);

    /// Returns `true` if `text` contains any dictionary word.
    fn contains(&self, text: &str) -> bool;

    /// The first match in `text`, as it appears in the original text.
    fn find_first<'t>(&self, text: &'t str) -> Option<&'t str>;

    /// All non-overlapping matches, in order of appearance.
    fn find_all<'t>(&self, text: &'t str) -> Vec<&'t str>;

    /// Overwrite every character of every match with `replacement`.
    fn replace(&self, text: &str, replacement: char) -> String;
}
