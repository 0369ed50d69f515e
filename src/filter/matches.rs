use std::collections::HashSet;
use std::ops::Range;
use std::str::CharIndices;

use super::trie::Node;
use crate::unicode::canonicalize;

/// A single match found in a query text.
///
/// The span runs from the character that started the match to the character
/// that completed it, so skip characters inside a match are part of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'t> {
    text: &'t str,
    start: usize,
    end: usize,
}

impl<'t> Match<'t> {
    /// Byte offset of the first matched character.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset just past the last matched character.
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The matched slice of the original text.
    pub fn as_str(&self) -> &'t str {
        &self.text[self.start..self.end]
    }

    /// Number of characters covered by the match.
    pub fn char_len(&self) -> usize {
        self.as_str().chars().count()
    }
}

/// Iterator over the matches of a filter in a text, left to right.
///
/// Each call to `next` starts from the root again at the character following
/// the previous match; matched characters are never reused.
pub struct Matches<'f, 't> {
    root: &'f Node,
    skip: &'f HashSet<char>,
    text: &'t str,
    chars: CharIndices<'t>,
}

impl<'f, 't> Matches<'f, 't> {
    pub(super) fn new(root: &'f Node, skip: &'f HashSet<char>, text: &'t str) -> Self {
        Self {
            root,
            skip,
            text,
            chars: text.char_indices(),
        }
    }
}

impl<'f, 't> Iterator for Matches<'f, 't> {
    type Item = Match<'t>;

    fn next(&mut self) -> Option<Match<'t>> {
        let mut node: Option<&Node> = None;
        let mut start = 0;

        for (pos, c) in self.chars.by_ref() {
            let key = canonicalize(c);
            // Noise never starts a match and never moves the cursor.
            if self.skip.contains(&key) {
                continue;
            }

            if let Some(current) = node {
                node = current.child(key);
            }
            if node.is_none() {
                start = pos;
                node = self.root.child(key);
            }

            if node.is_some_and(|n| n.terminal) {
                return Some(Match {
                    text: self.text,
                    start,
                    end: pos + c.len_utf8(),
                });
            }
        }
        None
    }
}
