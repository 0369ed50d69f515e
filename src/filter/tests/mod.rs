mod concurrency;

use super::{Filter, TrieFilter};

pub(super) const SAMPLE_WORDS: &[&str] = &["福音会", "中国教徒", "清海无上师", "wtf", "三去车仑"];

/// The sample dictionary with `-`, `.` and space as skip characters.
pub(super) fn sample_filter() -> TrieFilter {
    let mut filter = TrieFilter::from_words(SAMPLE_WORDS);
    filter.exclude(&['-', '.', ' ']);
    filter
}
