use super::WordStock;

/// An in-memory word list.
pub struct MemoryStock {
    words: Vec<String>,
}

impl MemoryStock {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl WordStock for MemoryStock {
    fn read_all(&self) -> &[String] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{Filter, TrieFilter};

    #[test]
    fn test_words_kept_verbatim() {
        let stock = MemoryStock::new(["福音会", "", "  wtf "]);
        assert_eq!(stock.read_all(), ["福音会", "", "  wtf "]);
    }

    #[test]
    fn test_blank_entries_are_harmless() {
        let stock = MemoryStock::new(["福音会", "", "  wtf "]);
        let filter = TrieFilter::from_stock(&stock);
        assert_eq!(filter.len(), 2);
        assert!(filter.contains("WTF"));
    }
}
