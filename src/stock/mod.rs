//! Word stocks: the sources a filter's dictionary is read from.

mod file;
mod memory;

use std::io;
use std::path::PathBuf;

pub use file::FileStock;
pub use memory::MemoryStock;

/// A source of dictionary words.
pub trait WordStock {
    /// All words, in source order.
    fn read_all(&self) -> &[String];
}

#[derive(Debug, thiserror::Error)]
pub enum StockError {
    #[error("failed to open {}: {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}
