use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, debug_span};

use super::{StockError, WordStock};

const BOM: char = '\u{FEFF}';

/// Words read from a newline-delimited text file.
///
/// Lines are trimmed and blank lines dropped. The whole file is read up
/// front, so a stock either holds every word or was never created.
pub struct FileStock {
    words: Vec<String>,
}

impl FileStock {
    pub fn open(path: &Path) -> Result<Self, StockError> {
        let _span = debug_span!("open_stock", path = %path.display()).entered();
        let file = File::open(path).map_err(|source| StockError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let stock = Self::from_reader(BufReader::new(file))?;
        debug!(words = stock.words.len());
        Ok(stock)
    }

    pub fn from_reader(reader: impl BufRead) -> Result<Self, StockError> {
        let mut words = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| StockError::Read {
                line: i + 1,
                source,
            })?;
            let line = if i == 0 {
                line.trim_start_matches(BOM)
            } else {
                &line
            };
            let word = line.trim();
            if !word.is_empty() {
                words.push(word.to_string());
            }
        }
        Ok(Self { words })
    }
}

impl WordStock for FileStock {
    fn read_all(&self) -> &[String] {
        &self.words
    }
}
