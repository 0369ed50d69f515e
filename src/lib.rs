//! Sensitive-word detection and masking.
//!
//! A [`TrieFilter`] is built once from a word list and then queried from any
//! number of threads. Characters are folded with [`unicode::canonicalize`]
//! before comparison, and characters registered through
//! [`Filter::exclude`] are ignored between the characters of a word:
//!
//! ```
//! use sx_engine::{Filter, TrieFilter};
//!
//! let mut filter = TrieFilter::from_words(["福音会", "wtf"]);
//! filter.exclude(&['-']);
//!
//! assert!(filter.contains("福-音会"));
//! assert_eq!(filter.find_all("WTF 福音会"), vec!["WTF", "福音会"]);
//! assert_eq!(filter.replace("oh wtf", '*'), "oh ***");
//! ```

pub mod filter;
pub mod settings;
pub mod stock;
pub mod trace_init;
pub mod unicode;

pub use filter::{Filter, FilterStats, Match, Matches, TrieFilter};
pub use stock::{FileStock, MemoryStock, StockError, WordStock};
