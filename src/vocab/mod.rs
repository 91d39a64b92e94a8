//! Number word vocabulary.
//!
//! A closed table of lowercase English number words and their successors,
//! loaded from an embedded TOML file. Keys are kept sorted by descending
//! length so that a scan trying them in order always prefers the longest
//! word at a position ("thirteen" over "three").

mod config;
mod table;

pub use config::{parse_vocab_toml, VocabConfigError};
pub use table::{default_toml, Vocabulary};
