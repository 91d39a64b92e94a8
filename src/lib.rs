//! Increment English number words in free-form text.
//!
//! `inflate("Anyone up for tennis?")` gives `"Anytwo up for elevennis?"`:
//! every number word from the built-in vocabulary is replaced by its
//! successor, wherever it occurs, keeping the casing of the match.

pub mod casing;
pub mod corpus;
pub mod inflate;
mod trace_init;
pub mod vocab;

pub use inflate::{inflate, Inflator, WordMatch};
pub use trace_init::init_tracing;
pub use vocab::Vocabulary;
