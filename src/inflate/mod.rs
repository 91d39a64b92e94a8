//! Number word inflation.
//!
//! A single left-to-right scan over the input. At each byte position the
//! vocabulary keys are tried longest first, ASCII case-insensitively; the
//! first hit is consumed whole and replaced by its successor, recased to
//! mirror the matched text. Everything between matches is copied verbatim.
//!
//! Matching is substring-based on purpose: "tennis" becomes "elevennis".

#[cfg(test)]
mod tests;

use serde::Serialize;
use tracing::{debug, trace};

use crate::casing::MatchCasing;
use crate::vocab::Vocabulary;

/// One replaced occurrence found by the scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordMatch<'v> {
    /// Byte offset of the match in the input.
    pub start: usize,
    /// Byte offset one past the match.
    pub end: usize,
    /// The input text of the match, original casing.
    pub matched: String,
    /// The vocabulary key that matched.
    pub word: &'v str,
    pub casing: MatchCasing,
    /// Successor recased to `casing`.
    pub replacement: String,
}

/// Runs the scan against a vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct Inflator<'v> {
    vocab: &'v Vocabulary,
}

impl Default for Inflator<'static> {
    fn default() -> Self {
        Self::new(Vocabulary::global())
    }
}

impl<'v> Inflator<'v> {
    pub fn new(vocab: &'v Vocabulary) -> Self {
        Self { vocab }
    }

    pub fn vocabulary(&self) -> &'v Vocabulary {
        self.vocab
    }

    /// All non-overlapping matches in `text`, left to right.
    pub fn find_matches(&self, text: &str) -> Vec<WordMatch<'v>> {
        let bytes = text.as_bytes();
        let candidates = self.vocab.match_candidates(bytes.len());
        let mut matches = Vec::new();
        if candidates.is_empty() {
            return matches;
        }

        let mut pos = 0;
        while pos < bytes.len() {
            let rest = &bytes[pos..];
            let hit = candidates.iter().find(|w| {
                rest.len() >= w.len() && rest[..w.len()].eq_ignore_ascii_case(w.as_bytes())
            });

            let Some(word) = hit else {
                pos += 1;
                continue;
            };

            // Keys are ASCII, so both ends of the match sit on char boundaries.
            let end = pos + word.len();
            let matched = &text[pos..end];
            let lower = matched.to_ascii_lowercase();
            let Some(successor) = self.vocab.successor_of(&lower) else {
                unreachable!("matched {matched:?} is not a vocabulary key");
            };
            let casing = MatchCasing::classify(matched);
            let replacement = casing.apply(successor);
            trace!(start = pos, matched, replacement = %replacement, "match");

            matches.push(WordMatch {
                start: pos,
                end,
                matched: matched.to_string(),
                word: word.as_str(),
                casing,
                replacement,
            });
            pos = end;
        }

        matches
    }

    /// Replace every number word in `text` with its successor.
    pub fn inflate(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let matches = self.find_matches(text);
        debug!(len = text.len(), matches = matches.len(), "inflate");
        if matches.is_empty() {
            return text.to_string();
        }

        let mut out = String::with_capacity(text.len() + matches.len() * 4);
        let mut last = 0;
        for m in &matches {
            out.push_str(&text[last..m.start]);
            out.push_str(&m.replacement);
            last = m.end;
        }
        out.push_str(&text[last..]);
        out
    }
}

/// Replace every number word in `text` with its successor, using the
/// built-in vocabulary.
///
/// ```
/// assert_eq!(numinflate::inflate("Anyone up for tennis?"), "Anytwo up for elevennis?");
/// assert_eq!(numinflate::inflate("THIRTEEN"), "FOURTEEN");
/// ```
pub fn inflate(text: &str) -> String {
    Inflator::default().inflate(text)
}
