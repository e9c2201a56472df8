//! Insertion-ordered vocabulary maps.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A deterministic assignment of dense integers to observed tokens.
///
/// Indices are handed out in insertion order starting at `offset`, so a
/// vocabulary built by walking a corpus in file order is reproducible
/// for that corpus. Encoding against a fixed vocabulary is always
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vocab {
    tokens: Vec<String>,
    index: HashMap<String, u32>,
    offset: u32,
}

impl Vocab {
    /// Vocabulary whose first index is 0.
    pub fn new() -> Self {
        Self::with_offset(0)
    }

    /// Vocabulary whose first index is `offset`.
    ///
    /// The word vocabulary uses offset 1 so that 0 stays free as the
    /// padding value.
    pub fn with_offset(offset: u32) -> Self {
        Self {
            tokens: Vec::new(),
            index: HashMap::new(),
            offset,
        }
    }

    /// Look up `token`, assigning the next free index on first sight.
    pub fn get_or_insert(&mut self, token: &str) -> u32 {
        if let Some(&index) = self.index.get(token) {
            return index;
        }
        let index = self.offset + self.tokens.len() as u32;
        self.tokens.push(token.to_string());
        self.index.insert(token.to_string(), index);
        index
    }

    /// Look up `token` without inserting.
    pub fn get(&self, token: &str) -> Option<u32> {
        self.index.get(token).copied()
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// First index handed out.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Tokens in index order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_indices_in_first_occurrence_order() {
        let mut vocab = Vocab::new();
        assert_eq!(vocab.get_or_insert("Drama"), 0);
        assert_eq!(vocab.get_or_insert("Comedy"), 1);
        assert_eq!(vocab.get_or_insert("Drama"), 0);
        assert_eq!(vocab.get_or_insert("Action"), 2);

        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.tokens(), ["Drama", "Comedy", "Action"]);
    }

    #[test]
    fn offset_reserves_low_indices() {
        let mut vocab = Vocab::with_offset(1);
        assert_eq!(vocab.get_or_insert("Toy"), 1);
        assert_eq!(vocab.get_or_insert("Story"), 2);
        assert_eq!(vocab.get("Toy"), Some(1));
        assert_eq!(vocab.get("Jumanji"), None);
        // len counts tokens, not the reserved padding slot.
        assert_eq!(vocab.len(), 2);
    }
}
