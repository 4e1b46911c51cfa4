//*** START FILE: src/substitution/record.rs ***//
use std::collections::HashMap;

/// Candidate words that hit the dictionary, mapped to their French word.
///
/// Iteration follows first-insertion order. Re-inserting a key replaces its
/// value but keeps its position.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReplacementRecord {
    key_to_index: HashMap<String, usize>,
    entries: Vec<(String, String)>, // Index is the value stored in key_to_index
}

impl ReplacementRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, english: &str, french: &str) {
        if let Some(&index) = self.key_to_index.get(english) {
            self.entries[index].1 = french.to_string();
        } else {
            self.key_to_index.insert(english.to_string(), self.entries.len());
            self.entries.push((english.to_string(), french.to_string()));
        }
    }

    pub fn get(&self, english: &str) -> Option<&str> {
        self.key_to_index
            .get(english)
            .map(|&index| self.entries[index].1.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(e, f)| (e.as_str(), f.as_str()))
    }

    /// Number of distinct candidate words recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//*** END FILE: src/substitution/record.rs ***//
