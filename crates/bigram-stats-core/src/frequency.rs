//! Bigram frequency aggregation.

use std::collections::HashMap;
use std::fmt;

use schemars::JsonSchema;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// A bigram and the number of times it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BigramCount {
    /// The two words, joined by a single space.
    pub bigram: String,
    /// Occurrence count (always at least 1).
    pub count: usize,
}

/// Mapping from distinct bigram to occurrence count.
///
/// Iteration order is the order in which each bigram was first seen, so
/// output is deterministic for a given input. Equality ignores that order:
/// two maps are equal when they hold the same bigrams with the same counts.
#[derive(Debug, Clone, Default)]
pub struct FrequencyMap {
    entries: Vec<BigramCount>,
    index: HashMap<String, usize>,
}

impl FrequencyMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every bigram in `bigrams`.
    pub fn from_bigrams<I, S>(bigrams: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        for bigram in bigrams {
            map.record(bigram.as_ref());
        }
        map
    }

    /// Record one occurrence of `bigram`.
    pub fn record(&mut self, bigram: &str) {
        if let Some(&pos) = self.index.get(bigram) {
            self.entries[pos].count += 1;
        } else {
            self.index.insert(bigram.to_string(), self.entries.len());
            self.entries.push(BigramCount {
                bigram: bigram.to_string(),
                count: 1,
            });
        }
    }

    /// Count for `bigram`, if it occurred.
    pub fn get(&self, bigram: &str) -> Option<usize> {
        self.index.get(bigram).map(|&pos| self.entries[pos].count)
    }

    /// Number of distinct bigrams.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no bigram was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, equal to the number of bigrams generated.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Iterate `(bigram, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|e| (e.bigram.as_str(), e.count))
    }

    /// Pairs sorted by descending count, ties kept in first-seen order.
    pub fn ranked(&self) -> Vec<BigramCount> {
        let mut ranked = self.entries.clone();
        // stable sort keeps first-seen order among equal counts
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}

impl PartialEq for FrequencyMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(bigram, count)| other.get(bigram) == Some(count))
    }
}

impl Eq for FrequencyMap {}

impl<S: AsRef<str>> FromIterator<S> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_bigrams(iter)
    }
}

impl Serialize for FrequencyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.bigram, &entry.count)?;
        }
        map.end()
    }
}

/// One `bigram: count` line per entry, in first-seen order.
impl fmt::Display for FrequencyMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (bigram, count)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{bigram}: {count}")?;
        }
        Ok(())
    }
}
