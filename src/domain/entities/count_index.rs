//! Entity count index
//!
//! Number of entities currently tagged with each classification.
//! A missing name and a recorded zero are different: only a recorded zero
//! disables the node in the tree.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityCountIndex {
    counts: HashMap<String, u64>,
}

impl EntityCountIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded count, if any
    pub fn get(&self, name: &str) -> Option<u64> {
        self.counts.get(name).copied()
    }

    /// Count treating a missing entry as zero
    pub fn count(&self, name: &str) -> u64 {
        self.get(name).unwrap_or(0)
    }

    /// At least one entity carries this classification
    pub fn is_used(&self, name: &str) -> bool {
        self.count(name) > 0
    }

    /// The index explicitly records zero entities for this classification
    pub fn is_recorded_empty(&self, name: &str) -> bool {
        self.get(name) == Some(0)
    }

    pub fn set(&mut self, name: impl Into<String>, count: u64) {
        self.counts.insert(name.into(), count);
    }

    pub fn remove(&mut self, name: &str) -> Option<u64> {
        self.counts.remove(name)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for EntityCountIndex {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_zero_are_distinct() {
        let index: EntityCountIndex = [("A", 0), ("B", 5)].into_iter().collect();

        assert!(index.is_recorded_empty("A"));
        assert!(!index.is_recorded_empty("C"));
        assert_eq!(index.count("C"), 0);
        assert!(index.is_used("B"));
        assert!(!index.is_used("A"));
    }

    #[test]
    fn deserializes_plain_map() {
        let index: EntityCountIndex = serde_json::from_str(r#"{"PII": 12}"#).unwrap();
        assert_eq!(index.get("PII"), Some(12));
    }
}
