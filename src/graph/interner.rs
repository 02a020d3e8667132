//! Bidirectional label to node index mapping

use std::collections::HashMap;

/// Assigns dense indices to string labels in first-seen order
#[derive(Debug, Default, Clone)]
pub struct LabelInterner {
    /// Mapping from labels to node indices
    index_of: HashMap<String, u32>,

    /// Labels by node index
    labels: Vec<String>,
}

impl LabelInterner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index_of: HashMap::with_capacity(capacity),
            labels: Vec::with_capacity(capacity),
        }
    }

    /// Get the index for `label`, allocating the next one if it is new
    pub fn intern(&mut self, label: &str) -> u32 {
        if let Some(&idx) = self.index_of.get(label) {
            return idx;
        }

        let idx = self.labels.len() as u32;
        self.index_of.insert(label.to_string(), idx);
        self.labels.push(label.to_string());

        idx
    }

    pub fn get(&self, label: &str) -> Option<u32> {
        self.index_of.get(label).copied()
    }

    pub fn label(&self, idx: u32) -> Option<&str> {
        self.labels.get(idx as usize).map(String::as_str)
    }

    /// Labels in index order
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_first_seen_order() {
        let mut interner = LabelInterner::new();
        assert_eq!(interner.intern("b"), 0);
        assert_eq!(interner.intern("a"), 1);
        assert_eq!(interner.intern("b"), 0);
        assert_eq!(interner.intern(""), 2);

        assert_eq!(interner.len(), 3);
        assert_eq!(interner.labels().collect::<Vec<_>>(), vec!["b", "a", ""]);
    }

    #[test]
    fn lookups_are_inverse() {
        let mut interner = LabelInterner::with_capacity(4);
        for label in ["x", "y", "z"] {
            interner.intern(label);
        }

        for idx in 0..3 {
            let label = interner.label(idx).unwrap();
            assert_eq!(interner.get(label), Some(idx));
        }
        assert_eq!(interner.label(3), None);
        assert_eq!(interner.get("w"), None);
    }
}
