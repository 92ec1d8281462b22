use std::collections::HashMap;

/// Per-run count of how many files produced each timestamp prefix.
///
/// Lives for one run only. The count for a prefix always equals the number
/// of files already assigned that prefix, in processing order.
#[derive(Debug, Default)]
pub struct CollisionTable {
    counts: HashMap<String, u32>,
}

impl CollisionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment-on-read: returns the 1-based suffix for the next file with `prefix`.
    pub fn next_suffix(&mut self, prefix: &str) -> u32 {
        let count = self.counts.entry(prefix.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    /// Files assigned `prefix` so far (0 if never seen).
    pub fn count(&self, prefix: &str) -> u32 {
        self.counts.get(prefix).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
