//! Process-lifetime cache of hybrid answers, keyed by the exact question text.
//!
//! No eviction, no expiry, no size bound. The lock is held only inside `get`
//! and `put`, so two callers missing on the same question both compute an
//! answer and the second `put` overwrites the first.

use crate::answer::AnswerRecord;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use tracing::debug;

#[derive(Debug, Default)]
pub struct AnswerCache {
    entries: Mutex<HashMap<String, AnswerRecord>>,
}

impl AnswerCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached record for `question`, compared byte for byte.
    pub fn get(&self, question: &str) -> Option<AnswerRecord> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let hit = entries.get(question).cloned();
        debug!(hit = hit.is_some(), "Answer cache lookup");
        hit
    }

    pub fn put(&self, question: &str, record: AnswerRecord) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(question.to_string(), record);
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(answer: &str) -> AnswerRecord {
        AnswerRecord::new(answer, "fonte", "spiegazione", "paura")
    }

    #[test]
    fn test_get_after_put() {
        let cache = AnswerCache::new();
        assert!(cache.get("Ho paura").is_none());

        cache.put("Ho paura", record("Non temere."));
        assert_eq!(cache.get("Ho paura"), Some(record("Non temere.")));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_key_is_exact() {
        let cache = AnswerCache::new();
        cache.put("Ho paura", record("Non temere."));
        assert!(cache.get("ho paura").is_none());
        assert!(cache.get("Ho paura ").is_none());
    }

    #[test]
    fn test_put_overwrites() {
        let cache = AnswerCache::new();
        cache.put("q", record("prima"));
        cache.put("q", record("seconda"));
        assert_eq!(cache.get("q").unwrap().answer, "seconda");
        assert_eq!(cache.len(), 1);
    }
}
