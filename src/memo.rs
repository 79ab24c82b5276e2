//! Per-instance cache for derived strings.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Lazily populated map from a key to a computed string.
///
/// The lock is held while computing, so each key is computed at most once per
/// instance. Every record owns its own `Memo`.
#[derive(Debug, Default)]
pub struct Memo {
    entries: Mutex<HashMap<String, String>>,
}

impl Memo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, computing it with `compute` on first use
    pub fn get_or_insert_with<F>(&self, key: &str, compute: F) -> String
    where
        F: FnOnce() -> String,
    {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(value) = entries.get(key) {
            return value.clone();
        }

        let value = compute();
        entries.insert(key.to_string(), value.clone());
        value
    }

    /// Number of cached keys
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Clone for Memo {
    fn clone(&self) -> Self {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner).clone();
        Self {
            entries: Mutex::new(entries),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_computes_once_per_key() {
        let memo = Memo::new();
        let calls = Cell::new(0);
        let compute = || {
            calls.set(calls.get() + 1);
            "value".to_string()
        };

        assert_eq!(memo.get_or_insert_with("YYYY", compute), "value");
        assert_eq!(memo.get_or_insert_with("YYYY", compute), "value");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_distinct_keys_cached_separately() {
        let memo = Memo::new();
        assert_eq!(memo.get_or_insert_with("a", || "1".to_string()), "1");
        assert_eq!(memo.get_or_insert_with("b", || "2".to_string()), "2");
        assert_eq!(memo.get_or_insert_with("a", || "3".to_string()), "1");
        assert_eq!(memo.len(), 2);
    }

    #[test]
    fn test_clone_copies_entries() {
        let memo = Memo::new();
        memo.get_or_insert_with("a", || "1".to_string());

        let copy = memo.clone();
        assert_eq!(copy.get_or_insert_with("a", || "other".to_string()), "1");
        copy.get_or_insert_with("b", || "2".to_string());

        assert_eq!(memo.len(), 1);
        assert_eq!(copy.len(), 2);
    }

    #[test]
    fn test_new_is_empty() {
        assert!(Memo::new().is_empty());
    }
}
