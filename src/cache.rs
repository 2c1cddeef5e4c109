//! Result memoization
//!
//! Results are keyed by a SHA-256 fingerprint of the description prefix and
//! the three category keys. The language is not part of the key.
//! A cache is unbounded unless built with a capacity, in which case the
//! least recently used entry is evicted first.

use crate::types::NameResult;
use lru::LruCache;
use sha2::{Digest, Sha256};
use std::num::NonZeroUsize;

/// Only this many leading characters of the description are fingerprinted
pub const FINGERPRINT_PREFIX_CHARS: usize = 100;

/// Field separator inside the hashed material
const SEPARATOR: char = '\u{1f}';

/// Cache key for one generation request
pub fn fingerprint(description: &str, industry: &str, project_type: &str, complexity: &str) -> String {
    let prefix: String = description.chars().take(FINGERPRINT_PREFIX_CHARS).collect();

    let mut hasher = Sha256::new();
    for (i, part) in [prefix.as_str(), industry, project_type, complexity].iter().enumerate() {
        if i > 0 {
            hasher.update(SEPARATOR.to_string().as_bytes());
        }
        hasher.update(part.as_bytes());
    }
    hex::encode(hasher.finalize())
}

/// In-memory store of generated results
pub struct NameCache {
    entries: LruCache<String, NameResult>,
}

impl NameCache {
    /// No eviction
    pub fn unbounded() -> Self {
        Self {
            entries: LruCache::unbounded(),
        }
    }

    /// Keeps at most `capacity` results; zero is treated as one
    pub fn bounded(capacity: usize) -> Self {
        Self {
            entries: LruCache::new(NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)),
        }
    }

    pub fn from_capacity(capacity: Option<usize>) -> Self {
        match capacity {
            Some(n) => Self::bounded(n),
            None => Self::unbounded(),
        }
    }

    pub fn get(&mut self, key: &str) -> Option<&NameResult> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: String, result: NameResult) {
        if let Some((evicted, _)) = self.entries.push(key, result) {
            tracing::debug!("dropped cached name result {}", &evicted[..12.min(evicted.len())]);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for NameCache {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Strategy;

    fn result(name: &str) -> NameResult {
        NameResult {
            recommended_name: name.to_string(),
            name_type: Strategy::Template,
            confidence: 0.9,
            alternatives: vec![],
            reasoning: String::new(),
            key_concepts_used: vec![],
            industry_context: "Technology".to_string(),
            language: "french".to_string(),
        }
    }

    #[test]
    fn test_fingerprint_is_sha256_hex() {
        let key = fingerprint("desc", "Technology", "API", "simple");
        assert_eq!(key.len(), 64);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_fingerprint_ignores_text_after_prefix() {
        let base = "é".repeat(FINGERPRINT_PREFIX_CHARS);
        let a = fingerprint(&format!("{}tail one", base), "Finance", "API", "simple");
        let b = fingerprint(&format!("{}other tail", base), "Finance", "API", "simple");
        assert_eq!(a, b);
    }

    #[test]
    fn test_fingerprint_separates_fields() {
        let a = fingerprint("ab", "c", "API", "simple");
        let b = fingerprint("a", "bc", "API", "simple");
        assert_ne!(a, b);
        assert_ne!(
            fingerprint("desc", "Finance", "API", "simple"),
            fingerprint("desc", "Finance", "API", "expert")
        );
    }

    #[test]
    fn test_unbounded_keeps_everything() {
        let mut cache = NameCache::default();
        for i in 0..50 {
            cache.insert(format!("key{}", i), result("Name"));
        }
        assert_eq!(cache.len(), 50);
        assert!(cache.get("key0").is_some());
    }

    #[test]
    fn test_bounded_evicts_least_recent() {
        let mut cache = NameCache::bounded(2);
        cache.insert("a".to_string(), result("A"));
        cache.insert("b".to_string(), result("B"));
        assert!(cache.get("a").is_some());
        cache.insert("c".to_string(), result("C"));

        assert_eq!(cache.len(), 2);
        assert!(cache.get("b").is_none());
        assert_eq!(cache.get("a").unwrap().recommended_name, "A");
        assert_eq!(cache.get("c").unwrap().recommended_name, "C");
    }

    #[test]
    fn test_clear() {
        let mut cache = NameCache::bounded(0);
        cache.insert("a".to_string(), result("A"));
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
    }
}
