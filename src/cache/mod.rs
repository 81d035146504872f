//! Caching module for IslamWeb-RS
//!
//! In-memory memoization for fetched content and chat responses. Cache keys
//! are human-readable composites of every parameter that affects the
//! response shape. Concurrent identical misses are not deduplicated
//! in-flight; values are idempotent, so last-writer-wins is acceptable.

use moka::future::Cache;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

/// Cache for parsed upstream content, one value type per service.
pub struct ContentCache<V: Clone + Send + Sync + 'static> {
    cache: Cache<String, V>,
}

impl<V: Clone + Send + Sync + 'static> ContentCache<V> {
    /// Create a new content cache with the given TTL and capacity
    pub fn new(ttl_seconds: u64, max_capacity: u64) -> Self {
        let cache = Cache::builder()
            .time_to_live(Duration::from_secs(ttl_seconds))
            .max_capacity(max_capacity)
            .build();

        Self { cache }
    }

    /// Get a cached value
    pub async fn get(&self, key: &str) -> Option<V> {
        self.cache.get(key).await
    }

    /// Store a value
    pub async fn insert(&self, key: String, value: V) {
        self.cache.insert(key, value).await;
    }

    /// Number of live entries
    pub fn size(&self) -> u64 {
        self.cache.entry_count()
    }
}

impl<V: Clone + Send + Sync + 'static> Default for ContentCache<V> {
    fn default() -> Self {
        Self::new(24 * 3600, 2000) // content changes rarely; a day is plenty
    }
}

/// Cache key for the surah metadata listing
pub fn meta_key() -> String {
    "meta".to_string()
}

/// Cache key for a single surah in a given edition
pub fn surah_key(number: u32, edition: &str) -> String {
    format!("surah:{}:{}", number, edition)
}

/// Cache key for a Quran search
pub fn search_key(query: &str, edition: &str) -> String {
    format!("search:{}:{}", query, edition)
}

/// Cache key for the text editions of a language
pub fn editions_key(lang: &str) -> String {
    format!("editions:{}", lang)
}

/// Cache key for a hadith chapter's contents
pub fn chapter_key(chapter_id: u32) -> String {
    format!("hadith-chapter:{}", chapter_id)
}

/// Insertion-ordered response cache with oldest-first eviction.
///
/// Used for chat answers, keyed by the lower-cased trimmed question text.
pub struct BoundedResponseCache {
    inner: Mutex<BoundedInner>,
    max_entries: usize,
}

struct BoundedInner {
    entries: HashMap<String, String>,
    order: VecDeque<String>,
}

impl BoundedResponseCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            inner: Mutex::new(BoundedInner {
                entries: HashMap::new(),
                order: VecDeque::new(),
            }),
            max_entries,
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let inner = self.inner.lock().unwrap();
        inner.entries.get(key).cloned()
    }

    pub fn put(&self, key: String, value: String) {
        let mut inner = self.inner.lock().unwrap();
        if inner.entries.insert(key.clone(), value).is_none() {
            inner.order.push_back(key);
        }
        while inner.entries.len() > self.max_entries {
            match inner.order.pop_front() {
                Some(oldest) => {
                    inner.entries.remove(&oldest);
                }
                None => break,
            }
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for BoundedResponseCache {
    fn default() -> Self {
        Self::new(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_content_cache_roundtrip() {
        let cache: ContentCache<String> = ContentCache::new(60, 100);
        cache.insert(surah_key(1, "quran-uthmani"), "data".to_string()).await;

        assert_eq!(
            cache.get(&surah_key(1, "quran-uthmani")).await.as_deref(),
            Some("data")
        );
        // A different edition is a different key
        assert!(cache.get(&surah_key(1, "fr.hamidullah")).await.is_none());
    }

    #[test]
    fn test_keys_encode_all_parameters() {
        assert_ne!(surah_key(1, "en.sahih"), surah_key(2, "en.sahih"));
        assert_ne!(search_key("light", "en.sahih"), search_key("light", "fr.hamidullah"));
    }

    #[test]
    fn test_bounded_cache_evicts_oldest_first() {
        let cache = BoundedResponseCache::new(3);
        cache.put("a".into(), "1".into());
        cache.put("b".into(), "2".into());
        cache.put("c".into(), "3".into());
        cache.put("d".into(), "4".into());

        assert_eq!(cache.len(), 3);
        assert!(cache.get("a").is_none());
        assert_eq!(cache.get("d").as_deref(), Some("4"));
    }

    #[test]
    fn test_bounded_cache_overwrite_keeps_len() {
        let cache = BoundedResponseCache::new(2);
        cache.put("q".into(), "old".into());
        cache.put("q".into(), "new".into());

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("q").as_deref(), Some("new"));
    }
}
