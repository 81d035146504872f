//! Metrics collection module
//!
//! Tracks request counts, cache effectiveness, and upstream failures.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// Global metrics collector
pub struct Metrics {
    /// Total page requests served
    pub page_requests: AtomicU64,
    /// Total JSON API requests served
    pub api_requests: AtomicU64,
    /// Cache hits per service
    cache_hits: RwLock<HashMap<String, u64>>,
    /// Cache misses per service
    cache_misses: RwLock<HashMap<String, u64>>,
    /// Upstream failures per service
    upstream_errors: RwLock<HashMap<String, u64>>,
}

impl Metrics {
    /// Create a new metrics instance
    pub fn new() -> Self {
        Self {
            page_requests: AtomicU64::new(0),
            api_requests: AtomicU64::new(0),
            cache_hits: RwLock::new(HashMap::new()),
            cache_misses: RwLock::new(HashMap::new()),
            upstream_errors: RwLock::new(HashMap::new()),
        }
    }

    pub fn inc_page_request(&self) {
        self.page_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_api_request(&self) {
        self.api_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_hit(&self, service: &str) {
        let mut hits = self.cache_hits.write().unwrap();
        *hits.entry(service.to_string()).or_insert(0) += 1;
    }

    pub fn record_cache_miss(&self, service: &str) {
        let mut misses = self.cache_misses.write().unwrap();
        *misses.entry(service.to_string()).or_insert(0) += 1;
    }

    pub fn record_upstream_error(&self, service: &str) {
        let mut errors = self.upstream_errors.write().unwrap();
        *errors.entry(service.to_string()).or_insert(0) += 1;
    }

    /// Point-in-time copy for the stats page
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            page_requests: self.page_requests.load(Ordering::Relaxed),
            api_requests: self.api_requests.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.read().unwrap().clone(),
            cache_misses: self.cache_misses.read().unwrap().clone(),
            upstream_errors: self.upstream_errors.read().unwrap().clone(),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable metrics snapshot
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub page_requests: u64,
    pub api_requests: u64,
    pub cache_hits: HashMap<String, u64>,
    pub cache_misses: HashMap<String, u64>,
    pub upstream_errors: HashMap<String, u64>,
}
