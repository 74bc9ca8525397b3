//! Cache storage for memoized results.
//!
//! Provides concurrent, sharded storage for results keyed by request
//! identity.

use ahash::RandomState;
use dashmap::DashMap;

use crate::application::ports::CacheStore;
use crate::domain::request::CacheKey;

/// Thread-safe result cache backed by DashMap.
///
/// DashMap provides lock-free reads and fine-grained locking for writes,
/// so concurrent calculators can share one cache without contending on a
/// single lock. Hashing uses ahash, which is fast for the small fixed-size
/// keys stored here.
///
/// The cache is unbounded: entries are never evicted or cleared.
#[derive(Debug)]
pub struct SharedCache {
    map: DashMap<CacheKey, f64, RandomState>,
}

impl SharedCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self {
            map: DashMap::with_hasher(RandomState::default()),
        }
    }

    /// Create a new empty cache pre-sized for the given number of entries.
    ///
    /// The capacity is a hint to avoid rehashing while the cache warms up;
    /// the cache still grows past it on demand.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: DashMap::with_capacity_and_hasher(capacity, RandomState::default()),
        }
    }

    /// Insert or replace a result.
    pub fn insert(&self, key: CacheKey, value: f64) {
        self.map.insert(key, value);
    }

    /// Get a stored result.
    pub fn get(&self, key: &CacheKey) -> Option<f64> {
        self.map.get(key).map(|entry| *entry.value())
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for SharedCache {
    fn default() -> Self {
        Self::new()
    }
}

// Implement the CacheStore port
impl CacheStore for SharedCache {
    fn lookup(&self, key: &CacheKey) -> Option<f64> {
        self.get(key)
    }

    fn store(&self, key: CacheKey, value: f64) {
        self.insert(key, value);
    }

    fn len(&self) -> usize {
        self.map.len()
    }

    fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

// Implement CacheStore for Arc<SharedCache> to allow shared ownership
impl CacheStore for std::sync::Arc<SharedCache> {
    fn lookup(&self, key: &CacheKey) -> Option<f64> {
        (**self).get(key)
    }

    fn store(&self, key: CacheKey, value: f64) {
        (**self).insert(key, value);
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::operation::OperationKind;
    use crate::domain::request::CalculationRequest;

    fn key(operand1: f64, operand2: f64, operation: OperationKind) -> CacheKey {
        CalculationRequest::new(operand1, operand2, operation).cache_key()
    }

    #[test]
    fn test_basic_operations() {
        let cache = SharedCache::new();

        cache.insert(key(1.0, 2.0, OperationKind::Add), 3.0);
        cache.insert(key(2.0, 3.0, OperationKind::Multiply), 6.0);

        assert_eq!(cache.get(&key(1.0, 2.0, OperationKind::Add)), Some(3.0));
        assert_eq!(
            cache.get(&key(2.0, 3.0, OperationKind::Multiply)),
            Some(6.0)
        );
        assert_eq!(cache.get(&key(9.0, 9.0, OperationKind::Add)), None);

        assert_eq!(cache.len(), 2);
        assert!(!cache.is_empty());
    }

    #[test]
    fn test_insert_replaces_previous_value() {
        let cache = SharedCache::new();
        let k = key(1.0, 2.0, OperationKind::Add);

        cache.insert(k, 3.0);
        cache.insert(k, 4.0);

        assert_eq!(cache.get(&k), Some(4.0));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_with_capacity_starts_empty() {
        let cache = SharedCache::with_capacity(1024);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_port_through_arc() {
        use std::sync::Arc;

        let cache = Arc::new(SharedCache::new());
        let k = key(1.0, 1.0, OperationKind::Add);

        CacheStore::store(&cache, k, 2.0);
        assert_eq!(CacheStore::lookup(&cache, &k), Some(2.0));
        assert_eq!(CacheStore::len(&cache), 1);
    }

    #[test]
    fn test_concurrent_access() {
        use std::sync::Arc;
        use std::thread;

        let cache = Arc::new(SharedCache::new());
        let mut handles = vec![];

        for i in 0..10 {
            let cache_clone = Arc::clone(&cache);
            let handle = thread::spawn(move || {
                for j in 0..100 {
                    let k = key(i as f64, j as f64, OperationKind::Add);
                    cache_clone.insert(k, (i + j) as f64);
                }
            });
            handles.push(handle);
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.len(), 1000);
    }
}
