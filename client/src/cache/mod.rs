//! Query cache guarding against stale reads after writes.
//!
//! Reads go through [`QueryCache::get_or_fetch`]; mutations apply their
//! declared invalidation set so the next read refetches fresh server
//! state. Entries are stored as JSON values, which keeps the cache usable
//! for every response type without a type registry.

pub mod keys;

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub use keys::{CacheKey, Invalidation, KeyFamily, Mutation};

use crate::error::ApiError;

#[derive(Default)]
pub struct QueryCache {
    // Held only for map access, never across an await point.
    entries: Mutex<HashMap<CacheKey, serde_json::Value>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, or run `fetch`, store its result
    /// and return it. A failed fetch stores nothing.
    pub async fn get_or_fetch<T, F, Fut>(&self, key: CacheKey, fetch: F) -> Result<T, ApiError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        if let Some(raw) = self.entries.lock().unwrap().get(&key).cloned() {
            debug!("Cache hit: {key}");
            return serde_json::from_value(raw)
                .map_err(|e| ApiError::shape(&format!("cache entry {key}"), e));
        }

        debug!("Cache miss: {key}");
        let value = fetch().await?;
        let raw = serde_json::to_value(&value)
            .map_err(|e| ApiError::shape(&format!("cache entry {key}"), e))?;
        self.entries.lock().unwrap().insert(key, raw);
        Ok(value)
    }

    /// Drop a single entry.
    pub fn invalidate(&self, key: &CacheKey) {
        if self.entries.lock().unwrap().remove(key).is_some() {
            debug!("Invalidated {key}");
        }
    }

    /// Drop every entry of a key family (all pages, all ids).
    pub fn invalidate_family(&self, family: KeyFamily) {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|key, _| key.family() != family);
        let dropped = before - entries.len();
        if dropped > 0 {
            debug!("Invalidated {dropped} entries of {family:?}");
        }
    }

    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
        debug!("Cache cleared");
    }

    /// Apply a mutation's declared invalidation set.
    pub fn apply(&self, mutation: Mutation) {
        match mutation.invalidates() {
            Invalidation::Everything => self.clear(),
            Invalidation::Families(families) => {
                for family in families {
                    self.invalidate_family(*family);
                }
            }
        }
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    async fn fetch_counted(counter: &AtomicU32, value: u32) -> Result<u32, ApiError> {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(value)
    }

    #[tokio::test]
    async fn second_read_is_served_from_cache() {
        init_logs();
        let cache = QueryCache::new();
        let fetches = AtomicU32::new(0);

        let first = cache
            .get_or_fetch(CacheKey::WalletList, || fetch_counted(&fetches, 7))
            .await
            .unwrap();
        let second = cache
            .get_or_fetch(CacheKey::WalletList, || fetch_counted(&fetches, 99))
            .await
            .unwrap();

        assert_eq!(first, 7);
        assert_eq!(second, 7, "cached value wins over the new fetch result");
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn invalidation_forces_a_refetch() {
        init_logs();
        let cache = QueryCache::new();
        let fetches = AtomicU32::new(0);

        let _ = cache
            .get_or_fetch(CacheKey::WalletList, || fetch_counted(&fetches, 7))
            .await
            .unwrap();
        cache.invalidate(&CacheKey::WalletList);
        let refetched = cache
            .get_or_fetch(CacheKey::WalletList, || fetch_counted(&fetches, 99))
            .await
            .unwrap();

        assert_eq!(refetched, 99);
        assert_eq!(fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn repeated_invalidate_and_refetch_is_idempotent() {
        // No intervening mutation: both refetches see the same server state
        // and must produce identical output.
        let cache = QueryCache::new();

        let mut outputs = Vec::new();
        for _ in 0..2 {
            cache.invalidate(&CacheKey::Debt("d1".to_string()));
            let value = cache
                .get_or_fetch(CacheKey::Debt("d1".to_string()), || async {
                    Ok(vec![1u32, 2, 3])
                })
                .await
                .unwrap();
            outputs.push(value);
        }
        assert_eq!(outputs[0], outputs[1]);
    }

    #[tokio::test]
    async fn failed_fetch_stores_nothing() {
        let cache = QueryCache::new();
        let result: Result<u32, _> = cache
            .get_or_fetch(CacheKey::MonthlyOverview, || async {
                Err(ApiError::Rejected {
                    message: "nope".to_string(),
                })
            })
            .await;
        assert!(result.is_err());
        assert!(!cache.contains(&CacheKey::MonthlyOverview));
    }

    #[tokio::test]
    async fn family_invalidation_drops_every_page() {
        let cache = QueryCache::new();
        for page in 1..=3u32 {
            let _ = cache
                .get_or_fetch(CacheKey::DebtList { page }, || async { Ok(page) })
                .await
                .unwrap();
        }
        let _ = cache
            .get_or_fetch(CacheKey::WalletList, || async { Ok(0u32) })
            .await
            .unwrap();

        cache.invalidate_family(KeyFamily::DebtList);

        assert!(!cache.contains(&CacheKey::DebtList { page: 1 }));
        assert!(!cache.contains(&CacheKey::DebtList { page: 3 }));
        assert!(cache.contains(&CacheKey::WalletList));
    }

    #[tokio::test]
    async fn pay_installment_leaves_unrelated_entries() {
        let cache = QueryCache::new();
        let _ = cache
            .get_or_fetch(CacheKey::CategoryList, || async { Ok(1u32) })
            .await
            .unwrap();
        let _ = cache
            .get_or_fetch(CacheKey::Debt("d1".to_string()), || async { Ok(2u32) })
            .await
            .unwrap();

        cache.apply(Mutation::PayInstallment);

        assert!(cache.contains(&CacheKey::CategoryList));
        assert!(!cache.contains(&CacheKey::Debt("d1".to_string())));
    }

    #[tokio::test]
    async fn login_clears_everything() {
        let cache = QueryCache::new();
        let _ = cache
            .get_or_fetch(CacheKey::Profile, || async { Ok(1u32) })
            .await
            .unwrap();
        let _ = cache
            .get_or_fetch(CacheKey::BankList, || async { Ok(2u32) })
            .await
            .unwrap();

        cache.apply(Mutation::Login);
        assert!(cache.is_empty());
    }
}
