use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;

pub struct MokaCacheWrapper {
    inner: Cache<String, String>,
}

impl MokaCacheWrapper {
    pub fn new() -> Self {
        let config = AppConfig::get();
        Self::with_settings(config.cache.max_capacity, config.cache.default_ttl)
    }

    pub fn with_settings(max_capacity: u64, default_ttl: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(std::time::Duration::from_secs(default_ttl))
            .build();

        debug!(
            "MokaCacheWrapper initialized with max capacity: {}",
            max_capacity
        );
        Self { inner }
    }
}

#[async_trait]
impl ObjectCache for MokaCacheWrapper {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        if let Some(value) = self.inner.get(key).await {
            debug!("Successfully retrieved key: {}", key);
            CacheResult::Found(value)
        } else {
            debug!("Key not found in cache: {}", key);
            CacheResult::NotFound
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        // Moka 在创建时设置全局 TTL 策略，忽略逐项 ttl
        self.inner.insert(key, value).await;

        if ttl != 0 {
            debug!("Moka cache ignores per-item TTL, using global TTL configuration");
        }
    }

    async fn remove(&self, key: &str) {
        self.inner.invalidate(key).await;
    }

    async fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_get_remove() {
        let cache = MokaCacheWrapper::with_settings(16, 60);
        cache
            .insert_raw("k".to_string(), "v".to_string(), 0)
            .await;
        assert_eq!(cache.get_raw("k").await, CacheResult::Found("v".to_string()));

        cache.remove("k").await;
        assert_eq!(cache.get_raw("k").await, CacheResult::NotFound);
    }

    #[tokio::test]
    async fn test_typed_roundtrip_and_corrupt_entry() {
        let cache = MokaCacheWrapper::with_settings(16, 60);
        cache.insert("nums".to_string(), &vec![1, 2, 3], 0).await;
        assert_eq!(
            cache.get::<Vec<i32>>("nums").await,
            CacheResult::Found(vec![1, 2, 3])
        );

        cache
            .insert_raw("bad".to_string(), "{not json".to_string(), 0)
            .await;
        assert_eq!(cache.get::<Vec<i32>>("bad").await, CacheResult::NotFound);
    }

    // 类型化读取要能跨任务使用（future 必须是 Send）
    #[tokio::test]
    async fn test_typed_get_across_tasks() {
        let cache = std::sync::Arc::new(MokaCacheWrapper::with_settings(16, 60));
        cache.insert("nums".to_string(), &vec![1, 2, 3], 0).await;

        let handle = tokio::spawn({
            let cache = cache.clone();
            async move { cache.get::<Vec<i32>>("nums").await }
        });

        assert_eq!(handle.await.unwrap(), CacheResult::Found(vec![1, 2, 3]));
    }
}
