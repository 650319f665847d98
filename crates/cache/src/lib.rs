//! Redis implementation of the core cache port.
//!
//! Backs the quiz-result mirror with TTL'd string entries and a Redis set
//! per company as the member index. A missing or expired key is an
//! ordinary miss (`Ok(None)`); only transport and serialization problems
//! become errors, so callers can tell "no result yet" from "Redis is
//! down".

use std::sync::Arc;

use async_trait::async_trait;
use fred::clients::Client as RedisClient;
use fred::interfaces::{KeysInterface, SetsInterface};
use fred::types::Expiration;
use quizhive_common::{AppError, AppResult};
use quizhive_core::interfaces::{CacheGateway, CachedQuizResult};
use tracing::debug;

/// Redis-backed [`CacheGateway`].
#[derive(Clone)]
pub struct RedisCache {
    redis: Arc<RedisClient>,
}

impl RedisCache {
    /// Create a new Redis cache over an established client.
    #[must_use]
    pub const fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl CacheGateway for RedisCache {
    async fn set_cache(&self, key: &str, value: &CachedQuizResult, ttl_secs: u64) -> AppResult<()> {
        let json_str =
            serde_json::to_string(value).map_err(|e| AppError::Cache(e.to_string()))?;
        let ttl = i64::try_from(ttl_secs).unwrap_or(i64::MAX);

        self.redis
            .set::<(), _, _>(key, json_str, Some(Expiration::EX(ttl)), None, false)
            .await
            .map_err(|e| AppError::Cache(e.to_string()))?;

        debug!(key, ttl_secs, "cached quiz result");

        Ok(())
    }

    async fn get_cache(&self, key: &str) -> AppResult<Option<CachedQuizResult>> {
        let result: Option<String> = self
            .redis
            .get(key)
            .await
            .map_err(|e| AppError::Cache(e.to_string()))?;

        match result {
            Some(json_str) => {
                let value: CachedQuizResult = serde_json::from_str(&json_str)
                    .map_err(|e| AppError::Cache(e.to_string()))?;

                debug!(key, "cache hit");
                Ok(Some(value))
            }
            None => {
                debug!(key, "cache miss");
                Ok(None)
            }
        }
    }

    async fn set_member_key(&self, member_key: &str, cached_key: &str) -> AppResult<()> {
        self.redis
            .sadd::<(), _, _>(member_key, cached_key)
            .await
            .map_err(|e| AppError::Cache(e.to_string()))?;

        debug!(member_key, cached_key, "indexed result key for company");

        Ok(())
    }

    async fn get_member_data(&self, member_key: &str) -> AppResult<Vec<String>> {
        self.redis
            .smembers::<Vec<String>, _>(member_key)
            .await
            .map_err(|e| AppError::Cache(e.to_string()))
    }
}
