use redis::{Client, RedisError, aio::ConnectionManager};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use std::time::Duration;

/// Redis-backed view cache. Aggregate endpoints (dashboard, reports,
/// overview) read through it; mutations invalidate the views they make
/// stale. Every figure can always be recomputed from the database, so cache
/// failures only cost a recomputation.
#[derive(Clone)]
pub struct RedisCache {
    connection: ConnectionManager,
}

impl RedisCache {
    pub async fn new(redis_url: &str) -> Result<Self, RedisError> {
        let client = Client::open(redis_url)?;
        let connection = ConnectionManager::new(client).await?;
        Ok(Self { connection })
    }

    /// Get a cached view, deserialized from JSON.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> redis::RedisResult<Option<T>> {
        let value: Option<String> = redis::cmd("GET")
            .arg(key)
            .query_async(&mut self.connection.clone())
            .await?;

        match value {
            Some(v) => {
                let deserialized = serde_json::from_str(&v).map_err(|e| {
                    redis::RedisError::from((
                        redis::ErrorKind::TypeError,
                        "Deserialization error",
                        e.to_string(),
                    ))
                })?;
                Ok(Some(deserialized))
            }
            None => Ok(None),
        }
    }

    /// Store a view as JSON with a TTL so a missed invalidation self-heals.
    pub async fn set<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> redis::RedisResult<()> {
        let serialized = serde_json::to_string(value).map_err(|e| {
            redis::RedisError::from((
                redis::ErrorKind::TypeError,
                "Serialization error",
                e.to_string(),
            ))
        })?;

        redis::cmd("SET")
            .arg(key)
            .arg(serialized)
            .arg("EX")
            .arg(ttl.as_secs())
            .query_async(&mut self.connection.clone())
            .await
    }

    /// Delete every key matching a pattern.
    async fn delete_pattern(&self, pattern: &str) -> redis::RedisResult<()> {
        let keys: Vec<String> = redis::cmd("KEYS")
            .arg(pattern)
            .query_async(&mut self.connection.clone())
            .await?;

        if !keys.is_empty() {
            let _: () = redis::cmd("DEL")
                .arg(&keys)
                .query_async(&mut self.connection.clone())
                .await?;
        }

        Ok(())
    }

    /// Best-effort invalidation of the named views after a mutation.
    /// Failures are logged; a stale view expires with its TTL anyway.
    pub async fn invalidate(&self, patterns: &[&str]) {
        for pattern in patterns {
            if let Err(e) = self.delete_pattern(pattern).await {
                tracing::warn!("Failed to invalidate cached view {pattern}: {e}");
            }
        }
    }
}

/// Names of the cached derived views, and the sets a mutation makes stale.
pub mod views {
    pub const DASHBOARD_SUMMARY: &str = "dashboard:summary";
    pub const DASHBOARD_OCCUPANCY: &str = "dashboard:occupancy";
    pub const INCOME_REPORT: &str = "report:income";
    pub const OCCUPANCY_REPORT: &str = "report:occupancy";
    pub const PAYMENT_STATUS_REPORT: &str = "report:payment-status";
    pub const OVERVIEW: &str = "overview";

    /// Stale after any dormitory/room/tenant/contract mutation.
    pub const OCCUPANCY_VIEWS: &[&str] = &["dashboard:*", "report:*", "overview"];
    /// Stale after a payment mutation (occupancy is unaffected).
    pub const PAYMENT_VIEWS: &[&str] = &["dashboard:*", "report:*"];
}

/// TTLs for the cached views, overridable via `CACHE_TTL_*` env vars
/// (seconds).
pub struct CacheConfig {
    pub dashboard_ttl: Duration,
    pub report_ttl: Duration,
    pub overview_ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dashboard_ttl: Duration::from_secs(60),
            report_ttl: Duration::from_secs(300),
            overview_ttl: Duration::from_secs(120),
        }
    }
}

impl CacheConfig {
    pub fn from_env() -> Self {
        Self {
            dashboard_ttl: parse_duration_secs("CACHE_TTL_DASHBOARD", 60),
            report_ttl: parse_duration_secs("CACHE_TTL_REPORTS", 300),
            overview_ttl: parse_duration_secs("CACHE_TTL_OVERVIEW", 120),
        }
    }
}

fn parse_duration_secs(env_var: &str, default: u64) -> Duration {
    std::env::var(env_var)
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or_else(|| Duration::from_secs(default))
}

/// Wrapper type for Actix-web app data
pub type CacheData = Arc<RedisCache>;
