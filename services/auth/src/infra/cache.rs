use deadpool_redis::Pool;
use deadpool_redis::redis::AsyncCommands;

use crate::domain::repository::KvStore;
use crate::error::AuthServiceError;
use crate::infra::memory::MemoryKvStore;

#[derive(Clone)]
pub struct RedisKvStore {
    pub pool: Pool,
}

impl RedisKvStore {
    async fn conn(&self) -> Result<deadpool_redis::Connection, AuthServiceError> {
        self.pool
            .get()
            .await
            .map_err(|e| AuthServiceError::Internal(e.into()))
    }
}

impl KvStore for RedisKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AuthServiceError> {
        let mut conn = self.conn().await?;
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| AuthServiceError::Internal(e.into()))?;
        Ok(value)
    }

    async fn set_ex(&self, key: &str, value: &str, ttl_secs: u64) -> Result<(), AuthServiceError> {
        let mut conn = self.conn().await?;
        let (): () = conn
            .set_ex(key, value, ttl_secs)
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| AuthServiceError::Internal(e.into()))?;
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<(), AuthServiceError> {
        let mut conn = self.conn().await?;
        let (): () = conn
            .del(key)
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| AuthServiceError::Internal(e.into()))?;
        Ok(())
    }
}

/// KV backend picked at startup: Redis when `REDIS_URL` is set, otherwise
/// process memory.
#[derive(Clone)]
pub enum KvBackend {
    Redis(RedisKvStore),
    Memory(MemoryKvStore),
}

impl KvStore for KvBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, AuthServiceError> {
        match self {
            Self::Redis(store) => store.get(key).await,
            Self::Memory(store) => store.get(key).await,
        }
    }

    async fn set_ex(&self, key: &str, value: &str, ttl_secs: u64) -> Result<(), AuthServiceError> {
        match self {
            Self::Redis(store) => store.set_ex(key, value, ttl_secs).await,
            Self::Memory(store) => store.set_ex(key, value, ttl_secs).await,
        }
    }

    async fn del(&self, key: &str) -> Result<(), AuthServiceError> {
        match self {
            Self::Redis(store) => store.del(key).await,
            Self::Memory(store) => store.del(key).await,
        }
    }
}
