//! In-process [`KvStore`]. State is lost on restart; single-instance use only.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::domain::repository::KvStore;
use crate::error::AuthServiceError;

#[derive(Clone, Default)]
pub struct MemoryKvStore {
    entries: Arc<Mutex<HashMap<String, (String, Instant)>>>,
}

impl MemoryKvStore {
    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<String, (String, Instant)>>, AuthServiceError>
    {
        self.entries
            .lock()
            .map_err(|_| AuthServiceError::Internal(anyhow::anyhow!("kv store lock poisoned")))
    }
}

impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AuthServiceError> {
        let mut entries = self.lock()?;
        match entries.get(key) {
            Some((value, deadline)) if *deadline > Instant::now() => Ok(Some(value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Also drops every expired entry, so keys that are never read again
    /// do not accumulate.
    async fn set_ex(&self, key: &str, value: &str, ttl_secs: u64) -> Result<(), AuthServiceError> {
        let now = Instant::now();
        let mut entries = self.lock()?;
        entries.retain(|_, (_, deadline)| *deadline > now);
        entries.insert(
            key.to_owned(),
            (value.to_owned(), now + Duration::from_secs(ttl_secs)),
        );
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<(), AuthServiceError> {
        self.lock()?.remove(key);
        Ok(())
    }
}
