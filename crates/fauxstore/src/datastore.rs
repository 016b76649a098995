//! The persistence collaborator seam
//!
//! fauxstore prepares entities; storing them is somebody else's job. The
//! [`Datastore`] trait is that boundary, and [`MemoryDatastore`] is the
//! in-memory double used by tests and demos.

use crate::error::{ModelError, ModelResult};
use crate::model::Entity;
use fauxstore_faker::Key;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

#[async_trait::async_trait]
pub trait Datastore: Send + Sync {
    /// Persist a filled entity and return the key it was stored under.
    async fn put(&self, entity: &Entity) -> ModelResult<Key>;
}

/// In-memory datastore: a monotonic id sequence plus a record map.
#[derive(Debug)]
pub struct MemoryDatastore {
    next_id: AtomicI64,
    records: RwLock<HashMap<Key, Value>>,
}

impl Default for MemoryDatastore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDatastore {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            records: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, key: &Key) -> Option<Value> {
        self.records
            .read()
            .ok()
            .and_then(|records| records.get(key).cloned())
    }
}

#[async_trait::async_trait]
impl Datastore for MemoryDatastore {
    async fn put(&self, entity: &Entity) -> ModelResult<Key> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let key = Key::new(entity.kind(), id);

        let mut records = self
            .records
            .write()
            .map_err(|_| ModelError::Datastore("record map lock poisoned".to_string()))?;
        records.insert(key.clone(), entity.to_json());
        tracing::debug!("stored '{}' entity as {}", entity.kind(), key);

        Ok(key)
    }
}
