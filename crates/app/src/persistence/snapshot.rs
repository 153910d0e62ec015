//! Whole-collection snapshot backend.
//!
//! Each collection lives under one key as
//! `{"state": {"<collection>": [...]}, "version": 0}`, the layout the browser
//! front end wrote to local storage.

use std::{fmt, marker::PhantomData, sync::Arc};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::store::Entity;

use super::{Backend, Change, KeyValueStore, PersistenceError};

/// Newest snapshot format this crate reads and the one it writes.
pub const SNAPSHOT_VERSION: u32 = 0;

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotEnvelope {
    #[serde(default)]
    state: Map<String, Value>,

    #[serde(default)]
    version: u32,
}

pub struct SnapshotBackend<E> {
    kv: Arc<dyn KeyValueStore>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> SnapshotBackend<E> {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            kv,
            _entity: PhantomData,
        }
    }
}

impl<E> fmt::Debug for SnapshotBackend<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapshotBackend").finish_non_exhaustive()
    }
}

#[async_trait]
impl<E: Entity> Backend<E> for SnapshotBackend<E> {
    async fn load(&self) -> Result<Vec<E>, PersistenceError> {
        let Some(bytes) = self.kv.get(E::STORAGE_KEY)? else {
            debug!(key = E::STORAGE_KEY, "no snapshot stored");
            return Ok(Vec::new());
        };

        let mut envelope: SnapshotEnvelope = serde_json::from_slice(&bytes)?;

        if envelope.version > SNAPSHOT_VERSION {
            return Err(PersistenceError::UnsupportedVersion {
                key: E::STORAGE_KEY.to_owned(),
                version: envelope.version,
            });
        }

        match envelope.state.remove(E::COLLECTION) {
            Some(records) => Ok(serde_json::from_value(records)?),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, change: Change<'_, E>, snapshot: &[E]) -> Result<(), PersistenceError> {
        let mut state = Map::new();
        state.insert(E::COLLECTION.to_owned(), serde_json::to_value(snapshot)?);

        let envelope = SnapshotEnvelope {
            state,
            version: SNAPSHOT_VERSION,
        };

        self.kv.set(E::STORAGE_KEY, &serde_json::to_vec(&envelope)?)?;

        debug!(
            key = E::STORAGE_KEY,
            change = change.kind(),
            record_count = snapshot.len(),
            "wrote snapshot"
        );

        Ok(())
    }
}
