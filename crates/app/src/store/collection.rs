//! Entity Collection Store

use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use async_trait::async_trait;
use jiff::Timestamp;
use rustc_hash::FxHashSet;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::{
    ids::{IdGenerator, TypedId},
    persistence::{Backend, Change},
};

use super::{Entity, Lookup, ServiceError};

/// Ordered in-memory records of one entity type, written through to a
/// [`Backend`] on every mutation.
///
/// A mutation holds the write lock across its backend call and only commits
/// to memory once the backend accepted it, so a failed write leaves the
/// collection untouched.
///
/// After a failed [`Collection::load`] every mutation is refused with
/// [`ServiceError::NotLoaded`] until a later load succeeds.
pub struct Collection<E: Entity> {
    records: RwLock<Vec<E>>,
    unloaded: AtomicBool,
    backend: Arc<dyn Backend<E>>,
    ids: IdGenerator,
}

impl<E: Entity> Collection<E> {
    #[must_use]
    pub fn new(backend: Arc<dyn Backend<E>>) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            unloaded: AtomicBool::new(false),
            backend,
            ids: IdGenerator::new(),
        }
    }

    /// Replace the in-memory records with the backend's contents.
    ///
    /// Records repeating an id already seen are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be read. The current records
    /// are kept and writes are refused until a load succeeds.
    #[tracing::instrument(
        name = "collection.load",
        skip(self),
        fields(collection = E::COLLECTION, record_count = tracing::field::Empty),
        err
    )]
    pub async fn load(&self) -> Result<usize, ServiceError> {
        let loaded = match self.backend.load().await {
            Ok(loaded) => loaded,
            Err(error) => {
                self.unloaded.store(true, Ordering::Release);
                return Err(error.into());
            }
        };

        let mut seen = FxHashSet::default();
        let mut unique = Vec::with_capacity(loaded.len());

        for record in loaded {
            if seen.insert(record.id().clone()) {
                unique.push(record);
            } else {
                warn!(id = %record.id(), "dropping record with duplicate id");
            }
        }

        let record_count = unique.len();

        *self.records.write().await = unique;
        self.unloaded.store(false, Ordering::Release);

        tracing::Span::current().record("record_count", record_count);

        Ok(record_count)
    }

    fn ensure_writable(&self) -> Result<(), ServiceError> {
        if self.unloaded.load(Ordering::Acquire) {
            return Err(ServiceError::NotLoaded(E::COLLECTION));
        }

        Ok(())
    }

    pub async fn list(&self) -> Vec<E> {
        self.records.read().await.clone()
    }

    pub async fn get(&self, id: &TypedId<E>) -> Option<E> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| record.id() == id)
            .cloned()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Append a record built from `draft` under a freshly generated id.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the write or the last load
    /// failed.
    #[tracing::instrument(
        name = "collection.add",
        skip(self, draft),
        fields(collection = E::COLLECTION, id = tracing::field::Empty),
        err
    )]
    pub async fn add(&self, draft: E::Draft) -> Result<E, ServiceError> {
        let mut records = self.records.write().await;
        self.ensure_writable()?;

        let mut id = self.ids.next::<E>();

        while records.iter().any(|record| record.id() == &id) {
            id = self.ids.next();
        }

        tracing::Span::current().record("id", id.as_str());

        let record = E::from_draft(id, draft, Timestamp::now());

        let mut snapshot = records.clone();
        snapshot.push(record.clone());

        self.backend
            .save(Change::Created(&record), &snapshot)
            .await?;

        *records = snapshot;

        debug!(record_count = records.len(), "added record");

        Ok(record)
    }

    /// Replace the record stored under `id` wholesale. The stored id is
    /// always `id`, whatever `record` carries.
    ///
    /// Returns `None` without touching storage when `id` is absent.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the write or the last load
    /// failed.
    #[tracing::instrument(
        name = "collection.edit",
        skip(self, record),
        fields(collection = E::COLLECTION, id = %id),
        err
    )]
    pub async fn edit(&self, id: &TypedId<E>, mut record: E) -> Result<Option<E>, ServiceError> {
        let mut records = self.records.write().await;
        self.ensure_writable()?;

        let Some(position) = records.iter().position(|existing| existing.id() == id) else {
            debug!("edit target not found");
            return Ok(None);
        };

        record.set_id(id.clone());

        self.replace_at(&mut records, position, record).await.map(Some)
    }

    /// Apply `change` to the record stored under `id` and persist it.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the write or the last load
    /// failed.
    #[tracing::instrument(
        name = "collection.modify",
        skip(self, change),
        fields(collection = E::COLLECTION, id = %id),
        err
    )]
    pub async fn modify<F>(&self, id: &TypedId<E>, change: F) -> Result<Option<E>, ServiceError>
    where
        F: FnOnce(&mut E) + Send,
    {
        let mut records = self.records.write().await;
        self.ensure_writable()?;

        let Some((position, current)) = records
            .iter()
            .enumerate()
            .find(|(_, existing)| existing.id() == id)
        else {
            debug!("modify target not found");
            return Ok(None);
        };

        let mut updated = current.clone();
        change(&mut updated);
        updated.set_id(id.clone());

        self.replace_at(&mut records, position, updated)
            .await
            .map(Some)
    }

    /// Remove the record stored under `id`. Returns whether one was removed.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the write or the last load
    /// failed.
    #[tracing::instrument(
        name = "collection.delete",
        skip(self),
        fields(collection = E::COLLECTION, id = %id),
        err
    )]
    pub async fn delete(&self, id: &TypedId<E>) -> Result<bool, ServiceError> {
        let mut records = self.records.write().await;
        self.ensure_writable()?;

        let Some(position) = records.iter().position(|existing| existing.id() == id) else {
            debug!("delete target not found");
            return Ok(false);
        };

        let mut snapshot = records.clone();
        snapshot.remove(position);

        self.backend.save(Change::Deleted(id), &snapshot).await?;

        *records = snapshot;

        Ok(true)
    }

    async fn replace_at(
        &self,
        records: &mut Vec<E>,
        position: usize,
        record: E,
    ) -> Result<E, ServiceError> {
        let mut snapshot = records.clone();

        if let Some(slot) = snapshot.get_mut(position) {
            *slot = record.clone();
        }

        self.backend
            .save(Change::Updated(&record), &snapshot)
            .await?;

        *records = snapshot;

        Ok(record)
    }
}

impl<E: Entity> fmt::Debug for Collection<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("collection", &E::COLLECTION)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<E: Entity> Lookup<E> for Collection<E> {
    async fn get(&self, id: &TypedId<E>) -> Option<E> {
        Collection::get(self, id).await
    }

    async fn list(&self) -> Vec<E> {
        Collection::list(self).await
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::categories::{Category, NewCategory},
        persistence::{
            DocumentBackend, KeyValueStore, MemoryKeyValueStore, MockDocumentStore,
            PersistenceError, SnapshotBackend,
        },
    };

    use super::*;

    fn snapshot_collection() -> (Arc<MemoryKeyValueStore>, Collection<Category>) {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let collection = Collection::new(Arc::new(SnapshotBackend::<Category>::new(kv.clone())));

        (kv, collection)
    }

    fn draft(title: &str) -> NewCategory {
        NewCategory {
            title: title.to_string(),
        }
    }

    fn failing_collection() -> Collection<Category> {
        let mut store = MockDocumentStore::new();

        store.expect_create().returning(|_, _| {
            Err(PersistenceError::UnexpectedResponse("503".to_string()))
        });
        store.expect_update().returning(|_, _| {
            Err(PersistenceError::UnexpectedResponse("503".to_string()))
        });
        store.expect_delete().returning(|_, _| {
            Err(PersistenceError::UnexpectedResponse("503".to_string()))
        });

        Collection::new(Arc::new(DocumentBackend::<Category>::new(Arc::new(store))))
    }

    #[tokio::test]
    async fn add_appends_one_record_with_fresh_id() -> TestResult {
        let (_, collection) = snapshot_collection();

        let first = collection.add(draft("Desserts")).await?;
        let second = collection.add(draft("Drinks")).await?;

        assert_eq!(collection.len().await, 2);
        assert!(!first.id.as_str().is_empty());
        assert_ne!(first.id, second.id);
        assert_eq!(collection.list().await, vec![first, second]);

        Ok(())
    }

    #[tokio::test]
    async fn edit_replaces_fields_and_preserves_id() -> TestResult {
        let (_, collection) = snapshot_collection();
        let created = collection.add(draft("Desserts")).await?;

        let replacement = Category {
            id: TypedId::from("ignored"),
            title: "Sweets".to_string(),
        };

        let edited = collection.edit(&created.id, replacement).await?;

        assert_eq!(
            edited,
            Some(Category {
                id: created.id.clone(),
                title: "Sweets".to_string(),
            })
        );
        assert_eq!(collection.get(&created.id).await, edited);

        Ok(())
    }

    #[tokio::test]
    async fn edit_unknown_id_leaves_collection_unchanged() -> TestResult {
        let (kv, collection) = snapshot_collection();
        collection.add(draft("Desserts")).await?;

        let before = collection.list().await;
        let stored_before = kv.get(Category::STORAGE_KEY)?;

        let edited = collection
            .edit(
                &TypedId::from("404"),
                Category {
                    id: TypedId::from("404"),
                    title: "Ghost".to_string(),
                },
            )
            .await?;

        assert_eq!(edited, None);
        assert_eq!(collection.list().await, before);
        assert_eq!(kv.get(Category::STORAGE_KEY)?, stored_before);

        Ok(())
    }

    #[tokio::test]
    async fn delete_is_idempotent() -> TestResult {
        let (_, collection) = snapshot_collection();
        let keep = collection.add(draft("Desserts")).await?;
        let doomed = collection.add(draft("Drinks")).await?;

        assert!(collection.delete(&doomed.id).await?);
        let after_once = collection.list().await;

        assert!(!collection.delete(&doomed.id).await?);

        assert_eq!(collection.list().await, after_once);
        assert_eq!(after_once, vec![keep]);

        Ok(())
    }

    #[tokio::test]
    async fn modify_updates_a_single_record() -> TestResult {
        let (_, collection) = snapshot_collection();
        let created = collection.add(draft("Desserts")).await?;

        let modified = collection
            .modify(&created.id, |category| category.title.push_str(" & Cakes"))
            .await?;

        assert_eq!(modified.map(|c| c.title), Some("Desserts & Cakes".to_string()));
        assert_eq!(
            collection.modify(&TypedId::from("404"), |_| {}).await?,
            None
        );

        Ok(())
    }

    #[tokio::test]
    async fn reload_restores_persisted_records() -> TestResult {
        let (kv, collection) = snapshot_collection();
        collection.add(draft("Desserts")).await?;
        collection.add(draft("Drinks")).await?;

        let rehydrated =
            Collection::new(Arc::new(SnapshotBackend::<Category>::new(kv.clone())));

        assert_eq!(rehydrated.load().await?, 2);
        assert_eq!(rehydrated.list().await, collection.list().await);

        Ok(())
    }

    #[tokio::test]
    async fn load_drops_duplicate_ids() -> TestResult {
        let kv = Arc::new(MemoryKeyValueStore::new());
        kv.set(
            Category::STORAGE_KEY,
            br#"{"state":{"categs":[{"id":1,"title":"A"},{"id":1,"title":"B"}]},"version":0}"#,
        )?;

        let collection = Collection::new(Arc::new(SnapshotBackend::<Category>::new(kv)));

        assert_eq!(collection.load().await?, 1);
        assert_eq!(
            collection.list().await.first().map(|c| c.title.clone()),
            Some("A".to_string())
        );

        Ok(())
    }

    #[tokio::test]
    async fn failed_writes_leave_memory_unchanged() {
        let collection = failing_collection();

        let result = collection.add(draft("Desserts")).await;

        assert!(
            matches!(result, Err(ServiceError::Persistence(_))),
            "expected Persistence error, got {result:?}"
        );
        assert!(collection.is_empty().await);
    }

    #[tokio::test]
    async fn failed_load_keeps_current_records() -> TestResult {
        let mut store = MockDocumentStore::new();

        store
            .expect_create()
            .returning(|_, _| Ok(()));
        store
            .expect_list()
            .returning(|_| Err(PersistenceError::UnexpectedResponse("timeout".to_string())));

        let collection =
            Collection::new(Arc::new(DocumentBackend::<Category>::new(Arc::new(store))));

        collection.add(draft("Desserts")).await?;

        assert!(collection.load().await.is_err(), "load should fail");
        assert_eq!(collection.len().await, 1);

        Ok(())
    }

    #[tokio::test]
    async fn failed_load_refuses_writes_and_keeps_stored_snapshot() -> TestResult {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let newer: &[u8] = br#"{"state":{"categs":[{"id":1,"title":"Grills"},{"id":2,"title":"Drinks"}]},"version":1}"#;
        kv.set(Category::STORAGE_KEY, newer)?;

        let collection = Collection::new(Arc::new(SnapshotBackend::<Category>::new(kv.clone())));

        assert!(collection.load().await.is_err(), "newer snapshot should not load");

        let added = collection.add(draft("Sweets")).await;
        assert!(
            matches!(added, Err(ServiceError::NotLoaded("categs"))),
            "expected NotLoaded error, got {added:?}"
        );

        let deleted = collection.delete(&TypedId::from("1")).await;
        assert!(
            matches!(deleted, Err(ServiceError::NotLoaded("categs"))),
            "expected NotLoaded error, got {deleted:?}"
        );

        assert_eq!(kv.get(Category::STORAGE_KEY)?.as_deref(), Some(newer));
        assert!(collection.is_empty().await);

        Ok(())
    }

    #[tokio::test]
    async fn successful_reload_reenables_writes() -> TestResult {
        let kv = Arc::new(MemoryKeyValueStore::new());
        kv.set(Category::STORAGE_KEY, b"not json")?;

        let collection = Collection::new(Arc::new(SnapshotBackend::<Category>::new(kv.clone())));

        assert!(collection.load().await.is_err(), "corrupt snapshot should not load");

        kv.set(
            Category::STORAGE_KEY,
            br#"{"state":{"categs":[{"id":1,"title":"Grills"}]},"version":0}"#,
        )?;

        assert_eq!(collection.load().await?, 1);

        collection.add(draft("Sweets")).await?;

        assert_eq!(collection.len().await, 2);

        Ok(())
    }
}
