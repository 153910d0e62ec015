//! Collection service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::{domain::ReferenceSources, ids::TypedId};

use super::{Collection, Entity, ResolveReferences, ServiceError};

#[derive(Debug)]
pub struct StoredCollectionService<E: Entity> {
    collection: Arc<Collection<E>>,
    sources: Arc<ReferenceSources>,
}

impl<E: Entity> StoredCollectionService<E> {
    #[must_use]
    pub fn new(collection: Arc<Collection<E>>, sources: Arc<ReferenceSources>) -> Self {
        Self {
            collection,
            sources,
        }
    }
}

#[async_trait]
impl<E: Entity> CollectionService<E> for StoredCollectionService<E> {
    async fn load(&self) -> Result<usize, ServiceError> {
        self.collection.load().await
    }

    async fn list(&self) -> Vec<E> {
        self.collection.list().await
    }

    async fn get(&self, id: TypedId<E>) -> Option<E> {
        self.collection.get(&id).await
    }

    async fn create(&self, draft: E::Draft) -> Result<E, ServiceError> {
        let draft = draft.resolve(&self.sources).await?;

        self.collection.add(draft).await
    }

    async fn update(&self, id: TypedId<E>, record: E) -> Result<Option<E>, ServiceError> {
        self.collection.edit(&id, record).await
    }

    async fn delete(&self, id: TypedId<E>) -> Result<bool, ServiceError> {
        self.collection.delete(&id).await
    }

    async fn set_image(&self, id: TypedId<E>, image: String) -> Result<Option<E>, ServiceError> {
        if !E::HAS_IMAGE {
            return Err(ServiceError::NoImage(E::COLLECTION));
        }

        self.collection
            .modify(&id, move |record| {
                if let Some(slot) = record.image_mut() {
                    *slot = image;
                }
            })
            .await
    }
}

#[automock]
#[async_trait]
pub trait CollectionService<E: Entity>: Send + Sync {
    /// Replaces the in-memory records with the stored ones.
    async fn load(&self) -> Result<usize, ServiceError>;

    /// Retrieves all records in insertion order.
    async fn list(&self) -> Vec<E>;

    /// Retrieve a single record.
    async fn get(&self, id: TypedId<E>) -> Option<E>;

    /// Resolves the draft's references and stores it under a new id.
    async fn create(&self, draft: E::Draft) -> Result<E, ServiceError>;

    /// Replaces the record with the given id; `None` when it does not exist.
    async fn update(&self, id: TypedId<E>, record: E) -> Result<Option<E>, ServiceError>;

    /// Deletes the record with the given id; `false` when it did not exist.
    async fn delete(&self, id: TypedId<E>) -> Result<bool, ServiceError>;

    /// Replaces the image of the record with the given id.
    async fn set_image(&self, id: TypedId<E>, image: String) -> Result<Option<E>, ServiceError>;
}
