//! Collection Backends

use async_trait::async_trait;

use crate::{ids::TypedId, store::Entity};

use super::PersistenceError;

/// A single mutation handed to a backend.
#[derive(Debug)]
pub enum Change<'a, E: Entity> {
    Created(&'a E),
    Updated(&'a E),
    Deleted(&'a TypedId<E>),
}

impl<E: Entity> Change<'_, E> {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Created(_) => "created",
            Self::Updated(_) => "updated",
            Self::Deleted(_) => "deleted",
        }
    }
}

/// Durable storage for one entity collection.
///
/// Snapshot backends persist `snapshot` and ignore the change detail;
/// document backends persist only the change.
#[async_trait]
pub trait Backend<E: Entity>: Send + Sync {
    /// Read every stored record, in stored order.
    async fn load(&self) -> Result<Vec<E>, PersistenceError>;

    /// Persist `change`. `snapshot` is the collection as it will be once the
    /// change is applied.
    async fn save(&self, change: Change<'_, E>, snapshot: &[E]) -> Result<(), PersistenceError>;
}
