//! Denormalized references and the resolver that fills their labels.

use std::fmt::{self, Debug, Formatter};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{domain::ReferenceSources, ids::TypedId};

use super::{Entity, ServiceError};

/// A foreign key into another collection plus the label it had when written.
///
/// The label is a point-in-time copy; renaming the target later does not
/// update it.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Reference<T> {
    pub id: TypedId<T>,

    #[serde(default)]
    pub name: String,
}

impl<T> Reference<T> {
    /// An unresolved reference, as submitted by a form.
    pub fn to(id: impl Into<TypedId<T>>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
        }
    }
}

impl<T> Clone for Reference<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

impl<T> PartialEq for Reference<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name
    }
}

impl<T> Debug for Reference<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reference")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

/// Typed read access to a collection, used for cross-collection joins.
#[async_trait]
pub trait Lookup<E: Entity>: Send + Sync {
    async fn get(&self, id: &TypedId<E>) -> Option<E>;

    async fn list(&self) -> Vec<E>;
}

/// What to do when a referenced record does not exist at write time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReferencePolicy {
    /// Store the reference with an empty label and log a warning.
    #[default]
    Lenient,

    /// Reject the write.
    Strict,
}

/// Drafts whose references must be resolved before they are stored.
#[async_trait]
pub trait ResolveReferences: Sized + Send {
    async fn resolve(self, sources: &ReferenceSources) -> Result<Self, ServiceError>;
}

/// Re-label one reference from the current state of `lookup`.
///
/// # Errors
///
/// Returns [`ServiceError::MissingReference`] under the strict policy when the
/// target does not exist.
pub async fn resolve_reference<E: Entity>(
    id: TypedId<E>,
    lookup: &dyn Lookup<E>,
    policy: ReferencePolicy,
) -> Result<Reference<E>, ServiceError> {
    if let Some(target) = lookup.get(&id).await {
        return Ok(Reference {
            name: target.label().to_owned(),
            id,
        });
    }

    match policy {
        ReferencePolicy::Lenient => {
            warn!(
                collection = E::COLLECTION,
                id = %id,
                "reference target not found, storing empty label"
            );

            Ok(Reference::to(id))
        }
        ReferencePolicy::Strict => Err(ServiceError::MissingReference {
            collection: E::COLLECTION,
            id: id.into_string(),
        }),
    }
}

/// Re-label every reference in `references`, keeping their order.
///
/// # Errors
///
/// Fails on the first missing target under the strict policy.
pub async fn resolve_references<E: Entity>(
    references: Vec<Reference<E>>,
    lookup: &dyn Lookup<E>,
    policy: ReferencePolicy,
) -> Result<Vec<Reference<E>>, ServiceError> {
    let mut resolved = Vec::with_capacity(references.len());

    for reference in references {
        resolved.push(resolve_reference(reference.id, lookup, policy).await?);
    }

    Ok(resolved)
}
