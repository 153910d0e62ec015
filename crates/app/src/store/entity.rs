//! Entity contract shared by every collection.

use std::fmt::Debug;

use jiff::Timestamp;
use serde::{Serialize, de::DeserializeOwned};

use crate::{ids::TypedId, store::ResolveReferences, validation::Validate};

/// A record type stored in a [`Collection`](crate::store::Collection).
pub trait Entity:
    Serialize + DeserializeOwned + Clone + Debug + PartialEq + Send + Sync + 'static
{
    /// Form payload for a new record: every field except the id.
    type Draft: ResolveReferences
        + Validate
        + DeserializeOwned
        + Clone
        + Debug
        + Send
        + Sync
        + 'static;

    /// Collection name: the snapshot state field and the document collection.
    const COLLECTION: &'static str;

    /// Key under which the collection snapshot is stored.
    const STORAGE_KEY: &'static str;

    /// Whether [`Entity::image_mut`] returns a field.
    const HAS_IMAGE: bool = false;

    fn id(&self) -> &TypedId<Self>;

    fn set_id(&mut self, id: TypedId<Self>);

    /// Build the stored record for a freshly assigned id.
    fn from_draft(id: TypedId<Self>, draft: Self::Draft, created_at: Timestamp) -> Self;

    /// Human-readable name copied into references to this record.
    fn label(&self) -> &str;

    /// The image field, for records that carry one.
    fn image_mut(&mut self) -> Option<&mut String> {
        None
    }
}
