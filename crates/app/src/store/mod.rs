//! Entity Store
//!
//! Generic collection machinery shared by every domain: the write-through
//! [`Collection`], the reference resolver and the injectable
//! [`CollectionService`].

mod collection;
mod entity;
mod errors;
mod references;
mod service;

pub use collection::Collection;
pub use entity::Entity;
pub use errors::ServiceError;
pub use references::{
    Lookup, Reference, ReferencePolicy, ResolveReferences, resolve_reference, resolve_references,
};
pub use service::{CollectionService, MockCollectionService, StoredCollectionService};
