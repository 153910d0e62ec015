//! Persistence

mod backend;
mod documents;
mod errors;
mod file;
mod kv;
pub mod rest;
mod snapshot;

pub use backend::{Backend, Change};
pub use documents::{Document, DocumentBackend, DocumentStore, KvDocumentStore, MockDocumentStore};
pub use errors::PersistenceError;
pub use file::FileKeyValueStore;
pub use kv::{KeyValueStore, MemoryKeyValueStore};
pub use rest::{RestDocumentStore, RestDocumentStoreConfig};
pub use snapshot::{SNAPSHOT_VERSION, SnapshotBackend};
