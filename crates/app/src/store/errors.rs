//! Store service errors.

use thiserror::Error;

use crate::persistence::PersistenceError;

/// Errors returned by collections and collection services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A reference points at a record that does not exist (strict policy).
    #[error("{collection} record `{id}` referenced but not found")]
    MissingReference {
        collection: &'static str,
        id: String,
    },

    /// The entity type has no image slot.
    #[error("{0} records have no image")]
    NoImage(&'static str),

    /// The last load failed, so writes would overwrite unread stored data.
    #[error("{0} did not load from storage; writes are disabled until it does")]
    NotLoaded(&'static str),

    /// The backend failed.
    #[error("storage error: {0}")]
    Persistence(#[from] PersistenceError),
}
