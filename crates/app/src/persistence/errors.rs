//! Persistence errors.

use thiserror::Error;

/// Errors raised by key-value stores, document stores and backends.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Filesystem access failed.
    #[error("storage i/o error")]
    Io(#[from] std::io::Error),

    /// A record or snapshot could not be encoded or decoded.
    #[error("serialization error")]
    Serialization(#[from] serde_json::Error),

    /// The key cannot be mapped onto the backing store.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// The snapshot was written by a newer format version.
    #[error("snapshot `{key}` has unsupported version {version}")]
    UnsupportedVersion { key: String, version: u32 },

    /// A document body was not a JSON object.
    #[error("document `{0}` is not a JSON object")]
    MalformedDocument(String),

    /// The in-memory store lock was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    Poisoned,

    /// An HTTP transport or decoding error occurred.
    #[error("http error")]
    Http(#[from] reqwest::Error),

    /// The document service returned a non-2xx response.
    #[error("unexpected response from document store: {0}")]
    UnexpectedResponse(String),
}
