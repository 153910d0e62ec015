//! Storage Config

use std::path::PathBuf;

use clap::Args;

use crate::{persistence::RestDocumentStoreConfig, store::ReferencePolicy};

/// Storage settings.
#[derive(Debug, Clone, Args)]
pub struct StoreConfig {
    /// Directory holding collection snapshots and local documents
    #[arg(long, env = "BACKOFFICE_DATA_DIR", default_value = "./data", global = true)]
    pub data_dir: PathBuf,

    /// Base URL of the remote document store for dishes, users and orders
    #[arg(long, env = "DOCUMENT_STORE_URL", global = true)]
    pub document_store_url: Option<String>,

    /// Bearer token for the remote document store
    #[arg(long, env = "DOCUMENT_STORE_TOKEN", hide_env_values = true, hide = true, global = true)]
    pub document_store_token: Option<String>,

    /// Reject records referencing missing entries instead of storing an empty label
    #[arg(long, env = "STRICT_REFERENCES", default_value_t = false, global = true)]
    pub strict_references: bool,
}

impl StoreConfig {
    #[must_use]
    pub fn reference_policy(&self) -> ReferencePolicy {
        if self.strict_references {
            ReferencePolicy::Strict
        } else {
            ReferencePolicy::Lenient
        }
    }

    /// Remote document store settings, when a URL is configured.
    #[must_use]
    pub fn remote_documents(&self) -> Option<RestDocumentStoreConfig> {
        self.document_store_url
            .as_ref()
            .filter(|url| !url.trim().is_empty())
            .map(|url| RestDocumentStoreConfig {
                base_url: url.clone(),
                token: self.document_store_token.clone(),
            })
    }
}
