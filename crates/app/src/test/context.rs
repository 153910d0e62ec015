//! Test context for service-level tests.

use std::sync::Arc;

use crate::{
    context::AppContext,
    persistence::{KvDocumentStore, MemoryKeyValueStore},
    store::ReferencePolicy,
};

/// An [`AppContext`] over in-memory storage that outlives it.
pub(crate) struct TestContext {
    pub kv: Arc<MemoryKeyValueStore>,
    pub app: AppContext,
    policy: ReferencePolicy,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_policy(ReferencePolicy::Lenient)
    }

    pub fn with_policy(policy: ReferencePolicy) -> Self {
        let kv = Arc::new(MemoryKeyValueStore::new());

        Self {
            app: Self::build(&kv, policy),
            kv,
            policy,
        }
    }

    /// A fresh, unloaded context over the same storage.
    pub fn restart(&self) -> AppContext {
        Self::build(&self.kv, self.policy)
    }

    fn build(kv: &Arc<MemoryKeyValueStore>, policy: ReferencePolicy) -> AppContext {
        AppContext::with_stores(
            kv.clone(),
            Arc::new(KvDocumentStore::new(kv.clone())),
            policy,
        )
    }
}
