//! Back-office Domain Concerns

use std::{fmt, sync::Arc};

use crate::store::{Lookup, ReferencePolicy};

pub mod blocks;
pub mod categories;
pub mod dashboard;
pub mod dishes;
pub mod formations;
pub mod lessons;
pub mod orders;
pub mod seo;
pub mod technologies;
pub mod tutorials;
pub mod users;

/// Collections that new records may reference, and what to do when a
/// referenced record is missing.
pub struct ReferenceSources {
    pub technologies: Arc<dyn Lookup<technologies::Technology>>,
    pub tutorials: Arc<dyn Lookup<tutorials::Tutorial>>,
    pub formations: Arc<dyn Lookup<formations::Formation>>,
    pub lessons: Arc<dyn Lookup<lessons::Lesson>>,
    pub categories: Arc<dyn Lookup<categories::Category>>,
    pub policy: ReferencePolicy,
}

impl fmt::Debug for ReferenceSources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferenceSources")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
