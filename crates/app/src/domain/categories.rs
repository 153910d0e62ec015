//! Categories

use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    domain::ReferenceSources,
    ids::TypedId,
    store::{Entity, ResolveReferences, ServiceError},
    validation::{Checks, Validate, ValidationErrors},
};

/// Category Id
pub type CategoryId = TypedId<Category>;

/// Dish Category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
}

/// New Category Data
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewCategory {
    pub title: String,
}

impl Entity for Category {
    type Draft = NewCategory;

    const COLLECTION: &'static str = "categs";
    const STORAGE_KEY: &'static str = "categs-storage";

    fn id(&self) -> &TypedId<Self> {
        &self.id
    }

    fn set_id(&mut self, id: TypedId<Self>) {
        self.id = id;
    }

    fn from_draft(id: TypedId<Self>, draft: NewCategory, _created_at: Timestamp) -> Self {
        Self {
            id,
            title: draft.title,
        }
    }

    fn label(&self) -> &str {
        &self.title
    }
}

impl Validate for NewCategory {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checks::new().min_len("title", &self.title, 3).finish()
    }
}

#[async_trait]
impl ResolveReferences for NewCategory {
    async fn resolve(self, _sources: &ReferenceSources) -> Result<Self, ServiceError> {
        Ok(self)
    }
}
