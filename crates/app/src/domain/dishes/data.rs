//! Dishes Data

use async_trait::async_trait;
use serde::Deserialize;

use crate::{
    domain::{ReferenceSources, categories::Category},
    store::{Reference, ResolveReferences, ServiceError, resolve_references},
    validation::{Checks, Validate, ValidationErrors},
};

/// New Dish Data
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewDish {
    pub name: String,
    pub price: u64,

    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub select_categs: Vec<Reference<Category>>,
}

impl Validate for NewDish {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checks::new()
            .min_len("name", &self.name, 3)
            .min_value("price", self.price, 2)
            .finish()
    }
}

#[async_trait]
impl ResolveReferences for NewDish {
    async fn resolve(mut self, sources: &ReferenceSources) -> Result<Self, ServiceError> {
        self.select_categs = resolve_references(
            self.select_categs,
            sources.categories.as_ref(),
            sources.policy,
        )
        .await?;

        Ok(self)
    }
}
