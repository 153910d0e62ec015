//! Blocks Data

use async_trait::async_trait;
use serde::Deserialize;

use crate::{
    domain::{ReferenceSources, lessons::Lesson},
    store::{Reference, ResolveReferences, ServiceError, resolve_references},
    validation::{Checks, Validate, ValidationErrors},
};

/// New Block Data
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewBlock {
    pub title: String,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub duration: String,

    #[serde(default)]
    pub status: bool,

    #[serde(default)]
    pub select_lessons: Vec<Reference<Lesson>>,
}

impl Validate for NewBlock {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checks::new()
            .min_len("title", &self.title, 3)
            .min_len("content", &self.content, 5)
            .min_len("duration", &self.duration, 2)
            .finish()
    }
}

#[async_trait]
impl ResolveReferences for NewBlock {
    async fn resolve(mut self, sources: &ReferenceSources) -> Result<Self, ServiceError> {
        self.select_lessons =
            resolve_references(self.select_lessons, sources.lessons.as_ref(), sources.policy)
                .await?;

        Ok(self)
    }
}
