//! Lessons Data

use async_trait::async_trait;
use serde::Deserialize;

use crate::{
    domain::{ReferenceSources, formations::Formation, seo::SeoMetadata, tutorials::Tutorial},
    store::{Reference, ResolveReferences, ServiceError, resolve_references},
    validation::{Checks, Validate, ValidationErrors},
};

/// New Lesson Data
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewLesson {
    pub title: String,
    pub slug: String,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub resume: String,

    #[serde(flatten)]
    pub seo: SeoMetadata,

    #[serde(default)]
    pub level: String,

    #[serde(default)]
    pub duration: String,

    #[serde(default)]
    pub status: bool,

    #[serde(default)]
    pub select_formations: Vec<Reference<Formation>>,

    #[serde(default)]
    pub select_tutorials: Vec<Reference<Tutorial>>,
}

impl Validate for NewLesson {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut checks = Checks::new();

        checks
            .min_len("title", &self.title, 3)
            .slug("slug", &self.slug)
            .min_len("content", &self.content, 5)
            .min_len("resume", &self.resume, 5)
            .min_len("level", &self.level, 1)
            .min_len("duration", &self.duration, 2);

        self.seo.check(&mut checks);

        checks.finish()
    }
}

#[async_trait]
impl ResolveReferences for NewLesson {
    async fn resolve(mut self, sources: &ReferenceSources) -> Result<Self, ServiceError> {
        self.select_formations = resolve_references(
            self.select_formations,
            sources.formations.as_ref(),
            sources.policy,
        )
        .await?;

        self.select_tutorials = resolve_references(
            self.select_tutorials,
            sources.tutorials.as_ref(),
            sources.policy,
        )
        .await?;

        Ok(self)
    }
}
