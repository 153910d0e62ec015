//! Tutorials Data

use async_trait::async_trait;
use serde::Deserialize;

use crate::{
    domain::{ReferenceSources, seo::SeoMetadata, technologies::Technology},
    store::{Reference, ResolveReferences, ServiceError, resolve_references},
    validation::{Checks, Validate, ValidationErrors},
};

/// New Tutorial Data
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewTutorial {
    pub title: String,
    pub slug: String,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub resume: String,

    #[serde(flatten)]
    pub seo: SeoMetadata,

    #[serde(default)]
    pub status: bool,

    #[serde(default)]
    pub publish: bool,

    #[serde(default)]
    pub level: String,

    #[serde(default)]
    pub duration: String,

    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub video_url: String,

    #[serde(default)]
    pub technologies: Vec<Reference<Technology>>,
}

impl Validate for NewTutorial {
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
impl ResolveReferences for NewTutorial {
    async fn resolve(mut self, sources: &ReferenceSources) -> Result<Self, ServiceError> {
        self.technologies = resolve_references(
            self.technologies,
            sources.technologies.as_ref(),
            sources.policy,
        )
        .await?;

        Ok(self)
    }
}
