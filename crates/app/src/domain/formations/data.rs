//! Formations Data

use async_trait::async_trait;
use serde::Deserialize;

use crate::{
    domain::{ReferenceSources, seo::SeoMetadata, technologies::Technology},
    store::{Reference, ResolveReferences, ServiceError, resolve_reference, resolve_references},
    validation::{Checks, Validate, ValidationErrors},
};

/// New Formation Data
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewFormation {
    #[serde(alias = "name")]
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
    pub technologies: Vec<Reference<Technology>>,

    #[serde(default)]
    pub default_technology: Option<Reference<Technology>>,
}

impl Validate for NewFormation {
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
impl ResolveReferences for NewFormation {
    async fn resolve(mut self, sources: &ReferenceSources) -> Result<Self, ServiceError> {
        let technologies = sources.technologies.as_ref();

        self.technologies =
            resolve_references(self.technologies, technologies, sources.policy).await?;

        if let Some(default) = self.default_technology.take() {
            self.default_technology =
                Some(resolve_reference(default.id, technologies, sources.policy).await?);
        }

        Ok(self)
    }
}
