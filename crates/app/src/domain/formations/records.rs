//! Formation Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{seo::SeoMetadata, technologies::Technology},
    ids::TypedId,
    store::{Entity, Reference},
};

use super::data::NewFormation;

/// Formation Id
pub type FormationId = TypedId<Formation>;

/// Formation Record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formation {
    pub id: FormationId,

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

    /// Technology the formation is listed under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_technology: Option<Reference<Technology>>,
}

impl Entity for Formation {
    type Draft = NewFormation;

    const COLLECTION: &'static str = "formations";
    const STORAGE_KEY: &'static str = "formations";
    const HAS_IMAGE: bool = true;

    fn id(&self) -> &TypedId<Self> {
        &self.id
    }

    fn set_id(&mut self, id: TypedId<Self>) {
        self.id = id;
    }

    fn from_draft(id: TypedId<Self>, draft: NewFormation, _created_at: Timestamp) -> Self {
        Self {
            id,
            title: draft.title,
            slug: draft.slug,
            content: draft.content,
            resume: draft.resume,
            seo: draft.seo,
            status: draft.status,
            publish: draft.publish,
            level: draft.level,
            duration: draft.duration,
            image: draft.image,
            technologies: draft.technologies,
            default_technology: draft.default_technology,
        }
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn image_mut(&mut self) -> Option<&mut String> {
        Some(&mut self.image)
    }
}
