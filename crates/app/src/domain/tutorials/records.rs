//! Tutorial Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{seo::SeoMetadata, technologies::Technology},
    ids::TypedId,
    store::{Entity, Reference},
};

use super::data::NewTutorial;

/// Tutorial Id
pub type TutorialId = TypedId<Tutorial>;

/// Tutorial Record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tutorial {
    pub id: TutorialId,
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

impl Entity for Tutorial {
    type Draft = NewTutorial;

    const COLLECTION: &'static str = "tutorials";
    const STORAGE_KEY: &'static str = "tutorials";
    const HAS_IMAGE: bool = true;

    fn id(&self) -> &TypedId<Self> {
        &self.id
    }

    fn set_id(&mut self, id: TypedId<Self>) {
        self.id = id;
    }

    fn from_draft(id: TypedId<Self>, draft: NewTutorial, _created_at: Timestamp) -> Self {
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
            video_url: draft.video_url,
            technologies: draft.technologies,
        }
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn image_mut(&mut self) -> Option<&mut String> {
        Some(&mut self.image)
    }
}
