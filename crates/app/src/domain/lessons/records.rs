//! Lesson Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{formations::Formation, seo::SeoMetadata, tutorials::Tutorial},
    ids::TypedId,
    store::{Entity, Reference},
};

use super::data::NewLesson;

/// Lesson Id
pub type LessonId = TypedId<Lesson>;

/// Lesson Record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: LessonId,
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

impl Entity for Lesson {
    type Draft = NewLesson;

    const COLLECTION: &'static str = "lessons";
    const STORAGE_KEY: &'static str = "lessons";

    fn id(&self) -> &TypedId<Self> {
        &self.id
    }

    fn set_id(&mut self, id: TypedId<Self>) {
        self.id = id;
    }

    fn from_draft(id: TypedId<Self>, draft: NewLesson, _created_at: Timestamp) -> Self {
        Self {
            id,
            title: draft.title,
            slug: draft.slug,
            content: draft.content,
            resume: draft.resume,
            seo: draft.seo,
            level: draft.level,
            duration: draft.duration,
            status: draft.status,
            select_formations: draft.select_formations,
            select_tutorials: draft.select_tutorials,
        }
    }

    fn label(&self) -> &str {
        &self.title
    }
}
