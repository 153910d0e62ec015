//! Block Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    domain::lessons::Lesson,
    ids::TypedId,
    store::{Entity, Reference},
};

use super::data::NewBlock;

/// Block Id
pub type BlockId = TypedId<Block>;

/// Block Record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
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

impl Entity for Block {
    type Draft = NewBlock;

    const COLLECTION: &'static str = "blocks";
    const STORAGE_KEY: &'static str = "blocks";

    fn id(&self) -> &TypedId<Self> {
        &self.id
    }

    fn set_id(&mut self, id: TypedId<Self>) {
        self.id = id;
    }

    fn from_draft(id: TypedId<Self>, draft: NewBlock, _created_at: Timestamp) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            duration: draft.duration,
            status: draft.status,
            select_lessons: draft.select_lessons,
        }
    }

    fn label(&self) -> &str {
        &self.title
    }
}
