//! Dish Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    domain::categories::Category,
    ids::TypedId,
    store::{Entity, Reference},
};

use super::data::NewDish;

/// Dish Id
pub type DishId = TypedId<Dish>;

/// Dish Record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,
    pub name: String,

    /// Price in whole currency units.
    #[serde(default)]
    pub price: u64,

    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub created_at: Timestamp,

    #[serde(default)]
    pub select_categs: Vec<Reference<Category>>,
}

impl Entity for Dish {
    type Draft = NewDish;

    const COLLECTION: &'static str = "dishes";
    const STORAGE_KEY: &'static str = "dishes-storage";
    const HAS_IMAGE: bool = true;

    fn id(&self) -> &TypedId<Self> {
        &self.id
    }

    fn set_id(&mut self, id: TypedId<Self>) {
        self.id = id;
    }

    fn from_draft(id: TypedId<Self>, draft: NewDish, created_at: Timestamp) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
            image: draft.image,
            created_at,
            select_categs: draft.select_categs,
        }
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn image_mut(&mut self) -> Option<&mut String> {
        Some(&mut self.image)
    }
}
