//! Technology Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{ids::TypedId, store::Entity};

use super::data::NewTechnology;

/// Technology Id
pub type TechnologyId = TypedId<Technology>;

/// Technology Record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technology {
    pub id: TechnologyId,
    pub name: String,
    pub slug: String,

    /// Image URI or inline-encoded blob.
    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub active: bool,

    #[serde(default, alias = "created_At")]
    pub created_at: Timestamp,
}

impl Entity for Technology {
    type Draft = NewTechnology;

    const COLLECTION: &'static str = "techs";
    const STORAGE_KEY: &'static str = "tech-storage";
    const HAS_IMAGE: bool = true;

    fn id(&self) -> &TypedId<Self> {
        &self.id
    }

    fn set_id(&mut self, id: TypedId<Self>) {
        self.id = id;
    }

    fn from_draft(id: TypedId<Self>, draft: NewTechnology, created_at: Timestamp) -> Self {
        Self {
            id,
            name: draft.name,
            slug: draft.slug,
            image: draft.image,
            active: draft.active,
            created_at,
        }
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn image_mut(&mut self) -> Option<&mut String> {
        Some(&mut self.image)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn reads_legacy_created_at_spelling() -> TestResult {
        let technology: Technology = serde_json::from_str(
            r#"{"id":1718000000000,"name":"Rust","slug":"rust","created_At":"2024-06-10T06:13:20Z"}"#,
        )?;

        assert_eq!(technology.id, TechnologyId::from(1_718_000_000_000));
        assert_eq!(technology.created_at, "2024-06-10T06:13:20Z".parse::<Timestamp>()?);
        assert!(!technology.active, "active should default to false");
        assert_eq!(technology.image, "");

        Ok(())
    }
}
