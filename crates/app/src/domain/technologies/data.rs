//! Technologies Data

use async_trait::async_trait;
use serde::Deserialize;

use crate::{
    domain::ReferenceSources,
    store::{ResolveReferences, ServiceError},
    validation::{Checks, Validate, ValidationErrors},
};

/// New Technology Data
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewTechnology {
    pub name: String,
    pub slug: String,

    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub active: bool,
}

impl Validate for NewTechnology {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checks::new()
            .min_len("name", &self.name, 3)
            .max_len("name", &self.name, 40)
            .slug("slug", &self.slug)
            .finish()
    }
}

#[async_trait]
impl ResolveReferences for NewTechnology {
    async fn resolve(self, _sources: &ReferenceSources) -> Result<Self, ServiceError> {
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_bounded() {
        let draft = NewTechnology {
            name: "R".repeat(41),
            slug: "rust".to_string(),
            image: String::new(),
            active: true,
        };

        let result = draft.validate();

        assert!(
            matches!(&result, Err(errors) if errors.has_field("name")),
            "expected name error, got {result:?}"
        );
    }
}
