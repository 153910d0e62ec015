//! SEO Metadata

use serde::{Deserialize, Serialize};

use crate::validation::Checks;

const META_MIN: usize = 5;

/// Keyword Tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    #[serde(default)]
    pub id: u64,
    pub name: String,
}

/// SEO fields shared by tutorials, formations and lessons, stored flat on the
/// record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoMetadata {
    #[serde(default)]
    pub meta_title: String,

    #[serde(default)]
    pub meta_description: String,

    #[serde(default)]
    pub meta_keywords: Vec<Keyword>,
}

impl SeoMetadata {
    pub(crate) fn check(&self, checks: &mut Checks) {
        checks
            .min_len("meta_title", &self.meta_title, META_MIN)
            .min_len("meta_description", &self.meta_description, META_MIN);
    }
}
