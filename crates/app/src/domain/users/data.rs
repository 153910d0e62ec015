//! Users Data

use std::fmt::{self, Debug, Formatter};

use async_trait::async_trait;
use serde::Deserialize;

use crate::{
    domain::ReferenceSources,
    store::{ResolveReferences, ServiceError},
    validation::{Checks, Validate, ValidationErrors},
};

use super::records::Role;

/// New User Data
#[derive(Clone, PartialEq, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,

    #[serde(default, rename = "tel")]
    pub phone: String,

    #[serde(default)]
    pub status: bool,

    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub role: Role,
}

impl Debug for NewUser {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("surname", &self.surname)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

impl Validate for NewUser {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checks::new()
            .min_len("name", &self.name, 3)
            .min_len("surname", &self.surname, 3)
            .email("email", &self.email)
            .password("password", &self.password)
            .phone("tel", &self.phone)
            .finish()
    }
}

#[async_trait]
impl ResolveReferences for NewUser {
    async fn resolve(self, _sources: &ReferenceSources) -> Result<Self, ServiceError> {
        Ok(self)
    }
}
