//! User Records

use std::fmt::{self, Debug, Formatter};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{ids::TypedId, store::Entity};

use super::data::NewUser;

/// User Id
pub type UserId = TypedId<User>;

/// Back-office role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,

    #[default]
    Customer,
}

/// User Record
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub surname: String,
    pub email: String,

    /// Stored as submitted.
    #[serde(default)]
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

impl Debug for User {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("surname", &self.surname)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .field("phone", &self.phone)
            .field("status", &self.status)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

impl Entity for User {
    type Draft = NewUser;

    const COLLECTION: &'static str = "users";
    const STORAGE_KEY: &'static str = "users-storage";
    const HAS_IMAGE: bool = true;

    fn id(&self) -> &TypedId<Self> {
        &self.id
    }

    fn set_id(&mut self, id: TypedId<Self>) {
        self.id = id;
    }

    fn from_draft(id: TypedId<Self>, draft: NewUser, _created_at: Timestamp) -> Self {
        Self {
            id,
            name: draft.name,
            surname: draft.surname,
            email: draft.email,
            password: draft.password,
            phone: draft.phone,
            status: draft.status,
            image: draft.image,
            role: draft.role,
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
    fn debug_output_hides_password() -> TestResult {
        let user: User = serde_json::from_str(
            r#"{"id":"u1","name":"Awa","surname":"Nguema","email":"awa@example.cm","password":"Secr3t!pass","tel":"677123456"}"#,
        )?;

        let debug = format!("{user:?}");

        assert!(!debug.contains("Secr3t!pass"), "password leaked: {debug}");
        assert_eq!(user.phone, "677123456");
        assert_eq!(user.role, Role::Customer);

        Ok(())
    }
}
