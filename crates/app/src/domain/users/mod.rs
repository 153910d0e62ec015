//! Users

pub mod data;
pub mod records;

pub use data::NewUser;
pub use records::{Role, User, UserId};
