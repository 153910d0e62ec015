//! Technologies

pub mod data;
pub mod records;

pub use data::NewTechnology;
pub use records::{Technology, TechnologyId};
