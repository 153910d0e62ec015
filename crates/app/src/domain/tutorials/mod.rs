//! Tutorials

pub mod data;
pub mod records;

pub use data::NewTutorial;
pub use records::{Tutorial, TutorialId};
