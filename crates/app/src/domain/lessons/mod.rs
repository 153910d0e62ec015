//! Lessons

pub mod data;
pub mod records;

pub use data::NewLesson;
pub use records::{Lesson, LessonId};
