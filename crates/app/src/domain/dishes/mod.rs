//! Dishes

pub mod data;
pub mod records;

pub use data::NewDish;
pub use records::{Dish, DishId};
