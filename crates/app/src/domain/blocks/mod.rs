//! Blocks

pub mod data;
pub mod records;

pub use data::NewBlock;
pub use records::{Block, BlockId};
