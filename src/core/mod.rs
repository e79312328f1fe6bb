pub mod engine;
pub mod filter;
pub mod group;
pub mod sink;
pub mod sort;
pub mod upper;

pub use crate::domain::model::{Grouping, Sequence};
pub use crate::domain::ports::{Pipeline, Sink};
pub use crate::utils::error::Result;
