pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::engine::StreamEngine;
pub use crate::core::filter::EvenFilterPipeline;
pub use crate::core::group::LengthGroupPipeline;
pub use crate::core::sink::StdoutSink;
pub use crate::core::sort::SortPipeline;
pub use crate::core::upper::UpperCasePipeline;
pub use crate::utils::error::{Result, StreamError};
