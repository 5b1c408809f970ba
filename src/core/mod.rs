pub mod engine;
pub mod parser;
pub mod pipeline;
pub mod sorter;
pub mod writer;

pub use crate::domain::model::{Person, ProcessSummary};
pub use crate::domain::ports::{ConfigProvider, NameSource, Pipeline};
pub use crate::utils::error::Result;
