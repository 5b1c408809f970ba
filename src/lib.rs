pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::sink::{build_sinks, ConsoleSink, FileSink, Sink};
pub use adapters::source::FileNameSource;
pub use config::{AppSettings, CliArgs};
pub use crate::core::{
    engine::NameSortEngine, parser::parse, pipeline::NamePipeline, sorter::sort,
    writer::FanOutWriter,
};
pub use domain::model::{Person, ProcessSummary};
pub use utils::error::{NameSorterError, Result};
