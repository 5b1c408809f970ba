//! Output sinks: console and file.

mod console;
mod file;

pub use self::console::{ConsoleSink, EMPTY_PLACEHOLDER};
pub use self::file::{FileSink, LINE_ENDING};

#[cfg(test)]
pub(crate) use self::console::test_support;

use crate::domain::model::Person;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{NameSorterError, Result};

/// 單一輸出目的地
#[derive(Debug)]
pub enum Sink {
    Console(ConsoleSink),
    File(FileSink),
}

impl Sink {
    pub fn name(&self) -> &'static str {
        match self {
            Sink::Console(_) => "console",
            Sink::File(_) => "file",
        }
    }

    pub async fn write(&self, people: &[Person]) -> Result<()> {
        match self {
            Sink::Console(sink) => sink.write(people),
            Sink::File(sink) => sink.write(people).await,
        }
    }
}

impl From<ConsoleSink> for Sink {
    fn from(sink: ConsoleSink) -> Self {
        Sink::Console(sink)
    }
}

impl From<FileSink> for Sink {
    fn from(sink: FileSink) -> Self {
        Sink::File(sink)
    }
}

/// 依設定建立啟用的 sink，順序固定為 file 在前、console 在後
pub fn build_sinks<C: ConfigProvider>(config: &C) -> Result<Vec<Sink>> {
    let mut sinks = Vec::new();

    if config.use_file_output() {
        sinks.push(Sink::File(FileSink::new(config.output_path())));
    }

    if config.use_console_output() {
        sinks.push(Sink::Console(ConsoleSink::stdout()));
    }

    if sinks.is_empty() {
        tracing::error!("No output method is configured");
        return Err(NameSorterError::NoSinksConfigured);
    }

    tracing::debug!(
        "Configured sinks: {}",
        sinks.iter().map(Sink::name).collect::<Vec<_>>().join(", ")
    );
    Ok(sinks)
}
