use crate::domain::model::Person;
use crate::utils::error::{NameSorterError, Result};
use std::io::Write;
use std::sync::Mutex;

pub const EMPTY_PLACEHOLDER: &str = "No names to display.";

/// 將結果逐行寫到 stdout (測試時可注入其他 writer)
pub struct ConsoleSink {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self::with_writer(std::io::stdout())
    }

    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(writer)),
        }
    }

    pub fn write(&self, people: &[Person]) -> Result<()> {
        tracing::info!("Starting to write output to the console");

        let mut out = self.out.lock().map_err(|_| {
            console_failure(std::io::Error::other("console writer lock poisoned"))
        })?;

        if people.is_empty() {
            tracing::warn!("{}", EMPTY_PLACEHOLDER);
            writeln!(out, "{}", EMPTY_PLACEHOLDER).map_err(console_failure)?;
            return out.flush().map_err(console_failure);
        }

        for person in people {
            writeln!(out, "{}", person).map_err(console_failure)?;
        }
        out.flush().map_err(console_failure)?;

        tracing::info!("Successfully wrote {} names to the console", people.len());
        Ok(())
    }
}

impl std::fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleSink").finish_non_exhaustive()
    }
}

fn console_failure(e: std::io::Error) -> NameSorterError {
    tracing::error!("An error occurred while writing output to the console: {}", e);
    NameSorterError::sink_failure("console", e)
}
