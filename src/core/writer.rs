use crate::adapters::sink::Sink;
use crate::domain::model::Person;
use crate::utils::error::{NameSorterError, Result};

/// 把同一份排序結果依序交給多個 sink
///
/// 任一 sink 失敗即中止：後面的 sink 不會被呼叫，前面已寫出的輸出也不會回復。
#[derive(Debug)]
pub struct FanOutWriter {
    sinks: Vec<Sink>,
}

impl FanOutWriter {
    pub fn new(sinks: Vec<Sink>) -> Self {
        Self { sinks }
    }

    pub fn sinks(&self) -> &[Sink] {
        &self.sinks
    }

    pub async fn write(&self, people: &[Person]) -> Result<()> {
        tracing::info!("Starting to write output using {} output writers", self.sinks.len());

        // 空集合檢查在 sink 檢查之前，任何 sink 都不會收到空集合
        if people.is_empty() {
            tracing::warn!("No people to write");
            return Err(NameSorterError::EmptyRecordSet);
        }

        if self.sinks.is_empty() {
            tracing::error!("No output writers configured");
            return Err(NameSorterError::NoSinksConfigured);
        }

        for sink in &self.sinks {
            tracing::info!("Writing output using the {} sink", sink.name());
            if let Err(e) = sink.write(people).await {
                tracing::error!("❌ {} sink failed, aborting remaining sinks: {}", sink.name(), e);
                return Err(e);
            }
        }

        tracing::info!("Completed writing output using all configured writers");
        Ok(())
    }
}
