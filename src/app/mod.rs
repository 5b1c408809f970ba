// Application layer: wires configuration, adapters and the core pipeline together.

use crate::adapters::sink::{build_sinks, Sink};
use crate::adapters::source::FileNameSource;
use crate::config::{AppSettings, CliArgs};
use crate::core::engine::NameSortEngine;
use crate::core::pipeline::NamePipeline;
use crate::core::writer::FanOutWriter;
use crate::domain::model::ProcessSummary;
use crate::utils::error::{NameSorterError, Result};
use crate::utils::validation::Validate;
use std::path::PathBuf;

/// 完整流程：解析設定 → 驗證 → 建立 sink → 確認輸入存在 → 執行管道
pub async fn run(args: &CliArgs) -> Result<ProcessSummary> {
    let settings = AppSettings::resolve(args)?;
    settings.validate()?;
    tracing::debug!("Resolved settings: {:?}", settings);

    let sinks = build_sinks(&settings)?;
    process_file(&args.input, sinks).await
}

/// 以指定的 sink 處理單一輸入檔
pub async fn process_file(input: impl Into<PathBuf>, sinks: Vec<Sink>) -> Result<ProcessSummary> {
    let input = input.into();

    // 輸入檔不存在時在進入管道前就失敗
    if let Err(e) = tokio::fs::metadata(&input).await {
        tracing::error!("File not found: {}", input.display());
        return Err(NameSorterError::SourceUnavailable {
            path: input.display().to_string(),
            source: e,
        });
    }

    let pipeline = NamePipeline::new(FileNameSource::new(input), FanOutWriter::new(sinks));
    NameSortEngine::new(pipeline).run().await
}
