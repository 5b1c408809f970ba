use crate::core::Pipeline;
use crate::domain::model::ProcessSummary;
use crate::utils::error::Result;
use std::time::Instant;

pub struct NameSortEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> NameSortEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// 依序執行三個階段，每一步都等待完成後才進行下一步，不重試
    pub async fn run(&self) -> Result<ProcessSummary> {
        let started = Instant::now();
        tracing::info!("🚀 Starting name processing");

        // Extract
        let raw_lines = self.pipeline.extract().await?;
        let total_lines = raw_lines.len();

        // Transform
        let sorted = self.pipeline.transform(raw_lines).await?;
        let accepted = sorted.len();

        // Load
        self.pipeline.load(sorted).await?;

        let summary = ProcessSummary {
            total_lines,
            accepted,
            rejected: total_lines - accepted,
        };
        tracing::info!(
            "✅ Name processing completed: {} lines, {} written, {} skipped ({:?})",
            summary.total_lines,
            summary.accepted,
            summary.rejected,
            started.elapsed()
        );
        Ok(summary)
    }
}
