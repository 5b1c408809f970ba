use crate::core::{parser, sorter, writer::FanOutWriter};
use crate::domain::model::Person;
use crate::domain::ports::{NameSource, Pipeline};
use crate::utils::error::Result;

/// 讀取 → 解析/排序 → 多目的地輸出
pub struct NamePipeline<S: NameSource> {
    source: S,
    writer: FanOutWriter,
}

impl<S: NameSource> NamePipeline<S> {
    pub fn new(source: S, writer: FanOutWriter) -> Self {
        Self { source, writer }
    }
}

#[async_trait::async_trait]
impl<S: NameSource> Pipeline for NamePipeline<S> {
    async fn extract(&self) -> Result<Vec<String>> {
        let lines = self.source.read_lines().await?;
        tracing::info!(
            "Retrieved {} raw names from {}",
            lines.len(),
            self.source.describe()
        );
        Ok(lines)
    }

    async fn transform(&self, lines: Vec<String>) -> Result<Vec<Person>> {
        let mut people = Vec::with_capacity(lines.len());

        for raw in &lines {
            match parser::parse(raw) {
                Ok(person) => people.push(person),
                // 單筆錯誤只記錄警告，不中止
                Err(e) => tracing::warn!("Could not parse: '{}'. Error: {}", raw, e),
            }
        }

        tracing::info!("Sorting {} valid names", people.len());
        Ok(sorter::sort(people))
    }

    async fn load(&self, people: Vec<Person>) -> Result<()> {
        tracing::info!("Writing sorted names to the output");
        self.writer.write(&people).await
    }
}
