use crate::domain::model::Person;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 提供原始文字行的來源 (例如檔案)
pub trait NameSource: Send + Sync {
    /// 資源不存在時回傳 `SourceUnavailable`
    fn read_lines(&self) -> impl std::future::Future<Output = Result<Vec<String>>> + Send;

    fn describe(&self) -> &str;
}

pub trait ConfigProvider: Send + Sync {
    fn use_console_output(&self) -> bool;
    fn use_file_output(&self) -> bool;
    fn output_path(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<String>>;
    async fn transform(&self, lines: Vec<String>) -> Result<Vec<Person>>;
    async fn load(&self, people: Vec<Person>) -> Result<()>;
}
