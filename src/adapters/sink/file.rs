use crate::domain::model::Person;
use crate::utils::error::{NameSorterError, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// 將結果寫入單一檔案，已存在時整個覆寫
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn write(&self, people: &[Person]) -> Result<()> {
        tracing::info!("Starting to write output to file: {}", self.path.display());

        // 空集合時完全不碰檔案系統
        if people.is_empty() {
            tracing::warn!("No names to write, leaving {} untouched", self.path.display());
            return Ok(());
        }

        self.write_lines(people).await.map_err(|e| {
            tracing::error!(
                "An error occurred while writing to file {}: {}",
                self.path.display(),
                e
            );
            NameSorterError::sink_failure("file", e)
        })?;

        tracing::info!("Successfully wrote output to file: {}", self.path.display());
        Ok(())
    }

    async fn write_lines(&self, people: &[Person]) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !fs::try_exists(parent).await? {
                tracing::info!("Creating output directory: {}", parent.display());
                fs::create_dir_all(parent).await?;
            }
        }

        if fs::try_exists(&self.path).await? {
            tracing::warn!("File '{}' already exists. Overwriting...", self.path.display());
        }

        let mut content = String::new();
        for person in people {
            content.push_str(&person.to_string());
            content.push_str(LINE_ENDING);
        }

        fs::write(&self.path, content).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::parse;
    use tempfile::TempDir;

    fn sample() -> Vec<Person> {
        vec![parse("John Doe").unwrap(), parse("Jane Smith").unwrap()]
    }

    #[tokio::test]
    async fn test_writes_names_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("names.txt");
        let sink = FileSink::new(&path);

        sink.write(&sample()).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, format!("John Doe{0}Jane Smith{0}", LINE_ENDING));
    }

    #[tokio::test]
    async fn test_creates_missing_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("deeper").join("names.txt");
        let sink = FileSink::new(&path);

        sink.write(&sample()).await.unwrap();

        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("names.txt");
        std::fs::write(&path, "stale line one\nstale line two\nstale line three\n").unwrap();

        FileSink::new(&path).write(&sample()).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale"));
        assert_eq!(content.lines().collect::<Vec<_>>(), ["John Doe", "Jane Smith"]);
    }

    #[tokio::test]
    async fn test_empty_input_does_not_create_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("names.txt");

        FileSink::new(&path).write(&[]).await.unwrap();

        assert!(!path.exists());
        assert!(!temp_dir.path().join("missing").exists());
    }

    #[tokio::test]
    async fn test_empty_input_leaves_existing_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("names.txt");
        std::fs::write(&path, "Keep Me\n").unwrap();

        FileSink::new(&path).write(&[]).await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Keep Me\n");
    }

    #[tokio::test]
    async fn test_parent_is_a_file_reports_sink_failure() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let sink = FileSink::new(blocker.join("names.txt"));

        match sink.write(&sample()).await {
            Err(NameSorterError::SinkFailure { sink, .. }) => assert_eq!(sink, "file"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
