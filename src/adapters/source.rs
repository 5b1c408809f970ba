use crate::domain::ports::NameSource;
use crate::utils::error::{NameSorterError, Result};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

fn decode_line(bytes: &[u8]) -> (String, bool) {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(line) => (line.to_string(), true),
        Err(_) => (String::from_utf8_lossy(bytes).into_owned(), false),
    }
}

/// 從本機檔案逐行讀取原始名字
#[derive(Debug, Clone)]
pub struct FileNameSource {
    path: PathBuf,
    label: String,
}

impl FileNameSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = path.display().to_string();
        Self { path, label }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, source: std::io::Error) -> NameSorterError {
        tracing::error!("An error occurred while reading the file {}: {}", self.label, source);
        NameSorterError::SourceUnavailable {
            path: self.label.clone(),
            source,
        }
    }
}

impl NameSource for FileNameSource {
    async fn read_lines(&self) -> Result<Vec<String>> {
        tracing::info!("Attempting to read names from file: {}", self.label);

        let file = File::open(&self.path).await.map_err(|e| self.unavailable(e))?;
        let mut reader = BufReader::new(file);

        // 非 UTF-8 的行以替代字元解碼，交給 parser 判斷，不中止整個讀取
        let mut raw = Vec::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .await
                .map_err(|e| self.unavailable(e))?;
            if read == 0 {
                break;
            }

            let (line, valid) = decode_line(&buf);
            if !valid {
                tracing::warn!(
                    "Line {} of {} is not valid UTF-8, decoded lossily",
                    raw.len() + 1,
                    self.label
                );
            }
            raw.push(line);
        }

        tracing::debug!("Read {} lines from {}", raw.len(), self.label);
        Ok(raw)
    }

    fn describe(&self) -> &str {
        &self.label
    }
}
