use std::fmt;
use thiserror::Error;

/// 單筆記錄無法解析的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordDefect {
    Blank,
    TokenCount(usize),
}

impl fmt::Display for RecordDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordDefect::Blank => write!(f, "record is empty or whitespace-only"),
            RecordDefect::TokenCount(n) => write!(
                f,
                "expected 2 to 4 name parts (1-3 given names and a surname), found {}",
                n
            ),
        }
    }
}

#[derive(Error, Debug)]
pub enum NameSorterError {
    #[error("Invalid record '{input}': {defect}")]
    InvalidRecord { input: String, defect: RecordDefect },

    #[error("Input source unavailable: {path}: {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration value for '{field}': '{value}' ({reason})")]
    ConfigInvalid {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to load configuration from {path}: {message}")]
    ConfigLoad { path: String, message: String },

    #[error("No output sinks configured")]
    NoSinksConfigured,

    #[error("No people to write")]
    EmptyRecordSet,

    #[error("{sink} sink failed: {source}")]
    SinkFailure {
        sink: &'static str,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, NameSorterError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Record,
    Source,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 程序結束碼：Low 視為成功，其餘依嚴重程度區分
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl NameSorterError {
    pub fn invalid_record(input: impl Into<String>, defect: RecordDefect) -> Self {
        Self::InvalidRecord {
            input: input.into(),
            defect,
        }
    }

    pub fn sink_failure(sink: &'static str, source: std::io::Error) -> Self {
        Self::SinkFailure { sink, source }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidRecord { .. } => ErrorCategory::Record,
            Self::SourceUnavailable { .. } => ErrorCategory::Source,
            Self::ConfigInvalid { .. } | Self::ConfigLoad { .. } | Self::NoSinksConfigured => {
                ErrorCategory::Configuration
            }
            Self::EmptyRecordSet | Self::SinkFailure { .. } => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidRecord { .. } => ErrorSeverity::Low,
            Self::EmptyRecordSet => ErrorSeverity::Medium,
            Self::SourceUnavailable { .. }
            | Self::ConfigInvalid { .. }
            | Self::ConfigLoad { .. }
            | Self::NoSinksConfigured => ErrorSeverity::High,
            Self::SinkFailure { .. } => ErrorSeverity::Critical,
        }
    }

    /// 只有單筆記錄錯誤可以被吸收，其餘一律中止執行
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidRecord { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidRecord { input, .. } => format!("Skipped unreadable name: '{}'", input),
            Self::SourceUnavailable { path, source } => match source.kind() {
                std::io::ErrorKind::NotFound => format!("Input file not found at: {}", path),
                std::io::ErrorKind::PermissionDenied => {
                    format!("Permission denied reading input file: {}", path)
                }
                _ => format!("Could not read input file {}: {}", path, source),
            },
            Self::ConfigInvalid { field, reason, .. } => {
                format!("Configuration problem in '{}': {}", field, reason)
            }
            Self::ConfigLoad { path, .. } => format!("Could not read configuration file '{}'", path),
            Self::NoSinksConfigured => "No output method is configured.".to_string(),
            Self::EmptyRecordSet => "The input contained no valid names to write.".to_string(),
            Self::SinkFailure { sink, .. } => format!("Writing to the {} output failed.", sink),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidRecord { .. } => {
                "Each line must hold 1 to 3 given names followed by a surname"
            }
            Self::SourceUnavailable { .. } => "Check the input path and file permissions",
            Self::ConfigInvalid { .. } => "Fix the reported setting in the config file or CLI flags",
            Self::ConfigLoad { .. } => "Make sure the config file exists and is valid TOML or JSON",
            Self::NoSinksConfigured => "Enable use_console_output or use_file_output",
            Self::EmptyRecordSet => "Make sure the input file contains at least one valid name",
            Self::SinkFailure { .. } => {
                "Check that the output location is writable and has free space"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_invalid_record_is_recoverable() {
        assert!(NameSorterError::invalid_record("x", RecordDefect::TokenCount(1)).is_recoverable());
        assert!(!NameSorterError::EmptyRecordSet.is_recoverable());
        assert!(!NameSorterError::NoSinksConfigured.is_recoverable());
        assert!(!NameSorterError::sink_failure(
            "file",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied")
        )
        .is_recoverable());
    }

    #[test]
    fn test_categories_and_severities() {
        let err = NameSorterError::SourceUnavailable {
            path: "names.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.category(), ErrorCategory::Source);
        assert_eq!(err.severity(), ErrorSeverity::High);

        assert_eq!(NameSorterError::NoSinksConfigured.category(), ErrorCategory::Configuration);
        assert_eq!(NameSorterError::EmptyRecordSet.category(), ErrorCategory::Output);
        assert!(ErrorSeverity::Critical > ErrorSeverity::Low);
    }

    #[test]
    fn test_exit_codes_by_severity() {
        assert_eq!(NameSorterError::EmptyRecordSet.severity().exit_code(), 2);
        assert_eq!(NameSorterError::NoSinksConfigured.severity().exit_code(), 1);
        assert_eq!(
            NameSorterError::sink_failure("file", std::io::Error::other("disk full"))
                .severity()
                .exit_code(),
            3
        );
        assert_eq!(ErrorSeverity::Low.exit_code(), 0);
    }

    #[test]
    fn test_invalid_record_message_names_the_defect() {
        let err = NameSorterError::invalid_record("Invalid", RecordDefect::TokenCount(1));
        let message = err.to_string();
        assert!(message.contains("'Invalid'"));
        assert!(message.contains("found 1"));
    }

    #[test]
    fn test_source_message_follows_io_kind() {
        let missing = NameSorterError::SourceUnavailable {
            path: "names.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(missing.user_friendly_message(), "Input file not found at: names.txt");

        let denied = NameSorterError::SourceUnavailable {
            path: "names.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(denied.user_friendly_message().starts_with("Permission denied"));

        let broken = NameSorterError::SourceUnavailable {
            path: "names.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "bad disk"),
        };
        let message = broken.user_friendly_message();
        assert!(!message.contains("not found"));
        assert!(message.contains("bad disk"));
    }
}
