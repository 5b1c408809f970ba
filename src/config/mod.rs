pub mod file_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::Parser;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_OUTPUT_PATH: &str = "sorted-names-list.txt";
pub const DEFAULT_LOG_DIR: &str = "logs";

#[derive(Debug, Clone, Parser)]
#[command(name = "name-sorter")]
#[command(about = "Sorts a list of names by surname, then by given names")]
pub struct CliArgs {
    /// Input file with one name per line
    pub input: String,

    /// Path to a TOML (or .json) configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override use_console_output
    #[arg(long)]
    pub console: Option<bool>,

    /// Override use_file_output
    #[arg(long)]
    pub file: Option<bool>,

    /// Override output_path
    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    /// Directory for the daily rolling log file
    #[arg(long, default_value = DEFAULT_LOG_DIR)]
    pub log_dir: String,

    #[arg(long, help = "Do not write a log file")]
    pub no_log_file: bool,
}

impl CliArgs {
    pub fn log_dir(&self) -> Option<&Path> {
        (!self.no_log_file).then(|| Path::new(self.log_dir.as_str()))
    }
}

/// 輸出設定：啟用哪些 sink 以及檔案輸出位置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    #[serde(alias = "UseConsoleOutput")]
    pub use_console_output: bool,

    #[serde(alias = "UseFileOutput")]
    pub use_file_output: bool,

    #[serde(alias = "OutputFilename", alias = "output_filename")]
    pub output_path: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            use_console_output: true,
            use_file_output: false,
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
        }
    }
}

impl AppSettings {
    /// 設定檔 (若有) 為底，再套用命令列覆蓋值
    pub fn resolve(args: &CliArgs) -> Result<Self> {
        let mut settings = match &args.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                file_config::load(path)?
            }
            None => Self::default(),
        };

        if let Some(console) = args.console {
            settings.use_console_output = console;
            tracing::info!("🔧 use_console_output overridden to: {}", console);
        }
        if let Some(file) = args.file {
            settings.use_file_output = file;
            tracing::info!("🔧 use_file_output overridden to: {}", file);
        }
        if let Some(output) = &args.output {
            settings.output_path = output.clone();
            tracing::info!("🔧 output_path overridden to: {}", output);
        }

        Ok(settings)
    }
}

impl ConfigProvider for AppSettings {
    fn use_console_output(&self) -> bool {
        self.use_console_output
    }

    fn use_file_output(&self) -> bool {
        self.use_file_output
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for AppSettings {
    fn validate(&self) -> Result<()> {
        // 只有啟用檔案輸出時才要求路徑
        if self.use_file_output {
            validate_non_empty_string("output_path", &self.output_path)?;
            validate_path("output_path", &self.output_path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::NameSorterError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn args(extra: &[&str]) -> CliArgs {
        let mut argv = vec!["name-sorter", "names.txt"];
        argv.extend_from_slice(extra);
        CliArgs::parse_from(argv)
    }

    #[test]
    fn test_defaults_without_config_file() {
        let settings = AppSettings::resolve(&args(&[])).unwrap();
        assert_eq!(settings, AppSettings::default());
        assert!(settings.use_console_output);
        assert!(!settings.use_file_output);
    }

    #[test]
    fn test_cli_overrides() {
        let settings = AppSettings::resolve(&args(&[
            "--console",
            "false",
            "--file",
            "true",
            "--output",
            "out/sorted.txt",
        ]))
        .unwrap();

        assert!(!settings.use_console_output);
        assert!(settings.use_file_output);
        assert_eq!(settings.output_path, "out/sorted.txt");
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let mut temp_file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(
            temp_file,
            "[app_settings]\nuse_console_output = false\nuse_file_output = true\noutput_path = \"from-file.txt\""
        )
        .unwrap();
        let path = temp_file.path().to_str().unwrap();

        let settings = AppSettings::resolve(&args(&["--config", path, "--output", "cli.txt"])).unwrap();

        assert!(!settings.use_console_output);
        assert!(settings.use_file_output);
        assert_eq!(settings.output_path, "cli.txt");
    }

    #[test]
    fn test_log_dir_defaults_and_opt_out() {
        assert_eq!(args(&[]).log_dir(), Some(Path::new("logs")));
        assert_eq!(
            args(&["--log-dir", "/var/log/name-sorter"]).log_dir(),
            Some(Path::new("/var/log/name-sorter"))
        );
        assert_eq!(args(&["--no-log-file"]).log_dir(), None);
    }

    #[test]
    fn test_file_output_requires_path() {
        let settings = AppSettings {
            use_console_output: false,
            use_file_output: true,
            output_path: "  ".to_string(),
        };
        assert!(matches!(
            settings.validate(),
            Err(NameSorterError::ConfigInvalid { .. })
        ));
    }

    #[test]
    fn test_blank_path_allowed_without_file_output() {
        let settings = AppSettings {
            use_console_output: true,
            use_file_output: false,
            output_path: String::new(),
        };
        assert!(settings.validate().is_ok());
    }
}
