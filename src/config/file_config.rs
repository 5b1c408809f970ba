use crate::config::AppSettings;
use crate::utils::error::{NameSorterError, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::sync::LazyLock;

#[derive(Debug, Deserialize)]
struct SettingsFile {
    #[serde(default, alias = "AppSettings")]
    app_settings: AppSettings,
}

/// 從設定檔載入；`.json` 以 JSON 解析，其餘一律視為 TOML
pub fn load<P: AsRef<Path>>(path: P) -> Result<AppSettings> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| NameSorterError::ConfigLoad {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let parsed = if is_json {
        from_json_str(&content)
    } else {
        from_toml_str(&content)
    };

    parsed.map_err(|e| match e {
        NameSorterError::ConfigLoad { message, .. } => NameSorterError::ConfigLoad {
            path: path.display().to_string(),
            message,
        },
        other => other,
    })
}

pub fn from_toml_str(content: &str) -> Result<AppSettings> {
    let processed = substitute_env_vars(content);
    let file: SettingsFile = toml::from_str(&processed).map_err(|e| NameSorterError::ConfigLoad {
        path: "<toml>".to_string(),
        message: format!("TOML parsing error: {}", e),
    })?;
    Ok(file.app_settings)
}

pub fn from_json_str(content: &str) -> Result<AppSettings> {
    let processed = substitute_env_vars(content);
    let file: SettingsFile =
        serde_json::from_str(&processed).map_err(|e| NameSorterError::ConfigLoad {
            path: "<json>".to_string(),
            message: format!("JSON parsing error: {}", e),
        })?;
    Ok(file.app_settings)
}

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// 替換環境變數 (例如 ${OUTPUT_DIR})，找不到的變數保持原樣
fn substitute_env_vars(content: &str) -> String {
    ENV_VAR
        .replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
}
