use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE_PREFIX: &str = "name-sorter";
pub const LOG_FILE_SUFFIX: &str = "log";

/// 每日輪替的日誌檔 (例如 `logs/name-sorter.2026-10-19.log`)
///
/// 回傳的 guard 必須存活到程式結束，drop 時才會把緩衝寫完。
pub fn file_writer(log_dir: &Path) -> std::io::Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(log_dir)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .build(log_dir)
        .map_err(std::io::Error::other)?;
    Ok(tracing_appender::non_blocking(appender))
}

fn open_log_dir(log_dir: Option<&Path>) -> (Option<NonBlocking>, Option<WorkerGuard>) {
    match log_dir.map(file_writer) {
        Some(Ok((writer, guard))) => (Some(writer), Some(guard)),
        Some(Err(e)) => {
            // 日誌檔開不了不影響主流程
            eprintln!("⚠️ Could not open log directory, logging to stderr only: {}", e);
            (None, None)
        }
        None => (None, None),
    }
}

/// 日誌寫到 stderr (stdout 留給 console sink)，另外可選擇寫入每日日誌檔
pub fn init_cli_logger(verbose: bool, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("name_sorter=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("name_sorter=info"))
    };

    let (file, guard) = open_log_dir(log_dir);
    let file_layer = file.map(|writer| {
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .with(file_layer)
        .init();

    guard
}

/// 給需要機器可讀日誌的環境使用 (例如收集到集中式日誌系統)
pub fn init_json_logger(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("name_sorter=info"));

    let (file, guard) = open_log_dir(log_dir);
    let file_layer = file.map(|writer| {
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(false)
            .json()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .with(file_layer)
        .init();

    guard
}
