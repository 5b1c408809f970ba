use clap::Parser;
use name_sorter::utils::logger;
use name_sorter::{app, CliArgs, NameSorterError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // guard 需存活到結束，才能把日誌檔緩衝寫完
    let log_guard = if args.json_logs {
        logger::init_json_logger(args.log_dir())
    } else {
        logger::init_cli_logger(args.verbose, args.log_dir())
    };

    tracing::info!("Application starting...");
    tracing::debug!("CLI args: {:?}", args);

    let exit_code = match app::run(&args).await {
        Ok(summary) => {
            tracing::info!(
                "✅ Sorted {} names from {} ({} skipped)",
                summary.accepted,
                args.input,
                summary.rejected
            );
            0
        }
        Err(e) => report_failure(&e),
    };

    tracing::info!("Application shutting down...");
    if exit_code > 0 {
        // process::exit 不會執行 drop，先手動釋放 guard
        drop(log_guard);
        std::process::exit(exit_code);
    }
    Ok(())
}

fn report_failure(e: &NameSorterError) -> i32 {
    tracing::error!(
        category = ?e.category(),
        severity = ?e.severity(),
        "❌ Name sorting failed: {}",
        e
    );

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    e.severity().exit_code()
}
