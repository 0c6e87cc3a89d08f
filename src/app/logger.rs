use crate::app::error::{context, RecoveryExt, RecoveryStrategy, Result};
use std::path::{Path, PathBuf};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{self, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Overrides the directory log files are written to.
pub const LOG_DIR_ENV: &str = "TUI_DASHBOARD_LOG_DIR";

/// Installs file logging. The terminal belongs to the dashboard, so log
/// lines never go to stdout or stderr.
///
/// Keep the returned guard alive until exit or buffered lines are lost.
pub fn init() -> Result<WorkerGuard> {
    let log_dir = log_directory(std::env::var(LOG_DIR_ENV).ok());

    #[cfg(debug_assertions)]
    {
        init_debug_tracing(&log_dir)
    }
    #[cfg(not(debug_assertions))]
    {
        init_release_tracing(&log_dir)
    }
}

/// Like [`init`], but a failure the dashboard can run without is reported
/// on stderr and yields `None`.
pub fn init_or_continue() -> Result<Option<WorkerGuard>> {
    without_logs_if_ignorable(init())
}

fn without_logs_if_ignorable(result: Result<WorkerGuard>) -> Result<Option<WorkerGuard>> {
    match result {
        Ok(guard) => Ok(Some(guard)),
        Err(e) => match e.recovery_strategy() {
            RecoveryStrategy::Ignore => {
                eprintln!("Warning: file logging disabled: {}", e);
                Ok(None)
            }
            RecoveryStrategy::Retry | RecoveryStrategy::Exit => Err(e),
        },
    }
}

pub fn log_directory(override_dir: Option<String>) -> PathBuf {
    if let Some(dir) = override_dir.filter(|dir| !dir.is_empty()) {
        PathBuf::from(dir)
    } else if let Some(home) = dirs::home_dir() {
        home.join(".tui-dashboard").join("logs")
    } else {
        std::env::temp_dir().join("tui-dashboard")
    }
}

fn create_log_dir(log_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(log_dir).map_err(|e| {
        context::logging(format!(
            "cannot create log directory {}: {}",
            log_dir.display(),
            e
        ))
    })
}

#[cfg(debug_assertions)]
fn init_debug_tracing(log_dir: &Path) -> Result<WorkerGuard> {
    create_log_dir(log_dir)?;

    let log_file = rolling::daily(log_dir, "tui-dashboard-debug.log");
    let (non_blocking_log_file, guard) = tracing_appender::non_blocking(log_file);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_log_file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tui_dashboard=debug")),
        );

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .map_err(|e| context::logging(e.to_string()))?;

    tracing::info!(
        "Debug tracing initialized with detailed logging to: {}",
        log_dir.display()
    );
    Ok(guard)
}

#[cfg(not(debug_assertions))]
fn init_release_tracing(log_dir: &Path) -> Result<WorkerGuard> {
    create_log_dir(log_dir)?;

    let log_file = rolling::daily(log_dir, "tui-dashboard.log");
    let (non_blocking_log_file, guard) = tracing_appender::non_blocking(log_file);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_log_file)
        .with_ansi(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_target(false)
        .compact()
        .with_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tui_dashboard=info")),
        );

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .map_err(|e| context::logging(e.to_string()))?;

    tracing::info!("Release tracing initialized, logging to: {}", log_dir.display());
    Ok(guard)
}
