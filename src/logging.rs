use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("info")
        } else {
            EnvFilter::new("warn")
        }
    })
}

/// The screen owns stdout, so the interactive run logs to a file. Keep the
/// guard alive until exit or buffered lines are lost.
pub fn init_file(path: &Path, verbose: bool) -> Result<WorkerGuard> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    let name = path
        .file_name()
        .with_context(|| format!("Log path has no file name: {}", path.display()))?;

    let appender = tracing_appender::rolling::never(dir, name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}

/// One-shot mode: stdout carries results, logs go to stderr.
pub fn init_stderr(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
