//! File logging bootstrap
//!
//! The terminal belongs to the UI while it runs, so logs go to rotating files
//! only. Messages use an `event=<name> key=value ...` shape.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use std::path::Path;

const LOG_FILE_BASENAME: &str = "glossary";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 2 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;
const SUPPORTED_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Start file logging at `level` under `log_dir`.
///
/// The returned handle must be kept alive for the lifetime of the process;
/// dropping it flushes and stops the logger.
///
/// # Errors
/// - `level` is not one of trace, debug, info, warn, error
/// - `log_dir` cannot be created or the logger backend fails to start
pub fn init_logging(level: &str, log_dir: &Path) -> Result<LoggerHandle, String> {
    let level = normalize_level(level)?;

    std::fs::create_dir_all(log_dir).map_err(|err| {
        format!(
            "failed to create log directory `{}`: {err}",
            log_dir.display()
        )
    })?;

    let handle = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    info!(
        "event=app_start status=ok version={} level={} log_dir={}",
        env!("CARGO_PKG_VERSION"),
        level,
        log_dir.display()
    );

    Ok(handle)
}

/// Lowercase and validate a level name
pub fn normalize_level(level: &str) -> Result<&'static str, String> {
    let lowered = level.trim().to_ascii_lowercase();
    SUPPORTED_LEVELS
        .iter()
        .copied()
        .find(|supported| *supported == lowered)
        .ok_or_else(|| {
            format!(
                "unsupported log level `{}`; expected one of {}",
                level,
                SUPPORTED_LEVELS.join(", ")
            )
        })
}

#[cfg(test)]
mod tests {
    use super::normalize_level;

    #[test]
    fn normalize_level_accepts_mixed_case() {
        assert_eq!(normalize_level(" Warn "), Ok("warn"));
        assert_eq!(normalize_level("DEBUG"), Ok("debug"));
    }

    #[test]
    fn normalize_level_rejects_unknown() {
        let err = normalize_level("verbose").unwrap_err();
        assert!(err.contains("verbose"));
    }
}
