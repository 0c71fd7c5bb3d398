//! Core logging bootstrap and level policy.
//!
//! # Responsibility
//! - Normalize level names shared by every host (browser console, native file).
//! - On native hosts, initialize rolling file logs exactly once per process.
//!
//! # Invariants
//! - Logging init is idempotent for the same directory and level.
//! - Logging initialization must not panic.
//! - Re-initialization with a different directory or level is rejected.

#[cfg(not(target_arch = "wasm32"))]
pub use file::{init_logging, logging_status};

const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

/// Returns the default log level for current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

/// Maps a user-supplied level name onto its canonical spelling.
///
/// # Errors
/// - Returns a human-readable message when `level` is not one of
///   `trace|debug|info|warn|error` (`warning` is accepted as `warn`).
pub fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

/// Converts a canonical level name into a `log` filter.
pub fn level_filter(level: &str) -> log::LevelFilter {
    match normalize_level(level) {
        Ok("trace") => log::LevelFilter::Trace,
        Ok("debug") => log::LevelFilter::Debug,
        Ok("warn") => log::LevelFilter::Warn,
        Ok("error") => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    }
}

/// Flattens newlines and caps length so panic payloads stay on one log line.
pub fn sanitize_message(value: &str, max_chars: usize) -> String {
    let normalized = value.replace(['\n', '\r'], " ");
    let mut truncated = normalized.chars().take(max_chars).collect::<String>();
    if normalized.chars().count() > max_chars {
        truncated.push_str("...");
    }
    truncated
}

/// Extracts a sanitized, length-capped summary of a panic payload.
pub fn panic_payload_summary(info: &std::panic::PanicHookInfo<'_>) -> String {
    let payload = if let Some(message) = info.payload().downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = info.payload().downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    };

    sanitize_message(&payload, MAX_PANIC_PAYLOAD_CHARS)
}

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use super::{normalize_level, panic_payload_summary};
    use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
    use log::{error, info};
    use once_cell::sync::OnceCell;
    use std::path::{Path, PathBuf};

    const LOG_FILE_BASENAME: &str = "ecosmart";
    const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
    const MAX_LOG_FILES: usize = 3;

    static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();
    static PANIC_HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

    struct LoggingState {
        level: &'static str,
        log_dir: PathBuf,
        _logger: LoggerHandle,
    }

    /// Initializes native file logging with level and directory.
    ///
    /// # Invariants
    /// - Calling this function repeatedly with the same config is idempotent.
    /// - Re-initialization with a different `level` or `log_dir` is rejected.
    /// - Initialization never panics.
    ///
    /// # Errors
    /// - Returns an error when `level` is unsupported.
    /// - Returns an error when `log_dir` is empty, non-absolute, or cannot be created.
    /// - Returns an error when logger backend setup fails.
    pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
        let normalized_level = normalize_level(level)?;
        let normalized_dir = normalize_log_dir(log_dir)?;

        if let Some(state) = LOGGING_STATE.get() {
            return check_conflict(state, normalized_level, &normalized_dir);
        }

        let init_dir = normalized_dir.clone();
        let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, String> {
            std::fs::create_dir_all(&init_dir).map_err(|err| {
                format!(
                    "failed to create log directory `{}`: {err}",
                    init_dir.display()
                )
            })?;

            let logger = Logger::try_with_str(normalized_level)
                .map_err(|err| format!("invalid log level `{normalized_level}`: {err}"))?
                .log_to_file(
                    FileSpec::default()
                        .directory(init_dir.as_path())
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

            install_panic_hook_once();

            info!(
                "event=app_start module=core status=ok platform={} version={}",
                std::env::consts::OS,
                env!("CARGO_PKG_VERSION")
            );
            info!(
                "event=core_init module=core status=ok level={} log_dir={}",
                normalized_level,
                init_dir.display()
            );

            Ok(LoggingState {
                level: normalized_level,
                log_dir: init_dir,
                _logger: logger,
            })
        })?;

        check_conflict(state, normalized_level, &normalized_dir)
    }

    /// Returns `(level, log_dir)` when file logging is active.
    pub fn logging_status() -> Option<(&'static str, PathBuf)> {
        LOGGING_STATE
            .get()
            .map(|state| (state.level, state.log_dir.clone()))
    }

    fn check_conflict(state: &LoggingState, level: &str, log_dir: &Path) -> Result<(), String> {
        if state.log_dir != log_dir {
            return Err(format!(
                "logging already initialized at `{}`; refusing to switch to `{}`",
                state.log_dir.display(),
                log_dir.display()
            ));
        }
        if state.level != level {
            return Err(format!(
                "logging already initialized with level `{}`; refusing to switch to `{}`",
                state.level, level
            ));
        }
        Ok(())
    }

    pub(super) fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, String> {
        let trimmed = log_dir.trim();
        if trimmed.is_empty() {
            return Err("log_dir cannot be empty".to_string());
        }
        let path = Path::new(trimmed);
        if !path.is_absolute() {
            return Err(format!("log_dir must be an absolute path, got `{trimmed}`"));
        }
        Ok(path.to_path_buf())
    }

    fn install_panic_hook_once() {
        if PANIC_HOOK_INSTALLED.get().is_some() {
            return;
        }

        let previous_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let location = panic_info
                .location()
                .map(|loc| format!("{}:{}", loc.file(), loc.line()))
                .unwrap_or_else(|| "unknown".to_string());
            error!(
                "event=panic_captured module=core status=error location={} payload={}",
                location,
                panic_payload_summary(panic_info)
            );
            previous_hook(panic_info);
        }));

        let _ = PANIC_HOOK_INSTALLED.set(());
    }
}
