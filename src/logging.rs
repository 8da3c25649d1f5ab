//! File logging bootstrap.
//!
//! The TUI owns the terminal, so logs go to rotated files under the data
//! directory. Level comes from `STICKYPAD_LOG` (default `info`). The
//! returned handle must stay alive for the life of the process; dropping
//! it stops the logger.

use std::path::Path;

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};

const LOG_FILE_BASENAME: &str = "stickypad";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

pub fn init(log_dir: &Path) -> Result<LoggerHandle, String> {
    std::fs::create_dir_all(log_dir)
        .map_err(|err| format!("failed to create log directory: {err}"))?;

    let spec = std::env::var("STICKYPAD_LOG").unwrap_or_else(|_| "info".to_string());
    Logger::try_with_str(&spec)
        .map_err(|err| format!("invalid log spec `{spec}`: {err}"))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME)
                .suppress_timestamp(),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))
}
