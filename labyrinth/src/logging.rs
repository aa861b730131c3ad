//! Logger setup.

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

/// Start logging to stderr.
///
/// `RUST_LOG` takes precedence over `level`. The returned handle must be
/// kept alive for the duration of the program.
pub fn init(level: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    let handle = Logger::try_with_env_or_str(level)?
        .log_to_stderr()
        .start()?;
    log::debug!("logging initialised at {level}");
    Ok(handle)
}
