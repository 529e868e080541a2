//! Stderr logging bootstrap.
//!
//! Initialization happens at most once per process: the first call wins and
//! later calls are no-ops, so tests and embedding clients may call it freely.
//! `RUST_LOG` overrides the level chosen here.

use crate::error::{Result, RoloError};
use flexi_logger::{Logger, LoggerHandle};
use once_cell::sync::OnceCell;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

pub fn init(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    LOGGER.get_or_try_init(|| {
        Logger::try_with_env_or_str(level)
            .map_err(|e| RoloError::Logging(e.to_string()))?
            .log_to_stderr()
            .start()
            .map_err(|e| RoloError::Logging(e.to_string()))
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::init;

    #[test]
    fn init_is_idempotent() {
        assert!(init(false).is_ok());
        assert!(init(true).is_ok());
    }
}
