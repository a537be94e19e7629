//! Helpers for emitting records through an explicitly injected [`log::Log`].
//!
//! Components that report failures keep a [`SharedLogger`] handed to them at
//! construction instead of reaching for the process-wide logger, so callers
//! (and tests) decide where diagnostics go.

use log::{Level, Log, Metadata, Record};
use std::fmt::{self, Display};
use std::sync::Arc;

pub type SharedLogger = Arc<dyn Log>;

/// Forwards every record to the logger installed with `log::set_logger`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobalLogger;

impl Log for GlobalLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        log::logger().enabled(metadata)
    }

    fn log(&self, record: &Record) {
        log::logger().log(record)
    }

    fn flush(&self) {
        log::logger().flush()
    }
}

pub fn global_logger() -> SharedLogger {
    Arc::new(GlobalLogger)
}

/// Logs `message` at error level with the failure attached as the `err` field.
pub fn log_error(logger: &dyn Log, target: &str, message: &str, err: &dyn Display) {
    let err = err.to_string();
    let kv = ("err", err.as_str());
    logger.log(
        &Record::builder()
            .level(Level::Error)
            .target(target)
            .args(format_args!("{message}"))
            .key_values(&kv)
            .build(),
    );
}

pub fn log_info(logger: &dyn Log, target: &str, args: fmt::Arguments<'_>) {
    logger.log(
        &Record::builder()
            .level(Level::Info)
            .target(target)
            .args(args)
            .build(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::CapturingLogger;

    #[test]
    fn test_log_error_attaches_err_field() {
        let logger = CapturingLogger::default();
        log_error(&logger, "eigen_utils", "Failed to fetch thing", &"boom");

        let records = logger.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, Level::Error);
        assert_eq!(records[0].target, "eigen_utils");
        assert_eq!(records[0].message, "Failed to fetch thing");
        assert_eq!(records[0].err.as_deref(), Some("boom"));
    }

    #[test]
    fn test_log_info_has_no_err_field() {
        let logger = CapturingLogger::default();
        log_info(&logger, "eigen_utils", format_args!("resolved {}", 2));

        let records = logger.records();
        assert_eq!(records[0].level, Level::Info);
        assert_eq!(records[0].message, "resolved 2");
        assert!(records[0].err.is_none());
    }

    #[test]
    fn test_global_logger_is_disabled_without_installed_logger() {
        let logger = global_logger();
        let metadata = Metadata::builder()
            .level(Level::Error)
            .target("eigen_utils")
            .build();
        assert!(!logger.enabled(&metadata));
        assert!(!GlobalLogger.enabled(&metadata));
    }
}
