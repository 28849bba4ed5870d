//! The leveled logger under its `nlog` name.
//!
//! `NLog` is the same type as [`crate::LeveledLogger`], and the `LOG_*`
//! constants name the severities by their syslog-style identifiers.
//!
//! ```
//! use twigsnake_core::nlog::{NLog, LOG_DEBUG, LOG_INFO};
//! use twigsnake_core::SharedBuffer;
//!
//! let buffer = SharedBuffer::new();
//! let mut log = NLog::new(LOG_INFO, buffer.clone()).unwrap();
//! log.debug_line("This debug message won't appear");
//! log.set_threshold(LOG_DEBUG).unwrap();
//! log.debug_line("Behold! Debug message");
//! assert_eq!(buffer.lines().len(), 1);
//! ```

pub use crate::logger::LeveledLogger as NLog;
pub use twigsnake_types::{Result, Severity, TwigsnakeError};

/// System is unusable
pub const LOG_EMERG: Severity = Severity::Emergency;
/// Action must be taken immediately
pub const LOG_ALERT: Severity = Severity::Alert;
/// Critical conditions
pub const LOG_CRIT: Severity = Severity::Critical;
/// Error conditions
pub const LOG_ERROR: Severity = Severity::Error;
/// Warning conditions
pub const LOG_WARN: Severity = Severity::Warning;
/// Normal, but significant conditions
pub const LOG_NOTICE: Severity = Severity::Notice;
/// Informational messages
pub const LOG_INFO: Severity = Severity::Informational;
/// Debug-level messages
pub const LOG_DEBUG: Severity = Severity::Debug;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::destination::SharedBuffer;
    use crate::LeveledLogger;

    #[test]
    fn test_constants_follow_ordinals() {
        let constants = [
            LOG_EMERG, LOG_ALERT, LOG_CRIT, LOG_ERROR,
            LOG_WARN, LOG_NOTICE, LOG_INFO, LOG_DEBUG,
        ];
        assert_eq!(constants, Severity::ALL);
    }

    #[test]
    fn test_alias_is_same_type() {
        let buffer = SharedBuffer::new();
        let log: NLog = NLog::new(LOG_ERROR, buffer.clone()).unwrap();
        let same: LeveledLogger = log;

        same.error_line("Failed to change logging level:");
        same.warn("quiet");
        assert_eq!(buffer.lines().len(), 1);
        assert!(buffer.contents().contains("[ERROR] Failed to change logging level:"));
    }
}
