//! Leveled logger: one threshold in front of eight per-severity sub-loggers.
//!
//! A message at severity `S` is written when the current threshold is
//! numerically at least `S`. Emergency messages are always written.
//!
//! ## Example
//!
//! ```
//! use twigsnake_core::{Destination, LeveledLogger, SharedBuffer};
//! use twigsnake_types::{Flags, Severity};
//!
//! let console = SharedBuffer::new();
//! let debug_file = SharedBuffer::new();
//!
//! let mut logger = LeveledLogger::new(Severity::Debug, console.clone())?;
//!
//! // Send debug output elsewhere, with precise timestamps and no prefix
//! logger[Severity::Debug].set_flags(Flags::DATE | Flags::MICROSECONDS);
//! logger[Severity::Debug].set_prefix("");
//! logger[Severity::Debug].set_output(Destination::from(debug_file.clone()));
//!
//! logger.info("Regular message");
//! logger.debug("Debug message");
//!
//! assert!(console.contents().ends_with("[INFO] Regular message\n"));
//! assert!(debug_file.contents().ends_with(" Debug message\n"));
//! # Ok::<(), twigsnake_types::TwigsnakeError>(())
//! ```
//!
//! ## Concurrency
//!
//! The logger holds no lock of its own. Emitting takes `&self`; changing the
//! threshold or reconfiguring a sub-logger takes `&mut self`. To share one
//! logger between threads and still reconfigure it, put it behind a single
//! lock such as [`crate::SharedLogger`]. Lines written to one destination
//! never interleave.

use std::fmt;
use std::io::Write;
use std::ops::{Index, IndexMut};
use twigsnake_types::{Flags, IntoSeverity, LoggerConfig, Result, Severity};

use crate::destination::Destination;
use crate::sublogger::SubLogger;

/// Logging object with a mutable severity threshold and one
/// independently configurable [`SubLogger`] per severity.
#[derive(Debug, Clone)]
pub struct LeveledLogger {
    threshold: Severity,
    sub_loggers: [SubLogger; Severity::COUNT],
}

macro_rules! severity_methods {
    ($($severity:ident => $plain:ident, $formatted:ident, $line:ident;)*) => {
        $(
            #[doc = concat!(
                "Log at [`Severity::",
                stringify!($severity),
                "`]; a terminator is added if missing."
            )]
            #[track_caller]
            pub fn $plain(&self, message: impl fmt::Display) {
                self.log(Severity::$severity, message);
            }

            #[doc = concat!(
                "Log `format_args!` output at [`Severity::", stringify!($severity), "`]."
            )]
            #[track_caller]
            pub fn $formatted(&self, args: fmt::Arguments<'_>) {
                self.log_fmt(Severity::$severity, args);
            }

            #[doc = concat!(
                "Log at [`Severity::", stringify!($severity), "`], always ending the line."
            )]
            #[track_caller]
            pub fn $line(&self, message: impl fmt::Display) {
                self.log_line(Severity::$severity, message);
            }
        )*
    };
}

impl LeveledLogger {
    /// Create a logger writing every severity to `destination`.
    ///
    /// Sub-loggers get the bracketed prefix of their severity (`"[INFO] "`)
    /// and [`Flags::DEFAULT`].
    ///
    /// # Errors
    ///
    /// Returns [`twigsnake_types::TwigsnakeError::InvalidSeverity`] if
    /// `threshold` is not one of the eight severities.
    pub fn new<S, W>(threshold: S, destination: W) -> Result<Self>
    where
        S: IntoSeverity,
        W: Write + Send + 'static,
    {
        let threshold = threshold.into_severity()?;
        Ok(Self::build(threshold, Destination::new(destination), |severity| {
            (severity.default_prefix().to_string(), Flags::DEFAULT)
        }))
    }

    /// Like [`LeveledLogger::new`], for a destination that is already
    /// shared with other loggers.
    pub fn with_destination<S>(threshold: S, destination: Destination) -> Result<Self>
    where
        S: IntoSeverity,
    {
        let threshold = threshold.into_severity()?;
        Ok(Self::build(threshold, destination, |severity| {
            (severity.default_prefix().to_string(), Flags::DEFAULT)
        }))
    }

    /// Create a logger from configuration.
    pub fn from_config(config: &LoggerConfig, destination: Destination) -> Self {
        Self::build(config.threshold, destination, |severity| {
            (config.prefix_for(severity).to_string(), config.flags)
        })
    }

    fn build<F>(threshold: Severity, destination: Destination, mut setup: F) -> Self
    where
        F: FnMut(Severity) -> (String, Flags),
    {
        let sub_loggers = Severity::ALL.map(|severity| {
            let (prefix, flags) = setup(severity);
            SubLogger::new(destination.clone(), prefix, flags)
        });
        Self {
            threshold,
            sub_loggers,
        }
    }

    /// Current threshold.
    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Replace the threshold. Takes effect for the next emission.
    ///
    /// # Errors
    ///
    /// Returns [`twigsnake_types::TwigsnakeError::InvalidSeverity`] for a
    /// value outside the eight severities; the threshold is left unchanged.
    pub fn set_threshold<S>(&mut self, threshold: S) -> Result<()>
    where
        S: IntoSeverity,
    {
        let threshold = threshold.into_severity()?;
        if threshold != self.threshold {
            tracing::debug!(
                target: crate::DIAGNOSTICS_TARGET,
                from = %self.threshold,
                to = %threshold,
                "severity threshold changed"
            );
        }
        self.threshold = threshold;
        Ok(())
    }

    /// Whether a message at `severity` would be written.
    pub fn enabled(&self, severity: Severity) -> bool {
        self.threshold.admits(severity)
    }

    /// Sub-logger serving `severity`.
    pub fn sub_logger(&self, severity: Severity) -> &SubLogger {
        &self.sub_loggers[severity.index()]
    }

    /// Mutable sub-logger serving `severity`, for changing its output,
    /// prefix or flags. Other severities are unaffected.
    pub fn sub_logger_mut(&mut self, severity: Severity) -> &mut SubLogger {
        &mut self.sub_loggers[severity.index()]
    }

    /// All sub-loggers, most urgent first.
    pub fn sub_loggers(&self) -> impl Iterator<Item = (Severity, &SubLogger)> {
        Severity::ALL.into_iter().zip(self.sub_loggers.iter())
    }

    /// Log `message` at `severity`; a terminator is added if missing.
    #[track_caller]
    pub fn log(&self, severity: Severity, message: impl fmt::Display) {
        if self.enabled(severity) {
            self.sub_logger(severity).print(message);
        }
    }

    /// Log `format_args!` output at `severity`.
    ///
    /// Arguments are not rendered when the severity is filtered out.
    #[track_caller]
    pub fn log_fmt(&self, severity: Severity, args: fmt::Arguments<'_>) {
        if self.enabled(severity) {
            self.sub_logger(severity).print_fmt(args);
        }
    }

    /// Log `message` at `severity` followed by a line terminator.
    #[track_caller]
    pub fn log_line(&self, severity: Severity, message: impl fmt::Display) {
        if self.enabled(severity) {
            self.sub_logger(severity).print_line(message);
        }
    }

    severity_methods! {
        Emergency => emerg, emerg_fmt, emerg_line;
        Alert => alert, alert_fmt, alert_line;
        Critical => crit, crit_fmt, crit_line;
        Error => error, error_fmt, error_line;
        Warning => warn, warn_fmt, warn_line;
        Notice => notice, notice_fmt, notice_line;
        Informational => info, info_fmt, info_line;
        Debug => debug, debug_fmt, debug_line;
    }
}

impl Index<Severity> for LeveledLogger {
    type Output = SubLogger;

    fn index(&self, severity: Severity) -> &SubLogger {
        self.sub_logger(severity)
    }
}

impl IndexMut<Severity> for LeveledLogger {
    fn index_mut(&mut self, severity: Severity) -> &mut SubLogger {
        self.sub_logger_mut(severity)
    }
}

/// Log formatted arguments through a [`LeveledLogger`] at a given severity.
///
/// ```
/// use twigsnake_core::{logf, LeveledLogger, SharedBuffer};
/// use twigsnake_types::Severity;
///
/// let buffer = SharedBuffer::new();
/// let logger = LeveledLogger::new(Severity::Notice, buffer.clone()).unwrap();
/// logf!(logger, Severity::Notice, "{} of {} done", 3, 10);
/// assert!(buffer.contents().ends_with("[NOTICE] 3 of 10 done\n"));
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log_fmt($severity, ::std::format_args!($($arg)+))
    };
}
