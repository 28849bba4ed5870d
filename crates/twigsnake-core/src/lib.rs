//! # Twigsnake Core
//!
//! Leveled logging with minimum overhead: one logging object with a
//! severity threshold in front of eight line loggers, one per RFC 5424
//! severity.
//!
//! This crate provides:
//!
//! - **LeveledLogger**: threshold filtering and the 24 per-severity
//!   emission methods (`info`, `info_fmt`, `info_line`, ...)
//! - **SubLogger**: prefix and flag driven line logger each severity writes
//!   through; individually reconfigurable
//! - **Destinations**: shared writer handles and an in-memory buffer
//! - **Tracing bridge**: a `tracing-subscriber` layer feeding a logger
//!
//! The logger is an ordinary value. Construct it, pass it where it is
//! needed; there is no process-wide instance.
//!
//! ## Example
//!
//! ```rust
//! use twigsnake_core::{LeveledLogger, SharedBuffer};
//! use twigsnake_types::Severity;
//!
//! let buffer = SharedBuffer::new();
//! let mut logger = LeveledLogger::new(Severity::Informational, buffer.clone())?;
//!
//! logger.info_line("This is informational message");
//! logger.notice_fmt(format_args!("random numbers and strings: {}, {}", 10, "random string"));
//! logger.debug_line("This debug message won't appear");
//!
//! logger.set_threshold(Severity::Debug)?;
//! logger.debug_line("Behold! Debug message");
//!
//! assert_eq!(buffer.lines().len(), 3);
//! # Ok::<(), twigsnake_types::TwigsnakeError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bridge;
pub mod destination;
pub mod logger;
pub mod nlog;
pub mod sublogger;
pub mod time;

// Re-export commonly used items
pub use bridge::{LeveledLayer, SharedLogger};
pub use destination::{Destination, SharedBuffer};
pub use logger::LeveledLogger;
pub use sublogger::SubLogger;
pub use time::CallSite;
pub use twigsnake_types::{Flags, LoggerConfig, Result, Severity, TwigsnakeError};

/// Target of the diagnostics this crate emits through `tracing`.
pub const DIAGNOSTICS_TARGET: &str = "twigsnake::diagnostics";
