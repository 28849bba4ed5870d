//! Unfiltered line logger bound to one destination, prefix and flag set.

use chrono::Utc;
use std::fmt;
use std::io;
use std::panic::Location;
use twigsnake_types::Flags;

use crate::destination::Destination;
use crate::time::{render_entry, CallSite};

/// Line logger writing every entry it is given.
///
/// Each entry is rendered as one line (see [`Flags`] for the header layout)
/// and written to the destination in a single call. A `SubLogger` does no
/// severity filtering; [`crate::LeveledLogger`] decides what reaches it.
///
/// ```
/// use twigsnake_core::{Destination, SharedBuffer, SubLogger};
/// use twigsnake_types::Flags;
///
/// let buffer = SharedBuffer::new();
/// let logger = SubLogger::new(Destination::from(buffer.clone()), "app: ", Flags::NONE);
/// logger.print("started");
/// logger.print_fmt(format_args!("{} workers", 4));
/// assert_eq!(buffer.contents(), "app: started\napp: 4 workers\n");
/// ```
#[derive(Debug, Clone)]
pub struct SubLogger {
    output: Destination,
    prefix: String,
    flags: Flags,
}

impl SubLogger {
    /// Create a logger on `output` with the given prefix and flags.
    pub fn new(output: Destination, prefix: impl Into<String>, flags: Flags) -> Self {
        Self {
            output,
            prefix: prefix.into(),
            flags,
        }
    }

    /// Write `message`, adding a line terminator if it lacks one.
    #[track_caller]
    pub fn print(&self, message: impl fmt::Display) {
        self.print_at(Some(Location::caller().into()), message);
    }

    /// Write pre-formatted arguments, adding a terminator if missing.
    #[track_caller]
    pub fn print_fmt(&self, args: fmt::Arguments<'_>) {
        self.print_at(Some(Location::caller().into()), args);
    }

    /// Write `message` followed by a line terminator, even if it already
    /// ends with one.
    #[track_caller]
    pub fn print_line(&self, message: impl fmt::Display) {
        let mut text = message.to_string();
        text.push('\n');
        self.print_at(Some(Location::caller().into()), text);
    }

    /// Write `message` attributed to an explicit call site.
    ///
    /// Write failures are dropped after a debug diagnostic.
    pub fn print_at(&self, site: Option<CallSite<'_>>, message: impl fmt::Display) {
        if let Err(e) = self.write_entry_at(site, &message.to_string()) {
            tracing::debug!(
                target: crate::DIAGNOSTICS_TARGET,
                error = %e,
                prefix = %self.prefix,
                "log entry dropped"
            );
        }
    }

    /// Render and write one entry, returning the destination's error.
    #[track_caller]
    pub fn write_entry(&self, message: &str) -> io::Result<()> {
        self.write_entry_at(Some(Location::caller().into()), message)
    }

    fn write_entry_at(&self, site: Option<CallSite<'_>>, message: &str) -> io::Result<()> {
        let line = render_entry(Utc::now(), self.flags, &self.prefix, site, message);
        self.output.write_entry(line.as_bytes())
    }

    /// Destination this logger writes to.
    pub fn output(&self) -> &Destination {
        &self.output
    }

    /// Redirect subsequent entries to `output`.
    pub fn set_output(&mut self, output: Destination) {
        self.output = output;
    }

    /// Current prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Replace the prefix.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    /// Current flags.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Replace the flags.
    pub fn set_flags(&mut self, flags: Flags) {
        self.flags = flags;
    }
}
