//! Bridge from the `tracing` ecosystem into a [`LeveledLogger`].
//!
//! [`LeveledLayer`] is a `tracing-subscriber` layer that forwards events to
//! the sub-logger of the matching severity, so code instrumented with
//! `tracing` macros ends up in the same per-severity destinations as direct
//! logger calls. Nothing is installed globally; compose the layer into a
//! subscriber of your choice.
//!
//! Events wait for the logger's read lock, so an event emitted while another
//! thread reconfigures the logger is written once that thread is done.
//! Emitting a `tracing` event while holding the logger's write guard on the
//! same thread deadlocks, as with any non-reentrant lock.
//!
//! | tracing level | severity        |
//! |---------------|-----------------|
//! | `ERROR`       | `Error`         |
//! | `WARN`        | `Warning`       |
//! | `INFO`        | `Informational` |
//! | `DEBUG`       | `Debug`         |
//! | `TRACE`       | `Debug`         |
//!
//! ```
//! use std::sync::Arc;
//! use parking_lot::RwLock;
//! use tracing_subscriber::layer::SubscriberExt;
//! use twigsnake_core::{LeveledLayer, LeveledLogger, SharedBuffer};
//! use twigsnake_types::Severity;
//!
//! let buffer = SharedBuffer::new();
//! let logger = LeveledLogger::new(Severity::Warning, buffer.clone()).unwrap();
//! let logger = Arc::new(RwLock::new(logger));
//! let subscriber = tracing_subscriber::registry().with(LeveledLayer::new(logger.clone()));
//!
//! tracing::subscriber::with_default(subscriber, || {
//!     tracing::warn!(attempt = 2, "retrying");
//!     tracing::info!("not shown");
//! });
//!
//! assert!(buffer.contents().ends_with("[WARN] retrying attempt=2\n"));
//! ```

use parking_lot::RwLock;
use std::cell::Cell;
use std::fmt::{self, Write as _};
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use twigsnake_types::Severity;

use crate::logger::LeveledLogger;
use crate::DIAGNOSTICS_TARGET;
use crate::time::CallSite;

thread_local! {
    static FORWARDING: Cell<bool> = const { Cell::new(false) };
}

/// Marks the current thread as inside [`LeveledLayer::on_event`] until dropped.
struct ForwardingGuard;

impl ForwardingGuard {
    /// `None` if this thread is already forwarding an event.
    fn enter() -> Option<Self> {
        FORWARDING.with(|flag| {
            if flag.replace(true) {
                None
            } else {
                Some(ForwardingGuard)
            }
        })
    }
}

impl Drop for ForwardingGuard {
    fn drop(&mut self) {
        FORWARDING.with(|flag| flag.set(false));
    }
}

/// A leveled logger shared between threads behind one lock.
pub type SharedLogger = Arc<RwLock<LeveledLogger>>;

/// Layer forwarding `tracing` events to a [`SharedLogger`].
#[derive(Debug, Clone)]
pub struct LeveledLayer {
    logger: SharedLogger,
}

impl LeveledLayer {
    /// Forward events to `logger`.
    pub fn new(logger: SharedLogger) -> Self {
        Self { logger }
    }

    /// The logger events are forwarded to.
    pub fn logger(&self) -> &SharedLogger {
        &self.logger
    }

    /// Severity a `tracing` level maps to.
    pub fn severity_for(level: &Level) -> Severity {
        match *level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warning,
            Level::INFO => Severity::Informational,
            _ => Severity::Debug,
        }
    }
}

impl<S> Layer<S> for LeveledLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        // Our own diagnostics are emitted while the logger may be locked
        // or while a write is failing.
        if metadata.target() == DIAGNOSTICS_TARGET {
            return;
        }

        // Events raised by a destination writer while we hold its lock are
        // not forwarded back into it.
        let Some(_guard) = ForwardingGuard::enter() else {
            return;
        };

        let logger = self.logger.read();

        let severity = Self::severity_for(metadata.level());
        if !logger.enabled(severity) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let site = metadata
            .file()
            .zip(metadata.line())
            .map(|(file, line)| CallSite { file, line });
        logger.sub_logger(severity).print_at(site, visitor.finish());
    }
}

/// Collects the `message` field and renders the rest as `key=value`.
#[derive(Default)]
struct EventVisitor {
    message: String,
    fields: String,
}

impl EventVisitor {
    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }

    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={}", name, value);
    }
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.push_field(field.name(), format_args!("{}", value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            self.push_field(field.name(), format_args!("{:?}", value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::destination::SharedBuffer;
    use std::io::{self, Write};
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;
    use tracing_subscriber::layer::SubscriberExt;
    use twigsnake_types::Flags;

    fn shared(threshold: Severity) -> (SharedLogger, SharedBuffer) {
        let buffer = SharedBuffer::new();
        let mut logger = LeveledLogger::new(threshold, buffer.clone()).unwrap();
        for severity in Severity::ALL {
            logger[severity].set_flags(Flags::MSG_PREFIX);
        }
        (Arc::new(RwLock::new(logger)), buffer)
    }

    #[test]
    fn test_level_mapping() {
        assert_eq!(LeveledLayer::severity_for(&Level::ERROR), Severity::Error);
        assert_eq!(LeveledLayer::severity_for(&Level::WARN), Severity::Warning);
        assert_eq!(LeveledLayer::severity_for(&Level::INFO), Severity::Informational);
        assert_eq!(LeveledLayer::severity_for(&Level::DEBUG), Severity::Debug);
        assert_eq!(LeveledLayer::severity_for(&Level::TRACE), Severity::Debug);
    }

    #[test]
    fn test_events_filtered_by_threshold() {
        let (logger, buffer) = shared(Severity::Informational);
        let subscriber = tracing_subscriber::registry().with(LeveledLayer::new(logger.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::error!("boom");
            tracing::info!(user = "ann", count = 3, "login");
            tracing::debug!("hidden");
        });

        assert_eq!(
            buffer.contents(),
            "[ERROR] boom\n[INFO] login user=ann count=3\n"
        );
    }

    #[test]
    fn test_threshold_change_applies_to_bridge() {
        let (logger, buffer) = shared(Severity::Error);
        let subscriber = tracing_subscriber::registry().with(LeveledLayer::new(logger.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("first");
            logger.write().set_threshold(Severity::Debug).unwrap();
            tracing::trace!(step = 2);
        });

        assert_eq!(buffer.contents(), "[DEBUG] step=2\n");
    }

    #[test]
    fn test_event_routed_to_reconfigured_sub_logger() {
        let (logger, main) = shared(Severity::Debug);
        let warnings = SharedBuffer::new();
        logger.write()[Severity::Warning].set_output(crate::Destination::from(warnings.clone()));

        let subscriber = tracing_subscriber::registry().with(LeveledLayer::new(logger));
        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!("careful");
            tracing::info!("fine");
        });

        assert_eq!(warnings.contents(), "[WARN] careful\n");
        assert_eq!(main.contents(), "[INFO] fine\n");
    }

    #[test]
    fn test_event_waits_for_writer_on_other_thread() {
        let (logger, buffer) = shared(Severity::Informational);
        let subscriber = tracing_subscriber::registry().with(LeveledLayer::new(logger.clone()));

        let (locked_tx, locked_rx) = mpsc::channel();
        let holder = {
            let logger = logger.clone();
            thread::spawn(move || {
                let mut guard = logger.write();
                locked_tx.send(()).unwrap();
                thread::sleep(Duration::from_millis(200));
                guard[Severity::Error].set_prefix("[E] ");
            })
        };

        locked_rx.recv().unwrap();
        tracing::subscriber::with_default(subscriber, || {
            tracing::error!("written after reconfiguration");
        });
        holder.join().unwrap();

        assert_eq!(buffer.contents(), "[E] written after reconfiguration\n");
    }

    #[test]
    fn test_event_raised_by_destination_is_not_forwarded() {
        struct Chatty(SharedBuffer);

        impl Write for Chatty {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                tracing::warn!("nested");
                self.0.write(buf)
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let buffer = SharedBuffer::new();
        let mut logger = LeveledLogger::new(Severity::Debug, Chatty(buffer.clone())).unwrap();
        for severity in Severity::ALL {
            logger[severity].set_flags(Flags::MSG_PREFIX);
        }
        let layer = LeveledLayer::new(Arc::new(RwLock::new(logger)));

        tracing::subscriber::with_default(tracing_subscriber::registry().with(layer), || {
            tracing::info!("outer");
        });

        assert_eq!(buffer.contents(), "[INFO] outer\n");
    }
}
