//! Output destinations shared between sub-loggers.

use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// Cloneable handle to a writer.
///
/// Clones share one writer behind a mutex, so several sub-loggers can point
/// at the same destination and every line reaches it in a single
/// `write_all`. The writer is dropped with the last handle; nothing here
/// opens or closes files on its own.
#[derive(Clone)]
pub struct Destination {
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Destination {
    /// Wrap a writer.
    pub fn new<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Standard output of the process.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Standard error of the process.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Destination that discards everything.
    pub fn sink() -> Self {
        Self::new(io::sink())
    }

    /// Write one rendered entry and flush it.
    pub fn write_entry(&self, bytes: &[u8]) -> io::Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(bytes)?;
        writer.flush()
    }

    /// Whether two handles refer to the same writer.
    pub fn ptr_eq(&self, other: &Destination) -> bool {
        Arc::ptr_eq(&self.writer, &other.writer)
    }
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Destination")
            .field("handles", &Arc::strong_count(&self.writer))
            .finish_non_exhaustive()
    }
}

impl From<SharedBuffer> for Destination {
    fn from(buffer: SharedBuffer) -> Self {
        Destination::new(buffer)
    }
}

/// In-memory writer whose clones share the same bytes.
///
/// Hand one clone to a logger and keep another to read back what was
/// written.
///
/// ```
/// use std::io::Write;
/// use twigsnake_core::SharedBuffer;
///
/// let buffer = SharedBuffer::new();
/// let mut writer = buffer.clone();
/// writer.write_all(b"one\ntwo\n").unwrap();
/// assert_eq!(buffer.lines(), vec!["one", "two"]);
/// ```
#[derive(Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    /// Written text split into lines, without terminators.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Number of bytes written.
    pub fn len(&self) -> usize {
        self.bytes.lock().len()
    }

    /// Whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }

    /// Discard everything written so far.
    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Debug for SharedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedBuffer")
            .field("len", &self.len())
            .finish()
    }
}
