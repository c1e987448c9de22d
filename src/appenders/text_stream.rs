//! Text stream appender and the sinks it writes to

use crate::core::{Appender, Layout, LayoutSlot, LoggerError, LoggingEvent, Result, LINE_TERMINATOR};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// A line-oriented text sink shared between the caller and an appender
pub trait TextStream: Send + Sync {
    fn write(&self, text: &str) -> io::Result<()>;
    fn write_line_terminator(&self) -> io::Result<()>;
    fn flush(&self) -> io::Result<()>;
}

/// [`TextStream`] over any [`Write`] implementation (files, pipes, buffers)
pub struct WriterTextStream<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterTextStream<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> TextStream for WriterTextStream<W> {
    fn write(&self, text: &str) -> io::Result<()> {
        self.writer.lock().write_all(text.as_bytes())
    }

    fn write_line_terminator(&self) -> io::Result<()> {
        self.writer.lock().write_all(LINE_TERMINATOR.as_bytes())
    }

    fn flush(&self) -> io::Result<()> {
        self.writer.lock().flush()
    }
}

/// In-memory [`TextStream`], handy for capturing output
#[derive(Debug, Default)]
pub struct MemoryTextStream {
    buffer: Mutex<String>,
    flushes: AtomicUsize,
}

impl MemoryTextStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Captured text split on the line terminator
    pub fn lines(&self) -> Vec<String> {
        self.buffer.lock().lines().map(String::from).collect()
    }

    pub fn flush_count(&self) -> usize {
        self.flushes.load(Ordering::Relaxed)
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl TextStream for MemoryTextStream {
    fn write(&self, text: &str) -> io::Result<()> {
        self.buffer.lock().push_str(text);
        Ok(())
    }

    fn write_line_terminator(&self) -> io::Result<()> {
        self.buffer.lock().push_str(LINE_TERMINATOR);
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        self.flushes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

/// Writes each formatted event and a line terminator to a [`TextStream`],
/// flushing after every event.
///
/// The layout header goes out before the first event and the footer when the
/// appender is dropped, provided something was written.
///
/// # Example
///
/// ```
/// use rust_logger_hierarchy::appenders::{MemoryTextStream, TextStreamAppender};
/// use rust_logger_hierarchy::layouts::SimpleLayout;
/// use rust_logger_hierarchy::{Appender, LogLevel, LoggingEvent};
/// use std::sync::Arc;
///
/// let stream = Arc::new(MemoryTextStream::new());
/// let appender = TextStreamAppender::new(stream.clone()).with_layout(Arc::new(SimpleLayout));
///
/// let event = LoggingEvent::new(LogLevel::Warn, "app", "low memory", "main.rs", 9);
/// appender.do_append(&event).unwrap();
/// assert_eq!(stream.lines(), vec!["WARN  - low memory"]);
/// ```
pub struct TextStreamAppender {
    layout: LayoutSlot,
    stream: Arc<dyn TextStream>,
    started: AtomicBool,
    /// Keeps one event's text and terminator together
    write_lock: Mutex<()>,
}

impl TextStreamAppender {
    pub fn new(stream: Arc<dyn TextStream>) -> Self {
        Self {
            layout: LayoutSlot::new(),
            stream,
            started: AtomicBool::new(false),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn with_layout(self, layout: Arc<dyn Layout>) -> Self {
        self.layout.set(layout);
        self
    }

    pub fn stream(&self) -> Arc<dyn TextStream> {
        Arc::clone(&self.stream)
    }

    fn write_line(&self, text: &str) -> Result<()> {
        self.stream
            .write(text)
            .map_err(|e| LoggerError::io_operation("writing to text stream", "write failed", e))?;
        self.stream.write_line_terminator().map_err(|e| {
            LoggerError::io_operation("writing to text stream", "line terminator failed", e)
        })?;
        Ok(())
    }

    /// Caller holds `write_lock`. `started` is only set once the header is
    /// out, so a failed attempt is retried with the next event.
    fn write_header(&self, layout: &dyn Layout) -> Result<()> {
        if self.started.load(Ordering::Acquire) {
            return Ok(());
        }
        let mut header = String::new();
        layout.append_header(&mut header);
        if !header.is_empty() {
            self.write_line(&header)?;
        }
        self.started.store(true, Ordering::Release);
        Ok(())
    }
}

impl Appender for TextStreamAppender {
    fn layout(&self) -> Option<Arc<dyn Layout>> {
        self.layout.get()
    }

    fn set_layout(&self, layout: Arc<dyn Layout>) {
        self.layout.set(layout);
    }

    fn do_append(&self, event: &LoggingEvent) -> Result<()> {
        let layout = self.layout.require(self.name());
        let text = layout.format(event);

        let _guard = self.write_lock.lock();
        self.write_header(layout.as_ref())?;
        self.write_line(&text)?;
        self.stream
            .flush()
            .map_err(|e| LoggerError::io_operation("flushing text stream", "flush failed", e))?;
        Ok(())
    }

    fn name(&self) -> &str {
        "text_stream"
    }
}

impl Drop for TextStreamAppender {
    fn drop(&mut self) {
        if !self.started.load(Ordering::Acquire) {
            return;
        }
        let Some(layout) = self.layout.get() else {
            return;
        };

        let mut footer = String::new();
        layout.append_footer(&mut footer);
        if !footer.is_empty() {
            let _ = self.write_line(&footer);
            let _ = self.stream.flush();
        }
    }
}
