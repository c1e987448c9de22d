//! Layout trait for turning events into text

use super::logging_event::LoggingEvent;

/// Platform line terminator, used by `%n` and text stream sinks
#[cfg(windows)]
pub const LINE_TERMINATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_TERMINATOR: &str = "\n";

pub trait Layout: Send + Sync {
    /// Render one event. Never fails.
    fn format(&self, event: &LoggingEvent) -> String;

    /// Text written once before the first event of a stream
    fn append_header(&self, _output: &mut String) {}

    /// Text written once after the last event of a stream
    fn append_footer(&self, _output: &mut String) {}
}
