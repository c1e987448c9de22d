//! Debugger output appender
//!
//! On Windows each line goes to `OutputDebugStringW`, where an attached
//! debugger or DebugView picks it up. Other platforms have no such channel
//! and the appender does nothing beyond formatting.

use crate::core::{Appender, Layout, LayoutSlot, LoggingEvent, Result};
use std::sync::Arc;

#[cfg(windows)]
fn output_debug_string(text: &str) {
    use windows_sys::Win32::System::Diagnostics::Debug::OutputDebugStringW;

    let wide: Vec<u16> = text.encode_utf16().chain(std::iter::once(0)).collect();
    // SAFETY: `wide` is NUL-terminated and outlives the call.
    unsafe { OutputDebugStringW(wide.as_ptr()) };
}

#[cfg(not(windows))]
fn output_debug_string(_text: &str) {}

pub struct DebugOutputAppender {
    layout: LayoutSlot,
}

impl DebugOutputAppender {
    pub fn new() -> Self {
        Self {
            layout: LayoutSlot::new(),
        }
    }

    pub fn with_layout(layout: Arc<dyn Layout>) -> Self {
        Self {
            layout: LayoutSlot::with_layout(layout),
        }
    }

    /// Whether this platform has a debug output channel
    pub fn is_supported() -> bool {
        cfg!(windows)
    }
}

impl Default for DebugOutputAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for DebugOutputAppender {
    fn layout(&self) -> Option<Arc<dyn Layout>> {
        self.layout.get()
    }

    fn set_layout(&self, layout: Arc<dyn Layout>) {
        self.layout.set(layout);
    }

    fn do_append(&self, event: &LoggingEvent) -> Result<()> {
        let mut output = self.layout.format(self.name(), event);
        output.push('\n');
        output_debug_string(&output);
        Ok(())
    }

    fn name(&self) -> &str {
        "debug_output"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use crate::layouts::PatternLayout;

    #[test]
    fn test_append_never_fails() {
        let appender = DebugOutputAppender::with_layout(Arc::new(PatternLayout::new("%F(%L): log [%p]")));
        let event = LoggingEvent::new(LogLevel::Debug, "trace", "x", "trace.rs", 3);
        assert!(appender.do_append(&event).is_ok());
        assert_eq!(DebugOutputAppender::is_supported(), cfg!(windows));
    }

    #[test]
    #[should_panic(expected = "used before a layout was attached")]
    fn test_missing_layout_panics() {
        let event = LoggingEvent::new(LogLevel::Debug, "trace", "x", "trace.rs", 3);
        let _ = DebugOutputAppender::new().do_append(&event);
    }
}
