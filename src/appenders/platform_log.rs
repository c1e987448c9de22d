//! Platform log appender
//!
//! Forwards formatted events to the operating system's log facility: `syslog(3)`
//! on Unix-like systems (which on Android lands in logcat). Where no such
//! facility exists the appender is a no-op.

use crate::core::{Appender, Layout, LayoutSlot, LogLevel, LoggingEvent, Result};
use std::sync::Arc;

/// Severity understood by the platform log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformSeverity {
    Debug,
    Info,
    Warning,
    Error,
    Fatal,
}

impl PlatformSeverity {
    /// Map an event level. The `None` sentinel never reaches an event; if it
    /// does it is treated as fatal.
    pub fn from_level(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => PlatformSeverity::Debug,
            LogLevel::Info => PlatformSeverity::Info,
            LogLevel::Warn => PlatformSeverity::Warning,
            LogLevel::Error => PlatformSeverity::Error,
            LogLevel::Fatal => PlatformSeverity::Fatal,
            LogLevel::None => {
                debug_assert!(false, "event carries the NONE sentinel level");
                PlatformSeverity::Fatal
            }
        }
    }

    #[cfg(unix)]
    pub fn syslog_priority(self) -> libc::c_int {
        match self {
            PlatformSeverity::Debug => libc::LOG_DEBUG,
            PlatformSeverity::Info => libc::LOG_INFO,
            PlatformSeverity::Warning => libc::LOG_WARNING,
            PlatformSeverity::Error => libc::LOG_ERR,
            PlatformSeverity::Fatal => libc::LOG_CRIT,
        }
    }
}

#[cfg(unix)]
fn platform_write(severity: PlatformSeverity, text: &str) -> Result<()> {
    use crate::core::LoggerError;
    use std::ffi::CString;

    let message = CString::new(text.replace('\0', "\\0")).map_err(|e| LoggerError::other(e.to_string()))?;
    // SAFETY: both pointers are NUL-terminated C strings that outlive the call,
    // and the "%s" format consumes exactly one string argument.
    unsafe {
        libc::syslog(
            libc::LOG_USER | severity.syslog_priority(),
            b"%s\0".as_ptr().cast::<libc::c_char>(),
            message.as_ptr(),
        );
    }
    Ok(())
}

#[cfg(not(unix))]
fn platform_write(_severity: PlatformSeverity, _text: &str) -> Result<()> {
    Ok(())
}

pub struct PlatformLogAppender {
    layout: LayoutSlot,
}

impl PlatformLogAppender {
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

    /// Whether this platform has a log facility
    pub fn is_supported() -> bool {
        cfg!(unix)
    }
}

impl Default for PlatformLogAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for PlatformLogAppender {
    fn layout(&self) -> Option<Arc<dyn Layout>> {
        self.layout.get()
    }

    fn set_layout(&self, layout: Arc<dyn Layout>) {
        self.layout.set(layout);
    }

    fn do_append(&self, event: &LoggingEvent) -> Result<()> {
        let output = self.layout.format(self.name(), event);
        platform_write(PlatformSeverity::from_level(event.level()), &output)
    }

    fn name(&self) -> &str {
        "platform_log"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::SimpleLayout;

    #[test]
    fn test_level_mapping() {
        assert_eq!(PlatformSeverity::from_level(LogLevel::Debug), PlatformSeverity::Debug);
        assert_eq!(PlatformSeverity::from_level(LogLevel::Info), PlatformSeverity::Info);
        assert_eq!(PlatformSeverity::from_level(LogLevel::Warn), PlatformSeverity::Warning);
        assert_eq!(PlatformSeverity::from_level(LogLevel::Error), PlatformSeverity::Error);
        assert_eq!(PlatformSeverity::from_level(LogLevel::Fatal), PlatformSeverity::Fatal);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "NONE sentinel")]
    fn test_sentinel_asserts() {
        let _ = PlatformSeverity::from_level(LogLevel::None);
    }

    #[test]
    #[cfg(unix)]
    fn test_syslog_priorities() {
        assert_eq!(PlatformSeverity::Debug.syslog_priority(), libc::LOG_DEBUG);
        assert_eq!(PlatformSeverity::Warning.syslog_priority(), libc::LOG_WARNING);
        assert_eq!(PlatformSeverity::Fatal.syslog_priority(), libc::LOG_CRIT);
    }

    #[test]
    fn test_append_with_embedded_nul() {
        let appender = PlatformLogAppender::with_layout(Arc::new(SimpleLayout));
        let event = LoggingEvent::new(LogLevel::Info, "sys", "a\0b", "sys.rs", 1);
        assert!(appender.do_append(&event).is_ok());
    }
}
