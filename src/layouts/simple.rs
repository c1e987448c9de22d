//! Simple layout: `LEVEL - message`

use crate::core::{Layout, LogLevel, LoggingEvent};

/// Renders `"<LEVEL> - <message>"` with the level padded to five characters
///
/// # Examples
///
/// ```
/// use rust_logger_hierarchy::layouts::SimpleLayout;
/// use rust_logger_hierarchy::{Layout, LogLevel, LoggingEvent};
///
/// let event = LoggingEvent::new(LogLevel::Error, "storage", "disk full", "volume.rs", 3);
/// assert_eq!(SimpleLayout.format(&event), "ERROR - disk full");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleLayout;

impl SimpleLayout {
    pub fn new() -> Self {
        Self
    }
}

impl Layout for SimpleLayout {
    fn format(&self, event: &LoggingEvent) -> String {
        let level = match event.level() {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO ",
            LogLevel::Warn => "WARN ",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
            LogLevel::None => "unknown",
        };
        format!("{} - {}", level, event.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(level: LogLevel, message: &str) -> String {
        SimpleLayout::new().format(&LoggingEvent::new(level, "app", message, "main.rs", 1))
    }

    #[test]
    fn test_error_line() {
        assert_eq!(format(LogLevel::Error, "disk full"), "ERROR - disk full");
    }

    #[test]
    fn test_short_levels_are_padded() {
        assert_eq!(format(LogLevel::Info, "up"), "INFO  - up");
        assert_eq!(format(LogLevel::Warn, "slow"), "WARN  - slow");
        assert_eq!(format(LogLevel::Debug, "x"), "DEBUG - x");
        assert_eq!(format(LogLevel::Fatal, "x"), "FATAL - x");
    }

    #[test]
    fn test_sentinel_renders_unknown() {
        assert_eq!(format(LogLevel::None, "odd"), "unknown - odd");
    }
}
