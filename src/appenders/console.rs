//! Console appender implementation

use crate::core::{Appender, Layout, LayoutSlot, LoggingEvent, Result};
use colored::Colorize;
use std::io::Write;
use std::sync::Arc;

/// Writes each formatted event plus a newline to standard output
pub struct ConsoleAppender {
    layout: LayoutSlot,
    use_colors: bool,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            layout: LayoutSlot::new(),
            use_colors: false,
        }
    }

    /// Create an appender with its layout already attached
    ///
    /// # Example
    ///
    /// ```
    /// use rust_logger_hierarchy::appenders::ConsoleAppender;
    /// use rust_logger_hierarchy::layouts::PatternLayout;
    /// use std::sync::Arc;
    ///
    /// let appender = ConsoleAppender::with_layout(Arc::new(PatternLayout::new("%d %c [%p]")));
    /// ```
    pub fn with_layout(layout: Arc<dyn Layout>) -> Self {
        Self {
            layout: LayoutSlot::with_layout(layout),
            use_colors: false,
        }
    }

    /// Colour whole lines by level
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn layout(&self) -> Option<Arc<dyn Layout>> {
        self.layout.get()
    }

    fn set_layout(&self, layout: Arc<dyn Layout>) {
        self.layout.set(layout);
    }

    fn do_append(&self, event: &LoggingEvent) -> Result<()> {
        let output = self.layout.format(self.name(), event);
        let output = if self.use_colors {
            output.color(event.level().color_code()).to_string()
        } else {
            output
        };

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", output)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
