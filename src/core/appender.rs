//! Appender trait for log output destinations

use super::{error::Result, layout::Layout, logging_event::LoggingEvent};
use parking_lot::RwLock;
use std::sync::Arc;

/// An output sink driven by a [`Layout`].
///
/// Appenders are shared between loggers and threads, so every method takes
/// `&self`. Calling [`Appender::do_append`] before a layout is attached is a
/// programmer error and panics.
pub trait Appender: Send + Sync {
    fn layout(&self) -> Option<Arc<dyn Layout>>;
    fn set_layout(&self, layout: Arc<dyn Layout>);
    fn do_append(&self, event: &LoggingEvent) -> Result<()>;
    fn name(&self) -> &str;
}

/// Layout holder shared by the appender implementations
#[derive(Default)]
pub struct LayoutSlot {
    layout: RwLock<Option<Arc<dyn Layout>>>,
}

impl LayoutSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(layout: Arc<dyn Layout>) -> Self {
        Self {
            layout: RwLock::new(Some(layout)),
        }
    }

    pub fn get(&self) -> Option<Arc<dyn Layout>> {
        self.layout.read().clone()
    }

    pub fn set(&self, layout: Arc<dyn Layout>) {
        *self.layout.write() = Some(layout);
    }

    /// Layout attached to `appender`, panicking when none is set
    pub fn require(&self, appender: &str) -> Arc<dyn Layout> {
        match self.get() {
            Some(layout) => layout,
            None => panic!("appender '{}' used before a layout was attached", appender),
        }
    }

    /// Format `event` with the attached layout
    pub fn format(&self, appender: &str, event: &LoggingEvent) -> String {
        self.require(appender).format(event)
    }
}
