//! # Rust Logger Hierarchy
//!
//! A hierarchical logging framework: a tree of named loggers with level
//! inheritance and additive event propagation, feeding pluggable appenders
//! through pluggable layouts.
//!
//! ## Features
//!
//! - **Logger Tree**: dotted names (`net.session`), case-insensitive, with
//!   levels inherited from the nearest configured ancestor
//! - **Additivity**: events travel up the tree until a non-additive logger
//! - **Multiple Appenders**: console, debugger output, text streams and the
//!   platform log
//! - **Pattern Layouts**: `%d [%-5p] %c - %F(%L)` style formatting
//! - **Thread Safe**: synchronous and lock-light; appender sets are
//!   copy-on-write so reconfiguration never disturbs an in-flight event
//!
//! ## Example
//!
//! ```
//! use rust_logger_hierarchy::prelude::*;
//! use std::sync::Arc;
//!
//! let registry = LoggerRegistry::new();
//! let stream = Arc::new(MemoryTextStream::new());
//! let appender = TextStreamAppender::new(stream.clone())
//!     .with_layout(Arc::new(PatternLayout::new("[%-5p] %c")));
//! registry.root_logger().add_appender(Arc::new(appender));
//!
//! let logger = registry.get_logger("net.session").unwrap();
//! logger.set_level(LogLevel::Info);
//! logger.debug("hidden", file!(), line!());
//! logger.warn("visible", file!(), line!());
//!
//! assert_eq!(stream.lines(), vec!["[WARN ] net.session"]);
//! ```

pub mod appenders;
pub mod core;
pub mod layouts;

pub mod prelude {
    pub use crate::appenders::{
        ConsoleAppender, DebugOutputAppender, MemoryTextStream, PlatformLogAppender, TextStream,
        TextStreamAppender, WriterTextStream,
    };
    pub use crate::core::{
        get_logger, root_logger, Appender, Layout, LogLevel, Logger, LoggerConfig, LoggerError,
        LoggerMetrics, LoggerRegistry, LoggerSettings, LoggingEvent, Result, TimestampFormat,
    };
    pub use crate::layouts::{JsonLayout, PatternLayout, SimpleLayout};
}

pub use appenders::{
    ConsoleAppender, DebugOutputAppender, MemoryTextStream, PlatformLogAppender, TextStream,
    TextStreamAppender, WriterTextStream,
};
pub use crate::core::{
    get_logger, root_logger, Appender, Layout, LayoutSlot, LogLevel, Logger, LoggerConfig,
    LoggerError, LoggerMetrics, LoggerRegistry, LoggerSettings, LoggingEvent, Result,
    TimestampFormat, LINE_TERMINATOR,
};
pub use layouts::{JsonLayout, PatternLayout, SimpleLayout};
