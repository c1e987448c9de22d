//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod layout;
pub mod log_level;
pub mod logger;
pub mod logging_event;
pub mod metrics;
pub mod registry;
pub mod timestamp;

pub use appender::{Appender, LayoutSlot};
pub use config::{LoggerConfig, LoggerSettings};
pub use error::{LoggerError, Result};
pub use layout::{Layout, LINE_TERMINATOR};
pub use log_level::LogLevel;
pub use logger::{Logger, ROOT_LEVEL};
pub use logging_event::LoggingEvent;
pub use metrics::LoggerMetrics;
pub use registry::{get_logger, root_logger, LoggerRegistry};
pub use timestamp::TimestampFormat;
