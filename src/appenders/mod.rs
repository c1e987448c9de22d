//! Appender implementations

pub mod console;
pub mod debug_output;
pub mod platform_log;
pub mod text_stream;

pub use console::ConsoleAppender;
pub use debug_output::DebugOutputAppender;
pub use platform_log::{PlatformLogAppender, PlatformSeverity};
pub use text_stream::{MemoryTextStream, TextStream, TextStreamAppender, WriterTextStream};

pub use crate::core::Appender;
