//! Logging event structure

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cell::RefCell;

// Thread-local caches for thread information to avoid repeated allocations
thread_local! {
    static THREAD_ID_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
    static THREAD_NAME_CACHE: RefCell<Option<Option<String>>> = const { RefCell::new(None) };
}

/// Numeric part of the current thread's id, e.g. `"7"` for `ThreadId(7)`
fn current_thread_id() -> String {
    THREAD_ID_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| {
                let debug = format!("{:?}", std::thread::current().id());
                let digits: String = debug.chars().filter(char::is_ascii_digit).collect();
                if digits.is_empty() {
                    debug
                } else {
                    digits
                }
            })
            .clone()
    })
}

fn current_thread_name() -> Option<String> {
    THREAD_NAME_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| std::thread::current().name().map(String::from))
            .clone()
    })
}

/// Immutable snapshot of one log occurrence.
///
/// The capturing thread and the timestamp are sampled when the event is
/// built; callers cannot supply them.
#[derive(Debug, Clone, Serialize)]
pub struct LoggingEvent {
    level: LogLevel,
    logger_name: String,
    message: String,
    source_file: String,
    source_line: u32,
    thread_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    thread_name: Option<String>,
    timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    params: Vec<String>,
}

impl LoggingEvent {
    pub fn new(
        level: LogLevel,
        logger_name: impl Into<String>,
        message: impl Into<String>,
        source_file: impl Into<String>,
        source_line: u32,
    ) -> Self {
        Self {
            level,
            logger_name: logger_name.into(),
            message: message.into(),
            source_file: source_file.into(),
            source_line,
            thread_id: current_thread_id(),
            thread_name: current_thread_name(),
            timestamp: Utc::now(),
            params: Vec::new(),
        }
    }

    /// Attach the ordered message parameters. Only usable while building.
    #[must_use]
    pub fn with_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params = params.into_iter().map(Into::into).collect();
        self
    }

    #[inline]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Full dotted name of the logger the event was logged at
    #[inline]
    pub fn logger_name(&self) -> &str {
        &self.logger_name
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn source_file(&self) -> &str {
        &self.source_file
    }

    #[inline]
    pub fn source_line(&self) -> u32 {
        self.source_line
    }

    #[inline]
    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }

    #[inline]
    pub fn thread_name(&self) -> Option<&str> {
        self.thread_name.as_deref()
    }

    #[inline]
    pub fn timestamp(&self) -> &DateTime<Utc> {
        &self.timestamp
    }

    #[inline]
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Parameter at `index`, or [`LoggerError::OutOfRange`]
    pub fn param(&self, index: usize) -> Result<&str> {
        self.params
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| LoggerError::out_of_range(index, self.params.len()))
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }
}
