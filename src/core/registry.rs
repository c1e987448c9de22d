//! Logger registry: the root logger and dotted-name resolution
//!
//! The process-wide registry is created on first use behind a `OnceLock`, so
//! racing first callers can never observe two roots or a half-built one.
//! Independent registries can be created with [`LoggerRegistry::new`] when a
//! component needs an isolated hierarchy.
//!
//! # Examples
//!
//! ```
//! use rust_logger_hierarchy::{LogLevel, LoggerRegistry};
//! use std::sync::Arc;
//!
//! let registry = LoggerRegistry::new();
//! let session = registry.get_logger("net.session").unwrap();
//! let same = registry.get_logger("NET.Session").unwrap();
//! assert!(Arc::ptr_eq(&session, &same));
//!
//! registry.get_logger("net").unwrap().set_level(LogLevel::Warn);
//! assert_eq!(session.effective_level(), LogLevel::Warn);
//! ```

use super::{
    error::{LoggerError, Result},
    logger::Logger,
    metrics::LoggerMetrics,
};
use std::sync::{Arc, OnceLock};

static GLOBAL_REGISTRY: OnceLock<LoggerRegistry> = OnceLock::new();

#[derive(Debug)]
pub struct LoggerRegistry {
    root: Arc<Logger>,
    metrics: Arc<LoggerMetrics>,
}

impl LoggerRegistry {
    #[must_use]
    pub fn new() -> Self {
        let metrics = Arc::new(LoggerMetrics::new());
        Self {
            root: Logger::new_root(Arc::clone(&metrics)),
            metrics,
        }
    }

    /// The process-wide registry, created on first access
    pub fn global() -> &'static LoggerRegistry {
        GLOBAL_REGISTRY.get_or_init(LoggerRegistry::new)
    }

    pub fn root_logger(&self) -> Arc<Logger> {
        Arc::clone(&self.root)
    }

    /// Resolve `name` to its logger, creating missing nodes along the way.
    ///
    /// Segments are matched case-insensitively and an empty name yields the
    /// root. Names with an empty segment (leading, trailing or doubled dots)
    /// are rejected before any node is created.
    pub fn get_logger(&self, name: &str) -> Result<Arc<Logger>> {
        if name.is_empty() {
            return Ok(self.root_logger());
        }
        validate_name(name)?;

        let mut logger = self.root_logger();
        for segment in name.split('.') {
            logger = logger.child_or_insert(segment);
        }
        Ok(logger)
    }

    /// Look `name` up without creating anything
    pub fn find_logger(&self, name: &str) -> Option<Arc<Logger>> {
        if name.is_empty() {
            return Some(self.root_logger());
        }
        validate_name(name).ok()?;

        let mut logger = self.root_logger();
        for segment in name.split('.') {
            logger = logger.child(segment)?;
        }
        Some(logger)
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn validate_name(name: &str) -> Result<()> {
    match name.split('.').position(str::is_empty) {
        Some(position) => Err(LoggerError::invalid_name(
            name,
            format!("empty segment at position {}", position),
        )),
        None => Ok(()),
    }
}

/// Root logger of the process-wide registry
pub fn root_logger() -> Arc<Logger> {
    LoggerRegistry::global().root_logger()
}

/// Resolve `name` in the process-wide registry
pub fn get_logger(name: &str) -> Result<Arc<Logger>> {
    LoggerRegistry::global().get_logger(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;

    #[test]
    fn test_empty_name_is_root() {
        let registry = LoggerRegistry::new();
        let root = registry.get_logger("").unwrap();
        assert!(root.is_root());
        assert!(Arc::ptr_eq(&root, &registry.root_logger()));
    }

    #[test]
    fn test_get_logger_creates_path() {
        let registry = LoggerRegistry::new();
        let leaf = registry.get_logger("a.b.c").unwrap();
        assert_eq!(leaf.name(), "a.b.c");

        let b = registry.find_logger("a.b").expect("intermediate node created");
        assert!(Arc::ptr_eq(&leaf.parent().unwrap(), &b));
        assert_eq!(b.level(), LogLevel::None);
    }

    #[test]
    fn test_case_insensitive_identity() {
        let registry = LoggerRegistry::new();
        let lower = registry.get_logger("a.b.c").unwrap();
        let upper = registry.get_logger("A.B.C").unwrap();
        let again = registry.get_logger("a.b.c").unwrap();
        assert!(Arc::ptr_eq(&lower, &upper));
        assert!(Arc::ptr_eq(&lower, &again));
        assert_eq!(upper.name(), "a.b.c");
    }

    #[test]
    fn test_empty_segments_rejected() {
        let registry = LoggerRegistry::new();
        for name in [".a", "a.", "a..b", "."] {
            let err = registry.get_logger(name).unwrap_err();
            assert!(
                matches!(err, LoggerError::InvalidLoggerName { .. }),
                "{} should be rejected",
                name
            );
        }
        assert!(registry.root_logger().children().is_empty());
    }

    #[test]
    fn test_find_does_not_create() {
        let registry = LoggerRegistry::new();
        assert!(registry.find_logger("missing").is_none());
        assert!(registry.root_logger().children().is_empty());
    }

    #[test]
    fn test_registries_are_isolated() {
        let one = LoggerRegistry::new();
        let two = LoggerRegistry::new();
        one.get_logger("shared").unwrap().set_level(LogLevel::Fatal);
        assert_eq!(
            two.get_logger("shared").unwrap().effective_level(),
            LogLevel::Debug
        );
    }

    #[test]
    fn test_global_root_is_singleton() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(root_logger))
            .collect();
        let roots: Vec<_> = handles
            .into_iter()
            .map(|h| h.join().expect("thread panicked"))
            .collect();

        for root in &roots {
            assert!(Arc::ptr_eq(root, &roots[0]));
        }
    }
}
