//! Logger tree node
//!
//! Every logger owns its children (keyed by lower-cased name segment) and
//! holds a non-owning link to its parent. The parent link is only used to
//! resolve the effective level and to forward events upward while the
//! additivity flag allows it.

use super::{
    appender::Appender, log_level::LogLevel, logging_event::LoggingEvent,
    metrics::LoggerMetrics,
};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

/// Level the root logger starts with; the lowest real severity
pub const ROOT_LEVEL: LogLevel = LogLevel::Debug;

type AppenderList = Arc<Vec<Arc<dyn Appender>>>;

pub struct Logger {
    /// Lower-cased name segment; empty for the root
    segment: String,
    /// Dotted name from the root, cached since the tree never re-parents
    full_name: String,
    parent: Option<Weak<Logger>>,
    level: RwLock<LogLevel>,
    additivity: AtomicBool,
    children: RwLock<HashMap<String, Arc<Logger>>>,
    /// Copy-on-write: dispatch iterates a snapshot, mutations swap the list
    appenders: RwLock<AppenderList>,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    pub(crate) fn new_root(metrics: Arc<LoggerMetrics>) -> Arc<Self> {
        Arc::new(Self {
            segment: String::new(),
            full_name: String::new(),
            parent: None,
            level: RwLock::new(ROOT_LEVEL),
            additivity: AtomicBool::new(false),
            children: RwLock::new(HashMap::new()),
            appenders: RwLock::new(Arc::new(Vec::new())),
            metrics,
        })
    }

    fn new_child(parent: &Arc<Logger>, segment: &str) -> Arc<Self> {
        let full_name = if parent.is_root() {
            segment.to_string()
        } else {
            format!("{}.{}", parent.full_name, segment)
        };

        Arc::new(Self {
            segment: segment.to_string(),
            full_name,
            parent: Some(Arc::downgrade(parent)),
            level: RwLock::new(LogLevel::None),
            additivity: AtomicBool::new(true),
            children: RwLock::new(HashMap::new()),
            appenders: RwLock::new(Arc::new(Vec::new())),
            metrics: Arc::clone(&parent.metrics),
        })
    }

    /// Child for `segment`, created if missing. Concurrent callers asking for
    /// the same missing segment all get the node inserted first.
    pub(crate) fn child_or_insert(self: &Arc<Self>, segment: &str) -> Arc<Logger> {
        let key = segment.to_lowercase();

        if let Some(child) = self.children.read().get(&key) {
            return Arc::clone(child);
        }

        let mut children = self.children.write();
        let child = children
            .entry(key)
            .or_insert_with_key(|key| Logger::new_child(self, key));
        Arc::clone(child)
    }

    /// Existing child for `segment`, matched case-insensitively
    pub fn child(&self, segment: &str) -> Option<Arc<Logger>> {
        self.children.read().get(&segment.to_lowercase()).cloned()
    }

    /// Snapshot of the direct children
    pub fn children(&self) -> Vec<Arc<Logger>> {
        self.children.read().values().cloned().collect()
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Full dotted name; empty for the root
    #[inline]
    pub fn name(&self) -> &str {
        &self.full_name
    }

    /// Own name segment, lower-cased
    #[inline]
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// Parent logger; `None` for the root or once the owning registry is gone
    pub fn parent(&self) -> Option<Arc<Logger>> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }

    /// Explicit level, or [`LogLevel::None`] when inherited
    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    /// Set the explicit level; [`LogLevel::None`] reverts to inheriting.
    ///
    /// # Panics
    ///
    /// Panics when asked to unset the root's level.
    pub fn set_level(&self, level: LogLevel) {
        assert!(
            level.is_explicit() || !self.is_root(),
            "root logger must keep an explicit level"
        );
        *self.level.write() = level;
    }

    /// Level used to gate log calls: the nearest explicit level walking up
    /// from this logger.
    pub fn effective_level(&self) -> LogLevel {
        let level = self.level();
        if level.is_explicit() {
            return level;
        }

        let mut next = self.parent();
        while let Some(logger) = next {
            let level = logger.level();
            if level.is_explicit() {
                return level;
            }
            next = logger.parent();
        }

        // Detached from a dropped registry
        ROOT_LEVEL
    }

    pub fn additivity(&self) -> bool {
        self.additivity.load(Ordering::Acquire)
    }

    pub fn set_additivity(&self, additivity: bool) {
        self.additivity.store(additivity, Ordering::Release);
    }

    /// Whether a call at `level` would produce an event
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.effective_level()
    }

    /// Attach `appender`; attaching the same appender twice is a no-op
    pub fn add_appender(&self, appender: Arc<dyn Appender>) {
        let mut appenders = self.appenders.write();
        if appenders.iter().any(|a| Arc::ptr_eq(a, &appender)) {
            return;
        }
        let mut updated = Vec::with_capacity(appenders.len() + 1);
        updated.extend(appenders.iter().cloned());
        updated.push(appender);
        *appenders = Arc::new(updated);
    }

    /// Detach `appender`; returns whether it was attached
    pub fn remove_appender(&self, appender: &Arc<dyn Appender>) -> bool {
        let mut appenders = self.appenders.write();
        if !appenders.iter().any(|a| Arc::ptr_eq(a, appender)) {
            return false;
        }
        let updated: Vec<_> = appenders
            .iter()
            .filter(|a| !Arc::ptr_eq(a, appender))
            .cloned()
            .collect();
        *appenders = Arc::new(updated);
        true
    }

    pub fn remove_all_appenders(&self) {
        *self.appenders.write() = Arc::new(Vec::new());
    }

    /// Snapshot of the attached appenders in attachment order
    pub fn appenders(&self) -> Vec<Arc<dyn Appender>> {
        self.appenders.read().iter().cloned().collect()
    }

    /// Log `message` if `level` passes the effective level.
    ///
    /// # Panics
    ///
    /// Panics when `level` is the [`LogLevel::None`] sentinel.
    pub fn log(&self, level: LogLevel, message: impl Into<String>, source_file: &str, source_line: u32) {
        self.log_with_params(level, message, source_file, source_line, std::iter::empty::<String>());
    }

    /// [`Logger::log`] with an ordered list of message parameters
    ///
    /// # Panics
    ///
    /// Panics when `level` is the [`LogLevel::None`] sentinel.
    pub fn log_with_params<I, S>(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        source_file: &str,
        source_line: u32,
        params: I,
    ) where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        assert!(level.is_explicit(), "cannot log at the NONE sentinel level");
        if !self.is_enabled(level) {
            return;
        }

        let event = LoggingEvent::new(level, self.full_name.as_str(), message, source_file, source_line)
            .with_params(params);
        self.dispatch(&event);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>, source_file: &str, source_line: u32) {
        self.log(LogLevel::Debug, message, source_file, source_line);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>, source_file: &str, source_line: u32) {
        self.log(LogLevel::Info, message, source_file, source_line);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>, source_file: &str, source_line: u32) {
        self.log(LogLevel::Warn, message, source_file, source_line);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>, source_file: &str, source_line: u32) {
        self.log(LogLevel::Error, message, source_file, source_line);
    }

    #[inline]
    pub fn fatal(&self, message: impl Into<String>, source_file: &str, source_line: u32) {
        self.log(LogLevel::Fatal, message, source_file, source_line);
    }

    /// Hand `event` to this logger's appenders, then to each ancestor's while
    /// additivity holds. The logger that stops propagation still appends.
    ///
    /// # Panics
    ///
    /// Panics when `event` carries the [`LogLevel::None`] sentinel.
    pub fn dispatch(&self, event: &LoggingEvent) {
        assert!(
            event.level().is_explicit(),
            "cannot dispatch an event at the NONE sentinel level"
        );
        self.metrics.record_dispatched();
        self.call_appenders(event);
        if !self.additivity() {
            return;
        }

        let mut next = self.parent();
        while let Some(logger) = next {
            logger.call_appenders(event);
            if !logger.additivity() {
                break;
            }
            next = logger.parent();
        }
    }

    /// A failing appender is reported and counted; the others still run.
    fn call_appenders(&self, event: &LoggingEvent) {
        let snapshot = Arc::clone(&*self.appenders.read());

        for appender in snapshot.iter() {
            match appender.do_append(event) {
                Ok(()) => {
                    self.metrics.record_appended();
                }
                Err(e) => {
                    eprintln!(
                        "[LOGGER ERROR] Appender '{}' on logger '{}' failed: {}",
                        appender.name(),
                        self.full_name,
                        e
                    );
                    self.metrics.record_failed_append();
                }
            }
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.full_name)
            .field("level", &self.level())
            .field("additivity", &self.additivity())
            .field("appenders", &self.appenders.read().len())
            .finish()
    }
}
