//! Declarative logger configuration
//!
//! Levels and additivity for a hierarchy can be described as data (for
//! instance loaded from a JSON file by the host) and applied to a registry
//! in one step. The whole configuration is validated before anything is
//! changed.
//!
//! # Examples
//!
//! ```
//! use rust_logger_hierarchy::{LogLevel, LoggerConfig, LoggerRegistry};
//!
//! let config = LoggerConfig::from_json(r#"{
//!     "root_level": "info",
//!     "loggers": [
//!         { "name": "net", "level": "warn" },
//!         { "name": "net.session", "additivity": false }
//!     ]
//! }"#).unwrap();
//!
//! let registry = LoggerRegistry::new();
//! config.apply(&registry).unwrap();
//!
//! let session = registry.get_logger("net.session").unwrap();
//! assert_eq!(session.effective_level(), LogLevel::Warn);
//! assert!(!session.additivity());
//! ```

use super::{
    error::{LoggerError, Result},
    log_level::LogLevel,
    registry::{validate_name, LoggerRegistry},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggerConfig {
    /// Level for the root logger; must not be the `none` sentinel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_level: Option<LogLevel>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub loggers: Vec<LoggerSettings>,
}

/// Settings for one named logger. Unset fields leave the logger untouched;
/// a `none` level makes it inherit again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggerSettings {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<LogLevel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additivity: Option<bool>,
}

impl LoggerSettings {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: None,
            additivity: None,
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    #[must_use]
    pub fn with_additivity(mut self, additivity: bool) -> Self {
        self.additivity = Some(additivity);
        self
    }
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_root_level(mut self, level: LogLevel) -> Self {
        self.root_level = Some(level);
        self
    }

    #[must_use]
    pub fn with_logger(mut self, settings: LoggerSettings) -> Self {
        self.loggers.push(settings);
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every entry without touching any registry
    pub fn validate(&self) -> Result<()> {
        if self.root_level == Some(LogLevel::None) {
            return Err(LoggerError::config(
                "root logger",
                "level must be explicit, not 'none'",
            ));
        }

        for settings in &self.loggers {
            if settings.name.is_empty() {
                if settings.level == Some(LogLevel::None) {
                    return Err(LoggerError::config(
                        "root logger",
                        "level must be explicit, not 'none'",
                    ));
                }
                continue;
            }
            validate_name(&settings.name).map_err(|e| {
                LoggerError::config(format!("logger '{}'", settings.name), e.to_string())
            })?;
        }
        Ok(())
    }

    /// Validate, then set levels and additivity on `registry`
    pub fn apply(&self, registry: &LoggerRegistry) -> Result<()> {
        self.validate()?;

        if let Some(level) = self.root_level {
            registry.root_logger().set_level(level);
        }

        for settings in &self.loggers {
            let logger = registry.get_logger(&settings.name)?;
            if let Some(level) = settings.level {
                logger.set_level(level);
            }
            if let Some(additivity) = settings.additivity {
                logger.set_additivity(additivity);
            }
        }
        Ok(())
    }
}
