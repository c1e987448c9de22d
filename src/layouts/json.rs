//! JSON layout for structured output
//!
//! Each event becomes a single-line JSON object (JSONL), compatible with log
//! aggregation tools like ELK or Loki.

use crate::core::{Layout, LoggingEvent, TimestampFormat};
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct JsonLayout {
    timestamp_format: TimestampFormat,
    pretty: bool,
}

impl JsonLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Multi-line, indented output
    pub fn new_pretty() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    fn timestamp_value(&self, event: &LoggingEvent) -> Value {
        match self.timestamp_format {
            TimestampFormat::UnixMillis => Value::Number(event.timestamp().timestamp_millis().into()),
            _ => Value::String(self.timestamp_format.format(event.timestamp())),
        }
    }
}

impl Layout for JsonLayout {
    fn format(&self, event: &LoggingEvent) -> String {
        let mut record = serde_json::to_value(event).unwrap_or_default();
        if let Some(object) = record.as_object_mut() {
            object.insert("timestamp".to_string(), self.timestamp_value(event));
            object.insert(
                "level".to_string(),
                Value::String(event.level().to_str().to_string()),
            );
        }

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&record)
        } else {
            serde_json::to_string(&record)
        };
        rendered.unwrap_or_default()
    }
}
