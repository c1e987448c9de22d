//! Pattern layout: a printf-like mini-language
//!
//! A directive is `%`, an optional `-` (left-justify), an optional minimum
//! field width, an optional `.` plus maximum field width, then one letter:
//!
//! | letter | output                                  |
//! |--------|-----------------------------------------|
//! | `c`    | full logger name                        |
//! | `d`    | timestamp (ISO 8601 by default)         |
//! | `F`    | source file                             |
//! | `L`    | source line                             |
//! | `n`    | platform line terminator                |
//! | `p`    | level name                              |
//! | `t`    | id of the logging thread                |
//! | `%`    | a literal percent sign                  |
//!
//! `l`, `m` and `r` are reserved and, like any unknown letter or a directive
//! cut off by the end of the pattern, are copied to the output unchanged.
//!
//! Fields shorter than the minimum width are padded with spaces (on the right
//! when left-justified, otherwise on the left). Fields longer than the maximum
//! width keep their trailing characters: `%.3c` renders `alpha` as `pha`.
//!
//! # Examples
//!
//! ```
//! use rust_logger_hierarchy::layouts::PatternLayout;
//! use rust_logger_hierarchy::{Layout, LogLevel, LoggingEvent};
//!
//! let layout = PatternLayout::new("[%-5p] %c");
//! let event = LoggingEvent::new(LogLevel::Info, "net.session", "connected", "session.rs", 10);
//! assert_eq!(layout.format(&event), "[INFO ] net.session");
//! ```

use crate::core::{Layout, LoggingEvent, TimestampFormat, LINE_TERMINATOR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    LoggerName,
    Date,
    SourceFile,
    SourceLine,
    LineTerminator,
    Level,
    Thread,
    Percent,
}

impl Field {
    fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'c' => Some(Field::LoggerName),
            'd' => Some(Field::Date),
            'F' => Some(Field::SourceFile),
            'L' => Some(Field::SourceLine),
            'n' => Some(Field::LineTerminator),
            'p' => Some(Field::Level),
            't' => Some(Field::Thread),
            '%' => Some(Field::Percent),
            // l, m and r are reserved
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct FieldSpec {
    left_justify: bool,
    min_width: Option<usize>,
    max_width: Option<usize>,
}

impl FieldSpec {
    fn apply(&self, value: String) -> String {
        let mut value = value;

        if let Some(min) = self.min_width {
            let len = value.chars().count();
            if len < min {
                value = self.pad(value, min - len);
            }
        }

        if let Some(max) = self.max_width {
            let len = value.chars().count();
            if len > max {
                value = value.chars().skip(len - max).collect();
            }
        }

        value
    }

    /// Add `fill` spaces on the justified side. Widths come straight from
    /// the pattern, so an unallocatable fill leaves the value unpadded.
    fn pad(&self, value: String, fill: usize) -> String {
        let mut padded = String::new();
        if padded.try_reserve(fill.saturating_add(value.len())).is_err() {
            return value;
        }

        if self.left_justify {
            padded.push_str(&value);
            padded.extend(std::iter::repeat(' ').take(fill));
        } else {
            padded.extend(std::iter::repeat(' ').take(fill));
            padded.push_str(&value);
        }
        padded
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Field, FieldSpec),
}

/// Read a run of decimal digits starting at `pos`
fn read_width(chars: &[char], mut pos: usize) -> (Option<usize>, usize) {
    let mut width: Option<usize> = None;
    while let Some(digit) = chars.get(pos).and_then(|c| c.to_digit(10)) {
        let current = width.unwrap_or(0);
        width = Some(current.saturating_mul(10).saturating_add(digit as usize));
        pos += 1;
    }
    (width, pos)
}

/// Parse the directive whose `%` is at `start`. Returns the modifiers, the
/// directive letter and the index just past it, or `None` when the pattern
/// ends first.
fn read_directive(chars: &[char], start: usize) -> Option<(FieldSpec, char, usize)> {
    let mut spec = FieldSpec::default();
    let mut pos = start + 1;

    if *chars.get(pos)? == '-' {
        spec.left_justify = true;
        pos += 1;
    }

    let (min_width, next) = read_width(chars, pos);
    spec.min_width = min_width;
    pos = next;

    if *chars.get(pos)? == '.' {
        let (max_width, next) = read_width(chars, pos + 1);
        spec.max_width = max_width;
        pos = next;
    }

    let letter = *chars.get(pos)?;
    Some((spec, letter, pos + 1))
}

fn parse(pattern: &str) -> Vec<Segment> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut pos = 0;

    while pos < chars.len() {
        if chars[pos] != '%' {
            literal.push(chars[pos]);
            pos += 1;
            continue;
        }

        let Some((spec, letter, next)) = read_directive(&chars, pos) else {
            literal.extend(&chars[pos..]);
            break;
        };

        match Field::from_letter(letter) {
            Some(field) => {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Field(field, spec));
            }
            None => literal.extend(&chars[pos..next]),
        }
        pos = next;
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    segments
}

/// Formats events according to a pattern string parsed once at construction
#[derive(Debug, Clone)]
pub struct PatternLayout {
    pattern: String,
    segments: Vec<Segment>,
    timestamp_format: TimestampFormat,
    header: Option<String>,
    footer: Option<String>,
}

impl PatternLayout {
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        Self {
            segments: parse(&pattern),
            pattern,
            timestamp_format: TimestampFormat::default(),
            header: None,
            footer: None,
        }
    }

    /// Set how `%d` renders the event timestamp
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Text written once at the start of a text stream
    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Text written once at the end of a text stream
    #[must_use]
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    fn render(&self, field: Field, event: &LoggingEvent) -> String {
        match field {
            Field::LoggerName => event.logger_name().to_string(),
            Field::Date => self.timestamp_format.format(event.timestamp()),
            Field::SourceFile => event.source_file().to_string(),
            Field::SourceLine => event.source_line().to_string(),
            Field::LineTerminator => LINE_TERMINATOR.to_string(),
            Field::Level => event.level().to_str().to_string(),
            Field::Thread => event.thread_id().to_string(),
            Field::Percent => "%".to_string(),
        }
    }
}

impl Layout for PatternLayout {
    fn format(&self, event: &LoggingEvent) -> String {
        let mut output = String::with_capacity(self.pattern.len() + event.logger_name().len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Field(field, spec) => {
                    output.push_str(&spec.apply(self.render(*field, event)));
                }
            }
        }
        output
    }

    fn append_header(&self, output: &mut String) {
        if let Some(header) = &self.header {
            output.push_str(header);
        }
    }

    fn append_footer(&self, output: &mut String) {
        if let Some(footer) = &self.footer {
            output.push_str(footer);
        }
    }
}
