//! Property-based tests for rust_logger_hierarchy using proptest

use proptest::prelude::*;
use rust_logger_hierarchy::prelude::*;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
        Just(LogLevel::None),
    ]
}

fn explicit_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

fn logger_name() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z][a-zA-Z0-9_]{0,6}", 1..5).prop_map(|segments| segments.join("."))
}

fn event_named(name: &str) -> LoggingEvent {
    LoggingEvent::new(LogLevel::Info, name, "message", "prop.rs", 1)
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);

        let lowered: LogLevel = level.to_str().to_lowercase().parse().unwrap();
        prop_assert_eq!(level, lowered);
    }

    /// Test that LogLevel ordering matches discriminant order
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
    }
}

// ============================================================================
// Hierarchy Tests
// ============================================================================

proptest! {
    /// Test that names differing only in case resolve to the same node
    #[test]
    fn test_get_logger_case_insensitive(name in logger_name()) {
        let registry = LoggerRegistry::new();
        let lower = registry.get_logger(&name.to_lowercase()).unwrap();
        let upper = registry.get_logger(&name.to_uppercase()).unwrap();
        let original = registry.get_logger(&name).unwrap();

        prop_assert!(Arc::ptr_eq(&lower, &upper));
        prop_assert!(Arc::ptr_eq(&lower, &original));
        prop_assert_eq!(original.name(), name.to_lowercase());
    }

    /// Test that the effective level is that of the nearest explicit ancestor
    #[test]
    fn test_effective_level_nearest_ancestor(
        root_level in explicit_level(),
        levels in prop::collection::vec(any_level(), 1..6),
    ) {
        let registry = LoggerRegistry::new();
        registry.root_logger().set_level(root_level);

        let mut name = String::new();
        let mut expected = root_level;
        for (depth, level) in levels.iter().enumerate() {
            if depth > 0 {
                name.push('.');
            }
            name.push_str(&format!("n{}", depth));

            let logger = registry.get_logger(&name).unwrap();
            logger.set_level(*level);
            if level.is_explicit() {
                expected = *level;
            }
            prop_assert_eq!(logger.effective_level(), expected);
        }
    }
}

// ============================================================================
// Pattern Layout Tests
// ============================================================================

proptest! {
    /// Test that truncation keeps the trailing characters
    #[test]
    fn test_pattern_truncation_keeps_suffix(name in "[a-zé.]{0,24}", max in 0usize..16) {
        let layout = PatternLayout::new(format!("%.{}c", max));
        let output = layout.format(&event_named(&name));

        let chars: Vec<char> = name.chars().collect();
        let keep = chars.len().min(max);
        let expected: String = chars[chars.len() - keep..].iter().collect();
        prop_assert_eq!(output, expected);
    }

    /// Test that padding reaches at least the minimum width on the right side
    #[test]
    fn test_pattern_padding_min_width(
        name in "[a-z.]{0,12}",
        min in 0usize..20,
        left in any::<bool>(),
    ) {
        let pattern = if left { format!("%-{}c", min) } else { format!("%{}c", min) };
        let output = PatternLayout::new(pattern).format(&event_named(&name));

        prop_assert!(output.chars().count() >= min);
        prop_assert_eq!(output.trim(), name.trim());
        if left {
            prop_assert!(output.starts_with(&name));
        } else {
            prop_assert!(output.ends_with(&name));
        }
    }

    /// Test that patterns without directives are copied verbatim
    #[test]
    fn test_literal_pattern_passthrough(literal in "[^%]{0,40}") {
        let layout = PatternLayout::new(literal.clone());
        prop_assert_eq!(layout.format(&event_named("any.logger")), literal);
    }

    /// Test that reserved letters survive with their modifiers
    #[test]
    fn test_reserved_directives_passthrough(
        letter in prop_oneof![Just('l'), Just('m'), Just('r')],
        min in 0usize..9,
    ) {
        let pattern = format!("<%-{}{}>", min, letter);
        let output = PatternLayout::new(pattern.clone()).format(&event_named("x"));
        prop_assert_eq!(output, pattern);
    }
}

// ============================================================================
// LoggingEvent Tests
// ============================================================================

proptest! {
    /// Test that params are indexable and out-of-range access fails
    #[test]
    fn test_event_params(params in prop::collection::vec(".{0,8}", 0..6), extra in 0usize..4) {
        let event = event_named("p").with_params(params.clone());

        prop_assert_eq!(event.param_count(), params.len());
        for (i, param) in params.iter().enumerate() {
            prop_assert_eq!(event.param(i).unwrap(), param.as_str());
        }
        let is_out_of_range = matches!(
            event.param(params.len() + extra),
            Err(LoggerError::OutOfRange { .. })
        );
        prop_assert!(is_out_of_range);
    }
}
