//! Basic logger hierarchy usage example
//!
//! Demonstrates level inheritance, additive propagation and the built-in
//! appenders and layouts.
//!
//! Run with: cargo run --example basic_usage

use rust_logger_hierarchy::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Logger Hierarchy - Basic Usage Example ===\n");

    // Root logger writes everything to the console
    let root = root_logger();
    let console = ConsoleAppender::with_layout(Arc::new(PatternLayout::new(
        "%d [%-5p] %-12.12c %F:%L",
    )))
    .with_colors(true);
    root.add_appender(Arc::new(console));

    println!("1. Logging at different levels:");
    let app = get_logger("app")?;
    app.debug("This is a debug message", file!(), line!());
    app.info("This is an info message", file!(), line!());
    app.warn("This is a warning message", file!(), line!());
    app.error("This is an error message", file!(), line!());
    app.fatal("This is a fatal message", file!(), line!());

    println!("\n2. Level inheritance:");
    let session = get_logger("app.net.session")?;
    get_logger("app.net")?.set_level(LogLevel::Warn);
    println!(
        "   'app.net' set to WARN, 'app.net.session' inherits {}:",
        session.effective_level()
    );
    session.info("Info message (hidden)", file!(), line!());
    session.warn("Warning message (visible)", file!(), line!());

    println!("\n3. Additivity:");
    let audit_stream = Arc::new(MemoryTextStream::new());
    let audit = get_logger("app.audit")?;
    audit.add_appender(Arc::new(
        TextStreamAppender::new(audit_stream.clone()).with_layout(Arc::new(SimpleLayout)),
    ));
    audit.set_additivity(false);
    audit.info("user logged in", file!(), line!());
    println!("   'app.audit' is not additive, the console stays quiet.");
    println!("   audit stream captured: {:?}", audit_stream.lines());

    println!("\n4. Configuration from JSON:");
    LoggerConfig::from_json(r#"{ "loggers": [ { "name": "app.net", "level": "none" } ] }"#)?
        .apply(LoggerRegistry::global())?;
    session.info("Info message (visible again)", file!(), line!());

    println!("\n5. Platform sinks:");
    println!(
        "   debugger output supported: {}, platform log supported: {}",
        DebugOutputAppender::is_supported(),
        PlatformLogAppender::is_supported()
    );

    let metrics = LoggerRegistry::global().metrics();
    println!(
        "\nDispatched {} events, {} appends, {} failures",
        metrics.dispatched_count(),
        metrics.appended_count(),
        metrics.failed_append_count()
    );

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
