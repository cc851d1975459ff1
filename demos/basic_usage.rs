//! Basic logger usage example
//!
//! Demonstrates synchronous console logging at every level, with and without color.
//!
//! Run with: cargo run --example basic_usage

use rust_sink_logger::prelude::*;
use rust_sink_logger::{info, warning};

fn main() -> Result<()> {
    println!("=== Rust Sink Logger - Basic Usage Example ===\n");

    let logger = Logger::builder()
        .mode(LoggingOutputMode::Screen)
        .colorize(true)
        .build()?;

    println!("1. Logging at different levels (DEBUG/INFO on stdout, the rest on stderr):");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warning("This is a warning message");
    logger.error("This is an error message");
    logger.fatal("This is a fatal message, the process keeps running");

    println!("\n2. Context prefix:");
    logger.set_context("[session 7f3a] ");
    logger.info("user signed in");
    info!(logger, "loaded {} items", 12);
    logger.set_context("");
    logger.info("context cleared");

    println!("\n3. Without color:");
    let plain = Logger::builder().mode(LoggingOutputMode::Screen).build()?;
    warning!(plain, "retry {} of {}", 2, 5);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
