//! File logging example
//!
//! Demonstrates logging to the console and a file at once, and the startup action
//! applied to a log file left behind by a previous run.
//!
//! Run with: cargo run --example file_logging

use rust_sink_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust Sink Logger - File Logging Example ===\n");

    let logger = Logger::builder()
        .mode(LoggingOutputMode::Both)
        .file_action(LoggingFileAction::Compress)
        .directory("demo_logs")
        .file("application.log")
        .colorize(true)
        .build()?;

    match logger.startup_outcome() {
        Some(StartupOutcome::Compressed(archive)) => {
            println!("Previous log compressed to {}", archive.display())
        }
        Some(outcome) => println!("Startup action result: {:?}", outcome),
        None => {}
    }

    println!("\n1. Logging to both console and file:");
    logger.info("Application started");
    logger.debug("Loading configuration...");
    logger.warning("Using default settings for some options");
    logger.error("Failed to load optional plugin");

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        logger.info(format!("Processing item {}/5", i));
        if i == 3 {
            logger.warning("Item 3 took longer than expected");
        }
    }

    logger.info("All operations completed");

    println!("\n=== Example completed successfully! ===");
    if let Some(path) = logger.log_path() {
        println!("Check '{}' for the uncolored file output", path.display());
    }
    println!("Run again to see the previous log compressed");

    Ok(())
}
