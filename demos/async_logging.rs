//! Async logging example
//!
//! Demonstrates background delivery from several threads and draining on shutdown.
//!
//! Run with: cargo run --example async_logging

use rust_sink_logger::prelude::*;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== Rust Sink Logger - Async Logging Example ===\n");

    let logger = Logger::builder()
        .mode(LoggingOutputMode::Both)
        .file_action(LoggingFileAction::Delete)
        .directory("demo_logs")
        .file("async_test.log")
        .async_mode(true)
        .build()?;

    println!("1. Queueing messages:");
    for i in 0..100 {
        logger.info(format!("Message #{}", i));
    }
    println!("   Queued 100 messages; the worker writes them in order");

    println!("\n2. Multi-threaded logging:");
    let logger = Arc::new(logger);

    let handles: Vec<_> = (0..5)
        .map(|thread_id| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..20 {
                    logger.info(format!("Thread {} - Message {}", thread_id, i));
                    thread::sleep(Duration::from_millis(10));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    // Blocks until every queued record is written.
    logger.shutdown();
    logger.info("dropped: logged after shutdown");

    let metrics = logger.metrics();
    println!(
        "\n   delivered {} / enqueued {} / dropped {}",
        metrics.delivered_count(),
        metrics.enqueued_count(),
        metrics.dropped_count()
    );

    println!("\n=== Example completed successfully! ===");
    println!("Check 'demo_logs/async_test.log' for file output");

    Ok(())
}
