//! Asynchronous delivery queue
//!
//! Producers hand records to [`DeliveryQueue::enqueue`]; one background worker
//! replays them through the [`SinkRouter`] in the order they were accepted.
//! [`DeliveryQueue::stop`] drains everything still queued before it returns.

use super::error::{LoggerError, Result};
use super::{log_record::LogRecord, metrics::LoggerMetrics, router::SinkRouter};
use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::{Condvar, Mutex};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

const WORKER_THREAD_NAME: &str = "log-delivery";

/// Lifecycle of a [`DeliveryQueue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueState {
    /// Created, worker not started; enqueueing is a programming error
    Uninitialized,
    /// Accepting records
    Running,
    /// Stop requested; the worker is draining, new records are dropped
    ShuttingDown,
    /// Drained and worker joined; new records are dropped
    Stopped,
}

struct QueueInner {
    state: QueueState,
    sender: Option<Sender<LogRecord>>,
    worker: Option<thread::JoinHandle<()>>,
}

pub struct DeliveryQueue {
    router: Arc<SinkRouter>,
    metrics: Arc<LoggerMetrics>,
    inner: Mutex<QueueInner>,
    stopped: Condvar,
}

impl DeliveryQueue {
    pub fn new(router: Arc<SinkRouter>, metrics: Arc<LoggerMetrics>) -> Self {
        Self {
            router,
            metrics,
            inner: Mutex::new(QueueInner {
                state: QueueState::Uninitialized,
                sender: None,
                worker: None,
            }),
            stopped: Condvar::new(),
        }
    }

    pub fn state(&self) -> QueueState {
        self.inner.lock().state
    }

    /// Records accepted but not yet picked up by the worker
    pub fn pending(&self) -> usize {
        self.inner
            .lock()
            .sender
            .as_ref()
            .map_or(0, |sender| sender.len())
    }

    /// Launch the worker. Only the first call on an uninitialized queue does
    /// anything.
    pub fn start(&self) -> Result<()> {
        let mut inner = self.inner.lock();
        if inner.state != QueueState::Uninitialized {
            return Ok(());
        }

        let (sender, receiver) = unbounded();
        let router = Arc::clone(&self.router);
        let handle = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || Self::run_worker(&router, receiver))
            .map_err(|e| {
                LoggerError::io_operation("starting delivery worker", "could not spawn thread", e)
            })?;

        inner.sender = Some(sender);
        inner.worker = Some(handle);
        inner.state = QueueState::Running;
        Ok(())
    }

    /// Queue `record` for the worker.
    ///
    /// Returns `false` when the record was dropped because shutdown has begun.
    ///
    /// # Panics
    ///
    /// Panics if the queue was never started.
    pub fn enqueue(&self, record: LogRecord) -> bool {
        let inner = self.inner.lock();
        let state = inner.state;
        match state {
            QueueState::Uninitialized => {
                panic!("Delivery queue is uninitialized. Start it before use.")
            }
            QueueState::Running => {
                // Sending under the lock fixes the delivery order to the lock order.
                let sent = inner
                    .sender
                    .as_ref()
                    .is_some_and(|sender| sender.send(record).is_ok());
                if sent {
                    self.metrics.record_enqueued();
                } else {
                    self.metrics.record_dropped();
                }
                sent
            }
            QueueState::ShuttingDown | QueueState::Stopped => {
                self.metrics.record_dropped();
                false
            }
        }
    }

    /// Deliver everything still queued, then stop the worker.
    ///
    /// Blocks until the queue is drained. Safe to call more than once and from
    /// several threads; later callers wait for the first to finish.
    pub fn stop(&self) {
        let mut inner = self.inner.lock();
        let state = inner.state;
        match state {
            QueueState::Uninitialized => {
                inner.state = QueueState::Stopped;
                self.stopped.notify_all();
            }
            QueueState::Running => {
                inner.state = QueueState::ShuttingDown;
                // Dropping the only sender lets the worker finish once the channel is empty.
                drop(inner.sender.take());
                let worker = inner.worker.take();
                drop(inner);

                if let Some(handle) = worker {
                    if let Err(e) = handle.join() {
                        eprintln!("[LOGGER ERROR] Delivery worker panicked during shutdown: {:?}", e);
                    }
                }

                let mut inner = self.inner.lock();
                inner.state = QueueState::Stopped;
                self.stopped.notify_all();
            }
            QueueState::ShuttingDown => {
                while inner.state == QueueState::ShuttingDown {
                    self.stopped.wait(&mut inner);
                }
            }
            QueueState::Stopped => {}
        }
    }

    fn run_worker(router: &SinkRouter, receiver: Receiver<LogRecord>) {
        // Blocks while idle; ends once the sender is dropped and every record is delivered.
        for record in receiver.iter() {
            let delivered = panic::catch_unwind(AssertUnwindSafe(|| router.deliver(&record)));
            if let Err(panic_info) = delivered {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                eprintln!(
                    "[LOGGER FATAL] Delivery of a {} record failed: {}. Aborting.",
                    record.level, panic_msg
                );
                std::process::abort();
            }
        }
    }
}

impl Drop for DeliveryQueue {
    fn drop(&mut self) {
        self.stop();
    }
}
