//! Stamping and failure accounting in front of a sink.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::record::LogRecord;
use crate::sink::{LogSink, SinkResult};

/// Turns messages into stamped records and appends them.
///
/// Every failed append is logged at error level and counted; nothing is
/// retried. The failure count decides whether a clean exit reports success.
pub struct Recorder {
    sink: Arc<dyn LogSink>,
    failures: AtomicUsize,
}

impl Recorder {
    /// Wrap a sink.
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self {
            sink,
            failures: AtomicUsize::new(0),
        }
    }

    /// Stamp `message` and append it on the blocking path.
    pub fn record_blocking(&self, message: impl Into<String>) -> SinkResult<LogRecord> {
        let record = LogRecord::now(message);
        match self.sink.append_blocking(&record) {
            Ok(()) => Ok(record),
            Err(e) => {
                self.note_failure(&record, &e);
                Err(e)
            }
        }
    }

    /// Stamp `message` and append it on the async path.
    pub async fn record_async(&self, message: impl Into<String>) -> SinkResult<LogRecord> {
        let record = LogRecord::now(message);
        match self.sink.append_async(&record).await {
            Ok(()) => Ok(record),
            Err(e) => {
                self.note_failure(&record, &e);
                Err(e)
            }
        }
    }

    /// Number of appends that have failed so far.
    pub fn failures(&self) -> usize {
        self.failures.load(Ordering::SeqCst)
    }

    fn note_failure(&self, record: &LogRecord, error: &crate::sink::SinkError) {
        let failures = self.failures.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::error!(
            record = %record.message,
            error = %error,
            failures,
            "Failed to append log record"
        );
    }
}
