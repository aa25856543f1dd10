//! Lifecycle event listener.

use std::sync::Arc;

use crate::event::LifecycleEvent;
use crate::record::LogRecord;
use crate::sink::{Recorder, SinkResult};

/// Writes exactly one record per observed lifecycle event.
///
/// Appends go through the blocking path: the process may be tearing down
/// and an async write is not guaranteed to land before it dies.
#[derive(Clone)]
pub struct Listener {
    recorder: Arc<Recorder>,
}

impl Listener {
    /// Create a listener that appends through `recorder`.
    pub fn new(recorder: Arc<Recorder>) -> Self {
        Self { recorder }
    }

    /// Record one event.
    pub fn on_event(&self, event: &LifecycleEvent) -> SinkResult<LogRecord> {
        tracing::info!(event = %event, "Lifecycle event");
        self.recorder.record_blocking(event.message())
    }

    /// The recorder this listener appends through.
    pub fn recorder(&self) -> &Arc<Recorder> {
        &self.recorder
    }
}
