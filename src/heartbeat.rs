//! One-shot heartbeat timer.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::record::TIMEOUT_MESSAGE;
use crate::sink::Recorder;

/// Spawn a task that appends [`TIMEOUT_MESSAGE`] once `delay` has elapsed.
///
/// The handle is only used to observe completion. Dropping it detaches the
/// task; process exit abandons it.
pub fn spawn(recorder: Arc<Recorder>, delay: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        // Failures are already reported by the recorder.
        let _ = recorder.record_async(TIMEOUT_MESSAGE).await;
        tracing::debug!(delay_ms = delay.as_millis() as u64, "Heartbeat elapsed");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::FileSink;

    #[tokio::test]
    async fn writes_timeout_record_after_delay() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.json");
        let recorder = Arc::new(Recorder::new(Arc::new(FileSink::new(&path))));

        let handle = spawn(recorder, Duration::from_millis(20));
        assert!(!path.exists());

        handle.await.unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains("\"message\":\"Timeout done\""));
    }
}
