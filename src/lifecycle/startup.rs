//! Startup sequence.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::heartbeat;
use crate::record::RUNNING_MESSAGE;
use crate::sink::Recorder;

/// Append the startup record and arm the heartbeat timer.
///
/// Returns the heartbeat handle so the caller can tell when the process has
/// no work left.
pub async fn start(recorder: &Arc<Recorder>, heartbeat_delay: Duration) -> JoinHandle<()> {
    // Failures are already reported by the recorder.
    let _ = recorder.record_async(RUNNING_MESSAGE).await;

    tracing::info!(
        heartbeat_delay_secs = heartbeat_delay.as_secs_f64(),
        "Heartbeat armed"
    );
    heartbeat::spawn(recorder.clone(), heartbeat_delay)
}
