//! Shutdown coordination.

use std::future::Future;

use tokio::task::JoinHandle;

use crate::event::LifecycleEvent;
use crate::lifecycle::signals::EventSource;
use crate::lifecycle::Listener;

/// Why the run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The heartbeat finished and nothing else is pending.
    Idle,
    /// A terminating event was recorded; exit with `code`.
    Event { code: i32 },
    /// A task the run depends on panicked.
    Crashed,
}

impl Termination {
    /// Process exit code, given how many appends failed during the run.
    ///
    /// An otherwise clean run that lost records exits with 1.
    pub fn exit_code(self, failures: usize) -> i32 {
        match self {
            Termination::Idle if failures > 0 => 1,
            Termination::Idle => 0,
            Termination::Event { code } => code,
            Termination::Crashed => 1,
        }
    }
}

/// Record events from `source` until one terminates the run or the
/// heartbeat completes.
pub async fn wait_for_termination<S>(
    listener: &Listener,
    source: &mut S,
    mut heartbeat: JoinHandle<()>,
) -> Termination
where
    S: EventSource + ?Sized,
{
    let mut source_open = true;

    loop {
        tokio::select! {
            result = &mut heartbeat => {
                return match result {
                    Ok(()) => Termination::Idle,
                    Err(e) => {
                        tracing::error!(error = %e, "Heartbeat task did not complete");
                        Termination::Crashed
                    }
                };
            }
            event = source.next_event(), if source_open => match event {
                Some(event) => {
                    // Failure is logged by the recorder; termination proceeds.
                    let _ = listener.on_event(&event);
                    if let Some(code) = event.termination_code() {
                        return Termination::Event { code };
                    }
                }
                None => {
                    tracing::debug!("Event source closed");
                    source_open = false;
                }
            }
        }
    }
}

/// Drive the run on its own task so a panic in it still ends in an exit
/// record instead of unwinding out of `main`.
pub async fn supervise<F>(run: F) -> Termination
where
    F: Future<Output = Termination> + Send + 'static,
{
    match tokio::spawn(run).await {
        Ok(termination) => termination,
        Err(e) => {
            tracing::error!(error = %e, "Run task did not complete");
            Termination::Crashed
        }
    }
}

/// Append the exit record and return the code the process should exit with.
pub fn record_exit(listener: &Listener, termination: Termination) -> i32 {
    let code = termination.exit_code(listener.recorder().failures());
    let _ = listener.on_event(&LifecycleEvent::Exit { code });
    code
}

/// Append the exit record and terminate the process.
pub fn exit(listener: &Listener, termination: Termination) -> ! {
    let code = record_exit(listener, termination);
    tracing::info!(code, "Exiting");
    std::process::exit(code)
}
