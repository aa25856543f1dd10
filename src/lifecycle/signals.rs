//! OS signal handling.
//!
//! # Responsibilities
//! - Register signal handlers (SIGINT, SIGKILL, SIGQUIT, SIGTERM, SIGHUP)
//! - Translate signals to lifecycle events
//! - Offer a channel-backed source for tests and embedding
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - A signal the OS refuses to hand out (SIGKILL) is logged and skipped
//! - SIGHUP is reported as a death, not as a tracked signal

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::event::LifecycleEvent;
#[cfg(unix)]
use crate::event::{TrackedSignal, DEATH_SIGNAL_NAME, DEATH_SIGNAL_NUMBER};

/// A stream of process lifecycle events.
#[async_trait]
pub trait EventSource: Send {
    /// Wait for the next event. `None` means the source will never produce
    /// another one.
    async fn next_event(&mut self) -> Option<LifecycleEvent>;
}

/// Lifecycle events delivered by the operating system.
#[cfg(unix)]
pub struct OsEventSource {
    interrupt: Option<tokio::signal::unix::Signal>,
    kill: Option<tokio::signal::unix::Signal>,
    quit: Option<tokio::signal::unix::Signal>,
    terminate: Option<tokio::signal::unix::Signal>,
    hangup: Option<tokio::signal::unix::Signal>,
}

#[cfg(unix)]
impl OsEventSource {
    /// Register every handler. Must be called from within a Tokio runtime.
    pub fn install() -> Self {
        let mut registered = 0;
        let mut register = |name: &str, number: i32| {
            use tokio::signal::unix::{signal, SignalKind};

            match signal(SignalKind::from_raw(number)) {
                Ok(stream) => {
                    registered += 1;
                    Some(stream)
                }
                Err(e) => {
                    tracing::warn!(signal = name, error = %e, "Cannot listen for signal");
                    None
                }
            }
        };

        let [interrupt, kill, quit, terminate] =
            TrackedSignal::ALL.map(|s| register(s.name(), s.number()));
        let hangup = register(DEATH_SIGNAL_NAME, DEATH_SIGNAL_NUMBER);

        tracing::debug!(registered, "Signal handlers installed");
        Self {
            interrupt,
            kill,
            quit,
            terminate,
            hangup,
        }
    }
}

#[cfg(unix)]
async fn recv(stream: &mut Option<tokio::signal::unix::Signal>) -> Option<()> {
    match stream {
        Some(stream) => stream.recv().await,
        None => std::future::pending().await,
    }
}

#[cfg(unix)]
#[async_trait]
impl EventSource for OsEventSource {
    async fn next_event(&mut self) -> Option<LifecycleEvent> {
        tokio::select! {
            Some(()) = recv(&mut self.interrupt) => Some(LifecycleEvent::Signal(TrackedSignal::Interrupt)),
            Some(()) = recv(&mut self.kill) => Some(LifecycleEvent::Signal(TrackedSignal::Kill)),
            Some(()) = recv(&mut self.quit) => Some(LifecycleEvent::Signal(TrackedSignal::Quit)),
            Some(()) = recv(&mut self.terminate) => Some(LifecycleEvent::Signal(TrackedSignal::Terminate)),
            Some(()) = recv(&mut self.hangup) => Some(LifecycleEvent::death_by_signal(DEATH_SIGNAL_NAME)),
            else => None,
        }
    }
}

/// Lifecycle events delivered by the operating system (Ctrl+C only).
#[cfg(windows)]
pub struct OsEventSource {
    ctrl_c: Option<tokio::signal::windows::CtrlC>,
}

#[cfg(windows)]
impl OsEventSource {
    /// Register the Ctrl+C handler. Must be called from within a Tokio runtime.
    pub fn install() -> Self {
        let ctrl_c = match tokio::signal::windows::ctrl_c() {
            Ok(stream) => Some(stream),
            Err(e) => {
                tracing::warn!(error = %e, "Cannot listen for Ctrl+C");
                None
            }
        };
        Self { ctrl_c }
    }
}

#[cfg(windows)]
#[async_trait]
impl EventSource for OsEventSource {
    async fn next_event(&mut self) -> Option<LifecycleEvent> {
        match &mut self.ctrl_c {
            Some(stream) => stream
                .recv()
                .await
                .map(|()| LifecycleEvent::Signal(crate::event::TrackedSignal::Interrupt)),
            None => std::future::pending().await,
        }
    }
}

/// Event source fed through a channel.
pub struct ChannelEventSource {
    rx: mpsc::UnboundedReceiver<LifecycleEvent>,
}

impl ChannelEventSource {
    /// Create a source and the sender that feeds it.
    pub fn new() -> (mpsc::UnboundedSender<LifecycleEvent>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { rx })
    }
}

#[async_trait]
impl EventSource for ChannelEventSource {
    async fn next_event(&mut self) -> Option<LifecycleEvent> {
        self.rx.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::TrackedSignal;

    #[tokio::test]
    async fn channel_source_yields_in_order_then_closes() {
        let (tx, mut source) = ChannelEventSource::new();
        tx.send(LifecycleEvent::Signal(TrackedSignal::Terminate)).unwrap();
        tx.send(LifecycleEvent::Exit { code: 0 }).unwrap();
        drop(tx);

        assert_eq!(
            source.next_event().await,
            Some(LifecycleEvent::Signal(TrackedSignal::Terminate))
        );
        assert_eq!(source.next_event().await, Some(LifecycleEvent::Exit { code: 0 }));
        assert_eq!(source.next_event().await, None);
    }

    #[cfg(windows)]
    #[tokio::test]
    async fn os_source_registers_ctrl_c_up_front() {
        let source = OsEventSource::install();
        assert!(source.ctrl_c.is_some());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn os_source_installs_without_sigkill() {
        let source = OsEventSource::install();
        assert!(source.interrupt.is_some());
        assert!(source.terminate.is_some());
        assert!(source.kill.is_none());
    }
}
