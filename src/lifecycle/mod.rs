//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Append "Running…" → Spawn heartbeat timer
//!
//! Signals (signals.rs):
//!     SIGINT/SIGKILL/SIGQUIT/SIGTERM → LifecycleEvent::Signal
//!     SIGHUP → LifecycleEvent::Death
//!
//! Death (death.rs):
//!     panic → LifecycleEvent::Death
//!
//! Listener (listener.rs):
//!     LifecycleEvent → one blocking append
//!
//! Shutdown (shutdown.rs):
//!     Heartbeat done or terminating event → Append "Exit <code>" → exit
//! ```
//!
//! # Design Decisions
//! - Handlers are registered once, explicitly, from the entry point
//! - Every lifecycle record goes through the blocking append path
//! - The heartbeat is never cancelled; exiting abandons it

pub mod death;
pub mod listener;
pub mod shutdown;
pub mod signals;
pub mod startup;

pub use listener::Listener;
pub use shutdown::Termination;
pub use signals::{ChannelEventSource, EventSource, OsEventSource};
