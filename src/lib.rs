//! Process-lifetime logger.
//!
//! Appends one JSON line to a log file for every process lifecycle event
//! (normal exit, termination signal, abnormal death) and a heartbeat at
//! startup and after a fixed delay.

pub mod config;
pub mod event;
pub mod heartbeat;
pub mod lifecycle;
pub mod observability;
pub mod record;
pub mod sink;

pub use config::LifelogConfig;
pub use event::{LifecycleEvent, TrackedSignal};
pub use lifecycle::Listener;
pub use record::LogRecord;
pub use sink::{FileSink, LogSink, Recorder, SinkError};
