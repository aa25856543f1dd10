//! Append-only log sink subsystem.
//!
//! # Data Flow
//! ```text
//! LifecycleEvent / heartbeat
//!     → Recorder (stamp, failure accounting)
//!     → LogSink::append_blocking   (teardown-safe, std::fs)
//!     → LogSink::append_async      (heartbeat, tokio::fs)
//!     → one JSON line appended to the log file
//! ```
//!
//! # Design Decisions
//! - The file is opened per append; no handle outlives a call
//! - A whole line is written with one `write_all` on an append-mode handle
//! - Failures are reported, never retried

pub mod file;
pub mod recorder;

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::record::LogRecord;

pub use file::FileSink;
pub use recorder::Recorder;

/// Errors raised while appending a record.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The log file could not be opened for appending.
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The encoded line could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The record could not be encoded.
    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type for sink operations.
pub type SinkResult<T> = Result<T, SinkError>;

/// Append-only destination for log records.
#[async_trait]
pub trait LogSink: Send + Sync {
    /// Append a record, blocking the calling thread until the write returns.
    ///
    /// Lifecycle handlers use this path because they may run while the
    /// process is tearing down.
    fn append_blocking(&self, record: &LogRecord) -> SinkResult<()>;

    /// Append a record without blocking the runtime.
    async fn append_async(&self, record: &LogRecord) -> SinkResult<()>;
}
