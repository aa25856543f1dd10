//! Shared utilities for integration tests.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use lifelog::lifecycle::Listener;
use lifelog::record::LogRecord;
use lifelog::sink::{FileSink, LogSink, Recorder, SinkError, SinkResult};

/// A sink whose every append fails, like a full or read-only disk.
#[allow(dead_code)]
pub struct FailingSink;

#[allow(dead_code)]
impl FailingSink {
    fn error() -> SinkError {
        SinkError::Write {
            path: PathBuf::from("log.json"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "no space left on device"),
        }
    }
}

#[async_trait]
impl LogSink for FailingSink {
    fn append_blocking(&self, _record: &LogRecord) -> SinkResult<()> {
        Err(Self::error())
    }

    async fn append_async(&self, _record: &LogRecord) -> SinkResult<()> {
        Err(Self::error())
    }
}

/// Recorder and listener appending to `path`.
#[allow(dead_code)]
pub fn file_listener(path: &Path) -> (Arc<Recorder>, Listener) {
    let recorder = Arc::new(Recorder::new(Arc::new(FileSink::new(path))));
    let listener = Listener::new(recorder.clone());
    (recorder, listener)
}

/// Every record in a log file, in append order.
#[allow(dead_code)]
pub fn read_records(path: &Path) -> Vec<LogRecord> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => panic!("failed to read {}: {}", path.display(), e),
    };
    content
        .lines()
        .map(|line| serde_json::from_str(line).expect("every line is one JSON record"))
        .collect()
}

/// Messages of every record in a log file.
#[allow(dead_code)]
pub fn read_messages(path: &Path) -> Vec<String> {
    read_records(path).into_iter().map(|r| r.message).collect()
}
