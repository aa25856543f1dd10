//! JSON Lines file sink.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::record::LogRecord;
use crate::sink::{LogSink, SinkError, SinkResult};

/// Appends records to a file, one JSON object per line.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Create a sink for `path`. The file is created on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path records are appended to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open_error(&self, source: std::io::Error) -> SinkError {
        SinkError::Open {
            path: self.path.clone(),
            source,
        }
    }

    fn write_error(&self, source: std::io::Error) -> SinkError {
        SinkError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl LogSink for FileSink {
    fn append_blocking(&self, record: &LogRecord) -> SinkResult<()> {
        let line = record.to_line()?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.open_error(e))?;

        file.write_all(line.as_bytes())
            .map_err(|e| self.write_error(e))?;

        tracing::trace!(path = %self.path.display(), record = %record.message, "Record appended");
        Ok(())
    }

    async fn append_async(&self, record: &LogRecord) -> SinkResult<()> {
        let line = record.to_line()?;

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| self.open_error(e))?;

        file.write_all(line.as_bytes())
            .await
            .map_err(|e| self.write_error(e))?;
        // tokio::fs::File buffers the write on a blocking thread until flushed
        file.flush().await.map_err(|e| self.write_error(e))?;

        tracing::trace!(path = %self.path.display(), record = %record.message, "Record appended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_lines(path: &Path) -> Vec<String> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn blocking_append_creates_and_extends_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::new(dir.path().join("log.json"));

        sink.append_blocking(&LogRecord::now("Exit 0")).unwrap();
        sink.append_blocking(&LogRecord::now("Exit 1")).unwrap();

        let lines = read_lines(sink.path());
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"message\":\"Exit 0\""));
        assert!(lines[1].contains("\"message\":\"Exit 1\""));
    }

    #[test]
    fn never_truncates_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.json");
        std::fs::write(&path, "{\"stamp\":\"2020-01-01T00:00:00.000Z\",\"message\":\"old\"}\n").unwrap();

        let sink = FileSink::new(&path);
        sink.append_blocking(&LogRecord::now("new")).unwrap();

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("old"));
        assert!(lines[1].contains("new"));
    }

    #[tokio::test]
    async fn async_append_is_flushed_on_return() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::new(dir.path().join("log.json"));

        sink.append_async(&LogRecord::now("Running…")).await.unwrap();

        let lines = read_lines(sink.path());
        assert_eq!(lines.len(), 1);
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["message"], "Running…");
        assert!(value["stamp"].is_string());
    }

    #[tokio::test]
    async fn unwritable_path_reports_open_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for appending.
        let sink = FileSink::new(dir.path());

        let blocking = sink.append_blocking(&LogRecord::now("Exit 0"));
        assert!(matches!(blocking, Err(SinkError::Open { .. })));

        let nonblocking = sink.append_async(&LogRecord::now("Timeout done")).await;
        assert!(matches!(nonblocking, Err(SinkError::Open { .. })));
    }
}
