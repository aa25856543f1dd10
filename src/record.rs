//! Log record model.
//!
//! # Responsibilities
//! - Define the single persisted entity: a (stamp, message) pair
//! - Issue stamps that never go backwards within one process
//! - Encode a record as one JSON line
//!
//! # Design Decisions
//! - Stamps are RFC 3339 with millisecond precision and a `Z` suffix
//! - Field order on the wire is `stamp` then `message`

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Message written once at startup.
pub const RUNNING_MESSAGE: &str = "Running…";

/// Message written when the heartbeat timer elapses.
pub const TIMEOUT_MESSAGE: &str = "Timeout done";

/// Last stamp handed out by this process, in milliseconds since the epoch.
static LAST_STAMP_MS: AtomicI64 = AtomicI64::new(i64::MIN);

/// One appended log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Instant the record was created.
    #[serde(with = "iso_millis")]
    pub stamp: DateTime<Utc>,
    /// Human-readable event description.
    pub message: String,
}

impl LogRecord {
    /// Create a record stamped with the current time.
    pub fn now(message: impl Into<String>) -> Self {
        Self {
            stamp: next_stamp(),
            message: message.into(),
        }
    }

    /// Create a record with an explicit stamp.
    pub fn at(stamp: DateTime<Utc>, message: impl Into<String>) -> Self {
        Self {
            stamp,
            message: message.into(),
        }
    }

    /// Encode as a single JSON line, including the trailing newline.
    pub fn to_line(&self) -> Result<String, serde_json::Error> {
        let mut line = serde_json::to_string(self)?;
        line.push('\n');
        Ok(line)
    }
}

/// Current wall-clock time, clamped so it is never earlier than the
/// previous stamp issued by this process.
pub fn next_stamp() -> DateTime<Utc> {
    let millis = clamp_stamp(&LAST_STAMP_MS, Utc::now().timestamp_millis());

    Utc.timestamp_millis_opt(millis)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Raise `now_ms` to the last value recorded in `last_ms`, then record it.
pub fn clamp_stamp(last_ms: &AtomicI64, now_ms: i64) -> i64 {
    let previous = last_ms.fetch_max(now_ms, Ordering::SeqCst);
    now_ms.max(previous)
}

mod iso_millis {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(stamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_stamp(stamp))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|stamp| stamp.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

/// Render a stamp the way it appears in the log file.
pub fn format_stamp(stamp: &DateTime<Utc>) -> String {
    stamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}
