//! Bounded event log.
//!
//! Keeps the most recent `capacity` human-readable entries. Backed by an
//! `im::Vector` so cloning a `GameState` never copies the log.
//!
//! Consumers that need every entry (sound, animation, a full transcript)
//! call [`EventLog::start_recording`] on the state they hand to a
//! transition and [`EventLog::take_recorded`] on the state that comes back.
//! Recorded entries are kept regardless of capacity, so truncation never
//! hides an entry from them. A log that is not recording stays bounded.

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of retained log entries.
pub const DEFAULT_LOG_CAPACITY: usize = 10;

/// Reasons a serialized log is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LogError {
    #[error("log capacity must be at least 1")]
    ZeroCapacity,

    #[error("log holds {len} entries but its capacity is {capacity}")]
    OverCapacity { len: usize, capacity: usize },

    #[error("log holds {len} entries but only {appended} were appended")]
    SequenceBehind { len: usize, appended: u64 },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "LogData", into = "LogData")]
pub struct EventLog {
    entries: Vector<String>,
    capacity: usize,
    /// Total entries ever appended.
    appended: u64,
    /// Entries appended since `start_recording`, untruncated.
    recording: Option<Vector<String>>,
}

/// Serialized form. Recording is a consumer-side concern and not persisted.
#[derive(Serialize, Deserialize)]
struct LogData {
    entries: Vector<String>,
    capacity: usize,
    appended: u64,
}

impl TryFrom<LogData> for EventLog {
    type Error = LogError;

    fn try_from(data: LogData) -> Result<Self, Self::Error> {
        let len = data.entries.len();
        if data.capacity == 0 {
            return Err(LogError::ZeroCapacity);
        }
        if len > data.capacity {
            return Err(LogError::OverCapacity { len, capacity: data.capacity });
        }
        if (len as u64) > data.appended {
            return Err(LogError::SequenceBehind { len, appended: data.appended });
        }
        Ok(Self {
            entries: data.entries,
            capacity: data.capacity,
            appended: data.appended,
            recording: None,
        })
    }
}

impl From<EventLog> for LogData {
    fn from(log: EventLog) -> Self {
        Self {
            entries: log.entries,
            capacity: log.capacity,
            appended: log.appended,
        }
    }
}

impl EventLog {
    /// Create an empty log retaining at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Log capacity must be positive");
        Self {
            entries: Vector::new(),
            capacity,
            appended: 0,
            recording: None,
        }
    }

    /// Append an entry, dropping the oldest ones beyond capacity.
    pub fn push(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        if let Some(recorded) = self.recording.as_mut() {
            recorded.push_back(entry.clone());
        }
        self.entries.push_back(entry);
        self.appended += 1;
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Begin recording every appended entry, discarding any earlier recording.
    pub fn start_recording(&mut self) {
        self.recording = Some(Vector::new());
    }

    /// Stop recording and return what was appended since it started.
    ///
    /// Empty if the log was not recording.
    pub fn take_recorded(&mut self) -> Vec<String> {
        self.recording
            .take()
            .map(|recorded| recorded.into_iter().collect())
            .unwrap_or_default()
    }

    /// Retained entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total number of entries ever appended.
    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.appended
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY)
    }
}

// Recording state is ignored: two logs are equal when they hold the same
// history.
impl PartialEq for EventLog {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
            && self.capacity == other.capacity
            && self.appended == other.appended
    }
}

impl Eq for EventLog {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_read() {
        let mut log = EventLog::default();
        log.push("a");
        log.push(String::from("b"));

        assert_eq!(log.len(), 2);
        assert_eq!(log.last(), Some("b"));
        assert_eq!(log.entries().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(log.sequence(), 2);
    }

    #[test]
    fn test_truncates_to_capacity() {
        let mut log = EventLog::new(3);
        for i in 0..5 {
            log.push(format!("entry {}", i));
        }

        assert_eq!(log.len(), 3);
        assert_eq!(
            log.entries().collect::<Vec<_>>(),
            vec!["entry 2", "entry 3", "entry 4"]
        );
        assert_eq!(log.sequence(), 5);
    }

    #[test]
    fn test_recording_outlives_truncation() {
        let mut log = EventLog::new(2);
        log.push("before");
        log.start_recording();
        for i in 0..5 {
            log.push(format!("{}", i));
        }

        assert_eq!(log.len(), 2);
        assert_eq!(log.take_recorded(), vec!["0", "1", "2", "3", "4"]);

        // Taking stops the recording.
        log.push("after");
        assert!(log.take_recorded().is_empty());
    }

    #[test]
    fn test_recording_follows_clones() {
        let mut log = EventLog::default();
        log.start_recording();
        let mut next = log.clone();
        next.push("moved");

        assert_eq!(next.take_recorded(), vec!["moved"]);
        assert!(log.take_recorded().is_empty());
    }

    #[test]
    fn test_recording_ignored_by_eq() {
        let mut recording = EventLog::default();
        recording.start_recording();
        assert_eq!(recording, EventLog::default());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut log = EventLog::default();
        log.push("shared");
        let snapshot = log.clone();
        log.push("later");

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_serde_roundtrip_drops_recording() {
        let mut log = EventLog::new(3);
        log.start_recording();
        log.push("a");

        let json = serde_json::to_string(&log).unwrap();
        let mut restored: EventLog = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, log);
        assert!(restored.take_recorded().is_empty());
    }

    #[test]
    fn test_deserialize_rejects_inconsistent_logs() {
        let zero = r#"{"entries":[],"capacity":0,"appended":0}"#;
        let over = r#"{"entries":["a","b"],"capacity":1,"appended":2}"#;
        let behind = r#"{"entries":["a","b"],"capacity":5,"appended":1}"#;

        for json in [zero, over, behind] {
            assert!(serde_json::from_str::<EventLog>(json).is_err(), "{}", json);
        }
    }

    #[test]
    #[should_panic(expected = "Log capacity must be positive")]
    fn test_zero_capacity() {
        let _ = EventLog::new(0);
    }
}
