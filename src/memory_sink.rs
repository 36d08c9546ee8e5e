use std::sync::{Arc, Mutex};

use crate::error::SinkError;
use crate::record::LogRecord;
use crate::severity::Severity;
use crate::sink::RecordSink;

/// A sink that keeps every record in memory.
///
/// Cloning shares the buffer, so a test can hand one clone to the layer and
/// inspect the other.
#[derive(Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    /// Drain the buffer.
    pub fn take(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .map(|mut records| std::mem::take(&mut *records))
            .unwrap_or_default()
    }

    pub fn record_tuples(&self) -> Vec<(String, Severity, String)> {
        self.records().iter().map(LogRecord::tuple).collect()
    }
}

impl RecordSink for MemorySink {
    fn send(&self, record: &LogRecord) -> Result<(), SinkError> {
        self.records
            .lock()
            .map_err(|_| SinkError::Poisoned)?
            .push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(message: &str) -> LogRecord {
        LogRecord {
            timestamp: Utc::now(),
            logger: "root".to_string(),
            severity: Severity::Info,
            message: message.to_string(),
            exception: None,
        }
    }

    #[test]
    fn clones_share_buffer_and_take_drains() {
        let sink = MemorySink::new();
        let handle = sink.clone();
        sink.send(&record("a=1")).unwrap();
        sink.send(&record("b=2")).unwrap();

        assert_eq!(
            handle.record_tuples(),
            vec![
                ("root".to_string(), Severity::Info, "a=1".to_string()),
                ("root".to_string(), Severity::Info, "b=2".to_string()),
            ]
        );
        assert_eq!(handle.take().len(), 2);
        assert!(sink.records().is_empty());
    }
}
