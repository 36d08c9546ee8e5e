use std::io::Write;
use std::sync::Mutex;

use crate::error::SinkError;
use crate::record::LogRecord;
use crate::sink::RecordSink;

/// Writes each record as one JSON object per line.
pub struct JsonLinesSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> Result<W, SinkError> {
        self.writer.into_inner().map_err(|_| SinkError::Poisoned)
    }
}

impl JsonLinesSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> RecordSink for JsonLinesSink<W> {
    fn send(&self, record: &LogRecord) -> Result<(), SinkError> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');
        let mut writer = self.writer.lock().map_err(|_| SinkError::Poisoned)?;
        writer.write_all(&line)?;
        Ok(())
    }

    fn flush(&self) -> Result<(), SinkError> {
        self.writer
            .lock()
            .map_err(|_| SinkError::Poisoned)?
            .flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ExceptionInfo;
    use crate::severity::Severity;
    use chrono::Utc;

    #[test]
    fn writes_one_object_per_line() {
        let sink = JsonLinesSink::new(Vec::new());
        let record = LogRecord {
            timestamp: Utc::now(),
            logger: "myapp.db".to_string(),
            severity: Severity::Critical,
            message: "a=1   b=2".to_string(),
            exception: Some(ExceptionInfo {
                message: "boom".to_string(),
                sources: vec![],
            }),
        };
        sink.send(&record).unwrap();
        sink.send(&record).unwrap();
        sink.flush().unwrap();

        let out = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);

        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(value["logger"], "myapp.db");
        assert_eq!(value["severity"], "CRITICAL");
        assert_eq!(value["message"], "a=1   b=2");
        assert_eq!(value["exception"]["message"], "boom");
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn io_failures_surface_as_errors() {
        let sink = JsonLinesSink::new(BrokenWriter);
        let record = LogRecord {
            timestamp: Utc::now(),
            logger: "root".to_string(),
            severity: Severity::Info,
            message: String::new(),
            exception: None,
        };
        assert!(matches!(sink.send(&record), Err(SinkError::Io(_))));
    }
}
