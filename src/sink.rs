use crate::error::SinkError;
use crate::record::LogRecord;

/// Destination for [`LogRecord`]s captured by [`crate::layer::CaptureLayer`].
///
/// `send` runs synchronously on the thread that emitted the record, so
/// implementations should keep it cheap.
pub trait RecordSink: Send + Sync {
    /// Deliver a single record.
    ///
    /// **Returns**
    /// - `Ok(())` if the record was accepted.
    /// - `Err(..)` if the destination failed. The layer reports the failure
    ///   and moves on; it never retries.
    fn send(&self, record: &LogRecord) -> Result<(), SinkError>;

    /// Flush any buffered records. Default implementation is a no-op.
    fn flush(&self) -> Result<(), SinkError> {
        Ok(())
    }
}
