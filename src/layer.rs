use crate::logger::{keys, TARGET};
use crate::record::{ExceptionInfo, LogRecord};
use crate::severity::Severity;
use crate::sink::RecordSink;
use chrono::Utc;
use std::sync::{Arc, atomic::{AtomicU64, Ordering}};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

/// `tracing_subscriber` layer that turns key-value logger events into
/// [`LogRecord`]s and hands them to a [`RecordSink`].
///
/// Only events emitted through [`crate::logger::Logger`] are captured;
/// everything else on the subscriber passes by untouched. Delivery is
/// synchronous on the emitting thread.
pub struct CaptureLayer {
    sink: Arc<dyn RecordSink>,
    /// Total events seen by the layer (before filtering by target).
    pub total_events: Arc<AtomicU64>,
    /// Records accepted by the sink.
    pub captured_events: Arc<AtomicU64>,
    /// Records the sink failed to accept.
    pub failed_events: Arc<AtomicU64>,
}

impl CaptureLayer {
    pub fn new(sink: Arc<dyn RecordSink>) -> Self {
        Self {
            sink,
            total_events: Arc::new(AtomicU64::new(0)),
            captured_events: Arc::new(AtomicU64::new(0)),
            failed_events: Arc::new(AtomicU64::new(0)),
        }
    }
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn on_event(&self, event: &Event, _ctx: Context<'_, S>) {
        self.total_events.fetch_add(1, Ordering::Relaxed);
        if event.metadata().target() != TARGET {
            return;
        }

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let record = LogRecord {
            timestamp: Utc::now(),
            logger: visitor.logger.unwrap_or_default(),
            severity: visitor.severity.unwrap_or(Severity::Info),
            message: visitor.message.unwrap_or_default(),
            exception: visitor.exception,
        };

        match self.sink.send(&record) {
            Ok(()) => {
                self.captured_events.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                self.failed_events.fetch_add(1, Ordering::Relaxed);
                eprintln!("log sink send failed, dropping log record: {}", e);
            }
        }
    }
}

use tracing::field::{Field, Visit};

#[derive(Default)]
pub struct FieldVisitor {
    pub logger: Option<String>,
    pub severity: Option<Severity>,
    pub message: Option<String>,
    pub exception: Option<ExceptionInfo>,
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            keys::LOGGER => self.logger = Some(value.to_string()),
            keys::SEVERITY => self.severity = value.parse().ok(),
            keys::MESSAGE => self.message = Some(value.to_string()),
            _ => {}
        }
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        if field.name() != keys::EXCEPTION {
            return;
        }
        let sources = std::iter::successors(value.source(), |e| e.source())
            .map(|e| e.to_string())
            .collect();
        self.exception = Some(ExceptionInfo {
            message: value.to_string(),
            sources,
        });
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == keys::MESSAGE {
            self.message = Some(format!("{:?}", value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::KvLoggerAdapter;
    use crate::error::SinkError;
    use crate::kv;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::Registry;

    struct FailingSink;

    impl RecordSink for FailingSink {
        fn send(&self, _record: &LogRecord) -> Result<(), SinkError> {
            Err(SinkError::Poisoned)
        }
    }

    #[test]
    fn counts_captured_and_failed_records() {
        let layer = CaptureLayer::new(Arc::new(FailingSink));
        let total = Arc::clone(&layer.total_events);
        let captured = Arc::clone(&layer.captured_events);
        let failed = Arc::clone(&layer.failed_events);
        let logger = KvLoggerAdapter::get_logger(["failing"]);

        let subscriber = Registry::default().with(layer);
        tracing::subscriber::with_default(subscriber, || {
            logger.info(kv! { a = 1 });
            tracing::info!("ignored");
        });
        assert_eq!(total.load(Ordering::Relaxed), 2);
        assert_eq!(captured.load(Ordering::Relaxed), 0);
        assert_eq!(failed.load(Ordering::Relaxed), 1);
    }
}
