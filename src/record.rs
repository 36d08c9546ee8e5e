use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::severity::Severity;

/// Error attached to a record by `exception`, rendered at capture time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExceptionInfo {
    pub message: String,
    /// `source()` chain, outermost first.
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub logger: String,
    pub severity: Severity,
    pub message: String,
    pub exception: Option<ExceptionInfo>,
}

impl LogRecord {
    /// `(logger, severity, message)`, the shape tests usually compare.
    pub fn tuple(&self) -> (String, Severity, String) {
        (self.logger.clone(), self.severity, self.message.clone())
    }
}
