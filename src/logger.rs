use std::error::Error;
use std::sync::{Arc, OnceLock};

use dashmap::DashMap;
use tracing::Level;

use crate::name::LoggerName;
use crate::severity::Severity;

/// `tracing` target shared by every record emitted through a [`Logger`].
///
/// Logger names are dynamic, so they travel in the `logger` field instead.
pub const TARGET: &str = "kv_logger";

/// Field names carried by every emitted event.
pub mod keys {
    pub const LOGGER: &str = "logger";
    pub const SEVERITY: &str = "severity";
    pub const MESSAGE: &str = "message";
    pub const EXCEPTION: &str = "exception";
}

static REGISTRY: OnceLock<DashMap<LoggerName, Arc<Logger>>> = OnceLock::new();

/// Named handle onto the `tracing` dispatcher.
///
/// One instance exists per resolved name for the lifetime of the process;
/// obtain it with [`Logger::get`].
#[derive(Debug)]
pub struct Logger {
    name: LoggerName,
}

impl Logger {
    pub fn get(name: &LoggerName) -> Arc<Logger> {
        let registry = REGISTRY.get_or_init(DashMap::new);
        registry
            .entry(name.clone())
            .or_insert_with(|| Arc::new(Logger { name: name.clone() }))
            .clone()
    }

    pub fn name(&self) -> &LoggerName {
        &self.name
    }

    /// Whether the current subscriber would record an event at `severity`.
    pub fn is_enabled_for(&self, severity: Severity) -> bool {
        match severity {
            Severity::Debug => tracing::enabled!(target: TARGET, Level::DEBUG),
            Severity::Info => tracing::enabled!(target: TARGET, Level::INFO),
            Severity::Warning => tracing::enabled!(target: TARGET, Level::WARN),
            Severity::Error | Severity::Critical => tracing::enabled!(target: TARGET, Level::ERROR),
        }
    }

    /// Hand one rendered record to the dispatcher. Filtering and delivery
    /// belong to the installed subscriber.
    pub fn emit(&self, severity: Severity, message: &str, exception: Option<&(dyn Error + 'static)>) {
        let logger = self.name.as_str();
        let severity_name = severity.as_str();
        macro_rules! dispatch {
            ($level:expr) => {
                tracing::event!(
                    target: TARGET,
                    $level,
                    logger = logger,
                    severity = severity_name,
                    exception = exception,
                    message = %message
                )
            };
        }
        // Callsite levels must be constants, hence one arm per level.
        match severity {
            Severity::Debug => dispatch!(Level::DEBUG),
            Severity::Info => dispatch!(Level::INFO),
            Severity::Warning => dispatch!(Level::WARN),
            Severity::Error | Severity::Critical => dispatch!(Level::ERROR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::resolve_name;

    #[test]
    fn one_instance_per_name() {
        let a = Logger::get(&resolve_name(["svc", "db"]));
        let b = Logger::get(&resolve_name(["svc..db"]));
        let c = Logger::get(&resolve_name(["svc"]));
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(a.name().as_str(), "svc.db");
    }

    #[test]
    fn nothing_enabled_without_subscriber() {
        let logger = Logger::get(&LoggerName::root());
        tracing::subscriber::with_default(tracing::subscriber::NoSubscriber::default(), || {
            assert!(!logger.is_enabled_for(Severity::Critical));
        });
    }
}
