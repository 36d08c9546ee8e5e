use crate::env::{env_or, parse_flag, KV_LOG_LEVEL_ENV, KV_LOG_STDOUT_ENV};
use crate::error::{InitError, SinkError};
use crate::layer::CaptureLayer;
use crate::severity::Severity;
use crate::sink::RecordSink;
use std::sync::Arc;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

/// Configuration of the global subscriber.
///
/// **Fields**
/// - `level`: most verbose level that reaches any layer.
/// - `enable_stdout`: if `true`, a `tracing_subscriber::fmt` layer prints
///   every event to the console.
/// - `sink`: if set, a [`CaptureLayer`] forwards key-value records to it.
#[derive(Clone)]
pub struct LoggingConfig {
    pub level: LevelFilter,
    pub enable_stdout: bool,
    pub sink: Option<Arc<dyn RecordSink>>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::INFO,
            enable_stdout: true,
            sink: None,
        }
    }
}

impl std::fmt::Debug for LoggingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggingConfig")
            .field("level", &self.level)
            .field("enable_stdout", &self.enable_stdout)
            .field("sink", &self.sink.is_some())
            .finish()
    }
}

impl LoggingConfig {
    /// Defaults overridden by [`KV_LOG_LEVEL_ENV`] and [`KV_LOG_STDOUT_ENV`].
    /// Unparseable values keep the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let level = env_or(KV_LOG_LEVEL_ENV, "")
            .parse::<Severity>()
            .map(level_filter)
            .unwrap_or(defaults.level);
        let enable_stdout = parse_flag(&env_or(KV_LOG_STDOUT_ENV, "")).unwrap_or(defaults.enable_stdout);
        Self {
            level,
            enable_stdout,
            ..defaults
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn RecordSink>) -> Self {
        self.sink = Some(sink);
        self
    }
}

/// Most verbose filter that still lets `severity` through.
pub fn level_filter(severity: Severity) -> LevelFilter {
    LevelFilter::from_level(severity.as_tracing_level())
}

/// Flushes the configured sink when dropped. Keep it alive in `main`.
#[must_use = "dropping the guard flushes the sink immediately"]
pub struct LoggingGuard {
    sink: Option<Arc<dyn RecordSink>>,
}

impl LoggingGuard {
    /// Flush the sink now; the guard flushes again on drop.
    pub fn flush(&self) -> Result<(), SinkError> {
        match &self.sink {
            Some(sink) => sink.flush(),
            None => Ok(()),
        }
    }
}

impl Drop for LoggingGuard {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("error flushing log sink: {}", e);
        }
    }
}

/// Install the global `tracing` subscriber described by `config`.
///
/// **Errors**
/// - [`InitError::AlreadyInstalled`] if a global subscriber already exists.
pub fn try_init(config: LoggingConfig) -> Result<LoggingGuard, InitError> {
    let guard = LoggingGuard {
        sink: config.sink.clone(),
    };
    let capture = config.sink.map(CaptureLayer::new);
    let fmt_layer = config.enable_stdout.then(tracing_subscriber::fmt::layer);

    let subscriber = Registry::default()
        .with(config.level)
        .with(capture)
        .with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(guard)
}

/// Install the subscriber configured from the environment. A subscriber
/// that is already installed is left in place and `None` is returned.
pub fn init() -> Option<LoggingGuard> {
    match try_init(LoggingConfig::from_env()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("logging not initialized: {}", e);
            None
        }
    }
}
