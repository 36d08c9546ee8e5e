//! Key-value logger adapters.
//!
//! [`KvLoggerAdapter`] takes only named fields. [`EventKvLoggerAdapter`]
//! additionally requires a leading event name on every call, rendered as
//! the first field. Both share the same format-and-emit pipeline.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::error::KvLogError;
use crate::fields::{Field, Fields};
use crate::format::KvFormatter;
use crate::func::LoggerFunc;
use crate::logger::Logger;
use crate::name::{resolve_name, LoggerName};
use crate::severity::Severity;

/// Name of the field injected by [`EventKvLoggerAdapter`].
pub const EVENT_FIELD: &str = "event";

/// Logger handle, default fields and formatter shared by both adapters and
/// by the functions they define.
#[derive(Debug, Clone)]
pub(crate) struct Pipeline {
    logger: Arc<Logger>,
    extra: Fields,
    formatter: KvFormatter,
}

impl Pipeline {
    fn new(name: &LoggerName) -> Self {
        Self {
            logger: Logger::get(name),
            extra: Fields::new(),
            formatter: KvFormatter::default(),
        }
    }

    /// The leading `event` field. Fails if the defaults or the call-site
    /// fields already carry a field of that name.
    pub(crate) fn event_field(
        &self,
        event: &dyn fmt::Display,
        fields: &Fields,
    ) -> Result<Field, KvLogError> {
        if self.extra.get(EVENT_FIELD).is_some() || fields.get(EVENT_FIELD).is_some() {
            return Err(KvLogError::MultipleValues {
                name: EVENT_FIELD.to_string(),
            });
        }
        Ok(Field::new(EVENT_FIELD, event))
    }

    /// Leading field first, then the defaults, then call-site fields merged
    /// over the defaults.
    pub(crate) fn render(&self, leading: Option<Field>, fields: Fields) -> String {
        let mut all = Fields::new();
        if let Some(field) = leading {
            all.push(field);
        }
        for field in Fields::merged(&self.extra, fields) {
            all.insert(field.name, field.value);
        }
        self.formatter.format(&all)
    }

    pub(crate) fn emit(
        &self,
        severity: Severity,
        leading: Option<Field>,
        fields: Fields,
        exception: Option<&(dyn Error + 'static)>,
    ) {
        let message = self.render(leading, fields);
        self.logger.emit(severity, &message, exception);
    }
}

/// Adapter whose calls take named fields instead of a message.
///
/// ```
/// use tracing_kv_logger::{kv, KvLoggerAdapter};
///
/// let log = KvLoggerAdapter::get_logger(["myapp", "db"]).with_extra(kv! { shard = 3 });
/// log.info(kv! { rows = 12, took_ms = 40 });
/// // logger "myapp.db", message "shard=3   rows=12   took_ms=40"
/// ```
#[derive(Debug, Clone)]
pub struct KvLoggerAdapter {
    pipeline: Pipeline,
}

impl KvLoggerAdapter {
    /// Bind an adapter to the logger named by `segments` (see
    /// [`resolve_name`]). An empty list selects the root logger.
    pub fn get_logger<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            pipeline: Pipeline::new(&resolve_name(segments)),
        }
    }

    pub fn root() -> Self {
        Self::get_logger(Vec::<&str>::new())
    }

    /// Default fields rendered ahead of the call-site fields on every call.
    pub fn with_extra(mut self, extra: Fields) -> Self {
        self.pipeline.extra = extra;
        self
    }

    pub fn with_formatter(mut self, formatter: KvFormatter) -> Self {
        self.pipeline.formatter = formatter;
        self
    }

    pub fn name(&self) -> &LoggerName {
        self.pipeline.logger.name()
    }

    pub fn extra(&self) -> &Fields {
        &self.pipeline.extra
    }

    pub fn is_enabled_for(&self, severity: Severity) -> bool {
        self.pipeline.logger.is_enabled_for(severity)
    }

    pub fn debug(&self, fields: Fields) {
        self.log(Severity::Debug, fields);
    }

    pub fn info(&self, fields: Fields) {
        self.log(Severity::Info, fields);
    }

    pub fn warning(&self, fields: Fields) {
        self.log(Severity::Warning, fields);
    }

    pub fn error(&self, fields: Fields) {
        self.log(Severity::Error, fields);
    }

    pub fn critical(&self, fields: Fields) {
        self.log(Severity::Critical, fields);
    }

    /// Log at `ERROR` with `error` attached to the record.
    pub fn exception(&self, error: &(dyn Error + 'static), fields: Fields) {
        self.pipeline.emit(Severity::Error, None, fields, Some(error));
    }

    pub fn log(&self, severity: Severity, fields: Fields) {
        self.pipeline.emit(severity, None, fields, None);
    }

    /// Build a function logging at `severity` whose positional values are
    /// named by the whitespace-separated `names`.
    ///
    /// **Errors**
    /// - [`KvLogError::DuplicateArgument`] if a name appears twice.
    pub fn define_logger_func(&self, severity: Severity, names: &str) -> Result<LoggerFunc, KvLogError> {
        LoggerFunc::new(self.pipeline.clone(), severity, names, false)
    }
}

/// Adapter that requires an event name as the first argument of every
/// call and renders it as a leading `event=` field.
#[derive(Debug, Clone)]
pub struct EventKvLoggerAdapter {
    pipeline: Pipeline,
}

impl EventKvLoggerAdapter {
    pub fn get_logger<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            pipeline: Pipeline::new(&resolve_name(segments)),
        }
    }

    pub fn root() -> Self {
        Self::get_logger(Vec::<&str>::new())
    }

    pub fn with_extra(mut self, extra: Fields) -> Self {
        self.pipeline.extra = extra;
        self
    }

    pub fn with_formatter(mut self, formatter: KvFormatter) -> Self {
        self.pipeline.formatter = formatter;
        self
    }

    pub fn name(&self) -> &LoggerName {
        self.pipeline.logger.name()
    }

    pub fn extra(&self) -> &Fields {
        &self.pipeline.extra
    }

    pub fn is_enabled_for(&self, severity: Severity) -> bool {
        self.pipeline.logger.is_enabled_for(severity)
    }

    pub fn debug(&self, event: impl fmt::Display, fields: Fields) -> Result<(), KvLogError> {
        self.log(Severity::Debug, event, fields)
    }

    pub fn info(&self, event: impl fmt::Display, fields: Fields) -> Result<(), KvLogError> {
        self.log(Severity::Info, event, fields)
    }

    pub fn warning(&self, event: impl fmt::Display, fields: Fields) -> Result<(), KvLogError> {
        self.log(Severity::Warning, event, fields)
    }

    pub fn error(&self, event: impl fmt::Display, fields: Fields) -> Result<(), KvLogError> {
        self.log(Severity::Error, event, fields)
    }

    pub fn critical(&self, event: impl fmt::Display, fields: Fields) -> Result<(), KvLogError> {
        self.log(Severity::Critical, event, fields)
    }

    pub fn exception(
        &self,
        event: impl fmt::Display,
        error: &(dyn Error + 'static),
        fields: Fields,
    ) -> Result<(), KvLogError> {
        let event = self.pipeline.event_field(&event, &fields)?;
        self.pipeline
            .emit(Severity::Error, Some(event), fields, Some(error));
        Ok(())
    }

    /// **Errors**
    /// - [`KvLogError::MultipleValues`] if the default or call-site fields
    ///   contain an `event` field. Nothing is emitted then.
    pub fn log(&self, severity: Severity, event: impl fmt::Display, fields: Fields) -> Result<(), KvLogError> {
        let event = self.pipeline.event_field(&event, &fields)?;
        self.pipeline.emit(severity, Some(event), fields, None);
        Ok(())
    }

    /// Like [`KvLoggerAdapter::define_logger_func`]; the returned function
    /// takes the event name as an extra leading value, so `event` is not
    /// accepted among `names`.
    pub fn define_logger_func(&self, severity: Severity, names: &str) -> Result<LoggerFunc, KvLogError> {
        LoggerFunc::new(self.pipeline.clone(), severity, names, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FormatConfig;
    use crate::kv;

    #[test]
    fn renders_extra_before_call_site() {
        let log = KvLoggerAdapter::root().with_extra(kv! { extrawurst = true });
        assert_eq!(
            log.pipeline.render(None, kv! { log = "value" }),
            "extrawurst=true   log=value"
        );
    }

    #[test]
    fn call_site_overrides_extra_in_place() {
        let log = KvLoggerAdapter::root().with_extra(kv! { env = "dev", app = "x" });
        assert_eq!(
            log.pipeline.render(None, kv! { user = 1, env = "prod" }),
            "env=prod   app=x   user=1"
        );
    }

    #[test]
    fn event_leads_everything() {
        let log = EventKvLoggerAdapter::get_logger(["svc"]).with_extra(kv! { region = "eu" });
        assert_eq!(
            log.pipeline.render(Some(Field::new(EVENT_FIELD, "LOGIN")), kv! { user = 7 }),
            "event=LOGIN   region=eu   user=7"
        );
        assert_eq!(log.name().as_str(), "svc");
    }

    #[test]
    fn event_field_collisions_are_rejected() {
        let log = EventKvLoggerAdapter::root();
        let fields = kv! { event = "OVERRIDE", user = 1 };
        assert_eq!(
            log.pipeline.event_field(&"LOGIN", &fields),
            Err(KvLogError::MultipleValues {
                name: "event".to_string()
            })
        );

        let log = log.with_extra(kv! { event = "DEFAULT" });
        let err = log.info("LOGIN", kv! { user = 1 }).unwrap_err();
        assert_eq!(err.to_string(), "got multiple values for argument 'event'");
    }

    #[test]
    fn custom_formatter_is_used() {
        let log = KvLoggerAdapter::root().with_formatter(KvFormatter::new(FormatConfig {
            separator: ", ".to_string(),
            min_token_width: 0,
        }));
        assert_eq!(log.pipeline.render(None, kv! { a = 1, b = 2 }), "a=1, b=2");
    }
}
