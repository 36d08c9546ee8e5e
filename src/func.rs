use std::fmt;

use crate::adapter::{Pipeline, EVENT_FIELD};
use crate::error::KvLogError;
use crate::fields::{Field, Fields};
use crate::severity::Severity;

/// A logging function with fixed parameter names, produced by
/// `define_logger_func` on either adapter.
///
/// Positional values are zipped with the names in order. Functions built
/// from an event adapter take the event name as an additional first value.
#[derive(Debug, Clone)]
pub struct LoggerFunc {
    pipeline: Pipeline,
    severity: Severity,
    names: Vec<String>,
    requires_event: bool,
}

impl LoggerFunc {
    /// Parse `names` and reject repeated names. For event functions
    /// `event` itself counts as the first name.
    pub(crate) fn new(
        pipeline: Pipeline,
        severity: Severity,
        names: &str,
        requires_event: bool,
    ) -> Result<Self, KvLogError> {
        let mut seen: Vec<&str> = Vec::new();
        if requires_event {
            seen.push(EVENT_FIELD);
        }
        for name in names.split_whitespace() {
            if seen.contains(&name) {
                return Err(KvLogError::DuplicateArgument {
                    name: name.to_string(),
                });
            }
            seen.push(name);
        }

        Ok(Self {
            pipeline,
            severity,
            names: seen
                .into_iter()
                .skip(usize::from(requires_event))
                .map(str::to_string)
                .collect(),
            requires_event,
        })
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of positional values [`LoggerFunc::call`] expects.
    pub fn arity(&self) -> usize {
        self.names.len() + usize::from(self.requires_event)
    }

    /// Bind `args` and emit one record.
    ///
    /// **Errors**
    /// - [`KvLogError::MissingRequiredField`] when an event function gets
    ///   no values at all.
    /// - [`KvLogError::ArityMismatch`] for any other count that differs
    ///   from [`LoggerFunc::arity`].
    /// - [`KvLogError::MultipleValues`] when the adapter's default fields
    ///   already carry an `event` field.
    pub fn call(&self, args: &[&dyn fmt::Display]) -> Result<(), KvLogError> {
        let (event, fields) = self.bind(args)?;
        self.pipeline.emit(self.severity, event, fields, None);
        Ok(())
    }

    fn bind(&self, args: &[&dyn fmt::Display]) -> Result<(Option<Field>, Fields), KvLogError> {
        if self.requires_event && args.is_empty() {
            return Err(KvLogError::MissingRequiredField { name: EVENT_FIELD });
        }
        if args.len() != self.arity() {
            return Err(KvLogError::ArityMismatch {
                expected: self.arity(),
                given: args.len(),
            });
        }

        let (event, values) = if self.requires_event {
            (Some(args[0]), &args[1..])
        } else {
            (None, args)
        };
        let fields: Fields = self
            .names
            .iter()
            .zip(values)
            .map(|(name, value)| Field::new(name.as_str(), value))
            .collect();
        let event = match event {
            Some(event) => Some(self.pipeline.event_field(event, &fields)?),
            None => None,
        };
        Ok((event, fields))
    }
}
