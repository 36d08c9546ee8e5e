/// Errors raised synchronously by adapter calls that cannot be bound to a
/// log line.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum KvLogError {
    #[error("missing required positional argument: '{name}'")]
    MissingRequiredField { name: &'static str },

    #[error("takes {expected} positional arguments but {given} were given")]
    ArityMismatch { expected: usize, given: usize },

    #[error("got multiple values for argument '{name}'")]
    MultipleValues { name: String },

    #[error("duplicate argument '{name}' in function definition")]
    DuplicateArgument { name: String },

    #[error("unknown severity level: {0}")]
    UnknownLevel(String),
}

/// Error type returned by [`crate::sink::RecordSink`] implementations.
#[derive(thiserror::Error, Debug)]
pub enum SinkError {
    #[error("sink i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize log record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("sink lock poisoned")]
    Poisoned,
}

/// Error type returned when installing the global subscriber.
#[derive(thiserror::Error, Debug)]
pub enum InitError {
    #[error("a global tracing subscriber is already installed")]
    AlreadyInstalled(#[from] tracing::subscriber::SetGlobalDefaultError),
}
