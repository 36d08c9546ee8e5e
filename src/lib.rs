pub mod error;
pub mod severity;
pub mod name;
pub mod fields;
pub mod format;
pub mod logger;
pub mod adapter;
pub mod func;

pub mod record;
pub mod sink;
pub mod layer;
pub mod memory_sink;
pub mod json_sink;

pub mod init;
pub mod env;

pub use adapter::{EventKvLoggerAdapter, KvLoggerAdapter};
pub use error::KvLogError;
pub use fields::{Field, Fields};
pub use format::{FormatConfig, KvFormatter};
pub use func::LoggerFunc;
pub use name::{resolve_name, LoggerName};
pub use severity::Severity;
