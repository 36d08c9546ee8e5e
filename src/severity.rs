use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::Level;

use crate::error::KvLogError;

/// Ordered record importance, `Debug < Info < Warning < Error < Critical`.
///
/// The numeric values follow the conventional 10-step ladder so that
/// callers coming from numeric level APIs can convert with
/// [`Severity::try_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Debug = 10,
    Info = 20,
    Warning = 30,
    Error = 40,
    Critical = 50,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }

    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// `tracing` has no level above `ERROR`; critical records share it and
    /// stay distinguishable through the `severity` field.
    pub fn as_tracing_level(self) -> Level {
        match self {
            Severity::Debug => Level::DEBUG,
            Severity::Info => Level::INFO,
            Severity::Warning => Level::WARN,
            Severity::Error | Severity::Critical => Level::ERROR,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i32> for Severity {
    type Error = KvLogError;

    fn try_from(value: i32) -> Result<Self, KvLogError> {
        Severity::ALL
            .into_iter()
            .find(|s| s.as_i32() == value)
            .ok_or_else(|| KvLogError::UnknownLevel(value.to_string()))
    }
}

impl FromStr for Severity {
    type Err = KvLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARN" | "WARNING" => Ok(Severity::Warning),
            "ERROR" => Ok(Severity::Error),
            "CRITICAL" => Ok(Severity::Critical),
            _ => Err(KvLogError::UnknownLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_importance() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Critical);
    }

    #[test]
    fn numeric_conversion() {
        assert_eq!(Severity::try_from(30), Ok(Severity::Warning));
        assert_eq!(Severity::Critical.as_i32(), 50);
        assert_eq!(
            Severity::try_from(25),
            Err(KvLogError::UnknownLevel("25".to_string()))
        );
    }

    #[test]
    fn parses_names() {
        assert_eq!("warn".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!(" Critical ".parse::<Severity>(), Ok(Severity::Critical));
        assert!("verbose".parse::<Severity>().is_err());
    }

    #[test]
    fn critical_shares_error_level() {
        assert_eq!(Severity::Critical.as_tracing_level(), Level::ERROR);
        assert_eq!(Severity::Warning.as_tracing_level(), Level::WARN);
    }
}
