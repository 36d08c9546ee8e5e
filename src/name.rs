use std::fmt;

/// Separator between logger name segments.
pub const SEPARATOR: char = '.';

/// Name reported for the logger at the top of the hierarchy.
pub const ROOT_NAME: &str = "root";

/// A normalized dotted logger name.
///
/// Never contains empty segments; an empty segment list is the root logger.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoggerName(String);

impl LoggerName {
    pub fn root() -> Self {
        LoggerName(ROOT_NAME.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == ROOT_NAME
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        let name = if self.is_root() { "" } else { self.0.as_str() };
        name.split(SEPARATOR).filter(|s| !s.is_empty())
    }

    /// The next logger up the hierarchy. Top-level names have the root as
    /// parent; the root has none.
    pub fn parent(&self) -> Option<LoggerName> {
        if self.is_root() {
            return None;
        }
        match self.0.rsplit_once(SEPARATOR) {
            Some((parent, _)) => Some(LoggerName(parent.to_string())),
            None => Some(LoggerName::root()),
        }
    }
}

impl fmt::Display for LoggerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LoggerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Join raw name segments into a [`LoggerName`].
///
/// Each segment is split on [`SEPARATOR`] and empty pieces are dropped, so
/// `"myapp...submodule"`, `("myapp.", "submodule")` and
/// `("myapp", "submodule")` all resolve to `myapp.submodule`. No segments,
/// or only separators, resolve to the root.
pub fn resolve_name<I, S>(segments: I) -> LoggerName
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parts: Vec<String> = Vec::new();
    for segment in segments {
        parts.extend(
            segment
                .as_ref()
                .split(SEPARATOR)
                .filter(|piece| !piece.is_empty())
                .map(str::to_string),
        );
    }

    if parts.is_empty() {
        LoggerName::root()
    } else {
        let separator = SEPARATOR.to_string();
        LoggerName(parts.join(separator.as_str()))
    }
}
