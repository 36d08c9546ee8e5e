/// Environment variable names used by this crate for configuring the
/// global subscriber from services.
///
/// These are purely helpers; the adapters themselves never read the
/// environment.

/// Minimum severity recorded, e.g. `debug`, `warning`, `critical`.
pub const KV_LOG_LEVEL_ENV: &str = "KV_LOG_LEVEL";

/// `false`/`0`/`off` disables the human-readable stdout layer.
pub const KV_LOG_STDOUT_ENV: &str = "KV_LOG_STDOUT";

/// Read an environment variable or fall back to a provided default.
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Interpret common spellings of a boolean flag; anything else is `None`.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
