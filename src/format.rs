use crate::fields::{Field, Fields};

/// Text placed between two rendered tokens.
pub const DEFAULT_SEPARATOR: &str = "   ";

/// Minimum width of every token but the last. Zero disables padding.
pub const DEFAULT_MIN_TOKEN_WIDTH: usize = 0;

/// Layout knobs for [`KvFormatter`].
///
/// With the defaults two short fields render as `a=23   b=45`. A non-zero
/// `min_token_width` right-pads each non-final token with spaces so that
/// consecutive lines line up in columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    pub separator: String,
    pub min_token_width: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            min_token_width: DEFAULT_MIN_TOKEN_WIDTH,
        }
    }
}

/// Renders ordered fields as a human-readable `key=value` line.
///
/// Values render through `Display`, so a `bool` prints as `true`/`false`.
/// No escaping happens: the output is meant for people, not parsers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KvFormatter {
    config: FormatConfig,
}

impl KvFormatter {
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    pub fn format(&self, fields: &Fields) -> String {
        let mut out = String::new();
        let mut tokens = fields.iter().peekable();
        while let Some(field) = tokens.next() {
            let token = render(field);
            if tokens.peek().is_none() {
                out.push_str(&token);
                break;
            }
            out.push_str(&format!("{:<width$}", token, width = self.config.min_token_width));
            out.push_str(&self.config.separator);
        }
        out
    }
}

fn render(field: &Field) -> String {
    format!("{}={}", field.name, field.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv;

    #[test]
    fn joins_short_values_with_three_spaces() {
        let formatter = KvFormatter::default();
        assert_eq!(formatter.format(&kv! { a = 23, b = 45 }), "a=23   b=45");
        assert_eq!(
            formatter.format(&kv! { a = "test", b = "toast", c = "taste" }),
            "a=test   b=toast   c=taste"
        );
    }

    #[test]
    fn empty_and_single() {
        let formatter = KvFormatter::default();
        assert_eq!(formatter.format(&Fields::new()), "");
        assert_eq!(formatter.format(&kv! { only = 1 }), "only=1");
    }

    #[test]
    fn values_are_not_escaped() {
        let formatter = KvFormatter::default();
        assert_eq!(
            formatter.format(&kv! { msg = "a b=c", n = -1 }),
            "msg=a b=c   n=-1"
        );
    }

    #[test]
    fn pads_tokens_to_column_width() {
        let formatter = KvFormatter::new(FormatConfig {
            separator: " ".to_string(),
            min_token_width: 8,
        });
        let first = formatter.format(&kv! { a = 1, b = 22, c = 3 });
        let second = formatter.format(&kv! { a = 100, b = 2, c = 3 });
        assert_eq!(first, "a=1      b=22     c=3");
        assert_eq!(second, "a=100    b=2      c=3");
        assert_eq!(first.find("c="), second.find("c="));
    }

    #[test]
    fn long_tokens_are_never_truncated() {
        let formatter = KvFormatter::new(FormatConfig {
            separator: "   ".to_string(),
            min_token_width: 4,
        });
        assert_eq!(
            formatter.format(&kv! { long = "value", b = 2 }),
            "long=value   b=2"
        );
    }
}
