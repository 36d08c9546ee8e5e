use std::fmt;

/// One named value passed to a logging call, rendered eagerly through
/// `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: String,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl fmt::Display) -> Self {
        Field {
            name: name.into(),
            value: value.to_string(),
        }
    }
}

/// Ordered field set of a single call.
///
/// Order is the call-site order. [`Fields::insert`] behaves like a mapping
/// update: a name that is already present keeps its position and takes the
/// new value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields(Vec<Field>);

impl Fields {
    pub fn new() -> Self {
        Fields(Vec::new())
    }

    /// Append without checking for an existing field of the same name.
    pub fn push(&mut self, field: Field) {
        self.0.push(field);
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl fmt::Display) {
        let field = Field::new(name, value);
        match self.0.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => existing.value = field.value,
            None => self.0.push(field),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.insert(name, value);
        self
    }

    /// Defaults first, then `call_site` merged over them.
    pub fn merged(defaults: &Fields, call_site: Fields) -> Fields {
        let mut out = defaults.clone();
        for field in call_site.0 {
            out.insert(field.name, field.value);
        }
        out
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.0.iter()
    }
}

impl FromIterator<Field> for Fields {
    fn from_iter<T: IntoIterator<Item = Field>>(iter: T) -> Self {
        Fields(iter.into_iter().collect())
    }
}

impl IntoIterator for Fields {
    type Item = Field;
    type IntoIter = std::vec::IntoIter<Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Build [`Fields`] from `name = value` pairs in call-site order.
///
/// ```
/// use tracing_kv_logger::kv;
///
/// let fields = kv! { user = "alice", attempts = 3 };
/// assert_eq!(fields.get("attempts"), Some("3"));
/// ```
#[macro_export]
macro_rules! kv {
    () => {
        $crate::fields::Fields::new()
    };
    ($($name:ident = $value:expr),+ $(,)?) => {{
        let mut fields = $crate::fields::Fields::new();
        $( fields.insert(stringify!($name), &$value); )+
        fields
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(fields: &Fields) -> Vec<&str> {
        fields.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn macro_keeps_call_site_order() {
        let fields = kv! { z = 1, a = "two", m = true };
        assert_eq!(names(&fields), vec!["z", "a", "m"]);
        assert_eq!(fields.get("m"), Some("true"));
    }

    #[test]
    fn empty_macro() {
        assert!(kv! {}.is_empty());
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut fields = kv! { a = 1, b = 2 };
        fields.insert("a", 9);
        assert_eq!(names(&fields), vec!["a", "b"]);
        assert_eq!(fields.get("a"), Some("9"));
    }

    #[test]
    fn push_allows_duplicates() {
        let mut fields = Fields::new();
        fields.push(Field::new("a", 1));
        fields.push(Field::new("a", 2));
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn merge_puts_defaults_first_and_call_site_wins() {
        let defaults = kv! { service = "api", env = "dev" };
        let merged = Fields::merged(&defaults, kv! { user = 7, env = "prod" });
        assert_eq!(names(&merged), vec!["service", "env", "user"]);
        assert_eq!(merged.get("env"), Some("prod"));
    }
}
