use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use stockroom_core::ValueObject;

/// Insertion-ordered `name -> value` pairs.
///
/// Used for item storage requirements, bin constraints and supplier contact
/// details. Renders as `{key=value, key=value}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(IndexMap<String, String>);

impl ValueObject for Attributes {}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

impl core::fmt::Display for Attributes {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k}={v}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order_on_replace() {
        let mut attrs: Attributes = [("temperature", "cold"), ("humidity", "low")]
            .into_iter()
            .collect();
        attrs.insert("temperature", "frozen");

        let keys: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["temperature", "humidity"]);
        assert_eq!(attrs.get("temperature"), Some("frozen"));
        assert_eq!(attrs.to_string(), "{temperature=frozen, humidity=low}");
    }

    #[test]
    fn empty_renders_braces() {
        assert_eq!(Attributes::new().to_string(), "{}");
    }
}
