//! The attribute map type shared by all Guacamole resources.

use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// A string-to-string attribute map that round-trips correctly with the
/// Guacamole API's attribute JSON.
///
/// The server is inconsistent about empty attribute values: depending on the
/// backend it returns either `""` or `null` for an unset key. On
/// deserialization, `null` values are normalised to empty strings so callers
/// always see a plain string map.
///
/// On serialization the map always encodes as a JSON object — `{}` when
/// empty — never `null` and never an omitted field. Guacamole responds with
/// HTTP 500 when the attributes field is missing or null, so model fields of
/// this type must not carry `skip_serializing_if`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(HashMap<String, String>);

impl Attributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the wrapper and return the inner map.
    pub fn into_inner(self) -> HashMap<String, String> {
        self.0
    }
}

impl Deref for Attributes {
    type Target = HashMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Attributes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<HashMap<String, String>> for Attributes {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // An empty map serializes as {}, satisfying the always-an-object
        // contract without special-casing.
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Attributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = HashMap::<String, Option<String>>::deserialize(deserializer)?;
        Ok(Self(
            raw.into_iter()
                .map(|(k, v)| (k, v.unwrap_or_default()))
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_null_becomes_empty_string() {
        let attrs: Attributes =
            serde_json::from_str(r#"{"guac-full-name":null,"guac-email-address":"a@b.c"}"#)
                .unwrap();
        assert_eq!(attrs.get("guac-full-name").map(String::as_str), Some(""));
        assert_eq!(
            attrs.get("guac-email-address").map(String::as_str),
            Some("a@b.c")
        );
    }

    #[test]
    fn test_deserialize_empty_object() {
        let attrs: Attributes = serde_json::from_str("{}").unwrap();
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_serialize_empty_is_object_literal() {
        let attrs = Attributes::new();
        assert_eq!(serde_json::to_string(&attrs).unwrap(), "{}");
    }

    #[test]
    fn test_serialize_default_is_object_literal() {
        // The zero value must also encode as {}, never null
        assert_eq!(serde_json::to_string(&Attributes::default()).unwrap(), "{}");
    }

    #[test]
    fn test_serialize_values_pass_through() {
        let attrs: Attributes = [("max-connections", "5")].into_iter().collect();
        assert_eq!(
            serde_json::to_string(&attrs).unwrap(),
            r#"{"max-connections":"5"}"#
        );
    }

    #[test]
    fn test_round_trip_normalises_null() {
        let attrs: Attributes = serde_json::from_str(r#"{"k":null}"#).unwrap();
        let encoded = serde_json::to_string(&attrs).unwrap();
        assert_eq!(encoded, r#"{"k":""}"#);
    }

    #[test]
    fn test_deserialize_rejects_non_object() {
        assert!(serde_json::from_str::<Attributes>("3").is_err());
        assert!(serde_json::from_str::<Attributes>(r#"["a"]"#).is_err());
    }
}
