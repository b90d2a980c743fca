use serde::Serialize;
use std::collections::BTreeMap;

/// Flat `key -> value` map handed to the policy as `input`.
///
/// Values stay strings; no type coercion happens before evaluation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InputMap(BTreeMap<String, String>);

impl InputMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair, returning the value it replaced (if any).
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The map as a JSON object of string values.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.iter()
                .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InputMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = InputMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn later_insert_replaces_earlier() {
        let mut map = InputMap::new();
        assert_eq!(map.insert("env", "QA"), None);
        assert_eq!(map.insert("env", "PROD"), Some("QA".to_string()));
        assert_eq!(map.get("env"), Some("PROD"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn serializes_as_flat_object() {
        let map: InputMap = [("market", "TW"), ("env", "QA")].into_iter().collect();
        assert_eq!(map.to_json(), json!({"env": "QA", "market": "TW"}));
        assert_eq!(
            serde_json::to_value(&map).expect("serialize"),
            json!({"env": "QA", "market": "TW"})
        );
    }
}
