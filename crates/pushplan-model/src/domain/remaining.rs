use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Manifest keys the model does not interpret.
///
/// They are captured on parse and written back unchanged, so override
/// handlers never drop configuration they do not own (routes, env, services...).
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemainingFields(pub BTreeMap<String, Value>);

impl RemainingFields {
    /// Create an empty set.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns `true` if nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Insert or overwrite a raw key.
    pub fn insert<K: Into<String>>(&mut self, key: K, value: Value) -> &mut Self {
        self.0.insert(key.into(), value);
        self
    }

    /// Get a raw value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}
