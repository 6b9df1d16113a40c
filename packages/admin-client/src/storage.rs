//! Scenario-scoped key-value storage shared between steps.

use serde_json::Value;
use std::collections::HashMap;

use crate::error::{AdminClientError, Result};

pub trait SharedStorage: Send {
    fn set(&mut self, key: &str, value: Value);

    /// Fails with `MissingStorageKey` when nothing was stored under `key`.
    fn get(&self, key: &str) -> Result<&Value>;

    fn has(&self, key: &str) -> bool;

    /// The value passed to the most recent `set`.
    fn latest(&self) -> Option<&Value>;
}

#[derive(Debug, Default, Clone)]
pub struct InMemorySharedStorage {
    values: HashMap<String, Value>,
    latest_key: Option<String>,
}

impl InMemorySharedStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SharedStorage for InMemorySharedStorage {
    fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
        self.latest_key = Some(key.to_string());
    }

    fn get(&self, key: &str) -> Result<&Value> {
        self.values
            .get(key)
            .ok_or_else(|| AdminClientError::MissingStorageKey(key.to_string()))
    }

    fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn latest(&self) -> Option<&Value> {
        self.latest_key.as_ref().and_then(|k| self.values.get(k))
    }
}
