//! The write request being assembled by step definitions.

use serde_json::{Map, Value};

/// HTTP method of a write request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMethod {
    Post,
    Put,
}

impl WriteMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            WriteMethod::Post => "POST",
            WriteMethod::Put => "PUT",
        }
    }
}

/// A create or update request whose JSON body is built up field by field.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: WriteMethod,
    /// Resource code for updates, `None` for creates.
    pub code: Option<String>,
    pub body: Map<String, Value>,
}

impl ApiRequest {
    pub fn create() -> Self {
        Self {
            method: WriteMethod::Post,
            code: None,
            body: Map::new(),
        }
    }

    pub fn update(code: impl Into<String>) -> Self {
        Self {
            method: WriteMethod::Put,
            code: Some(code.into()),
            body: Map::new(),
        }
    }

    /// Set a top-level body field, replacing any previous value.
    pub fn add(&mut self, key: impl Into<String>, value: Value) {
        self.body.insert(key.into(), value);
    }

    /// Deep-merge `data` into the body.
    pub fn merge(&mut self, data: Map<String, Value>) {
        merge_objects(&mut self.body, data);
    }
}

/// Objects merge key by key, any other value replaces what was there.
fn merge_objects(target: &mut Map<String, Value>, source: Map<String, Value>) {
    for (key, value) in source {
        match (target.get_mut(&key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                merge_objects(existing, incoming);
            }
            (_, value) => {
                target.insert(key, value);
            }
        }
    }
}
