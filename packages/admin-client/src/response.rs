//! Parsed admin API responses.

use serde_json::Value;

/// A fully read response: status code plus JSON body.
///
/// An empty body (e.g. `204 No Content`) is represented as `Value::Null`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Look up a top-level field of the body.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.body.get(field)
    }
}
