//! Interpretation of admin API responses.

use serde_json::Value;

use crate::error::{AdminClientError, Result};
use crate::response::ApiResponse;

/// Hydra key holding the items of a collection.
pub const HYDRA_MEMBER: &str = "hydra:member";

/// Hydra key holding the total number of items in a collection.
pub const HYDRA_TOTAL_ITEMS: &str = "hydra:totalItems";

/// Hydra key holding a human-readable error description.
pub const HYDRA_DESCRIPTION: &str = "hydra:description";

/// Questions step definitions ask about a response.
pub trait ResponseChecker: Send + Sync {
    fn is_creation_successful(&self, response: &ApiResponse) -> bool;

    fn is_deletion_successful(&self, response: &ApiResponse) -> bool;

    fn is_update_successful(&self, response: &ApiResponse) -> bool;

    /// Number of items in a collection response.
    fn count_collection_items(&self, response: &ApiResponse) -> Result<usize>;

    /// Whether any collection item has `field` equal to `value`.
    fn has_item_with_value(&self, response: &ApiResponse, field: &str, value: &str)
        -> Result<bool>;

    /// How many collection items have `field` equal to `value`.
    fn count_items_with_value(
        &self,
        response: &ApiResponse,
        field: &str,
        value: &str,
    ) -> Result<usize>;

    /// Whether a single-item response has `field` equal to `value`.
    fn has_value(&self, response: &ApiResponse, field: &str, value: &str) -> bool;

    /// Error description carried by a failed response.
    fn error_message(&self, response: &ApiResponse) -> Option<String>;
}

/// Checker for JSON-LD responses using the Hydra collection vocabulary.
#[derive(Debug, Clone, Copy, Default)]
pub struct HydraResponseChecker;

impl HydraResponseChecker {
    pub fn new() -> Self {
        Self
    }

    fn collection<'a>(&self, response: &'a ApiResponse) -> Result<&'a Vec<Value>> {
        response
            .get(HYDRA_MEMBER)
            .and_then(Value::as_array)
            .ok_or_else(|| {
                AdminClientError::UnexpectedResponse(format!(
                    "expected a collection with '{HYDRA_MEMBER}' (status {}), got: {}",
                    response.status, response.body
                ))
            })
    }
}

/// Compare a JSON field against a step argument.
///
/// Strings compare verbatim; other scalars compare by their JSON rendering so
/// `"3"` matches `3` and `"true"` matches `true`.
fn field_matches(field_value: Option<&Value>, expected: &str) -> bool {
    match field_value {
        Some(Value::String(s)) => s == expected,
        Some(Value::Null) | None => false,
        Some(other) => other.to_string() == expected,
    }
}

impl ResponseChecker for HydraResponseChecker {
    fn is_creation_successful(&self, response: &ApiResponse) -> bool {
        response.status == 201
    }

    fn is_deletion_successful(&self, response: &ApiResponse) -> bool {
        response.status == 204
    }

    fn is_update_successful(&self, response: &ApiResponse) -> bool {
        response.status == 200
    }

    fn count_collection_items(&self, response: &ApiResponse) -> Result<usize> {
        if let Some(total) = response.get(HYDRA_TOTAL_ITEMS).and_then(Value::as_u64) {
            return usize::try_from(total).map_err(|_| {
                AdminClientError::UnexpectedResponse(format!(
                    "'{HYDRA_TOTAL_ITEMS}' out of range: {total}"
                ))
            });
        }
        Ok(self.collection(response)?.len())
    }

    fn has_item_with_value(
        &self,
        response: &ApiResponse,
        field: &str,
        value: &str,
    ) -> Result<bool> {
        Ok(self
            .collection(response)?
            .iter()
            .any(|item| field_matches(item.get(field), value)))
    }

    fn count_items_with_value(
        &self,
        response: &ApiResponse,
        field: &str,
        value: &str,
    ) -> Result<usize> {
        Ok(self
            .collection(response)?
            .iter()
            .filter(|item| field_matches(item.get(field), value))
            .count())
    }

    fn has_value(&self, response: &ApiResponse, field: &str, value: &str) -> bool {
        field_matches(response.get(field), value)
    }

    fn error_message(&self, response: &ApiResponse) -> Option<String> {
        [HYDRA_DESCRIPTION, "detail", "message"]
            .iter()
            .find_map(|key| response.get(key).and_then(Value::as_str))
            .map(str::to_string)
    }
}
