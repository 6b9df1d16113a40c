//! Step operations for managing product association types.
//!
//! Each method backs one Gherkin phrase. Assertions return
//! [`AdminClientError::AssertionFailed`] with the message a failing scenario
//! should report; everything else is forwarded to the collaborators.

use serde_json::{json, Map, Value};

use crate::checker::ResponseChecker;
use crate::client::ApiClient;
use crate::error::{AdminClientError, Result};
use crate::storage::SharedStorage;

/// Shared storage key of the product association type a scenario acts on.
pub const PRODUCT_ASSOCIATION_TYPE_CODE_KEY: &str = "product_association_type_code";

/// Violation reported when a product association type is created without code.
pub const CODE_REQUIRED_MESSAGE: &str = "Please enter association type code.";

/// Violation reported when a product association type code is already taken.
pub const CODE_NOT_UNIQUE_MESSAGE: &str = "The association type with given code already exists.";

/// Code sent when checking that codes cannot be changed after creation.
pub const REPLACEMENT_CODE: &str = "NEW_CODE";

fn ensure(condition: bool, message: impl Into<String>) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(AdminClientError::AssertionFailed(message.into()))
    }
}

/// `{"translations": {locale: {"name", "locale"}}}` request data.
pub(crate) fn translation_payload(name: &str, locale: &str) -> Map<String, Value> {
    let mut translations = Map::new();
    translations.insert(
        locale.to_string(),
        json!({ "name": name, "locale": locale }),
    );

    let mut data = Map::new();
    data.insert("translations".to_string(), Value::Object(translations));
    data
}

/// Admin steps for product association types, generic over the API client,
/// response checker and shared storage they drive.
#[derive(Debug)]
pub struct ManagingProductAssociationTypes<C, R, S> {
    client: C,
    checker: R,
    storage: S,
}

impl<C, R, S> ManagingProductAssociationTypes<C, R, S>
where
    C: ApiClient,
    R: ResponseChecker,
    S: SharedStorage,
{
    pub fn new(client: C, checker: R, storage: S) -> Self {
        Self {
            client,
            checker,
            storage,
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn stored_code(&self) -> Result<String> {
        let value = self.storage.get(PRODUCT_ASSOCIATION_TYPE_CODE_KEY)?;
        Ok(value
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()))
    }

    // =========================================================================
    // Creating
    // =========================================================================

    /// "I want to create a new product association type"
    pub fn want_to_create(&mut self) {
        self.client.build_create_request();
    }

    /// "I specify its code as :code"
    pub fn specify_code(&mut self, code: &str) -> Result<()> {
        self.client.add_request_data("code", Value::String(code.to_string()))
    }

    /// "I name it :name in :locale"
    pub fn name_it_in(&mut self, name: &str, locale: &str) -> Result<()> {
        self.client
            .update_request_data(translation_payload(name, locale))
    }

    /// "I add it" / "I try to add it"
    pub async fn add_it(&mut self) -> Result<()> {
        self.client.create().await?;
        Ok(())
    }

    /// "I should be notified that it has been successfully created"
    pub fn assert_created(&self) -> Result<()> {
        ensure(
            self.checker
                .is_creation_successful(self.client.last_response()?),
            "Product association type could not be created",
        )
    }

    /// "the product association type :name should appear in the store"
    pub async fn assert_appears_in_store(&mut self, name: &str) -> Result<()> {
        self.assert_in_list(name).await
    }

    // =========================================================================
    // Browsing
    // =========================================================================

    /// "I want to browse product association types"
    pub async fn browse(&mut self) -> Result<()> {
        self.client.index().await?;
        Ok(())
    }

    /// "I should see :count product association types in the list"
    pub async fn assert_count(&mut self, expected: usize) -> Result<()> {
        let response = self.client.index().await?;
        let actual = self.checker.count_collection_items(&response)?;
        ensure(
            actual == expected,
            format!("Expected {expected} product association types in the list, found {actual}"),
        )
    }

    /// "I should see the product association type :name in the list"
    pub async fn assert_in_list(&mut self, name: &str) -> Result<()> {
        let response = self.client.index().await?;
        ensure(
            self.checker.has_item_with_value(&response, "name", name)?,
            format!("There is no product association type with name \"{name}\""),
        )
    }

    // =========================================================================
    // Deleting
    // =========================================================================

    /// "I delete the :productAssociationType product association type"
    pub async fn delete(&mut self, code: &str) -> Result<()> {
        self.storage.set(
            PRODUCT_ASSOCIATION_TYPE_CODE_KEY,
            Value::String(code.to_string()),
        );
        self.client.delete(code).await?;
        Ok(())
    }

    /// "I should be notified that it has been successfully deleted"
    pub fn assert_deleted(&self) -> Result<()> {
        ensure(
            self.checker
                .is_deletion_successful(self.client.last_response()?),
            "Product association type could not be deleted",
        )
    }

    /// "this product association type should no longer exist in the registry"
    pub async fn assert_no_longer_exists(&mut self) -> Result<()> {
        let code = self.stored_code()?;
        let response = self.client.index().await?;
        ensure(
            !self.checker.has_item_with_value(&response, "code", &code)?,
            format!("Product association type with code {code} exist"),
        )
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// "I want to modify the :productAssociationType product association type"
    pub fn want_to_modify(&mut self, code: &str) {
        self.storage.set(
            PRODUCT_ASSOCIATION_TYPE_CODE_KEY,
            Value::String(code.to_string()),
        );
        self.client.build_update_request(code);
    }

    /// "I rename it to :name in :locale"
    pub fn rename_it_to(&mut self, name: &str, locale: &str) -> Result<()> {
        self.name_it_in(name, locale)
    }

    /// "I save my changes"
    pub async fn save_changes(&mut self) -> Result<()> {
        self.client.update().await?;
        Ok(())
    }

    /// "I should be notified that it has been successfully edited"
    pub fn assert_edited(&self) -> Result<()> {
        ensure(
            self.checker
                .is_update_successful(self.client.last_response()?),
            "Product association type could not be edited",
        )
    }

    /// "this product association type name should be :name"
    pub async fn assert_name_is(&mut self, name: &str) -> Result<()> {
        let code = self.stored_code()?;
        let response = self.client.show(&code).await?;
        ensure(
            self.checker.has_value(&response, "name", name),
            format!("Product association type with code {code} is not named \"{name}\""),
        )
    }

    /// "I should not be able to edit its code"
    pub async fn assert_code_is_immutable(&mut self) -> Result<()> {
        self.client
            .add_request_data("code", Value::String(REPLACEMENT_CODE.to_string()))?;
        let response = self.client.update().await?;
        ensure(
            !self.checker.has_value(&response, "code", REPLACEMENT_CODE),
            "The code field with value NEW_CODE exist",
        )
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// "I should be notified that code is required"
    pub fn assert_code_required(&self) -> Result<()> {
        self.assert_violation("code", CODE_REQUIRED_MESSAGE)
    }

    /// "I should be notified that product association type with this code already exists"
    pub fn assert_code_not_unique(&self) -> Result<()> {
        self.assert_violation("code", CODE_NOT_UNIQUE_MESSAGE)
    }

    /// "there should still be only one product association type with code :code"
    pub async fn assert_only_one_with_code(&mut self, code: &str) -> Result<()> {
        let response = self.client.index().await?;
        let count = self
            .checker
            .count_items_with_value(&response, "code", code)?;
        ensure(
            count == 1,
            format!("Expected one product association type with code {code}, found {count}"),
        )
    }

    fn assert_violation(&self, property: &str, message: &str) -> Result<()> {
        let response = self.client.last_response()?;
        let expected = format!("{property}: {message}");
        let actual = self.checker.error_message(response).unwrap_or_default();
        ensure(
            !response.is_success() && actual.contains(&expected),
            format!(
                "Expected violation \"{expected}\", got status {} with \"{actual}\"",
                response.status
            ),
        )
    }
}
