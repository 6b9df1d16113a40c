//! World struct for Cucumber BDD tests
//!
//! Contains the test state that persists across steps in a scenario.

use catalog_admin_client::config::PRODUCT_ASSOCIATION_TYPES_RESOURCE;
use catalog_admin_client::{
    AdminApiConfig, HttpApiClient, HydraResponseChecker, InMemorySharedStorage,
    ManagingProductAssociationTypes, SharedStorage,
};
use cucumber::World;
use serde_json::Value;
use std::fmt;

use crate::helpers::fake_admin_api::{FakeAdminApi, ProductAssociationTypeRepository, ADMIN_TOKEN};

/// Step operations wired to the HTTP client.
pub type AdminSteps =
    ManagingProductAssociationTypes<HttpApiClient, HydraResponseChecker, InMemorySharedStorage>;

/// Test world that holds state across steps in a Cucumber scenario.
#[derive(World)]
#[world(init = Self::new)]
pub struct AdminWorld {
    /// Backend data, seeded by Given steps and served by the fake API
    pub repository: ProductAssociationTypeRepository,
    /// Fake admin API, started when the administrator logs in
    pub api: Option<FakeAdminApi>,
    /// Step operations, available once logged in
    pub steps: Option<AdminSteps>,
}

impl fmt::Debug for AdminWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminWorld")
            .field("repository", &self.repository)
            .field("api", &self.api.as_ref().map(FakeAdminApi::base_url))
            .field("steps", &self.steps)
            .finish()
    }
}

impl Default for AdminWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminWorld {
    /// Create a new world with an empty backend.
    pub fn new() -> Self {
        Self {
            repository: ProductAssociationTypeRepository::default(),
            api: None,
            steps: None,
        }
    }

    /// Start the fake API and authenticate a client against it.
    pub async fn log_in_as_administrator(&mut self) {
        let base_url = match &self.api {
            Some(api) => api.base_url(),
            None => {
                let api = FakeAdminApi::start(self.repository.clone()).await;
                let base_url = api.base_url();
                self.api = Some(api);
                base_url
            }
        };

        let config = AdminApiConfig::builder(base_url)
            .token(ADMIN_TOKEN)
            .timeout_secs(5)
            .build();
        let client = HttpApiClient::new(&config, PRODUCT_ASSOCIATION_TYPES_RESOURCE)
            .unwrap_or_else(|e| panic!("Failed to create admin API client: {e}"));

        let mut storage = InMemorySharedStorage::new();
        storage.set("token", Value::String(ADMIN_TOKEN.to_string()));

        self.steps = Some(ManagingProductAssociationTypes::new(
            client,
            HydraResponseChecker::new(),
            storage,
        ));
    }

    /// Step operations; scenarios must log in first.
    pub fn steps(&mut self) -> &mut AdminSteps {
        self.steps
            .as_mut()
            .expect("Not logged in: add \"Given I am logged in as an administrator\"")
    }

    /// Resolve a product association type name to its code.
    pub fn code_of(&self, name: &str) -> String {
        self.repository
            .find_code_by_name(name)
            .unwrap_or_else(|| panic!("Product association type \"{name}\" does not exist"))
    }
}

#[cfg(test)]
mod tests {
    use super::AdminWorld;

    #[test]
    fn test_world_initialization() {
        let world = AdminWorld::new();
        assert!(world.repository.find_code_by_name("Accessories").is_none());
        assert!(world.steps.is_none());
    }
}
