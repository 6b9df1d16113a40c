//! Given step definitions
//!
//! Steps that set up the initial state for scenarios.

use cucumber::given;

use crate::helpers::names::{name_to_code, quoted_names};
use crate::world::AdminWorld;

// =============================================================================
// Background steps
// =============================================================================

#[given("I am logged in as an administrator")]
async fn logged_in_as_administrator(world: &mut AdminWorld) {
    world.log_in_as_administrator().await;
}

// =============================================================================
// Product association type fixtures
// =============================================================================

#[given(expr = "the store has a product association type {string}")]
fn store_has_association_type(world: &mut AdminWorld, name: String) {
    world.repository.add(&name_to_code(&name), &name);
}

#[given(expr = "the store has a product association type {string} with a code {string}")]
fn store_has_association_type_with_code(world: &mut AdminWorld, name: String, code: String) {
    world.repository.add(&code, &name);
}

#[given(regex = r#"^the store has(?: also)? product association types (".+")$"#)]
fn store_has_association_types(world: &mut AdminWorld, list: String) {
    for name in quoted_names(&list) {
        world.repository.add(&name_to_code(&name), &name);
    }
}
