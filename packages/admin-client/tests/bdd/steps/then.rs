//! Then step definitions
//!
//! Steps that verify outcomes and assertions.

use cucumber::then;

use super::check;
use crate::world::AdminWorld;

// =============================================================================
// Notifications
// =============================================================================

#[then("I should be notified that it has been successfully created")]
fn notified_created(world: &mut AdminWorld) {
    check(world.steps().assert_created());
}

#[then("I should be notified that it has been successfully edited")]
fn notified_edited(world: &mut AdminWorld) {
    check(world.steps().assert_edited());
}

#[then("I should be notified that it has been successfully deleted")]
fn notified_deleted(world: &mut AdminWorld) {
    check(world.steps().assert_deleted());
}

#[then("I should be notified that code is required")]
fn notified_code_required(world: &mut AdminWorld) {
    check(world.steps().assert_code_required());
}

#[then("I should be notified that product association type with this code already exists")]
fn notified_code_not_unique(world: &mut AdminWorld) {
    check(world.steps().assert_code_not_unique());
}

// =============================================================================
// Listing
// =============================================================================

#[then(expr = "the product association type {string} should appear in the store")]
async fn appears_in_store(world: &mut AdminWorld, name: String) {
    check(world.steps().assert_appears_in_store(&name).await);
}

#[then(expr = "I should see {int} product association type(s) in the list")]
async fn sees_count_in_list(world: &mut AdminWorld, count: usize) {
    check(world.steps().assert_count(count).await);
}

#[then(expr = "I should see the product association type {string} in the list")]
async fn sees_in_list(world: &mut AdminWorld, name: String) {
    check(world.steps().assert_in_list(&name).await);
}

#[then(expr = "there should still be only one product association type with code {string}")]
async fn only_one_with_code(world: &mut AdminWorld, code: String) {
    check(world.steps().assert_only_one_with_code(&code).await);
}

// =============================================================================
// Single resource
// =============================================================================

#[then("this product association type should no longer exist in the registry")]
async fn no_longer_exists(world: &mut AdminWorld) {
    check(world.steps().assert_no_longer_exists().await);
}

#[then(expr = "this product association type name should be {string}")]
async fn name_should_be(world: &mut AdminWorld, name: String) {
    check(world.steps().assert_name_is(&name).await);
}

#[then("I should not be able to edit its code")]
async fn code_is_immutable(world: &mut AdminWorld) {
    check(world.steps().assert_code_is_immutable().await);
}
