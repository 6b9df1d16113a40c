//! Catalog admin client - drive the product association type admin API.
//!
//! This crate provides a JSON-LD client for the admin API together with the
//! step operations behavioural scenarios use to create, browse, edit and
//! delete product association types.
//!
//! # Example
//!
//! ```
//! use catalog_admin_client::config;
//!
//! // Validate codes and locales before sending them
//! assert!(config::validate_code("similar_products").is_ok());
//! assert!(config::validate_locale_code("en_US").is_ok());
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Configuration and input validation
//! - [`error`]: Error types and Result alias
//! - [`request`]: Create/update request bodies being built
//! - [`response`]: Parsed responses
//! - [`client`]: `ApiClient` contract and its reqwest implementation
//! - [`checker`]: `ResponseChecker` contract for Hydra collections
//! - [`storage`]: `SharedStorage` contract and in-memory bag
//! - [`context`]: Step operations for product association types
//! - [`cli`]: Command-line interface

pub mod checker;
pub mod cli;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod request;
pub mod response;
pub mod storage;

// Re-export commonly used items
pub use checker::{HydraResponseChecker, ResponseChecker};
pub use client::{ApiClient, HttpApiClient};
pub use config::{validate_code, validate_locale_code, AdminApiConfig};
pub use context::ManagingProductAssociationTypes;
pub use error::{AdminClientError, Result};
pub use response::ApiResponse;
pub use storage::{InMemorySharedStorage, SharedStorage};
