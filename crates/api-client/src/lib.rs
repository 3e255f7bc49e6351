//! Authenticated API client for the Foodboard administration backend
//!
//! This crate provides a single HTTP client facade over the Foodboard REST
//! API: authentication, food-item CRUD, and user/role/permission management.
//! The client injects a bearer token from an injected [`TokenProvider`] on
//! every request and exposes one named operation per backend endpoint. Each
//! operation performs exactly one HTTP call; there are no retries, timeouts,
//! or request coalescing.
//!
//! # Example
//!
//! ```rust,no_run
//! use foodboard_api_client::{ClientConfig, FoodboardClient, SessionTokenStore};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let tokens = Arc::new(SessionTokenStore::new());
//!     let client = FoodboardClient::with_config(ClientConfig::from_env()?, tokens.clone())?;
//!
//!     // Log in and stash the session token for subsequent calls
//!     let payload = client.auth().login("admin", "hunter2").await?;
//!     if let Some(token) = payload.get("token").and_then(|t| t.as_str()) {
//!         tokens.set(token);
//!     }
//!
//!     let users = client.admin().users_with_roles().await?;
//!     println!("{users}");
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod token;

pub use client::FoodboardClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use token::{NoToken, SessionTokenStore, StaticToken, TokenProvider};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::FoodboardClient;
    pub use crate::config::ClientConfig;
    pub use crate::endpoints::{AdminApi, AuthApi, FoodsApi};
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::token::{NoToken, SessionTokenStore, StaticToken, TokenProvider};
}
