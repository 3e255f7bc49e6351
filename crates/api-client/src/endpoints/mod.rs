//! Endpoint-specific API implementations
//!
//! Each module provides a typed interface for one group of backend endpoints.
//!
//! ## Mapping to the Foodboard backend
//!
//! | Module | Backend controller | Description |
//! |--------|--------------------|-------------|
//! | `auth` | `/auth/*` | Registration and login |
//! | `foods` | `/foods/*` | Food-item CRUD |
//! | `admin` | `/admin/*` | User, role and permission management |

pub mod admin;
pub mod auth;
pub mod foods;

pub use admin::AdminApi;
pub use auth::AuthApi;
pub use foods::FoodsApi;
