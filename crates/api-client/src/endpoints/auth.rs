//! Authentication endpoints
//!
//! Both operations collapse failures to a user-facing message string: the
//! `message` field of the server's error body when one is present, otherwise
//! a fixed fallback. Callers cannot distinguish a network failure from a 4xx
//! rejection here; that is the backend contract, not an oversight.

use crate::client::FoodboardClient;
use crate::error::{ApiError, ApiResult};
use serde::Serialize;
use serde_json::Value;

/// Authentication API interface
#[derive(Clone)]
pub struct AuthApi {
    client: FoodboardClient,
}

impl AuthApi {
    /// Create a new auth API interface
    pub(crate) fn new(client: FoodboardClient) -> Self {
        Self { client }
    }

    /// Register a new account
    ///
    /// POST /auth/register
    pub async fn register(&self, username: &str, password: &str) -> ApiResult<Value> {
        self.client
            .post_json("auth/register", &Credentials { username, password })
            .await
            .map_err(|e| normalize(&e, "Registration failed!"))
    }

    /// Log in and obtain a session token
    ///
    /// POST /auth/login
    ///
    /// The payload is expected to carry `token` and `role` fields; storing
    /// the token (e.g. in a [`SessionTokenStore`]) is the caller's job.
    ///
    /// [`SessionTokenStore`]: crate::token::SessionTokenStore
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<Value> {
        self.client
            .post_json("auth/login", &Credentials { username, password })
            .await
            .map_err(|e| normalize(&e, "Login failed!"))
    }
}

/// Wire body for both auth endpoints; field names are the backend contract
#[derive(Debug, Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

/// Collapse any failure to a message-only error
fn normalize(err: &ApiError, fallback: &str) -> ApiError {
    let message = match err {
        ApiError::Api { body, .. } => serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_owned)),
        _ => None,
    };
    ApiError::Message(message.unwrap_or_else(|| fallback.to_string()))
}
