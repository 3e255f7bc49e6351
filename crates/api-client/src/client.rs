//! Main API client implementation

use crate::config::ClientConfig;
use crate::endpoints::{AdminApi, AuthApi, FoodsApi};
use crate::error::{ApiError, ApiResult};
use crate::token::TokenProvider;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Foodboard API client
///
/// Wraps `reqwest` with the backend's base URL and a [`TokenProvider`] that
/// is consulted once per outgoing request. Every operation issues exactly one
/// HTTP call: no retries, no timeouts, no request coalescing. Cloning is
/// cheap; clones share the underlying connection pool and provider.
#[derive(Clone)]
pub struct FoodboardClient {
    inner: Client,
    config: Arc<ClientConfig>,
    tokens: Arc<dyn TokenProvider>,
}

impl FoodboardClient {
    /// Create a new client with configuration from the environment
    pub fn new(tokens: Arc<dyn TokenProvider>) -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config, tokens)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig, tokens: Arc<dyn TokenProvider>) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_static("foodboard-api-client/0.1"),
        );

        let inner = Client::builder()
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
            tokens,
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Access authentication endpoints
    #[must_use]
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.clone())
    }

    /// Access food-item endpoints
    #[must_use]
    pub fn foods(&self) -> FoodsApi {
        FoodsApi::new(self.clone())
    }

    /// Access administration endpoints
    #[must_use]
    pub fn admin(&self) -> AdminApi {
        AdminApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Low-level HTTP methods
    // -------------------------------------------------------------------------

    /// Perform a GET request and return the JSON payload
    pub(crate) async fn get_json(&self, path: &str) -> ApiResult<Value> {
        let response = self
            .execute(Method::GET, path, Option::<&()>::None, None)
            .await?;
        read_payload(response).await
    }

    /// Perform a POST request and return the JSON payload
    pub(crate) async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<Value> {
        let response = self.execute(Method::POST, path, Some(body), None).await?;
        read_payload(response).await
    }

    /// Perform a POST request with an explicit bearer token, bypassing the provider
    pub(crate) async fn post_json_with_token<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        bearer: &str,
    ) -> ApiResult<Value> {
        let response = self
            .execute(Method::POST, path, Some(body), Some(bearer))
            .await?;
        read_payload(response).await
    }

    /// Perform a PUT request and return the JSON payload
    pub(crate) async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<Value> {
        let response = self.execute(Method::PUT, path, Some(body), None).await?;
        read_payload(response).await
    }

    /// Perform a DELETE request and return the JSON payload
    pub(crate) async fn delete_json(&self, path: &str) -> ApiResult<Value> {
        let response = self
            .execute(Method::DELETE, path, Option::<&()>::None, None)
            .await?;
        read_payload(response).await
    }

    /// Perform a POST request and return the raw response
    pub(crate) async fn post_raw<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<Response> {
        self.execute(Method::POST, path, Some(body), None).await
    }

    /// Perform a PUT request and return the raw response
    pub(crate) async fn put_raw<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<Response> {
        self.execute(Method::PUT, path, Some(body), None).await
    }

    /// Perform a DELETE request and return the raw response
    pub(crate) async fn delete_raw(&self, path: &str) -> ApiResult<Response> {
        self.execute(Method::DELETE, path, Option::<&()>::None, None)
            .await
    }

    /// Single request path shared by every operation.
    ///
    /// The token is re-read from the provider on each call so a login that
    /// happened after this client was built is honored immediately. A missing
    /// token means the request goes out without an `Authorization` header.
    /// Non-2xx responses become [`ApiError::Api`] with the body preserved.
    async fn execute<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        bearer: Option<&str>,
    ) -> ApiResult<Response> {
        let url = join_url(&self.config.base_url, path);

        let mut request = self.inner.request(method.clone(), &url);

        let token = match bearer {
            Some(explicit) => Some(explicit.to_string()),
            None => self.tokens.token(),
        };
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(%method, %url, "issuing request");
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            debug!(%method, %url, status = status.as_u16(), "request succeeded");
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::Api {
                status: status.as_u16(),
                body,
            })
        }
    }
}

/// Read a response body as JSON, tolerating empty bodies.
///
/// Some backend endpoints answer 2xx with no body at all; those become
/// `Value::Null` rather than a decode error.
async fn read_payload(response: Response) -> ApiResult<Value> {
    let text = response.text().await.map_err(ApiError::Request)?;
    if text.trim().is_empty() {
        Ok(Value::Null)
    } else {
        serde_json::from_str(&text).map_err(ApiError::Json)
    }
}

/// Join the configured base URL with an endpoint path
fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
