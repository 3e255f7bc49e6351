//! Food-item CRUD endpoints
//!
//! These operations hand back the raw HTTP response on success and the
//! original error (status and body intact) on failure; interpreting either
//! is the caller's concern. Food records are caller-supplied serializable
//! values; their shape is a contract between caller and backend.

use crate::client::FoodboardClient;
use crate::error::ApiResult;
use reqwest::Response;
use serde::Serialize;

/// Food-item API interface
#[derive(Clone)]
pub struct FoodsApi {
    client: FoodboardClient,
}

impl FoodsApi {
    /// Create a new foods API interface
    pub(crate) fn new(client: FoodboardClient) -> Self {
        Self { client }
    }

    /// Create a food item
    ///
    /// POST /foods/create
    pub async fn create<B: Serialize>(&self, food: &B) -> ApiResult<Response> {
        self.client.post_raw("foods/create", food).await
    }

    /// Update a food item by id
    ///
    /// PUT /foods/update/{id}
    pub async fn update<B: Serialize>(&self, id: i64, food: &B) -> ApiResult<Response> {
        self.client.put_raw(&format!("foods/update/{id}"), food).await
    }

    /// Delete a food item by id
    ///
    /// DELETE /foods/delete/{id}
    pub async fn delete(&self, id: i64) -> ApiResult<Response> {
        self.client.delete_raw(&format!("foods/delete/{id}")).await
    }
}
