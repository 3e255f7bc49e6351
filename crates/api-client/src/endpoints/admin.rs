//! Administration endpoints: users, roles, permissions
//!
//! Failure handling here is deliberately uneven, mirroring the backend
//! contract: [`users_with_roles`] swallows the original error behind a fixed
//! message, everything else logs and rethrows the original error unmodified.
//!
//! [`users_with_roles`]: AdminApi::users_with_roles

use crate::client::FoodboardClient;
use crate::error::{ApiError, ApiResult};
use serde::Serialize;
use serde_json::Value;
use tracing::error;

/// Administration API interface
#[derive(Clone)]
pub struct AdminApi {
    client: FoodboardClient,
}

impl AdminApi {
    /// Create a new admin API interface
    pub(crate) fn new(client: FoodboardClient) -> Self {
        Self { client }
    }

    /// Fetch all users together with their assigned roles
    ///
    /// GET /admin/getAllUsers
    ///
    /// On failure the original error is logged and replaced by the fixed
    /// message `"Failed to fetch users"`; status and body are not preserved.
    pub async fn users_with_roles(&self) -> ApiResult<Value> {
        match self.client.get_json("admin/getAllUsers").await {
            Ok(payload) => Ok(payload),
            Err(e) => {
                error!(error = %e, "failed to fetch users with roles");
                Err(ApiError::message("Failed to fetch users"))
            }
        }
    }

    /// Fetch all roles
    ///
    /// GET /admin/all-roles
    pub async fn all_roles(&self) -> ApiResult<Value> {
        self.client.get_json("admin/all-roles").await.map_err(|e| {
            error!(error = %e, "failed to fetch roles");
            e
        })
    }

    /// Fetch all permissions
    ///
    /// GET /admin/permissions
    pub async fn permissions(&self) -> ApiResult<Value> {
        self.client.get_json("admin/permissions").await.map_err(|e| {
            error!(error = %e, "failed to fetch permissions");
            e
        })
    }

    /// Create a role
    ///
    /// POST /admin/createRole
    ///
    /// Takes an explicit bearer token that overrides whatever the client's
    /// provider currently holds.
    pub async fn create_role<B: Serialize>(&self, payload: &B, token: &str) -> ApiResult<Value> {
        self.client
            .post_json_with_token("admin/createRole", payload, token)
            .await
            .map_err(|e| {
                error!(error = %e, "failed to create role");
                e
            })
    }

    /// Assign a role to a user
    ///
    /// PUT /admin/assign-role/{userId}
    pub async fn assign_role(&self, user_id: i64, role_name: &str) -> ApiResult<Value> {
        self.client
            .put_json(
                &format!("admin/assign-role/{user_id}"),
                &AssignRolePayload { role_name },
            )
            .await
            .map_err(|e| {
                error!(error = %e, user_id, "failed to assign role");
                e
            })
    }

    /// Delete a user
    ///
    /// DELETE /admin/deleteUser/{userId}
    pub async fn delete_user(&self, user_id: i64) -> ApiResult<Value> {
        self.client
            .delete_json(&format!("admin/deleteUser/{user_id}"))
            .await
            .map_err(|e| {
                error!(error = %e, user_id, "failed to delete user");
                e
            })
    }
}

/// Wire body for role assignment; the field name is the backend contract
#[derive(Debug, Serialize)]
struct AssignRolePayload<'a> {
    #[serde(rename = "roleName")]
    role_name: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_role_wire_format() {
        let body = serde_json::to_value(AssignRolePayload { role_name: "ADMIN" }).unwrap();
        assert_eq!(body, serde_json::json!({"roleName": "ADMIN"}));
    }
}
