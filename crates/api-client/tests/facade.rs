//! Mock-server tests for the client facade: wire contract, token
//! attachment, and the per-endpoint failure policies.

use foodboard_api_client::prelude::*;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, tokens: Arc<dyn TokenProvider>) -> FoodboardClient {
    let config = ClientConfig::default().with_base_url(server.uri());
    FoodboardClient::with_config(config, tokens).unwrap()
}

#[tokio::test]
async fn attaches_bearer_token_from_store() {
    let server = MockServer::start().await;
    let tokens = Arc::new(SessionTokenStore::new());
    tokens.set("T");

    Mock::given(method("GET"))
        .and(path("/admin/all-roles"))
        .and(header("authorization", "Bearer T"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["ADMIN", "USER"])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, tokens);
    let roles = client.admin().all_roles().await.unwrap();
    assert_eq!(roles, json!(["ADMIN", "USER"]));
}

#[tokio::test]
async fn omits_authorization_header_when_store_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/permissions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server, Arc::new(SessionTokenStore::new()));
    client.admin().permissions().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn token_set_after_construction_is_picked_up() {
    let server = MockServer::start().await;
    let tokens = Arc::new(SessionTokenStore::new());
    let client = client_for(&server, tokens.clone());

    Mock::given(method("GET"))
        .and(path("/admin/all-roles"))
        .and(header("authorization", "Bearer later"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    tokens.set("later");
    client.admin().all_roles().await.unwrap();
}

#[tokio::test]
async fn login_returns_payload_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"username": "u", "password": "p"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"token": "abc", "role": "admin"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, Arc::new(NoToken));
    let payload = client.auth().login("u", "p").await.unwrap();
    assert_eq!(payload, json!({"token": "abc", "role": "admin"}));
}

#[tokio::test]
async fn login_failure_surfaces_server_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "bad creds"})))
        .mount(&server)
        .await;

    let client = client_for(&server, Arc::new(NoToken));
    let err = client.auth().login("u", "wrong").await.unwrap_err();
    assert_eq!(err.to_string(), "bad creds");
}

#[tokio::test]
async fn login_failure_without_body_uses_fallback_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = client_for(&server, Arc::new(NoToken));
    let err = client.auth().login("u", "p").await.unwrap_err();
    assert_eq!(err.to_string(), "Login failed!");
}

#[tokio::test]
async fn register_failure_uses_its_own_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .and(body_json(json!({"username": "u", "password": "p"})))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let client = client_for(&server, Arc::new(NoToken));
    let err = client.auth().register("u", "p").await.unwrap_err();
    assert_eq!(err.to_string(), "Registration failed!");
}

#[tokio::test]
async fn users_with_roles_failure_is_the_fixed_generic_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/getAllUsers"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "db exploded"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, Arc::new(StaticToken::new("T")));
    let err = client.admin().users_with_roles().await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch users");
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn delete_food_hits_exact_path_and_returns_raw_response() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/foods/delete/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Arc::new(StaticToken::new("T")));
    let response = client.foods().delete(42).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({"deleted": true}));
}

#[tokio::test]
async fn delete_food_failure_preserves_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/foods/delete/42"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such food"))
        .mount(&server)
        .await;

    let client = client_for(&server, Arc::new(StaticToken::new("T")));
    let err = client.foods().delete(42).await.unwrap_err();
    match err {
        ApiError::Api { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "no such food");
        }
        other => panic!("expected passthrough Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn create_and_update_food_forward_the_record_as_is() {
    let server = MockServer::start().await;
    let food = json!({"name": "Pad Thai", "price": 11.5});

    Mock::given(method("POST"))
        .and(path("/foods/create"))
        .and(body_json(food.clone()))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/foods/update/7"))
        .and(body_json(food.clone()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Arc::new(StaticToken::new("T")));
    let created = client.foods().create(&food).await.unwrap();
    assert_eq!(created.status().as_u16(), 201);
    let updated = client.foods().update(7, &food).await.unwrap();
    assert_eq!(updated.status().as_u16(), 200);
}

#[tokio::test]
async fn create_role_explicit_token_wins_over_store() {
    let server = MockServer::start().await;
    let tokens = Arc::new(SessionTokenStore::new());
    tokens.set("ambient");

    Mock::given(method("POST"))
        .and(path("/admin/createRole"))
        .and(header("authorization", "Bearer tok123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, tokens);
    let payload = client
        .admin()
        .create_role(&json!({"roleName": "AUDITOR"}), "tok123")
        .await
        .unwrap();
    assert_eq!(payload, json!({"ok": true}));
}

#[tokio::test]
async fn create_role_explicit_token_applies_even_with_empty_store() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/createRole"))
        .and(header("authorization", "Bearer tok123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Arc::new(SessionTokenStore::new()));
    client
        .admin()
        .create_role(&json!({"roleName": "AUDITOR"}), "tok123")
        .await
        .unwrap();
}

#[tokio::test]
async fn assign_role_sends_role_name_field_and_tolerates_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/admin/assign-role/7"))
        .and(body_json(json!({"roleName": "MANAGER"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Arc::new(StaticToken::new("T")));
    let payload = client.admin().assign_role(7, "MANAGER").await.unwrap();
    assert_eq!(payload, serde_json::Value::Null);
}

#[tokio::test]
async fn delete_user_failure_is_passed_through() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/admin/deleteUser/9"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"message": "forbidden"})))
        .mount(&server)
        .await;

    let client = client_for(&server, Arc::new(StaticToken::new("T")));
    let err = client.admin().delete_user(9).await.unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert!(err.is_client_error());
    assert!(err.to_string().contains("forbidden"));
}

#[tokio::test]
async fn repeated_queries_are_independent_and_do_not_touch_the_store() {
    let server = MockServer::start().await;
    let tokens = Arc::new(SessionTokenStore::new());
    tokens.set("T");

    Mock::given(method("GET"))
        .and(path("/admin/all-roles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["ADMIN"])))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server, tokens.clone());
    let first = client.admin().all_roles().await.unwrap();
    let second = client.admin().all_roles().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(tokens.token(), Some("T".to_string()));
}
