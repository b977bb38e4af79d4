//! Shared fixtures for integration tests

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use dishpatch_auth::{
    AuthConfig, Authenticator, MemoryCredentialStore, Principal, Role, StoredPrincipal,
};
use http_body_util::BodyExt;
use uuid::Uuid;

pub const ACCESS_SECRET: &str = "integration-access-secret";
pub const REFRESH_SECRET: &str = "integration-refresh-secret";
pub const PASSWORD: &str = "hunter2";

pub struct TestHarness {
    pub app: Router,
    pub auth: Authenticator,
    pub store: MemoryCredentialStore,
}

pub fn auth_config() -> AuthConfig {
    AuthConfig::new(ACCESS_SECRET, REFRESH_SECRET).expect("test auth config")
}

/// Build the real application over an in-memory credential store.
pub fn harness() -> TestHarness {
    let store = MemoryCredentialStore::new();
    let auth = Authenticator::new(Arc::new(store.clone()), auth_config());
    let app = dishpatch_app::create_app_with_store(
        auth_config(),
        Arc::new(store.clone()),
        "orders=http://orders.internal",
    )
    .expect("app should build");

    TestHarness { app, auth, store }
}

/// Seed a principal and return its id.
pub async fn seed_principal(
    store: &MemoryCredentialStore,
    email: &str,
    roles: Vec<Role>,
) -> Uuid {
    store
        .insert(StoredPrincipal {
            principal: Principal {
                id: Uuid::new_v4(),
                email: email.to_string(),
                roles,
            },
            password_hash: dishpatch_common::hash_password(PASSWORD).expect("hash"),
        })
        .await
}

pub fn get_with_bearer(path: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

pub fn post_with_bearer(path: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

pub fn login_request(email: &str, password: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/v1/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({ "email": email, "password": password }).to_string(),
        ))
        .unwrap()
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
