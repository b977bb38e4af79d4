//! End-to-end authentication and authorization scenarios over the
//! assembled application router.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use dishpatch_auth::{tokens, Role};
use tower::ServiceExt;

use common::*;

#[tokio::test]
async fn customer_login_and_role_gating_end_to_end() {
    let h = harness();
    seed_principal(&h.store, "u1@dishpatch.dev", vec![Role::Customer]).await;

    // Log in → receive an access/refresh pair
    let response = h
        .app
        .clone()
        .oneshot(login_request("u1@dishpatch.dev", PASSWORD))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let pair = body_json(response).await;
    let access = pair["accessToken"].as_str().unwrap().to_string();
    let refresh = pair["refreshToken"].as_str().unwrap().to_string();

    // Customer-only route → 200
    let response = h
        .app
        .clone()
        .oneshot(get_with_bearer("/v1/orders/mine", &access))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Admin-only route → 403, with the principal's email in the detail
    let response = h
        .app
        .clone()
        .oneshot(get_with_bearer("/v1/admin/orders", &access))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "FORBIDDEN");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("u1@dishpatch.dev"));

    // Rotation with the still-valid refresh token → a fresh pair whose
    // access token works on the same route
    let response = h
        .app
        .clone()
        .oneshot(post_with_bearer("/v1/auth/refresh", &refresh))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let new_pair = body_json(response).await;
    let new_access = new_pair["accessToken"].as_str().unwrap();
    assert_ne!(new_access, access);

    let response = h
        .app
        .clone()
        .oneshot(get_with_bearer("/v1/orders/mine", new_access))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn expired_access_token_is_rejected_everywhere() {
    let h = harness();
    let id = seed_principal(&h.store, "late@dishpatch.dev", vec![Role::Customer]).await;

    // Mint a pair 16 simulated minutes in the past: the access token is
    // past its 15-minute window, the refresh token is not
    let issued = Utc::now() - Duration::minutes(16);
    let pair = tokens::issue_pair_at(&auth_config(), id, issued).unwrap();

    for path in ["/v1/orders/mine", "/v1/account", "/v1/auth/whoami"] {
        let response = h
            .app
            .clone()
            .oneshot(get_with_bearer(path, &pair.access_token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "path {}", path);
    }

    // The refresh token from the same pair still rotates
    let response = h
        .app
        .clone()
        .oneshot(post_with_bearer("/v1/auth/refresh", &pair.refresh_token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn old_access_token_survives_rotation_until_its_own_expiry() {
    // Stateless design: rotation does not blacklist the previous access
    // token, so it keeps working until its original expiry
    let h = harness();
    let id = seed_principal(&h.store, "stateless@dishpatch.dev", vec![Role::Customer]).await;
    let old_pair = h.auth.issue_pair(id).unwrap();

    let response = h
        .app
        .clone()
        .oneshot(post_with_bearer("/v1/auth/refresh", &old_pair.refresh_token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = h
        .app
        .clone()
        .oneshot(get_with_bearer("/v1/orders/mine", &old_pair.access_token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn refresh_with_garbage_or_access_token_is_terminal_401() {
    let h = harness();
    let id = seed_principal(&h.store, "r@dishpatch.dev", vec![Role::Customer]).await;
    let pair = h.auth.issue_pair(id).unwrap();

    let response = h
        .app
        .clone()
        .oneshot(post_with_bearer("/v1/auth/refresh", &pair.access_token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = h
        .app
        .clone()
        .oneshot(post_with_bearer("/v1/auth/refresh", "not.a.token"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn deleted_principal_cannot_authenticate_or_rotate() {
    let h = harness();
    let id = seed_principal(&h.store, "gone@dishpatch.dev", vec![Role::Customer]).await;
    let pair = h.auth.issue_pair(id).unwrap();

    h.store.remove(id).await;

    let response = h
        .app
        .clone()
        .oneshot(get_with_bearer("/v1/account", &pair.access_token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = h
        .app
        .clone()
        .oneshot(post_with_bearer("/v1/auth/refresh", &pair.refresh_token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn every_party_reaches_only_its_own_routes() {
    let h = harness();
    let courier = seed_principal(&h.store, "courier@dishpatch.dev", vec![Role::Courier]).await;
    let restaurant =
        seed_principal(&h.store, "resto@dishpatch.dev", vec![Role::Restaurant]).await;
    let admin = seed_principal(&h.store, "admin@dishpatch.dev", vec![Role::Admin]).await;

    let courier_token = h.auth.issue_pair(courier).unwrap().access_token;
    let restaurant_token = h.auth.issue_pair(restaurant).unwrap().access_token;
    let admin_token = h.auth.issue_pair(admin).unwrap().access_token;

    // Courier: assignments yes, admin listing no
    let response = h
        .app
        .clone()
        .oneshot(get_with_bearer("/v1/deliveries/assignments", &courier_token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let response = h
        .app
        .clone()
        .oneshot(get_with_bearer("/v1/admin/orders", &courier_token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Restaurant: courier route denied
    let response = h
        .app
        .clone()
        .oneshot(get_with_bearer(
            "/v1/deliveries/assignments",
            &restaurant_token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Admin: admin listing allowed
    let response = h
        .app
        .clone()
        .oneshot(get_with_bearer("/v1/admin/orders", &admin_token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Ungated route admits all of them
    for token in [&courier_token, &restaurant_token, &admin_token] {
        let response = h
            .app
            .clone()
            .oneshot(get_with_bearer("/v1/account", token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn health_and_root_need_no_credentials() {
    let h = harness();

    let response = h
        .app
        .clone()
        .oneshot(
            axum::http::Request::builder()
                .uri("/health")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
