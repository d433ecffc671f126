use api_client::TokenStore;
use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, Role};

use crate::common::{bearer, mint_token, MockBackend};

#[tokio::test]
async fn stored_token_is_restored_with_its_identity() {
    let backend = MockBackend::start().await;
    let token = mint_token("a-1", "Grace Admin", "Admin");
    let (api, _) = backend.signed_in_client(&token);

    let session = api.session().current().unwrap();
    assert_eq!(session.identity.role, Role::Admin);
    assert_eq!(session.identity.name, "Grace Admin");
}

#[tokio::test]
async fn unauthorized_answer_clears_the_session() {
    let backend = MockBackend::start().await;
    backend.respond(
        Method::GET,
        "/api/cases",
        StatusCode::UNAUTHORIZED,
        json!({ "message": "Token expired" }),
    );
    let token = mint_token("u-1", "Amina", "Client");
    let (api, store) = backend.signed_in_client(&token);

    let err = api.list_cases().await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Token expired");
    assert!(!api.session().is_authenticated());
    assert_eq!(store.load(), None);
    assert_eq!(backend.last(Method::GET, "/api/cases").authorization, bearer(&token));
}

#[tokio::test]
async fn forbidden_answer_keeps_the_session() {
    let backend = MockBackend::start().await;
    backend.respond(
        Method::GET,
        "/api/users",
        StatusCode::FORBIDDEN,
        json!({ "message": "Admins only" }),
    );
    let token = mint_token("u-1", "Amina", "Client");
    let (api, store) = backend.signed_in_client(&token);

    let err = api.list_users().await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert!(api.session().is_authenticated());
    assert_eq!(store.load(), Some(token));
}

#[tokio::test]
async fn protected_call_without_session_is_refused_locally() {
    let backend = MockBackend::start().await;
    let (api, _) = backend.client();

    let err = api.dashboard_stats().await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn logout_forgets_the_token() {
    let backend = MockBackend::start().await;
    let (api, store) = backend.signed_in_client(&mint_token("u-1", "Amina", "Client"));

    api.logout();

    assert!(api.session().current().is_none());
    assert_eq!(store.load(), None);
}

#[tokio::test]
async fn clones_share_one_session() {
    let backend = MockBackend::start().await;
    backend.respond(Method::GET, "/api/bids", StatusCode::UNAUTHORIZED, json!({}));
    let (api, _) = backend.signed_in_client(&mint_token("l-1", "Otieno", "Lawyer"));
    let view_copy = api.clone();

    let _ = view_copy.list_bids().await;

    assert!(!api.session().is_authenticated());
}
