use api_client::{RegisterOutcome, TokenStore};
use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, Credentials, LawyerDetails, RegistrationRequest, Role, UploadFile};

use crate::common::{mint_token, MockBackend};

fn registration(role: Role, lawyer: Option<LawyerDetails>) -> RegistrationRequest {
    RegistrationRequest {
        username: "wanjiru".into(),
        email: "wanjiru@lawlink.test".into(),
        password: "secret-pass".into(),
        role,
        phone: "+254711000000".into(),
        lawyer,
    }
}

fn practice(license: Option<UploadFile>) -> LawyerDetails {
    LawyerDetails {
        specialization: "Family Law".into(),
        location: "Nakuru".into(),
        license,
    }
}

#[tokio::test]
async fn login_stores_token_and_decodes_identity() {
    let backend = MockBackend::start().await;
    let token = mint_token("u-17", "Amina Yusuf", "Client");
    backend.respond(Method::POST, "/api/auth/login", StatusCode::OK, json!({ "token": token }));
    let (api, store) = backend.client();

    let session = api
        .login(&Credentials::new("amina@lawlink.test", "correct-horse"))
        .await
        .unwrap();

    assert_eq!(session.identity.name, "Amina Yusuf");
    assert_eq!(session.identity.role, Role::Client);
    assert_eq!(store.load(), Some(token.clone()));
    assert!(api.session().is_authenticated());

    let sent = backend.last(Method::POST, "/api/auth/login");
    assert_eq!(sent.json(), json!({ "email": "amina@lawlink.test", "password": "correct-horse" }));
    assert_eq!(sent.authorization, None);
}

#[tokio::test]
async fn login_failure_surfaces_server_message_and_stores_nothing() {
    let backend = MockBackend::start().await;
    backend.respond(
        Method::POST,
        "/api/auth/login",
        StatusCode::UNAUTHORIZED,
        json!({ "message": "Invalid email or password" }),
    );
    let (api, store) = backend.client();

    let err = api
        .login(&Credentials::new("amina@lawlink.test", "wrong"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Invalid email or password");
    assert_eq!(store.load(), None);
    assert!(!api.session().is_authenticated());
}

#[tokio::test]
async fn login_failure_without_message_uses_generic_text() {
    let backend = MockBackend::start().await;
    backend.respond(Method::POST, "/api/auth/login", StatusCode::INTERNAL_SERVER_ERROR, json!({}));
    let (api, _) = backend.client();

    let err = api
        .login(&Credentials::new("amina@lawlink.test", "whatever"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Server);
    assert_eq!(err.message, shared_types::GENERIC_ERROR_MESSAGE);
}

#[tokio::test]
async fn invalid_login_form_never_reaches_the_server() {
    let backend = MockBackend::start().await;
    let (api, _) = backend.client();

    let err = api.login(&Credentials::new("not-an-email", "")).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Validation);
    assert!(err.field_error("email").is_some());
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn client_registration_omits_lawyer_fields() {
    let backend = MockBackend::start().await;
    backend.respond(
        Method::POST,
        "/api/auth/register",
        StatusCode::CREATED,
        json!({ "message": "Account created. Please log in." }),
    );
    let (api, store) = backend.client();

    // Lawyer details typed before switching back to Client must not leak.
    let outcome = api
        .register(&registration(Role::Client, Some(practice(None))))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        RegisterOutcome::Created { message: "Account created. Please log in.".into() }
    );
    assert_eq!(store.load(), None);

    let sent = backend.last(Method::POST, "/api/auth/register");
    assert!(!sent.is_multipart());
    assert_eq!(
        sent.json(),
        json!({
            "username": "wanjiru",
            "email": "wanjiru@lawlink.test",
            "password": "secret-pass",
            "role": "Client",
            "phone": "+254711000000",
        })
    );
}

#[tokio::test]
async fn lawyer_registration_without_file_is_json() {
    let backend = MockBackend::start().await;
    backend.respond(Method::POST, "/api/auth/register", StatusCode::CREATED, json!({}));
    let (api, _) = backend.client();

    let outcome = api
        .register(&registration(Role::Lawyer, Some(practice(None))))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        RegisterOutcome::Created { message: "Registration successful. Please sign in.".into() }
    );
    let sent = backend.last(Method::POST, "/api/auth/register");
    assert!(!sent.is_multipart());
    let body = sent.json();
    assert_eq!(body["role"], "Lawyer");
    assert_eq!(body["specialization"], "Family Law");
    assert_eq!(body["location"], "Nakuru");
    assert!(body.get("license_file").is_none());
}

#[tokio::test]
async fn lawyer_registration_with_license_is_multipart() {
    let backend = MockBackend::start().await;
    let token = mint_token("l-3", "Wanjiru", "Lawyer");
    backend.respond(Method::POST, "/api/auth/register", StatusCode::CREATED, json!({ "token": token }));
    let (api, store) = backend.client();

    let license = UploadFile::new("license.pdf", None, b"%PDF-1.4 test".to_vec());
    let outcome = api
        .register(&registration(Role::Lawyer, Some(practice(Some(license)))))
        .await
        .unwrap();

    match outcome {
        RegisterOutcome::SignedIn(session) => assert_eq!(session.identity.role, Role::Lawyer),
        other => panic!("expected a signed-in outcome, got {other:?}"),
    }
    assert_eq!(store.load(), Some(token));

    let sent = backend.last(Method::POST, "/api/auth/register");
    assert!(sent.is_multipart());
    for field in ["username", "email", "password", "role", "phone", "specialization", "location", "license_file"] {
        assert!(sent.has_part(field), "missing multipart field {field}");
    }
    let text = sent.body_text();
    assert!(text.contains("filename=\"license.pdf\""));
    assert!(text.contains("application/pdf"));
    assert!(text.contains("%PDF-1.4 test"));
}

#[tokio::test]
async fn lawyer_registration_requires_practice_details() {
    let backend = MockBackend::start().await;
    let (api, _) = backend.client();

    let err = api.register(&registration(Role::Lawyer, None)).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Validation);
    assert!(err.field_error("specialization").is_some());
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn duplicate_registration_shows_server_message() {
    let backend = MockBackend::start().await;
    backend.respond(
        Method::POST,
        "/api/auth/register",
        StatusCode::BAD_REQUEST,
        json!({ "message": "Email already registered" }),
    );
    let (api, _) = backend.client();

    let err = api.register(&registration(Role::Client, None)).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Validation);
    assert_eq!(err.message, "Email already registered");
}

#[tokio::test]
async fn blank_registration_fields_never_reach_the_server() {
    let backend = MockBackend::start().await;
    let (api, _) = backend.client();

    let mut request = registration(Role::Lawyer, Some(practice(None)));
    request.username = "   ".into();
    request.phone = "  ".into();
    if let Some(details) = request.lawyer.as_mut() {
        details.specialization = " ".into();
        details.location = " ".into();
    }
    let err = api.register(&request).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Validation);
    for field in ["username", "phone", "specialization", "location"] {
        assert!(err.field_error(field).is_some(), "no error for {field}");
    }
    assert!(backend.requests().is_empty());
}
