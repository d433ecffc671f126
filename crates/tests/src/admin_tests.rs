use api_client::load_admin_dashboard;
use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{
    AdminOverview, AdminProfileUpdate, AppErrorKind, NewAdmin, PasswordChange, UploadFile,
};

use crate::common::{bearer, mint_token, MockBackend};

async fn admin_backend() -> (MockBackend, api_client::ApiClient, String) {
    let backend = MockBackend::start().await;
    let token = mint_token("a-1", "Grace Admin", "Admin");
    let (api, _) = backend.signed_in_client(&token);
    (backend, api, token)
}

#[tokio::test]
async fn approve_and_reject_send_the_user_id() {
    let (backend, api, token) = admin_backend().await;
    backend
        .respond(
            Method::PUT,
            "/api/users/approve-lawyer",
            StatusCode::OK,
            json!({ "message": "Lawyer approved successfully" }),
        )
        .respond(Method::PUT, "/api/users/reject-lawyer", StatusCode::OK, Value::Null);

    let approved = api.approve_lawyer("l-7").await.unwrap();
    let rejected = api.reject_lawyer("l-8").await.unwrap();

    assert_eq!(approved, "Lawyer approved successfully");
    assert_eq!(rejected, "Lawyer rejected");

    let approve = backend.last(Method::PUT, "/api/users/approve-lawyer");
    assert_eq!(approve.json(), json!({ "userId": "l-7" }));
    assert_eq!(approve.authorization, bearer(&token));
    assert_eq!(backend.last(Method::PUT, "/api/users/reject-lawyer").json(), json!({ "userId": "l-8" }));
}

#[tokio::test]
async fn delete_and_mark_read_hit_id_paths() {
    let (backend, api, _) = admin_backend().await;
    backend
        .respond(Method::DELETE, "/api/users/u-5", StatusCode::OK, json!({ "message": "User deleted" }))
        .respond(Method::PATCH, "/api/notifications/n-2/read", StatusCode::NO_CONTENT, Value::Null);

    api.delete_user("u-5").await.unwrap();
    api.mark_notification_read("n-2").await.unwrap();

    let methods: Vec<(Method, String)> = backend.requests().into_iter().map(|r| (r.method, r.path)).collect();
    assert_eq!(
        methods,
        vec![
            (Method::DELETE, "/api/users/u-5".to_string()),
            (Method::PATCH, "/api/notifications/n-2/read".to_string()),
        ]
    );
}

#[tokio::test]
async fn blank_ids_are_rejected_before_sending() {
    let (backend, api, _) = admin_backend().await;

    assert_eq!(api.delete_user(" ").await.unwrap_err().kind, AppErrorKind::Validation);
    assert_eq!(api.mark_notification_read("").await.unwrap_err().kind, AppErrorKind::NotFound);
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn profile_update_is_json_without_photo() {
    let (backend, api, _) = admin_backend().await;
    backend.respond(Method::PUT, "/api/users/admin/profile", StatusCode::OK, json!({}));

    let update = AdminProfileUpdate {
        name: "Grace Admin".into(),
        email: "grace@lawlink.test".into(),
        phone: "+254700111222".into(),
        photo: None,
    };
    let message = api.update_admin_profile(&update).await.unwrap();

    assert_eq!(message, "Profile updated");
    let sent = backend.last(Method::PUT, "/api/users/admin/profile");
    assert!(!sent.is_multipart());
    assert_eq!(
        sent.json(),
        json!({ "name": "Grace Admin", "email": "grace@lawlink.test", "phone": "+254700111222" })
    );
}

#[tokio::test]
async fn profile_update_with_photo_is_multipart() {
    let (backend, api, _) = admin_backend().await;
    backend.respond(
        Method::PUT,
        "/api/users/admin/profile",
        StatusCode::OK,
        json!({ "message": "Profile saved" }),
    );

    let update = AdminProfileUpdate {
        name: "Grace Admin".into(),
        email: "grace@lawlink.test".into(),
        phone: String::new(),
        photo: Some(UploadFile::new("me.png", Some("image/png".into()), vec![0x89, b'P', b'N', b'G'])),
    };
    let message = api.update_admin_profile(&update).await.unwrap();

    assert_eq!(message, "Profile saved");
    let sent = backend.last(Method::PUT, "/api/users/admin/profile");
    assert!(sent.is_multipart());
    assert!(sent.has_part("name"));
    assert!(sent.has_part("profile_photo"));
    assert!(sent.body_text().contains("filename=\"me.png\""));
}

#[tokio::test]
async fn password_change_checks_confirmation_locally() {
    let (backend, api, _) = admin_backend().await;

    let mismatch = PasswordChange {
        current_password: "old-password".into(),
        new_password: "new-password-1".into(),
        confirm_password: "new-password-2".into(),
    };
    let err = api.change_admin_password(&mismatch).await.unwrap_err();
    assert_eq!(err.field_error("confirm_password"), Some("Passwords do not match"));

    let short = PasswordChange {
        current_password: "old-password".into(),
        new_password: "short".into(),
        confirm_password: "short".into(),
    };
    let err = api.change_admin_password(&short).await.unwrap_err();
    assert!(err.field_error("new_password").is_some());

    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn password_change_sends_current_and_new_only() {
    let (backend, api, _) = admin_backend().await;
    backend.respond(
        Method::PUT,
        "/api/users/admin/password",
        StatusCode::OK,
        json!({ "message": "Password changed" }),
    );

    let change = PasswordChange {
        current_password: "old-password".into(),
        new_password: "new-password-1".into(),
        confirm_password: "new-password-1".into(),
    };
    assert_eq!(api.change_admin_password(&change).await.unwrap(), "Password changed");
    assert_eq!(
        backend.last(Method::PUT, "/api/users/admin/password").json(),
        json!({ "currentPassword": "old-password", "newPassword": "new-password-1" })
    );
}

#[tokio::test]
async fn add_admin_posts_the_new_account() {
    let (backend, api, _) = admin_backend().await;
    backend.respond(Method::POST, "/api/users/add-admin", StatusCode::CREATED, json!({}));

    let admin = NewAdmin {
        username: "second".into(),
        email: "second@lawlink.test".into(),
        password: "long-enough".into(),
    };
    assert_eq!(api.add_admin(&admin).await.unwrap(), "Admin created");
    assert_eq!(
        backend.last(Method::POST, "/api/users/add-admin").json(),
        json!({ "username": "second", "email": "second@lawlink.test", "password": "long-enough" })
    );
}

#[tokio::test]
async fn admin_dashboard_derives_overview_from_lists() {
    let (backend, api, _) = admin_backend().await;
    backend
        .respond(
            Method::GET,
            "/api/users",
            StatusCode::OK,
            json!({ "users": [
                { "_id": "1", "username": "amina", "email": "a@lawlink.test", "role": "client" },
                { "_id": "2", "username": "otieno", "email": "o@lawlink.test", "role": "lawyer", "status": "pending" },
                { "_id": "3", "username": "njeri", "email": "n@lawlink.test", "role": "lawyer", "status": "approved" }
            ] }),
        )
        .respond(
            Method::GET,
            "/api/cases",
            StatusCode::OK,
            json!([{ "_id": "c1", "title": "Land dispute" }]),
        )
        .respond(
            Method::GET,
            "/api/notifications/admin/notifications",
            StatusCode::OK,
            json!({ "notifications": [
                { "_id": "n1", "message": "New lawyer registered", "isRead": false },
                { "_id": "n2", "message": "Case closed", "isRead": true }
            ] }),
        );

    let data = load_admin_dashboard(&api).await.unwrap();

    assert_eq!(
        data.overview,
        AdminOverview {
            total_users: 3,
            total_lawyers: 2,
            pending_lawyers: 1,
            total_cases: 1,
            unread_notifications: 1,
        }
    );
}
