use api_client::{load_client_dashboard, load_lawyer_dashboard};
use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, CaseStatus, DashboardStats};

use crate::common::{bearer, mint_token, MockBackend};

#[tokio::test]
async fn client_dashboard_reads_carry_the_bearer_token() {
    let backend = MockBackend::start().await;
    backend
        .respond(
            Method::GET,
            "/api/dashboard/stats",
            StatusCode::OK,
            json!({ "activeCases": 2, "upcomingAppointments": 3, "unreadMessages": 5, "pendingBids": 1 }),
        )
        .respond(
            Method::GET,
            "/api/cases",
            StatusCode::OK,
            json!([{ "_id": "c1", "title": "Land dispute", "status": "open" }]),
        )
        .respond(
            Method::GET,
            "/api/appointments",
            StatusCode::OK,
            json!({ "appointments": [{ "_id": "a1", "title": "Consultation", "scheduledAt": "2026-11-02T09:30:00Z" }] }),
        );
    let token = mint_token("u-1", "Amina", "Client");
    let (api, _) = backend.signed_in_client(&token);

    let data = load_client_dashboard(&api).await.unwrap();

    assert_eq!(
        data.stats,
        DashboardStats {
            active_cases: 2,
            upcoming_appointments: 3,
            unread_messages: 5,
            pending_bids: 1,
        }
    );
    assert_eq!(data.cases.len(), 1);
    assert_eq!(data.cases[0].status, CaseStatus::Open);
    assert_eq!(data.appointments[0].title, "Consultation");

    let paths: Vec<String> = backend.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(paths, vec!["/api/dashboard/stats", "/api/cases", "/api/appointments"]);
    assert!(backend.requests().iter().all(|r| r.authorization == bearer(&token)));
}

#[tokio::test]
async fn missing_stats_body_falls_back_to_zeroes() {
    let backend = MockBackend::start().await;
    backend
        .respond(Method::GET, "/api/dashboard/stats", StatusCode::OK, serde_json::Value::Null)
        .respond(Method::GET, "/api/cases", StatusCode::OK, json!({ "data": [] }))
        .respond(Method::GET, "/api/bids", StatusCode::OK, json!({ "bids": [] }))
        .respond(Method::GET, "/api/appointments", StatusCode::OK, json!([]));
    let (api, _) = backend.signed_in_client(&mint_token("l-1", "Otieno", "Lawyer"));

    let data = load_lawyer_dashboard(&api).await.unwrap();

    assert_eq!(data.stats, DashboardStats::default());
    assert!(data.cases.is_empty() && data.bids.is_empty() && data.appointments.is_empty());
}

#[tokio::test]
async fn failed_read_stops_the_dashboard_load() {
    let backend = MockBackend::start().await;
    backend
        .respond(Method::GET, "/api/dashboard/stats", StatusCode::OK, json!({}))
        .respond(
            Method::GET,
            "/api/cases",
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "message": "Database unavailable" }),
        );
    let (api, _) = backend.signed_in_client(&mint_token("u-1", "Amina", "Client"));

    let err = load_client_dashboard(&api).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Server);
    assert_eq!(err.message, "Database unavailable");
    assert!(backend.requests().iter().all(|r| r.path != "/api/appointments"));
}

#[tokio::test]
async fn case_detail_includes_documents_and_timeline() {
    let backend = MockBackend::start().await;
    backend.respond(
        Method::GET,
        "/api/cases/c9",
        StatusCode::OK,
        json!({
            "_id": "c9",
            "title": "Tenancy eviction",
            "status": "In Progress",
            "documents": [{ "name": "lease.pdf", "url": "https://files.test/lease.pdf" }],
            "timeline": [{ "date": "2026-10-01", "event": "Case opened" }]
        }),
    );
    let (api, _) = backend.signed_in_client(&mint_token("u-1", "Amina", "Client"));

    let case = api.get_case("c9").await.unwrap();

    assert_eq!(case.summary.status, CaseStatus::InProgress);
    assert_eq!(case.documents[0].name, "lease.pdf");
    assert_eq!(case.timeline[0].event, "Case opened");
}

#[tokio::test]
async fn unknown_case_is_not_found() {
    let backend = MockBackend::start().await;
    let (api, _) = backend.signed_in_client(&mint_token("u-1", "Amina", "Client"));

    let err = api.get_case("missing").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert!(api.session().is_authenticated());
}

#[tokio::test]
async fn lawyer_directory_accepts_wrapped_list() {
    let backend = MockBackend::start().await;
    backend.respond(
        Method::GET,
        "/api/users/lawyers",
        StatusCode::OK,
        json!({ "lawyers": [
            { "_id": "l1", "username": "Otieno", "email": "o@lawlink.test", "role": "lawyer", "specialization": "Criminal Defense" }
        ] }),
    );
    let (api, _) = backend.signed_in_client(&mint_token("u-1", "Amina", "Client"));

    let lawyers = api.list_lawyers().await.unwrap();

    assert_eq!(lawyers.len(), 1);
    assert_eq!(lawyers[0].specialization.as_deref(), Some("Criminal Defense"));
}
