//! Router behaviour that is decided before any database access

mod common;

use serde_json::json;
use uuid::Uuid;

use common::{offline_app, request, send, token_for};

#[tokio::test]
async fn test_health_is_public_and_enveloped() {
    let app = offline_app();
    let (status, body) = send(&app, request("GET", "/api/health", None, None)).await;

    assert_eq!(status, 200);
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_readiness_reports_unreachable_database() {
    let app = offline_app();
    let (status, body) = send(&app, request("GET", "/api/health/ready", None, None)).await;

    assert_eq!(status, 500);
    assert_eq!(body["data"]["code"], "DATABASE_ERROR");
    assert_eq!(body["message"], "A database error occurred");
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let app = offline_app();
    let (status, body) = send(&app, request("GET", "/api/auth/me", None, None)).await;

    assert_eq!(status, 401);
    assert_eq!(body["status"], "error");
    assert_eq!(body["data"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let app = offline_app();
    let (status, body) = send(
        &app,
        request("GET", "/api/features", Some("not-a-jwt"), None),
    )
    .await;

    assert_eq!(status, 401);
    assert_eq!(body["data"]["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_features_are_listed() {
    let app = offline_app();
    let token = token_for(Uuid::new_v4(), Uuid::new_v4(), false);
    let (status, body) = send(&app, request("GET", "/api/features", Some(&token), None)).await;

    assert_eq!(status, 200);
    let features = body["data"]["features"].as_array().unwrap();
    assert!(features.contains(&json!("condidats")));
    assert!(features.contains(&json!("training_requests")));
}

#[tokio::test]
async fn test_foreign_company_is_forbidden() {
    let app = offline_app();
    let token = token_for(Uuid::new_v4(), Uuid::new_v4(), false);
    let uri = format!("/api/companies/{}/condidats", Uuid::new_v4());

    let (status, body) = send(&app, request("GET", &uri, Some(&token), None)).await;

    assert_eq!(status, 403);
    assert_eq!(body["data"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_guard_runs_before_body_validation() {
    let app = offline_app();
    let token = token_for(Uuid::new_v4(), Uuid::new_v4(), false);
    let uri = format!("/api/companies/{}/condidats", Uuid::new_v4());

    // An invalid body on a foreign company still reports the tenancy failure
    let (status, _) = send(
        &app,
        request("POST", &uri, Some(&token), Some(json!({"email": "nope"}))),
    )
    .await;

    assert_eq!(status, 403);
}

#[tokio::test]
async fn test_invalid_body_in_own_company_is_bad_request() {
    let app = offline_app();
    let company_id = Uuid::new_v4();
    let token = token_for(Uuid::new_v4(), company_id, false);
    let uri = format!("/api/companies/{}/condidats", company_id);

    let (status, body) = send(
        &app,
        request(
            "POST",
            &uri,
            Some(&token),
            Some(json!({"first_name": "Ada", "last_name": "Lovelace", "email": "not-an-email"})),
        ),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["status"], "error");
    assert_eq!(body["data"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = offline_app();
    let company_id = Uuid::new_v4();
    let token = token_for(Uuid::new_v4(), company_id, false);
    let uri = format!("/api/companies/{}/questions", company_id);

    let (status, body) = send(
        &app,
        request("POST", &uri, Some(&token), Some(json!(["not", "an", "object"]))),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["data"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_root_bypasses_belonging_but_not_session() {
    let app = offline_app();
    let root_id = Uuid::new_v4();
    let token = token_for(root_id, Uuid::new_v4(), true);
    let company_id = Uuid::new_v4();

    // Someone else's password, in a company root does not belong to
    let uri = format!(
        "/api/companies/{}/users/{}/password",
        company_id,
        Uuid::new_v4()
    );
    let (status, _) = send(
        &app,
        request(
            "PUT",
            &uri,
            Some(&token),
            Some(json!({"current_password": "whatever1", "new_password": "whatever2"})),
        ),
    )
    .await;
    assert_eq!(status, 403);

    // Someone else's inbox
    let uri = format!(
        "/api/companies/{}/users/{}/notifications",
        company_id,
        Uuid::new_v4()
    );
    let (status, _) = send(&app, request("GET", &uri, Some(&token), None)).await;
    assert_eq!(status, 403);
}

#[tokio::test]
async fn test_session_routes_reject_other_users() {
    let app = offline_app();
    let company_id = Uuid::new_v4();
    let token = token_for(Uuid::new_v4(), company_id, false);
    let uri = format!(
        "/api/companies/{}/users/{}/experiences",
        company_id,
        Uuid::new_v4()
    );

    let (status, _) = send(
        &app,
        request(
            "POST",
            &uri,
            Some(&token),
            Some(json!({"title": "Engineer", "employer": "Acme", "start_date": "2020-01-01"})),
        ),
    )
    .await;

    assert_eq!(status, 403);
}

#[tokio::test]
async fn test_invalid_path_uuid() {
    let app = offline_app();
    let token = token_for(Uuid::new_v4(), Uuid::new_v4(), true);

    let (status, body) = send(
        &app,
        request("GET", "/api/companies/not-a-uuid/stats", Some(&token), None),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["data"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_login_validates_before_lookup() {
    let app = offline_app();
    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"email": "not-an-email", "password": "x"})),
        ),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["data"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    use tower::ServiceExt;

    let app = offline_app();
    let mut req = request("GET", "/api/health", None, None);
    req.headers_mut()
        .insert("x-request-id", "req-123".parse().unwrap());

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-123");
}
