//! End-to-end flows against a real PostgreSQL
//!
//! Run with `cargo test -- --ignored` on a machine with Docker.

mod common;

use std::collections::HashMap;

use serde_json::{Value, json};
use uuid::Uuid;

use common::{ROOT_EMAIL, ROOT_PASSWORD, TestDb, request, send};

/// Create a company through the root API and return its id
async fn create_company(db: &TestDb, root_token: &str, slug: &str) -> Uuid {
    let (status, body) = send(
        &db.app,
        request(
            "POST",
            "/api/companies",
            Some(root_token),
            Some(json!({
                "name": format!("{slug} inc"),
                "email": format!("contact@{slug}.test"),
                "admin": {
                    "first_name": "Grace",
                    "last_name": "Hopper",
                    "email": format!("admin@{slug}.test"),
                    "password": "admin-password"
                }
            })),
        ),
    )
    .await;
    assert_eq!(status, 201, "{body}");
    assert_eq!(body["data"]["role"]["name"], "admin");
    body["data"]["company"]["id"].as_str().unwrap().parse().unwrap()
}

async fn create_question(
    db: &TestDb,
    token: &str,
    company_id: Uuid,
    technology: &str,
    correct_option: i32,
) -> Uuid {
    let (status, body) = send(
        &db.app,
        request(
            "POST",
            &format!("/api/companies/{company_id}/questions"),
            Some(token),
            Some(json!({
                "technology": technology,
                "content": format!("A {technology} question"),
                "options": ["a", "b", "c"],
                "correct_option": correct_option
            })),
        ),
    )
    .await;
    assert_eq!(status, 201, "{body}");
    body["data"]["id"].as_str().unwrap().parse().unwrap()
}

async fn create_condidat(db: &TestDb, token: &str, company_id: Uuid, email: &str) -> Uuid {
    create_named_condidat(db, token, company_id, email, "Alan", "Turing").await
}

async fn create_named_condidat(
    db: &TestDb,
    token: &str,
    company_id: Uuid,
    email: &str,
    first_name: &str,
    last_name: &str,
) -> Uuid {
    let (status, body) = send(
        &db.app,
        request(
            "POST",
            &format!("/api/companies/{company_id}/condidats"),
            Some(token),
            Some(json!({"first_name": first_name, "last_name": last_name, "email": email})),
        ),
    )
    .await;
    assert_eq!(status, 201, "{body}");
    body["data"]["id"].as_str().unwrap().parse().unwrap()
}

/// Create an employee without roles and return their id
async fn create_employee(
    db: &TestDb,
    admin_token: &str,
    company_id: Uuid,
    email: &str,
    password: &str,
) -> Uuid {
    let (status, body) = send(
        &db.app,
        request(
            "POST",
            &format!("/api/companies/{company_id}/users"),
            Some(admin_token),
            Some(json!({
                "first_name": "Homer",
                "last_name": "Simpson",
                "email": email,
                "password": password
            })),
        ),
    )
    .await;
    assert_eq!(status, 201, "{body}");
    body["data"]["id"].as_str().unwrap().parse().unwrap()
}

async fn create_role(db: &TestDb, token: &str, company_id: Uuid, name: &str) -> Uuid {
    let (status, body) = send(
        &db.app,
        request(
            "POST",
            &format!("/api/companies/{company_id}/roles"),
            Some(token),
            Some(json!({"name": name})),
        ),
    )
    .await;
    assert_eq!(status, 201, "{body}");

    let permissions = body["data"]["permissions"].as_array().unwrap();
    assert_eq!(permissions.len(), hrdesk::constants::features::ALL.len());
    for permission in permissions {
        for bit in ["can_create", "can_read", "can_update", "can_delete"] {
            assert_eq!(permission[bit], false, "{permission}");
        }
    }
    body["data"]["id"].as_str().unwrap().parse().unwrap()
}

async fn generate_test(db: &TestDb, token: &str, company_id: Uuid, body: Value) -> (u16, Value) {
    send(
        &db.app,
        request(
            "POST",
            &format!("/api/companies/{company_id}/tests"),
            Some(token),
            Some(body),
        ),
    )
    .await
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_seed_is_idempotent() {
    let db = TestDb::start().await;
    let config = common::test_config("postgres://unused");

    let outcome = hrdesk::db::seed_root(&db.pool, &config.seed).await.unwrap();
    assert_eq!(outcome, hrdesk::db::SeedOutcome::AlreadySeeded);

    let roots: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM companies WHERE is_root")
        .fetch_one(&db.pool)
        .await
        .unwrap();
    assert_eq!(roots, 1);

    let (status, body) = send(&db.app, request("GET", "/api/health/ready", None, None)).await;
    assert_eq!(status, 200, "{body}");
    assert_eq!(body["data"]["status"], "ready");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_recruitment_flow() {
    let db = TestDb::start().await;
    let (root_token, _, _) = db.login(ROOT_EMAIL, ROOT_PASSWORD).await;
    let company_id = create_company(&db, &root_token, "acme").await;
    let (token, admin_id, session_company) = db.login("admin@acme.test", "admin-password").await;
    assert_eq!(session_company, company_id);

    let mut answer_key = HashMap::new();
    for correct in [0, 1, 2] {
        let id = create_question(&db, &token, company_id, "Rust", correct).await;
        answer_key.insert(id, correct);
    }
    for correct in [1, 2] {
        let id = create_question(&db, &token, company_id, "sql", correct).await;
        answer_key.insert(id, correct);
    }

    let (status, body) = send(
        &db.app,
        request(
            "GET",
            &format!("/api/companies/{company_id}/questions/technologies"),
            Some(&token),
            None,
        ),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let condidat_id = create_condidat(&db, &token, company_id, "alan@example.com").await;
    let tests_uri = format!("/api/companies/{company_id}/tests");

    // More questions than the bank holds
    let (status, body) = send(
        &db.app,
        request(
            "POST",
            &tests_uri,
            Some(&token),
            Some(json!({
                "condidat_id": condidat_id,
                "technologies": [{"technology": "sql", "count": 5}]
            })),
        ),
    )
    .await;
    assert_eq!(status, 400);
    assert!(body["message"].as_str().unwrap().contains("sql"));

    let (status, body) = send(
        &db.app,
        request(
            "POST",
            &tests_uri,
            Some(&token),
            Some(json!({
                "condidat_id": condidat_id,
                "technologies": [
                    {"technology": "rust", "count": 2},
                    {"technology": "SQL", "count": 1}
                ]
            })),
        ),
    )
    .await;
    assert_eq!(status, 201, "{body}");
    let test = &body["data"];
    let test_id = test["id"].as_str().unwrap().to_string();
    let questions = test["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 3);
    assert!(questions.iter().all(|q| q.get("correct_option").is_none()));
    assert_eq!(questions[0]["technology"], "rust");
    assert_eq!(questions[2]["technology"], "sql");

    let (_, body) = send(
        &db.app,
        request(
            "GET",
            &format!("/api/companies/{company_id}/condidats/{condidat_id}"),
            Some(&token),
            None,
        ),
    )
    .await;
    assert_eq!(body["data"]["status"], "testing");

    // Answer the first two correctly, leave the last one out
    let answers: Vec<Value> = questions
        .iter()
        .take(2)
        .map(|q| {
            let id: Uuid = q["question_id"].as_str().unwrap().parse().unwrap();
            json!({"question_id": id, "answer": answer_key[&id]})
        })
        .collect();
    let submit_uri = format!("{tests_uri}/{test_id}/submit");
    let (status, body) = send(
        &db.app,
        request("POST", &submit_uri, Some(&token), Some(json!({"answers": answers}))),
    )
    .await;
    assert_eq!(status, 200, "{body}");
    assert_eq!(body["data"]["correct_answers"], 2);
    assert_eq!(body["data"]["score"], 66.67);

    let (status, _) = send(
        &db.app,
        request("POST", &submit_uri, Some(&token), Some(json!({"answers": []}))),
    )
    .await;
    assert_eq!(status, 409);

    let (_, body) = send(
        &db.app,
        request("GET", &format!("{tests_uri}/{test_id}"), Some(&token), None),
    )
    .await;
    assert_eq!(body["data"]["status"], "completed");
    assert!(body["data"]["questions"][0].get("correct_option").is_some());

    let (_, body) = send(
        &db.app,
        request(
            "GET",
            &format!("/api/companies/{company_id}/condidats/{condidat_id}"),
            Some(&token),
            None,
        ),
    )
    .await;
    assert_eq!(body["data"]["score"], 66.67);

    let (_, body) = send(
        &db.app,
        request(
            "GET",
            &format!("/api/companies/{company_id}/users/{admin_id}/notifications/unseen-count"),
            Some(&token),
            None,
        ),
    )
    .await;
    assert_eq!(body["data"]["count"], 1);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_companies_are_isolated() {
    let db = TestDb::start().await;
    let (root_token, _, _) = db.login(ROOT_EMAIL, ROOT_PASSWORD).await;
    let first = create_company(&db, &root_token, "first").await;
    let second = create_company(&db, &root_token, "second").await;

    let (first_token, _, _) = db.login("admin@first.test", "admin-password").await;
    let (second_token, _, _) = db.login("admin@second.test", "admin-password").await;
    let foreign_condidat = create_condidat(&db, &second_token, second, "bob@example.com").await;

    // Another tenant's path
    let (status, _) = send(
        &db.app,
        request(
            "GET",
            &format!("/api/companies/{second}/condidats"),
            Some(&first_token),
            None,
        ),
    )
    .await;
    assert_eq!(status, 403);

    // Another tenant's row under one's own path
    let (status, _) = send(
        &db.app,
        request(
            "GET",
            &format!("/api/companies/{first}/condidats/{foreign_condidat}"),
            Some(&first_token),
            None,
        ),
    )
    .await;
    assert_eq!(status, 404);

    // Root reaches every tenant
    let (status, body) = send(
        &db.app,
        request(
            "GET",
            &format!("/api/companies/{second}/condidats"),
            Some(&root_token),
            None,
        ),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["total"], 1);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_mission_order_decision_flow() {
    let db = TestDb::start().await;
    let (root_token, _, _) = db.login(ROOT_EMAIL, ROOT_PASSWORD).await;
    let company_id = create_company(&db, &root_token, "globex").await;
    let (admin_token, _, _) = db.login("admin@globex.test", "admin-password").await;

    let (status, body) = send(
        &db.app,
        request(
            "POST",
            &format!("/api/companies/{company_id}/users"),
            Some(&admin_token),
            Some(json!({
                "first_name": "Homer",
                "last_name": "Simpson",
                "email": "homer@globex.test",
                "password": "donuts-forever"
            })),
        ),
    )
    .await;
    assert_eq!(status, 201, "{body}");

    let (employee_token, employee_id, _) = db.login("homer@globex.test", "donuts-forever").await;
    let own_uri = format!("/api/companies/{company_id}/users/{employee_id}/mission-orders");

    let (status, body) = send(
        &db.app,
        request(
            "POST",
            &own_uri,
            Some(&employee_token),
            Some(json!({
                "object": "Customer visit",
                "destination": "Springfield",
                "start_date": "2025-05-02",
                "end_date": "2025-05-01"
            })),
        ),
    )
    .await;
    assert_eq!(status, 400, "{body}");

    let (status, body) = send(
        &db.app,
        request(
            "POST",
            &own_uri,
            Some(&employee_token),
            Some(json!({
                "object": "Customer visit",
                "destination": "Springfield",
                "start_date": "2025-05-01",
                "end_date": "2025-05-03"
            })),
        ),
    )
    .await;
    assert_eq!(status, 201, "{body}");
    assert_eq!(body["data"]["status"], "pending");
    let order_id = body["data"]["id"].as_str().unwrap().to_string();
    let status_uri = format!("/api/companies/{company_id}/mission-orders/{order_id}/status");

    // No role, no decision
    let (status, _) = send(
        &db.app,
        request(
            "PUT",
            &status_uri,
            Some(&employee_token),
            Some(json!({"status": "accepted"})),
        ),
    )
    .await;
    assert_eq!(status, 403);

    let (status, _) = send(
        &db.app,
        request("PUT", &status_uri, Some(&admin_token), Some(json!({"status": "pending"}))),
    )
    .await;
    assert_eq!(status, 400);

    let (status, body) = send(
        &db.app,
        request("PUT", &status_uri, Some(&admin_token), Some(json!({"status": "accepted"}))),
    )
    .await;
    assert_eq!(status, 200, "{body}");
    assert_eq!(body["data"]["status"], "accepted");
    assert!(body["data"]["decided_at"].is_string());

    let (status, _) = send(
        &db.app,
        request("PUT", &status_uri, Some(&admin_token), Some(json!({"status": "rejected"}))),
    )
    .await;
    assert_eq!(status, 409);

    // Decided orders are frozen for their owner
    let (status, _) = send(
        &db.app,
        request(
            "PUT",
            &format!("/api/companies/{company_id}/mission-orders/{order_id}"),
            Some(&employee_token),
            Some(json!({"destination": "Shelbyville"})),
        ),
    )
    .await;
    assert_eq!(status, 403);

    let (_, body) = send(
        &db.app,
        request(
            "GET",
            &format!("/api/companies/{company_id}/users/{employee_id}/notifications"),
            Some(&employee_token),
            None,
        ),
    )
    .await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["title"], "Mission order decided");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_effective_permissions_merge_roles() {
    let db = TestDb::start().await;
    let (root_token, _, _) = db.login(ROOT_EMAIL, ROOT_PASSWORD).await;
    let company_id = create_company(&db, &root_token, "initech").await;
    let (admin_token, _, _) = db.login("admin@initech.test", "admin-password").await;

    let reader = create_role(&db, &admin_token, company_id, "reader").await;
    let writer = create_role(&db, &admin_token, company_id, "writer").await;

    let (status, body) = send(
        &db.app,
        request(
            "PUT",
            &format!("/api/companies/{company_id}/roles/{reader}/permissions"),
            Some(&admin_token),
            Some(json!({"permissions": [{"feature": "condidats", "can_read": true}]})),
        ),
    )
    .await;
    assert_eq!(status, 200, "{body}");

    let (status, body) = send(
        &db.app,
        request(
            "PUT",
            &format!("/api/companies/{company_id}/roles/{writer}/permissions"),
            Some(&admin_token),
            Some(json!({"permissions": [
                {"feature": "condidats", "can_create": true},
                {"feature": "presences", "can_read": true}
            ]})),
        ),
    )
    .await;
    assert_eq!(status, 200, "{body}");

    // Upserting again replaces the bits instead of adding a row
    let (status, body) = send(
        &db.app,
        request(
            "PUT",
            &format!("/api/companies/{company_id}/roles/{writer}/permissions"),
            Some(&admin_token),
            Some(json!({"permissions": [{"feature": "presences", "can_read": false}]})),
        ),
    )
    .await;
    assert_eq!(status, 200, "{body}");
    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM permissions WHERE role_id = $1")
        .bind(writer)
        .fetch_one(&db.pool)
        .await
        .unwrap();
    assert_eq!(rows, hrdesk::constants::features::ALL.len() as i64);

    let (status, body) = send(
        &db.app,
        request(
            "PUT",
            &format!("/api/companies/{company_id}/roles/{reader}/permissions"),
            Some(&admin_token),
            Some(json!({"permissions": [{"feature": "payroll", "can_read": true}]})),
        ),
    )
    .await;
    assert_eq!(status, 400, "{body}");
    assert!(body["message"].as_str().unwrap().contains("payroll"));

    let employee_id =
        create_employee(&db, &admin_token, company_id, "milton@initech.test", "red-stapler").await;
    for role_id in [reader, writer] {
        let (status, body) = send(
            &db.app,
            request(
                "POST",
                &format!("/api/companies/{company_id}/users/{employee_id}/roles"),
                Some(&admin_token),
                Some(json!({"role_id": role_id})),
            ),
        )
        .await;
        assert_eq!(status, 200, "{body}");
    }

    let (status, body) = send(
        &db.app,
        request(
            "GET",
            &format!("/api/companies/{company_id}/users/{employee_id}/permissions"),
            Some(&admin_token),
            None,
        ),
    )
    .await;
    assert_eq!(status, 200, "{body}");
    let effective = body["data"].as_array().unwrap();
    assert_eq!(effective.len(), hrdesk::constants::features::ALL.len());
    let condidats = effective.iter().find(|p| p["feature"] == "condidats").unwrap();
    assert_eq!(condidats["can_read"], true);
    assert_eq!(condidats["can_create"], true);
    assert_eq!(condidats["can_update"], false);
    assert_eq!(condidats["can_delete"], false);
    let presences = effective.iter().find(|p| p["feature"] == "presences").unwrap();
    assert_eq!(presences["can_read"], false);

    // The merged bits gate the employee's own calls
    let (employee_token, _, _) = db.login("milton@initech.test", "red-stapler").await;
    let condidat_id =
        create_condidat(&db, &employee_token, company_id, "peter@example.com").await;
    let condidat_uri = format!("/api/companies/{company_id}/condidats/{condidat_id}");

    let (status, _) =
        send(&db.app, request("GET", &condidat_uri, Some(&employee_token), None)).await;
    assert_eq!(status, 200);

    let (status, _) =
        send(&db.app, request("DELETE", &condidat_uri, Some(&employee_token), None)).await;
    assert_eq!(status, 403);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_broadcast_reaches_active_employees() {
    let db = TestDb::start().await;
    let (root_token, _, _) = db.login(ROOT_EMAIL, ROOT_PASSWORD).await;
    let company_id = create_company(&db, &root_token, "umbrella").await;
    let (admin_token, admin_id, _) = db.login("admin@umbrella.test", "admin-password").await;

    let active =
        create_employee(&db, &admin_token, company_id, "jill@umbrella.test", "s3cret-pass").await;
    let inactive =
        create_employee(&db, &admin_token, company_id, "chris@umbrella.test", "s3cret-pass").await;

    let (status, body) = send(
        &db.app,
        request(
            "PUT",
            &format!("/api/companies/{company_id}/users/{inactive}"),
            Some(&admin_token),
            Some(json!({"is_active": false})),
        ),
    )
    .await;
    assert_eq!(status, 200, "{body}");

    let (status, body) = send(
        &db.app,
        request(
            "POST",
            &format!("/api/companies/{company_id}/notifications"),
            Some(&admin_token),
            Some(json!({"user_id": null, "title": "Office closed", "content": "Friday off"})),
        ),
    )
    .await;
    assert_eq!(status, 201, "{body}");
    assert_eq!(body["data"]["count"], 2);

    let (employee_token, _, _) = db.login("jill@umbrella.test", "s3cret-pass").await;
    for (token, user_id) in [(admin_token.as_str(), admin_id), (employee_token.as_str(), active)] {
        let (status, body) = send(
            &db.app,
            request(
                "GET",
                &format!("/api/companies/{company_id}/users/{user_id}/notifications"),
                Some(token),
                None,
            ),
        )
        .await;
        assert_eq!(status, 200, "{body}");
        assert_eq!(body["data"]["total"], 1, "{user_id}");
        assert_eq!(body["data"]["items"][0]["title"], "Office closed");
        assert_eq!(body["data"]["items"][0]["seen"], false);
    }

    let skipped: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notifications WHERE user_id = $1")
        .bind(inactive)
        .fetch_one(&db.pool)
        .await
        .unwrap();
    assert_eq!(skipped, 0);

    let own_uri = format!("/api/companies/{company_id}/users/{active}/notifications");
    let (status, body) = send(
        &db.app,
        request("PUT", &format!("{own_uri}/seen"), Some(&employee_token), None),
    )
    .await;
    assert_eq!(status, 200, "{body}");
    assert_eq!(body["data"]["count"], 1);

    let (_, body) = send(
        &db.app,
        request("GET", &format!("{own_uri}/unseen-count"), Some(&employee_token), None),
    )
    .await;
    assert_eq!(body["data"]["count"], 0);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_presence_summary_from_records() {
    let db = TestDb::start().await;
    let (root_token, _, _) = db.login(ROOT_EMAIL, ROOT_PASSWORD).await;
    let company_id = create_company(&db, &root_token, "hooli").await;
    let (admin_token, _, _) = db.login("admin@hooli.test", "admin-password").await;
    let employee_id =
        create_employee(&db, &admin_token, company_id, "gavin@hooli.test", "nucleus-2025").await;
    let presences_uri = format!("/api/companies/{company_id}/presences");

    let days = [
        ("2025-03-03", "present"),
        ("2025-03-04", "late"),
        ("2025-03-05", "absent"),
        ("2025-03-06", "remote"),
    ];
    for (date, status_name) in days {
        let (status, body) = send(
            &db.app,
            request(
                "POST",
                &presences_uri,
                Some(&admin_token),
                Some(json!({"user_id": employee_id, "date": date, "status": status_name})),
            ),
        )
        .await;
        assert_eq!(status, 201, "{body}");
    }

    // One record per employee per day
    let (status, body) = send(
        &db.app,
        request(
            "POST",
            &presences_uri,
            Some(&admin_token),
            Some(json!({"user_id": employee_id, "date": "2025-03-03", "status": "late"})),
        ),
    )
    .await;
    assert_eq!(status, 409, "{body}");

    let (status, body) = send(
        &db.app,
        request(
            "POST",
            &presences_uri,
            Some(&admin_token),
            Some(json!({"user_id": employee_id, "date": "2025-03-07", "status": "sick"})),
        ),
    )
    .await;
    assert_eq!(status, 400, "{body}");

    let (employee_token, _, _) = db.login("gavin@hooli.test", "nucleus-2025").await;
    let (status, body) = send(
        &db.app,
        request(
            "GET",
            &format!("/api/companies/{company_id}/users/{employee_id}/presences/summary"),
            Some(&employee_token),
            None,
        ),
    )
    .await;
    assert_eq!(status, 200, "{body}");
    let summary = &body["data"];
    assert_eq!(summary["total"], 4);
    assert_eq!(summary["present"], 1);
    assert_eq!(summary["late"], 1);
    assert_eq!(summary["absent"], 1);
    assert_eq!(summary["remote"], 1);
    assert_eq!(summary["attendance_rate"], 75.0);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_training_request_decision_flow() {
    let db = TestDb::start().await;
    let (root_token, _, _) = db.login(ROOT_EMAIL, ROOT_PASSWORD).await;
    let company_id = create_company(&db, &root_token, "soylent").await;
    let (admin_token, _, _) = db.login("admin@soylent.test", "admin-password").await;
    let employee_id =
        create_employee(&db, &admin_token, company_id, "thorn@soylent.test", "soylent-green")
            .await;
    let (employee_token, _, _) = db.login("thorn@soylent.test", "soylent-green").await;

    let (status, body) = send(
        &db.app,
        request(
            "POST",
            &format!("/api/companies/{company_id}/users/{employee_id}/training-requests"),
            Some(&employee_token),
            Some(json!({
                "title": "Advanced SQL",
                "organization": "Postgres Academy",
                "start_date": "2025-09-01",
                "end_date": "2025-09-05"
            })),
        ),
    )
    .await;
    assert_eq!(status, 201, "{body}");
    assert_eq!(body["data"]["status"], "pending");
    let request_id = body["data"]["id"].as_str().unwrap().to_string();
    let request_uri = format!("/api/companies/{company_id}/training-requests/{request_id}");

    // Owners edit their own pending requests without any role
    let (status, body) = send(
        &db.app,
        request(
            "PUT",
            &request_uri,
            Some(&employee_token),
            Some(json!({"title": "Advanced PostgreSQL"})),
        ),
    )
    .await;
    assert_eq!(status, 200, "{body}");
    assert_eq!(body["data"]["title"], "Advanced PostgreSQL");

    let status_uri = format!("{request_uri}/status");
    let (status, body) = send(
        &db.app,
        request("PUT", &status_uri, Some(&admin_token), Some(json!({"status": "rejected"}))),
    )
    .await;
    assert_eq!(status, 200, "{body}");
    assert_eq!(body["data"]["status"], "rejected");

    let (status, _) = send(
        &db.app,
        request("PUT", &status_uri, Some(&admin_token), Some(json!({"status": "accepted"}))),
    )
    .await;
    assert_eq!(status, 409);

    let (status, _) = send(
        &db.app,
        request(
            "PUT",
            &request_uri,
            Some(&employee_token),
            Some(json!({"title": "Something else"})),
        ),
    )
    .await;
    assert_eq!(status, 403);

    let (status, _) =
        send(&db.app, request("DELETE", &request_uri, Some(&employee_token), None)).await;
    assert_eq!(status, 403);

    let (_, body) = send(
        &db.app,
        request(
            "GET",
            &format!("/api/companies/{company_id}/users/{employee_id}/notifications"),
            Some(&employee_token),
            None,
        ),
    )
    .await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["title"], "Training request decided");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_owner_write_skips_decided_order() {
    use hrdesk::{
        db::repositories::MissionOrderRepository,
        handlers::mission_orders::request::UpdateMissionOrderRequest,
    };

    let db = TestDb::start().await;
    let (root_token, _, _) = db.login(ROOT_EMAIL, ROOT_PASSWORD).await;
    let company_id = create_company(&db, &root_token, "vandelay").await;
    let (admin_token, _, _) = db.login("admin@vandelay.test", "admin-password").await;
    let employee_id =
        create_employee(&db, &admin_token, company_id, "art@vandelay.test", "latex-import").await;
    let (employee_token, _, _) = db.login("art@vandelay.test", "latex-import").await;

    let (status, body) = send(
        &db.app,
        request(
            "POST",
            &format!("/api/companies/{company_id}/users/{employee_id}/mission-orders"),
            Some(&employee_token),
            Some(json!({
                "object": "Importer fair",
                "destination": "Manhattan",
                "start_date": "2025-06-10",
                "end_date": "2025-06-11"
            })),
        ),
    )
    .await;
    assert_eq!(status, 201, "{body}");
    let order_id: Uuid = body["data"]["id"].as_str().unwrap().parse().unwrap();

    // A decision lands between the owner's check and the write
    sqlx::query("UPDATE mission_orders SET status = 'accepted', decided_at = NOW() WHERE id = $1")
        .bind(order_id)
        .execute(&db.pool)
        .await
        .unwrap();

    let changes: UpdateMissionOrderRequest =
        serde_json::from_value(json!({"destination": "Queens"})).unwrap();
    let updated =
        MissionOrderRepository::update(&db.pool, &company_id, &order_id, &changes, Some("pending"))
            .await
            .unwrap();
    assert!(updated.is_none());

    let deleted = MissionOrderRepository::delete(&db.pool, &company_id, &order_id, Some("pending"))
        .await
        .unwrap();
    assert!(!deleted);

    let destination: String =
        sqlx::query_scalar("SELECT destination FROM mission_orders WHERE id = $1")
            .bind(order_id)
            .fetch_one(&db.pool)
            .await
            .unwrap();
    assert_eq!(destination, "Manhattan");

    // Permission holders are not bound to the pending state
    let updated =
        MissionOrderRepository::update(&db.pool, &company_id, &order_id, &changes, None)
            .await
            .unwrap();
    assert_eq!(updated.unwrap().destination, "Queens");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_default_title_with_long_names() {
    let db = TestDb::start().await;
    let (root_token, _, _) = db.login(ROOT_EMAIL, ROOT_PASSWORD).await;
    let company_id = create_company(&db, &root_token, "wonka").await;
    let (token, _, _) = db.login("admin@wonka.test", "admin-password").await;

    create_question(&db, &token, company_id, "rust", 0).await;
    let long_name = "é".repeat(100);
    let condidat_id = create_named_condidat(
        &db,
        &token,
        company_id,
        "charlie@example.com",
        &long_name,
        &long_name,
    )
    .await;

    let (status, body) = generate_test(
        &db,
        &token,
        company_id,
        json!({
            "condidat_id": condidat_id,
            "technologies": [{"technology": "rust", "count": 1}]
        }),
    )
    .await;
    assert_eq!(status, 201, "{body}");
    let title = body["data"]["title"].as_str().unwrap();
    assert!(title.chars().count() <= hrdesk::constants::MAX_NAME_LENGTH as usize);
    assert!(title.contains('é'));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_question_used_by_test_is_kept() {
    let db = TestDb::start().await;
    let (root_token, _, _) = db.login(ROOT_EMAIL, ROOT_PASSWORD).await;
    let company_id = create_company(&db, &root_token, "oscorp").await;
    let (token, _, _) = db.login("admin@oscorp.test", "admin-password").await;

    let first = create_question(&db, &token, company_id, "go", 1).await;
    let second = create_question(&db, &token, company_id, "go", 2).await;
    let unused = create_question(&db, &token, company_id, "java", 0).await;
    let condidat_id = create_condidat(&db, &token, company_id, "norman@example.com").await;

    let (status, body) = generate_test(
        &db,
        &token,
        company_id,
        json!({
            "condidat_id": condidat_id,
            "technologies": [{"technology": "go", "count": 2}]
        }),
    )
    .await;
    assert_eq!(status, 201, "{body}");
    let test_id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["question_count"], 2);

    let questions_uri = format!("/api/companies/{company_id}/questions");
    let (status, body) = send(
        &db.app,
        request("DELETE", &format!("{questions_uri}/{first}"), Some(&token), None),
    )
    .await;
    assert_eq!(status, 409, "{body}");

    let (status, _) = send(
        &db.app,
        request("DELETE", &format!("{questions_uri}/{unused}"), Some(&token), None),
    )
    .await;
    assert_eq!(status, 200);

    // Only one answer given, the score still counts both questions
    let (status, body) = send(
        &db.app,
        request(
            "POST",
            &format!("/api/companies/{company_id}/tests/{test_id}/submit"),
            Some(&token),
            Some(json!({"answers": [{"question_id": second, "answer": 2}]})),
        ),
    )
    .await;
    assert_eq!(status, 200, "{body}");
    assert_eq!(body["data"]["correct_answers"], 1);
    assert_eq!(body["data"]["question_count"], 2);
    assert_eq!(body["data"]["score"], 50.0);

    // Deleting the company still cascades through the test questions
    let (status, body) = send(
        &db.app,
        request("DELETE", &format!("/api/companies/{company_id}"), Some(&root_token), None),
    )
    .await;
    assert_eq!(status, 200, "{body}");
}
