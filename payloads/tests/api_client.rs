//! Integration tests for the API client using mockito.

use jiff::Timestamp;
use mockito::Matcher;
use payloads::{
    ApiClient, ClientError, Session, SessionStore, TaskStatus, requests,
    responses,
};
use rust_decimal::Decimal;
use uuid::Uuid;

fn logged_in_store() -> SessionStore {
    SessionStore::with_session(Session {
        access_token: "test-access".into(),
        refresh_token: "test-refresh".into(),
    })
}

fn sample_company(name: &str) -> responses::Company {
    responses::Company {
        company_id: payloads::CompanyId(Uuid::new_v4()),
        company_details: payloads::Company {
            name: name.into(),
            contact_email: "ops@acme.example".into(),
            phone: None,
            address: None,
            notes: None,
        },
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

#[tokio::test]
async fn list_companies_attaches_bearer_and_decodes_body() {
    let mut server = mockito::Server::new_async().await;
    let body = serde_json::to_string(&vec![sample_company("Acme")]).unwrap();

    let mock = server
        .mock("GET", "/api/companies")
        .match_header("authorization", "Bearer test-access")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let client = ApiClient::new(server.url(), logged_in_store());
    let companies = client.list_companies().await.unwrap();

    assert_eq!(companies.len(), 1);
    assert_eq!(companies[0].company_details.name, "Acme");

    mock.assert_async().await;
}

#[tokio::test]
async fn server_error_message_is_extracted_from_json_payload() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/api/tasks")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "Title required"}"#)
        .create_async()
        .await;

    let client = ApiClient::new(server.url(), logged_in_store());
    let task = payloads::Task {
        project_id: payloads::ProjectId(Uuid::new_v4()),
        assignee_id: None,
        title: String::new(),
        details: None,
        status: TaskStatus::NotStarted,
        due_at: None,
    };
    let err = client.create_task(&task).await.unwrap_err();

    match err {
        ClientError::Api(status, message) => {
            assert_eq!(status.as_u16(), 400);
            assert_eq!(message, "Title required");
        }
        other => panic!("expected Api error, got {other:?}"),
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn unstructured_error_body_falls_back_to_raw_text() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/api/companies")
        .with_status(500)
        .with_body("upstream exploded")
        .create_async()
        .await;

    let client = ApiClient::new(server.url(), logged_in_store());
    let err = client.list_companies().await.unwrap_err();

    assert_eq!(err.to_string(), "upstream exploded");
    mock.assert_async().await;
}

#[tokio::test]
async fn empty_error_body_uses_status_reason() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/api/companies")
        .with_status(404)
        .create_async()
        .await;

    let client = ApiClient::new(server.url(), logged_in_store());
    let err = client.list_companies().await.unwrap_err();

    assert_eq!(err.to_string(), "Not Found");
    mock.assert_async().await;
}

#[tokio::test]
async fn task_filter_serializes_to_query_string() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/api/tasks")
        .match_query(Matcher::UrlEncoded("status".into(), "COMPLETED".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let client = ApiClient::new(server.url(), logged_in_store());
    let filter = requests::TaskFilter {
        status: Some(TaskStatus::Completed),
        ..Default::default()
    };
    let tasks = client.list_tasks(&filter).await.unwrap();

    assert!(tasks.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn delete_accepts_query_filter() {
    let mut server = mockito::Server::new_async().await;
    let project_id = payloads::ProjectId(Uuid::new_v4());

    let mock = server
        .mock("DELETE", "/api/tasks")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("status".into(), "COMPLETED".into()),
            Matcher::UrlEncoded("project_id".into(), project_id.to_string()),
        ]))
        .with_status(204)
        .create_async()
        .await;

    let client = ApiClient::new(server.url(), logged_in_store());
    let filter = requests::TaskFilter {
        project_id: Some(project_id),
        status: Some(TaskStatus::Completed),
        ..Default::default()
    };
    client.delete_tasks(&filter).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn rejected_access_token_is_refreshed_and_request_replayed_once() {
    let mut server = mockito::Server::new_async().await;
    let body = serde_json::to_string(&vec![sample_company("Acme")]).unwrap();

    let stale = server
        .mock("GET", "/api/companies")
        .match_header("authorization", "Bearer stale")
        .with_status(401)
        .create_async()
        .await;
    let refresh = server
        .mock("POST", "/api/auth/refresh")
        .match_body(Matcher::PartialJsonString(
            r#"{"refresh_token": "test-refresh"}"#.into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token": "fresh", "refresh_token": "fresh-r"}"#)
        .create_async()
        .await;
    let replay = server
        .mock("GET", "/api/companies")
        .match_header("authorization", "Bearer fresh")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let store = SessionStore::with_session(Session {
        access_token: "stale".into(),
        refresh_token: "test-refresh".into(),
    });
    let client = ApiClient::new(server.url(), store.clone());
    let companies = client.list_companies().await.unwrap();

    assert_eq!(companies[0].company_details.name, "Acme");
    // The store now carries the rotated pair.
    let session = store.get().unwrap();
    assert_eq!(session.access_token, "fresh");
    assert_eq!(session.refresh_token, "fresh-r");

    stale.assert_async().await;
    refresh.assert_async().await;
    replay.assert_async().await;
}

#[tokio::test]
async fn failed_refresh_surfaces_session_expired_and_clears_store() {
    let mut server = mockito::Server::new_async().await;

    let stale = server
        .mock("GET", "/api/companies")
        .with_status(401)
        .create_async()
        .await;
    let refresh = server
        .mock("POST", "/api/auth/refresh")
        .with_status(401)
        .with_body(r#"{"message": "refresh token revoked"}"#)
        .create_async()
        .await;

    let store = logged_in_store();
    let client = ApiClient::new(server.url(), store.clone());
    let err = client.list_companies().await.unwrap_err();

    assert!(matches!(err, ClientError::SessionExpired));
    assert!(!store.is_logged_in());

    stale.assert_async().await;
    refresh.assert_async().await;
}

#[tokio::test]
async fn second_401_after_refresh_is_not_retried_again() {
    let mut server = mockito::Server::new_async().await;

    // Both the original call and the replay 401: the client must report the
    // API error rather than loop.
    let unauthorized = server
        .mock("GET", "/api/companies")
        .with_status(401)
        .with_body(r#"{"message": "nope"}"#)
        .expect(2)
        .create_async()
        .await;
    let refresh = server
        .mock("POST", "/api/auth/refresh")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token": "fresh", "refresh_token": "fresh-r"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = ApiClient::new(server.url(), logged_in_store());
    let err = client.list_companies().await.unwrap_err();

    match err {
        ClientError::Api(status, message) => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(message, "nope");
        }
        other => panic!("expected Api error, got {other:?}"),
    }

    unauthorized.assert_async().await;
    refresh.assert_async().await;
}

#[tokio::test]
async fn no_session_means_no_auth_header_and_no_refresh() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/api/companies")
        .match_header("authorization", Matcher::Missing)
        .with_status(401)
        .create_async()
        .await;

    let client = ApiClient::new(server.url(), SessionStore::new());
    let err = client.list_companies().await.unwrap_err();

    assert!(matches!(err, ClientError::Api(status, _) if status.as_u16() == 401));
    mock.assert_async().await;
}

#[tokio::test]
async fn login_stores_returned_token_pair() {
    let mut server = mockito::Server::new_async().await;
    let user_id = Uuid::new_v4();

    let mock = server
        .mock("POST", "/api/auth/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{
                "tokens": {{"access_token": "a1", "refresh_token": "r1"}},
                "profile": {{
                    "user_id": "{user_id}",
                    "email": "pm@praxis.example",
                    "display_name": "Robin"
                }}
            }}"#
        ))
        .create_async()
        .await;

    let store = SessionStore::new();
    let client = ApiClient::new(server.url(), store.clone());
    let profile = client
        .login(&requests::LoginCredentials {
            email: "pm@praxis.example".into(),
            password: "hunter2".into(),
        })
        .await
        .unwrap();

    assert_eq!(profile.shown_name(), "Robin");
    assert_eq!(store.get().unwrap().access_token, "a1");

    mock.assert_async().await;
}

#[tokio::test]
async fn repeated_get_is_idempotent_in_observed_state() {
    let mut server = mockito::Server::new_async().await;
    let body = serde_json::to_string(&vec![sample_company("Acme")]).unwrap();

    let mock = server
        .mock("GET", "/api/companies")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(2)
        .create_async()
        .await;

    let client = ApiClient::new(server.url(), logged_in_store());
    let first = client.list_companies().await.unwrap();
    let second = client.list_companies().await.unwrap();

    assert_eq!(first, second);
    mock.assert_async().await;
}

#[tokio::test]
async fn expense_report_round_trip_preserves_submitted_fields() {
    let mut server = mockito::Server::new_async().await;
    let employee_id = payloads::EmployeeId(Uuid::new_v4());
    let item = payloads::ExpenseItem {
        description: "Client site travel".into(),
        category: payloads::ExpenseCategory::Travel,
        amount: Decimal::new(8250, 2),
        incurred_on: jiff::civil::date(2026, 8, 3),
    };

    // The server echoes the draft back with ids, status, and a total.
    let echoed = responses::ExpenseReport {
        report_id: payloads::ExpenseReportId(Uuid::new_v4()),
        employee_id,
        project_id: None,
        status: payloads::ExpenseStatus::Draft,
        items: vec![responses::ExpenseLine {
            item_id: payloads::ExpenseItemId(Uuid::new_v4()),
            item_details: item.clone(),
        }],
        total: Decimal::new(8250, 2),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    };
    let mock = server
        .mock("POST", "/api/expense-reports")
        .match_body(Matcher::PartialJsonString(
            r#"{"items": [{"description": "Client site travel"}]}"#.into(),
        ))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(serde_json::to_string(&echoed).unwrap())
        .create_async()
        .await;

    let client = ApiClient::new(server.url(), logged_in_store());
    let report = client
        .create_expense_report(&requests::CreateExpenseReport {
            employee_id,
            project_id: None,
            items: vec![item.clone()],
        })
        .await
        .unwrap();

    assert_eq!(report.items[0].item_details, item);
    assert_eq!(report.total, item.amount);
    mock.assert_async().await;
}
