// Integration tests for `ApiClient` using wiremock.

use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use klima_api::{ApiClient, ConditionerDraft, Error};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let base = server.uri().parse().expect("mock server URI is valid");
    let client = ApiClient::with_client(reqwest::Client::new(), base);
    (server, client)
}

fn draft() -> ConditionerDraft {
    ConditionerDraft {
        name: "Unit A".into(),
        model: "X-1000".into(),
        serial_number: "SN-0001".into(),
        location: "Server room".into(),
        installation_date: NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date"),
        status_id: 1,
        type_id: 2,
        manufacturer_id: 3,
    }
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_list_conditioners() {
    let (server, client) = setup().await;

    let body = json!([
        {
            "id": 1,
            "name": "Unit A",
            "model": "X-1000",
            "serialNumber": "SN-0001",
            "location": "Server room",
            "installationDate": "2024-03-01",
            "statusId": 1,
            "typeId": 2,
            "manufacturerId": 3
        },
        {
            "id": 2,
            "name": "Chiller B",
            "model": null,
            "serialNumber": "SN-0002",
            "location": "Roof",
            "installationDate": null,
            "statusId": 2,
            "typeId": 1,
            "manufacturerId": 3
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/conditioners"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let list = client.list_conditioners().await.expect("list succeeds");

    assert_eq!(list.len(), 2);
    assert_eq!(list[0].id, 1);
    assert_eq!(list[0].name.as_deref(), Some("Unit A"));
    assert_eq!(list[0].serial_number.as_deref(), Some("SN-0001"));
    assert_eq!(
        list[0].installation_date,
        NaiveDate::from_ymd_opt(2024, 3, 1)
    );
    // server order is preserved, missing fields deserialize to None
    assert_eq!(list[1].id, 2);
    assert_eq!(list[1].model, None);
    assert_eq!(list[1].installation_date, None);
}

#[tokio::test]
async fn test_create_conditioner_sends_camel_case_body() {
    let (server, client) = setup().await;

    let expected_body = json!({
        "name": "Unit A",
        "model": "X-1000",
        "serialNumber": "SN-0001",
        "location": "Server room",
        "installationDate": "2024-03-01",
        "statusId": 1,
        "typeId": 2,
        "manufacturerId": 3
    });

    let response = json!({
        "id": 42,
        "name": "Unit A",
        "model": "X-1000",
        "serialNumber": "SN-0001",
        "location": "Server room",
        "installationDate": "2024-03-01",
        "statusId": 1,
        "typeId": 2,
        "manufacturerId": 3,
        "createdAt": "2024-03-01T10:00:00Z"
    });

    Mock::given(method("POST"))
        .and(path("/conditioners"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(201).set_body_json(&response))
        .mount(&server)
        .await;

    let created = client
        .create_conditioner(&draft())
        .await
        .expect("create succeeds");

    assert_eq!(created.id, 42);
    assert!(created.created_at.is_some());
}

#[tokio::test]
async fn test_update_conditioner_puts_full_draft() {
    let (server, client) = setup().await;

    let response = json!({
        "id": 7,
        "name": "Unit A",
        "model": "X-1000",
        "serialNumber": "SN-0001",
        "location": "Server room",
        "installationDate": "2024-03-01",
        "statusId": 1,
        "typeId": 2,
        "manufacturerId": 3
    });

    Mock::given(method("PUT"))
        .and(path("/conditioners/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .mount(&server)
        .await;

    let updated = client
        .update_conditioner(7, &draft())
        .await
        .expect("update succeeds");

    assert_eq!(updated.id, 7);
}

#[tokio::test]
async fn test_delete_conditioner_accepts_empty_body() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/conditioners/7"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    client.delete_conditioner(7).await.expect("delete succeeds");
}

#[tokio::test]
async fn test_fetch_lookups_combines_all_three() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/conditioner-statuses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Active" },
            { "id": 2, "name": "In repair" }
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/conditioner-types"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Split" }
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/manufacturers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 3, "name": "Frost Dynamics", "country": "FI" }
        ])))
        .mount(&server)
        .await;

    let bundle = client.fetch_lookups().await.expect("lookups succeed");

    assert_eq!(bundle.statuses.len(), 2);
    assert_eq!(bundle.types.len(), 1);
    assert_eq!(bundle.manufacturers[0].name, "Frost Dynamics");
    assert_eq!(bundle.manufacturers[0].country.as_deref(), Some("FI"));
}

// ── Failure-path tests ──────────────────────────────────────────────

#[tokio::test]
async fn test_server_error_message_comes_from_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/conditioners"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "message": "Serial number already exists"
        })))
        .mount(&server)
        .await;

    let err = client
        .create_conditioner(&draft())
        .await
        .expect_err("create must fail");

    match &err {
        Error::Server { status, message } => {
            assert_eq!(*status, 409);
            assert_eq!(message, "Serial number already exists");
        }
        other => panic!("expected Server error, got {other:?}"),
    }
    assert_eq!(err.user_message(), "Serial number already exists");
}

#[tokio::test]
async fn test_server_error_without_body_falls_back_to_status() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/conditioners/999"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client
        .get_conditioner(999)
        .await
        .expect_err("get must fail");

    assert!(err.is_not_found());
    assert_eq!(err.user_message(), "Server error: 404");
}

#[tokio::test]
async fn test_transport_error_has_connection_message() {
    // Nothing listens on this port.
    let base = "http://127.0.0.1:1".parse().expect("valid URL");
    let client = ApiClient::with_client(reqwest::Client::new(), base);

    let err = client
        .list_conditioners()
        .await
        .expect_err("list must fail");

    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(
        err.user_message(),
        "Unable to reach the server. Please check your connection."
    );
}

#[tokio::test]
async fn test_fetch_lookups_fails_fast_when_one_endpoint_fails() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/conditioner-statuses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/conditioner-types"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "types table unavailable"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/manufacturers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let err = client.fetch_lookups().await.expect_err("bundle must fail");
    assert_eq!(err.user_message(), "types table unavailable");
}

#[tokio::test]
async fn test_malformed_success_body_is_a_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/conditioners"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client
        .list_conditioners()
        .await
        .expect_err("list must fail");

    assert!(matches!(err, Error::Deserialization { .. }));
    assert_eq!(err.user_message(), "An unexpected error occurred");
}
