// End-to-end coordinator tests: Console + ConditionerStore against a
// wiremock server.

use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use klima_api::ApiClient;
use klima_core::{Console, NotificationKind};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Console) {
    let server = MockServer::start().await;
    let base = server.uri().parse().expect("mock server URI is valid");
    let console = Console::with_api(ApiClient::with_client(reqwest::Client::new(), base));
    (server, console)
}

fn unit_json(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "model": "X-1000",
        "serialNumber": format!("SN-{id:04}"),
        "location": "Floor 1",
        "installationDate": "2024-03-01",
        "statusId": 1,
        "typeId": 1,
        "manufacturerId": 1
    })
}

fn draft_json() -> serde_json::Value {
    json!({
        "name": "Unit C",
        "model": "X-2000",
        "serialNumber": "SN-0003",
        "location": "Roof",
        "installationDate": "2024-05-01",
        "statusId": 1,
        "typeId": 1,
        "manufacturerId": 1
    })
}

fn draft() -> klima_core::ConditionerDraft {
    serde_json::from_value(draft_json()).expect("draft JSON is valid")
}

// ── Fetch coordination ──────────────────────────────────────────────

#[tokio::test]
async fn ensure_loaded_fetches_once_then_noops() {
    let (server, console) = setup().await;

    Mock::given(method("GET"))
        .and(path("/conditioners"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([unit_json(1, "Unit A")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    console.ensure_loaded().await;

    let list = console.store().conditioners();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].name.as_deref(), Some("Unit A"));
    assert_eq!(console.store().filtered(), *list);
    assert!(!console.store().loading());
    assert_eq!(console.store().error(), None);

    // Second call must not hit the server (the mock's expect(1) verifies
    // on drop).
    console.ensure_loaded().await;
    assert_eq!(console.store().conditioners().len(), 1);
}

#[tokio::test]
async fn search_filter_narrows_the_loaded_list() {
    let (server, console) = setup().await;

    Mock::given(method("GET"))
        .and(path("/conditioners"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            unit_json(1, "Unit A"),
            unit_json(2, "Chiller B"),
        ])))
        .mount(&server)
        .await;

    console.store().update_filters(|f| f.search = "unit a".into());
    console.ensure_loaded().await;

    let filtered = console.store().filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name.as_deref(), Some("Unit A"));
    assert_eq!(console.store().conditioners().len(), 2);
}

#[tokio::test]
async fn list_fetch_failure_is_recorded_not_returned() {
    let (server, console) = setup().await;

    Mock::given(method("GET"))
        .and(path("/conditioners"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "db down" })),
        )
        .mount(&server)
        .await;

    console.ensure_loaded().await;

    assert!(console.store().conditioners().is_empty());
    assert_eq!(console.store().error().as_deref(), Some("db down"));
    assert!(!console.store().loading());

    let toasts = console.notifier().active();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, NotificationKind::Error);
    assert_eq!(toasts[0].message, "db down");
}

#[tokio::test]
async fn lookup_failure_discards_partial_results() {
    let (server, console) = setup().await;

    Mock::given(method("GET"))
        .and(path("/conditioner-statuses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Active" }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/conditioner-types"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/manufacturers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    console.ensure_lookups_loaded().await;

    // All-or-nothing: the successful statuses fetch is not stored.
    assert!(!console.store().has_lookups());
    assert_eq!(console.store().status_name(Some(1)), "Unknown");
    assert!(console.store().error().is_some());
}

#[tokio::test]
async fn overlapping_fetches_keep_the_last_resolved_response() {
    let (server, console) = setup().await;

    // First request to arrive gets a delayed payload; the second returns
    // immediately. The delayed response resolves last and wins.
    Mock::given(method("GET"))
        .and(path("/conditioners"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([unit_json(1, "Late winner")]))
                .set_delay(Duration::from_millis(250)),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/conditioners"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            unit_json(2, "Early loser"),
            unit_json(3, "Early loser 2"),
        ])))
        .mount(&server)
        .await;

    tokio::join!(console.refetch(), console.refetch());

    let list = console.store().conditioners();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].name.as_deref(), Some("Late winner"));
}

// ── Mutation coordination ───────────────────────────────────────────

#[tokio::test]
async fn create_refetches_exactly_once_and_mirrors_the_server() {
    let (server, console) = setup().await;

    Mock::given(method("GET"))
        .and(path("/conditioners"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            unit_json(1, "Unit A"),
            unit_json(42, "Unit C"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let mut created_body = draft_json();
    created_body["id"] = json!(42);
    Mock::given(method("POST"))
        .and(path("/conditioners"))
        .respond_with(ResponseTemplate::new(201).set_body_json(&created_body))
        .expect(1)
        .mount(&server)
        .await;

    let created = console.create(&draft()).await.expect("create succeeds");
    assert_eq!(created.id, 42);

    // The store reflects the post-create server list, not an appended
    // draft — and the refetch already completed before create returned.
    let ids: Vec<i64> = console.store().conditioners().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 42]);
    assert!(!console.saving());

    let toasts = console.notifier().active();
    assert_eq!(toasts[0].kind, NotificationKind::Success);
    assert_eq!(toasts[0].message, "Conditioner created successfully");
}

#[tokio::test]
async fn failed_create_raises_the_server_message_and_changes_nothing() {
    let (server, console) = setup().await;

    Mock::given(method("GET"))
        .and(path("/conditioners"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([unit_json(1, "Unit A")])),
        )
        .expect(1)
        .mount(&server)
        .await;
    console.ensure_loaded().await;

    Mock::given(method("POST"))
        .and(path("/conditioners"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "message": "Serial number already exists"
        })))
        .mount(&server)
        .await;

    let err = console.create(&draft()).await.expect_err("create must fail");
    assert_eq!(err.user_message(), "Serial number already exists");

    // No optimistic insert, no refetch (the GET mock's expect(1) holds),
    // and the saving flag is back down so the caller can retry.
    assert_eq!(console.store().conditioners().len(), 1);
    assert!(!console.saving());

    let toasts = console.notifier().active();
    assert_eq!(toasts.last().map(|t| t.kind), Some(NotificationKind::Error));
    assert_eq!(
        toasts.last().map(|t| t.message.clone()),
        Some("Serial number already exists".into())
    );
}

#[tokio::test]
async fn delete_refreshes_the_list_after_success() {
    let (server, console) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/conditioners/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/conditioners"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    console.delete(1).await.expect("delete succeeds");
    assert!(console.store().conditioners().is_empty());
}

#[tokio::test]
async fn update_failure_keeps_the_confirming_caller_in_charge() {
    let (server, console) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/conditioners/7"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = console.update(7, &draft()).await.expect_err("update must fail");
    // Normalized fallback message when the body carries no `message`.
    assert_eq!(err.user_message(), "Server error: 404");
    assert!(!console.saving());
}

#[tokio::test]
async fn fetch_one_bypasses_the_store() {
    let (server, console) = setup().await;

    Mock::given(method("GET"))
        .and(path("/conditioners/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(unit_json(5, "Solo")))
        .mount(&server)
        .await;

    let one = console.fetch_one(5).await.expect("fetch_one succeeds");
    assert_eq!(one.id, 5);
    assert_eq!(one.name.as_deref(), Some("Solo"));
    assert!(console.store().conditioners().is_empty());
}
