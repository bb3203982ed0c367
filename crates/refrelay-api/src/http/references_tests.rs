use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::http::routes::create_router;
use crate::state::{AppContext, ProviderSet};
use crate::testing::{FakeStore, send};

fn sample_rows() -> Vec<Value> {
    vec![
        json!({"id": "a", "status": "done", "title": "Attention"}),
        json!({"id": "b", "status": "pending", "title": "BERT"}),
        json!({"id": "c", "status": "done", "title": "CLIP"}),
    ]
}

fn app_with(store: Arc<FakeStore>) -> axum::Router {
    create_router(Arc::new(AppContext::new(ProviderSet::new()).with_store(store)))
}

fn app_without_store() -> axum::Router {
    create_router(Arc::new(AppContext::new(ProviderSet::new())))
}

#[tokio::test]
async fn test_filter_by_status() {
    let app = app_with(FakeStore::with_rows(sample_rows()));
    let body = json!({"filter": {"status": "done"}}).to_string();
    let (status, rows) = send(app, "POST", "/api/references/filter", Some(&body)).await;

    assert_eq!(status, StatusCode::OK);
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r["status"] == "done"));
}

#[tokio::test]
async fn test_filter_null_value_ignored() {
    let app = app_with(FakeStore::with_rows(sample_rows()));
    let body = json!({"filter": {"status": null}}).to_string();
    let (status, rows) = send(app, "POST", "/api/references/filter", Some(&body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_filter_missing_or_null_returns_all() {
    for body in [json!({}), json!({"filter": null})] {
        let app = app_with(FakeStore::with_rows(sample_rows()));
        let (status, rows) =
            send(app, "POST", "/api/references/filter", Some(&body.to_string())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(rows.as_array().unwrap().len(), 3);
    }
}

#[tokio::test]
async fn test_filter_no_match_is_empty_array() {
    let app = app_with(FakeStore::with_rows(sample_rows()));
    let body = json!({"filter": {"status": "archived"}}).to_string();
    let (status, rows) = send(app, "POST", "/api/references/filter", Some(&body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows, json!([]));
}

#[tokio::test]
async fn test_filter_store_failure() {
    let app = app_with(FakeStore::broken());
    let body = json!({"filter": {}}).to_string();
    let (status, body) = send(app, "POST", "/api/references/filter", Some(&body)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to filter references"}));
}

#[tokio::test]
async fn test_filter_without_store() {
    let body = json!({"filter": {}}).to_string();
    let (status, body) = send(app_without_store(), "POST", "/api/references/filter", Some(&body)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to filter references");
}

#[tokio::test]
async fn test_update_requires_update() {
    let app = app_with(FakeStore::with_rows(sample_rows()));
    let body = json!({"id": "x"}).to_string();
    let (status, body) = send(app, "POST", "/api/references/update", Some(&body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "ID and update data required"}));
}

#[tokio::test]
async fn test_update_rejects_bad_parts() {
    let cases = [
        json!({"update": {"status": "done"}}),
        json!({"id": null, "update": {"status": "done"}}),
        json!({"id": "", "update": {"status": "done"}}),
        json!({"id": 0, "update": {"status": "done"}}),
        json!({"id": false, "update": {"status": "done"}}),
        json!({"id": {}, "update": {"status": "done"}}),
        json!({"id": "a", "update": null}),
        json!({"id": "a", "update": {}}),
        json!({"id": "a", "update": "done"}),
    ];
    for case in cases {
        let app = app_with(FakeStore::with_rows(sample_rows()));
        let (status, _) =
            send(app, "POST", "/api/references/update", Some(&case.to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "case: {}", case);
    }
}

#[tokio::test]
async fn test_update_modifies_matching_row() {
    let store = FakeStore::with_rows(sample_rows());
    let app = app_with(store.clone());
    let body = json!({"id": "b", "update": {"status": "done"}}).to_string();
    let (status, row) = send(app, "POST", "/api/references/update", Some(&body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(row, json!({"id": "b", "status": "done", "title": "BERT"}));

    let rows = store.rows();
    assert_eq!(rows[0]["status"], "done");
    assert_eq!(rows[1]["status"], "done");
    assert_eq!(rows[2]["title"], "CLIP");
}

#[tokio::test]
async fn test_update_numeric_id() {
    let store = FakeStore::with_rows(vec![json!({"id": 3, "note": ""})]);
    let body = json!({"id": 3, "update": {"note": "read"}}).to_string();
    let (status, row) = send(app_with(store), "POST", "/api/references/update", Some(&body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(row, json!({"id": 3, "note": "read"}));
}

#[tokio::test]
async fn test_update_no_match_is_empty_object() {
    let app = app_with(FakeStore::with_rows(sample_rows()));
    let body = json!({"id": "zzz", "update": {"status": "done"}}).to_string();
    let (status, row) = send(app, "POST", "/api/references/update", Some(&body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(row, json!({}));
}

#[tokio::test]
async fn test_update_store_failure() {
    let app = app_with(FakeStore::broken());
    let body = json!({"id": "a", "update": {"status": "done"}}).to_string();
    let (status, body) = send(app, "POST", "/api/references/update", Some(&body)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to update reference"}));
}
