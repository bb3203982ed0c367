//! Liveness endpoint.

use axum::Json;
use serde_json::{Value, json};

/// `GET /`. Independent of provider and store availability.
pub async fn hello() -> Json<Value> {
    Json(json!({ "hello": "world" }))
}
