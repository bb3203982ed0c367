//! Reference store passthrough handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tracing::info;

use refrelay_protocols::provider::is_blank;
use refrelay_protocols::{ReferenceFilter, ReferenceStore, StoreError};

use crate::error::ApiError;
use crate::state::AppContext;

pub const FILTER_FAILED: &str = "Failed to filter references";
pub const UPDATE_FAILED: &str = "Failed to update reference";

/// Body of `POST /api/references/filter`.
#[derive(Debug, Deserialize)]
pub struct FilterRequest {
    /// Column to required value. Missing or null means no conditions.
    #[serde(default)]
    pub filter: Option<Map<String, Value>>,
}

/// Body of `POST /api/references/update`.
#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    #[serde(default)]
    pub id: Option<Value>,

    #[serde(default)]
    pub update: Option<Value>,
}

impl UpdateRequest {
    /// Extract a non-blank id and non-empty update document.
    fn into_parts(self) -> Option<(Value, Map<String, Value>)> {
        let id = self.id.filter(|id| !is_blank(id))?;
        let update = match self.update? {
            Value::Object(map) if !map.is_empty() => map,
            _ => return None,
        };
        Some((id, update))
    }
}

fn store_for(ctx: &AppContext, context: &'static str) -> Result<Arc<dyn ReferenceStore>, ApiError> {
    ctx.store()
        .cloned()
        .ok_or_else(|| ApiError::upstream(context, StoreError::NotConfigured))
}

/// Return every row matching the equality filter.
pub async fn filter(
    State(ctx): State<Arc<AppContext>>,
    payload: Result<Json<FilterRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload?;
    let filter = ReferenceFilter::from_map(body.filter.unwrap_or_default());
    info!("Filtering references ({} conditions)", filter.conditions().len());

    let store = store_for(&ctx, FILTER_FAILED)?;
    let rows = store
        .filter(&filter)
        .await
        .map_err(|e| ApiError::upstream(FILTER_FAILED, e))?;

    Ok(Json(Value::Array(rows)))
}

/// Patch one row by id and return it, or `{}` when nothing matched.
pub async fn update(
    State(ctx): State<Arc<AppContext>>,
    payload: Result<Json<UpdateRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload?;
    let (id, update) = body
        .into_parts()
        .ok_or_else(|| ApiError::validation("ID and update data required"))?;
    info!("Updating reference {} ({} fields)", id, update.len());

    let store = store_for(&ctx, UPDATE_FAILED)?;
    let row = store
        .update(&id, &update)
        .await
        .map_err(|e| ApiError::upstream(UPDATE_FAILED, e))?;

    Ok(Json(row.unwrap_or_else(|| json!({}))))
}

#[cfg(test)]
#[path = "references_tests.rs"]
mod tests;
