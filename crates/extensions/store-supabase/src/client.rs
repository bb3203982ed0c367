//! PostgREST client for the reference table.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use refrelay_protocols::error::StoreError;
use refrelay_protocols::store::{ReferenceFilter, ReferenceStore};

use crate::query::{eq_param, filter_params};

pub const DEFAULT_TABLE: &str = "references";

/// PostgREST error envelope.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: String,
    #[serde(default)]
    code: Option<String>,
}

/// Supabase-backed [`ReferenceStore`].
pub struct SupabaseStore {
    client: Client,
    base_url: String,
    api_key: String,
    table: String,
}

impl SupabaseStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            table: DEFAULT_TABLE.to_string(),
        }
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Share a preconfigured HTTP client.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }

    async fn rows(response: Response) -> Result<Vec<Value>, StoreError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !status.is_success() {
            let message = match serde_json::from_str::<PostgrestError>(&body) {
                Ok(e) => match e.code {
                    Some(code) => format!("{} ({})", e.message, code),
                    None => e.message,
                },
                Err(_) => body,
            };
            return Err(StoreError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            StoreError::InvalidResponse(format!("expected a JSON array of rows: {}", e))
        })
    }
}

#[async_trait]
impl ReferenceStore for SupabaseStore {
    async fn filter(&self, filter: &ReferenceFilter) -> Result<Vec<Value>, StoreError> {
        let params = filter_params(filter)?;
        debug!(
            "Supabase filter: table={}, conditions={}",
            self.table,
            filter.conditions().len()
        );

        let response = self
            .authorized(self.client.get(self.table_url()))
            .query(&params)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        Self::rows(response).await
    }

    async fn update(&self, id: &Value, update: &Map<String, Value>) -> Result<Option<Value>, StoreError> {
        let target = eq_param("id", id)?;
        debug!("Supabase update: table={}, id={}", self.table, id);

        let response = self
            .authorized(self.client.patch(self.table_url()))
            .header("Prefer", "return=representation")
            .query(&[target])
            .json(update)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        Ok(Self::rows(response).await?.into_iter().next())
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
