//! In-process fakes for router tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Map, Value};

use refrelay_protocols::{
    CompletionProvider, CompletionRequest, OutputMode, ProviderError, ProviderKind,
    ReferenceFilter, ReferenceStore, StoreError,
};

/// Provider returning canned text and recording the last request.
pub struct FakeProvider {
    kind: ProviderKind,
    reply: Option<String>,
    pub last_request: Mutex<Option<CompletionRequest>>,
}

impl FakeProvider {
    pub fn new(kind: ProviderKind, reply: Option<&str>) -> Self {
        Self {
            kind,
            reply: reply.map(str::to_string),
            last_request: Mutex::new(None),
        }
    }

    pub fn google(reply: &str) -> Arc<Self> {
        Arc::new(Self::new(ProviderKind::Google, Some(reply)))
    }

    pub fn openai(reply: &str) -> Arc<Self> {
        Arc::new(Self::new(ProviderKind::OpenAi, Some(reply)))
    }

    /// A provider whose upstream call always fails.
    pub fn failing(kind: ProviderKind) -> Arc<Self> {
        Arc::new(Self::new(kind, None))
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for FakeProvider {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    fn default_model(&self) -> &str {
        "fake-model"
    }

    fn output_mode(&self) -> OutputMode {
        match self.kind {
            ProviderKind::Google => OutputMode::Lenient,
            ProviderKind::OpenAi => OutputMode::Strict,
        }
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError> {
        *self.last_request.lock().unwrap() = Some(request);
        self.reply.clone().ok_or_else(|| ProviderError::ApiError {
            status: 503,
            message: "upstream unavailable".to_string(),
        })
    }
}

/// In-memory reference table.
pub struct FakeStore {
    rows: Mutex<Vec<Value>>,
    broken: bool,
}

impl FakeStore {
    pub fn with_rows(rows: Vec<Value>) -> Arc<Self> {
        Arc::new(Self {
            rows: Mutex::new(rows),
            broken: false,
        })
    }

    pub fn broken() -> Arc<Self> {
        Arc::new(Self {
            rows: Mutex::new(Vec::new()),
            broken: true,
        })
    }

    pub fn rows(&self) -> Vec<Value> {
        self.rows.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.broken {
            return Err(StoreError::Network("connection reset".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ReferenceStore for FakeStore {
    async fn filter(&self, filter: &ReferenceFilter) -> Result<Vec<Value>, StoreError> {
        self.check()?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| filter.matches(row))
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: &Value,
        update: &Map<String, Value>,
    ) -> Result<Option<Value>, StoreError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|row| row.get("id") == Some(id)) else {
            return Ok(None);
        };
        if let Some(object) = row.as_object_mut() {
            for (key, value) in update {
                object.insert(key.clone(), value.clone());
            }
        }
        Ok(Some(row.clone()))
    }
}

/// Send a request through the router and decode the JSON response.
pub async fn send(
    app: axum::Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (axum::http::StatusCode, Value) {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(body) => {
            builder = builder.header("content-type", "application/json");
            Body::from(body.to_string())
        }
        None => Body::empty(),
    };
    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}
