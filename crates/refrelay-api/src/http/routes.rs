//! HTTP route definitions.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::http::{health, llm, references};
use crate::state::AppContext;

/// Create the relay router.
///
/// ```text
/// GET  /                        - Health check
/// POST /api/llm/invoke          - Prompt a provider, JSON result
/// POST /api/references/filter   - Equality filter over the reference table
/// POST /api/references/update   - Patch one reference by id
/// ```
pub fn create_router(ctx: Arc<AppContext>) -> Router {
    let api_routes = Router::new()
        .route("/llm/invoke", post(llm::invoke))
        .route("/references/filter", post(references::filter))
        .route("/references/update", post(references::update))
        .with_state(ctx);

    Router::new()
        .route("/", get(health::hello))
        .nest("/api", api_routes)
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
