//! # refrelay API
//!
//! External HTTP surface for the relay.
//!
//! - **LLM**: `POST /api/llm/invoke` forwards a prompt to Gemini or OpenAI
//!   and returns the model output as JSON
//! - **References**: `POST /api/references/filter` and
//!   `POST /api/references/update` pass through to the reference store
//! - **Health**: `GET /`
//!
//! Handlers share one immutable [`AppContext`] built at startup.

pub mod error;
pub mod http;
pub mod server;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use error::ApiError;
pub use http::routes::create_router;
pub use server::{InterfaceConfig, InterfaceServer, cors_layer};
pub use state::{AppContext, ProviderSet};
