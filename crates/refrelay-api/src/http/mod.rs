//! HTTP interface module.
//!
//! - Health check
//! - LLM invocation
//! - Reference filter and update passthrough

pub mod health;
pub mod llm;
pub mod references;
pub mod routes;
