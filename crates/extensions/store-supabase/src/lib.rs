//! # refrelay Store - Supabase
//!
//! Reference store backed by a Supabase project's PostgREST endpoint
//! (`{url}/rest/v1/{table}`).

mod client;
mod query;

pub use client::{DEFAULT_TABLE, SupabaseStore};
pub use query::{eq_param, filter_params};
