//! # refrelay Protocols
//!
//! Core protocol definitions (traits) for the refrelay relay.
//! Contains only interface definitions - no implementations.
//!
//! ## Core Traits
//!
//! - [`CompletionProvider`] - Trait for LLM provider implementations
//! - [`ReferenceStore`] - Trait for the remote reference table

pub mod error;
pub mod provider;
pub mod store;

// Re-export core traits
pub use provider::{CompletionProvider, CompletionRequest, OutputMode, ProviderKind};
pub use store::{ReferenceFilter, ReferenceStore};
pub use error::{ProviderError, StoreError};
