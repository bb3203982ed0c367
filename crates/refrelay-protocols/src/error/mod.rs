//! Error types for the refrelay protocol layer.

mod provider;
mod store;

pub use provider::*;
pub use store::*;
