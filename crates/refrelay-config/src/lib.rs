//! # refrelay Config
//!
//! Configuration management for the refrelay relay: a TOML file, overlaid
//! by environment variables, overlaid by CLI flags.

mod env;
mod error;
mod loader;
mod schema;
mod validator;

pub use env::EnvOverrides;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
