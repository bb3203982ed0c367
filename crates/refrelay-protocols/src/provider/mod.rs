//! LLM Provider protocol definitions.
//!
//! Providers connect to hosted completion APIs (Google Gemini, OpenAI)
//! and turn a prompt into model text.

mod kind;
mod output;
mod request;
mod traits;

pub use kind::*;
pub use output::*;
pub use request::*;
pub use traits::*;
