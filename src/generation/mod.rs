//! Text generation: prompt construction and the upstream model client.
//!
//! - [`prompt`]: Fixed triage prompt template
//! - [`adapter`]: One-shot request → prompt → reply orchestration
//! - [`gemini`]: Gemini REST client implementing [`TextGenerator`]

pub mod adapter;
pub mod gemini;
pub mod prompt;

use async_trait::async_trait;

use crate::error::GenerationError;

/// A backend that turns a single prompt into a single text reply.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Model identifier this backend calls.
    fn model(&self) -> &str;

    /// Issue exactly one generation call for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
